//! Error type shared by every fallible `Ratio` operation.

use core::num::ParseIntError;
use thiserror::Error;

/// Failure of a rational construction, mutation or parse.
///
/// Errors are returned to the immediate caller. A mutator that fails leaves
/// its receiver unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatioError {
    /// Normalization was asked to produce a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// The reduced numerator or denominator does not fit the storage integer.
    #[error("rational overflow: reduced value does not fit the storage integer")]
    Overflow,

    /// The numerator or denominator text is not a valid integer.
    #[error("invalid rational literal: {0}")]
    Parse(#[from] ParseIntError),
}

/// Result alias for `Ratio` operations.
pub type Result<T, E = RatioError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(RatioError::DivisionByZero.to_string(), "division by zero");
        let parse = "x".parse::<i32>().unwrap_err();
        let err = RatioError::from(parse.clone());
        assert_eq!(err, RatioError::Parse(parse));
        assert!(err.to_string().starts_with("invalid rational literal"));
    }
}
