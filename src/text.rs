//! Text form of a ratio: `N` or `N/D`.

use crate::{Ratio, RatioError, RatioInteger, Result};
use core::fmt;
use core::str::FromStr;

impl<T: RatioInteger> fmt::Display for Ratio<T> {
    /// Renders the bare numerator for integers, `numer/denom` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl<T: RatioInteger> FromStr for Ratio<T> {
    type Err = RatioError;

    /// Parses a single token, ignoring surrounding whitespace.
    ///
    /// Each side of the `/` is parsed with the integer parser of `T`, then the
    /// pair is normalized, so `"6/0"` fails with
    /// [`RatioError::DivisionByZero`] and `"1/x"` with [`RatioError::Parse`].
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        match token.split_once('/') {
            None => Ok(Self::from_integer(token.parse()?)),
            Some((numer, denom)) => Self::new(numer.parse()?, denom.parse()?),
        }
    }
}

impl<T: RatioInteger> Ratio<T> {
    /// Read one whitespace-delimited ratio from the front of `input`.
    ///
    /// Leading whitespace is skipped. Returns the parsed value and the input
    /// left after the token.
    ///
    /// # Examples
    ///
    /// ```
    /// use rational32::Rational;
    ///
    /// let (first, rest) = Rational::read_token("  3/4 -5\n")?;
    /// let (second, rest) = Rational::read_token(rest)?;
    /// assert_eq!(first.to_string(), "3/4");
    /// assert_eq!(second, Rational::from(-5));
    /// assert_eq!(rest, "\n");
    /// # Ok::<(), rational32::RatioError>(())
    /// ```
    pub fn read_token(input: &str) -> Result<(Self, &str)> {
        let input = input.trim_start();
        let end = input
            .find(char::is_whitespace)
            .unwrap_or(input.len());
        let (token, rest) = input.split_at(end);
        Ok((token.parse()?, rest))
    }
}
