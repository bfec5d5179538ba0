//! Exact rational-number arithmetic over fixed-width signed integers.
//!
//! This library provides `Ratio<T>`, a rational number stored as a numerator
//! and a denominator of the same primitive signed integer type, always kept in
//! lowest terms with a positive denominator.
//!
//! # Features
//!
//! - **Always normalized**: every constructor, mutator and operator reduces
//! - **Overflow-checked**: intermediates are formed in a wider integer type and
//!   results that do not fit the storage type are reported, never truncated
//! - **Generic over integer width**: `Rational32` (the default `Rational`) and
//!   `Rational64`
//! - **Text form**: `N` or `N/D`, through `Display` and `FromStr`
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use rational32::Rational;
//!
//! let a = Rational::new(1, 2)?;
//! let b = Rational::new(1, 3)?;
//!
//! let sum = a.checked_add(&b)?;
//! assert_eq!(sum.numerator(), 5);
//! assert_eq!(sum.denominator(), 6);
//!
//! // Operators panic where the checked forms return an error.
//! assert_eq!(a * b, Rational::new(1, 6)?);
//! assert!(b < a);
//! # Ok::<(), rational32::RatioError>(())
//! ```
//!
//! ## Normalization
//!
//! ```
//! use rational32::Rational;
//!
//! let r = Rational::new(-3, -9)?;
//! assert_eq!((r.numerator(), r.denominator()), (1, 3));
//! assert_eq!(Rational::new(0, 5)?.denominator(), 1);
//! # Ok::<(), rational32::RatioError>(())
//! ```
//!
//! ## Errors
//!
//! ```
//! use rational32::{RatioError, Rational};
//!
//! assert_eq!(Rational::new(1, 0), Err(RatioError::DivisionByZero));
//!
//! let big = Rational::new(i32::MAX, 1)?;
//! assert_eq!(big.checked_add(&big), Err(RatioError::Overflow));
//! # Ok::<(), rational32::RatioError>(())
//! ```
//!
//! ## Text
//!
//! ```
//! use rational32::Rational;
//!
//! let r: Rational = "6/-8".parse()?;
//! assert_eq!(r.to_string(), "-3/4");
//! assert_eq!("5".parse::<Rational>()?.to_string(), "5");
//! # Ok::<(), rational32::RatioError>(())
//! ```

mod error;
pub mod ratio_trait;
#[cfg(feature = "serde")]
mod serde_impl;
mod text;

pub use crate::error::{RatioError, Result};
pub use crate::ratio_trait::{RatioInteger, WideInteger};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// A rational number in lowest terms.
///
/// # Type Parameter
///
/// `T` must implement [`RatioInteger`], which is provided for `i32` and `i64`.
///
/// # Invariants
///
/// - Denominator is strictly positive; the sign lives in the numerator
/// - Numerator and denominator are coprime
/// - Zero is always represented as `0/1`
///
/// # Examples
///
/// ```
/// use rational32::Ratio;
///
/// let r = Ratio::<i32>::new(4, -8)?;
/// assert_eq!(r.numerator(), -1);
/// assert_eq!(r.denominator(), 2);
/// # Ok::<(), rational32::RatioError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Ratio<T: RatioInteger> {
    numer: T,
    denom: T,
}

impl<T: RatioInteger> Ratio<T> {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a normalized ratio.
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] if `denom` is zero, and
    /// [`RatioError::Overflow`] if moving the sign to the numerator does not
    /// fit (`T::MIN / -1`).
    ///
    /// # Examples
    ///
    /// ```
    /// use rational32::Rational;
    ///
    /// let r = Rational::new(4, 8)?;
    /// assert_eq!((r.numerator(), r.denominator()), (1, 2));
    /// # Ok::<(), rational32::RatioError>(())
    /// ```
    #[inline]
    pub fn new(numer: T, denom: T) -> Result<Self> {
        Self::from_wide(numer.to_wide(), denom.to_wide())
    }

    /// Normalize a wide numerator/denominator pair into a ratio.
    ///
    /// This is the reduction every other operation goes through:
    /// - reject a zero denominator
    /// - map any zero numerator to `0/1`
    /// - divide out the GCD
    /// - move the sign into the numerator, then narrow to `T`
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] for a zero denominator, and
    /// [`RatioError::Overflow`] when the reduced pair does not fit in `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rational32::{RatioError, Rational};
    ///
    /// let r = Rational::from_wide(6_000_000_000, 4_000_000_000)?;
    /// assert_eq!((r.numerator(), r.denominator()), (3, 2));
    ///
    /// assert_eq!(Rational::from_wide(1 << 40, 3), Err(RatioError::Overflow));
    /// # Ok::<(), rational32::RatioError>(())
    /// ```
    pub fn from_wide(numer: T::Wide, denom: T::Wide) -> Result<Self> {
        if denom.is_zero_bool() {
            tracing::trace!(%numer, "rejected zero denominator");
            return Err(RatioError::DivisionByZero);
        }

        if numer.is_zero_bool() {
            return Ok(Self::zero());
        }

        // Reduce before moving the sign, so `Wide::MIN` operands that share a
        // factor never need negating. A gcd of 2^(BITS-1) means MIN/MIN.
        let g = match <T::Wide as WideInteger>::gcd(numer, denom) {
            Some(g) => g,
            None => return Ok(Self::one()),
        };
        let numer = numer.div_exact(&g);
        let denom = denom.div_exact(&g);

        let (numer, denom) = if denom.is_negative_bool() {
            match (numer.neg_checked(), denom.neg_checked()) {
                (Some(n), Some(d)) => (n, d),
                // A reduced `Wide::MIN` has magnitude 2^(BITS-1), beyond any `T`.
                _ => return Err(overflow(numer, denom, "sign move overflows wide type")),
            }
        } else {
            (numer, denom)
        };

        match (T::from_wide_checked(&numer), T::from_wide_checked(&denom)) {
            (Some(numer), Some(denom)) => Ok(Self { numer, denom }),
            _ => Err(overflow(numer, denom, "reduced ratio overflows storage")),
        }
    }

    /// Create `value/1`.
    #[inline(always)]
    pub fn from_integer(value: T) -> Self {
        Self {
            numer: value,
            denom: T::ONE,
        }
    }

    /// Create a ratio representing 0.
    #[inline(always)]
    pub fn zero() -> Self {
        Self {
            numer: T::ZERO,
            denom: T::ONE,
        }
    }

    /// Create a ratio representing 1.
    #[inline(always)]
    pub fn one() -> Self {
        Self {
            numer: T::ONE,
            denom: T::ONE,
        }
    }

    /// Replace the value with the normalization of `numer/denom`.
    ///
    /// On error `self` is left untouched.
    #[inline]
    fn set(&mut self, numer: T::Wide, denom: T::Wide) -> Result<()> {
        *self = Self::from_wide(numer, denom)?;
        Ok(())
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The numerator, carrying the sign.
    #[inline(always)]
    pub fn numerator(&self) -> T {
        self.numer
    }

    /// The denominator, always positive.
    #[inline(always)]
    pub fn denominator(&self) -> T {
        self.denom
    }

    /// Replace the numerator and renormalize against the current denominator.
    ///
    /// Both stored fields may change:
    ///
    /// ```
    /// use rational32::Rational;
    ///
    /// let mut r = Rational::new(1, 4)?;
    /// r.set_numerator(2)?;
    /// assert_eq!((r.numerator(), r.denominator()), (1, 2));
    /// # Ok::<(), rational32::RatioError>(())
    /// ```
    pub fn set_numerator(&mut self, value: T) -> Result<()> {
        self.set(value.to_wide(), self.denom.to_wide())
    }

    /// Replace the denominator and renormalize against the current numerator.
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] if `value` is zero; `self` is unchanged.
    pub fn set_denominator(&mut self, value: T) -> Result<()> {
        self.set(self.numer.to_wide(), value.to_wide())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Check if the ratio is zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero_bool()
    }

    /// Check if the ratio is one.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.numer == T::ONE && self.denom == T::ONE
    }

    /// Check if the ratio represents an integer (denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom == T::ONE
    }

    /// Check if the ratio is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.numer.is_negative_bool() && !self.numer.is_zero_bool()
    }

    /// Check if the ratio is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative_bool()
    }

    /// `-1`, `0` or `1` according to the sign.
    #[inline]
    pub fn signum(&self) -> i8 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Approximate conversion to f64.
    ///
    /// ```
    /// use rational32::Rational;
    ///
    /// assert_eq!(Rational::new(3, 4)?.to_f64(), 0.75);
    /// # Ok::<(), rational32::RatioError>(())
    /// ```
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.numer.to_f64_lossy() / self.denom.to_f64_lossy()
    }

    // ========================================================================
    // UNARY OPERATIONS
    // ========================================================================

    /// Negate the ratio by flipping the numerator's sign.
    ///
    /// # Errors
    ///
    /// [`RatioError::Overflow`] for a numerator of `T::MIN`.
    #[inline]
    pub fn checked_neg(&self) -> Result<Self> {
        let numer = self.numer.to_wide();
        let denom = self.denom.to_wide();
        let negated = numer
            .neg_checked()
            .ok_or_else(|| overflow(numer, denom, "negation overflows wide type"))?;
        Self::from_wide(negated, denom)
    }

    /// Unary plus: the value itself.
    #[inline(always)]
    pub fn pos(&self) -> Self {
        *self
    }

    /// Get the absolute value.
    ///
    /// # Errors
    ///
    /// [`RatioError::Overflow`] for a numerator of `T::MIN`.
    #[inline]
    pub fn abs(&self) -> Result<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(*self)
        }
    }

    /// Get the reciprocal (1/x), normalized like any other construction.
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] if the ratio is zero.
    ///
    /// ```
    /// use rational32::{RatioError, Rational};
    ///
    /// let r = Rational::new(-2, 3)?.recip()?;
    /// assert_eq!((r.numerator(), r.denominator()), (-3, 2));
    /// assert_eq!(Rational::zero().recip(), Err(RatioError::DivisionByZero));
    /// # Ok::<(), rational32::RatioError>(())
    /// ```
    #[inline]
    pub fn recip(&self) -> Result<Self> {
        Self::from_wide(self.denom.to_wide(), self.numer.to_wide())
    }

    // ========================================================================
    // ARITHMETIC - IN PLACE
    // ========================================================================

    /// Add `other` in place.
    ///
    /// Forms `(a.n*b.d + a.d*b.n) / (a.d*b.d)` in the wide type, then
    /// normalizes. On error `self` is unchanged.
    ///
    /// ```
    /// use rational32::Rational;
    ///
    /// let mut r = Rational::new(1, 2)?;
    /// r.try_add_assign(&Rational::new(1, 3)?)?
    ///     .try_add_assign(&Rational::new(1, 6)?)?;
    /// assert!(r.is_one());
    /// # Ok::<(), rational32::RatioError>(())
    /// ```
    pub fn try_add_assign(&mut self, other: &Self) -> Result<&mut Self> {
        let lhs = self.numer.mul_wide(&other.denom);
        let rhs = self.denom.mul_wide(&other.numer);
        let numer = lhs
            .add_checked(&rhs)
            .ok_or_else(|| overflow(lhs, rhs, "sum overflows wide type"))?;
        let denom = self.denom.mul_wide(&other.denom);
        self.set(numer, denom)?;
        Ok(self)
    }

    /// Subtract `other` in place by adding its negation.
    ///
    /// The negation is taken in the wide type, so `other` may hold `T::MIN`.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<&mut Self> {
        let lhs = self.numer.mul_wide(&other.denom);
        let rhs = self.denom.mul_wide(&other.numer);
        let numer = lhs
            .sub_checked(&rhs)
            .ok_or_else(|| overflow(lhs, rhs, "difference overflows wide type"))?;
        let denom = self.denom.mul_wide(&other.denom);
        self.set(numer, denom)?;
        Ok(self)
    }

    /// Multiply by `other` in place: `(a.n*b.n) / (a.d*b.d)`.
    pub fn try_mul_assign(&mut self, other: &Self) -> Result<&mut Self> {
        let numer = self.numer.mul_wide(&other.numer);
        let denom = self.denom.mul_wide(&other.denom);
        self.set(numer, denom)?;
        Ok(self)
    }

    /// Divide by `other` in place, multiplying by its reciprocal.
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] if `other` is zero, since the
    /// reciprocal's denominator is then zero.
    pub fn try_div_assign(&mut self, other: &Self) -> Result<&mut Self> {
        let numer = self.numer.mul_wide(&other.denom);
        let denom = self.denom.mul_wide(&other.numer);
        self.set(numer, denom)?;
        Ok(self)
    }

    // ========================================================================
    // ARITHMETIC - BY VALUE
    // ========================================================================

    /// Add two ratios.
    #[inline]
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let mut ratio = *self;
        ratio.try_add_assign(other)?;
        Ok(ratio)
    }

    /// Subtract another ratio.
    #[inline]
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let mut ratio = *self;
        ratio.try_sub_assign(other)?;
        Ok(ratio)
    }

    /// Multiply two ratios.
    #[inline]
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        let mut ratio = *self;
        ratio.try_mul_assign(other)?;
        Ok(ratio)
    }

    /// Divide by another ratio.
    ///
    /// ```
    /// use rational32::{RatioError, Rational};
    ///
    /// let half = Rational::new(1, 2)?;
    /// assert_eq!(half.checked_div(&Rational::new(1, 4)?)?, Rational::from(2));
    /// assert_eq!(half.checked_div(&Rational::zero()), Err(RatioError::DivisionByZero));
    /// # Ok::<(), rational32::RatioError>(())
    /// ```
    #[inline]
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        let mut ratio = *self;
        ratio.try_div_assign(other)?;
        Ok(ratio)
    }

    // ========================================================================
    // INCREMENT / DECREMENT
    // ========================================================================

    /// Add one in place (`numer += denom`) and return the updated value.
    ///
    /// ```
    /// use rational32::Rational;
    ///
    /// let mut r = Rational::new(1, 2)?;
    /// assert_eq!(*r.increment()?, Rational::new(3, 2)?);
    /// # Ok::<(), rational32::RatioError>(())
    /// ```
    pub fn increment(&mut self) -> Result<&mut Self> {
        let numer = self.numer.to_wide();
        let denom = self.denom.to_wide();
        let bumped = numer
            .add_checked(&denom)
            .ok_or_else(|| overflow(numer, denom, "increment overflows wide type"))?;
        self.set(bumped, denom)?;
        Ok(self)
    }

    /// Subtract one in place (`numer -= denom`) and return the updated value.
    pub fn decrement(&mut self) -> Result<&mut Self> {
        let numer = self.numer.to_wide();
        let denom = self.denom.to_wide();
        let bumped = numer
            .sub_checked(&denom)
            .ok_or_else(|| overflow(numer, denom, "decrement overflows wide type"))?;
        self.set(bumped, denom)?;
        Ok(self)
    }

    /// Add one in place and return the value from before the mutation.
    ///
    /// ```
    /// use rational32::Rational;
    ///
    /// let mut r = Rational::new(1, 2)?;
    /// assert_eq!(r.post_increment()?, Rational::new(1, 2)?);
    /// assert_eq!(r, Rational::new(3, 2)?);
    /// # Ok::<(), rational32::RatioError>(())
    /// ```
    pub fn post_increment(&mut self) -> Result<Self> {
        let saved = *self;
        self.increment()?;
        Ok(saved)
    }

    /// Subtract one in place and return the value from before the mutation.
    pub fn post_decrement(&mut self) -> Result<Self> {
        let saved = *self;
        self.decrement()?;
        Ok(saved)
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl<T: RatioInteger> Default for Ratio<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RatioInteger> From<T> for Ratio<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

/// Record an overflow rejection and build its error.
#[cold]
fn overflow<W: core::fmt::Display>(lhs: W, rhs: W, reason: &'static str) -> RatioError {
    tracing::trace!(%lhs, %rhs, reason, "rejected overflowing ratio");
    RatioError::Overflow
}

/// Unwrap the result of a checked operation inside an operator impl.
///
/// Operators have no error channel; like integer division by zero they panic.
#[track_caller]
#[inline]
fn expect_ratio<R>(result: Result<R>) -> R {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $checked:ident, $assign_imp:ident, $assign_method:ident, $try_assign:ident) => {
        impl<T: RatioInteger> $imp for Ratio<T> {
            type Output = Self;
            #[inline]
            fn $method(self, other: Self) -> Self {
                expect_ratio(Ratio::$checked(&self, &other))
            }
        }

        impl<T: RatioInteger> $imp for &Ratio<T> {
            type Output = Ratio<T>;
            #[inline]
            fn $method(self, other: Self) -> Ratio<T> {
                expect_ratio(Ratio::$checked(self, other))
            }
        }

        impl<T: RatioInteger> $assign_imp for Ratio<T> {
            #[inline]
            fn $assign_method(&mut self, other: Self) {
                expect_ratio(self.$try_assign(&other).map(|_| ()));
            }
        }

        impl<T: RatioInteger> $assign_imp<&Ratio<T>> for Ratio<T> {
            #[inline]
            fn $assign_method(&mut self, other: &Self) {
                expect_ratio(self.$try_assign(other).map(|_| ()));
            }
        }
    };
}

forward_binop!(Add, add, checked_add, AddAssign, add_assign, try_add_assign);
forward_binop!(Sub, sub, checked_sub, SubAssign, sub_assign, try_sub_assign);
forward_binop!(Mul, mul, checked_mul, MulAssign, mul_assign, try_mul_assign);
forward_binop!(Div, div, checked_div, DivAssign, div_assign, try_div_assign);

impl<T: RatioInteger> Neg for Ratio<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        expect_ratio(self.checked_neg())
    }
}

impl<T: RatioInteger> Neg for &Ratio<T> {
    type Output = Ratio<T>;
    #[inline]
    fn neg(self) -> Ratio<T> {
        expect_ratio(self.checked_neg())
    }
}

impl<T: RatioInteger> PartialEq for Ratio<T> {
    fn eq(&self, other: &Self) -> bool {
        self.numer.mul_wide(&other.denom) == other.numer.mul_wide(&self.denom)
    }
}

impl<T: RatioInteger> Eq for Ratio<T> {}

impl<T: RatioInteger> PartialOrd for Ratio<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: RatioInteger> Ord for Ratio<T> {
    /// Cross-multiplied comparison; valid because both denominators are positive.
    fn cmp(&self, other: &Self) -> Ordering {
        self.numer
            .mul_wide(&other.denom)
            .cmp(&other.numer.mul_wide(&self.denom))
    }
}

impl<T: RatioInteger> Hash for Ratio<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Representation is canonical, so equal values hash alike.
        self.numer.hash(state);
        self.denom.hash(state);
    }
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Ratio using 32-bit integers, with 64-bit intermediates.
pub type Rational32 = Ratio<i32>;

/// Ratio using 64-bit integers, with 128-bit intermediates.
pub type Rational64 = Ratio<i64>;

/// The default rational type.
pub type Rational = Rational32;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn r(numer: i32, denom: i32) -> Rational {
        Rational::new(numer, denom).unwrap()
    }

    fn parts(ratio: Rational) -> (i32, i32) {
        (ratio.numerator(), ratio.denominator())
    }

    #[test]
    fn test_default_and_integer() {
        assert_eq!(parts(Rational::default()), (0, 1));
        assert_eq!(parts(Rational::from(-7)), (-7, 1));
        assert_eq!(parts(Rational::from_integer(i32::MIN)), (i32::MIN, 1));
        assert!(Rational::one().is_one());
    }

    #[test]
    fn test_reduction() {
        assert_eq!(parts(r(4, 8)), (1, 2));
        assert_eq!(parts(r(-3, -9)), (1, 3));
        assert_eq!(parts(r(0, 5)), (0, 1));
        assert_eq!(parts(r(0, -5)), (0, 1));
        assert_eq!(parts(r(3, -6)), (-1, 2));
        assert_eq!(parts(r(i32::MIN, i32::MIN)), (1, 1));
    }

    #[test]
    fn test_sign_normalization_overflow() {
        assert_eq!(Rational::new(i32::MIN, -1), Err(RatioError::Overflow));
        assert_eq!(parts(r(i32::MIN, -2)), (1 << 30, 1));
        assert_eq!(parts(r(2, i32::MIN)), (-1, 1 << 30));
        assert_eq!(Rational::new(1, i32::MIN), Err(RatioError::Overflow));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Rational::new(1, 0), Err(RatioError::DivisionByZero));
        assert_eq!(r(1, 2).checked_div(&r(0, 1)), Err(RatioError::DivisionByZero));
        assert_eq!(Rational::from_wide(0, 0), Err(RatioError::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = r(1, 2) / Rational::zero();
    }

    #[test]
    #[should_panic(expected = "rational overflow")]
    fn test_add_operator_panics_on_overflow() {
        let _ = Rational::from(i32::MAX) + Rational::one();
    }

    #[test]
    fn test_setters_renormalize() {
        let mut ratio = r(3, 4);
        ratio.set_numerator(6).unwrap();
        assert_eq!(parts(ratio), (3, 2));

        ratio.set_denominator(-9).unwrap();
        assert_eq!(parts(ratio), (-1, 3));

        assert_eq!(ratio.set_denominator(0), Err(RatioError::DivisionByZero));
        assert_eq!(parts(ratio), (-1, 3));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(r(1, 2) + r(1, 3), r(5, 6));
        assert_eq!(r(2, 3) * r(3, 4), r(1, 2));
        assert_eq!(r(1, 2) - r(1, 2), r(0, 1));
        assert_eq!(r(3, 4) / r(-3, 8), r(-2, 1));
        assert_eq!(&r(1, 6) + &r(1, 3), r(1, 2));
        assert_eq!(parts(r(1, 2) - r(1, 2)), (0, 1));
    }

    #[test]
    fn test_compound_assignment() {
        let mut acc = Rational::zero();
        for denom in 1..=4 {
            acc += r(1, denom);
        }
        assert_eq!(acc, r(25, 12));

        acc -= &r(1, 12);
        acc *= r(3, 1);
        acc /= r(2, 1);
        assert_eq!(acc, r(3, 1));
    }

    #[test]
    fn test_subtract_min_numerator() {
        let min = Rational::from(i32::MIN);
        assert_eq!(min.checked_neg(), Err(RatioError::Overflow));
        assert_eq!(parts(r(-1, 1).checked_sub(&min).unwrap()), (i32::MAX, 1));
    }

    #[test]
    fn test_failed_assign_leaves_value() {
        let mut ratio = Rational::from(i32::MAX);
        let before = ratio;
        assert_eq!(
            ratio.try_mul_assign(&r(2, 1)).map(|v| *v),
            Err(RatioError::Overflow)
        );
        assert_eq!(parts(ratio), parts(before));
    }

    #[test]
    fn test_overflow_only_after_reduction() {
        // The unreduced product does not fit but the reduced one does.
        let a = r(i32::MAX, 2);
        let b = r(2, i32::MAX);
        assert!(a.checked_mul(&b).unwrap().is_one());

        let c = r(i32::MAX, 1);
        let d = r(1, i32::MAX - 1);
        assert_eq!(c.checked_mul(&r(i32::MAX, 1)), Err(RatioError::Overflow));
        assert_eq!(parts(c.checked_mul(&d).unwrap()), (i32::MAX, i32::MAX - 1));
    }

    #[test]
    fn test_unary() {
        assert_eq!(parts(-r(3, 4)), (-3, 4));
        assert_eq!(parts(-&r(-3, 4)), (3, 4));
        assert_eq!(parts(r(-3, 4).abs().unwrap()), (3, 4));
        assert_eq!(Rational::from(i32::MIN).abs(), Err(RatioError::Overflow));
        assert_eq!(parts(r(-2, 3).recip().unwrap()), (-3, 2));
        assert_eq!(Rational::zero().recip(), Err(RatioError::DivisionByZero));
        assert_eq!(parts(r(-5, 7).pos()), (-5, 7));
    }

    #[test]
    fn test_from_wide_min_operands() {
        assert_eq!(parts(Rational::from_wide(i64::MIN, -(1 << 40)).unwrap()), (1 << 23, 1));
        assert_eq!(parts(Rational::from_wide(-(1 << 40), i64::MIN).unwrap()), (1, 1 << 23));
        assert_eq!(parts(Rational::from_wide(i64::MIN, i64::MIN).unwrap()), (1, 1));
        assert_eq!(parts(Rational::from_wide(i64::MIN, 1 << 33).unwrap()), (-(1 << 30), 1));
        assert_eq!(Rational::from_wide(i64::MIN, -1), Err(RatioError::Overflow));
        assert_eq!(Rational::from_wide(3, i64::MIN), Err(RatioError::Overflow));
        assert_eq!(parts(Rational::from_wide(0, i64::MIN).unwrap()), (0, 1));

        let one = Rational64::from_wide(i128::MIN, i128::MIN).unwrap();
        assert!(one.is_one());
        let r = Rational64::from_wide(i128::MIN, -(1 << 70)).unwrap();
        assert_eq!((r.numerator(), r.denominator()), (1 << 57, 1));
    }

    #[test]
    fn test_ordering() {
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < r(1, 2));
        assert!(r(1, 2) >= r(2, 4));
        assert!(r(1, 2) <= r(2, 4));
        assert!(r(2, 3) > r(3, 5));
        assert_ne!(r(1, 2), r(1, 3));
        assert_eq!(r(2, 4), r(1, 2));
        assert_eq!(Rational::from(i32::MIN).cmp(&Rational::from(i32::MAX)), Ordering::Less);
        assert!(r(i32::MAX - 1, i32::MAX) > r(i32::MAX - 2, i32::MAX - 1));
    }

    #[test]
    fn test_hash_matches_eq() {
        let mut set = HashSet::new();
        set.insert(r(1, 2));
        set.insert(r(2, 4));
        set.insert(r(-3, -6));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_increment_decrement() {
        let mut ratio = r(1, 2);
        assert_eq!(*ratio.increment().unwrap(), r(3, 2));

        let before = ratio.post_increment().unwrap();
        assert_eq!(before, r(3, 2));
        assert_eq!(ratio, r(5, 2));

        assert_eq!(*ratio.decrement().unwrap(), r(3, 2));
        assert_eq!(ratio.post_decrement().unwrap(), r(3, 2));
        assert_eq!(ratio, r(1, 2));

        let mut max = Rational::from(i32::MAX);
        assert_eq!(max.post_increment(), Err(RatioError::Overflow));
        assert_eq!(parts(max), (i32::MAX, 1));
    }

    #[test]
    fn test_queries() {
        assert!(r(1, 2).is_positive());
        assert!(r(-1, 2).is_negative());
        assert!(!Rational::zero().is_positive());
        assert_eq!(r(-5, 3).signum(), -1);
        assert_eq!(Rational::zero().signum(), 0);
        assert!(r(6, 3).is_integer());
        assert_eq!(r(-1, 4).to_f64(), -0.25);
    }

    #[test]
    fn test_rational64_width() {
        let a = Rational64::new(i64::MAX - 1, 3).unwrap();
        assert!(a.is_integer());

        let sum = a.checked_add(&Rational64::new(1, 3).unwrap()).unwrap();
        assert_eq!((sum.numerator(), sum.denominator()), (i64::MAX, 3));
        assert_eq!(
            a.checked_add(&Rational64::new(2, 3).unwrap()),
            Err(RatioError::Overflow)
        );
        assert_eq!(
            Rational64::from(i64::MAX).checked_add(&Rational64::one()),
            Err(RatioError::Overflow)
        );
    }
}
