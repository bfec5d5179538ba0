//! Trait system for generic rational arithmetic over fixed-width signed integers.
//!
//! This module provides the traits that let `Ratio<T>` work with any primitive
//! signed integer that has a wider partner type to hold intermediate products.
//!
//! # Architecture
//!
//! The trait system uses two levels:
//!
//! - [`WideInteger`]: Operations needed on intermediate values
//! - [`RatioInteger`]: Storage types for `Ratio<T>`, each naming its `Wide` type
//!
//! # Example
//!
//! ```
//! use rational32::{RatioInteger, WideInteger};
//!
//! let product = 46_341i32.mul_wide(&46_341);
//! assert_eq!(product, 2_147_488_281i64);
//! assert!(i32::from_wide_checked(&product).is_none());
//! assert_eq!(WideInteger::gcd(12i64, 18), Some(6));
//! ```

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::num::ParseIntError;
use core::str::FromStr;

/// Operations for types used in intermediate arithmetic.
///
/// Every `RatioInteger` also implements `WideInteger`, and so does the `Wide`
/// associated type of each `RatioInteger`:
/// - `i32` implements both `WideInteger` and `RatioInteger<Wide = i64>`
/// - `i64` implements both `WideInteger` and `RatioInteger<Wide = i128>`
/// - `i128` implements only `WideInteger`
pub trait WideInteger:
    Copy + Debug + Display + PartialEq + Eq + PartialOrd + Ord + Hash + Send + Sync + 'static
{
    /// Number of bits in this integer type.
    const BITS: u32;

    /// The zero value.
    const ZERO: Self;

    /// The one value.
    const ONE: Self;

    /// Returns `true` if this value is zero.
    fn is_zero_bool(&self) -> bool;

    /// Returns `true` if this value is strictly negative.
    fn is_negative_bool(&self) -> bool;

    /// Add, returning `None` on overflow.
    fn add_checked(&self, other: &Self) -> Option<Self>;

    /// Subtract, returning `None` on overflow.
    fn sub_checked(&self, other: &Self) -> Option<Self>;

    /// Multiply, returning `None` on overflow.
    fn mul_checked(&self, other: &Self) -> Option<Self>;

    /// Negate, returning `None` for the minimum value.
    fn neg_checked(&self) -> Option<Self>;

    /// Divide by a known exact divisor.
    ///
    /// Panics on division by zero.
    fn div_exact(&self, other: &Self) -> Self;

    /// Greatest common divisor of the magnitudes of `a` and `b`.
    ///
    /// Returns `None` when the divisor is `2^(BITS-1)`, which only happens
    /// when both operands are `MIN`, or one is `MIN` and the other zero.
    fn gcd(a: Self, b: Self) -> Option<Self>;
}

/// Integer type suitable for storage in `Ratio<T>`.
///
/// # Associated Type: Wide
///
/// The `Wide` type must hold the product of any two values of `Self`, and the
/// sum of two such products: `Wide::BITS >= Self::BITS * 2`.
pub trait RatioInteger: WideInteger + FromStr<Err = ParseIntError> {
    /// The wide type for intermediate arithmetic.
    type Wide: WideInteger;

    /// Widen without loss.
    fn to_wide(&self) -> Self::Wide;

    /// Narrow a wide value, returning `None` if it does not fit.
    fn from_wide_checked(wide: &Self::Wide) -> Option<Self>;

    /// Full product of two values. Never overflows.
    fn mul_wide(&self, other: &Self) -> Self::Wide;

    /// Lossy conversion used for approximations.
    fn to_f64_lossy(&self) -> f64;
}

macro_rules! impl_wide_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl WideInteger for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline(always)]
                fn is_zero_bool(&self) -> bool {
                    *self == 0
                }

                #[inline(always)]
                fn is_negative_bool(&self) -> bool {
                    *self < 0
                }

                #[inline(always)]
                fn add_checked(&self, other: &Self) -> Option<Self> {
                    self.checked_add(*other)
                }

                #[inline(always)]
                fn sub_checked(&self, other: &Self) -> Option<Self> {
                    self.checked_sub(*other)
                }

                #[inline(always)]
                fn mul_checked(&self, other: &Self) -> Option<Self> {
                    self.checked_mul(*other)
                }

                #[inline(always)]
                fn neg_checked(&self) -> Option<Self> {
                    self.checked_neg()
                }

                #[inline(always)]
                fn div_exact(&self, other: &Self) -> Self {
                    *self / *other
                }

                #[inline]
                fn gcd(a: Self, b: Self) -> Option<Self> {
                    let mut a = a.unsigned_abs();
                    let mut b = b.unsigned_abs();
                    while b != 0 {
                        let temp = b;
                        b = a % b;
                        a = temp;
                    }
                    <$t>::try_from(a).ok()
                }
            }
        )*
    };
}

macro_rules! impl_ratio_integer {
    ($($t:ty => $wide:ty),* $(,)?) => {
        $(
            impl RatioInteger for $t {
                type Wide = $wide;

                #[inline(always)]
                fn to_wide(&self) -> $wide {
                    <$wide>::from(*self)
                }

                #[inline(always)]
                fn from_wide_checked(wide: &$wide) -> Option<Self> {
                    <$t>::try_from(*wide).ok()
                }

                #[inline(always)]
                fn mul_wide(&self, other: &Self) -> $wide {
                    <$wide>::from(*self) * <$wide>::from(*other)
                }

                #[inline(always)]
                fn to_f64_lossy(&self) -> f64 {
                    *self as f64
                }
            }

            const _: () = assert!(<$wide>::BITS >= <$t>::BITS * 2);
        )*
    };
}

impl_wide_integer!(i32, i64, i128);
impl_ratio_integer!(i32 => i64, i64 => i128);
