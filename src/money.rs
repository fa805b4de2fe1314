//! Monetary amounts backed by `rust_decimal`.
//!
//! Values are never rescaled while they flow through the pipeline, so a
//! share such as `100 / 3` keeps the full 28 significant digits. Rounding
//! happens only in [`fmt::Display`], which the balance report uses.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// An unrounded amount of money.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use settlement::Money;
///
/// let share = Money::from_str("100").unwrap().split(3);
/// assert_eq!(share.to_string(), "33.3333");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Decimal places shown when a value is displayed.
    pub const DISPLAY_SCALE: u32 = 4;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Returns `true` if this value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds `rhs`, returning `None` past `Decimal::MAX`.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Divides evenly between `parts` people with full precision.
    ///
    /// `parts` must be non-zero; callers validate this first.
    pub fn split(self, parts: usize) -> Self {
        Money(self.0 / Decimal::from(parts))
    }

    /// Rounds to `dp` decimal places, folding negative zero into zero.
    pub fn round_dp(self, dp: u32) -> Self {
        let rounded = self.0.round_dp(dp);
        if rounded.is_zero() {
            Money::ZERO
        } else {
            Money(rounded)
        }
    }

    /// Full-precision rendering without trailing zeros, for audit output.
    pub fn to_exact_string(&self) -> String {
        self.0.normalize().to_string()
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_dp(Self::DISPLAY_SCALE);
        write!(f, "{:.4}", rounded.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_exact_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_str(&s).map_err(serde::de::Error::custom)
    }
}
