//! # Token Amounts and Unit Conversion
//!
//! Tagged token quantities and subunit/main-unit conversion.
//!
//! A token amount is either an integer number of the token's smallest
//! subunit or a decimal number of its main unit. The two are never mixed
//! silently: converting between them requires the token's decimal count
//! and is checked for precision loss and overflow.
//!
//! # Round-trip law
//!
//! For any decimal `x` with at most `d` fractional digits:
//! `to_main_unit(to_subunit(x, d), d) == x`.
//!
//! # Examples
//!
//! ```
//! use pantos_client::domain::value_objects::Amount;
//! use rust_decimal::Decimal;
//!
//! let amount = Amount::main_unit(Decimal::new(150, 2)); // 1.50
//! assert_eq!(amount.to_subunit(8).unwrap(), 150_000_000);
//! ```

use crate::domain::errors::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum supported token decimal count.
///
/// Bounded by the 28-digit scale of [`Decimal`].
pub const MAX_TOKEN_DECIMALS: u32 = 28;

/// A quantity of tokens, tagged by its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Amount {
    /// An integer quantity in the token's smallest subunit.
    Subunit(u64),
    /// A decimal quantity in the token's main unit.
    MainUnit(Decimal),
}

impl Amount {
    /// Creates a subunit amount.
    #[inline]
    #[must_use]
    pub const fn subunit(value: u64) -> Self {
        Self::Subunit(value)
    }

    /// Creates a main-unit amount.
    #[inline]
    #[must_use]
    pub const fn main_unit(value: Decimal) -> Self {
        Self::MainUnit(value)
    }

    /// Converts this amount to the token's smallest subunit.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if the amount is negative,
    /// has more than `decimals` fractional digits, overflows `u64`, or
    /// `decimals` exceeds [`MAX_TOKEN_DECIMALS`].
    pub fn to_subunit(&self, decimals: u32) -> Result<u64, DomainError> {
        validate_decimals(decimals)?;
        match self {
            Self::Subunit(value) => Ok(*value),
            Self::MainUnit(value) => to_subunit(*value, decimals),
        }
    }

    /// Converts this amount to the token's main unit.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if the amount is negative or
    /// `decimals` exceeds [`MAX_TOKEN_DECIMALS`].
    pub fn to_main_unit(&self, decimals: u32) -> Result<Decimal, DomainError> {
        validate_decimals(decimals)?;
        match self {
            Self::Subunit(value) => Ok(to_main_unit(*value, decimals)),
            Self::MainUnit(value) => {
                if value.is_sign_negative() {
                    return Err(DomainError::InvalidAmount(format!(
                        "amount must be non-negative: {value}"
                    )));
                }
                Ok(value.normalize())
            }
        }
    }

    /// Re-tags this amount in the requested unit.
    ///
    /// # Errors
    ///
    /// Propagates the conversion errors of [`Amount::to_subunit`] and
    /// [`Amount::to_main_unit`].
    pub fn in_unit(&self, main_unit: bool, decimals: u32) -> Result<Self, DomainError> {
        if main_unit {
            Ok(Self::MainUnit(self.to_main_unit(decimals)?))
        } else {
            Ok(Self::Subunit(self.to_subunit(decimals)?))
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subunit(value) => write!(f, "{value}"),
            Self::MainUnit(value) => write!(f, "{value}"),
        }
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self::Subunit(value)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::MainUnit(value)
    }
}

/// Converts a main-unit decimal to an integer subunit quantity.
///
/// # Errors
///
/// Returns [`DomainError::InvalidAmount`] if `value` is negative, has more
/// than `decimals` fractional digits, or does not fit in `u64`.
pub fn to_subunit(value: Decimal, decimals: u32) -> Result<u64, DomainError> {
    validate_decimals(decimals)?;
    if value.is_sign_negative() {
        return Err(DomainError::InvalidAmount(format!(
            "amount must be non-negative: {value}"
        )));
    }
    // normalize() strips trailing zeros, so the scale equals the number of
    // significant fractional digits.
    let normalized = value.normalize();
    let scale = normalized.scale();
    if scale > decimals {
        return Err(DomainError::InvalidAmount(format!(
            "amount {value} has more than {decimals} fractional digits"
        )));
    }
    let factor = 10i128
        .checked_pow(decimals - scale)
        .ok_or_else(|| overflow(value, decimals))?;
    let subunit = normalized
        .mantissa()
        .checked_mul(factor)
        .ok_or_else(|| overflow(value, decimals))?;
    u64::try_from(subunit).map_err(|_| overflow(value, decimals))
}

/// Converts an integer subunit quantity to a main-unit decimal.
///
/// `decimals` must not exceed [`MAX_TOKEN_DECIMALS`]; the public entry
/// points validate this before calling.
pub fn to_main_unit(value: u64, decimals: u32) -> Decimal {
    // decimals is validated by callers; the scale bound makes this
    // construction infallible for any u64.
    Decimal::from_i128_with_scale(i128::from(value), decimals).normalize()
}

fn validate_decimals(decimals: u32) -> Result<(), DomainError> {
    if decimals > MAX_TOKEN_DECIMALS {
        return Err(DomainError::InvalidAmount(format!(
            "token decimals {decimals} exceed the supported maximum of {MAX_TOKEN_DECIMALS}"
        )));
    }
    Ok(())
}

fn overflow(value: Decimal, decimals: u32) -> DomainError {
    DomainError::InvalidAmount(format!(
        "amount {value} with {decimals} decimals overflows the subunit range"
    ))
}
