//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used by the allowance,
//! evaluator and optimiser modules and by the front ends, including
//! rounding to pence, amount normalisation and input validation.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::SplitError;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly half a penny are rounded away from zero. The result
/// always carries a scale of two, so `3400` becomes `3400.00`.
///
/// # Arguments
///
/// * `value` - The decimal value to round
///
/// # Returns
///
/// The value rounded to pence.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paysplit_core::calculations::common::round_to_pence;
///
/// assert_eq!(round_to_pence(dec!(2356.375)), dec!(2356.38));
/// assert_eq!(round_to_pence(dec!(218.754)), dec!(218.75));
/// assert_eq!(round_to_pence(dec!(3400)).to_string(), "3400.00");
/// ```
pub fn round_to_pence(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Normalizes a typed or CSV money amount for parsing.
///
/// Trims whitespace, drops a leading pound sign (and any space after it) and
/// removes commas used as thousands separators.
///
/// # Examples
///
/// ```
/// use paysplit_core::calculations::common::normalize_amount;
///
/// assert_eq!(normalize_amount(" £ 40,000.50 "), "40000.50");
/// assert_eq!(normalize_amount("-5000"), "-5000");
/// ```
pub fn normalize_amount(input: &str) -> String {
    input
        .trim()
        .trim_start_matches('£')
        .trim_start()
        .replace(',', "")
}

/// Clamps a value at zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paysplit_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(-12.50)), dec!(0));
/// assert_eq!(non_negative(dec!(12.50)), dec!(12.50));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    if value > Decimal::ZERO { value } else { Decimal::ZERO }
}

/// Rejects negative amounts at the public boundary.
pub(crate) fn ensure_non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, SplitError> {
    if value < Decimal::ZERO {
        return Err(SplitError::NegativeAmount { field, value });
    }
    Ok(value)
}
