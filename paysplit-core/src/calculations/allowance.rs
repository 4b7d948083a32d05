//! Tapered personal allowance.
//!
//! The allowance is £12,570 up to £100,000 of total income, then shrinks by
//! £1 for every whole £2 above that, reaching zero at £125,140. The taper
//! is UK-wide and always driven by total income, never by wages alone.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::{ensure_non_negative, non_negative};
use crate::error::SplitError;

pub const BASE_PERSONAL_ALLOWANCE: Decimal = dec!(12570);

/// Total income above which the allowance starts to taper.
pub const TAPER_THRESHOLD: Decimal = dec!(100000);

/// Personal allowance available at `total_income`.
///
/// # Errors
///
/// Returns [`SplitError::NegativeAmount`] if `total_income` is negative.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paysplit_core::personal_allowance;
///
/// assert_eq!(personal_allowance(dec!(60000)).unwrap(), dec!(12570));
/// assert_eq!(personal_allowance(dec!(110000)).unwrap(), dec!(7570));
/// assert_eq!(personal_allowance(dec!(125140)).unwrap(), dec!(0));
/// ```
pub fn personal_allowance(total_income: Decimal) -> Result<Decimal, SplitError> {
    ensure_non_negative("total_income", total_income)?;
    Ok(tapered_allowance(total_income))
}

pub(crate) fn tapered_allowance(total_income: Decimal) -> Decimal {
    if total_income <= TAPER_THRESHOLD {
        return BASE_PERSONAL_ALLOWANCE;
    }
    let reduction = ((total_income - TAPER_THRESHOLD) / Decimal::TWO).floor();
    non_negative(BASE_PERSONAL_ALLOWANCE - reduction)
}
