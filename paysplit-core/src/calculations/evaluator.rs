//! Banded tax on wages and dividends.
//!
//! Wage tax walks the wage schedule over taxable wages (wages less the
//! personal allowance for the *total* income). Dividend tax stacks the
//! taxable dividend on top of wages: the dividend bands are bounds on
//! total income, so the first dividend pound is taxed at whichever band
//! the wage level already reached.
//!
//! Boundaries are inclusive of the lower band: an amount exactly at a bound
//! is taxed entirely at the lower rate.

use rust_decimal::Decimal;

use crate::calculations::allowance::tapered_allowance;
use crate::calculations::common::{ensure_non_negative, non_negative};
use crate::calculations::schedules::{dividend_schedule, wage_schedule};
use crate::error::SplitError;
use crate::models::{BandSchedule, Jurisdiction};

/// Tax owed on `wage` when the household's total income is `total_income`.
///
/// # Errors
///
/// Returns [`SplitError::NegativeAmount`] if either amount is negative.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paysplit_core::{Jurisdiction, wage_tax};
///
/// let tax = wage_tax(dec!(29570), dec!(32570), Jurisdiction::England).unwrap();
/// assert_eq!(tax, dec!(3400));
/// ```
pub fn wage_tax(
    wage: Decimal,
    total_income: Decimal,
    jurisdiction: Jurisdiction,
) -> Result<Decimal, SplitError> {
    ensure_non_negative("wage", wage)?;
    ensure_non_negative("total_income", total_income)?;
    Ok(banded_wage_tax(
        wage,
        tapered_allowance(total_income),
        &wage_schedule(jurisdiction),
    ))
}

/// Tax owed on `dividend` received on top of `wage`.
///
/// # Errors
///
/// Returns [`SplitError::NegativeAmount`] if either amount is negative.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paysplit_core::{Jurisdiction, dividend_tax};
///
/// let tax = dividend_tax(dec!(3000), dec!(29570), Jurisdiction::England).unwrap();
/// assert_eq!(tax, dec!(218.75));
/// ```
pub fn dividend_tax(
    dividend: Decimal,
    wage: Decimal,
    jurisdiction: Jurisdiction,
) -> Result<Decimal, SplitError> {
    ensure_non_negative("dividend", dividend)?;
    ensure_non_negative("wage", wage)?;
    Ok(stacked_dividend_tax(
        dividend,
        wage,
        &dividend_schedule(jurisdiction),
    ))
}

/// Walks `schedule` over `wage - allowance`, taxing each band's slice.
pub(crate) fn banded_wage_tax(
    wage: Decimal,
    allowance: Decimal,
    schedule: &BandSchedule,
) -> Decimal {
    let taxable = non_negative(wage - allowance);
    let mut owed = Decimal::ZERO;
    let mut taxed_up_to = Decimal::ZERO;

    for band in schedule.bands {
        let ceiling = match band.upper_bound {
            Some(bound) => taxable.min(bound),
            None => taxable,
        };
        let slice = ceiling - taxed_up_to;
        if slice > Decimal::ZERO {
            owed += slice * band.rate;
        }
        match band.upper_bound {
            Some(bound) if bound < taxable => taxed_up_to = bound,
            _ => break,
        }
    }

    owed
}

/// Stacks the taxable dividend above `wage` and taxes it band by band.
pub(crate) fn stacked_dividend_tax(
    dividend: Decimal,
    wage: Decimal,
    schedule: &BandSchedule,
) -> Decimal {
    let mut remaining = non_negative(dividend - schedule.allowance);
    let mut running_total = wage;
    let mut owed = Decimal::ZERO;

    for band in schedule.bands {
        if remaining <= Decimal::ZERO {
            break;
        }
        let in_band = match band.upper_bound {
            Some(bound) => remaining.min(non_negative(bound - running_total)),
            None => remaining,
        };
        if in_band > Decimal::ZERO {
            owed += in_band * band.rate;
            remaining -= in_band;
        }
        // Wages already above this bound skip the band entirely.
        if let Some(bound) = band.upper_bound {
            running_total = running_total.max(bound);
        }
    }

    owed
}
