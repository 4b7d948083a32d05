//! Minimal-tax split search over critical wage points.
//!
//! With total income `I` fixed and `dividend = I - wage`, combined tax is a
//! continuous, piecewise-linear function of `wage`. It only changes slope
//! where one of the streams crosses into a new band, so its minimum over
//! `[0, I]` sits on one of those breakpoints or on an end of the range.
//! Evaluating that handful of points gives the exact optimum.
//!
//! # Critical wage points
//!
//! | Point                               | Why the slope changes                         |
//! |-------------------------------------|-----------------------------------------------|
//! | `0`, `I`                            | ends of the range                             |
//! | `PA(I)`                             | wage tax starts                               |
//! | `PA(I) + b` for each wage bound `b` | wage marginal rate steps up                   |
//! | `b` for each dividend bound `b`     | bottom of the dividend stack changes band     |
//! | `100,000` when `I > 100,000`        | allowance taper onset                         |
//! | `I - 500`                           | dividend falls within the dividend allowance  |
//!
//! Only points strictly inside `(0, I)` are added besides the two ends.

use std::iter;

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::calculations::allowance::{TAPER_THRESHOLD, tapered_allowance};
use crate::calculations::common::ensure_non_negative;
use crate::calculations::evaluator::{banded_wage_tax, stacked_dividend_tax};
use crate::calculations::schedules::{dividend_schedule, wage_schedule};
use crate::error::SplitError;
use crate::models::{CurvePoint, Jurisdiction, OptimalSplit};

/// Sorted, de-duplicated wage values at which the tax curve can bend.
///
/// Always contains `0` and `total_income`.
///
/// # Errors
///
/// Returns [`SplitError::NegativeAmount`] if `total_income` is negative.
pub fn critical_points(
    total_income: Decimal,
    jurisdiction: Jurisdiction,
) -> Result<Vec<Decimal>, SplitError> {
    ensure_non_negative("total_income", total_income)?;
    Ok(critical_wages(total_income, jurisdiction))
}

/// Tax breakdown at every critical point, in ascending wage order.
///
/// Joining consecutive points with straight lines reproduces the tax curve
/// exactly, which is what a chart of tax against wage needs.
///
/// # Errors
///
/// Returns [`SplitError::NegativeAmount`] if `total_income` is negative.
pub fn tax_curve(
    total_income: Decimal,
    jurisdiction: Jurisdiction,
) -> Result<Vec<CurvePoint>, SplitError> {
    ensure_non_negative("total_income", total_income)?;
    Ok(curve_through_critical_points(total_income, jurisdiction))
}

/// Tax breakdown for a caller-chosen split.
///
/// # Errors
///
/// Returns [`SplitError::NegativeAmount`] if either amount is negative.
pub fn evaluate_split(
    wage: Decimal,
    dividend: Decimal,
    jurisdiction: Jurisdiction,
) -> Result<CurvePoint, SplitError> {
    ensure_non_negative("wage", wage)?;
    ensure_non_negative("dividend", dividend)?;
    let allowance = tapered_allowance(wage + dividend);
    Ok(evaluate(wage, dividend, allowance, jurisdiction))
}

/// Finds the wage/dividend split of `total_income` with the least tax.
///
/// Ties go to the lowest wage.
///
/// # Errors
///
/// Returns [`SplitError::NegativeAmount`] if `total_income` is negative.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paysplit_core::{Jurisdiction, optimal_split};
///
/// let best = optimal_split(dec!(60000), Jurisdiction::England).unwrap();
///
/// assert_eq!(best.wage + best.dividend, dec!(60000));
/// assert_eq!(best.total_tax, best.wage_tax + best.dividend_tax);
/// ```
pub fn optimal_split(
    total_income: Decimal,
    jurisdiction: Jurisdiction,
) -> Result<OptimalSplit, SplitError> {
    ensure_non_negative("total_income", total_income)?;

    // `min_by_key` keeps the first of equal minima, i.e. the lowest wage.
    let best = curve_through_critical_points(total_income, jurisdiction)
        .into_iter()
        .min_by_key(|point| point.total_tax)
        .unwrap_or_else(|| {
            let allowance = tapered_allowance(total_income);
            evaluate(Decimal::ZERO, total_income, allowance, jurisdiction)
        });

    debug!(
        %total_income,
        %jurisdiction,
        wage = %best.wage,
        dividend = %best.dividend,
        total_tax = %best.total_tax,
        "optimal split selected"
    );
    Ok(OptimalSplit::from_point(total_income, jurisdiction, best))
}

fn critical_wages(
    total_income: Decimal,
    jurisdiction: Jurisdiction,
) -> Vec<Decimal> {
    let allowance = tapered_allowance(total_income);
    let wages = wage_schedule(jurisdiction);
    let dividends = dividend_schedule(jurisdiction);

    let interior = iter::once(allowance)
        .chain(wages.finite_bounds().map(|bound| bound + allowance))
        .chain(dividends.finite_bounds())
        .chain((total_income > TAPER_THRESHOLD).then_some(TAPER_THRESHOLD))
        .chain(iter::once(total_income - dividends.allowance))
        .filter(|wage| *wage > Decimal::ZERO && *wage < total_income);

    let mut points: Vec<Decimal> = [Decimal::ZERO, total_income]
        .into_iter()
        .chain(interior)
        .collect();
    points.sort();
    points.dedup();

    debug!(%total_income, %jurisdiction, ?points, "critical wage points");
    points
}

fn curve_through_critical_points(
    total_income: Decimal,
    jurisdiction: Jurisdiction,
) -> Vec<CurvePoint> {
    let allowance = tapered_allowance(total_income);
    critical_wages(total_income, jurisdiction)
        .into_iter()
        .map(|wage| evaluate(wage, total_income - wage, allowance, jurisdiction))
        .collect()
}

/// `allowance` must be the personal allowance for `wage + dividend`.
fn evaluate(
    wage: Decimal,
    dividend: Decimal,
    allowance: Decimal,
    jurisdiction: Jurisdiction,
) -> CurvePoint {
    let wage_tax = banded_wage_tax(wage, allowance, &wage_schedule(jurisdiction));
    let dividend_tax = stacked_dividend_tax(dividend, wage, &dividend_schedule(jurisdiction));
    let point = CurvePoint {
        wage,
        dividend,
        wage_tax,
        dividend_tax,
        total_tax: wage_tax + dividend_tax,
    };
    trace!(?point, "evaluated split");
    point
}
