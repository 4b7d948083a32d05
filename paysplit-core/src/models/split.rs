use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Jurisdiction;

/// A division of total income into salary and dividends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub wage: Decimal,
    pub dividend: Decimal,
}

impl Split {
    pub fn total(&self) -> Decimal {
        self.wage + self.dividend
    }
}

/// Tax owed on one split, broken down by income stream.
///
/// A sequence of these taken at consecutive critical points describes the
/// whole tax curve exactly, since tax is linear between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub wage: Decimal,
    pub dividend: Decimal,
    pub wage_tax: Decimal,
    pub dividend_tax: Decimal,
    pub total_tax: Decimal,
}

impl CurvePoint {
    pub fn split(&self) -> Split {
        Split {
            wage: self.wage,
            dividend: self.dividend,
        }
    }
}

/// The cheapest split found for a total income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalSplit {
    pub total_income: Decimal,
    pub jurisdiction: Jurisdiction,
    pub wage: Decimal,
    pub dividend: Decimal,
    pub wage_tax: Decimal,
    pub dividend_tax: Decimal,
    pub total_tax: Decimal,
}

impl OptimalSplit {
    pub(crate) fn from_point(
        total_income: Decimal,
        jurisdiction: Jurisdiction,
        point: CurvePoint,
    ) -> Self {
        Self {
            total_income,
            jurisdiction,
            wage: point.wage,
            dividend: point.dividend,
            wage_tax: point.wage_tax,
            dividend_tax: point.dividend_tax,
            total_tax: point.total_tax,
        }
    }

    pub fn split(&self) -> Split {
        Split {
            wage: self.wage,
            dividend: self.dividend,
        }
    }
}
