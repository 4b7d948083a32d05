//! Band schedules for wage and dividend income.
//!
//! | Schedule                 | Allowance | Bands                                                        |
//! |--------------------------|-----------|--------------------------------------------------------------|
//! | Wage, England/Wales/NI   | 12,570    | 37,700 @ 20%, 125,140 @ 40%, above @ 45%                     |
//! | Wage, Scotland           | 12,570    | 2,827 @ 19%, 14,921 @ 20%, 31,092 @ 21%, 62,430 @ 42%, 125,140 @ 45%, above @ 48% |
//! | Dividend, England/Wales/NI | 500     | 50,270 @ 8.75%, 125,140 @ 33.75%, above @ 39.35%             |
//! | Dividend, Scotland       | 500       | 14,999 @ 8.75%, 43,662 @ 33.75%, above @ 39.35%              |
//!
//! Wage bounds are on taxable income (after the personal allowance).
//! Dividend bounds are on total income, with dividends stacked on top of
//! wages.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{BandSchedule, Jurisdiction, TaxBand};

pub const DIVIDEND_ALLOWANCE: Decimal = dec!(500);

static RUK_WAGE_BANDS: [TaxBand; 3] = [
    TaxBand::new(Some(dec!(37700)), dec!(0.20)),
    TaxBand::new(Some(dec!(125140)), dec!(0.40)),
    TaxBand::new(None, dec!(0.45)),
];

static SCOTTISH_WAGE_BANDS: [TaxBand; 6] = [
    TaxBand::new(Some(dec!(2827)), dec!(0.19)),
    TaxBand::new(Some(dec!(14921)), dec!(0.20)),
    TaxBand::new(Some(dec!(31092)), dec!(0.21)),
    TaxBand::new(Some(dec!(62430)), dec!(0.42)),
    TaxBand::new(Some(dec!(125140)), dec!(0.45)),
    TaxBand::new(None, dec!(0.48)),
];

static RUK_DIVIDEND_BANDS: [TaxBand; 3] = [
    TaxBand::new(Some(dec!(50270)), dec!(0.0875)),
    TaxBand::new(Some(dec!(125140)), dec!(0.3375)),
    TaxBand::new(None, dec!(0.3935)),
];

static SCOTTISH_DIVIDEND_BANDS: [TaxBand; 3] = [
    TaxBand::new(Some(dec!(14999)), dec!(0.0875)),
    TaxBand::new(Some(dec!(43662)), dec!(0.3375)),
    TaxBand::new(None, dec!(0.3935)),
];

/// Wage bands for a jurisdiction.
///
/// The allowance reported here is the untapered base; callers that tax a
/// real income use [`personal_allowance`](super::personal_allowance)
/// instead.
pub fn wage_schedule(jurisdiction: Jurisdiction) -> BandSchedule {
    let bands: &'static [TaxBand] = match jurisdiction {
        Jurisdiction::Scotland => &SCOTTISH_WAGE_BANDS,
        Jurisdiction::England | Jurisdiction::Wales | Jurisdiction::NorthernIreland => {
            &RUK_WAGE_BANDS
        }
    };
    BandSchedule {
        allowance: super::allowance::BASE_PERSONAL_ALLOWANCE,
        bands,
    }
}

/// Dividend bands for a jurisdiction.
pub fn dividend_schedule(jurisdiction: Jurisdiction) -> BandSchedule {
    let bands: &'static [TaxBand] = match jurisdiction {
        Jurisdiction::Scotland => &SCOTTISH_DIVIDEND_BANDS,
        Jurisdiction::England | Jurisdiction::Wales | Jurisdiction::NorthernIreland => {
            &RUK_DIVIDEND_BANDS
        }
    };
    BandSchedule {
        allowance: DIVIDEND_ALLOWANCE,
        bands,
    }
}
