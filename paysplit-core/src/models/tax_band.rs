use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of a progressive schedule.
///
/// `upper_bound` is cumulative: a band covers everything above the previous
/// band's bound up to and including its own. `None` marks the open-ended
/// top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBand {
    pub const fn new(
        upper_bound: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self { upper_bound, rate }
    }
}

/// An allowance plus the ordered bands that apply once it is used up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandSchedule {
    pub allowance: Decimal,
    pub bands: &'static [TaxBand],
}

impl BandSchedule {
    /// The finite upper bounds of the schedule, lowest first.
    pub fn finite_bounds(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.bands.iter().filter_map(|band| band.upper_bound)
    }
}
