mod jurisdiction;
mod split;
mod tax_band;

pub use jurisdiction::Jurisdiction;
pub use split::{CurvePoint, OptimalSplit, Split};
pub use tax_band::{BandSchedule, TaxBand};
