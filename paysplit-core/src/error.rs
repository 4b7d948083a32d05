use rust_decimal::Decimal;
use thiserror::Error;

/// Invalid-argument errors reported by the public calculation functions.
///
/// Every calculation in this crate is pure, so nothing here is transient:
/// an error always means the caller passed a value outside the domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// An income or split amount was below zero.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// A jurisdiction code did not match any known UK tax region.
    #[error("unrecognised jurisdiction '{0}' (expected one of: eng, sco, wal, ni)")]
    UnknownJurisdiction(String),
}
