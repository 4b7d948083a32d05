//! Salary/dividend split optimisation for UK income tax.
//!
//! Given a total income and a jurisdiction, [`optimal_split`] finds the
//! division between wages and dividends that owes the least combined tax.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paysplit_core::{Jurisdiction, optimal_split};
//!
//! let best = optimal_split(dec!(40000), Jurisdiction::England).unwrap();
//!
//! assert_eq!(best.wage + best.dividend, dec!(40000));
//! assert_eq!(best.wage, dec!(12570));
//! ```

pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{
    critical_points, dividend_schedule, dividend_tax, evaluate_split, optimal_split,
    personal_allowance, tax_curve, wage_schedule, wage_tax,
};
pub use error::SplitError;
pub use models::*;
