//! Tax calculation modules for salary/dividend split optimisation.
//!
//! This module provides the band schedules, the personal allowance taper,
//! the per-stream tax evaluators and the critical-point optimiser built on
//! top of them.

pub mod allowance;
pub mod common;
pub mod evaluator;
pub mod optimizer;
pub mod schedules;

pub use allowance::personal_allowance;
pub use evaluator::{dividend_tax, wage_tax};
pub use optimizer::{critical_points, evaluate_split, optimal_split, tax_curve};
pub use schedules::{dividend_schedule, wage_schedule};
