//! Command-line front end for the salary/dividend optimiser.

pub mod amount;
pub mod config;
pub mod report;

pub use amount::{ParseAmountError, format_gbp, parse_amount};
pub use config::{CliConfig, ConfigError, Settings};
pub use report::{OutputFormat, render_json, render_text};
