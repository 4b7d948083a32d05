use paysplit_core::calculations::common::{normalize_amount, round_to_pence};
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a money amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Parses a string into a [`Decimal`] amount of pounds.
///
/// Accepts `52000`, `52,000.50` and `£52,000`. Logs and returns an error
/// when the input is not a number.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    normalize_amount(s).parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Formats an amount as pounds and pence with thousands separators,
/// e.g. `£12,570.00`.
pub fn format_gbp(value: Decimal) -> String {
    let rounded = round_to_pence(value);
    let text = rounded.abs().to_string();
    let (whole, pence) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}£{grouped}.{pence}")
}
