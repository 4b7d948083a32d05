//! Rendering of an optimal split for the terminal.

use clap::ValueEnum;
use paysplit_core::calculations::common::round_to_pence;
use paysplit_core::{CurvePoint, OptimalSplit};
use serde::{Deserialize, Serialize};

use crate::amount::format_gbp;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    optimum: OptimalSplit,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    curve: Vec<CurvePoint>,
}

fn rounded_split(best: &OptimalSplit) -> OptimalSplit {
    OptimalSplit {
        total_income: round_to_pence(best.total_income),
        jurisdiction: best.jurisdiction,
        wage: round_to_pence(best.wage),
        dividend: round_to_pence(best.dividend),
        wage_tax: round_to_pence(best.wage_tax),
        dividend_tax: round_to_pence(best.dividend_tax),
        total_tax: round_to_pence(best.total_tax),
    }
}

fn rounded_point(point: &CurvePoint) -> CurvePoint {
    CurvePoint {
        wage: round_to_pence(point.wage),
        dividend: round_to_pence(point.dividend),
        wage_tax: round_to_pence(point.wage_tax),
        dividend_tax: round_to_pence(point.dividend_tax),
        total_tax: round_to_pence(point.total_tax),
    }
}

/// Plain-text report; the curve table is appended when `curve` is given.
pub fn render_text(
    best: &OptimalSplit,
    curve: Option<&[CurvePoint]>,
) -> String {
    let mut out = format!(
        "For {} in {}, optimum split:\n\
         Wages: {}\n\
         Dividends: {}\n\
         Estimated combined tax: {}",
        format_gbp(best.total_income),
        best.jurisdiction.as_str().to_uppercase(),
        format_gbp(best.wage),
        format_gbp(best.dividend),
        format_gbp(best.total_tax),
    );

    if let Some(points) = curve {
        out.push_str("\n\nTax at each critical point:\n");
        out.push_str(&format!(
            "  {:>15} {:>15} {:>13} {:>13} {:>13}",
            "Wages", "Dividends", "Wage tax", "Dividend tax", "Total tax"
        ));
        for point in points {
            let marker = if point.wage == best.wage { '*' } else { ' ' };
            out.push_str(&format!(
                "\n{marker} {:>15} {:>15} {:>13} {:>13} {:>13}",
                format_gbp(point.wage),
                format_gbp(point.dividend),
                format_gbp(point.wage_tax),
                format_gbp(point.dividend_tax),
                format_gbp(point.total_tax),
            ));
        }
    }

    out
}

/// Pretty JSON report with every amount rounded to pence.
pub fn render_json(
    best: &OptimalSplit,
    curve: Option<&[CurvePoint]>,
) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        optimum: rounded_split(best),
        curve: curve
            .unwrap_or_default()
            .iter()
            .map(rounded_point)
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}
