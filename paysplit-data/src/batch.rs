//! CSV batch evaluation of optimal salary/dividend splits.
//!
//! ## Input format
//!
//! | Column    | Required | Notes                                                 |
//! |-----------|----------|-------------------------------------------------------|
//! | `income`  | yes      | Total income, e.g. `40000`, `"40,000.50"`, `£52000`   |
//! | `country` | no       | `eng`, `sco`, `wal` or `ni`; empty or absent = `eng`  |
//!
//! ## Output format
//!
//! `income,country,wage,dividend,wage_tax,dividend_tax,total_tax`, one row per
//! input row in file order, every amount rounded half-up to pence.

use std::io::{Read, Write};

use paysplit_core::calculations::common::{normalize_amount, round_to_pence};
use paysplit_core::{Jurisdiction, OptimalSplit, SplitError, optimal_split};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when processing a batch of incomes.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("CSV write error: {0}")]
    CsvWrite(String),

    /// `row` is 1-based and excludes the header.
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: SplitError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for BatchError {
    fn from(err: csv::Error) -> Self {
        BatchError::CsvParse(err.to_string())
    }
}

/// A single record from the incomes CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IncomeRecord {
    #[serde(deserialize_with = "deserialize_amount")]
    pub income: Decimal,
    #[serde(default, deserialize_with = "deserialize_optional_code")]
    pub country: Option<String>,
}

/// One output row: the optimal split for an [`IncomeRecord`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SplitRecord {
    pub income: Decimal,
    pub country: Jurisdiction,
    pub wage: Decimal,
    pub dividend: Decimal,
    pub wage_tax: Decimal,
    pub dividend_tax: Decimal,
    pub total_tax: Decimal,
}

impl From<&OptimalSplit> for SplitRecord {
    fn from(best: &OptimalSplit) -> Self {
        Self {
            income: round_to_pence(best.total_income),
            country: best.jurisdiction,
            wage: round_to_pence(best.wage),
            dividend: round_to_pence(best.dividend),
            wage_tax: round_to_pence(best.wage_tax),
            dividend_tax: round_to_pence(best.dividend_tax),
            total_tax: round_to_pence(best.total_tax),
        }
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    normalize_amount(&s)
        .parse::<Decimal>()
        .map_err(|e| serde::de::Error::custom(format!("invalid amount '{s}': {e}")))
}

fn deserialize_optional_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Reads incomes from CSV, finds each optimal split and writes the results.
pub struct SplitBatch;

impl SplitBatch {
    /// Parse income records from a CSV reader.
    ///
    /// Whitespace around values is ignored. Rows are returned in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<IncomeRecord>, BatchError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: IncomeRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Find the optimal split for every record.
    ///
    /// Stops at the first row with an unknown country or negative income.
    pub fn evaluate(records: &[IncomeRecord]) -> Result<Vec<SplitRecord>, BatchError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let row = index + 1;
                let invalid = |source: SplitError| {
                    warn!(row, error = %source, "rejected batch row");
                    BatchError::InvalidRow { row, source }
                };

                let jurisdiction = record
                    .country
                    .as_deref()
                    .map(Jurisdiction::parse)
                    .transpose()
                    .map_err(invalid)?
                    .unwrap_or_default();
                let best = optimal_split(record.income, jurisdiction).map_err(invalid)?;

                debug!(row, income = %record.income, %jurisdiction, "evaluated batch row");
                Ok(SplitRecord::from(&best))
            })
            .collect()
    }

    /// Write split records as CSV, returning the number of rows written.
    pub fn write<W: Write>(
        writer: W,
        records: &[SplitRecord],
    ) -> Result<usize, BatchError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for record in records {
            csv_writer
                .serialize(record)
                .map_err(|e| BatchError::CsvWrite(e.to_string()))?;
        }
        csv_writer.flush()?;

        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const HEADER: &str = "income,country\n";

    fn parse(body: &str) -> Result<Vec<IncomeRecord>, BatchError> {
        SplitBatch::parse(format!("{HEADER}{body}").as_bytes())
    }

    // =========================================================================
    // parse tests
    // =========================================================================

    #[test]
    fn test_parse_single_record() {
        let records = parse("40000,eng").expect("Failed to parse CSV");

        assert_eq!(
            records,
            vec![IncomeRecord {
                income: dec!(40000),
                country: Some("eng".to_string()),
            }]
        );
    }

    #[test]
    fn test_parse_trims_whitespace_and_separators() {
        let records = parse("\"£52,345.67\",  sco ").expect("Failed to parse CSV");

        assert_eq!(records[0].income, dec!(52345.67));
        assert_eq!(records[0].country.as_deref(), Some("sco"));
    }

    #[test]
    fn test_parse_accepts_space_after_pound_sign() {
        let records = parse("\"£ 40,000\",eng").expect("Failed to parse CSV");

        assert_eq!(records[0].income, dec!(40000));
    }

    #[test]
    fn test_parse_empty_country_is_none() {
        let records = parse("30000,\n").expect("Failed to parse CSV");

        assert_eq!(records[0].country, None);
    }

    #[test]
    fn test_parse_without_country_column() {
        let records = SplitBatch::parse("income\n12000\n99000\n".as_bytes())
            .expect("Failed to parse CSV");

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.country.is_none()));
    }

    #[test]
    fn test_parse_invalid_amount() {
        let err = parse("lots,eng").expect_err("Should fail for invalid amount");

        let BatchError::CsvParse(msg) = err else {
            panic!("Expected CsvParse error, got: {:?}", err);
        };
        assert!(msg.contains("invalid amount"), "got: {}", msg);
    }

    #[test]
    fn test_parse_empty_csv() {
        let records = parse("").expect("Failed to parse CSV");

        assert!(records.is_empty());
    }

    // =========================================================================
    // evaluate tests
    // =========================================================================

    #[test]
    fn test_evaluate_defaults_to_england() {
        let records = vec![IncomeRecord {
            income: dec!(40000),
            country: None,
        }];

        let splits = SplitBatch::evaluate(&records).expect("Failed to evaluate");

        assert_eq!(splits[0].country, Jurisdiction::England);
        assert_eq!(splits[0].wage, dec!(12570));
        assert_eq!(splits[0].dividend, dec!(27430));
        assert_eq!(splits[0].total_tax, dec!(2356.38));
    }

    #[test]
    fn test_evaluate_reports_row_of_unknown_country() {
        let records = parse("40000,eng\n50000,fra").unwrap();

        let err = SplitBatch::evaluate(&records).expect_err("Should reject country");

        match err {
            BatchError::InvalidRow { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(source, SplitError::UnknownJurisdiction("fra".to_string()));
            }
            other => panic!("expected InvalidRow, got {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_rejects_negative_income() {
        let records = parse("-5,eng").unwrap();

        let err = SplitBatch::evaluate(&records).expect_err("Should reject income");

        assert!(matches!(err, BatchError::InvalidRow { row: 1, .. }));
    }

    // =========================================================================
    // write tests
    // =========================================================================

    #[test]
    fn test_write_emits_header_and_pence() {
        let records = parse("32570,wal").unwrap();
        let splits = SplitBatch::evaluate(&records).unwrap();
        let mut out = Vec::new();

        let written = SplitBatch::write(&mut out, &splits).expect("Failed to write");

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(written, 1);
        assert_eq!(
            lines.next(),
            Some("income,country,wage,dividend,wage_tax,dividend_tax,total_tax")
        );
        assert!(lines.next().unwrap().starts_with("32570.00,wal,"));
    }
}
