// Report - decoded entry with provenance, rendered as text, JSON or CSV

use crate::account::{AccountNumber, EntryStatus};
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

// ============================================================================
// DECODED ENTRY
// ============================================================================

/// DecodedEntry - what one decode produced, and where the input came from
#[derive(Debug, Clone, Serialize)]
pub struct DecodedEntry {
    /// File name or "-" for stdin
    pub source: String,
    pub account: String,
    pub status: EntryStatus,
    /// Zero-based positions of unreadable digits
    pub unrecognized: Vec<usize>,
    pub decoded_at: DateTime<Utc>,
}

impl DecodedEntry {
    pub fn new(source: &str, account: &AccountNumber, placeholder: char) -> Self {
        DecodedEntry {
            source: source.to_string(),
            account: account.render(placeholder),
            status: account.status(),
            unrecognized: account.unrecognized_positions(),
            decoded_at: Utc::now(),
        }
    }

    /// True when a person has to look at the scan
    pub fn needs_review(&self) -> bool {
        self.status == EntryStatus::Illegible
    }
}

/// Flat row for CSV output (the csv crate cannot write sequences)
#[derive(Serialize)]
struct CsvRow<'a> {
    source: &'a str,
    account: &'a str,
    status: &'a str,
    unrecognized: String,
    decoded_at: String,
}

// ============================================================================
// OUTPUT FORMAT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(anyhow!("Unknown output format: {} (expected text, json or csv)", other)),
        }
    }
}

/// Render a decoded entry
///
/// - Text: `123456789 OK` / `12345678? ILL`
/// - Json: pretty-printed object
/// - Csv: header line plus one record
pub fn render(entry: &DecodedEntry, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{} {}", entry.account, entry.status.code())),
        OutputFormat::Json => {
            serde_json::to_string_pretty(entry).context("Failed to serialize entry as JSON")
        }
        OutputFormat::Csv => render_csv(entry),
    }
}

fn render_csv(entry: &DecodedEntry) -> Result<String> {
    let unrecognized = entry
        .unrecognized
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(";");

    let row = CsvRow {
        source: &entry.source,
        account: &entry.account,
        status: entry.status.code(),
        unrecognized,
        decoded_at: entry.decoded_at.to_rfc3339(),
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(&row).context("Failed to write CSV record")?;
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV output: {}", e))?;

    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::DigitOutcome::{Digit, Unrecognized};

    fn legible() -> AccountNumber {
        AccountNumber::new([
            Digit(4), Digit(9), Digit(0), Digit(0), Digit(6),
            Digit(7), Digit(7), Digit(1), Digit(5),
        ])
    }

    fn illegible() -> AccountNumber {
        AccountNumber::new([
            Digit(1), Digit(2), Digit(3), Digit(4), Digit(5),
            Digit(6), Unrecognized, Digit(8), Unrecognized,
        ])
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_legible() {
        let entry = DecodedEntry::new("scan.txt", &legible(), '?');
        assert_eq!(render(&entry, OutputFormat::Text).unwrap(), "490067715 OK");
        assert!(!entry.needs_review());
    }

    #[test]
    fn test_text_illegible_uses_placeholder() {
        let entry = DecodedEntry::new("scan.txt", &illegible(), '*');
        assert_eq!(render(&entry, OutputFormat::Text).unwrap(), "123456*8* ILL");
        assert!(entry.needs_review());
        assert_eq!(entry.unrecognized, vec![6, 8]);
    }

    #[test]
    fn test_json_fields() {
        let entry = DecodedEntry::new("scan.txt", &illegible(), '?');
        let json = render(&entry, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "scan.txt");
        assert_eq!(value["account"], "123456?8?");
        assert_eq!(value["status"], "ILL");
        assert_eq!(value["unrecognized"], serde_json::json!([6, 8]));
        assert!(value["decoded_at"].is_string());
    }

    #[test]
    fn test_json_status_matches_text_marker() {
        let entry = DecodedEntry::new("scan.txt", &legible(), '?');
        let json = render(&entry, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "OK");
    }

    #[test]
    fn test_csv_has_header_and_record() {
        let entry = DecodedEntry::new("scan.txt", &illegible(), '?');
        let out = render(&entry, OutputFormat::Csv).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["source", "account", "status", "unrecognized", "decoded_at"]
        );

        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.get(0), Some("scan.txt"));
        assert_eq!(record.get(1), Some("123456?8?"));
        assert_eq!(record.get(2), Some("ILL"));
        assert_eq!(record.get(3), Some("6;8"));
    }
}
