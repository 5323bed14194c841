// Output module - Report encodings (JSON, CSV)

pub mod csv;
pub mod json;

use crate::Result;
use crate::inventory::types::InventoryRow;
use std::fmt;
use std::str::FromStr;

/// Report encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportFormat {
    Json,
    Csv,
}

impl ReportFormat {
    /// File extension used in artifact keys
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Json => "application/json",
            ReportFormat::Csv => "text/csv",
        }
    }

    /// Parse a comma-separated selector such as `"json,csv"`
    ///
    /// Items are trimmed and case-insensitive; blanks are skipped and unknown
    /// names are skipped with a warning. The result is deduplicated and
    /// always ordered json before csv.
    pub fn parse_list(selector: &str) -> Vec<ReportFormat> {
        let mut formats: Vec<ReportFormat> = selector
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .filter_map(|item| match item.parse::<ReportFormat>() {
                Ok(format) => Some(format),
                Err(_) => {
                    tracing::warn!("Ignoring unknown report format: {}", item);
                    None
                }
            })
            .collect();

        formats.sort();
        formats.dedup();
        formats
    }

    /// Encode rows in this format
    pub fn encode(&self, rows: &[InventoryRow]) -> Result<Vec<u8>> {
        let body = match self {
            ReportFormat::Json => json::generate_json(rows)?,
            ReportFormat::Csv => csv::generate_csv(rows)?,
        };
        Ok(body.into_bytes())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(format!("unknown report format: {}", other)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
