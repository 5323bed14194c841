// CSV Output Module

use crate::Result;
use crate::constants::{CSV_HEADERS, CSV_LIST_SEPARATOR};
use crate::error::InventoryError;
use crate::inventory::types::InventoryRow;
use ::csv::{Terminator, WriterBuilder};

/// Generate the CSV report
///
/// Columns follow `CSV_HEADERS`. List columns are joined with `;` (not
/// escaped further), booleans are written `True`/`False`, and records end in
/// CRLF. An empty row set produces an empty string with no header.
pub fn generate_csv(rows: &[InventoryRow]) -> Result<String> {
    if rows.is_empty() {
        return Ok(String::new());
    }

    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(vec![]);

    wtr.write_record(CSV_HEADERS).map_err(InventoryError::from)?;

    for row in rows {
        wtr.write_record(csv_record(row))
            .map_err(InventoryError::from)?;
    }

    let data = wtr.into_inner().map_err(InventoryError::from)?;
    Ok(String::from_utf8(data).map_err(|e| InventoryError::Encoding {
        format: "csv".to_string(),
        message: e.to_string(),
    })?)
}

fn csv_record(row: &InventoryRow) -> [String; 13] {
    [
        row.arn.clone(),
        row.domain_name.clone(),
        row.status.clone(),
        row.not_before.clone(),
        row.not_after.clone(),
        row.visibility_str().to_string(),
        row.source_str().to_string(),
        csv_bool(row.expiring_in_30d).to_string(),
        csv_bool(row.is_expired).to_string(),
        row.subject_alt_names.join(CSV_LIST_SEPARATOR),
        row.in_use_by.join(CSV_LIST_SEPARATOR),
        row.issuer.clone(),
        row.key_algorithm.clone(),
    ]
}

fn csv_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
