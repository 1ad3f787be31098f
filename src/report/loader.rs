//! CSV report loading

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::report::ReportRow;
use crate::{ReportError, Result};

/// Load every row of the CSV file at `path`.
pub fn load_csv(path: &Path) -> Result<Vec<ReportRow>> {
    let file = File::open(path)?;
    let rows = parse_csv(file)?;
    tracing::debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse CSV content whose first line is the header.
///
/// Records shorter than the header are padded with empty values. Records
/// longer than the header are rejected. When the header repeats a column
/// name, the row keeps one entry for it holding the rightmost value.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<ReportRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        rows.push(build_row(index + 1, &headers, &record)?);
    }

    Ok(rows)
}

fn build_row(
    record_number: usize,
    headers: &StringRecord,
    record: &StringRecord,
) -> Result<ReportRow> {
    if record.len() > headers.len() {
        return Err(ReportError::MalformedRow {
            record: record_number,
            found: record.len(),
            expected: headers.len(),
        });
    }

    let mut fields: Vec<(String, String)> = Vec::with_capacity(headers.len());
    for (i, column) in headers.iter().enumerate() {
        let value = record.get(i).unwrap_or_default().to_string();
        // A repeated column keeps its first position and its last value.
        match fields.iter_mut().find(|(name, _)| name == column) {
            Some((_, existing)) => *existing = value,
            None => fields.push((column.to_string(), value)),
        }
    }

    Ok(ReportRow::new(fields))
}
