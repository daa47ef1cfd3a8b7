//! CSV reading with one-shot column type inference.
//!
//! The first row is taken as the header. Fields are trimmed; records
//! shorter than the header are padded with missing cells. After all rows
//! are collected, each column is classified exactly once: if every
//! non-missing field parses as `f64` the column becomes numeric, otherwise
//! categorical. The classification never changes afterwards.

use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::table::{Column, Table};

/// Field values treated as missing, in addition to the empty string.
const MISSING_MARKERS: &[&str] = &["NA", "N/A", "NaN", "nan", "null", "NULL"];

fn is_missing(field: &str) -> bool {
    field.is_empty() || MISSING_MARKERS.contains(&field)
}

/// Read a CSV file into a [`Table`].
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;
    read_csv_from_reader(file)
}

/// Read CSV data from any reader into a [`Table`].
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(Error::Csv)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    // Collect raw fields column-wise; a None marks a missing cell.
    let mut raw_columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for result in rdr.records() {
        let record = result.map_err(Error::Csv)?;
        for (i, raw) in raw_columns.iter_mut().enumerate() {
            match record.get(i) {
                Some(field) if !is_missing(field) => raw.push(Some(field.to_string())),
                // Short records are padded with missing cells.
                _ => raw.push(None),
            }
        }
    }

    let mut table = Table::new();
    for (header, raw) in headers.into_iter().zip(raw_columns) {
        table.add_column(infer_column(header, raw))?;
    }

    log::info!(
        "loaded CSV: {} rows x {} columns",
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}

/// Classify a raw column as numeric or categorical. All-missing columns
/// carry no type evidence and are classified numeric, so they surface in
/// the numeric summary with the absent-statistics fallback.
fn infer_column(name: String, raw: Vec<Option<String>>) -> Column {
    let mut saw_value = false;
    let mut all_numeric = true;
    for field in raw.iter().flatten() {
        saw_value = true;
        if field.parse::<f64>().is_err() {
            all_numeric = false;
            break;
        }
    }

    if all_numeric || !saw_value {
        let values = raw
            .iter()
            .map(|cell| cell.as_ref().and_then(|s| s.parse::<f64>().ok()))
            .collect();
        Column::numeric(name, values)
    } else {
        Column::categorical(name, raw)
    }
}
