//! Plain-text export of recorded states.

use crate::types::TimeseriesRecord;
use crate::{ResultsError, ResultsResult};
use gce_model::FIELD_NAMES;
use std::fmt::Write;

/// All fields, one row per record, header from [`FIELD_NAMES`].
pub fn to_csv(records: &[TimeseriesRecord]) -> String {
    let mut csv = FIELD_NAMES.join(",");
    csv.push('\n');
    for record in records {
        let row: Vec<String> = record.to_vector().iter().map(|v| v.to_string()).collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

/// `(t, value)` pairs for a single named field.
pub fn field_series(records: &[TimeseriesRecord], field: &str) -> ResultsResult<Vec<(f64, f64)>> {
    let idx = FIELD_NAMES
        .iter()
        .position(|name| *name == field)
        .ok_or_else(|| ResultsError::UnknownField {
            name: field.to_string(),
        })?;
    Ok(records
        .iter()
        .map(|r| {
            let v = r.to_vector();
            (r.t, v[idx])
        })
        .collect())
}

/// Two-column CSV for one field.
pub fn series_csv(field: &str, series: &[(f64, f64)]) -> String {
    let mut csv = format!("t,{field}\n");
    for (t, v) in series {
        // Writing into a String cannot fail.
        let _ = writeln!(csv, "{t},{v}");
    }
    csv
}
