//! CSV reading operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result, bail, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::CsvReadOptions};
use tracing::warn;

use crate::{config::ColumnMap, join::StateValues, station::{StationRecord, parse_count}};

/// Reads a delimited file with a header row, keeping every column as text.
pub(crate) fn read_csv_as_text(path: &Path, delimiter: char) -> Result<DataFrame> {
    ensure!(delimiter.is_ascii(), "[io::csv::read] Delimiter {delimiter:?} must be a single ASCII character");

    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReadOptions::default()
        .with_has_header(true)
        .map_parse_options(|po| po.with_separator(delimiter as u8))
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Fail with every absent column named, before any row is processed.
pub(crate) fn require_columns(df: &DataFrame, names: &[&str], path: &Path) -> Result<()> {
    let missing = names.iter()
        .filter(|name| df.column(name).is_err())
        .map(|name| format!("{name:?}"))
        .collect::<Vec<_>>();

    if !missing.is_empty() {
        bail!("[io::csv::read] {} is missing required column(s): {}", path.display(), missing.join(", "));
    }
    Ok(())
}

/// Borrow a text column as one optional string per row.
fn text_column<'a>(df: &'a DataFrame, name: &str) -> Result<Vec<Option<&'a str>>> {
    let column = df.column(name)
        .with_context(|| format!("[io::csv::read] Missing column {name:?}"))?;
    let values = column.str()
        .with_context(|| format!("[io::csv::read] Column {name:?} is not text"))?;
    Ok(values.into_iter().collect())
}

/// Read the facility dataset into station records.
pub(crate) fn read_station_file(path: &Path, columns: &ColumnMap, delimiter: char) -> Result<Vec<StationRecord>> {
    let df = read_csv_as_text(path, delimiter)?;
    require_columns(&df, &columns.required(), path)?;
    read_station_records(&df, columns)
}

/// Convert a text DataFrame into station records using the given column names.
pub(crate) fn read_station_records(df: &DataFrame, columns: &ColumnMap) -> Result<Vec<StationRecord>> {
    let states = text_column(df, &columns.state)?;
    let level1 = text_column(df, &columns.level1)?;
    let level2 = text_column(df, &columns.level2)?;
    let dc_fast = text_column(df, &columns.dc_fast)?;
    let notes = text_column(df, &columns.notes)?;

    Ok((0..df.height())
        .map(|i| StationRecord {
            state: states[i].map(str::to_string),
            level1: parse_count(level1[i]),
            level2: parse_count(level2[i]),
            dc_fast: parse_count(dc_fast[i]),
            notes: notes[i].map(str::to_string),
        })
        .collect())
}

/// Read a state summary back as per-state values.
///
/// Empty or non-numeric values are kept as unusable (`None`). Repeated states keep their first row.
pub(crate) fn read_state_values(path: &Path, state_column: &str, value_column: &str) -> Result<StateValues> {
    let df = read_csv_as_text(path, ',')?;
    require_columns(&df, &[state_column, value_column], path)?;

    let states = text_column(&df, state_column)?;
    let values = text_column(&df, value_column)?;

    let mut out = StateValues::new();
    for (state, raw) in states.into_iter().zip(values) {
        let Some(state) = state.map(str::trim).filter(|s| !s.is_empty()) else {
            warn!("[io::csv::read] skipping summary row without a state name");
            continue;
        };

        let value = raw.map(str::trim).and_then(|text| text.parse::<f64>().ok()).filter(|v| !v.is_nan());
        if value.is_none() {
            warn!(state, raw = ?raw, "[io::csv::read] unusable value; state will show as no data");
        }

        if !out.insert(state, value) {
            warn!(state, "[io::csv::read] duplicate summary row ignored");
        }
    }
    Ok(out)
}
