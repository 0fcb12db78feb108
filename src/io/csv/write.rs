//! CSV writing operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

use crate::aggregate::{STATE_HEADER, Summary, TOTAL_HEADER};

/// Write a DataFrame to a CSV file.
pub(crate) fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(file)
        .finish(df)
        .with_context(|| format!("[io::csv::write] Failed to write CSV to {:?}", path))
}

/// Build the two-column summary table.
pub(crate) fn summary_frame(summary: &Summary) -> Result<DataFrame> {
    let (states, totals) = summary.rows().iter()
        .map(|row| (row.state.clone(), row.total))
        .unzip::<_, _, Vec<_>, Vec<_>>();

    Ok(DataFrame::new(vec![
        Series::new(STATE_HEADER.into(), states).into(),
        Series::new(TOTAL_HEADER.into(), totals).into(),
    ])?)
}

/// Write the summary as `State,Total EVSEs`, one row per state.
pub(crate) fn write_summary(summary: &Summary, path: &Path) -> Result<()> {
    let mut df = summary_frame(summary)?;
    write_csv(&mut df, path)
}
