//! Stage A: per-state charger totals from the facility dataset.

use std::{collections::BTreeMap, path::Path};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{config::{AggregateConfig, NotesMode}, io, states, station::StationRecord};

/// Header of the state column in the summary file.
pub const STATE_HEADER: &str = "State";
/// Header of the total column in the summary file.
pub const TOTAL_HEADER: &str = "Total EVSEs";

/// Total chargers for one state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateAggregate {
    pub state: String,
    pub total: u64,
}

/// Result of aggregation: one row per state, ordered by state name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    rows: Vec<StateAggregate>,
}

impl Summary {
    #[inline] pub fn rows(&self) -> &[StateAggregate] { &self.rows }

    #[inline] pub fn len(&self) -> usize { self.rows.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Total for a state by full name.
    pub fn get(&self, state: &str) -> Option<u64> {
        self.rows.binary_search_by(|row| row.state.as_str().cmp(state)).ok()
            .map(|i| self.rows[i].total)
    }

    /// Write the two-column summary file.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        io::write_summary(self, path)
    }
}

/// Bookkeeping from an aggregation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregateReport {
    pub rows_read: usize,
    pub rows_counted: usize,
    /// Rows skipped per unrecognised state code (empty string for a missing code).
    pub unmapped: BTreeMap<String, usize>,
    pub states: usize,
    pub grand_total: u64,
}

impl AggregateReport {
    pub fn rows_unmapped(&self) -> usize { self.unmapped.values().sum() }
}

/// Group records by full state name and sum their totals.
/// Records whose state code is not in the lookup table are left out and counted in the report.
pub fn aggregate(records: &[StationRecord], mode: NotesMode) -> (Summary, AggregateReport) {
    let mut totals: BTreeMap<&'static str, u64> = BTreeMap::new();
    let mut report = AggregateReport { rows_read: records.len(), ..Default::default() };

    for record in records {
        let code = record.state.as_deref().unwrap_or("");
        let Some(name) = states::full_name(code) else {
            *report.unmapped.entry(code.trim().to_string()).or_default() += 1;
            continue;
        };
        let total = totals.entry(name).or_default();
        *total = total.saturating_add(record.total(mode));
        report.rows_counted += 1;
    }

    for (code, rows) in &report.unmapped {
        warn!(code = %code, rows, "[aggregate] skipping rows with unrecognised state code");
    }

    let rows = totals.into_iter()
        .map(|(state, total)| StateAggregate { state: state.to_string(), total })
        .collect::<Vec<_>>();

    report.states = rows.len();
    report.grand_total = rows.iter().map(|row| row.total).fold(0, u64::saturating_add);

    (Summary { rows }, report)
}

/// Read the facility dataset at `input`, aggregate it and write the summary to `output`.
pub fn run(input: &Path, output: &Path, config: &AggregateConfig) -> Result<AggregateReport> {
    info!(path = %input.display(), "[aggregate] reading station records");
    let records = io::read_station_file(input, &config.columns, config.delimiter)?;
    debug!(rows = records.len(), notes = ?config.notes, "[aggregate] loaded station records");

    let (summary, report) = aggregate(&records, config.notes);
    for row in summary.rows().iter().take(5) {
        debug!(state = %row.state, total = row.total, "[aggregate] summary preview");
    }

    info!(path = %output.display(), states = summary.len(), "[aggregate] writing summary");
    summary.write_csv(output)?;
    Ok(report)
}
