use anyhow::Result;
use evse_atlas::{AggregateConfig, NotesMode};
use tracing::info;

pub fn run(mut config: AggregateConfig, args: &crate::cli::AggregateArgs) -> Result<()> {
    let out_path = args.output.clone().unwrap_or("./EVSE_Stations_By_State.csv".into());

    if let Some(delimiter) = args.delimiter { config.delimiter = delimiter }
    if args.legacy_notes { config.notes = NotesMode::Legacy }

    info!(input = %args.stations.display(), output = %out_path.display(), notes = ?config.notes, "[aggregate] starting");
    let report = evse_atlas::aggregate::run(&args.stations, &out_path, &config)?;

    if report.rows_unmapped() > 0 {
        println!("[aggregate] skipped {} rows with unrecognised state codes", report.rows_unmapped());
    }
    println!(
        "[aggregate] wrote {} states ({} chargers from {} rows) to {}",
        report.states, report.grand_total, report.rows_counted, out_path.display(),
    );
    Ok(())
}
