use std::path::PathBuf;

use anyhow::Result;
use evse_atlas::{ImageFormat, RenderConfig};
use tracing::info;

use crate::cli::{OutputFormat, RenderArgs};

pub fn run(mut config: RenderConfig, args: &RenderArgs) -> Result<()> {
    let out_path: PathBuf = args.output.clone().unwrap_or("./EVSE_Stations_Map_with_Labels.png".into());
    let format = match args.format {
        Some(OutputFormat::Png) => ImageFormat::Png,
        Some(OutputFormat::Svg) => ImageFormat::Svg,
        None => ImageFormat::from_path(&out_path).unwrap_or_default(),
    };

    if let Some(column) = &args.value_column { config.value_column = column.clone() }
    if let Some(dpi) = args.dpi { config.dpi = dpi }

    info!(output = %out_path.display(), format = ?format, dpi = config.dpi, "[render] starting");
    let report = evse_atlas::render::run(&args.summary, &args.boundaries, &out_path, format, &config)?;

    println!(
        "[render] drew {} states ({} with data, {} labelled) to {}",
        report.features, report.matched, report.labels, out_path.display(),
    );
    Ok(())
}
