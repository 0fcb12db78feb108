use std::path::PathBuf;

/// EV charging station atlas CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "evse-atlas", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON configuration file (column names, labels, insets, ...)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Total chargers per state from a station dataset
    Aggregate(AggregateArgs),

    /// Draw a choropleth map from a state summary
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
pub struct AggregateArgs {
    /// Station dataset (delimited text with a header row)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub stations: PathBuf,

    /// Output summary file, defaults to "./EVSE_Stations_By_State.csv"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Field delimiter of the station dataset
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Ignore counts written in the notes column
    #[arg(long)]
    pub legacy_notes: bool,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum OutputFormat { Png, Svg }

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// State summary produced by `aggregate`
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub summary: PathBuf,

    /// State boundaries (.geojson, .json or .shp)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub boundaries: PathBuf,

    /// Output image, defaults to "./EVSE_Stations_Map_with_Labels.png"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Image format, inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Summary column to classify
    #[arg(long)]
    pub value_column: Option<String>,

    /// Output resolution in dots per inch
    #[arg(long)]
    pub dpi: Option<u32>,
}
