mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{aggregate, render};
use evse_atlas::Config;
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("evse_atlas={level},evse_atlas_cli={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    match &cli.command {
        Commands::Aggregate(args) => aggregate::run(config.aggregate, args),
        Commands::Render(args) => render::run(config.render, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
