use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use doctor_directory::config::Config;
use doctor_directory::logging;
use doctor_directory::Pipeline;

#[derive(Parser)]
#[command(name = "doctor_directory")]
#[command(about = "Builds the searchable doctor directory JSON from a spreadsheet export")]
#[command(version)]
struct Cli {
    /// TOML config file (defaults to ./doctor_directory.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Spreadsheet or CSV export to read
    #[arg(long)]
    input: Option<PathBuf>,
    /// JSON file to write
    #[arg(long)]
    output: Option<PathBuf>,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.input, cli.output);

    let summary = Pipeline::run(&config).with_context(|| {
        format!(
            "Failed to build doctor directory from {}",
            config.input_path.display()
        )
    })?;

    println!("{summary}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    info!("Building doctor directory");
    run(cli)
}
