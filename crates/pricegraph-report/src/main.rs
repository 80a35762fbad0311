//! PriceGraph Report - Main Entry Point

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use pricegraph_common::{init_logging, LoggingConfig};
use pricegraph_config::ConfigLoader;
use pricegraph_report::run;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Log level, overriding the configured one
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.config {
        Some(path) => ConfigLoader::load_from_file(&path)?,
        None => ConfigLoader::load()?,
    };

    let level = args.log_level.unwrap_or_else(|| config.logging.level.clone());
    init_logging(LoggingConfig {
        level,
        ..LoggingConfig::default()
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    info!("Starting PriceGraph report generation");
    info!("Configuration loaded, reading {}", config.input.path);

    match run(&config) {
        Ok(artifacts) => {
            for file in &artifacts.files {
                info!("Wrote {}", file.display());
            }
            info!("PriceGraph report generation finished");
            Ok(())
        }
        Err(err) => {
            error!("Report generation failed: {err}");
            Err(err.into())
        }
    }
}
