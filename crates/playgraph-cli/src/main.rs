//! playgraph export tool - main entry point

use anyhow::Result;
use clap::Parser;
use playgraph_cli::config::ConfigLoader;
use playgraph_cli::export;
use playgraph_common::{init_logging, LoggingConfig};
use tracing::info;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Log level, overriding the configuration file
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.config {
        Some(path) => ConfigLoader::load_from_file(&path)?,
        None => ConfigLoader::load()?,
    };

    let level = args
        .log_level
        .unwrap_or_else(|| config.logging.level.clone());
    init_logging(LoggingConfig {
        level,
        file_path: config.logging.file.clone(),
        ..LoggingConfig::default()
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    info!("Configuration loaded, starting export");
    export::run(&config)?;

    Ok(())
}
