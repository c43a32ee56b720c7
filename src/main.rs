//! labelcache - Rendered label image cache
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use labelcache::cli::{Cli, Commands};
use labelcache::config::{Config, ConfigManager};
use labelcache::error::LabelCacheResult;
use labelcache::FileImageCache;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> LabelCacheResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load().await?;

    init_logging(cli.verbose, &config);
    debug!("Using config {}", config_manager.path().display());

    let root = cli.root.clone().unwrap_or_else(|| config.cache.root.clone());
    let cache = FileImageCache::new();

    match cli.command {
        Commands::Store(args) => labelcache::cli::commands::store(args, &cache, &root).await,
        Commands::List(args) => labelcache::cli::commands::list(args, &cache, &root).await,
        Commands::Delete(args) => labelcache::cli::commands::delete(args, &cache, &root).await,
        Commands::Clear(args) => labelcache::cli::commands::clear(args, &cache, &root).await,
        Commands::Config(args) => {
            labelcache::cli::commands::config(args, &config_manager, &config).await
        }
    }
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, config: &Config) {
    let level = match (verbose, config.general.verbose) {
        (0, false) => "warn",
        (0, true) | (1, _) => "info",
        _ => "debug",
    };
    let filter = EnvFilter::new(format!("labelcache={}", level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
