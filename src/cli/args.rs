//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// labelcache - Rendered label image cache
///
/// Stores rendered label pages as numbered PNG files in a cache
/// directory, with JSON sidecars for labels that rendered with warnings.
#[derive(Parser, Debug)]
#[command(name = "labelcache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LABELCACHE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Cache directory (overrides cache.root)
    #[arg(short, long, global = true, env = "LABELCACHE_ROOT")]
    pub root: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store label images as one batch
    Store(StoreArgs),

    /// List cached images, oldest first
    List(ListArgs),

    /// Delete one cached image and its metadata
    Delete(DeleteArgs),

    /// Delete every cached image
    Clear(ClearArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the store command
#[derive(Parser, Debug)]
pub struct StoreArgs {
    /// PNG files to store (page order for multi-page labels)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Treat the files as pages of one multi-page label
    #[arg(short, long)]
    pub multi_page: bool,

    /// Logical image name (defaults to each file's name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Renderer warning to record with every stored label
    #[arg(short, long = "warning")]
    pub warnings: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the delete command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Exact file name of the image, e.g. invoice-3.png
    pub name: String,
}

/// Arguments for the clear command
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., cache.root)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Output format for image listings
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one path per line)
    Plain,
}
