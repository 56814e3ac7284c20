//! Command-line configuration

use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;

const APP_NAME: &str = "bookclub-rs";
const FALLBACK_DATA_DIR: &str = ".bookclub";

#[derive(Debug, Parser)]
#[command(name = "bookclub-rs", version, about = "Browse the book club catalog and keep a list of favorites")]
pub struct Args {
    /// Directory holding the saved search, category and favorites
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory for log files [default: <data-dir>/logs]
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Keep state in memory only; nothing is saved
    #[arg(long)]
    pub ephemeral: bool,

    /// Forget saved state before starting
    #[arg(long)]
    pub reset: bool,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` when running with in-memory storage
    pub data_dir: Option<PathBuf>,
    pub log_dir: PathBuf,
    pub reset: bool,
}

impl AppConfig {
    pub fn from_args(args: Args) -> Self {
        let default_dir = args.data_dir.unwrap_or_else(default_data_dir);
        let log_dir = args.log_dir.unwrap_or_else(|| default_dir.join("logs"));
        let data_dir = if args.ephemeral { None } else { Some(default_dir) };

        Self {
            data_dir,
            log_dir,
            reset: args.reset,
        }
    }
}

/// Platform data directory, or `./.bookclub` when there is none
pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}
