use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "smartcam",
    version,
    about = "Serves the latest Smartcam still image from a single-slot disk cache",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set up Smartcam cameras.
    #[arg(long)]
    pub smartcam: Option<bool>,

    /// Directory holding the cached images.
    #[arg(long, value_name = "DIR")]
    pub storage_dir: Option<PathBuf>,

    /// Seconds between two polls.
    #[arg(long)]
    pub poll_interval_secs: Option<u64>,

    /// Overview JSON file of the replay session.
    #[arg(long, value_name = "PATH", env = "SMARTCAM_OVERVIEW")]
    pub overview: Option<PathBuf>,

    /// Directory of `<image_id>.jpg` captures for the replay session.
    #[arg(long, value_name = "DIR", env = "SMARTCAM_MIRROR")]
    pub mirror: Option<PathBuf>,

    /// Stop after this many polls.
    #[arg(long)]
    pub polls: Option<u64>,
}
