//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::application::dto::SmartcamSettings;

pub(super) const APP_NAME: &str = "smartcam";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Set up Smartcam cameras. Accepts booleans, `0`/`1` and yes/no.
    #[serde(
        default = "default_true",
        deserialize_with = "crate::domain::serde_utils::bool_like::deserialize"
    )]
    pub smartcam: bool,

    /// Directory holding the cached images.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    /// Seconds between two polls of every camera.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Recorded vendor data.
    #[serde(default)]
    pub replay: ReplayConfig,
}

/// Replay session configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Overview JSON file.
    #[serde(default)]
    pub overview: Option<PathBuf>,

    /// Directory holding `<image_id>.jpg` captures.
    #[serde(default)]
    pub mirror: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_poll_interval() -> u64 {
    10
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(smartcam) = args.smartcam {
            self.smartcam = smartcam;
        }
        if let Some(storage_dir) = args.storage_dir {
            self.storage_dir = Some(storage_dir);
        }
        if let Some(interval) = args.poll_interval_secs {
            self.poll_interval_secs = interval;
        }
        if let Some(overview) = args.overview {
            self.replay.overview = Some(overview);
        }
        if let Some(mirror) = args.mirror {
            self.replay.mirror = Some(mirror);
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default image storage directory.
    #[must_use]
    pub fn default_storage_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("images"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("smartcam.log"))
    }

    /// Returns effective storage directory.
    #[must_use]
    pub fn effective_storage_dir(&self) -> PathBuf {
        self.storage_dir
            .clone()
            .or_else(Self::default_storage_dir)
            .unwrap_or_else(|| std::env::temp_dir().join(APP_NAME).join("images"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    /// Settings for the Smartcam platform setup.
    #[must_use]
    pub fn smartcam_settings(&self) -> SmartcamSettings {
        SmartcamSettings {
            enabled: self.smartcam,
            storage_dir: self.effective_storage_dir(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            smartcam: true,
            storage_dir: None,
            poll_interval_secs: default_poll_interval(),
            replay: ReplayConfig::default(),
        }
    }
}
