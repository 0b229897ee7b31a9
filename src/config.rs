use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main notifier configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub sinks: SinksConfig,
}

/// Diagnostic log verbosity
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Where the default listeners write
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SinksConfig {
    /// File appended to by the error listener
    pub error_log: PathBuf,
    /// File appended to by the fatal listener
    pub fatal_log: PathBuf,
}

impl Default for SinksConfig {
    fn default() -> Self {
        Self {
            error_log: PathBuf::from("errors.log"),
            fatal_log: PathBuf::from("fatal_errors.log"),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// An explicit path must load. Any other candidate that exists but fails
    /// to load is skipped; the reasons are returned alongside the config so
    /// they can be reported once logging is up.
    pub fn load(config_path: Option<&PathBuf>) -> Result<(Self, Vec<String>)> {
        if let Some(path) = config_path {
            let config =
                Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()))?;
            return Ok((config, Vec::new()));
        }

        Ok(Self::load_first(Self::candidates()))
    }

    /// First candidate that exists and parses, or defaults
    fn load_first(candidates: Vec<(&'static str, PathBuf)>) -> (Self, Vec<String>) {
        let mut skipped = Vec::new();

        for (source, path) in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return (config, skipped),
                Err(e) => skipped.push(format!(
                    "Failed to load config from {} ({}): {:#}",
                    source,
                    path.display(),
                    e
                )),
            }
        }

        (Self::default(), skipped)
    }

    /// Config file locations in lookup order, tagged with where they came from
    fn candidates() -> Vec<(&'static str, PathBuf)> {
        let mut candidates = Vec::new();

        if let Ok(env_path) = std::env::var("NOTIFIER_CONFIG") {
            candidates.push(("NOTIFIER_CONFIG", PathBuf::from(env_path)));
        }
        if let Ok(dir) = std::env::var("NOTIFIER_DIR") {
            candidates.push(("NOTIFIER_DIR", PathBuf::from(dir).join("notifier.yaml")));
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(("config dir", config_dir.join("notifier").join("notifier.yaml")));
        }
        // ./notifier.yaml (for development)
        candidates.push(("working dir", PathBuf::from("notifier.yaml")));

        candidates
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Error log path with ~ and env vars expanded
    pub fn error_log(&self) -> PathBuf {
        Self::expand_path(&self.sinks.error_log)
    }

    /// Fatal log path with ~ and env vars expanded
    pub fn fatal_log(&self) -> PathBuf {
        Self::expand_path(&self.sinks.fatal_log)
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }
}
