// crates/rikai/src/config.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Default number of attempts per data file.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default timeout of the first attempt (milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 4_000;

/// Default backoff before the first retry (milliseconds).
pub const DEFAULT_BACKOFF_MS: u64 = 1_000;

/// Top-level configuration for rikai.
#[derive(Debug, Clone, Deserialize)]
pub struct RikaiConfig {
  /// [loader] section
  pub loader: LoaderConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [loader] section configuration.
///
/// Controls where the six flat data files are read from and how hard the
/// loader tries before giving up.
#[derive(Debug, Clone, Deserialize)]
pub struct LoaderConfig {
  /// Directory holding `dict.dat`, `dict.idx`, `names.dat`, `names.idx`,
  /// `kanji.dat` and `radicals.dat`
  pub data_dir: PathBuf,
  /// Attempts per file before the load fails
  #[serde(default = "default_max_attempts")]
  pub max_attempts: u32,
  /// Timeout of the first attempt. Attempt `n` is allowed `n` times this value.
  #[serde(default = "default_timeout_ms")]
  pub timeout_ms: u64,
  /// Wait before the first retry. Doubles on every further retry.
  #[serde(default = "default_backoff_ms")]
  pub backoff_ms: u64,
}

fn default_max_attempts() -> u32 {
  DEFAULT_MAX_ATTEMPTS
}

fn default_timeout_ms() -> u64 {
  DEFAULT_TIMEOUT_MS
}

fn default_backoff_ms() -> u64 {
  DEFAULT_BACKOFF_MS
}

impl LoaderConfig {
  /// Builds a loader configuration with default retry settings.
  pub fn new(data_dir: impl Into<PathBuf>) -> Self {
    Self {
      data_dir: data_dir.into(),
      max_attempts: DEFAULT_MAX_ATTEMPTS,
      timeout_ms: DEFAULT_TIMEOUT_MS,
      backoff_ms: DEFAULT_BACKOFF_MS,
    }
  }

  /// Timeout allowed for the given 1-based attempt.
  pub fn timeout_for_attempt(&self, attempt: u32) -> Duration {
    Duration::from_millis(self.timeout_ms.saturating_mul(u64::from(attempt)))
  }

  /// Wait before retrying after the given 1-based failed attempt.
  ///
  /// `backoff_ms * 2^(attempt - 1)`
  pub fn backoff_after_attempt(&self, attempt: u32) -> Duration {
    let shift = attempt.saturating_sub(1).min(16);
    Duration::from_millis(self.backoff_ms.saturating_mul(1u64 << shift))
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Returns the directive string understood by `tracing_subscriber::EnvFilter`.
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl std::str::FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "trace" => Ok(Self::Trace),
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" => Ok(Self::Warn),
      "error" => Ok(Self::Error),
      _ => Err(format!(
        "Unknown log level: {}. Valid values: trace, debug, info, warn, error",
        s
      )),
    }
  }
}

// ===== Accessor Methods =====

impl RikaiConfig {
  /// Builds a configuration reading data files from `data_dir` with default settings.
  pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
    Self {
      loader: LoaderConfig::new(data_dir),
      logging: LoggingConfig::default(),
    }
  }

  /// Returns the directory holding the data files.
  pub fn data_dir(&self) -> &Path {
    &self.loader.data_dir
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `loader.max_attempts` >= 1
  /// - `loader.timeout_ms` >= 1
  /// - `loader.data_dir` exists and is a directory
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.loader.max_attempts < 1 {
      return Err(ConfigError::InvalidMaxAttempts {
        actual: self.loader.max_attempts,
      });
    }

    if self.loader.timeout_ms == 0 {
      return Err(ConfigError::InvalidTimeout {
        actual: self.loader.timeout_ms,
      });
    }

    let data_dir = &self.loader.data_dir;
    if !data_dir.exists() {
      return Err(ConfigError::DataDirNotFound {
        path: data_dir.clone(),
      });
    }
    if !data_dir.is_dir() {
      return Err(ConfigError::InvalidDataDir {
        path: data_dir.clone(),
      });
    }

    Ok(())
  }
}
