//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use rikai::config::{LogLevel, RikaiConfig};

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_DATA_DIR};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5540")
  pub bind_addr: String,
  /// Directory holding the dictionary data files
  pub data_dir: PathBuf,
  /// Default log level (overridden by `RUST_LOG`)
  pub log_level: LogLevel,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// | variable | default |
  /// |----------|---------|
  /// | `RIKAI_API_BASE_URL` | `127.0.0.1:5540` |
  /// | `RIKAI_DATA_DIR` | `data` |
  /// | `RIKAI_LOG_LEVEL` | `info` |
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    let bind_addr =
      std::env::var("RIKAI_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let data_dir =
      std::env::var("RIKAI_DATA_DIR").map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

    let log_level = match std::env::var("RIKAI_LOG_LEVEL") {
      Ok(level) => LogLevel::from_str(&level).map_err(ApiError::config)?,
      Err(_) => LogLevel::default(),
    };

    Ok(Self {
      bind_addr,
      data_dir,
      log_level,
    })
  }

  /// Library configuration for the dictionary service
  #[must_use]
  pub fn rikai_config(&self) -> RikaiConfig {
    let mut config = RikaiConfig::with_data_dir(&self.data_dir);
    config.logging.level = self.log_level;
    config
  }
}
