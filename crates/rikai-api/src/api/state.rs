//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::RikaiApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Lookup Service
  ///
  /// - Production: `Arc::new(RikaiApiServiceFull::new(&config).await?)`
  /// - Test: `Arc::new(StubRikaiApiService)`
  pub service: Arc<dyn RikaiApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn RikaiApiService>) -> Self {
    Self { config, service }
  }
}
