//! rikai-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rikai_api::ApiError;
use rikai_api::api::AppState;
use rikai_api::api::run_server;
use rikai_api::config::Config;
use rikai_api::service::RikaiApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み
  let config = Config::from_env()?;

  // ロギングの初期化（RUST_LOG が優先、なければ RIKAI_LOG_LEVEL）
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(data_dir = %config.data_dir.display(), "設定を読み込みました");

  // サービスの初期化（辞書データのロード）
  let service = Arc::new(RikaiApiServiceFull::new(&config).await?);
  tracing::info!("辞書データをロードしました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
