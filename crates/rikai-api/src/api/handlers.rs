//! HTTPハンドラー定義

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::errors::{ApiError, Result};
use crate::models::{
  KanjiRequest, KanjiResponse, TranslateRequest, TranslateResponse, WordSearchRequest,
  WordSearchResponse,
};
use crate::service::RikaiApiService;

use super::state::AppState;

/// サービス呼び出しを spawn_blocking で実行する
///
/// 前方一致検索は入力長に比例して重くなるため、非同期ランタイムをブロックしないよう分離
async fn run_blocking<T, F>(state: &AppState, f: F) -> Result<T>
where
  T: Send + 'static,
  F: FnOnce(&dyn RikaiApiService) -> Result<T> + Send + 'static,
{
  let service: Arc<dyn RikaiApiService> = state.service.clone();

  tokio::task::spawn_blocking(move || f(service.as_ref())).await.map_err(|e| {
    error!(error = %e, "spawn_blocking エラー");
    ApiError::internal("処理の実行に失敗しました")
  })?
}

/// POST /word-search エンドポイント
///
/// 単語・人名辞書の前方一致検索を実行する。
///
/// # Request Body
/// ```json
/// { "text": "食べました", "search_names": false, "max_results": 0 }
/// ```
///
/// # Response
/// - 200 OK: 検索成功（一致なしの場合 `result` は `null`）
/// - 400 Bad Request: 入力エラー（空テキスト、テキスト長超過）
/// - 500 Internal Server Error: 内部エラー
pub async fn post_word_search(
  State(state): State<AppState>,
  Json(request): Json<WordSearchRequest>,
) -> Result<Json<WordSearchResponse>> {
  debug!(
    text_len = request.text.len(),
    search_names = request.search_names,
    "単語検索リクエストを受信"
  );

  let response = run_blocking(&state, move |service| service.word_search(request)).await?;

  info!(
    entries = response.result.as_ref().map_or(0, |r| r.lookup.entries.len()),
    elapsed_ms = response.elapsed_ms,
    "単語検索完了"
  );

  Ok(Json(response))
}

/// POST /translate エンドポイント
///
/// テキスト全体を先頭から貪欲に分割して翻訳する。
///
/// # Request Body
/// ```json
/// { "text": "子犬が走っている" }
/// ```
pub async fn post_translate(
  State(state): State<AppState>,
  Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>> {
  debug!(text_len = request.text.len(), "翻訳リクエストを受信");

  let response = run_blocking(&state, move |service| service.translate(request)).await?;

  info!(
    segments = response.result.as_ref().map_or(0, |r| r.entries.len()),
    elapsed_ms = response.elapsed_ms,
    "翻訳完了"
  );

  Ok(Json(response))
}

/// POST /kanji エンドポイント
///
/// 漢字 1 文字の参照情報を返す。処理が軽いため同期的に実行する。
///
/// # Request Body
/// ```json
/// { "kanji": "犬", "included_references": ["H", "U"], "include_components": true }
/// ```
pub async fn post_kanji(
  State(state): State<AppState>,
  Json(request): Json<KanjiRequest>,
) -> Result<Json<KanjiResponse>> {
  debug!(kanji = %request.kanji, "漢字検索リクエストを受信");

  let response = state.service.kanji(request)?;

  info!(found = response.result.is_some(), elapsed_ms = response.elapsed_ms, "漢字検索完了");

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
