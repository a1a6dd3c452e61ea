//! Dictionary Lookup Service

use std::sync::Arc;
use std::time::Instant;

use rikai::dictionary::DictionarySnapshot;
use rikai::service::RikaiService;

use crate::config::{Config, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::{
  KanjiRequest, KanjiResponse, TranslateRequest, TranslateResponse, WordSearchRequest,
  WordSearchResponse,
};

/// Common interface for the lookup service
///
/// This trait allows swapping production implementation (`RikaiApiServiceFull`) with
/// test stubs/mocks.
pub trait RikaiApiService: Send + Sync {
  /// Word or name search
  ///
  /// # Errors
  /// - Input error (empty string, length exceeded)
  fn word_search(&self, request: WordSearchRequest) -> Result<WordSearchResponse>;

  /// Whole-text translation
  ///
  /// # Errors
  /// - Input error (empty string, length exceeded)
  fn translate(&self, request: TranslateRequest) -> Result<TranslateResponse>;

  /// Kanji lookup
  ///
  /// # Errors
  /// - Input error (not exactly one character)
  fn kanji(&self, request: KanjiRequest) -> Result<KanjiResponse>;
}

/// Validates the length of free text input
fn validate_text(text: &str) -> Result<()> {
  let text_bytes = text.len();
  if text_bytes == 0 {
    return Err(ApiError::invalid_input("Text is empty"));
  }
  if text_bytes > MAX_TEXT_LENGTH {
    return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
  }
  Ok(())
}

/// Lookup Service
///
/// Holds the loaded dictionary snapshot so every request runs synchronously.
pub struct RikaiApiServiceFull {
  /// Library facade (deinflector, localizer)
  service: RikaiService,
  /// Loaded dictionary data
  snapshot: Arc<DictionarySnapshot>,
}

impl RikaiApiServiceFull {
  /// Initializes the service and loads the dictionary data
  ///
  /// # Arguments
  /// * `config` - Configuration (including data directory)
  ///
  /// # Errors
  /// Returns an error if the configuration is invalid or loading fails
  pub async fn new(config: &Config) -> Result<Self> {
    let service = RikaiService::new(&config.rikai_config())?;
    let snapshot = service.init().await?;
    Ok(Self { service, snapshot })
  }

  /// Builds the service from an already loaded snapshot
  #[must_use]
  pub fn from_parts(service: RikaiService, snapshot: Arc<DictionarySnapshot>) -> Self {
    Self { service, snapshot }
  }
}

/// Production implementation of trait `RikaiApiService`
impl RikaiApiService for RikaiApiServiceFull {
  fn word_search(&self, request: WordSearchRequest) -> Result<WordSearchResponse> {
    validate_text(&request.text)?;

    let start = Instant::now();
    let result = self.service.matcher(&self.snapshot).word_search(
      &request.text,
      request.search_names,
      request.max_results,
    );
    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(WordSearchResponse { result, elapsed_ms })
  }

  fn translate(&self, request: TranslateRequest) -> Result<TranslateResponse> {
    validate_text(&request.text)?;

    let start = Instant::now();
    let result = self.service.matcher(&self.snapshot).translate(&request.text);
    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(TranslateResponse { result, elapsed_ms })
  }

  fn kanji(&self, request: KanjiRequest) -> Result<KanjiResponse> {
    if request.kanji.chars().count() != 1 {
      return Err(ApiError::invalid_input("kanji must be exactly one character"));
    }

    let start = Instant::now();
    let options = request.options();
    let result = rikai::kanji::kanji_search(&self.snapshot, &request.kanji, options.as_ref());
    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(KanjiResponse { result, elapsed_ms })
  }
}

#[cfg(test)]
mod tests {
  use std::path::{Path, PathBuf};

  use rikai::config::LogLevel;
  use tempfile::TempDir;

  use super::*;

  fn write_data_files(dir: &Path) {
    std::fs::write(dir.join("dict.dat"), "食べる [たべる] /(v1,vt) to eat/(P)/\n").unwrap();
    std::fs::write(dir.join("dict.idx"), "たべる,0\n食べる,0\n").unwrap();
    std::fs::write(dir.join("names.dat"), "").unwrap();
    std::fs::write(dir.join("names.idx"), "").unwrap();
    std::fs::write(dir.join("kanji.dat"), "犬|B1 G1 S4|ケン いぬ||いぬ|dog\n").unwrap();
    std::fs::write(dir.join("radicals.dat"), "犬\t4\tいぬ\tdog\n").unwrap();
  }

  fn create_test_config(dir: &Path) -> Config {
    Config {
      bind_addr: "127.0.0.1:5541".to_string(),
      data_dir: dir.to_path_buf(),
      log_level: LogLevel::Info,
    }
  }

  #[tokio::test]
  async fn test_service_lookup() {
    let tmp = TempDir::new().expect("一時ディレクトリの作成に失敗");
    write_data_files(tmp.path());
    let service = RikaiApiServiceFull::new(&create_test_config(tmp.path())).await.unwrap();

    let response = service
      .word_search(WordSearchRequest {
        text: "食べました".to_string(),
        search_names: false,
        max_results: 0,
      })
      .unwrap();
    let result = response.result.expect("食べる が見つかりません");
    assert_eq!(result.lookup.entries[0].reason.as_deref(), Some("< polite past"));

    let response = service
      .kanji(KanjiRequest {
        kanji: "犬".to_string(),
        included_references: None,
        include_components: false,
      })
      .unwrap();
    assert_eq!(response.result.expect("犬 が見つかりません").radical, "犬");
  }

  #[tokio::test]
  async fn test_input_validation() {
    let tmp = TempDir::new().expect("一時ディレクトリの作成に失敗");
    write_data_files(tmp.path());
    let service = RikaiApiServiceFull::new(&create_test_config(tmp.path())).await.unwrap();

    let err = service.translate(TranslateRequest { text: String::new() }).unwrap_err();
    assert_eq!(err.code(), "invalid_input");

    let err = service
      .translate(TranslateRequest {
        text: "あ".repeat(MAX_TEXT_LENGTH),
      })
      .unwrap_err();
    assert_eq!(err.code(), "text_too_long");

    let err = service
      .kanji(KanjiRequest {
        kanji: "犬猫".to_string(),
        included_references: None,
        include_components: false,
      })
      .unwrap_err();
    assert_eq!(err.code(), "invalid_input");
  }

  #[tokio::test]
  async fn test_translate_at_length_limit() {
    let tmp = TempDir::new().expect("一時ディレクトリの作成に失敗");
    write_data_files(tmp.path());
    let service = RikaiApiServiceFull::new(&create_test_config(tmp.path())).await.unwrap();

    // 一致しない文字だけの最大長テキストも完走する
    let text = "ぬ".repeat(MAX_TEXT_LENGTH / "ぬ".len());
    let response = service.translate(TranslateRequest { text }).unwrap();
    assert!(response.result.is_none());
  }

  #[tokio::test]
  async fn test_missing_data_dir() {
    let config = create_test_config(&PathBuf::from("/nonexistent/rikai/data"));
    let err = RikaiApiServiceFull::new(&config).await.err().expect("エラーになるはず");
    assert_eq!(err.code(), "config_error");
  }

  // Real dictionary data tests are opt-in with with_dict_tests feature
  #[tokio::test]
  #[cfg_attr(not(feature = "with_dict_tests"), ignore)]
  async fn test_service_with_real_data() {
    let config = Config::from_env().unwrap();
    let service = RikaiApiServiceFull::new(&config)
      .await
      .expect("Failed to load dictionary data: check RIKAI_DATA_DIR");

    let response = service
      .translate(TranslateRequest {
        text: "日本語を勉強しています".to_string(),
      })
      .unwrap();
    assert!(response.result.is_some());
  }
}
