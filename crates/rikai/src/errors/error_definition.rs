//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::dictionary::DataFile;

/// 設定（RikaiConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// loader.max_attempts < 1
  #[error("loader.max_attempts は 1 以上である必要があります: actual={actual}")]
  InvalidMaxAttempts {
    /// 実際に指定された値
    actual: u32,
  },

  /// loader.timeout_ms が 0
  #[error("loader.timeout_ms は 1 以上である必要があります: actual={actual}")]
  InvalidTimeout {
    /// 実際に指定された値（ミリ秒）
    actual: u64,
  },

  /// loader.data_dir が存在しない
  #[error("loader.data_dir が見つかりません: path={path:?}")]
  DataDirNotFound {
    /// 指定されたパス
    path: PathBuf,
  },

  /// loader.data_dir がディレクトリではない（ファイルである等）
  #[error("loader.data_dir がディレクトリではありません: path={path:?}")]
  InvalidDataDir {
    /// 不正なパス
    path: PathBuf,
  },
}

/// 辞書データファイルの読み込みに関するエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LoaderError {
  /// ファイルの読み込みに失敗（リトライ上限到達後）
  #[error("{file} の読み込みに失敗しました: path={path:?}, attempts={attempts}, error={source}")]
  Io {
    /// 対象データファイル
    file: DataFile,
    /// 読み込もうとしたパス
    path: PathBuf,
    /// 試行回数
    attempts: u32,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// 全ての試行がタイムアウトした
  #[error("{file} の読み込みがタイムアウトしました: path={path:?}, attempts={attempts}")]
  Timeout {
    /// 対象データファイル
    file: DataFile,
    /// 読み込もうとしたパス
    path: PathBuf,
    /// 試行回数
    attempts: u32,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `RikaiResult<T>` = `Result<T, RikaiError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum RikaiError {
  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// 辞書データ読み込みエラー
  #[error(transparent)]
  Loader(#[from] LoaderError),

  /// 辞書データがまだロードされていない
  #[error("辞書データがロードされていません")]
  NotLoaded,
}

/// rikai クレートの標準 Result 型エイリアス
pub type RikaiResult<T> = Result<T, RikaiError>;
