//! dictionary モジュール
//!
//! 辞書データファイルの読み込みと、読み込み済みデータ（スナップショット）を扱います。

pub mod loader;
pub mod snapshot;

/// 主要な型を再エクスポート
pub use loader::DictionaryLoader;
pub use snapshot::{DataFile, DictionarySnapshot};
