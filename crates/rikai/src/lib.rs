//! rikai 日本語テキスト検索ライブラリー
//!
//! 単語・人名辞書の前方一致検索（活用解除・カタカナ正規化つき）、
//! 文章の分割翻訳、漢字の参照情報検索を行う

/// 設定モジュール - RikaiConfig, LoaderConfig等の設定構造体を定義
pub mod config;

/// 活用解除モジュール - Deinflectorトレイトとルール表による実装
pub mod deinflect;

/// 辞書モジュール - データファイルのロードとスナップショット
pub mod dictionary;

/// エラーモジュール - RikaiError, RikaiResult等のエラー型を定義
pub mod errors;

/// インデックスモジュール - ソート済みテキストの二分探索
pub mod index;

/// 漢字モジュール - 漢字エントリーの組み立て
pub mod kanji;

/// マッチャーモジュール - 単語・人名検索と分割翻訳
pub mod matcher;

/// データモデルモジュール - 検索結果等のデータ構造を定義
pub mod models;

/// 正規化モジュール - カタカナ→ひらがな変換と長さ対応表
pub mod normalizer;

/// サービスモジュール - RikaiService等の上位レベルAPIを提供
pub mod service;

#[cfg(test)]
mod test_support;

/// 再エクスポート
pub use config::{LoaderConfig, RikaiConfig};
pub use dictionary::{DictionaryLoader, DictionarySnapshot};
pub use errors::{RikaiError, RikaiResult};
pub use service::RikaiService;
