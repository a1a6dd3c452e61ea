//! normalizer モジュール
//!
//! 検索入力をマッチング用の正規形（ひらがな化）に変換します。

pub mod kana;

pub use kana::{NormalizedInput, normalize};
