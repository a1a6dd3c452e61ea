//! models モジュール
//!
//! 検索結果などのデータモデルを定義します。

pub mod model_definition;

pub use model_definition::{
  KanjiComponent, KanjiEntry, KanjiSearchOptions, LookupEntry, LookupResult, TranslateResult,
  WordSearchResult,
};
