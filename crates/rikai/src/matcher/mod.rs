//! matcher モジュール
//!
//! 単語・人名辞書の前方一致検索と、文章全体の貪欲な分割翻訳を提供します。

pub mod segmenter;
pub mod word_matcher;

pub use word_matcher::{
  MAX_LOOKUP_LENGTH, NAMES_MAX_ENTRIES, WORDS_MAX_ENTRIES, WordMatcher, entry_matches_word_type,
};
