//! kanji モジュール
//!
//! 漢字 1 文字の参照情報・読み・部首を組み立てます。

pub mod kanji_builder;
pub mod references;

pub use kanji_builder::kanji_search;
pub use references::{KanjiReferences, REF_ABBREVIATIONS, ReferenceAbbreviation, ReferenceCode};
