//! Data Model Definition
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::kanji::{KanjiReferences, ReferenceAbbreviation};

/// One dictionary entry found by a lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupEntry {
  /// Raw entry line from the dictionary blob
  pub entry: String,

  /// Deinflection explanation, e.g. `"< polite past"`. `None` when the entry
  /// matched the input as written.
  pub reason: Option<String>,
}

/// Result of a single word or name lookup
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LookupResult {
  /// Accepted entries in discovery order
  pub entries: Vec<LookupEntry>,

  /// Set when more acceptable entries existed than the result cap allowed
  pub truncated: bool,

  /// Longest original input length (in characters) that produced a match
  pub match_len: usize,
}

/// Result of [`word_search`](crate::matcher::WordMatcher::word_search)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSearchResult {
  /// Matched entries
  #[serde(flatten)]
  pub lookup: LookupResult,

  /// Whether the name dictionary was searched
  pub names: bool,
}

/// Result of whole-text translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateResult {
  /// First entry of each matched segment, in text order
  pub entries: Vec<String>,

  /// Number of input characters covered by the translation
  pub consumed_len: usize,

  /// Set when the text had more segments than the translation cap
  pub truncated: bool,
}

/// A radical that appears in a kanji
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanjiComponent {
  /// Radical character
  pub radical: String,
  /// Reading of the radical
  pub yomi: String,
  /// English meaning
  pub english: String,
}

/// Structured kanji record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanjiEntry {
  /// The character itself
  pub kanji: String,

  /// Dictionary reference codes (`B`, `G`, `S`, `U`, `H`, …)
  pub references: KanjiReferences,

  /// Reference sources to show, in display order
  pub displayed_references: Vec<ReferenceAbbreviation>,

  /// On and kun readings
  pub onkun: Vec<String>,

  /// Name readings
  pub nanori: Vec<String>,

  /// Radical names
  pub bushumei: Vec<String>,

  /// Classical radical
  pub radical: String,

  /// English meanings
  pub eigo: String,

  /// Component radicals, only when requested
  #[serde(skip_serializing_if = "Option::is_none")]
  pub components: Option<Vec<KanjiComponent>>,
}

/// Options for [`kanji_search`](crate::kanji::kanji_search)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KanjiSearchOptions {
  /// Reference abbreviations to include in `displayed_references`
  pub included_references: HashSet<String>,

  /// Whether to fill in `components`
  pub include_kanji_components: bool,
}

impl KanjiSearchOptions {
  /// Builds options from an iterator of reference abbreviations.
  pub fn new<I, S>(included_references: I, include_kanji_components: bool) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      included_references: included_references.into_iter().map(Into::into).collect(),
      include_kanji_components,
    }
  }
}
