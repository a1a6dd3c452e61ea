//! Response Model Definition

use rikai::models::{KanjiEntry, TranslateResult, WordSearchResult};
use serde::Serialize;

/// Word / name search response
#[derive(Debug, Serialize)]
pub struct WordSearchResponse {
  /// Matched entries (`null` when nothing matched)
  pub result: Option<WordSearchResult>,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

/// Translation response
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
  /// Translated segments (`null` when nothing matched)
  pub result: Option<TranslateResult>,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

/// Kanji lookup response
#[derive(Debug, Serialize)]
pub struct KanjiResponse {
  /// Kanji record (`null` when the character is unknown)
  pub result: Option<KanjiEntry>,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
  use super::*;
  use rikai::models::{LookupEntry, LookupResult};

  #[test]
  fn word_search_response_serialization() {
    let response = WordSearchResponse {
      result: Some(WordSearchResult {
        lookup: LookupResult {
          entries: vec![LookupEntry {
            entry: "食べる [たべる] /(v1,vt) to eat/".to_string(),
            reason: Some("< polite past".to_string()),
          }],
          truncated: false,
          match_len: 5,
        },
        names: false,
      }),
      elapsed_ms: 3,
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["elapsed_ms"], 3);
    // LookupResult is flattened into the result object
    assert_eq!(json["result"]["match_len"], 5);
    assert_eq!(json["result"]["names"], false);
    assert_eq!(json["result"]["entries"][0]["reason"], "< polite past");
  }

  #[test]
  fn empty_result_is_null() {
    let response = TranslateResponse {
      result: None,
      elapsed_ms: 0,
    };
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"result":null,"elapsed_ms":0}"#);
  }
}
