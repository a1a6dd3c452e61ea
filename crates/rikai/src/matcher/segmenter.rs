//! Whole-text translation
//!
//! Greedily consumes a passage: at each position the longest dictionary match
//! wins and the scan jumps past it, otherwise the scan moves one character on.

use tracing::debug;

use super::word_matcher::{WORDS_MAX_ENTRIES, WordMatcher};
use crate::models::TranslateResult;

impl WordMatcher<'_> {
  /// Translates `text` segment by segment.
  ///
  /// Each segment contributes the first entry of a single-result word search.
  /// After [`WORDS_MAX_ENTRIES`] segments the translation stops with
  /// `truncated` set, and the untranslated tail is excluded from
  /// `consumed_len`. Characters skipped because nothing matched count as
  /// consumed.
  ///
  /// # Returns
  /// `None` when no segment matched
  pub fn translate(&self, text: &str) -> Option<TranslateResult> {
    let text_len = text.chars().count();
    let mut remaining = text;
    let mut entries: Vec<String> = Vec::new();
    let mut truncated = false;

    while !remaining.is_empty() {
      let skip = match self.word_search(remaining, false, 1) {
        Some(found) => {
          if entries.len() >= WORDS_MAX_ENTRIES {
            truncated = true;
            break;
          }
          if let Some(first) = found.lookup.entries.into_iter().next() {
            entries.push(first.entry);
          }
          found.lookup.match_len.max(1)
        }
        None => 1,
      };

      remaining = advance_chars(remaining, skip);
    }

    if entries.is_empty() {
      return None;
    }

    let consumed_len = text_len - remaining.chars().count();
    debug!(segments = entries.len(), consumed_len, truncated, "translate finished");

    Some(TranslateResult {
      entries,
      consumed_len,
      truncated,
    })
  }
}

/// `text` without its first `n` characters
fn advance_chars(text: &str, n: usize) -> &str {
  match text.char_indices().nth(n) {
    Some((byte, _)) => &text[byte..],
    None => "",
  }
}

#[cfg(test)]
mod tests {
  use crate::deinflect::{EnglishReasonLocalizer, RuleDeinflector};
  use crate::matcher::{MAX_LOOKUP_LENGTH, WordMatcher};
  use crate::test_support::{CountingDeinflector, sample_snapshot};

  use super::advance_chars;

  fn translate(text: &str) -> Option<crate::models::TranslateResult> {
    let snapshot = sample_snapshot();
    WordMatcher::new(&snapshot, &RuleDeinflector, &EnglishReasonLocalizer).translate(text)
  }

  #[test]
  fn empty_text_is_none() {
    assert!(translate("").is_none());
  }

  #[test]
  fn text_without_matches_terminates() {
    assert!(translate("xyz ぬぬぬ。").is_none());
  }

  #[test]
  fn long_text_without_matches_does_bounded_work() {
    let snapshot = sample_snapshot();
    let deinflector = CountingDeinflector::default();
    let matcher = WordMatcher::new(&snapshot, &deinflector, &EnglishReasonLocalizer);

    let len = 2000;
    assert!(matcher.translate(&"ぬ".repeat(len)).is_none());

    // one search per position, each capped at MAX_LOOKUP_LENGTH prefixes
    let expected: usize = (1..=len).map(|remaining| remaining.min(MAX_LOOKUP_LENGTH)).sum();
    assert_eq!(deinflector.calls(), expected);
    assert!(deinflector.calls() <= len * MAX_LOOKUP_LENGTH);
  }

  #[test]
  fn segments_in_order() {
    let result = translate("子犬が食べました").expect("翻訳結果がありません");
    assert_eq!(
      result.entries,
      vec!["子犬 [こいぬ] /(n) puppy/", "食べる [たべる] /(v1,vt) to eat/(P)/"]
    );
    assert_eq!(result.consumed_len, 8);
    assert!(!result.truncated);
  }

  #[test]
  fn unmatched_tail_counts_as_consumed() {
    let result = translate("子犬xyz").expect("翻訳結果がありません");
    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.consumed_len, 5);
  }

  #[test]
  fn stops_after_seven_segments() {
    let result = translate(&"子犬".repeat(8)).expect("翻訳結果がありません");
    assert_eq!(result.entries.len(), 7);
    assert!(result.truncated);
    // the eighth 子犬 is left unconsumed
    assert_eq!(result.consumed_len, 14);
  }

  #[test]
  fn advance_by_characters() {
    assert_eq!(advance_chars("子犬は", 2), "は");
    assert_eq!(advance_chars("子犬", 5), "");
  }
}
