//! Word and name matcher
//!
//! Finds every dictionary entry that matches a prefix of the input, trying
//! the longest prefix first. Each prefix is optionally deinflected, and
//! deinflected candidates are only accepted when the entry's part-of-speech
//! tags agree with the word class the deinflector asked for.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::deinflect::{CandidateWord, Deinflector, Reason, ReasonLocalizer, WordType};
use crate::dictionary::DictionarySnapshot;
use crate::index::{find, line_at};
use crate::models::{LookupEntry, LookupResult, WordSearchResult};
use crate::normalizer::{NormalizedInput, normalize};

/// Result ceiling for word searches
pub const WORDS_MAX_ENTRIES: usize = 7;

/// Result ceiling for name searches
pub const NAMES_MAX_ENTRIES: usize = 20;

/// Longest prefix (in normalized characters) a word search looks up.
/// Every prefix is deinflected, so this bounds the cost of one search.
pub const MAX_LOOKUP_LENGTH: usize = 32;

/// Number of leading tag fragments inspected when checking a word class
const MAX_TAG_FRAGMENT_INDEX: usize = 10;

/// Matcher over one dictionary snapshot
pub struct WordMatcher<'a> {
  snapshot: &'a DictionarySnapshot,
  deinflector: &'a dyn Deinflector,
  localizer: &'a dyn ReasonLocalizer,
}

impl<'a> WordMatcher<'a> {
  /// Creates a matcher
  ///
  /// # Arguments
  /// - `snapshot`: Loaded dictionary data
  /// - `deinflector`: Produces base-form candidates for each prefix
  /// - `localizer`: Labels the reasons in deinflection explanations
  pub fn new(
    snapshot: &'a DictionarySnapshot,
    deinflector: &'a dyn Deinflector,
    localizer: &'a dyn ReasonLocalizer,
  ) -> Self {
    Self {
      snapshot,
      deinflector,
      localizer,
    }
  }

  /// Looks up `input` in the word or name dictionary.
  ///
  /// Deinflection is only applied to word searches. The result ceiling is
  /// [`WORDS_MAX_ENTRIES`] or [`NAMES_MAX_ENTRIES`], lowered to `max` when
  /// `max > 0`. Only the first [`MAX_LOOKUP_LENGTH`] characters of the
  /// normalized input are considered.
  pub fn word_search(&self, input: &str, search_names: bool, max: usize) -> Option<WordSearchResult> {
    // half-width kana fold at most two characters into one
    let mut normalized = normalize(head_chars(input, MAX_LOOKUP_LENGTH * 2 + 1));
    normalized.truncate(MAX_LOOKUP_LENGTH);

    let mut max_results = if search_names { NAMES_MAX_ENTRIES } else { WORDS_MAX_ENTRIES };
    if max > 0 {
      max_results = max_results.min(max);
    }

    let (dict, index) = self.snapshot.dict_and_index(search_names);
    let lookup = self.lookup(&normalized, dict, index, max_results, !search_names)?;

    Some(WordSearchResult {
      lookup,
      names: search_names,
    })
  }

  /// Matches progressively shorter prefixes of `input` against `dict`.
  ///
  /// # Process
  /// 1. For each prefix, longest first, build the candidate list (the
  ///    deinflector's output, or the prefix alone)
  /// 2. Look every candidate up in `index`, reading each new offset's entry
  ///    from `dict`
  /// 3. Candidates other than the first must agree with the entry's tags
  /// 4. Stop once `max_results` entries are collected. An acceptable entry
  ///    past the cap sets `truncated`.
  ///
  /// # Returns
  /// `None` when nothing matched
  pub fn lookup(
    &self,
    input: &NormalizedInput,
    dict: &str,
    index: &str,
    max_results: usize,
    deinflect: bool,
  ) -> Option<LookupResult> {
    let text = &input.text;
    let boundaries: Vec<usize> =
      text.char_indices().map(|(i, _)| i).chain(std::iter::once(text.len())).collect();

    let mut offsets_by_word: HashMap<String, Vec<usize>> = HashMap::new();
    let mut seen_offsets: HashSet<usize> = HashSet::new();
    let mut result = LookupResult::default();
    let mut count = 0usize;
    let mut longest_match = 0usize;

    'prefixes: for prefix_len in (1..=input.char_len()).rev() {
      let prefix = &text[..boundaries[prefix_len]];
      let show_inflection = count != 0;

      let candidates = if deinflect {
        self.deinflector.deinflect(prefix)
      } else {
        vec![CandidateWord::unmodified(prefix)]
      };

      for (i, candidate) in candidates.iter().enumerate() {
        let offsets = offsets_by_word
          .entry(candidate.word.clone())
          .or_insert_with(|| index_offsets(index, &candidate.word));

        for &offset in offsets.iter() {
          if seen_offsets.contains(&offset) {
            continue;
          }
          let Some(entry) = line_at(dict, offset) else {
            continue;
          };

          // the first candidate is the prefix as written
          if i > 0 && !entry_matches_word_type(entry, candidate.word_type) {
            continue;
          }

          if count >= max_results {
            result.truncated = true;
            break;
          }

          seen_offsets.insert(offset);
          count += 1;
          longest_match = longest_match.max(input.original_len(prefix_len));

          let reason = (!candidate.reasons.is_empty())
            .then(|| self.format_reason(&candidate.reasons, show_inflection.then_some(prefix)));
          result.entries.push(LookupEntry {
            entry: entry.to_string(),
            reason,
          });
        }

        if count >= max_results {
          break 'prefixes;
        }
      }
    }

    debug!(
      input = %text,
      entries = count,
      truncated = result.truncated,
      match_len = longest_match,
      "lookup finished"
    );

    if result.entries.is_empty() {
      return None;
    }

    result.match_len = longest_match;
    Some(result)
  }

  /// Renders reason chains as `"< a < b or < c"`.
  ///
  /// Each chain's labels are joined by `" < "`, chains by `" or "`. When
  /// `inflected_prefix` is given it is appended as `" < prefix"`.
  pub fn format_reason(&self, chains: &[Vec<Reason>], inflected_prefix: Option<&str>) -> String {
    let chains: Vec<String> = chains
      .iter()
      .map(|chain| {
        let labels: Vec<_> = chain.iter().map(|&reason| self.localizer.label(reason)).collect();
        labels.join(" < ")
      })
      .collect();

    let mut reason = format!("< {}", chains.join(" or "));
    if let Some(prefix) = inflected_prefix {
      reason.push_str(" < ");
      reason.push_str(prefix);
    }
    reason
  }
}

/// The first `n` characters of `text`
fn head_chars(text: &str, n: usize) -> &str {
  match text.char_indices().nth(n) {
    Some((byte, _)) => &text[..byte],
    None => text,
  }
}

/// Offsets listed on the index line for `word`. A miss yields an empty list.
fn index_offsets(index: &str, word: &str) -> Vec<usize> {
  let Some(line) = find(index, &format!("{word},")) else {
    return Vec::new();
  };
  line.split(',').skip(1).filter_map(|offset| offset.parse().ok()).collect()
}

/// Whether the part-of-speech tags of `entry` satisfy `word_type`.
///
/// The entry is split on `,`, `(` and `)`, and fragments are scanned from
/// index `min(len - 1, 10)` down to 0.
///
/// | class | tag |
/// |-------|-----|
/// | ichidan | `v1` |
/// | godan | `v5…` |
/// | i-adjective | `adj-i` |
/// | kuru | `vk` |
/// | suru | `vs-…` |
pub fn entry_matches_word_type(entry: &str, word_type: WordType) -> bool {
  let fragments: Vec<&str> = entry.split([',', '(', ')']).collect();
  let last = (fragments.len() - 1).min(MAX_TAG_FRAGMENT_INDEX);

  fragments[..=last].iter().rev().any(|fragment| {
    (word_type.intersects(WordType::ICHIDAN_VERB) && *fragment == "v1")
      || (word_type.intersects(WordType::GODAN_VERB) && fragment.starts_with("v5"))
      || (word_type.intersects(WordType::I_ADJ) && *fragment == "adj-i")
      || (word_type.intersects(WordType::KURU_VERB) && *fragment == "vk")
      || (word_type.intersects(WordType::SURU_VERB) && fragment.starts_with("vs-"))
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::deinflect::{EnglishReasonLocalizer, RuleDeinflector};
  use crate::test_support::{CountingDeinflector, build_dictionary, sample_snapshot};

  fn with_matcher<T>(f: impl FnOnce(&WordMatcher<'_>) -> T) -> T {
    let snapshot = sample_snapshot();
    let matcher = WordMatcher::new(&snapshot, &RuleDeinflector, &EnglishReasonLocalizer);
    f(&matcher)
  }

  #[test]
  fn longest_prefix_match() {
    let result = with_matcher(|m| m.word_search("子犬は", false, 0)).expect("子犬 が見つかりません");
    assert!(!result.names);
    assert_eq!(result.lookup.entries.len(), 1);
    assert_eq!(result.lookup.entries[0].entry, "子犬 [こいぬ] /(n) puppy/");
    assert_eq!(result.lookup.entries[0].reason, None);
    assert_eq!(result.lookup.match_len, 2);
    assert!(!result.lookup.truncated);
  }

  #[test]
  fn katakana_input_matches_reading() {
    let result = with_matcher(|m| m.word_search("ｺｲﾇ", false, 0)).expect("こいぬ が見つかりません");
    assert_eq!(result.lookup.entries[0].entry, "子犬 [こいぬ] /(n) puppy/");
    assert_eq!(result.lookup.match_len, 3);
  }

  #[test]
  fn deinflected_match_carries_reason() {
    let result = with_matcher(|m| m.word_search("食べました", false, 0)).expect("食べる が見つかりません");
    assert_eq!(result.lookup.entries.len(), 1);
    assert_eq!(result.lookup.entries[0].entry, "食べる [たべる] /(v1,vt) to eat/(P)/");
    assert_eq!(result.lookup.entries[0].reason.as_deref(), Some("< polite past"));
    assert_eq!(result.lookup.match_len, 5);
  }

  #[test]
  fn adjective_past_is_matched() {
    let result = with_matcher(|m| m.word_search("高かった", false, 0)).expect("高い が見つかりません");
    assert_eq!(result.lookup.entries[0].reason.as_deref(), Some("< past"));
    assert_eq!(result.lookup.match_len, 4);
  }

  #[test]
  fn ichidan_candidate_is_rejected_for_godan_entry() {
    // かえた → かえる (ichidan past), but 帰る is tagged v5r
    assert!(with_matcher(|m| m.word_search("かえた", false, 0)).is_none());

    // the unmodified input is never type-checked
    let result = with_matcher(|m| m.word_search("かえる", false, 0)).expect("帰る が見つかりません");
    assert_eq!(result.lookup.entries.len(), 1);
  }

  #[test]
  fn result_cap_sets_truncated() {
    let result = with_matcher(|m| m.word_search("かみ", false, 2)).expect("かみ が見つかりません");
    assert_eq!(result.lookup.entries.len(), 2);
    assert!(result.lookup.truncated);

    let result = with_matcher(|m| m.word_search("かみ", false, 0)).expect("かみ が見つかりません");
    assert_eq!(result.lookup.entries.len(), 3);
    assert!(!result.lookup.truncated);
  }

  #[test]
  fn name_search_flags_names_and_skips_deinflection() {
    let result = with_matcher(|m| m.word_search("田中さん", true, 0)).expect("田中 が見つかりません");
    assert!(result.names);
    assert_eq!(result.lookup.entries.len(), 1);
    assert_eq!(result.lookup.match_len, 2);

    assert!(with_matcher(|m| m.word_search("食べました", true, 0)).is_none());
  }

  #[test]
  fn shorter_prefixes_contribute_entries() {
    let (dict, index) = build_dictionary(&[
      ("いぬごや", "犬小屋 [いぬごや] /(n) kennel/"),
      ("いぬ", "犬 [いぬ] /(n) dog/"),
    ]);
    let snapshot = DictionarySnapshot::default();
    let matcher = WordMatcher::new(&snapshot, &RuleDeinflector, &EnglishReasonLocalizer);

    let result = matcher.lookup(&normalize("いぬごや"), &dict, &index, 7, false).expect("一致なし");
    let entries: Vec<&str> = result.entries.iter().map(|e| e.entry.as_str()).collect();
    assert_eq!(entries, vec!["犬小屋 [いぬごや] /(n) kennel/", "犬 [いぬ] /(n) dog/"]);
    assert_eq!(result.match_len, 4);
  }

  #[test]
  fn reason_names_inflected_prefix_after_longer_match() {
    let (dict, index) = build_dictionary(&[
      ("見た目 みため", "見た目 [みため] /(n) appearance/(P)/"),
      ("見る みる", "見る [みる] /(v1,vt) to see/(P)/"),
    ]);
    let snapshot = DictionarySnapshot::default();
    let matcher = WordMatcher::new(&snapshot, &RuleDeinflector, &EnglishReasonLocalizer);

    // みため matches as written, then みた deinflects to みる
    let result = matcher.lookup(&normalize("みため"), &dict, &index, 7, true).expect("一致なし");
    assert_eq!(result.entries.len(), 2);
    assert_eq!(result.entries[0].entry, "見た目 [みため] /(n) appearance/(P)/");
    assert_eq!(result.entries[0].reason, None);
    assert_eq!(result.entries[1].entry, "見る [みる] /(v1,vt) to see/(P)/");
    assert_eq!(result.entries[1].reason.as_deref(), Some("< past < みた"));
    assert_eq!(result.match_len, 3);

    // found on the first prefix: no prefix tail
    let result = matcher.lookup(&normalize("みた"), &dict, &index, 7, true).expect("一致なし");
    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].reason.as_deref(), Some("< past"));
  }

  #[test]
  fn long_input_is_cut_to_lookup_length() {
    let snapshot = sample_snapshot();
    let deinflector = CountingDeinflector::default();
    let matcher = WordMatcher::new(&snapshot, &deinflector, &EnglishReasonLocalizer);

    let input = format!("子犬{}", "ぬ".repeat(1000));
    let result = matcher.word_search(&input, false, 0).expect("子犬 が見つかりません");
    assert_eq!(result.lookup.entries[0].entry, "子犬 [こいぬ] /(n) puppy/");
    assert_eq!(result.lookup.match_len, 2);
    assert_eq!(deinflector.calls(), MAX_LOOKUP_LENGTH);

    // half-width voiced pairs still fill the whole window
    deinflector.reset();
    assert!(matcher.word_search(&"ｶﾞ".repeat(100), false, 0).is_none());
    assert_eq!(deinflector.calls(), MAX_LOOKUP_LENGTH);
  }

  #[test]
  fn no_match_returns_none() {
    assert!(with_matcher(|m| m.word_search("ぬぬぬ", false, 0)).is_none());
    assert!(with_matcher(|m| m.word_search("", false, 0)).is_none());
    assert!(with_matcher(|m| m.word_search("dog", false, 0)).is_none());
  }

  #[test]
  fn reason_format() {
    with_matcher(|m| {
      let chains = vec![vec![Reason::Tai, Reason::Negative], vec![Reason::Past]];
      assert_eq!(m.format_reason(&chains, None), "< -tai < negative or < past");
      assert_eq!(m.format_reason(&[vec![Reason::Past]], Some("たべた")), "< past < たべた");
    });
  }

  #[test]
  fn word_type_tags() {
    assert!(entry_matches_word_type("終わる [おわる] /(v5r,vi) to finish/", WordType::GODAN_VERB));
    assert!(!entry_matches_word_type("終わる [おわる] /(v5r,vi) to finish/", WordType::ICHIDAN_VERB));
    assert!(entry_matches_word_type("始める /(aux-v,v1) to begin to/", WordType::ICHIDAN_VERB));
    assert!(entry_matches_word_type("勉強 /(n,vs-s) study/", WordType::SURU_VERB));
    assert!(entry_matches_word_type("来る /(vk) to come/", WordType::KURU_VERB));
    assert!(entry_matches_word_type("高い /(adj-i) high/", WordType::I_ADJ));
    assert!(!entry_matches_word_type("犬 /(n) dog/", WordType::ANY));
  }
}
