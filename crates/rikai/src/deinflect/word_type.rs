//! Word type bit flags
//!
//! A deinflected candidate carries the grammatical classes its base form must
//! belong to. The matcher checks these against the tags of the dictionary entry.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::Serialize;

/// Set of grammatical word classes
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct WordType(u8);

impl WordType {
  /// Ichidan verb (ru-verb)
  pub const ICHIDAN_VERB: WordType = WordType(1 << 0);
  /// Godan verb (u-verb)
  pub const GODAN_VERB: WordType = WordType(1 << 1);
  /// i-adjective
  pub const I_ADJ: WordType = WordType(1 << 2);
  /// The irregular verb 来る
  pub const KURU_VERB: WordType = WordType(1 << 3);
  /// する and suru-compounds
  pub const SURU_VERB: WordType = WordType(1 << 4);
  /// Only the unmodified input carries this bit. Rules for endings that can
  /// only appear at the very end of a word require it.
  pub const INITIAL: WordType = WordType(1 << 5);
  /// Wildcard carried by the unmodified input
  pub const ANY: WordType = WordType(0xff);
  /// Every verb class
  pub const VERB: WordType = WordType(
    Self::ICHIDAN_VERB.0 | Self::GODAN_VERB.0 | Self::KURU_VERB.0 | Self::SURU_VERB.0,
  );

  /// Raw bits
  pub const fn bits(self) -> u8 {
    self.0
  }

  /// Whether every bit of `other` is set in `self`
  pub const fn contains(self, other: WordType) -> bool {
    self.0 & other.0 == other.0
  }

  /// Whether `self` and `other` share at least one bit
  pub const fn intersects(self, other: WordType) -> bool {
    self.0 & other.0 != 0
  }

  /// Whether no bit is set
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }
}

impl BitOr for WordType {
  type Output = WordType;

  fn bitor(self, rhs: WordType) -> WordType {
    WordType(self.0 | rhs.0)
  }
}

impl BitOrAssign for WordType {
  fn bitor_assign(&mut self, rhs: WordType) {
    self.0 |= rhs.0;
  }
}

impl BitAnd for WordType {
  type Output = WordType;

  fn bitand(self, rhs: WordType) -> WordType {
    WordType(self.0 & rhs.0)
  }
}

impl fmt::Debug for WordType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if *self == WordType::ANY {
      return f.write_str("WordType(ANY)");
    }

    let names = [
      (WordType::ICHIDAN_VERB, "v1"),
      (WordType::GODAN_VERB, "v5"),
      (WordType::I_ADJ, "adj-i"),
      (WordType::KURU_VERB, "vk"),
      (WordType::SURU_VERB, "vs"),
      (WordType::INITIAL, "initial"),
    ];
    let set: Vec<&str> =
      names.iter().filter(|(flag, _)| self.contains(*flag)).map(|(_, name)| *name).collect();
    write!(f, "WordType({})", set.join("|"))
  }
}
