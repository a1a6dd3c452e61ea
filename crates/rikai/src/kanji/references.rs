//! Kanji dictionary reference codes

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Reference sources understood by the kanji data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReferenceCode {
  /// Classical (Nelson/Bushu) radical number
  B,
  /// Classical radical when it differs from `B`
  C,
  /// Frequency rank
  F,
  /// School grade
  G,
  /// Stroke count
  S,
  /// Halpern
  H,
  /// Heisig
  L,
  /// Henshall
  E,
  /// Kanji Learners Dictionary
  DK,
  /// Nelson
  N,
  /// New Nelson
  V,
  /// Pinyin
  Y,
  /// SKIP pattern
  P,
  /// Tuttle Kanji & Kana
  IN,
  /// Tuttle Kanji Dictionary
  I,
  /// Unicode code point
  U,
  /// De Roo
  DR,
  /// O'Neill (Essential Kanji)
  DO,
  /// O'Neill (Japanese Names)
  O,
  /// Four Corner code
  Q,
  /// Morohashi index
  MN,
  /// Morohashi volume/page
  MP,
  /// Gakken
  K,
  /// Korean reading
  W,
}

impl ReferenceCode {
  /// Every known code
  pub const ALL: [ReferenceCode; 24] = [
    ReferenceCode::B,
    ReferenceCode::C,
    ReferenceCode::F,
    ReferenceCode::G,
    ReferenceCode::S,
    ReferenceCode::H,
    ReferenceCode::L,
    ReferenceCode::E,
    ReferenceCode::DK,
    ReferenceCode::N,
    ReferenceCode::V,
    ReferenceCode::Y,
    ReferenceCode::P,
    ReferenceCode::IN,
    ReferenceCode::I,
    ReferenceCode::U,
    ReferenceCode::DR,
    ReferenceCode::DO,
    ReferenceCode::O,
    ReferenceCode::Q,
    ReferenceCode::MN,
    ReferenceCode::MP,
    ReferenceCode::K,
    ReferenceCode::W,
  ];

  /// Parses the letter code of a reference token
  pub fn from_code(code: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|known| known.as_str() == code)
  }

  /// Letter code as written in the data file
  pub fn as_str(&self) -> &'static str {
    match self {
      ReferenceCode::B => "B",
      ReferenceCode::C => "C",
      ReferenceCode::F => "F",
      ReferenceCode::G => "G",
      ReferenceCode::S => "S",
      ReferenceCode::H => "H",
      ReferenceCode::L => "L",
      ReferenceCode::E => "E",
      ReferenceCode::DK => "DK",
      ReferenceCode::N => "N",
      ReferenceCode::V => "V",
      ReferenceCode::Y => "Y",
      ReferenceCode::P => "P",
      ReferenceCode::IN => "IN",
      ReferenceCode::I => "I",
      ReferenceCode::U => "U",
      ReferenceCode::DR => "DR",
      ReferenceCode::DO => "DO",
      ReferenceCode::O => "O",
      ReferenceCode::Q => "Q",
      ReferenceCode::MN => "MN",
      ReferenceCode::MP => "MP",
      ReferenceCode::K => "K",
      ReferenceCode::W => "W",
    }
  }
}

/// Reference values of one kanji, keyed by letter code.
///
/// Known codes are kept separately from codes this crate does not recognize.
/// Serializes as a single flat map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanjiReferences {
  known: BTreeMap<ReferenceCode, String>,
  other: BTreeMap<String, String>,
}

impl KanjiReferences {
  /// Records `value` under `code`. A code seen again is appended to the
  /// existing value, separated by two spaces.
  pub fn append(&mut self, code: &str, value: &str) {
    let slot = match ReferenceCode::from_code(code) {
      Some(known) => self.known.entry(known).or_default(),
      None => self.other.entry(code.to_string()).or_default(),
    };

    if slot.is_empty() {
      value.clone_into(slot);
    } else {
      slot.push_str("  ");
      slot.push_str(value);
    }
  }

  /// Value recorded under `code`
  pub fn get(&self, code: &str) -> Option<&str> {
    let value = match ReferenceCode::from_code(code) {
      Some(known) => self.known.get(&known),
      None => self.other.get(code),
    };
    value.map(String::as_str)
  }

  /// Value recorded under a known code
  pub fn get_known(&self, code: ReferenceCode) -> Option<&str> {
    self.known.get(&code).map(String::as_str)
  }

  /// All `(code, value)` pairs, known codes first
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self
      .known
      .iter()
      .map(|(code, value)| (code.as_str(), value.as_str()))
      .chain(self.other.iter().map(|(code, value)| (code.as_str(), value.as_str())))
  }

  /// Number of codes recorded
  pub fn len(&self) -> usize {
    self.known.len() + self.other.len()
  }

  /// Whether nothing is recorded
  pub fn is_empty(&self) -> bool {
    self.known.is_empty() && self.other.is_empty()
  }
}

impl Serialize for KanjiReferences {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.len()))?;
    for (code, value) in self.iter() {
      map.serialize_entry(code, value)?;
    }
    map.end()
  }
}

/// A reference source shown alongside kanji entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ReferenceAbbreviation {
  /// Letter code
  pub abbrev: &'static str,
  /// Human-readable source name
  pub name: &'static str,
}

/// Reference sources in display order
pub const REF_ABBREVIATIONS: [ReferenceAbbreviation; 11] = [
  ReferenceAbbreviation { abbrev: "H", name: "Halpern" },
  ReferenceAbbreviation { abbrev: "L", name: "Heisig" },
  ReferenceAbbreviation { abbrev: "E", name: "Henshall" },
  ReferenceAbbreviation { abbrev: "DK", name: "Kanji Learners Dictionary" },
  ReferenceAbbreviation { abbrev: "N", name: "Nelson" },
  ReferenceAbbreviation { abbrev: "V", name: "New Nelson" },
  ReferenceAbbreviation { abbrev: "Y", name: "PinYin" },
  ReferenceAbbreviation { abbrev: "P", name: "Skip Pattern" },
  ReferenceAbbreviation { abbrev: "IN", name: "Tuttle Kanji & Kana" },
  ReferenceAbbreviation { abbrev: "I", name: "Tuttle Kanji Dictionary" },
  ReferenceAbbreviation { abbrev: "U", name: "Unicode" },
];
