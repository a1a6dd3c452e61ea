//! Loaded dictionary data
//!
//! The six flat data files, held in memory as one immutable value.
//! Built once by [`DictionaryLoader`](super::DictionaryLoader) (or directly in tests)
//! and passed by reference into the matcher and the kanji entry builder.

use std::fmt;

/// One of the six flat data files the engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFile {
  /// Word dictionary entries (`dict.dat`)
  WordDict,
  /// Sorted index over the word dictionary (`dict.idx`)
  WordIndex,
  /// Name dictionary entries (`names.dat`)
  NameDict,
  /// Sorted index over the name dictionary (`names.idx`)
  NameIndex,
  /// Sorted kanji reference data (`kanji.dat`)
  KanjiData,
  /// Radical table, one tab-delimited row per radical (`radicals.dat`)
  Radicals,
}

impl DataFile {
  /// Every data file, in load order.
  pub const ALL: [DataFile; 6] = [
    DataFile::WordDict,
    DataFile::WordIndex,
    DataFile::NameDict,
    DataFile::NameIndex,
    DataFile::KanjiData,
    DataFile::Radicals,
  ];

  /// File name under the data directory.
  pub fn file_name(&self) -> &'static str {
    match self {
      DataFile::WordDict => "dict.dat",
      DataFile::WordIndex => "dict.idx",
      DataFile::NameDict => "names.dat",
      DataFile::NameIndex => "names.idx",
      DataFile::KanjiData => "kanji.dat",
      DataFile::Radicals => "radicals.dat",
    }
  }
}

impl fmt::Display for DataFile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.file_name())
  }
}

/// Immutable in-memory copy of the dictionary data.
///
/// The index and kanji blobs are newline-delimited text sorted by each line's
/// leading key; the dictionary blobs are addressed by byte offset taken from
/// the corresponding index.
#[derive(Clone, Default)]
pub struct DictionarySnapshot {
  /// Word dictionary entries
  pub word_dict: String,
  /// `key,offset,offset,…` index over `word_dict`
  pub word_index: String,
  /// Name dictionary entries
  pub name_dict: String,
  /// `key,offset,offset,…` index over `name_dict`
  pub name_index: String,
  /// `kanji|refs|onkun|nanori|bushumei|english` lines
  pub kanji_data: String,
  /// Non-empty rows of the radical table
  pub radicals: Vec<String>,
}

impl DictionarySnapshot {
  /// Returns the `(dictionary, index)` pair for word or name search.
  pub fn dict_and_index(&self, search_names: bool) -> (&str, &str) {
    if search_names {
      (&self.name_dict, &self.name_index)
    } else {
      (&self.word_dict, &self.word_index)
    }
  }

  /// Splits raw radical file text into rows, dropping empty lines.
  pub fn radical_rows(text: &str) -> Vec<String> {
    text.split('\n').filter(|line| !line.is_empty()).map(str::to_string).collect()
  }
}

/// The blobs are large, so only their sizes are shown.
impl fmt::Debug for DictionarySnapshot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionarySnapshot")
      .field("word_dict_bytes", &self.word_dict.len())
      .field("word_index_bytes", &self.word_index.len())
      .field("name_dict_bytes", &self.name_dict.len())
      .field("name_index_bytes", &self.name_index.len())
      .field("kanji_data_bytes", &self.kanji_data.len())
      .field("radical_rows", &self.radicals.len())
      .finish()
  }
}
