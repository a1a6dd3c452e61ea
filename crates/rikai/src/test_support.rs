//! ユニットテスト用の小さな辞書データ生成

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::deinflect::{CandidateWord, Deinflector, RuleDeinflector};
use crate::dictionary::DictionarySnapshot;

/// 呼び出し回数を数えつつルール表に委譲する Deinflector
#[derive(Default)]
pub(crate) struct CountingDeinflector {
  calls: AtomicUsize,
}

impl CountingDeinflector {
  pub(crate) fn calls(&self) -> usize {
    self.calls.load(Ordering::Relaxed)
  }

  pub(crate) fn reset(&self) {
    self.calls.store(0, Ordering::Relaxed);
  }
}

impl Deinflector for CountingDeinflector {
  fn deinflect(&self, word: &str) -> Vec<CandidateWord> {
    self.calls.fetch_add(1, Ordering::Relaxed);
    RuleDeinflector.deinflect(word)
  }
}

/// `(空白区切りの検索キー, エントリー行)` の一覧から `(データ blob, インデックス blob)` を組み立てる
///
/// インデックスはキーのバイト順でソートされ、`key,offset,offset,…` 形式になる。
pub(crate) fn build_dictionary(entries: &[(&str, &str)]) -> (String, String) {
  let mut dict = String::new();
  let mut keys: BTreeMap<&str, Vec<usize>> = BTreeMap::new();

  for (entry_keys, line) in entries {
    let offset = dict.len();
    dict.push_str(line);
    dict.push('\n');
    for key in entry_keys.split(' ') {
      keys.entry(key).or_default().push(offset);
    }
  }

  let index = keys
    .iter()
    .map(|(key, offsets)| {
      let offsets: Vec<String> = offsets.iter().map(ToString::to_string).collect();
      format!("{key},{}\n", offsets.join(","))
    })
    .collect();

  (dict, index)
}

/// 単語・人名・漢字・部首を含むテスト用スナップショット
pub(crate) fn sample_snapshot() -> DictionarySnapshot {
  let (word_dict, word_index) = build_dictionary(&[
    ("子犬 こいぬ", "子犬 [こいぬ] /(n) puppy/"),
    ("犬 いぬ", "犬 [いぬ] /(n) dog/(P)/"),
    ("食べる たべる", "食べる [たべる] /(v1,vt) to eat/(P)/"),
    ("帰る かえる", "帰る [かえる] /(v5r,vi) to return/(P)/"),
    ("高い たかい", "高い [たかい] /(adj-i) high/tall/(P)/"),
    ("紙 かみ", "紙 [かみ] /(n) paper/(P)/"),
    ("神 かみ", "神 [かみ] /(n) god/(P)/"),
    ("髪 かみ", "髪 [かみ] /(n) hair/(P)/"),
  ]);
  let (name_dict, name_index) = build_dictionary(&[
    ("田中 たなか", "田中 [たなか] /Tanaka (surname)/"),
    ("中 なか", "中 [なか] /Naka (surname)/"),
  ]);

  DictionarySnapshot {
    word_dict,
    word_index,
    name_dict,
    name_index,
    // 子 (U+5B50) < 犬 (U+72AC) < 食 (U+98DF) in UTF-8 byte order
    kanji_data: [
      "子|B39 G1 S3 XJ05072 N1253 N1254|シ ス ツ こ -こ ね|おい こう|こへん|child",
      "犬|B94 G1 S4 H2 L1063 N2937|ケン いぬ い-||いぬ|dog",
      "食|B184 G2 S9 H1472|ショク ジキ く.う た.べる|け||eat, food",
    ]
    .iter()
    .map(|line| format!("{line}\n"))
    .collect(),
    radicals: DictionarySnapshot::radical_rows(&radical_text()),
  }
}

/// 部首表（1 始まりの部首番号 = 行番号）
fn radical_text() -> String {
  let mut rows: Vec<String> = (1..=200).map(|n| format!("〇{n}\t1\tだみー\tfiller")).collect();
  rows[38] = "子\t3\tこ\tchild\t子孫".to_string();
  rows[93] = "犬\t4\tいぬ\tdog\t犬状".to_string();
  rows[183] = "食\t9\tしょく\teat\t食飲".to_string();
  rows[10] = "人\t2\tひと\tperson\t子".to_string();
  rows[11] = "壊れた行\t子".to_string();
  rows.join("\n")
}
