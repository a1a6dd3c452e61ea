//! 漢字エントリーの組み立て
//!
//! ソート済み漢字データから 1 文字分の行を取り出し、構造化された [`KanjiEntry`] を作ります。
//!
//! 行の形式: `kanji|refs|onkun|nanori|bushumei|eigo`

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use super::references::{KanjiReferences, REF_ABBREVIATIONS, ReferenceCode};
use crate::dictionary::DictionarySnapshot;
use crate::index::find;
use crate::models::{KanjiComponent, KanjiEntry, KanjiSearchOptions};

/// これ未満のコードポイントは漢字として扱わない
const MIN_KANJI_CODE_POINT: u32 = 0x3000;

/// 漢字データ 1 行のフィールド数
const KANJI_FIELD_COUNT: usize = 6;

/// 部首表 1 行に必要な最小タブ区切りフィールド数
const MIN_RADICAL_FIELDS: usize = 4;

/// 参照コードトークン（英大文字のコード + 値）
static REFERENCE_TOKEN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^([A-Z]+)(.*)").expect("Invalid reference token pattern"));

/// 漢字 1 文字の情報を検索する
///
/// # 処理内容
/// 1. 先頭文字のコードポイントが U+3000 未満なら `None`
/// 2. 漢字データを二分探索し、ちょうど 6 フィールドの行のみ受け付ける
/// 3. 参照コードを解析し、`U` にコードポイントの 16 進表記を格納する
/// 4. `B`（部首番号）から部首を引く
/// 5. `include_kanji_components` 指定時は構成部首を列挙する
///
/// # 戻り値
/// 見つからない、行が不正、または部首番号が不正な場合は `None`
pub fn kanji_search(
  snapshot: &DictionarySnapshot,
  kanji: &str,
  options: Option<&KanjiSearchOptions>,
) -> Option<KanjiEntry> {
  let first = kanji.chars().next()?;
  let code_point = u32::from(first);
  if code_point < MIN_KANJI_CODE_POINT {
    return None;
  }

  let mut key = [0u8; 4];
  let line = find(&snapshot.kanji_data, first.encode_utf8(&mut key))?;

  let fields: Vec<&str> = line.split('|').collect();
  if fields.len() != KANJI_FIELD_COUNT {
    debug!(kanji = %first, fields = fields.len(), "漢字データ行のフィールド数が不正です");
    return None;
  }

  let references = parse_references(fields[1], code_point);

  let displayed_references = REF_ABBREVIATIONS
    .iter()
    .filter(|reference| {
      options.is_none_or(|options| options.included_references.contains(reference.abbrev))
    })
    .copied()
    .collect();

  let Some(radical_index) = radical_index(&references, snapshot.radicals.len()) else {
    warn!(kanji = %first, bushu = ?references.get_known(ReferenceCode::B), "部首番号が不正です");
    return None;
  };
  let radical_row = &snapshot.radicals[radical_index];
  let radical = radical_row.chars().next().map(String::from).unwrap_or_default();

  let components = options
    .filter(|options| options.include_kanji_components)
    .map(|_| collect_components(&snapshot.radicals, radical_index, fields[0]));

  Some(KanjiEntry {
    kanji: fields[0].to_string(),
    references,
    displayed_references,
    onkun: split_words(fields[2]),
    nanori: split_words(fields[3]),
    bushumei: split_words(fields[4]),
    radical,
    eigo: fields[5].to_string(),
    components,
  })
}

/// 空白区切りリストを分割する（空フィールドは空リスト）
fn split_words(field: &str) -> Vec<String> {
  if field.trim().is_empty() {
    return Vec::new();
  }
  field.split(' ').map(str::to_string).collect()
}

/// 参照コードフィールドを解析する
///
/// `U` は先に 4 桁以上の大文字 16 進で格納され、データ側の同じコードは後ろに連結される。
fn parse_references(field: &str, code_point: u32) -> KanjiReferences {
  let mut references = KanjiReferences::default();
  references.append(ReferenceCode::U.as_str(), &format!("{code_point:04X}"));

  for token in field.split(' ') {
    if let Some((code, value)) = parse_reference_token(token) {
      references.append(code, value);
    }
  }

  references
}

/// `"N1253"` → `("N", "1253")`
fn parse_reference_token(token: &str) -> Option<(&str, &str)> {
  let captures = REFERENCE_TOKEN.captures(token)?;
  let code = captures.get(1)?.as_str();
  let value = captures.get(2).map_or("", |m| m.as_str());
  Some((code, value))
}

/// `B`（1 始まり）を部首表の行番号（0 始まり）に変換する
fn radical_index(references: &KanjiReferences, radical_count: usize) -> Option<usize> {
  let number: usize = references.get_known(ReferenceCode::B)?.trim().parse().ok()?;
  let index = number.checked_sub(1)?;
  (index < radical_count).then_some(index)
}

/// 構成部首: 自身の部首行を先頭に、`kanji` を含む他の行を表の順に並べる
fn collect_components(radicals: &[String], radical_index: usize, kanji: &str) -> Vec<KanjiComponent> {
  let others = radicals
    .iter()
    .enumerate()
    .filter(|(index, row)| *index != radical_index && row.contains(kanji))
    .map(|(_, row)| row);

  std::iter::once(&radicals[radical_index])
    .chain(others)
    .filter_map(|row| component_from_row(row))
    .collect()
}

/// 部首表 1 行から構成部首を作る（フィールド不足の行は `None`）
fn component_from_row(row: &str) -> Option<KanjiComponent> {
  let fields: Vec<&str> = row.split('\t').collect();
  if fields.len() < MIN_RADICAL_FIELDS {
    return None;
  }
  Some(KanjiComponent {
    radical: fields[0].to_string(),
    yomi: fields[2].to_string(),
    english: fields[3].to_string(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::sample_snapshot;

  #[test]
  fn parses_six_field_line() {
    let snapshot = sample_snapshot();
    let entry = kanji_search(&snapshot, "犬", None).expect("犬 が見つかりません");

    assert_eq!(entry.kanji, "犬");
    assert_eq!(entry.onkun, vec!["ケン", "いぬ", "い-"]);
    assert!(entry.nanori.is_empty());
    assert_eq!(entry.bushumei, vec!["いぬ"]);
    assert_eq!(entry.eigo, "dog");
    assert_eq!(entry.radical, "犬");
    assert_eq!(entry.references.get("B"), Some("94"));
    assert_eq!(entry.references.get("L"), Some("1063"));
    assert_eq!(entry.displayed_references.len(), REF_ABBREVIATIONS.len());
    assert!(entry.components.is_none());
  }

  #[test]
  fn unicode_reference_is_upper_hex() {
    let snapshot = sample_snapshot();
    for kanji in ["子", "犬", "食"] {
      let entry = kanji_search(&snapshot, kanji, None).expect("漢字が見つかりません");
      let expected = format!("{:X}", u32::from(kanji.chars().next().unwrap()));
      assert_eq!(entry.references.get("U"), Some(expected.as_str()));
    }
    assert_eq!(parse_references("", 0x3005).get("U"), Some("3005"));
  }

  #[test]
  fn repeated_and_unknown_codes() {
    let snapshot = sample_snapshot();
    let entry = kanji_search(&snapshot, "子", None).expect("子 が見つかりません");
    assert_eq!(entry.references.get("N"), Some("1253  1254"));
    assert_eq!(entry.references.get("XJ"), Some("05072"));
    assert_eq!(entry.nanori, vec!["おい", "こう"]);
  }

  #[test]
  fn wrong_field_count_is_rejected() {
    let mut snapshot = sample_snapshot();
    snapshot.kanji_data = "犬|B94|ケン||dog\n".to_string();
    assert!(kanji_search(&snapshot, "犬", None).is_none());

    snapshot.kanji_data = "犬|B94|ケン|||dog|extra\n".to_string();
    assert!(kanji_search(&snapshot, "犬", None).is_none());

    snapshot.kanji_data = "犬|B94|ケン|||dog\n".to_string();
    assert!(kanji_search(&snapshot, "犬", None).is_some());
  }

  #[test]
  fn rejects_below_cjk_range() {
    let snapshot = sample_snapshot();
    assert!(kanji_search(&snapshot, "A", None).is_none());
    assert!(kanji_search(&snapshot, "", None).is_none());
    assert!(kanji_search(&snapshot, "猫", None).is_none());
  }

  #[test]
  fn invalid_radical_number_is_none() {
    let mut snapshot = sample_snapshot();
    snapshot.kanji_data = "犬|G1 S4|ケン|||dog\n".to_string();
    assert!(kanji_search(&snapshot, "犬", None).is_none());

    snapshot.kanji_data = "犬|B0|ケン|||dog\n".to_string();
    assert!(kanji_search(&snapshot, "犬", None).is_none());

    snapshot.kanji_data = "犬|B999|ケン|||dog\n".to_string();
    assert!(kanji_search(&snapshot, "犬", None).is_none());

    snapshot.kanji_data = "犬|Bxx|ケン|||dog\n".to_string();
    assert!(kanji_search(&snapshot, "犬", None).is_none());
  }

  #[test]
  fn displayed_references_follow_options() {
    let snapshot = sample_snapshot();
    let options = KanjiSearchOptions::new(["U", "H", "ZZ"], false);
    let entry = kanji_search(&snapshot, "犬", Some(&options)).expect("犬 が見つかりません");

    let shown: Vec<&str> = entry.displayed_references.iter().map(|r| r.abbrev).collect();
    assert_eq!(shown, vec!["H", "U"]);
    assert!(entry.components.is_none());

    let entry = kanji_search(&snapshot, "犬", Some(&KanjiSearchOptions::default())).unwrap();
    assert!(entry.displayed_references.is_empty());
  }

  #[test]
  fn components_start_with_own_radical() {
    let snapshot = sample_snapshot();
    let options = KanjiSearchOptions::new(Vec::<String>::new(), true);
    let entry = kanji_search(&snapshot, "子", Some(&options)).expect("子 が見つかりません");

    let components = entry.components.expect("構成部首がありません");
    let radicals: Vec<&str> = components.iter().map(|c| c.radical.as_str()).collect();
    // the 2-field row containing 子 is skipped
    assert_eq!(radicals, vec!["子", "人"]);
    assert_eq!(components[0].yomi, "こ");
    assert_eq!(components[0].english, "child");
    assert_eq!(components[1].english, "person");
  }

  #[test]
  fn reference_token_parts() {
    assert_eq!(parse_reference_token("IN123"), Some(("IN", "123")));
    assert_eq!(parse_reference_token("P1-4-3"), Some(("P", "1-4-3")));
    assert_eq!(parse_reference_token("B"), Some(("B", "")));
    assert_eq!(parse_reference_token("123"), None);
    assert_eq!(parse_reference_token(""), None);
  }
}
