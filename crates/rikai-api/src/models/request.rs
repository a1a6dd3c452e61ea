//! リクエストモデル定義

use rikai::kanji::REF_ABBREVIATIONS;
use rikai::models::KanjiSearchOptions;
use serde::Deserialize;

/// 単語・人名検索リクエスト
#[derive(Debug, Deserialize)]
pub struct WordSearchRequest {
  /// 検索文字列（先頭から前方一致）
  pub text: String,
  /// 人名辞書を検索するか
  #[serde(default)]
  pub search_names: bool,
  /// 件数上限（0 または省略で既定値）
  #[serde(default)]
  pub max_results: usize,
}

/// 分割翻訳リクエスト
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
  /// 翻訳対象のテキスト
  pub text: String,
}

/// 漢字検索リクエスト
#[derive(Debug, Deserialize)]
pub struct KanjiRequest {
  /// 検索する漢字（1 文字）
  pub kanji: String,
  /// 表示する参照コード（省略時は全て）
  #[serde(default)]
  pub included_references: Option<Vec<String>>,
  /// 構成部首を含めるか
  #[serde(default)]
  pub include_components: bool,
}

impl KanjiRequest {
  /// ライブラリーの検索オプションに変換する
  ///
  /// 参照コード・構成部首のどちらも指定がなければ `None`（全参照コードを表示）
  #[must_use]
  pub fn options(&self) -> Option<KanjiSearchOptions> {
    if self.included_references.is_none() && !self.include_components {
      return None;
    }

    let included = match &self.included_references {
      Some(codes) => codes.clone(),
      None => REF_ABBREVIATIONS.iter().map(|r| r.abbrev.to_string()).collect(),
    };
    Some(KanjiSearchOptions::new(included, self.include_components))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_word_search_defaults() {
    let json = r#"{"text": "食べました"}"#;
    let req: WordSearchRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "食べました");
    assert!(!req.search_names);
    assert_eq!(req.max_results, 0);
  }

  #[test]
  fn deserialize_translate_request() {
    let json = r#"{"text": ""}"#;
    let req: TranslateRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "");
  }

  #[test]
  fn kanji_options_without_preferences_is_none() {
    let req: KanjiRequest = serde_json::from_str(r#"{"kanji": "犬"}"#).unwrap();
    assert!(req.options().is_none());
  }

  #[test]
  fn kanji_components_keep_all_references() {
    let req: KanjiRequest =
      serde_json::from_str(r#"{"kanji": "犬", "include_components": true}"#).unwrap();
    let options = req.options().unwrap();
    assert!(options.include_kanji_components);
    assert_eq!(options.included_references.len(), REF_ABBREVIATIONS.len());
  }

  #[test]
  fn kanji_reference_filter() {
    let req: KanjiRequest =
      serde_json::from_str(r#"{"kanji": "犬", "included_references": ["H", "U"]}"#).unwrap();
    let options = req.options().unwrap();
    assert!(!options.include_kanji_components);
    assert!(options.included_references.contains("H"));
    assert!(!options.included_references.contains("N"));
  }
}
