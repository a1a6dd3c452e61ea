//! Deinflection reasons and their display labels

use std::borrow::Cow;

use serde::Serialize;

/// One inflection step undone by the deinflector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
  /// ～ませんでした
  PolitePastNegative,
  /// ～ません
  PoliteNegative,
  /// ～ましょう
  PoliteVolitional,
  /// ～ちゃう
  Chau,
  /// ～すぎる
  Sugiru,
  /// ～ました
  PolitePast,
  /// ～たら
  Tara,
  /// ～たり
  Tari,
  /// ～させる
  Causative,
  /// ～られる
  PotentialOrPassive,
  /// ～そう
  Sou,
  /// ～たい
  Tai,
  /// ～ます
  Polite,
  /// ～た
  Past,
  /// ～ない
  Negative,
  /// ～れる
  Passive,
  /// ～ば
  Ba,
  /// ～よう
  Volitional,
  /// ～える
  Potential,
  /// ～て
  Te,
  /// ～ず
  Zu,
  /// ～ろ
  Imperative,
  /// ～な
  ImperativeNegative,
  /// ～ている
  Continuous,
  /// ～く
  Adv,
  /// ～さ
  Noun,
}

/// Maps reasons to display strings
pub trait ReasonLocalizer: Send + Sync {
  /// Display label for a single reason
  fn label(&self, reason: Reason) -> Cow<'static, str>;
}

/// English labels
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishReasonLocalizer;

impl ReasonLocalizer for EnglishReasonLocalizer {
  fn label(&self, reason: Reason) -> Cow<'static, str> {
    Cow::Borrowed(match reason {
      Reason::PolitePastNegative => "polite past negative",
      Reason::PoliteNegative => "polite negative",
      Reason::PoliteVolitional => "polite volitional",
      Reason::Chau => "-chau",
      Reason::Sugiru => "-sugiru",
      Reason::PolitePast => "polite past",
      Reason::Tara => "-tara",
      Reason::Tari => "-tari",
      Reason::Causative => "causative",
      Reason::PotentialOrPassive => "potential or passive",
      Reason::Sou => "-sou",
      Reason::Tai => "-tai",
      Reason::Polite => "polite",
      Reason::Past => "past",
      Reason::Negative => "negative",
      Reason::Passive => "passive",
      Reason::Ba => "-ba",
      Reason::Volitional => "volitional",
      Reason::Potential => "potential",
      Reason::Te => "-te",
      Reason::Zu => "-zu",
      Reason::Imperative => "imperative",
      Reason::ImperativeNegative => "imperative negative",
      Reason::Continuous => "continuous",
      Reason::Adv => "adv",
      Reason::Noun => "noun",
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn english_labels() {
    let localizer = EnglishReasonLocalizer;
    assert_eq!(localizer.label(Reason::PolitePast), "polite past");
    assert_eq!(localizer.label(Reason::PotentialOrPassive), "potential or passive");
    assert_eq!(localizer.label(Reason::Te), "-te");
  }

  #[test]
  fn reasons_serialize_as_kebab_case() {
    let json = serde_json::to_string(&[Reason::PolitePastNegative, Reason::Adv]).unwrap();
    assert_eq!(json, r#"["polite-past-negative","adv"]"#);
  }
}
