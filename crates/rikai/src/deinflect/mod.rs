//! deinflect モジュール
//!
//! 活用形（動詞・い形容詞）を辞書形の候補に戻す処理を提供します。
//! マッチャーは [`Deinflector`] トレイト経由でのみこのモジュールを利用します。

pub mod reason;
pub mod rules;
pub mod word_type;

pub use reason::{EnglishReasonLocalizer, Reason, ReasonLocalizer};
pub use rules::{Rule, RuleDeinflector};
pub use word_type::WordType;

/// 活用を戻した結果の候補語
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateWord {
  /// 候補となる表層形
  pub word: String,
  /// この候補の辞書形が属すべき品詞（ビットフラグ）
  pub word_type: WordType,
  /// 活用理由の連鎖。外側の活用から順に並ぶ。複数の経路で到達した場合は経路ごとに 1 本
  pub reasons: Vec<Vec<Reason>>,
}

impl CandidateWord {
  /// 入力そのもの（品詞はワイルドカード、理由なし）
  pub fn unmodified(word: impl Into<String>) -> Self {
    Self {
      word: word.into(),
      word_type: WordType::ANY,
      reasons: Vec::new(),
    }
  }
}

/// 表層形 → 辞書形候補 の変換
///
/// 返り値の先頭は必ず [`CandidateWord::unmodified`] であること。
pub trait Deinflector: Send + Sync {
  /// `word` の候補一覧を返す
  fn deinflect(&self, word: &str) -> Vec<CandidateWord>;
}
