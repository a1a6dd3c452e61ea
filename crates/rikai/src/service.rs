// crates/rikai/src/service.rs

//! RikaiService: rikai クレートの統合ファサード。
//!
//! - 辞書データのロード (DictionaryLoader)
//! - 活用の解除 (Deinflector)
//! - 活用理由の表示名 (ReasonLocalizer)
//!
//! 外部からは、この構造体だけを意識すればよい。

use std::sync::Arc;

use crate::config::RikaiConfig;
use crate::deinflect::{Deinflector, EnglishReasonLocalizer, ReasonLocalizer, RuleDeinflector};
use crate::dictionary::{DictionaryLoader, DictionarySnapshot};
use crate::errors::{RikaiError, RikaiResult};
use crate::kanji::kanji_search;
use crate::matcher::WordMatcher;
use crate::models::{KanjiEntry, KanjiSearchOptions, TranslateResult, WordSearchResult};

/// rikai クレートの統合ファサード。
///
/// `word_search` / `translate` は辞書データのロード完了を待ってから検索する
/// （未ロードなら最初の呼び出しでロードする）。`kanji_search` は同期 API のため、
/// 事前に [`init`](Self::init) でロードしておくこと。
pub struct RikaiService {
  /// 辞書データローダー
  loader: DictionaryLoader,

  /// 活用解除エンジン
  deinflector: Arc<dyn Deinflector>,

  /// 活用理由の表示名
  localizer: Arc<dyn ReasonLocalizer>,
}

impl RikaiService {
  /// 構築（設定検証のみ。データはまだ読まない）
  ///
  /// # エラー
  /// - 設定が不正（試行回数 0、データディレクトリが存在しない等）
  pub fn new(config: &RikaiConfig) -> RikaiResult<Self> {
    config.validate()?;

    Ok(Self {
      loader: DictionaryLoader::new(config.loader.clone()),
      deinflector: Arc::new(RuleDeinflector),
      localizer: Arc::new(EnglishReasonLocalizer),
    })
  }

  /// 活用解除エンジンを差し替える
  #[must_use]
  pub fn with_deinflector(mut self, deinflector: Arc<dyn Deinflector>) -> Self {
    self.deinflector = deinflector;
    self
  }

  /// 活用理由の表示名を差し替える
  #[must_use]
  pub fn with_localizer(mut self, localizer: Arc<dyn ReasonLocalizer>) -> Self {
    self.localizer = localizer;
    self
  }

  /// 辞書データをロードする（2 回目以降はキャッシュを返す）
  pub async fn init(&self) -> RikaiResult<Arc<DictionarySnapshot>> {
    Ok(self.loader.load().await?)
  }

  /// ロード済みのスナップショット
  pub fn snapshot(&self) -> Option<Arc<DictionarySnapshot>> {
    self.loader.get()
  }

  /// `snapshot` を読むマッチャーを作る
  pub fn matcher<'a>(&'a self, snapshot: &'a DictionarySnapshot) -> WordMatcher<'a> {
    WordMatcher::new(snapshot, self.deinflector.as_ref(), self.localizer.as_ref())
  }

  /// 単語・人名検索
  ///
  /// # 引数
  /// - `input`: 検索文字列（先頭から前方一致）
  /// - `search_names`: 人名辞書を検索するか
  /// - `max`: 件数上限（0 なら既定値）
  pub async fn word_search(
    &self,
    input: &str,
    search_names: bool,
    max: usize,
  ) -> RikaiResult<Option<WordSearchResult>> {
    let snapshot = self.init().await?;
    Ok(self.matcher(&snapshot).word_search(input, search_names, max))
  }

  /// 文章全体の分割翻訳
  pub async fn translate(&self, text: &str) -> RikaiResult<Option<TranslateResult>> {
    let snapshot = self.init().await?;
    Ok(self.matcher(&snapshot).translate(text))
  }

  /// 漢字検索
  ///
  /// # エラー
  /// - 辞書データが未ロード (`RikaiError::NotLoaded`)
  pub fn kanji_search(
    &self,
    kanji: &str,
    options: Option<&KanjiSearchOptions>,
  ) -> RikaiResult<Option<KanjiEntry>> {
    let snapshot = self.snapshot().ok_or(RikaiError::NotLoaded)?;
    Ok(kanji_search(&snapshot, kanji, options))
  }
}

impl std::fmt::Debug for RikaiService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RikaiService").field("loader", &self.loader).finish_non_exhaustive()
  }
}
