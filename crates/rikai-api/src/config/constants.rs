//! API設定の定数定義

/// 入力テキストの最大長（バイト単位）
///
/// 1 回の単語検索が調べる接頭辞は `rikai::matcher::MAX_LOOKUP_LENGTH` 文字までなので、
/// 分割翻訳のコストは文字数に比例する。段落単位の翻訳に足りる長さで打ち切る。
pub const MAX_TEXT_LENGTH: usize = 8 * 1024;

/// デフォルトのバインドアドレス
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5540";

/// デフォルトの辞書データディレクトリ
///
/// `dict.dat`, `dict.idx`, `names.dat`, `names.idx`, `kanji.dat`, `radicals.dat` を置く。
pub const DEFAULT_DATA_DIR: &str = "data";
