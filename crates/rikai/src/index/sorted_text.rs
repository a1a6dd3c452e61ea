//! ソート済みテキストの二分探索
//!
//! 行単位で辞書順にソートされた改行区切りテキストを、行配列を作らずに直接二分探索します。
//! テキスト自体のソート順がインデックスとなるため、補助的なデータ構造は構築しません。

use std::cmp::Ordering;

/// `blob` から `key` で始まる行を探し、その行全体（改行を含まない）を返す
///
/// # 処理内容
/// - `[start, end)` のバイト範囲を保持し、中点を含む行の先頭まで後方に戻る
/// - その行の先頭 `key.len()` バイトと `key` を比較して範囲を狭める
/// - 前方一致した時点でその行を返す
///
/// 一致は純粋な前方一致であり、`"子犬,"` は `"子犬,120,340"` の行に一致する。
///
/// # 戻り値
/// 一致した行。見つからない場合、または `key` / `blob` が空の場合は `None`
pub fn find<'a>(blob: &'a str, key: &str) -> Option<&'a str> {
  let bytes = blob.as_bytes();
  let key = key.as_bytes();
  if key.is_empty() || bytes.is_empty() {
    return None;
  }

  // start は常に行頭を指す
  let mut start = 0usize;
  let mut end = bytes.len();

  while start < end {
    let mid = start + (end - start) / 2;
    let line_start = line_start_at(bytes, mid);
    let line_end = line_end_from(bytes, line_start);

    let line = &bytes[line_start..line_end];
    let prefix = &line[..key.len().min(line.len())];

    match key.cmp(prefix) {
      Ordering::Less => end = line_start,
      Ordering::Greater => start = line_end + 1,
      // 改行位置は常に UTF-8 の文字境界
      Ordering::Equal => return Some(&blob[line_start..line_end]),
    }
  }

  None
}

/// `pos` を含む行の先頭位置
fn line_start_at(bytes: &[u8], pos: usize) -> usize {
  bytes[..pos].iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1)
}

/// `line_start` から始まる行の終端（改行の位置、なければ末尾）
fn line_end_from(bytes: &[u8], line_start: usize) -> usize {
  bytes[line_start..].iter().position(|&b| b == b'\n').map_or(bytes.len(), |i| line_start + i)
}

/// `offset` から始まる 1 行を返す（データ blob からのエントリー取得用）
///
/// `offset` が範囲外、または文字境界でない場合は `None`
pub fn line_at(blob: &str, offset: usize) -> Option<&str> {
  let rest = blob.get(offset..)?;
  Some(rest.split('\n').next().unwrap_or(rest))
}
