//! index モジュール
//!
//! ソート済みテキスト blob の二分探索を提供します。全ての検索処理が共有するプリミティブです。

pub mod sorted_text;

pub use sorted_text::{find, line_at};
