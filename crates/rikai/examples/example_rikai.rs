//! rikai sample code
//!
//! ```bash
//! cargo run --example example_rikai -- <data_dir> 食べさせられた
//! ```

use std::error::Error;

use rikai::config::RikaiConfig;
use rikai::models::KanjiSearchOptions;
use rikai::service::RikaiService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
  let mut args = std::env::args().skip(1);
  let data_dir = args.next().unwrap_or_else(|| "data".to_string());
  let input = args.next().unwrap_or_else(|| "日本語を勉強しています".to_string());

  let service = RikaiService::new(&RikaiConfig::with_data_dir(&data_dir))?;
  let snapshot = service.init().await?;
  println!("loaded: {snapshot:?}");

  // 単語検索
  match service.word_search(&input, false, 0).await? {
    Some(result) => {
      println!("word search (match_len={}):", result.lookup.match_len);
      for entry in &result.lookup.entries {
        println!("  {} {}", entry.entry, entry.reason.as_deref().unwrap_or(""));
      }
    }
    None => println!("word search: no match"),
  }

  // 分割翻訳
  if let Some(result) = service.translate(&input).await? {
    println!("translate (consumed {} chars):", result.consumed_len);
    for entry in &result.entries {
      println!("  {entry}");
    }
  }

  // 先頭文字の漢字情報
  let options = KanjiSearchOptions::new(["H", "N", "U"], true);
  if let Some(first) = input.chars().next() {
    let kanji = first.to_string();
    if let Some(entry) = service.kanji_search(&kanji, Some(&options))? {
      println!("kanji {}: {} radical={}", entry.kanji, entry.eigo, entry.radical);
      for (code, value) in entry.references.iter() {
        println!("  {code}: {value}");
      }
    }
  }

  Ok(())
}
