//! モデルモジュール

mod request;
mod response;

pub use request::{KanjiRequest, TranslateRequest, WordSearchRequest};
pub use response::{KanjiResponse, TranslateResponse, WordSearchResponse};
