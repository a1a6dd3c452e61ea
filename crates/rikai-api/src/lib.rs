//! rikai-api crate
//!
//! Web server providing Japanese dictionary lookup as HTTP API.
//!
//! ## Endpoints
//! - `POST /word-search` - Word / name search with deinflection
//! - `POST /translate` - Greedy whole-text translation
//! - `POST /kanji` - Kanji reference lookup
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5540/word-search \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "食べました"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{
  KanjiRequest, KanjiResponse, TranslateRequest, TranslateResponse, WordSearchRequest,
  WordSearchResponse,
};
pub use service::RikaiApiServiceFull;
