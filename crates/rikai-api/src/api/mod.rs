//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{health_check, post_kanji, post_translate, post_word_search};
pub use routes::{create_router, run_server};
pub use state::AppState;
