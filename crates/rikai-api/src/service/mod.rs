//! service module
pub mod rikai_api_service;

pub use rikai_api_service::{RikaiApiService, RikaiApiServiceFull};
