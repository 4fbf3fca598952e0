//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::entities::ShortCode;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    /// Prefix prepended to codes in responses; always ends with `/`.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>, base_url: impl Into<Arc<str>>) -> Self {
        Self {
            shortener,
            base_url: base_url.into(),
        }
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &ShortCode) -> String {
        format!("{}{}", self.base_url, code)
    }
}
