#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use shortlink::application::services::{DEFAULT_MAX_ATTEMPTS, ShortenerService};
use shortlink::domain::entities::ShortCode;
use shortlink::domain::repositories::{MappingStore, StoreError, StoreResult};
use shortlink::infrastructure::persistence::InMemoryStore;
use shortlink::state::AppState;
use shortlink::utils::code_generator::RandomCodeGenerator;

pub const TEST_BASE_URL: &str = "http://sho.rt/";

/// Store whose backend is permanently unreachable.
pub struct FailingStore;

#[async_trait]
impl MappingStore for FailingStore {
    async fn save(&self, _code: &ShortCode, _long_url: &str) -> StoreResult<()> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn get(&self, _code: &ShortCode) -> StoreResult<String> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn find_code_for_url(&self, _long_url: &str) -> Option<ShortCode> {
        None
    }

    fn supports_reverse_lookup(&self) -> bool {
        false
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn state_with_store(store: Arc<dyn MappingStore>) -> AppState {
    let shortener = ShortenerService::new(
        store,
        Arc::new(RandomCodeGenerator),
        DEFAULT_MAX_ATTEMPTS,
    );

    AppState::new(Arc::new(shortener), TEST_BASE_URL)
}

/// State over a fresh in-memory store; the store is returned for seeding.
pub fn create_test_state() -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    (state_with_store(store.clone()), store)
}

pub fn create_failing_state() -> AppState {
    state_with_store(Arc::new(FailingStore))
}

pub async fn seed(store: &InMemoryStore, code: &str, url: &str) {
    store
        .save(&ShortCode::parse(code).unwrap(), url)
        .await
        .unwrap();
}

/// Strips the base URL from a returned short URL.
pub fn code_of(short_url: &str) -> &str {
    short_url
        .strip_prefix(TEST_BASE_URL)
        .expect("short URL must start with the base URL")
}
