//! In-process implementation of the mapping store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::ShortCode;
use crate::domain::repositories::{MappingStore, StoreError, StoreResult};

#[derive(Debug, Default)]
struct Tables {
    /// code -> long URL
    urls: HashMap<String, String>,
    /// long URL -> code
    codes: HashMap<String, String>,
}

/// Mapping store kept in process memory.
///
/// Both directions live behind a single `RwLock`: `save` takes the write lock
/// for the existence check and both inserts, lookups share the read lock.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        debug!("Using in-memory mapping store");
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.tables.read().await.urls.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MappingStore for InMemoryStore {
    async fn save(&self, code: &ShortCode, long_url: &str) -> StoreResult<()> {
        let mut tables = self.tables.write().await;

        if tables.urls.contains_key(code.as_str()) {
            return Err(StoreError::CodeExists(code.to_string()));
        }

        tables
            .urls
            .insert(code.to_string(), long_url.to_string());
        tables
            .codes
            .entry(long_url.to_string())
            .or_insert_with(|| code.to_string());

        Ok(())
    }

    async fn get(&self, code: &ShortCode) -> StoreResult<String> {
        self.tables
            .read()
            .await
            .urls
            .get(code.as_str())
            .cloned()
            .ok_or_else(|| StoreError::CodeNotFound(code.to_string()))
    }

    async fn find_code_for_url(&self, long_url: &str) -> Option<ShortCode> {
        let tables = self.tables.read().await;
        let code = tables.codes.get(long_url)?;
        ShortCode::parse(code.as_str()).ok()
    }

    fn supports_reverse_lookup(&self) -> bool {
        true
    }

    async fn health_check(&self) -> bool {
        true
    }
}
