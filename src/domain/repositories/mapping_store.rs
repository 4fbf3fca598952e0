//! Storage contract for the bidirectional short code / long URL mapping.

use crate::domain::entities::ShortCode;
use async_trait::async_trait;

/// Errors reported by a [`MappingStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The short code is already mapped to a URL.
    #[error("short code already exists: {0}")]
    CodeExists(String),

    /// No mapping exists for the short code.
    #[error("short code not found: {0}")]
    CodeNotFound(String),

    /// Connectivity or protocol failure in the backing store.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence contract over two logical tables: `code -> url` and `url -> code`.
///
/// Mappings are immutable once saved. Implementations must make the existence
/// check and the write in [`MappingStore::save`] atomic with respect to other
/// `save` calls for the same code: two concurrent saves of one code can never
/// both succeed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryStore`] - Lock-guarded hash maps
/// - [`crate::infrastructure::persistence::RedisStore`] - Redis keys with an atomic save script
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Persists `code -> long_url` and `long_url -> code`.
    ///
    /// If the URL already has a reverse entry, that entry is kept so repeated
    /// shortening keeps returning the first code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CodeExists`] if the code is already mapped; nothing
    /// is written in that case.
    /// Returns [`StoreError::Backend`] on backend failures.
    async fn save(&self, code: &ShortCode, long_url: &str) -> StoreResult<()>;

    /// Returns the long URL stored for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CodeNotFound`] if the code is unknown.
    /// Returns [`StoreError::Backend`] on backend failures.
    async fn get(&self, code: &ShortCode) -> StoreResult<String>;

    /// Reverse lookup of the code assigned to `long_url`.
    ///
    /// Best-effort: backend failures are logged and reported as `None`.
    async fn find_code_for_url(&self, long_url: &str) -> Option<ShortCode>;

    /// Whether [`MappingStore::find_code_for_url`] is backed by a real index.
    fn supports_reverse_lookup(&self) -> bool;

    /// Checks that the backend is reachable.
    async fn health_check(&self) -> bool;
}
