//! Short code allocation and resolution service.

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::domain::entities::ShortCode;
use crate::domain::repositories::{MappingStore, StoreError};
use crate::error::ShortenerError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::validate_long_url;

/// Default number of allocation attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Allocates unique short codes and resolves them back to long URLs.
///
/// This is the only component that retries: a candidate code is discarded
/// and regenerated when the store reports it as taken, and every other
/// failure is returned to the caller immediately.
pub struct ShortenerService {
    store: Arc<dyn MappingStore>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(
        store: Arc<dyn MappingStore>,
        generator: Arc<dyn CodeGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            store,
            generator,
            max_attempts,
        }
    }

    /// Returns a short code mapped to `long_url`, allocating one if needed.
    ///
    /// # Deduplication
    ///
    /// When the store supports reverse lookup and the URL was shortened before,
    /// the existing code is returned. This is best-effort: two concurrent calls
    /// for a URL that has no code yet may each allocate their own.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::Validation`] if the URL is malformed; the store is not touched
    /// - [`ShortenerError::GenerationExhausted`] if every attempt collided
    /// - [`ShortenerError::Generation`] if the entropy source failed
    /// - [`ShortenerError::Storage`] on any other store failure
    pub async fn shorten(&self, long_url: &str) -> Result<ShortCode, ShortenerError> {
        validate_long_url(long_url).map_err(|e| ShortenerError::Validation(e.to_string()))?;

        if self.store.supports_reverse_lookup()
            && let Some(existing) = self.store.find_code_for_url(long_url).await
        {
            debug!("Reusing short code {} for {}", existing, long_url);
            return Ok(existing);
        }

        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.generate()?;

            match self.store.get(&candidate).await {
                Ok(_) => {
                    warn!(
                        "Short code {} collision (found via get), retrying (attempt {}/{})",
                        candidate, attempt, self.max_attempts
                    );
                    continue;
                }
                Err(StoreError::CodeNotFound(_)) => {}
                Err(e) => {
                    error!("Error checking short code existence: {}", e);
                    return Err(ShortenerError::Storage(e.to_string()));
                }
            }

            match self.store.save(&candidate, long_url).await {
                Ok(()) => {
                    info!("Generated short code {} for URL {}", candidate, long_url);
                    return Ok(candidate);
                }
                Err(StoreError::CodeExists(_)) => {
                    warn!(
                        "Short code {} collision on save, retrying (attempt {}/{})",
                        candidate, attempt, self.max_attempts
                    );
                }
                Err(e) => {
                    error!("Error saving URL mapping: {}", e);
                    return Err(ShortenerError::Storage(e.to_string()));
                }
            }
        }

        error!(
            "Failed to generate a unique short code after {} attempts",
            self.max_attempts
        );
        Err(ShortenerError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Looks up the long URL for a short code.
    ///
    /// Strings that are not well-formed short codes can never have been
    /// allocated and are reported as not found without a store round-trip.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::NotFound`] if no mapping exists
    /// - [`ShortenerError::Storage`] on store failures
    pub async fn resolve(&self, code: &str) -> Result<String, ShortenerError> {
        let Ok(short_code) = ShortCode::parse(code) else {
            return Err(ShortenerError::NotFound(code.to_string()));
        };

        self.store.get(&short_code).await.map_err(|e| match e {
            StoreError::CodeNotFound(code) => ShortenerError::NotFound(code),
            other => {
                error!("Error retrieving URL for short code {}: {}", short_code, other);
                ShortenerError::Storage(other.to_string())
            }
        })
    }

    /// Reports whether the backing store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await
    }
}
