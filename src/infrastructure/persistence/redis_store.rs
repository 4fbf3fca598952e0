//! Redis-backed mapping store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, Script, aio::ConnectionManager};
use tracing::{debug, info, warn};

use crate::domain::entities::ShortCode;
use crate::domain::repositories::{MappingStore, StoreError, StoreResult};

/// Namespace for `code -> long URL` keys.
const SHORT_KEY_PREFIX: &str = "short:";
/// Namespace for `long URL -> code` keys.
const URL_KEY_PREFIX: &str = "url:";

/// Writes both directions of a mapping in one server-side step.
///
/// KEYS[1] = short:{code}, KEYS[2] = url:{long_url}
/// ARGV[1] = long_url,     ARGV[2] = code
///
/// Returns 1 when the mapping was created, 0 when the code already existed.
const SAVE_SCRIPT: &str = r#"
if redis.call('SET', KEYS[1], ARGV[1], 'NX') then
    redis.call('SET', KEYS[2], ARGV[2], 'NX')
    return 1
end
return 0
"#;

fn short_key(code: &ShortCode) -> String {
    format!("{}{}", SHORT_KEY_PREFIX, code)
}

fn url_key(long_url: &str) -> String {
    format!("{}{}", URL_KEY_PREFIX, long_url)
}

fn backend_error(e: redis::RedisError) -> StoreError {
    StoreError::Backend(e.to_string())
}

/// Mapping store persisted in Redis as plain string keys without expiration.
///
/// Uses `ConnectionManager` for a shared, auto-reconnecting multiplexed
/// connection. `save` runs as a Lua script, so the existence check and both
/// writes are atomic on the server even across processes.
pub struct RedisStore {
    client: ConnectionManager,
    save_script: Script,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Backend(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Backend(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            save_script: Script::new(SAVE_SCRIPT),
        })
    }
}

#[async_trait]
impl MappingStore for RedisStore {
    async fn save(&self, code: &ShortCode, long_url: &str) -> StoreResult<()> {
        let mut conn = self.client.clone();

        let created: i32 = self
            .save_script
            .key(short_key(code))
            .key(url_key(long_url))
            .arg(long_url)
            .arg(code.as_str())
            .invoke_async(&mut conn)
            .await
            .map_err(backend_error)?;

        if created == 0 {
            return Err(StoreError::CodeExists(code.to_string()));
        }

        debug!("Redis SAVE: {} -> {}", code, long_url);
        Ok(())
    }

    async fn get(&self, code: &ShortCode) -> StoreResult<String> {
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(short_key(code))
            .await
            .map_err(backend_error)?
            .ok_or_else(|| StoreError::CodeNotFound(code.to_string()))
    }

    async fn find_code_for_url(&self, long_url: &str) -> Option<ShortCode> {
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(url_key(long_url)).await {
            Ok(Some(code)) => match ShortCode::parse(code) {
                Ok(code) => Some(code),
                Err(e) => {
                    warn!("Ignoring malformed reverse entry for {}: {}", long_url, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Redis error checking for original URL {}: {}", long_url, e);
                None
            }
        }
    }

    fn supports_reverse_lookup(&self) -> bool {
        true
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
