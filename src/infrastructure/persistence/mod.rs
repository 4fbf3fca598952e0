//! Mapping store implementations.
//!
//! - [`InMemoryStore`] - Process-local store for development and tests
//! - [`RedisStore`] - Durable store shared by every service instance

mod memory_store;
mod redis_store;

pub use memory_store::InMemoryStore;
pub use redis_store::RedisStore;
