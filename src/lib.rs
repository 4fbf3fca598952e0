//! # Shortlink
//!
//! A small URL shortening service built with Axum, backed by Redis or process memory.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Short code type and the mapping store contract
//! - **Application Layer** ([`application`]) - Code allocation and redirect resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory and Redis mapping stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /shorten` - `{"url": "..."}` → `{"short_url": "..."}`
//! - `GET /{code}` - `302 Found` to the original URL
//! - `GET /health` - Store health
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_BACKEND="redis"
//! export REDIS_URL="redis://localhost:6379/0"
//! export BASE_URL="http://localhost:8080/"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, ShortenerError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::ShortCode;
    pub use crate::domain::repositories::{MappingStore, StoreError};
    pub use crate::error::{AppError, ShortenerError};
    pub use crate::infrastructure::persistence::{InMemoryStore, RedisStore};
    pub use crate::state::AppState;
}
