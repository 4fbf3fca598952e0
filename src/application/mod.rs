//! Application layer services implementing business logic.
//!
//! Services consume the storage traits from [`crate::domain`] and provide a
//! clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Short code allocation and resolution

pub mod services;
