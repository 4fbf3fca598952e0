//! Domain layer containing the core types and storage contracts.
//!
//! - [`entities`] - Value types such as [`entities::ShortCode`]
//! - [`repositories`] - Storage trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Allocation logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
