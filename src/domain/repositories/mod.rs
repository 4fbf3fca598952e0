//! Storage trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Stores
//!
//! - [`MappingStore`] - Bidirectional short code / long URL mapping
//!
//! # Testing
//!
//! See integration tests in `tests/store_*.rs` for usage examples.

pub mod mapping_store;

pub use mapping_store::{MappingStore, StoreError, StoreResult};

#[cfg(test)]
pub use mapping_store::MockMappingStore;
