//! Helper functions used across the application:
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Long URL validation

pub mod code_generator;
pub mod url_validator;
