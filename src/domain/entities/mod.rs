//! Core domain entities.
//!
//! - [`ShortCode`] - The fixed-length key of a URL mapping

pub mod short_code;

pub use short_code::{InvalidShortCode, SHORT_CODE_LENGTH, ShortCode};
