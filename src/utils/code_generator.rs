//! Short code generation.
//!
//! Codes are drawn from the OS entropy source, encoded with the URL-safe
//! base64 alphabet and cut down to [`SHORT_CODE_LENGTH`] characters.

use crate::domain::entities::{SHORT_CODE_LENGTH, ShortCode};
use base64::Engine as _;

/// Number of random bytes drawn per code. Six bytes encode to eight base64
/// characters without padding, which covers the code length.
const CODE_LENGTH_BYTES: usize = 6;

/// The entropy source failed to produce random bytes.
#[derive(Debug, Clone, thiserror::Error)]
#[error("entropy source failure: {0}")]
pub struct GenerationError(String);

/// Source of candidate short codes.
///
/// Implementations do not consult storage; uniqueness is enforced by the
/// allocation loop in [`crate::application::services::ShortenerService`].
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> Result<ShortCode, GenerationError>;
}

/// Generator backed by the operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> Result<ShortCode, GenerationError> {
        generate_code()
    }
}

/// Generates a cryptographically secure random short code.
///
/// # Errors
///
/// Returns [`GenerationError`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.as_str().len(), 6);
/// assert!(code.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> Result<ShortCode, GenerationError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| GenerationError(e.to_string()))?;

    encode_code(&buffer)
}

/// Encodes random bytes into a short code.
///
/// `_` and `-` from the URL-safe alphabet are replaced with `a` and `b`
/// rather than dropped, so the code always keeps its full length.
fn encode_code(bytes: &[u8; CODE_LENGTH_BYTES]) -> Result<ShortCode, GenerationError> {
    let encoded: String = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .encode(bytes)
        .chars()
        .map(|c| match c {
            '_' => 'a',
            '-' => 'b',
            other => other,
        })
        .take(SHORT_CODE_LENGTH)
        .collect();

    ShortCode::parse(encoded).map_err(|e| GenerationError(e.to_string()))
}
