//! Short code generation and validation utilities.
//!
//! Generated and user-provided codes share one alphabet: ASCII letters and
//! digits.

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

use crate::domain::errors::LinkError;

/// Compiled pattern every short code must match.
///
/// The pattern accepts the empty string; callers treat an empty custom code
/// as "no custom code".
pub static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]*$").unwrap());

/// Codes that would shadow application routes.
const RESERVED_CODES: &[&str] = &["stats", "api", "health", "static", "favicon"];

/// Generates a random alphanumeric code of `length` characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(7);
/// assert_eq!(code.len(), 7);
/// assert!(SHORTCODE_REGEX.is_match(&code));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if `code` collides with a route name, ignoring case.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(code))
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Allowed characters: ASCII letters and digits
/// - Cannot be a reserved route name (`stats`, `api`, `health`, `static`)
///
/// # Errors
///
/// Returns [`LinkError::InvalidCode`] for disallowed characters and
/// [`LinkError::Reserved`] for reserved names.
pub fn validate_custom_code(code: &str) -> Result<(), LinkError> {
    if !SHORTCODE_REGEX.is_match(code) {
        return Err(LinkError::InvalidCode {
            code: code.to_string(),
        });
    }

    if is_reserved(code) {
        return Err(LinkError::Reserved {
            code: code.to_string(),
        });
    }

    Ok(())
}
