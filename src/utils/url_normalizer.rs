//! URL parsing and canonicalization for submitted destinations.

use url::Url;

/// Why a submitted URL was refused.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("Only HTTP and HTTPS URLs can be shortened")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Parses `input` and returns its canonical string form.
///
/// Surrounding whitespace is ignored. The scheme must be `http` or `https`
/// (this rejects `javascript:`, `data:`, `file:` and friends). The `url`
/// crate already lowercases the host and drops default ports; the fragment
/// is kept because single-page sites route on it.
///
/// # Errors
///
/// - [`UrlNormalizationError::InvalidFormat`] for strings that are not absolute URLs
/// - [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes
/// - [`UrlNormalizationError::MissingHost`] for URLs without a host
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_url("HTTPS://EXAMPLE.COM:443/Path").unwrap(),
///     "https://example.com/Path"
/// );
/// assert!(normalize_url("not-a-url").is_err());
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let url = Url::parse(input.trim())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url.into()),
        _ => Err(UrlNormalizationError::MissingHost),
    }
}
