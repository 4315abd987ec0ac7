//! Absolute URL validation for submitted links.

use url::Url;

/// Reasons a submitted string is not accepted as an absolute URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Parses `input` as an absolute URL.
///
/// A URL is accepted when it parses and both its scheme and its host are
/// non-empty. The input is not normalized; callers forward the original text,
/// so anything the parser would silently clean up is rejected here instead:
/// control characters, surrounding whitespace and a missing `//` authority
/// marker.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for strings without a scheme
/// (e.g. `not-a-url`, `//no-scheme`) or with control characters or
/// surrounding whitespace, and [`UrlValidationError::MissingHost`] for
/// schemes that carry no authority (e.g. `mailto:`, `http:example.com`).
///
/// # Examples
///
/// ```ignore
/// assert!(parse_absolute_url("https://example.com/path").is_ok());
/// assert!(parse_absolute_url("//no-scheme").is_err());
/// assert!(parse_absolute_url("mailto:user@example.com").is_err());
/// assert!(parse_absolute_url("http://example.com\n").is_err());
/// ```
pub fn parse_absolute_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.chars().any(|c| c.is_control()) {
        return Err(UrlValidationError::InvalidFormat(
            "control character in URL".to_string(),
        ));
    }

    if input.trim() != input {
        return Err(UrlValidationError::InvalidFormat(
            "leading or trailing whitespace in URL".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    // `http:example.com` parses with a host; the raw text has no authority.
    let has_authority = input
        .get(url.scheme().len() + 1..)
        .is_some_and(|rest| rest.starts_with("//"));

    match url.host_str() {
        Some(host) if !host.is_empty() && has_authority => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}
