//! Long URL validation.
//!
//! A URL is accepted when it parses as an absolute URL that carries a host.
//! Parsing is the only check: no scheme allow-list, no reachability probe.
//! Control characters are refused up front because the parser silently drops
//! tabs and newlines while the stored input must stay a valid `Location` header.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must not contain control characters")]
    ControlCharacter,
}

/// Checks that `input` is a well-formed absolute URL.
///
/// The input itself is not rewritten; callers store it verbatim.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input,
/// [`UrlValidationError::ControlCharacter`] for input containing tabs,
/// line breaks or other ASCII control characters,
/// [`UrlValidationError::InvalidFormat`] when parsing fails and
/// [`UrlValidationError::MissingHost`] for URLs without an authority
/// such as `mailto:` links.
pub fn validate_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::ControlCharacter);
    }

    let url = Url::parse(input)?;

    if !url.has_host() {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}
