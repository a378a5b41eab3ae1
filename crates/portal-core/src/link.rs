use crate::code::Code;
use crate::error::ValidationError;
use serde::Serialize;

/// A stored mapping from a short code to its target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub code: Code,
    /// The redirect target, returned verbatim on resolution.
    pub url: String,
}

impl LinkEntry {
    pub fn new(code: Code, url: impl Into<String>) -> Self {
        Self {
            code,
            url: url.into(),
        }
    }
}

/// Trims a target URL and rejects it if nothing is left.
///
/// No scheme or format checks are applied.
pub fn parse_url(raw: &str) -> Result<String, ValidationError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(ValidationError::EmptyField("url"));
    }
    Ok(url.to_string())
}
