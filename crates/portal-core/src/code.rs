use crate::error::ValidationError;
use crate::reserved::ReservedNames;
use serde::Serialize;
use std::fmt::Display;

/// Characters that would make a code look like a path or a file name.
pub const FORBIDDEN_CHARS: [char; 3] = ['.', '/', '\\'];

/// Longest accepted code, in characters. Matches `links.code VARCHAR(255)`.
pub const MAX_CODE_LEN: usize = 255;

/// A short code identifying a redirect target.
///
/// Codes created through [`Code::parse`] are trimmed, non-empty, not
/// reserved, free of [`FORBIDDEN_CHARS`] and at most [`MAX_CODE_LEN`]
/// characters long. Lookups accept any string, so
/// [`Code::new_unchecked`] exists for the read path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    /// Validates a user supplied code for registration.
    ///
    /// The reserved check runs before the character check so that e.g.
    /// `ui.html` is reported as reserved rather than malformed.
    pub fn parse(raw: &str, reserved: &ReservedNames) -> Result<Self, ValidationError> {
        let code = raw.trim();

        if code.is_empty() {
            return Err(ValidationError::EmptyField("code"));
        }

        if reserved.contains(code) {
            return Err(ValidationError::ReservedCode(code.to_string()));
        }

        if let Some(ch) = code.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Err(ValidationError::ForbiddenCharacter {
                code: code.to_string(),
                ch,
            });
        }

        let len = code.chars().count();
        if len > MAX_CODE_LEN {
            return Err(ValidationError::CodeTooLong {
                len,
                max: MAX_CODE_LEN,
            });
        }

        Ok(Self(code.to_string()))
    }

    /// Creates a `Code` without validation.
    ///
    /// Use this for lookups and for codes read back from storage.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
