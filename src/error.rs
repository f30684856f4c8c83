//! Error types for style generation and profile handling.

use std::fmt;
use std::io;

/// The main error type for plotstyles operations.
#[derive(Debug)]
pub enum StyleError {
    /// Error while reading a profile file
    Io(io::Error),
    /// Malformed profile JSON
    Json(serde_json::Error),
    /// A per-style attribute sequence does not cover all generated styles
    LengthMismatch {
        attribute: &'static str,
        expected: usize,
        found: usize,
    },
    /// A style name template with an unsupported `%` directive
    InvalidTemplate(String),
    /// Unparseable dash pattern
    InvalidDash(String),
    /// Unparseable marker symbol
    InvalidMarker(String),
    /// Unparseable arrow head
    InvalidArrow(String),
    /// A color name that is not part of the active palette
    UnknownColor(String),
    /// A rendering parameter the configuration does not know about
    UnknownRcKey(String),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::Io(err) => write!(f, "IO error: {}", err),
            StyleError::Json(err) => write!(f, "Invalid profile: {}", err),
            StyleError::LengthMismatch {
                attribute,
                expected,
                found,
            } => write!(
                f,
                "Attribute '{}' provides {} values but {} styles are generated",
                attribute, found, expected
            ),
            StyleError::InvalidTemplate(name) => {
                write!(f, "Invalid style name template: {}", name)
            }
            StyleError::InvalidDash(dash) => write!(f, "Invalid dash pattern: {}", dash),
            StyleError::InvalidMarker(marker) => write!(f, "Invalid marker: {}", marker),
            StyleError::InvalidArrow(head) => write!(f, "Invalid arrow head: {}", head),
            StyleError::UnknownColor(name) => write!(f, "Unknown palette color: {}", name),
            StyleError::UnknownRcKey(key) => write!(f, "Unknown rendering parameter: {}", key),
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StyleError::Io(err) => Some(err),
            StyleError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for StyleError {
    fn from(err: io::Error) -> Self {
        StyleError::Io(err)
    }
}

impl From<serde_json::Error> for StyleError {
    fn from(err: serde_json::Error) -> Self {
        StyleError::Json(err)
    }
}

/// Result type alias for plotstyles operations.
pub type StyleResult<T> = Result<T, StyleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = StyleError::LengthMismatch {
            attribute: "colors",
            expected: 3,
            found: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("colors"));
        assert!(msg.contains("2 values"));
        assert!(msg.contains("3 styles"));
    }
}
