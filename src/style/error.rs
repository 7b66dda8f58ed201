//! Resolution errors.

use thiserror::Error;

/// Error returned when a size, variant, or theme name is not recognized.
///
/// Resolution never falls back to a default: any unknown key is reported
/// to the caller together with the keys that would have been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The theme has no entry for the requested size.
    #[error("unknown size '{key}' for theme '{theme}' (expected one of: {})", .expected.join(", "))]
    UnknownSize {
        theme: String,
        key: String,
        expected: Vec<String>,
    },
    /// The theme has no entry for the requested variant.
    #[error("unknown variant '{key}' for theme '{theme}' (expected one of: {})", .expected.join(", "))]
    UnknownVariant {
        theme: String,
        key: String,
        expected: Vec<String>,
    },
    /// No theme with this name is registered.
    #[error("unknown theme '{name}' (expected one of: {})", .expected.join(", "))]
    UnknownTheme { name: String, expected: Vec<String> },
}

impl ResolveError {
    /// The key (or theme name) that failed to resolve.
    pub fn key(&self) -> &str {
        match self {
            ResolveError::UnknownSize { key, .. } | ResolveError::UnknownVariant { key, .. } => key,
            ResolveError::UnknownTheme { name, .. } => name,
        }
    }
}

/// Error returned when text does not name a member of a closed key set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {})", .expected.join(", "))]
pub struct KeyParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: Vec<&'static str>,
}

/// Error returned when a theme cannot be registered.
///
/// A usable theme has a non-empty name, at least one size and one variant,
/// and no blank or whitespace-padded key or empty rule set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("theme '{theme}': {message}")]
pub struct InvalidTheme {
    pub theme: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_size_display() {
        let err = ResolveError::UnknownSize {
            theme: "button".to_string(),
            key: "huge".to_string(),
            expected: vec!["small".into(), "normal".into(), "large".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("unknown size 'huge'"));
        assert!(msg.contains("'button'"));
        assert!(msg.contains("small, normal, large"));
        assert_eq!(err.key(), "huge");
    }

    #[test]
    fn test_unknown_theme_display() {
        let err = ResolveError::UnknownTheme {
            name: "chip".to_string(),
            expected: vec!["button".into()],
        };
        assert_eq!(
            err.to_string(),
            "unknown theme 'chip' (expected one of: button)"
        );
        assert_eq!(err.key(), "chip");
    }

    #[test]
    fn test_key_parse_error_display() {
        let err = KeyParseError {
            kind: "size",
            value: "xl".to_string(),
            expected: vec!["small", "normal", "large"],
        };
        assert_eq!(
            err.to_string(),
            "unknown size 'xl' (expected one of: small, normal, large)"
        );
    }

    #[test]
    fn test_invalid_theme_display() {
        let err = InvalidTheme {
            theme: "chip".to_string(),
            message: "no sizes defined".to_string(),
        };
        assert_eq!(err.to_string(), "theme 'chip': no sizes defined");
    }
}
