//! Stylesheet loading errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::style::InvalidTheme;

/// Error returned when a stylesheet cannot be read, parsed, or validated.
#[derive(Debug, Error)]
pub enum StylesheetError {
    #[error("failed to read stylesheet {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML stylesheet: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON stylesheet: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is not `.yaml`, `.yml`, or `.json`.
    #[error("unsupported stylesheet format: {} (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The document parsed but declares an unusable theme.
    #[error("theme '{theme}': {message}")]
    Invalid { theme: String, message: String },
}

impl From<InvalidTheme> for StylesheetError {
    fn from(err: InvalidTheme) -> Self {
        StylesheetError::Invalid {
            theme: err.theme,
            message: err.message,
        }
    }
}
