//! Error types for the theme system.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Errors that can occur while building theme values.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// Invalid literal for a style value.
    #[error("Invalid value for '{property}': {message}")]
    InvalidValue { property: String, message: String },

    /// A URI reference could not be parsed.
    #[error("Invalid URI '{uri}': {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// Raw pixel data did not match the declared dimensions.
    #[error("Bitmap of {width}x{height} needs {expected} bytes, got {actual}")]
    BitmapSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

impl StyleError {
    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }

    /// Create a URI error.
    pub fn invalid_uri(uri: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUri {
            uri: uri.into(),
            source,
        }
    }
}
