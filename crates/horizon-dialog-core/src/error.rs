//! Error types for Horizon Dialog.

use crate::tree::RootId;

/// The main error type for tree construction and binding operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// A precondition on the caller's input was violated.
    #[error("Invalid binding input: {0}")]
    InvalidInput(String),

    /// A view or element type could not be created.
    #[error("Cannot instantiate '{type_name}': {reason}")]
    Instantiation { type_name: String, reason: String },

    /// A root key does not resolve in the tree.
    #[error("Root {0:?} does not exist in the tree")]
    UnknownRoot(RootId),

    /// Section or element coordinates do not exist.
    #[error("No element at index {index} in section {section}")]
    ElementOutOfRange { section: usize, index: usize },

    /// The view parser rejected a view.
    #[error("View parsing failed: {0}")]
    Parse(String),

    /// Engine configuration is unusable.
    #[error("Invalid engine configuration: {0}")]
    Config(String),
}

impl BindingError {
    /// Create an input precondition error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an instantiation error.
    pub fn instantiation(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Instantiation {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a view parsing error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

/// A specialized Result type for Horizon Dialog operations.
pub type Result<T> = std::result::Result<T, BindingError>;
