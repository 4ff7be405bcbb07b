//! Engine configuration.
//!
//! Configuration is plain data with builder methods and can be loaded from
//! TOML:
//!
//! ```toml
//! [binding]
//! default_element = "RadioElement"
//! default_enumerable_element = "RootElement"
//! theme_before_sections = false
//! ```
//!
//! Element kinds are named by their short type name and resolved against
//! the engine's [`TypeRegistry`] when the engine is created.

use std::path::{Path, PathBuf};

use horizon_dialog_core::{BindingError, TypeRegistry, TypeTag};
use serde::{Deserialize, Serialize};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for this schema.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings that control tree construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// Element kind for rows built from objects.
    pub default_element: String,
    /// Element kind for rows of a view enumerable.
    pub default_enumerable_element: String,
    /// Merge the caller's theme into a view-enumerable root before its
    /// section is populated, so the new elements inherit it.
    pub theme_before_sections: bool,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            default_element: "RadioElement".to_string(),
            default_enumerable_element: "RootElement".to_string(),
            theme_before_sections: false,
        }
    }
}

/// Configuration for a [`BindingEngine`](crate::BindingEngine).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub binding: BindingConfig,
}

/// Element kinds resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedKinds {
    pub element: TypeTag,
    pub enumerable_element: TypeTag,
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element kind used for rows built from objects.
    pub fn with_default_element(mut self, name: impl Into<String>) -> Self {
        self.binding.default_element = name.into();
        self
    }

    /// Set the element kind used for rows of a view enumerable.
    pub fn with_default_enumerable_element(mut self, name: impl Into<String>) -> Self {
        self.binding.default_enumerable_element = name.into();
        self
    }

    /// Merge themes into view-enumerable roots before populating them.
    pub fn with_theme_before_sections(mut self, enabled: bool) -> Self {
        self.binding.theme_before_sections = enabled;
        self
    }

    /// Parse configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: "horizon_dialog::config", path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve element kind names against `registry`.
    pub(crate) fn resolve(&self, registry: &TypeRegistry) -> Result<ResolvedKinds, BindingError> {
        let lookup = |name: &str| -> Result<TypeTag, BindingError> {
            registry
                .element_kind(name)?
                .ok_or_else(|| BindingError::Config(format!("unknown element kind '{name}'")))
        };
        Ok(ResolvedKinds {
            element: lookup(&self.binding.default_element)?,
            enumerable_element: lookup(&self.binding.default_enumerable_element)?,
        })
    }
}
