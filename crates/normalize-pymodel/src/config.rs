//! Generation-run configuration.
//!
//! Example `pymodel.toml`:
//! ```toml
//! output_model_type = "pydantic_v2.BaseModel"
//! target_python_version = "3.11"
//! use_type_alias = true
//! ```
//!
//! The target version is always explicit; it is never taken from the
//! environment the generator happens to run in.

use crate::error::Error;
use crate::flavor::OutputFlavor;
use crate::model_set::{ModelSet, assemble_with};
use crate::registry::StrategyRegistry;
use crate::version::PythonVersion;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Model(#[from] Error),
}

/// User toggles consumed by model selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationConfig {
    pub output_model_type: OutputFlavor,
    pub target_python_version: PythonVersion,
    /// Render single-valued entities as type aliases instead of wrapped roots.
    pub use_type_alias: bool,
}

impl GenerationConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML. Model type and version identifiers are
    /// checked after the document parses, so they fail as [`Error`].
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        let defaults = Self::default();
        Ok(Self {
            output_model_type: match raw.output_model_type {
                Some(name) => name.parse::<OutputFlavor>()?,
                None => defaults.output_model_type,
            },
            target_python_version: match raw.target_python_version {
                Some(version) => version.parse::<PythonVersion>()?,
                None => defaults.target_python_version,
            },
            use_type_alias: raw.use_type_alias,
        })
    }

    /// Assemble the model set these settings describe.
    pub fn assemble(&self) -> ModelSet {
        self.assemble_with(&StrategyRegistry::new())
    }

    pub fn assemble_with(&self, registry: &StrategyRegistry) -> ModelSet {
        assemble_with(
            registry,
            self.output_model_type,
            self.target_python_version,
            self.use_type_alias,
        )
    }
}

/// The file as written, before identifiers are resolved.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    output_model_type: Option<String>,
    target_python_version: Option<String>,
    use_type_alias: bool,
}
