//! Alias configuration loaded from TOML.
//!
//! ```toml
//! [aliases]
//! keet = "oeeoz3w6fjjt7bym3ndpa6hhicm8f8naxyk11z4iypeoupn6jzpo"
//! runtime = "nkw138nybdx6mtf98z497czxogzwje5yzu585c66ofba854gw3ro"
//! ```
//!
//! Keys may be written in z-base-32 or hex.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::alias::AliasTable;
use crate::error::LinkError;
use crate::key::DriveKey;

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Link(#[from] LinkError),
}

/// Link handler configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Alias name to drive key. Empty by default.
    #[serde(default)]
    pub aliases: BTreeMap<String, DriveKey>,
}

impl LinkConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: LinkConfig = toml::from_str(text)?;
        // Surface duplicate keys and bad names at load time
        config.alias_table()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), aliases = config.aliases.len(), "loaded link config");
        Ok(config)
    }

    /// Build the validated alias table.
    pub fn alias_table(&self) -> Result<AliasTable, LinkError> {
        AliasTable::new(
            self.aliases
                .iter()
                .map(|(name, key)| (name.clone(), *key)),
        )
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
