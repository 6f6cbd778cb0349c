//! Error types for the fallible edges of modelschema.
//!
//! Extraction itself never fails: malformed declarations are reported as
//! [`DiagnosticEvent`](crate::model::DiagnosticEvent)s. `SchemaError` covers
//! the surrounding work of loading configuration and type catalogs and of
//! resolving the root type of a run.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::TypeName;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// File system related errors
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or inconsistent type catalog
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// The requested root type is neither a scalar nor described by the provider
    #[error("Unknown type '{0}'")]
    UnknownType(TypeName),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl SchemaError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog(message.into())
    }

    /// Errors a user can fix by editing their input files.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}
