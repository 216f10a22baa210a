//! ROPS-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, OpsError>;

/// Top-level error type for the recycling operations console.
#[derive(Debug, Error)]
pub enum OpsError {
    #[error("[ROPS-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[ROPS-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[ROPS-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[ROPS-2001] unknown record id: {id}")]
    UnknownRecord { id: String },

    #[error("[ROPS-2002] unknown collection: {name}")]
    UnknownCollection { name: String },

    #[error("[ROPS-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[ROPS-3001] terminal failure: {details}")]
    Terminal { details: String },

    #[error("[ROPS-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[ROPS-3900] runtime failure: {details}")]
    Runtime { details: String },
}

impl OpsError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "ROPS-1001",
            Self::MissingConfig { .. } => "ROPS-1002",
            Self::ConfigParse { .. } => "ROPS-1003",
            Self::UnknownRecord { .. } => "ROPS-2001",
            Self::UnknownCollection { .. } => "ROPS-2002",
            Self::Serialization { .. } => "ROPS-2101",
            Self::Terminal { .. } => "ROPS-3001",
            Self::Io { .. } => "ROPS-3002",
            Self::Runtime { .. } => "ROPS-3900",
        }
    }

    /// Whether retrying might resolve the failure.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Terminal { .. } | Self::Runtime { .. }
        )
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for OpsError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for OpsError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}

impl From<toml::ser::Error> for OpsError {
    fn from(value: toml::ser::Error) -> Self {
        Self::Serialization {
            context: "toml",
            details: value.to_string(),
        }
    }
}
