#![deny(unsafe_code)]

use std::fmt;
use std::path::PathBuf;

/// Table a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Industry,
    City,
    LocationRange,
    ContactFunction,
    IndustrySpecific,
    Preset,
    Column,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Industry => "industry",
            Self::City => "city",
            Self::LocationRange => "location range",
            Self::ContactFunction => "contact function",
            Self::IndustrySpecific => "industry-specific option",
            Self::Preset => "preset",
            Self::Column => "column",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML options {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse CSV {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("invalid record in {origin}: {message}")]
    InvalidRecord { origin: String, message: String },

    #[error("invalid catalog: {message}")]
    Invalid { message: String },

    #[error("{kind} not found: {name}")]
    NotFound { kind: LookupKind, name: String },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    pub fn not_found(kind: LookupKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
