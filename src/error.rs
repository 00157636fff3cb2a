use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClivmError>;

#[derive(Error, Debug)]
pub enum ClivmError {
    #[error("no entries found for {name}")]
    NotFound { name: String },

    #[error("invalid version '{version}' for {name}: {reason}")]
    InvalidVersion {
        name: String,
        version: String,
        reason: &'static str,
    },

    #[error("{name} already has version {version}")]
    DuplicateVersion { name: String, version: String },

    #[error("invalid tool name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("{action} {path:?}")]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("record store error for '{id}': {reason}")]
    Store { id: String, reason: String },

    #[error("interactive prompt failed")]
    Prompt(#[source] dialoguer::Error),

    #[error("cancelled")]
    Cancelled,
}

impl ClivmError {
    pub fn fs(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn store(id: impl Into<String>, reason: impl ToString) -> Self {
        Self::Store {
            id: id.into(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(name: &str) -> Self {
        Self::NotFound {
            name: name.to_string(),
        }
    }

    pub fn unknown_version(name: &str, version: &str) -> Self {
        Self::InvalidVersion {
            name: name.to_string(),
            version: version.to_string(),
            reason: "not a registered version",
        }
    }
}
