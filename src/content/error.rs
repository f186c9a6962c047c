//! Errors raised at the content store boundary

use std::path::PathBuf;
use thiserror::Error;

use super::ContentKind;

/// Errors produced while reading and validating content entries
#[derive(Error, Debug)]
pub enum ContentError {
    /// A required singleton file (settings, home page) is missing
    #[error("Required content file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Content kind '{0}' has no singleton entry")]
    NoSingleton(ContentKind),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML front-matter in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Front-matter parsed as YAML but does not match the record's shape
    #[error("Invalid content in {}: field `{field}`: {message}", path.display())]
    Validation {
        path: PathBuf,
        field: String,
        message: String,
    },

    #[error("Invalid date '{value}' in {}", path.display())]
    InvalidDate { path: PathBuf, value: String },
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type ContentResult<T> = std::result::Result<T, ContentError>;
