//! Error kinds raised by the generation pipeline.
//!
//! Every stage returns [`GenError`]; `main` wraps it in `anyhow` for reporting.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    /// Network failure, non-success HTTP status, unreadable file or malformed JSON.
    #[error("failed to fetch {source_name}: {reason}")]
    Fetch { source_name: String, reason: String },

    #[error(transparent)]
    Transform(#[from] TransformError),

    /// The output file could not be created, written or moved into place.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl GenError {
    pub fn fetch(source_name: impl Into<String>, reason: impl ToString) -> Self {
        GenError::Fetch {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}

/// An identifier that cannot be emitted as an Ada enumeration literal.
#[derive(Error, Debug, PartialEq)]
pub enum TransformError {
    #[error("id {id:?} maps to invalid identifier {ident:?}: {reason}")]
    Invalid {
        id: String,
        ident: String,
        reason: &'static str,
    },

    #[error("ids {first:?} and {second:?} both map to identifier {ident:?}")]
    Collision {
        first: String,
        second: String,
        ident: String,
    },

    #[error("registry {registry} has no entries left after filtering")]
    Empty { registry: String },
}
