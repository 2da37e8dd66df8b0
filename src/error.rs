//! Error taxonomy for the generation pipeline
//!
//! Every variant is fatal to the current invocation: no retries, no partial
//! artifact commitment (a run that fails before writing leaves nothing new
//! on disk; a run that fails mid-write leaves the partial file as-is).

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenError>;

type Cause = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum GenError {
    /// A raw entry cannot yield a code point, or a line-oriented source
    /// violates the `key codepoint` format contract.
    #[error("malformed entry {key:?}: {reason}")]
    MalformedEntry { key: String, reason: String },

    /// Network fetch or local metadata read failed.
    #[error("source unavailable ({source_desc}): {cause}")]
    SourceUnavailable {
        source_desc: String,
        #[source]
        cause: Cause,
    },

    /// An artifact could not be persisted.
    #[error("failed to write {}: {cause}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}

impl GenError {
    pub fn malformed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        GenError::MalformedEntry {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn unavailable(source_desc: impl Into<String>, cause: impl Into<Cause>) -> Self {
        GenError::SourceUnavailable {
            source_desc: source_desc.into(),
            cause: cause.into(),
        }
    }
}
