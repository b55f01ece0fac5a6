use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the ngtrap library.
///
/// Only conditions that abort an invocation live here. Unknown catalog keys,
/// bad trap patterns, duplicate registrations, unreadable directories and
/// unpaired templates are logged and skipped instead.
#[derive(Debug, Error)]
pub enum NgtrapError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, NgtrapError>;

impl NgtrapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NgtrapError::Io {
            path: path.into(),
            source,
        }
    }
}
