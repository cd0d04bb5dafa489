use std::path::PathBuf;
use thiserror::Error;

/// Reasons a dictionary source could not be read
///
/// These never escape the dictionary layer as failures; they are logged and
/// turned into an unavailable answer.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dictionary request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("dictionary endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}
