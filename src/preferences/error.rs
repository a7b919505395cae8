use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Failed to read preferences file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to write preferences file '{0}'")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Preferences file '{0}' is not valid JSON")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("Failed to encode preference value")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to move preferences into place at '{0}'")]
    Persist(PathBuf, #[source] tempfile::PersistError),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
