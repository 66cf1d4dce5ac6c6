use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write report: {0}")]
    Write(#[source] std::io::Error),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
impl SummaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SummaryError::Io {
            path: path.into(),
            source,
        }
    }
}
