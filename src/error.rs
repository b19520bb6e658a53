use std::path::PathBuf;

use snss_session::SnssError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecapError {
    #[error(transparent)]
    Session(#[from] SnssError),

    #[error("I/O error while {operation} at {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no session file found in {dir}")]
    NoSessionFile { dir: PathBuf },

    #[error("could not determine the home directory")]
    MissingHomeDir,

    #[error("session extraction is not supported on this platform")]
    UnsupportedPlatform,

    #[error("no Chromium-based browser session directory was found")]
    NoBrowserDetected,

    #[error("failed to write tab report: {0}")]
    WriteReport(#[source] std::io::Error),

    #[error("failed to serialize tab report: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl RecapError {
    #[must_use]
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}
