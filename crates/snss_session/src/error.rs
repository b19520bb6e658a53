use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single fixed-width or string read against a payload cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of data at offset {offset}: needed {needed} bytes, {remaining} left")]
    UnexpectedEndOfData {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
}

impl DecodeError {
    #[must_use]
    pub fn end_of_data(offset: usize, needed: usize, remaining: usize) -> Self {
        Self::UnexpectedEndOfData {
            offset,
            needed,
            remaining,
        }
    }
}

/// Fatal parse failures. Any of these discards the whole snapshot.
#[derive(Debug, Error)]
pub enum SnssError {
    #[error("cannot read session file {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session header is truncated: needed {needed} bytes, found {available}")]
    TruncatedHeader { needed: usize, available: usize },

    #[error("bad magic header {found:02x?}; expected \"SNSS\"")]
    BadMagicHeader { found: [u8; 4] },

    #[error("unsupported SNSS version {found}; expected 1 or 3")]
    UnsupportedVersion { found: u32 },

    #[error("truncated record at offset {offset}: needed {needed} bytes, {remaining} left")]
    TruncatedRecord {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
}

impl SnssError {
    #[must_use]
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn truncated_record(offset: usize, needed: usize, remaining: usize) -> Self {
        Self::TruncatedRecord {
            offset,
            needed,
            remaining,
        }
    }

    /// Byte offset the failure was detected at, when the failure is positional.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::TruncatedHeader { .. } | Self::BadMagicHeader { .. } => Some(0),
            Self::UnsupportedVersion { .. } => Some(4),
            Self::TruncatedRecord { offset, .. } => Some(*offset),
            Self::SourceUnavailable { .. } => None,
        }
    }
}
