//! Decoder for Chromium "SNSS" session snapshots.
//!
//! A snapshot is an append-only log of typed, length-prefixed commands. Records
//! are replayed against an in-memory model of tabs, windows and tab groups, and
//! the final model is flattened into one [`TabEntry`] per open tab.

mod assemble;
mod command;
mod cursor;
mod error;
mod reader;
mod schema;
mod snapshot;
mod state;

pub use assemble::{assemble_entries, DomainResolver};
pub use command::{Command, CommandKind, GroupKey};
pub use cursor::ByteCursor;
pub use error::{DecodeError, SnssError};
pub use reader::{Record, RecordReader, SNSS_MAGIC, SUPPORTED_VERSIONS};
pub use schema::{TabEntry, TabReport};
pub use snapshot::{
    parse_session, parse_session_file, replay, ReplayedSession, SessionSnapshot, SkippedCommand,
};
pub use state::{
    CommandOutcome, GroupHandle, NavigationEntry, SessionState, Tab, TabGroup, TabHandle, Window,
    WindowHandle,
};
