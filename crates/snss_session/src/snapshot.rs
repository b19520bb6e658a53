use std::path::Path;

use tracing::{debug, trace, warn};

use crate::assemble::{assemble_entries, DomainResolver};
use crate::command::CommandKind;
use crate::error::{DecodeError, SnssError};
use crate::reader::RecordReader;
use crate::schema::TabEntry;
use crate::state::{CommandOutcome, SessionState};

/// A recognized command whose payload could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCommand {
    pub offset: usize,
    pub kind: CommandKind,
    pub error: DecodeError,
}

/// State rebuilt from every record of one file, before assembly.
#[derive(Debug)]
pub struct ReplayedSession {
    pub version: u32,
    pub records: usize,
    pub skipped_commands: Vec<SkippedCommand>,
    pub state: SessionState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub version: u32,
    pub records: usize,
    pub skipped_commands: Vec<SkippedCommand>,
    pub entries: Vec<TabEntry>,
}

/// Replays all records of `bytes`. A fatal framing error discards everything
/// decoded so far.
pub fn replay(bytes: &[u8]) -> Result<ReplayedSession, SnssError> {
    let mut reader = RecordReader::new(bytes)?;
    let version = reader.version();
    debug!(version, len = bytes.len(), "reading SNSS session");

    let mut state = SessionState::new();
    let mut records = 0usize;
    let mut skipped_commands = Vec::new();

    while let Some(record) = reader.next_record()? {
        records += 1;
        match state.apply_record(record.command_type, record.payload) {
            CommandOutcome::Applied(kind) => {
                trace!(offset = record.offset, ?kind, "applied command");
            }
            CommandOutcome::Unrecognized(command_type) => {
                trace!(offset = record.offset, command_type, "ignored command");
            }
            CommandOutcome::Abandoned(kind, error) => {
                warn!(offset = record.offset, ?kind, %error, "skipping malformed command");
                skipped_commands.push(SkippedCommand {
                    offset: record.offset,
                    kind,
                    error,
                });
            }
        }
    }

    Ok(ReplayedSession {
        version,
        records,
        skipped_commands,
        state,
    })
}

/// Parses one complete session file image into ordered tab entries.
pub fn parse_session(
    bytes: &[u8],
    browser: &str,
    domains: &dyn DomainResolver,
) -> Result<SessionSnapshot, SnssError> {
    let replayed = replay(bytes)?;
    let entries = assemble_entries(replayed.state, browser, domains);
    debug!(
        browser,
        records = replayed.records,
        skipped = replayed.skipped_commands.len(),
        tabs = entries.len(),
        "assembled session snapshot"
    );

    Ok(SessionSnapshot {
        version: replayed.version,
        records: replayed.records,
        skipped_commands: replayed.skipped_commands,
        entries,
    })
}

/// Reads `path` fully, then parses it like [`parse_session`].
pub fn parse_session_file(
    path: &Path,
    browser: &str,
    domains: &dyn DomainResolver,
) -> Result<SessionSnapshot, SnssError> {
    let bytes = std::fs::read(path).map_err(|source| SnssError::source_unavailable(path, source))?;
    parse_session(&bytes, browser, domains)
}
