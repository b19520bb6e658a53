use std::path::{Path, PathBuf};

use snss_session::{parse_session_file, SessionSnapshot, TabEntry};
use tracing::{info, warn};

use crate::browser::{BrowserKind, SessionLocations};
use crate::discovery::find_latest_session_file;
use crate::domain::extract_domain;
use crate::error::RecapError;

/// Resolves a user-supplied path: a file is used as-is, a directory is
/// searched for its newest snapshot.
pub fn resolve_session_file(session_path: &Path) -> Result<PathBuf, RecapError> {
    if session_path.is_file() {
        return Ok(session_path.to_path_buf());
    }
    find_latest_session_file(session_path)
}

pub fn query_tabs(kind: BrowserKind, session_path: &Path) -> Result<SessionSnapshot, RecapError> {
    let file = resolve_session_file(session_path)?;
    let snapshot = parse_session_file(&file, kind.label(), &extract_domain)?;

    if !snapshot.skipped_commands.is_empty() {
        warn!(
            browser = kind.label(),
            path = %file.display(),
            skipped = snapshot.skipped_commands.len(),
            "some session commands could not be decoded"
        );
    }
    info!(
        browser = kind.label(),
        path = %file.display(),
        tabs = snapshot.entries.len(),
        "read session snapshot"
    );
    Ok(snapshot)
}

/// First browser with an existing session directory.
pub fn detect_default_browser(
    locations: &SessionLocations,
) -> Result<(BrowserKind, PathBuf), RecapError> {
    locations
        .detect()
        .into_iter()
        .next()
        .ok_or(RecapError::NoBrowserDetected)
}

/// Tabs of every detected browser, concatenated in [`BrowserKind::ALL`]
/// order. A browser whose snapshot cannot be read is logged and left out.
pub fn query_all_browsers(locations: &SessionLocations) -> Vec<TabEntry> {
    let mut entries = Vec::new();
    for (kind, dir) in locations.detect() {
        match query_tabs(kind, &dir) {
            Ok(snapshot) => entries.extend(snapshot.entries),
            Err(error) => {
                warn!(browser = kind.label(), %error, "skipping browser");
            }
        }
    }
    entries
}
