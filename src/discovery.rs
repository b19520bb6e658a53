use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::error::RecapError;

/// Current-session and tab-restore snapshots both use the SNSS format.
pub const SESSION_FILE_PREFIXES: [&str; 2] = ["Session_", "Tabs_"];

#[must_use]
pub fn is_session_file_name(name: &str) -> bool {
    SESSION_FILE_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// Picks the most recently modified snapshot in `dir`. Equal timestamps are
/// broken by the greater file name so the choice does not depend on directory
/// listing order.
pub fn find_latest_session_file(dir: &Path) -> Result<PathBuf, RecapError> {
    let entries = fs::read_dir(dir)
        .map_err(|source| RecapError::io("reading session directory", dir, source))?;

    let mut latest: Option<(SystemTime, String, PathBuf)> = None;
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !is_session_file_name(&name) {
            continue;
        }

        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);

        let newer = latest
            .as_ref()
            .map_or(true, |(time, best, _)| (modified, &name) > (*time, best));
        if newer {
            latest = Some((modified, name, entry.path()));
        }
    }

    let (_, _, path) = latest.ok_or_else(|| RecapError::NoSessionFile {
        dir: dir.to_path_buf(),
    })?;
    debug!(path = %path.display(), "selected session file");
    Ok(path)
}
