//! Environment configuration.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// `tracing` filter directives, e.g. `snss_session=trace`.
    pub log_filter: Option<String>,
    pub debug: bool,
    /// Session directory or file used instead of the browser default.
    pub session_path: Option<PathBuf>,
    pub home_dir: Option<PathBuf>,
    /// Windows only; falls back to `~/AppData/Local` when unset.
    pub local_app_data: Option<PathBuf>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            log_filter: env_string_opt("TAB_RECAP_LOG"),
            debug: env_flag("TAB_RECAP_DEBUG"),
            session_path: env_string_opt("TAB_RECAP_SESSION_PATH").map(PathBuf::from),
            home_dir: dirs::home_dir(),
            local_app_data: env_string_opt("LOCALAPPDATA").map(PathBuf::from),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
