//! Open-tab extraction for Chromium-family browsers.
//!
//! The SNSS decoding itself lives in the `snss_session` crate; this crate
//! finds the snapshot for a browser, derives domains, and renders reports.

pub mod browser;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod error;
pub mod logging;
pub mod query;
pub mod report;

pub use browser::{BrowserKind, Platform, SessionLocations};
pub use config::EnvConfig;
pub use discovery::{find_latest_session_file, is_session_file_name, SESSION_FILE_PREFIXES};
pub use domain::extract_domain;
pub use error::RecapError;
pub use query::{detect_default_browser, query_all_browsers, query_tabs, resolve_session_file};
pub use report::{write_report, OutputFormat};

pub use snss_session::{SessionSnapshot, TabEntry, TabReport};
