use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One open tab as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabEntry {
    pub url: String,
    pub title: String,
    pub domain: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub pinned: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group: String,
    /// 1-based, in ascending order of the on-disk window ids.
    pub window_id: u32,
    pub browser: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabReport {
    pub browser: String,
    pub total_tabs: usize,
    pub total_windows: usize,
    pub entries: Vec<TabEntry>,
}

impl TabReport {
    #[must_use]
    pub fn new(browser: impl Into<String>, entries: Vec<TabEntry>) -> Self {
        let total_windows = entries
            .iter()
            .map(|entry| (entry.browser.as_str(), entry.window_id))
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            browser: browser.into(),
            total_tabs: entries.len(),
            total_windows,
            entries,
        }
    }
}
