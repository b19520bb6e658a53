//! Flattens a replayed [`SessionState`] into ordered [`TabEntry`] records.

use crate::schema::TabEntry;
use crate::state::SessionState;

/// Derives the `domain` field of an entry from its URL.
pub trait DomainResolver {
    fn domain_of(&self, url: &str) -> String;
}

impl<F> DomainResolver for F
where
    F: Fn(&str) -> String,
{
    fn domain_of(&self, url: &str) -> String {
        self(url)
    }
}

/// Produces entries window by window (ascending window id, closed windows
/// skipped and unnumbered), then tab by tab in `index_in_window` order.
///
/// A tab is dropped when it is closed or has no URL to show. Only tabs that
/// are emitted advance the position compared against the window's selected
/// tab index.
pub fn assemble_entries(
    mut state: SessionState,
    browser: &str,
    domains: &dyn DomainResolver,
) -> Vec<TabEntry> {
    state.attach_tabs_to_windows();

    let active_window = state.active_window();
    let mut entries = Vec::new();
    let mut window_number = 0u32;

    for window_handle in state.windows_by_id() {
        let window = state.window(window_handle);
        if window.closed {
            continue;
        }

        window_number += 1;
        let is_active_window = active_window == Some(window_handle);
        let mut position = 0u32;

        for tab_handle in &window.tabs {
            let tab = state.tab(*tab_handle);
            if tab.closed {
                continue;
            }

            let Some(navigation) = tab.current_navigation() else {
                continue;
            };
            if navigation.url.is_empty() {
                continue;
            }

            let group = tab
                .group
                .map(|handle| state.group(handle).name.clone())
                .unwrap_or_default();

            entries.push(TabEntry {
                url: navigation.url.clone(),
                title: navigation.title.clone(),
                domain: domains.domain_of(&navigation.url),
                active: is_active_window && position == window.selected_tab_index,
                pinned: tab.pinned,
                group,
                window_id: window_number,
                browser: browser.to_string(),
            });
            position += 1;
        }
    }

    entries
}
