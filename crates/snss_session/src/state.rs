//! Entity model rebuilt by replaying commands.
//!
//! Tabs, windows and groups live in arenas keyed by their on-disk ids. Any
//! command that names an id creates the entity on first mention; entities are
//! never removed, only flagged closed, so later commands for the same id keep
//! hitting the same record.

use std::collections::{BTreeMap, HashMap};

use crate::command::{Command, CommandKind, GroupKey};
use crate::error::DecodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabHandle(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupHandle(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    pub index: u32,
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: u32,
    pub window_id: u32,
    pub index_in_window: u32,
    pub current_navigation_index: u32,
    pub pinned: bool,
    pub closed: bool,
    pub group: Option<GroupHandle>,
    /// Keyed by navigation index, so iteration is already ascending.
    pub navigations: BTreeMap<u32, NavigationEntry>,
}

impl Tab {
    fn new(id: u32) -> Self {
        Self {
            id,
            window_id: 0,
            index_in_window: 0,
            current_navigation_index: 0,
            pinned: false,
            closed: false,
            group: None,
            navigations: BTreeMap::new(),
        }
    }

    /// The entry at the selected index, else the entry with the highest index.
    #[must_use]
    pub fn current_navigation(&self) -> Option<&NavigationEntry> {
        self.navigations
            .get(&self.current_navigation_index)
            .or_else(|| self.navigations.values().next_back())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub id: u32,
    pub selected_tab_index: u32,
    pub closed: bool,
    /// Filled by [`SessionState::attach_tabs_to_windows`], ordered by
    /// `index_in_window`.
    pub tabs: Vec<TabHandle>,
}

impl Window {
    fn new(id: u32) -> Self {
        Self {
            id,
            selected_tab_index: 0,
            closed: false,
            tabs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    pub key: GroupKey,
    pub name: String,
}

/// Result of feeding one record to [`SessionState::apply_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied(CommandKind),
    /// Type byte this decoder does not know. Not an error.
    Unrecognized(u8),
    /// The payload of a known command was malformed; nothing was changed.
    Abandoned(CommandKind, DecodeError),
}

#[derive(Debug, Default)]
pub struct SessionState {
    tabs: Vec<Tab>,
    tab_ids: HashMap<u32, TabHandle>,
    windows: Vec<Window>,
    window_ids: HashMap<u32, WindowHandle>,
    groups: Vec<TabGroup>,
    group_keys: HashMap<GroupKey, GroupHandle>,
    active_window: Option<WindowHandle>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes and applies one record. Decoding finishes before any mutation,
    /// so an abandoned command leaves the state untouched.
    pub fn apply_record(&mut self, command_type: u8, payload: &[u8]) -> CommandOutcome {
        let Some(kind) = CommandKind::from_id(command_type) else {
            return CommandOutcome::Unrecognized(command_type);
        };

        match Command::decode(kind, payload) {
            Ok(command) => {
                self.apply(command);
                CommandOutcome::Applied(kind)
            }
            Err(error) => CommandOutcome::Abandoned(kind, error),
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetTabWindow { window_id, tab_id } => {
                self.tab_mut(tab_id).window_id = window_id;
            }
            Command::SetTabIndexInWindow { tab_id, index } => {
                self.tab_mut(tab_id).index_in_window = index;
            }
            Command::UpdateTabNavigation {
                tab_id,
                navigation_index,
                url,
                title,
            } => {
                self.tab_mut(tab_id).navigations.insert(
                    navigation_index,
                    NavigationEntry {
                        index: navigation_index,
                        url,
                        title,
                    },
                );
            }
            Command::SetSelectedNavigationIndex { tab_id, index } => {
                self.tab_mut(tab_id).current_navigation_index = index;
            }
            Command::SetSelectedTabInIndex { window_id, index } => {
                self.window_mut(window_id).selected_tab_index = index;
            }
            Command::SetPinnedState { tab_id, pinned } => {
                self.tab_mut(tab_id).pinned = pinned;
            }
            Command::TabClosed { tab_id } => {
                self.tab_mut(tab_id).closed = true;
            }
            Command::WindowClosed { window_id } => {
                self.window_mut(window_id).closed = true;
            }
            Command::SetActiveWindow { window_id } => {
                self.active_window = Some(self.window_handle(window_id));
            }
            Command::SetTabGroup { tab_id, group } => {
                let group = self.group_handle(group);
                self.tab_mut(tab_id).group = Some(group);
            }
            Command::SetTabGroupMetadata { group, name } => {
                let handle = self.group_handle(group);
                self.groups[handle.0].name = name;
            }
        }
    }

    pub fn tab_handle(&mut self, id: u32) -> TabHandle {
        if let Some(handle) = self.tab_ids.get(&id) {
            return *handle;
        }
        let handle = TabHandle(self.tabs.len());
        self.tabs.push(Tab::new(id));
        self.tab_ids.insert(id, handle);
        handle
    }

    pub fn window_handle(&mut self, id: u32) -> WindowHandle {
        if let Some(handle) = self.window_ids.get(&id) {
            return *handle;
        }
        let handle = WindowHandle(self.windows.len());
        self.windows.push(Window::new(id));
        self.window_ids.insert(id, handle);
        handle
    }

    pub fn group_handle(&mut self, key: GroupKey) -> GroupHandle {
        if let Some(handle) = self.group_keys.get(&key) {
            return *handle;
        }
        let handle = GroupHandle(self.groups.len());
        self.groups.push(TabGroup {
            key,
            name: String::new(),
        });
        self.group_keys.insert(key, handle);
        handle
    }

    fn tab_mut(&mut self, id: u32) -> &mut Tab {
        let handle = self.tab_handle(id);
        &mut self.tabs[handle.0]
    }

    fn window_mut(&mut self, id: u32) -> &mut Window {
        let handle = self.window_handle(id);
        &mut self.windows[handle.0]
    }

    #[must_use]
    pub fn tab(&self, handle: TabHandle) -> &Tab {
        &self.tabs[handle.0]
    }

    #[must_use]
    pub fn window(&self, handle: WindowHandle) -> &Window {
        &self.windows[handle.0]
    }

    #[must_use]
    pub fn group(&self, handle: GroupHandle) -> &TabGroup {
        &self.groups[handle.0]
    }

    /// Looks up a tab by id without creating it.
    #[must_use]
    pub fn find_tab(&self, id: u32) -> Option<&Tab> {
        self.tab_ids.get(&id).map(|handle| self.tab(*handle))
    }

    #[must_use]
    pub fn find_window(&self, id: u32) -> Option<&Window> {
        self.window_ids.get(&id).map(|handle| self.window(*handle))
    }

    #[must_use]
    pub fn find_group(&self, key: GroupKey) -> Option<&TabGroup> {
        self.group_keys.get(&key).map(|handle| self.group(*handle))
    }

    #[must_use]
    pub fn active_window(&self) -> Option<WindowHandle> {
        self.active_window
    }

    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Window handles ordered by ascending on-disk window id.
    #[must_use]
    pub fn windows_by_id(&self) -> Vec<WindowHandle> {
        let mut handles = (0..self.windows.len()).map(WindowHandle).collect::<Vec<_>>();
        handles.sort_by_key(|handle| self.windows[handle.0].id);
        handles
    }

    /// Rebuilds every window's tab list from the tabs' `window_id`, creating
    /// windows that were only ever named by a tab. Ties on `index_in_window`
    /// keep first-mention order.
    pub fn attach_tabs_to_windows(&mut self) {
        for window in &mut self.windows {
            window.tabs.clear();
        }

        for position in 0..self.tabs.len() {
            let window = self.window_handle(self.tabs[position].window_id);
            self.windows[window.0].tabs.push(TabHandle(position));
        }

        let tabs = &self.tabs;
        for window in &mut self.windows {
            window
                .tabs
                .sort_by_key(|handle| tabs[handle.0].index_in_window);
        }
    }
}
