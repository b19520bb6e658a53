use crate::cursor::ByteCursor;
use crate::error::DecodeError;

/// Command types this decoder understands. Every other type byte is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    SetTabWindow,
    SetTabIndexInWindow,
    UpdateTabNavigation,
    SetSelectedNavigationIndex,
    SetSelectedTabInIndex,
    SetPinnedState,
    TabClosed,
    WindowClosed,
    SetActiveWindow,
    SetTabGroup,
    SetTabGroupMetadata2,
}

impl CommandKind {
    pub const ALL: [CommandKind; 11] = [
        CommandKind::SetTabWindow,
        CommandKind::SetTabIndexInWindow,
        CommandKind::UpdateTabNavigation,
        CommandKind::SetSelectedNavigationIndex,
        CommandKind::SetSelectedTabInIndex,
        CommandKind::SetPinnedState,
        CommandKind::TabClosed,
        CommandKind::WindowClosed,
        CommandKind::SetActiveWindow,
        CommandKind::SetTabGroup,
        CommandKind::SetTabGroupMetadata2,
    ];

    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::SetTabWindow => 0,
            Self::SetTabIndexInWindow => 2,
            Self::UpdateTabNavigation => 6,
            Self::SetSelectedNavigationIndex => 7,
            Self::SetSelectedTabInIndex => 8,
            Self::SetPinnedState => 12,
            Self::TabClosed => 16,
            Self::WindowClosed => 17,
            Self::SetActiveWindow => 20,
            Self::SetTabGroup => 25,
            Self::SetTabGroupMetadata2 => 27,
        }
    }

    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

/// 128-bit tab group token, split the way the log stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    pub high: u64,
    pub low: u64,
}

impl GroupKey {
    #[must_use]
    pub const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }
}

/// A recognized command with its payload fields decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetTabWindow {
        window_id: u32,
        tab_id: u32,
    },
    SetTabIndexInWindow {
        tab_id: u32,
        index: u32,
    },
    UpdateTabNavigation {
        tab_id: u32,
        navigation_index: u32,
        url: String,
        title: String,
    },
    SetSelectedNavigationIndex {
        tab_id: u32,
        index: u32,
    },
    SetSelectedTabInIndex {
        window_id: u32,
        index: u32,
    },
    SetPinnedState {
        tab_id: u32,
        pinned: bool,
    },
    TabClosed {
        tab_id: u32,
    },
    WindowClosed {
        window_id: u32,
    },
    SetActiveWindow {
        window_id: u32,
    },
    SetTabGroup {
        tab_id: u32,
        group: GroupKey,
    },
    SetTabGroupMetadata {
        group: GroupKey,
        name: String,
    },
}

impl Command {
    /// Decodes the fields of a `kind` payload. Trailing bytes past the fields
    /// used here are ignored; newer writers append fields this reader skips.
    pub fn decode(kind: CommandKind, payload: &[u8]) -> Result<Self, DecodeError> {
        let mut data = ByteCursor::new(payload);

        let command = match kind {
            CommandKind::SetTabWindow => Self::SetTabWindow {
                window_id: data.read_u32()?,
                tab_id: data.read_u32()?,
            },
            CommandKind::SetTabIndexInWindow => Self::SetTabIndexInWindow {
                tab_id: data.read_u32()?,
                index: data.read_u32()?,
            },
            CommandKind::UpdateTabNavigation => {
                // pickle payload size, repeated
                data.read_u32()?;
                Self::UpdateTabNavigation {
                    tab_id: data.read_u32()?,
                    navigation_index: data.read_u32()?,
                    url: data.read_string()?,
                    title: data.read_wide_string()?,
                }
            }
            CommandKind::SetSelectedNavigationIndex => Self::SetSelectedNavigationIndex {
                tab_id: data.read_u32()?,
                index: data.read_u32()?,
            },
            CommandKind::SetSelectedTabInIndex => Self::SetSelectedTabInIndex {
                window_id: data.read_u32()?,
                index: data.read_u32()?,
            },
            CommandKind::SetPinnedState => Self::SetPinnedState {
                tab_id: data.read_u32()?,
                pinned: data.read_u8()? != 0,
            },
            CommandKind::TabClosed => Self::TabClosed {
                tab_id: data.read_u32()?,
            },
            CommandKind::WindowClosed => Self::WindowClosed {
                window_id: data.read_u32()?,
            },
            CommandKind::SetActiveWindow => Self::SetActiveWindow {
                window_id: data.read_u32()?,
            },
            CommandKind::SetTabGroup => {
                let tab_id = data.read_u32()?;
                // struct padding before the 8-byte aligned token
                data.read_u32()?;
                Self::SetTabGroup {
                    tab_id,
                    group: GroupKey::new(data.read_u64()?, data.read_u64()?),
                }
            }
            CommandKind::SetTabGroupMetadata2 => {
                data.read_u32()?;
                Self::SetTabGroupMetadata {
                    group: GroupKey::new(data.read_u64()?, data.read_u64()?),
                    name: data.read_wide_string()?,
                }
            }
        };

        Ok(command)
    }

    #[must_use]
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::SetTabWindow { .. } => CommandKind::SetTabWindow,
            Self::SetTabIndexInWindow { .. } => CommandKind::SetTabIndexInWindow,
            Self::UpdateTabNavigation { .. } => CommandKind::UpdateTabNavigation,
            Self::SetSelectedNavigationIndex { .. } => CommandKind::SetSelectedNavigationIndex,
            Self::SetSelectedTabInIndex { .. } => CommandKind::SetSelectedTabInIndex,
            Self::SetPinnedState { .. } => CommandKind::SetPinnedState,
            Self::TabClosed { .. } => CommandKind::TabClosed,
            Self::WindowClosed { .. } => CommandKind::WindowClosed,
            Self::SetActiveWindow { .. } => CommandKind::SetActiveWindow,
            Self::SetTabGroup { .. } => CommandKind::SetTabGroup,
            Self::SetTabGroupMetadata { .. } => CommandKind::SetTabGroupMetadata2,
        }
    }
}
