//! Chromium-family browsers and where they keep session snapshots.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::EnvConfig;
use crate::error::RecapError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserKind {
    Chrome,
    Chromium,
    Edge,
    Brave,
    Vivaldi,
}

impl BrowserKind {
    pub const ALL: [BrowserKind; 5] = [
        BrowserKind::Chrome,
        BrowserKind::Chromium,
        BrowserKind::Edge,
        BrowserKind::Brave,
        BrowserKind::Vivaldi,
    ];

    /// Name written into the `browser` field of every entry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chrome => "Chrome",
            Self::Chromium => "Chromium",
            Self::Edge => "Edge",
            Self::Brave => "Brave",
            Self::Vivaldi => "Vivaldi",
        }
    }

    /// Profile root relative to the platform's application data directory.
    fn profile_root(self, platform: Platform) -> &'static [&'static str] {
        match (platform, self) {
            (Platform::Linux, Self::Chrome) => &[".config", "google-chrome"],
            (Platform::Linux, Self::Chromium) => &[".config", "chromium"],
            (Platform::Linux, Self::Edge) => &[".config", "microsoft-edge"],
            (Platform::Linux, Self::Brave) => &[".config", "BraveSoftware", "Brave-Browser"],
            (Platform::Linux, Self::Vivaldi) => &[".config", "vivaldi"],
            (Platform::MacOs, Self::Chrome) => &["Google", "Chrome"],
            (Platform::MacOs, Self::Chromium) => &["Chromium"],
            (Platform::MacOs, Self::Edge) => &["Microsoft Edge"],
            (Platform::MacOs, Self::Brave) => &["BraveSoftware", "Brave-Browser"],
            (Platform::MacOs, Self::Vivaldi) => &["Vivaldi"],
            (Platform::Windows, Self::Chrome) => &["Google", "Chrome", "User Data"],
            (Platform::Windows, Self::Chromium) => &["Chromium", "User Data"],
            (Platform::Windows, Self::Edge) => &["Microsoft", "Edge", "User Data"],
            (Platform::Windows, Self::Brave) => &["BraveSoftware", "Brave-Browser", "User Data"],
            (Platform::Windows, Self::Vivaldi) => &["Vivaldi", "User Data"],
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    #[must_use]
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "linux") {
            Some(Self::Linux)
        } else if cfg!(target_os = "macos") {
            Some(Self::MacOs)
        } else if cfg!(target_os = "windows") {
            Some(Self::Windows)
        } else {
            None
        }
    }
}

/// Resolves per-browser session directories for one platform and user.
#[derive(Debug, Clone)]
pub struct SessionLocations {
    pub platform: Platform,
    pub home: PathBuf,
    pub local_app_data: Option<PathBuf>,
}

impl SessionLocations {
    pub fn from_config(config: &EnvConfig) -> Result<Self, RecapError> {
        let platform = Platform::current().ok_or(RecapError::UnsupportedPlatform)?;
        let home = config.home_dir.clone().ok_or(RecapError::MissingHomeDir)?;
        Ok(Self {
            platform,
            home,
            local_app_data: config.local_app_data.clone(),
        })
    }

    fn app_data_root(&self) -> PathBuf {
        match self.platform {
            Platform::Linux => self.home.clone(),
            Platform::MacOs => self.home.join("Library").join("Application Support"),
            Platform::Windows => self
                .local_app_data
                .clone()
                .unwrap_or_else(|| self.home.join("AppData").join("Local")),
        }
    }

    #[must_use]
    pub fn session_dir(&self, kind: BrowserKind) -> PathBuf {
        let mut dir = self.app_data_root();
        for part in kind.profile_root(self.platform) {
            dir.push(part);
        }
        dir.join("Default").join("Sessions")
    }

    /// Browsers whose session directory exists, in [`BrowserKind::ALL`] order.
    #[must_use]
    pub fn detect(&self) -> Vec<(BrowserKind, PathBuf)> {
        BrowserKind::ALL
            .into_iter()
            .map(|kind| (kind, self.session_dir(kind)))
            .filter(|(_, dir)| is_dir(dir))
            .collect()
    }
}

fn is_dir(path: &Path) -> bool {
    path.metadata().map(|meta| meta.is_dir()).unwrap_or(false)
}
