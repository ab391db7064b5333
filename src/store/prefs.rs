//! UI preferences store
//!
//! Small persisted toggle controlling whether terminal output is colored,
//! the CLI's stand-in for the original dark/light theme switch.

use crate::error::Result;
use crate::store::snapshot;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted UI preferences
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UiPrefs {
    /// Dark mode: when set, colored terminal output is disabled
    pub dark: bool,
}

/// Persisted wrapper around [`UiPrefs`]
pub struct PrefsStore {
    prefs: UiPrefs,
    path: PathBuf,
}

impl PrefsStore {
    /// Open the preferences store at the default data directory
    pub fn open() -> Result<Self> {
        let path = snapshot::data_dir()?.join("prefs.json");
        Self::open_at(path)
    }

    /// Open a preferences store backed by the given snapshot path
    pub fn open_at<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let prefs = snapshot::load_snapshot(&path)?.unwrap_or_default();
        Ok(Self { prefs, path })
    }

    /// Current preferences
    pub fn prefs(&self) -> UiPrefs {
        self.prefs
    }

    /// Flip the dark-mode flag and return the new value
    pub fn toggle_dark(&mut self) -> Result<bool> {
        self.prefs.dark = !self.prefs.dark;
        self.persist()?;
        Ok(self.prefs.dark)
    }

    /// Set the dark-mode flag explicitly
    pub fn set_dark(&mut self, dark: bool) -> Result<()> {
        self.prefs.dark = dark;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        snapshot::save_snapshot(&self.path, &self.prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_is_light() {
        let dir = tempdir().expect("failed to create tempdir");
        let store = PrefsStore::open_at(dir.path().join("prefs.json")).expect("open failed");
        assert!(!store.prefs().dark);
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let dir = tempdir().expect("failed to create tempdir");
        let path = dir.path().join("prefs.json");

        {
            let mut store = PrefsStore::open_at(&path).expect("open failed");
            assert!(store.toggle_dark().expect("toggle failed"));
        }

        let reloaded = PrefsStore::open_at(&path).expect("reopen failed");
        assert!(reloaded.prefs().dark);
    }

    #[test]
    fn test_set_dark_explicitly() {
        let dir = tempdir().expect("failed to create tempdir");
        let mut store = PrefsStore::open_at(dir.path().join("prefs.json")).expect("open failed");
        store.set_dark(true).expect("set failed");
        assert!(store.prefs().dark);
        store.set_dark(false).expect("set failed");
        assert!(!store.prefs().dark);
    }
}
