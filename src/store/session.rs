//! Session store: the single signed-in identity
//!
//! Holds at most one [`Identity`] at a time. Login overwrites any prior
//! value without validation (validation belongs to the command layer), and
//! the identity persists across process restarts until logout.

use crate::error::Result;
use crate::store::snapshot;
use crate::store::types::Identity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted shape of the session store
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionState {
    identity: Option<Identity>,
}

/// Tracks the signed-in identity across restarts
pub struct SessionStore {
    state: SessionState,
    path: PathBuf,
}

impl SessionStore {
    /// Open the session store at the default data directory
    pub fn open() -> Result<Self> {
        let path = snapshot::data_dir()?.join("session.json");
        Self::open_at(path)
    }

    /// Open a session store backed by the given snapshot path
    ///
    /// # Examples
    ///
    /// ```
    /// use chatgenius::store::SessionStore;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let store = SessionStore::open_at(dir.path().join("session.json")).unwrap();
    /// assert!(store.current_identity().is_none());
    /// ```
    pub fn open_at<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let state = snapshot::load_snapshot(&path)?.unwrap_or_default();
        Ok(Self { state, path })
    }

    /// Set the signed-in identity, overwriting any prior value
    pub fn login(&mut self, identity: Identity) -> Result<()> {
        tracing::info!("Signing in user {}", identity.id);
        self.state.identity = Some(identity);
        self.persist()
    }

    /// Clear the signed-in identity
    pub fn logout(&mut self) -> Result<()> {
        if let Some(identity) = &self.state.identity {
            tracing::info!("Signing out user {}", identity.id);
        }
        self.state.identity = None;
        self.persist()
    }

    /// The signed-in identity, if any
    pub fn current_identity(&self) -> Option<&Identity> {
        self.state.identity.as_ref()
    }

    fn persist(&self) -> Result<()> {
        snapshot::save_snapshot(&self.path, &self.state)
    }
}
