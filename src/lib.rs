//! ChatGenius - local-first simulated chat library
//!
//! This library provides the core functionality for the ChatGenius CLI:
//! persisted chat and session state, the simulated assistant, and
//! configuration.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `store`: Chat, session, and preference stores over versioned snapshots
//! - `assistant`: Canned-reply generator with randomized thinking delays
//! - `commands`: Handlers behind each CLI subcommand
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```
//! use chatgenius::store::{ChatStore, MessageDraft};
//!
//! # fn main() -> anyhow::Result<()> {
//! let dir = tempfile::tempdir()?;
//! let mut store = ChatStore::open_at(dir.path().join("chatrooms.json"))?;
//!
//! let id = store.create_chatroom("Trip Planning")?;
//! store.add_message(&id, MessageDraft::user("Hi"))?;
//! assert_eq!(store.get(&id).unwrap().messages.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod assistant;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use assistant::SimulatedAssistant;
pub use config::Config;
pub use error::{ChatGeniusError, Result};
pub use store::{ChatStore, Identity, PrefsStore, SessionStore};
