/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes four top-level command modules:

- `auth`  — Simulated phone/OTP sign-in, sign-out, session status
- `rooms` — Chatroom dashboard (list, create, delete)
- `chat`  — Interactive chat view with simulated assistant replies
- `theme` — Persisted dark/light preference

These handlers are intentionally small and use the library components: the
chat, session, and preference stores plus the simulated assistant. All
user-facing validation (phone format, OTP format, empty titles, attachment
size) lives here; the stores never validate.
*/

use crate::error::{ChatGeniusError, Result};
use crate::store::ChatStore;

pub mod auth;
pub mod chat;
pub mod rooms;
pub mod theme;

/// Shorten a store id for display
///
/// Store-generated ULIDs are 26 ASCII characters, but ids read back from a
/// snapshot are arbitrary strings; anything too short or without a char
/// boundary at the cut is shown in full rather than sliced.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Resolve a chatroom id or unique id prefix against the store
///
/// Exact matches win; otherwise a single prefix match resolves. Zero or
/// ambiguous matches are command-layer validation errors — the store itself
/// only ever deals in exact ids.
///
/// # Examples
///
/// ```
/// use chatgenius::commands::resolve_room_id;
/// use chatgenius::store::ChatStore;
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut store = ChatStore::open_at(dir.path().join("chatrooms.json")).unwrap();
/// let id = store.create_chatroom("Trip Planning").unwrap();
/// assert_eq!(resolve_room_id(&store, &id[..8]).unwrap(), id);
/// ```
pub fn resolve_room_id(store: &ChatStore, needle: &str) -> Result<String> {
    if store.get(needle).is_some() {
        return Ok(needle.to_string());
    }

    let matches: Vec<&str> = store
        .chatrooms()
        .iter()
        .filter(|room| room.id.starts_with(needle))
        .map(|room| room.id.as_str())
        .collect();

    match matches.as_slice() {
        [] => Err(ChatGeniusError::Validation(format!(
            "No chatroom matching '{}'. Run 'chatgenius rooms list' to see ids.",
            needle
        ))
        .into()),
        [only] => Ok(only.to_string()),
        _ => Err(ChatGeniusError::Validation(format!(
            "Chatroom id '{}' is ambiguous ({} matches); use a longer prefix",
            needle,
            matches.len()
        ))
        .into()),
    }
}
