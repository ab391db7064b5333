//! Integration tests for store persistence and the simulated-reply workflow
//!
//! Exercises the complete lifecycle across process "restarts" (store
//! reopen): chatroom CRUD, message append, session sign-in, and the
//! interaction between a pending simulated reply and chatroom deletion.

use chatgenius::assistant::SimulatedAssistant;
use chatgenius::config::AssistantConfig;
use chatgenius::store::{ChatStore, Identity, MessageDraft, MessageRole, SessionStore};
use tempfile::TempDir;

fn fast_assistant() -> SimulatedAssistant {
    SimulatedAssistant::new(&AssistantConfig {
        min_delay_ms: 1,
        max_delay_ms: 2,
        replies: vec!["Happy to help.".to_string()],
    })
}

#[test]
fn test_full_chat_lifecycle_survives_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("chatrooms.json");

    let (trip_id, work_id);
    {
        let mut store = ChatStore::open_at(&path).expect("Failed to open store");
        trip_id = store
            .create_chatroom("Trip Planning")
            .expect("Failed to create");
        work_id = store.create_chatroom("Work").expect("Failed to create");

        store
            .add_message(&trip_id, MessageDraft::user("Where should we go?"))
            .expect("Failed to add");
        store
            .add_message(&trip_id, MessageDraft::assistant("Somewhere warm."))
            .expect("Failed to add");
        store
            .set_current_chatroom(Some(trip_id.clone()))
            .expect("Failed to set current");
    }

    // Reopen: everything must come back byte-for-byte equal in meaning
    let store = ChatStore::open_at(&path).expect("Failed to reopen store");
    assert_eq!(store.chatrooms().len(), 2);
    assert_eq!(store.current_chatroom().unwrap().id, trip_id);

    let trip = store.get(&trip_id).expect("Trip room missing");
    assert_eq!(trip.title, "Trip Planning");
    assert_eq!(trip.messages.len(), 2);
    assert_eq!(trip.messages[0].content, "Where should we go?");
    assert_eq!(trip.messages[0].role, MessageRole::User);
    assert_eq!(trip.messages[1].role, MessageRole::Assistant);

    let work = store.get(&work_id).expect("Work room missing");
    assert!(work.messages.is_empty());
}

#[test]
fn test_timestamps_and_ids_survive_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("chatrooms.json");

    let (room_before, message_before);
    {
        let mut store = ChatStore::open_at(&path).expect("Failed to open store");
        let id = store.create_chatroom("Stamps").expect("Failed to create");
        store
            .add_message(&id, MessageDraft::user("hello"))
            .expect("Failed to add");
        room_before = store.get(&id).unwrap().clone();
        message_before = room_before.messages[0].clone();
    }

    let store = ChatStore::open_at(&path).expect("Failed to reopen store");
    let room_after = store.get(&room_before.id).expect("Room missing");
    assert_eq!(room_after.created_at, room_before.created_at);
    assert_eq!(room_after.messages[0], message_before);
}

#[test]
fn test_deleting_current_room_clears_designation_across_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("chatrooms.json");

    {
        let mut store = ChatStore::open_at(&path).expect("Failed to open store");
        let id = store.create_chatroom("Doomed").expect("Failed to create");
        store
            .set_current_chatroom(Some(id.clone()))
            .expect("Failed to set current");
        store.delete_chatroom(&id).expect("Failed to delete");
    }

    let store = ChatStore::open_at(&path).expect("Failed to reopen store");
    assert!(store.current_chatroom().is_none());
    assert!(store.chatrooms().is_empty());
}

#[tokio::test]
async fn test_pending_reply_against_deleted_room_is_dropped() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("chatrooms.json");
    let mut store = ChatStore::open_at(&path).expect("Failed to open store");

    let keep = store.create_chatroom("Keep").expect("Failed to create");
    let doomed = store.create_chatroom("Doomed").expect("Failed to create");
    store
        .add_message(&doomed, MessageDraft::user("anyone there?"))
        .expect("Failed to add");

    // The user deletes the room while the reply is "thinking"; there is no
    // cancellation, the deferred append just lands on a missing id
    store.delete_chatroom(&doomed).expect("Failed to delete");
    fast_assistant()
        .respond(&mut store, &doomed, "anyone there?")
        .await
        .expect("Reply against deleted room must not error");

    assert_eq!(store.chatrooms().len(), 1);
    assert!(store.get(&keep).unwrap().messages.is_empty());

    // And nothing about the dropped reply was persisted
    let reloaded = ChatStore::open_at(&path).expect("Failed to reopen store");
    assert_eq!(reloaded.chatrooms().len(), 1);
}

#[tokio::test]
async fn test_exactly_one_reply_per_user_message() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut store =
        ChatStore::open_at(temp_dir.path().join("chatrooms.json")).expect("Failed to open store");
    let id = store.create_chatroom("Counting").expect("Failed to create");
    let assistant = fast_assistant();

    for i in 0..3 {
        let content = format!("message {}", i);
        store
            .add_message(&id, MessageDraft::user(content.clone()))
            .expect("Failed to add");
        assistant
            .respond(&mut store, &id, &content)
            .await
            .expect("Reply failed");
    }

    let room = store.get(&id).unwrap();
    assert_eq!(room.messages.len(), 6);
    let assistant_count = room
        .messages
        .iter()
        .filter(|m| m.role == MessageRole::Assistant)
        .count();
    assert_eq!(assistant_count, 3);
}

#[test]
fn test_session_and_chat_snapshots_are_independent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let session_path = temp_dir.path().join("session.json");
    let chat_path = temp_dir.path().join("chatrooms.json");

    {
        let mut session = SessionStore::open_at(&session_path).expect("Failed to open session");
        let mut store = ChatStore::open_at(&chat_path).expect("Failed to open store");
        session
            .login(Identity::new("5551234", "+1"))
            .expect("Failed to login");
        store.create_chatroom("Mine").expect("Failed to create");
    }

    // Logging out must not touch chat state
    {
        let mut session = SessionStore::open_at(&session_path).expect("Failed to reopen session");
        session.logout().expect("Failed to logout");
    }

    let session = SessionStore::open_at(&session_path).expect("Failed to reopen session");
    let store = ChatStore::open_at(&chat_path).expect("Failed to reopen store");
    assert!(session.current_identity().is_none());
    assert_eq!(store.chatrooms().len(), 1);
}

#[test]
fn test_image_payload_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("chatrooms.json");
    let data_uri = "data:image/png;base64,iVBORw0KGgo=";

    let id;
    {
        let mut store = ChatStore::open_at(&path).expect("Failed to open store");
        id = store.create_chatroom("Photos").expect("Failed to create");
        store
            .add_message(&id, MessageDraft::user_with_image("look at this", data_uri))
            .expect("Failed to add");
    }

    let store = ChatStore::open_at(&path).expect("Failed to reopen store");
    let message = &store.get(&id).unwrap().messages[0];
    assert_eq!(message.image.as_deref(), Some(data_uri));
    assert_eq!(message.content, "look at this");
}
