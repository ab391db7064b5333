//! Chatroom dashboard commands: list, create, delete

use crate::commands::{resolve_room_id, short_id};
use crate::error::{ChatGeniusError, Result};
use crate::store::ChatStore;
use colored::Colorize;
use prettytable::{format, Table};

/// List chatrooms, optionally filtered by a case-insensitive title substring
pub fn run_list(store: &ChatStore, search: Option<String>) -> Result<()> {
    let needle = search.map(|s| s.to_lowercase());
    let rooms: Vec<_> = store
        .chatrooms()
        .iter()
        .filter(|room| match &needle {
            Some(needle) => room.title.to_lowercase().contains(needle),
            None => true,
        })
        .collect();

    if rooms.is_empty() {
        match needle {
            Some(needle) => println!("{}", format!("No chatrooms matching '{}'.", needle).yellow()),
            None => println!(
                "{} Use {} to start one.",
                "No chatrooms yet.".yellow(),
                "chatgenius rooms create <title>".cyan()
            ),
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);

    table.add_row(prettytable::row![
        "ID".bold(),
        "Title".bold(),
        "Messages".bold(),
        "Created".bold()
    ]);

    for room in rooms {
        let id_short = short_id(&room.id);
        // Truncate on char boundaries; titles are arbitrary user strings
        let title = if room.title.chars().count() > 40 {
            let truncated: String = room.title.chars().take(37).collect();
            format!("{}...", truncated)
        } else {
            room.title.clone()
        };
        let created = room.created_at.format("%Y-%m-%d %H:%M").to_string();

        table.add_row(prettytable::row![
            id_short.cyan(),
            title,
            room.messages.len(),
            created
        ]);
    }

    println!("\nChatrooms:");
    table.printstd();
    println!();
    println!("Use {} to open one.", "chatgenius chat <ID>".cyan());
    println!();
    Ok(())
}

/// Create a chatroom
///
/// Empty or whitespace-only titles are rejected here; the store itself
/// accepts any string.
pub fn run_create(store: &mut ChatStore, title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(
            ChatGeniusError::Validation("Please enter a chat title".to_string()).into(),
        );
    }

    let id = store.create_chatroom(title)?;
    println!(
        "{} Open it with {}.",
        format!("Created chatroom '{}' ({}).", title, short_id(&id)).green(),
        format!("chatgenius chat {}", short_id(&id)).cyan()
    );
    Ok(())
}

/// Delete a chatroom by id or unique prefix
pub fn run_delete(store: &mut ChatStore, id: &str) -> Result<()> {
    let resolved = resolve_room_id(store, id)?;
    store.delete_chatroom(&resolved)?;
    println!(
        "{}",
        format!("Deleted chatroom {}", short_id(&resolved)).green()
    );
    Ok(())
}
