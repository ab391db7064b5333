//! Interactive chat view
//!
//! Readline loop over a single chatroom: plain input becomes a user message
//! and triggers one simulated assistant reply; `/`-prefixed input is a
//! special command handled locally. Requires a signed-in session.

use crate::assistant::SimulatedAssistant;
use crate::commands::{resolve_room_id, short_id};
use crate::error::{ChatGeniusError, Result};
use crate::store::{ChatStore, Message, MessageDraft, MessageRole, SessionStore};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::Path;
use thiserror::Error;

/// Upload cap enforced before an image ever reaches the store
const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Errors produced while parsing special chat commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// Special commands available inside the chat view
///
/// These act on the session locally instead of being sent as messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Send an image message: `/attach <path> [caption]`
    Attach {
        /// Path to the image file
        path: String,
        /// Optional text sent along with the image
        caption: String,
    },

    /// Reprint the full message history
    History,

    /// Show chatroom title, id, and message count
    Status,

    /// Show available commands
    Help,

    /// Leave the chat view
    Exit,

    /// Not a special command; send the input as a message
    None,
}

/// Parse one line of chat input into a special command
///
/// Input not starting with `/` is never a command. Command names are
/// case-insensitive.
pub fn parse_chat_command(input: &str) -> std::result::Result<ChatCommand, CommandError> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return Ok(ChatCommand::None);
    }

    let mut parts = trimmed.splitn(3, char::is_whitespace);
    let command = parts.next().unwrap_or("").to_lowercase();

    match command.as_str() {
        "/attach" => {
            let path = parts.next().map(str::to_string).ok_or_else(|| {
                CommandError::MissingArgument {
                    command: "/attach".to_string(),
                    usage: "/attach <path> [caption]".to_string(),
                }
            })?;
            let caption = parts.next().unwrap_or("").trim().to_string();
            Ok(ChatCommand::Attach { path, caption })
        }
        "/history" => Ok(ChatCommand::History),
        "/status" => Ok(ChatCommand::Status),
        "/help" => Ok(ChatCommand::Help),
        "/exit" | "/quit" => Ok(ChatCommand::Exit),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Read an image file and encode it as a base64 data URI
///
/// Enforces the 5MB cap and recognizes common image extensions. This is the
/// input contract for `Message.image`; the store itself never checks.
pub fn encode_image(path: &Path) -> Result<String> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        ChatGeniusError::Attachment(format!("Cannot read {}: {}", path.display(), e))
    })?;

    if metadata.len() > MAX_IMAGE_BYTES {
        return Err(ChatGeniusError::Attachment(
            "Image size must be less than 5MB".to_string(),
        )
        .into());
    }

    let mime = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => {
            return Err(ChatGeniusError::Attachment(format!(
                "Unsupported image type: {}",
                path.display()
            ))
            .into())
        }
    };

    let bytes = std::fs::read(path).map_err(ChatGeniusError::Io)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Open the interactive chat view for a chatroom
///
/// # Arguments
///
/// * `session` - Session store; must hold a signed-in identity
/// * `store` - Chat store the view reads from and appends to
/// * `assistant` - Simulated reply generator
/// * `room` - Chatroom id or unique prefix
pub async fn run_chat(
    session: &SessionStore,
    store: &mut ChatStore,
    assistant: &SimulatedAssistant,
    room: &str,
) -> Result<()> {
    let Some(identity) = session.current_identity() else {
        return Err(ChatGeniusError::NotSignedIn(
            "run 'chatgenius auth login' first".to_string(),
        )
        .into());
    };

    let room_id = resolve_room_id(store, room)?;
    store.set_current_chatroom(Some(room_id.clone()))?;
    tracing::info!("User {} opened chatroom {}", identity.id, room_id);

    print_banner(store, &room_id);
    print_history(store, &room_id);

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline(&"you> ".bold().to_string()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match parse_chat_command(trimmed) {
                    Ok(ChatCommand::Exit) => break,
                    Ok(ChatCommand::Help) => print_help(),
                    Ok(ChatCommand::Status) => print_banner(store, &room_id),
                    Ok(ChatCommand::History) => print_history(store, &room_id),
                    Ok(ChatCommand::Attach { path, caption }) => {
                        match encode_image(Path::new(&path)) {
                            Ok(image) => {
                                send_and_reply(
                                    store,
                                    assistant,
                                    &room_id,
                                    MessageDraft::user_with_image(caption.clone(), image),
                                )
                                .await?;
                            }
                            Err(e) => println!("{}", e.to_string().red()),
                        }
                    }
                    Ok(ChatCommand::None) => {
                        send_and_reply(store, assistant, &room_id, MessageDraft::user(trimmed))
                            .await?;
                    }
                    Err(e) => println!("{}", e.to_string().red()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Append the user message and produce exactly one simulated reply
async fn send_and_reply(
    store: &mut ChatStore,
    assistant: &SimulatedAssistant,
    room_id: &str,
    draft: MessageDraft,
) -> Result<()> {
    let content = draft.content.clone();
    let had_image = draft.image.is_some();
    store.add_message(room_id, draft)?;
    if had_image {
        println!("{}", "Image attached.".green());
    }

    println!("{}", "assistant is typing...".dimmed());
    assistant.respond(store, room_id, &content).await?;

    if let Some(reply) = store.get(room_id).and_then(|r| r.messages.last()) {
        print_message(reply);
    }
    Ok(())
}

fn print_banner(store: &ChatStore, room_id: &str) {
    if let Some(room) = store.get(room_id) {
        println!();
        println!(
            "{} ({}) — {} messages",
            room.title.bold(),
            short_id(&room.id).cyan(),
            room.messages.len()
        );
        println!("Type {} for commands, {} to leave.", "/help".cyan(), "/exit".cyan());
        println!();
    }
}

fn print_history(store: &ChatStore, room_id: &str) {
    if let Some(room) = store.get(room_id) {
        for message in &room.messages {
            print_message(message);
        }
    }
}

fn print_message(message: &Message) {
    let time = message.timestamp.format("%H:%M");
    let who = match message.role {
        MessageRole::User => "you".green(),
        MessageRole::Assistant => "assistant".blue(),
    };
    let attachment = if message.image.is_some() {
        " [image attached]".dimmed().to_string()
    } else {
        String::new()
    };
    println!("[{}] {}: {}{}", time, who, message.content, attachment);
}

fn print_help() {
    println!("Available commands:");
    println!("  {}  Send an image message", "/attach <path> [caption]".cyan());
    println!("  {}                  Reprint the message history", "/history".cyan());
    println!("  {}                   Show chatroom info", "/status".cyan());
    println!("  {}                     Show this help", "/help".cyan());
    println!("  {}                     Leave the chat view", "/exit".cyan());
    println!("Anything else is sent as a message.");
}
