//! Command-line interface definition for ChatGenius
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for authentication, chatroom management, the
//! interactive chat view, and theme preferences.

use clap::{Parser, Subcommand};

/// ChatGenius - local-first simulated chat
///
/// Phone/OTP-style sign-in (simulated), a rooms dashboard, and a chat view
/// whose assistant replies are canned strings behind a randomized delay.
/// All state lives in per-user snapshot files.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatgenius")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Directory for persisted state (overrides config and platform default)
    #[arg(long, env = "CHATGENIUS_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for ChatGenius
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage the signed-in session
    Auth {
        /// Session subcommand
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Manage chatrooms
    Rooms {
        /// Chatroom subcommand
        #[command(subcommand)]
        command: RoomsCommand,
    },

    /// Open the interactive chat view for a chatroom
    Chat {
        /// Chatroom id (a unique prefix is enough)
        room: String,
    },

    /// View or change the UI theme
    Theme {
        /// Theme subcommand; omit to show the current theme
        #[command(subcommand)]
        command: Option<ThemeCommand>,
    },
}

/// Session management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum AuthCommand {
    /// Sign in with a phone number (simulated OTP flow)
    Login {
        /// Dial code, e.g. +1
        #[arg(long, default_value = "+91")]
        country_code: String,

        /// Phone number, digits only
        #[arg(long)]
        phone: String,

        /// 6-digit one-time code; prompted for interactively when omitted
        #[arg(long)]
        code: Option<String>,
    },

    /// Sign out and clear the stored session
    Logout,

    /// Show the signed-in identity
    Status,
}

/// Chatroom management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum RoomsCommand {
    /// List chatrooms
    List {
        /// Case-insensitive title filter
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Create a chatroom
    Create {
        /// Display title (must not be empty)
        title: String,
    },

    /// Delete a chatroom
    Delete {
        /// Chatroom id (a unique prefix is enough)
        id: String,
    },
}

/// Theme subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ThemeCommand {
    /// Switch to dark mode (plain terminal output)
    Dark,
    /// Switch to light mode (colored terminal output)
    Light,
    /// Flip between dark and light
    Toggle,
    /// Show the current theme
    Status,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_auth_login() {
        let cli = Cli::try_parse_from([
            "chatgenius",
            "auth",
            "login",
            "--country-code",
            "+1",
            "--phone",
            "5551234",
            "--code",
            "123456",
        ])
        .expect("parse failed");

        match cli.command {
            Commands::Auth {
                command:
                    AuthCommand::Login {
                        country_code,
                        phone,
                        code,
                    },
            } => {
                assert_eq!(country_code, "+1");
                assert_eq!(phone, "5551234");
                assert_eq!(code.as_deref(), Some("123456"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_login_country_code_defaults() {
        let cli = Cli::try_parse_from(["chatgenius", "auth", "login", "--phone", "5551234"])
            .expect("parse failed");
        match cli.command {
            Commands::Auth {
                command: AuthCommand::Login { country_code, .. },
            } => assert_eq!(country_code, "+91"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rooms_list_with_search() {
        let cli = Cli::try_parse_from(["chatgenius", "rooms", "list", "--search", "trip"])
            .expect("parse failed");
        match cli.command {
            Commands::Rooms {
                command: RoomsCommand::List { search },
            } => assert_eq!(search.as_deref(), Some("trip")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_chat_with_room() {
        let cli = Cli::try_parse_from(["chatgenius", "chat", "01HTEST"]).expect("parse failed");
        match cli.command {
            Commands::Chat { room } => assert_eq!(room, "01HTEST"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_chat_requires_room() {
        assert!(Cli::try_parse_from(["chatgenius", "chat"]).is_err());
    }

    #[test]
    fn test_parse_theme_without_subcommand() {
        let cli = Cli::try_parse_from(["chatgenius", "theme"]).expect("parse failed");
        match cli.command {
            Commands::Theme { command } => assert!(command.is_none()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "chatgenius",
            "--data-dir",
            "/tmp/cgdata",
            "-v",
            "rooms",
            "list",
        ])
        .expect("parse failed");
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/cgdata"));
        assert!(cli.verbose);
    }
}
