//! ChatGenius - local-first simulated chat CLI
//!
//! Main entry point: initializes tracing, loads configuration, opens the
//! persisted stores, and dispatches to the command handlers.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chatgenius::assistant::SimulatedAssistant;
use chatgenius::cli::{AuthCommand, Cli, Commands, RoomsCommand};
use chatgenius::commands;
use chatgenius::config::Config;
use chatgenius::store::{ChatStore, PrefsStore, SessionStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;
    config.validate()?;

    // Mirror the resolved data dir into CHATGENIUS_DATA_DIR so the store
    // initializers can pick it up without threading paths everywhere.
    if let Some(data_dir) = &config.storage.data_dir {
        std::env::set_var("CHATGENIUS_DATA_DIR", data_dir);
        tracing::info!("Using data directory override: {}", data_dir);
    }

    // Theme preference decides whether terminal output is colored
    let mut prefs = PrefsStore::open()?;
    if prefs.prefs().dark || !config.ui.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Auth { command } => {
            let mut session = SessionStore::open()?;
            match command {
                AuthCommand::Login {
                    country_code,
                    phone,
                    code,
                } => {
                    tracing::info!("Starting simulated OTP login");
                    commands::auth::run_login(&mut session, country_code, phone, code).await?;
                }
                AuthCommand::Logout => commands::auth::run_logout(&mut session)?,
                AuthCommand::Status => commands::auth::run_status(&session)?,
            }
            Ok(())
        }
        Commands::Rooms { command } => {
            let mut store = ChatStore::open()?;
            match command {
                RoomsCommand::List { search } => commands::rooms::run_list(&store, search)?,
                RoomsCommand::Create { title } => commands::rooms::run_create(&mut store, &title)?,
                RoomsCommand::Delete { id } => commands::rooms::run_delete(&mut store, &id)?,
            }
            Ok(())
        }
        Commands::Chat { room } => {
            tracing::info!("Opening chat view for {}", room);
            let session = SessionStore::open()?;
            let mut store = ChatStore::open()?;
            let assistant = SimulatedAssistant::new(&config.assistant);
            commands::chat::run_chat(&session, &mut store, &assistant, &room).await?;
            Ok(())
        }
        Commands::Theme { command } => {
            commands::theme::handle_theme(&mut prefs, command)?;
            Ok(())
        }
    }
}

/// Initialize the tracing subscriber
///
/// Respects `RUST_LOG`; `--verbose` lowers the default level to debug.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "chatgenius=debug"
    } else {
        "chatgenius=warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
