//! Theme preference command

use crate::cli::ThemeCommand;
use crate::error::Result;
use crate::store::PrefsStore;
use colored::Colorize;

/// Handle the `theme` command
///
/// With no subcommand, shows the current theme.
pub fn handle_theme(prefs: &mut PrefsStore, command: Option<ThemeCommand>) -> Result<()> {
    match command {
        None | Some(ThemeCommand::Status) => {
            let name = if prefs.prefs().dark { "dark" } else { "light" };
            println!("Current theme: {}", name.bold());
        }
        Some(ThemeCommand::Dark) => {
            prefs.set_dark(true)?;
            println!("Switched to dark theme.");
        }
        Some(ThemeCommand::Light) => {
            prefs.set_dark(false)?;
            println!("Switched to {} theme.", "light".green());
        }
        Some(ThemeCommand::Toggle) => {
            let dark = prefs.toggle_dark()?;
            println!("Switched to {} theme.", if dark { "dark" } else { "light" });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_theme_commands_mutate_prefs() {
        let dir = tempdir().expect("failed to create tempdir");
        let mut prefs = PrefsStore::open_at(dir.path().join("prefs.json")).expect("open failed");

        handle_theme(&mut prefs, Some(ThemeCommand::Dark)).expect("dark failed");
        assert!(prefs.prefs().dark);

        handle_theme(&mut prefs, Some(ThemeCommand::Light)).expect("light failed");
        assert!(!prefs.prefs().dark);

        handle_theme(&mut prefs, Some(ThemeCommand::Toggle)).expect("toggle failed");
        assert!(prefs.prefs().dark);

        handle_theme(&mut prefs, None).expect("status failed");
        handle_theme(&mut prefs, Some(ThemeCommand::Status)).expect("status failed");
    }
}
