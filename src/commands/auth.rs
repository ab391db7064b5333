//! Simulated phone/OTP authentication
//!
//! No OTP is ever delivered or checked against anything: the flow validates
//! shape (digit-only phone, 6-digit code), simulates delivery and
//! verification delays, and then stores the identity. This mirrors the
//! behavior of a real sign-in screen without any backend.

use crate::error::{ChatGeniusError, Result};
use crate::store::{Identity, SessionStore};
use colored::Colorize;
use regex::Regex;
use std::time::Duration;

/// How long the fake OTP "delivery" takes
const SEND_DELAY: Duration = Duration::from_millis(1000);
/// How long the fake OTP "verification" takes
const VERIFY_DELAY: Duration = Duration::from_millis(1500);

/// Validate a phone number: digits only, 6 to 15 of them
pub fn validate_phone(phone: &str) -> Result<()> {
    let re = Regex::new(r"^\d{6,15}$").expect("static regex");
    if !re.is_match(phone) {
        return Err(ChatGeniusError::Validation(
            "Phone number must be 6-15 digits with no other characters".to_string(),
        )
        .into());
    }
    Ok(())
}

/// Validate a one-time code: exactly 6 digits
pub fn validate_otp(code: &str) -> Result<()> {
    let re = Regex::new(r"^\d{6}$").expect("static regex");
    if !re.is_match(code) {
        return Err(
            ChatGeniusError::Validation("Please enter a valid 6-digit OTP".to_string()).into(),
        );
    }
    Ok(())
}

/// Sign in with the simulated OTP flow
///
/// Validates the phone, "sends" an OTP, prompts for the code when it was
/// not given on the command line, "verifies" it, and stores the identity.
pub async fn run_login(
    session: &mut SessionStore,
    country_code: String,
    phone: String,
    code: Option<String>,
) -> Result<()> {
    validate_phone(&phone)?;

    println!("Sending OTP to {} {}...", country_code, phone);
    tokio::time::sleep(SEND_DELAY).await;
    println!("{}", "OTP sent successfully!".green());

    let code = match code {
        Some(code) => code,
        None => prompt_for_code()?,
    };
    validate_otp(&code)?;

    println!("Verifying...");
    tokio::time::sleep(VERIFY_DELAY).await;

    let identity = Identity::new(phone, country_code);
    session.login(identity)?;
    println!("{}", "Login successful!".green());
    Ok(())
}

/// Sign out, clearing the stored session
pub fn run_logout(session: &mut SessionStore) -> Result<()> {
    if session.current_identity().is_none() {
        println!("{}", "Not signed in.".yellow());
        return Ok(());
    }
    session.logout()?;
    println!("{}", "Logged out successfully.".green());
    Ok(())
}

/// Show the signed-in identity
pub fn run_status(session: &SessionStore) -> Result<()> {
    match session.current_identity() {
        Some(identity) => {
            println!(
                "Signed in as {} ({} {})",
                identity.id.cyan(),
                identity.country_code,
                identity.phone
            );
        }
        None => {
            println!(
                "{} Use {} to sign in.",
                "Not signed in.".yellow(),
                "chatgenius auth login --phone <digits>".cyan()
            );
        }
    }
    Ok(())
}

fn prompt_for_code() -> Result<String> {
    let mut rl = rustyline::DefaultEditor::new()?;
    let line = rl.readline("Enter the 6-digit OTP: ")?;
    Ok(line.trim().to_string())
}
