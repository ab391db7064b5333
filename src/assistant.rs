//! Simulated assistant replies
//!
//! Stand-in for a real inference backend: every user message gets exactly
//! one assistant reply, composed from a canned string plus an echo of the
//! user's opening words, after a randomized thinking delay.
//!
//! The delay is the only suspension point and there is no cancellation. A
//! chatroom deleted while a reply is pending is handled by the store's
//! permissive `add_message` contract: the deferred append lands on a
//! missing id and is dropped silently.

use crate::config::AssistantConfig;
use crate::error::Result;
use crate::store::{ChatStore, MessageDraft};
use rand::Rng;
use std::time::Duration;

/// Number of leading words of the user message echoed back in the reply
const ECHO_WORDS: usize = 5;

/// Canned-reply generator with a randomized thinking delay
#[derive(Debug, Clone)]
pub struct SimulatedAssistant {
    replies: Vec<String>,
    min_delay: Duration,
    max_delay: Duration,
}

impl SimulatedAssistant {
    /// Build an assistant from configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use chatgenius::assistant::SimulatedAssistant;
    /// use chatgenius::config::AssistantConfig;
    ///
    /// let assistant = SimulatedAssistant::new(&AssistantConfig::default());
    /// let reply = assistant.compose_reply("plan a trip to Kyoto next spring");
    /// assert!(reply.ends_with("plan a trip to Kyoto..."));
    /// ```
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            replies: config.replies.clone(),
            min_delay: Duration::from_millis(config.min_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
        }
    }

    /// Pick a thinking delay uniformly from the configured range
    pub fn thinking_delay(&self) -> Duration {
        if self.min_delay >= self.max_delay {
            return self.min_delay;
        }
        let mut rng = rand::rng();
        let millis = rng.random_range(self.min_delay.as_millis()..=self.max_delay.as_millis());
        Duration::from_millis(millis as u64)
    }

    /// Compose a reply: a canned string picked uniformly at random, plus an
    /// echo of the first few words of the user message
    pub fn compose_reply(&self, user_content: &str) -> String {
        let mut rng = rand::rng();
        let canned = &self.replies[rng.random_range(0..self.replies.len())];

        let echo: Vec<&str> = user_content.split_whitespace().take(ECHO_WORDS).collect();
        format!("{} {}...", canned, echo.join(" "))
    }

    /// Append exactly one assistant reply to `chatroom_id` after the delay
    ///
    /// Further user actions may run during the delay; if the chatroom is
    /// deleted before it elapses the append is a no-op.
    pub async fn respond(
        &self,
        store: &mut ChatStore,
        chatroom_id: &str,
        user_content: &str,
    ) -> Result<()> {
        let delay = self.thinking_delay();
        tracing::debug!(
            "Simulating assistant thinking for {}ms in chatroom {}",
            delay.as_millis(),
            chatroom_id
        );
        tokio::time::sleep(delay).await;

        let reply = self.compose_reply(user_content);
        store.add_message(chatroom_id, MessageDraft::assistant(reply))
    }
}
