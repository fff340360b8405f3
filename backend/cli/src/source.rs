//! Mock-attacker message source client.
//!
//! Polls an HTTP endpoint that yields the next attacker message as
//! `{"message": "..."}`. An empty or missing message means the stream is
//! done for this round; transport errors end the run rather than crash it.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

pub struct AttackerSource {
    client: Client,
    url: String,
}

impl AttackerSource {
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            url: url.into(),
        }
    }

    /// Fetch the next attacker message, or `None` when there is no more
    /// input this round.
    pub async fn next_message(&self) -> Option<String> {
        let response = match self.client.get(&self.url).send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, url = %self.url, "attacker source unreachable, ending run");
                return None;
            }
        };

        let body: serde_json::Value = match response.json().await {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, "attacker source returned malformed body, ending run");
                return None;
            }
        };

        match body.get("message").and_then(|m| m.as_str()) {
            Some(message) if !message.trim().is_empty() => Some(message.to_string()),
            _ => {
                debug!("attacker source is out of messages");
                None
            }
        }
    }
}
