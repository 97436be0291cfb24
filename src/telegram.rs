use serde::Serialize;

use crate::error::{PollError, Result};

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Sends plain-text messages to a single chat via the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramNotifier {
    http: reqwest::Client,
    token: String,
    chat_id: String,
    base_url: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramNotifier {
    pub fn new(token: &str, chat_id: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.to_string(),
            chat_id: chat_id.to_string(),
            base_url: TELEGRAM_API_URL.to_string(),
        }
    }

    /// Points the notifier at a different API host, for tests.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let resp = self
            .http
            .post(&url)
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(code = status.as_u16(), body = %body, "Telegram send failed");
            return Err(PollError::Notify(format!("{}: {}", status, body)));
        }

        tracing::info!(message = text, "Notification delivered");
        Ok(())
    }
}
