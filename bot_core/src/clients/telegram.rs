use std::time::Duration;

use async_trait::async_trait;
use log::info;
use reqwest::Client;
use serde::Serialize;

use crate::clients::Messenger;
use crate::error::BotError;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Client for the Telegram Bot `sendMessage` method, pinned to one chat.
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    base_url: String,
    token: String,
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The bot token is part of the URL, keep it out of logs
        f.debug_struct("TelegramClient")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramClient {
    pub fn new(token: String, chat_id: String) -> Self {
        Self::with_base_url(TELEGRAM_API_BASE.to_string(), token, chat_id)
    }

    /// Point the client at a different API host (proxies, tests).
    pub fn with_base_url(base_url: String, token: String, chat_id: String) -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url,
            token,
            chat_id,
        }
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send(&self, text: &str) -> Result<(), BotError> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.base_url.trim_end_matches('/'),
            self.token
        );
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| BotError::SendMessage(e.without_url().to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(BotError::SendMessage(format!(
                "Telegram API non-2xx: {status} body={detail}"
            )));
        }

        info!("Message delivered to chat {}", self.chat_id);
        Ok(())
    }
}
