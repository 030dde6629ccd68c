pub mod practicum;
pub mod telegram;

// Re-export commonly used types
pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::BotError;

/// Source of homework status payloads.
///
/// The production implementation is `PracticumClient`; tests drive the
/// loop with canned payloads instead.
#[async_trait]
pub trait StatusProvider: Send + Sync {
    /// One poll: the parsed payload for homeworks updated since `from_date`.
    async fn get_api_answer(&self, from_date: i64) -> Result<Value, BotError>;
}

/// Outbound chat message delivery.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), BotError>;
}
