use std::env;
use std::time::Duration;

use hwbot_core::BotError;

pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const DEFAULT_RETRY_INTERVAL_SECS: u64 = 600;

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,

    pub endpoint: String,
    pub retry_interval: Duration,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Missing secrets are kept as empty strings rather than failing
    /// startup: the loop re-checks them every iteration and reports them
    /// as a failure notification, so the process keeps running.
    pub fn from_env() -> Self {
        Self {
            practicum_token: env::var("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: env::var("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID").unwrap_or_default(),
            endpoint: env::var("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            retry_interval: Duration::from_secs(parse_u64_env(
                "RETRY_INTERVAL_SECS",
                DEFAULT_RETRY_INTERVAL_SECS,
            )),
        }
    }

    /// All three secrets must be non-empty before an iteration may talk
    /// to the outside world.
    pub fn check_tokens(&self) -> Result<(), BotError> {
        let mut missing = Vec::new();
        if self.practicum_token.trim().is_empty() {
            missing.push("PRACTICUM_TOKEN");
        }
        if self.telegram_token.trim().is_empty() {
            missing.push("TELEGRAM_TOKEN");
        }
        if self.telegram_chat_id.trim().is_empty() {
            missing.push("TELEGRAM_CHAT_ID");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(BotError::MissingConfig(missing.join(", ")))
        }
    }
}

fn parse_u64_env(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> Config {
        Config {
            practicum_token: "practicum".to_string(),
            telegram_token: "telegram".to_string(),
            telegram_chat_id: "42".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            retry_interval: Duration::from_secs(DEFAULT_RETRY_INTERVAL_SECS),
        }
    }

    #[test]
    fn test_check_tokens_ok() {
        assert!(full_config().check_tokens().is_ok());
    }

    #[test]
    fn test_check_tokens_reports_every_missing_variable() {
        let mut cfg = full_config();
        cfg.practicum_token.clear();
        cfg.telegram_chat_id = "  ".to_string();

        let err = cfg.check_tokens().unwrap_err();
        let text = err.to_string();
        assert!(text.contains("PRACTICUM_TOKEN"));
        assert!(text.contains("TELEGRAM_CHAT_ID"));
        assert!(!text.contains("TELEGRAM_TOKEN"));
    }
}
