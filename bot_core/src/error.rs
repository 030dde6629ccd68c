use thiserror::Error;

/// Error union for one polling iteration.
///
/// Every variant is non-fatal to the process: the loop formats the error
/// into a failure notification and keeps going. The variant is inspected
/// only to build text, never to branch on behavior. Display strings are
/// user-facing and feed the chat notification, so they stay in Russian
/// like the status verdicts.
#[derive(Debug, Error)]
pub enum BotError {
    /// One or more required environment variables are unset or empty.
    #[error("Отсутствуют переменные окружения: {0}")]
    MissingConfig(String),

    /// The homework API could not be reached at all.
    #[error("Эндпоинт {endpoint} недоступен: {source}")]
    ApiUnreachable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The homework API answered with a non-200 status code.
    #[error("Эндпоинт {endpoint} недоступен. Код ответа API: {status}")]
    ApiStatus { endpoint: String, status: u16 },

    /// The response body is not a mapping with a `homeworks` list.
    #[error("Отсутствуют ожидаемые ключи в ответе API: {0}")]
    ResponseShape(String),

    /// A homework record lacks a required key.
    #[error("В информации о домашней работе нет ключа `{0}`")]
    MissingField(&'static str),

    /// A status string outside the documented set.
    #[error("Недокументированный статус домашней работы: {0}")]
    UnknownStatus(String),

    /// Outbound message delivery failed.
    #[error("Не удалось отправить сообщение: {0}")]
    SendMessage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_status_display_embeds_code() {
        let err = BotError::ApiStatus {
            endpoint: "https://example.test/api/".to_string(),
            status: 404,
        };
        let text = err.to_string();
        assert!(text.contains("404"), "got: {text}");
        assert!(text.contains("https://example.test/api/"));

        let err = BotError::ApiStatus {
            endpoint: "https://example.test/api/".to_string(),
            status: 500,
        };
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_unknown_status_display_carries_raw_value() {
        let err = BotError::UnknownStatus("in_progress".to_string());
        assert!(err.to_string().contains("in_progress"));
    }

    #[test]
    fn test_missing_config_display_names_variables() {
        let err = BotError::MissingConfig("PRACTICUM_TOKEN, TELEGRAM_TOKEN".to_string());
        let text = err.to_string();
        assert!(text.contains("PRACTICUM_TOKEN"));
        assert!(text.contains("TELEGRAM_TOKEN"));
    }
}
