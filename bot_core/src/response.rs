//! Shape validation for homework API payloads.
//!
//! The API body is handled as raw JSON and field-plucked explicitly, so a
//! malformed payload surfaces as a typed `BotError` with a readable
//! message instead of a deserializer error.

use serde_json::Value;

use crate::error::BotError;

/// Returns the `homeworks` list unchanged.
///
/// The payload must be a JSON object whose `homeworks` key holds an
/// array; anything else is a shape error.
pub fn check_response(response: &Value) -> Result<Vec<Value>, BotError> {
    let obj = response
        .as_object()
        .ok_or_else(|| BotError::ResponseShape("ответ не является объектом".to_string()))?;

    match obj.get("homeworks") {
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(_) => Err(BotError::ResponseShape(
            "`homeworks` не является списком".to_string(),
        )),
        None => Err(BotError::ResponseShape(
            "нет ключа `homeworks`".to_string(),
        )),
    }
}

/// Server-supplied cursor for the next poll, if the payload carries one.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(|v| v.as_i64())
}
