//! Notification text construction.

use hwbot_core::{BotError, Homework};

/// Status-change notification for one homework record.
pub fn status_change_message(homework: &Homework) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.name,
        homework.status.verdict()
    )
}

/// Generic failure notification sent when an iteration errors out.
pub fn failure_message(error: &BotError) -> String {
    format!("Сбой в работе программы: {error}")
}
