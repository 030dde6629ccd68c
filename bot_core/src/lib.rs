//! Homework Bot Core - shared logic for the status notification service.
//!
//! This library provides:
//! - The typed error union carried through the polling loop (`BotError`)
//! - Homework record validation and the fixed status→verdict table
//! - Payload shape validation (`check_response`) and cursor extraction
//! - HTTP clients for the homework-review API and the Telegram Bot API
//! - Trait seams (`StatusProvider`, `Messenger`) so the loop can be
//!   driven by mock transports in tests

pub mod clients;
pub mod error;
pub mod models;
pub mod response;

pub use error::BotError;
pub use models::{Homework, HomeworkStatus};
