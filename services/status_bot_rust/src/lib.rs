//! Status Bot Service Library
//!
//! Exposes the polling loop and its helpers for integration testing.

pub mod config;
pub mod formatters;
pub mod poller;

// Re-export commonly used types
pub use config::Config;
pub use poller::StatusPoller;
