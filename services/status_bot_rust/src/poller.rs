//! The polling loop: fetch → validate → notify → advance cursor → sleep.

use chrono::Utc;
use log::{debug, error, info, warn};

use hwbot_core::clients::{Messenger, StatusProvider};
use hwbot_core::response::{check_response, current_date};
use hwbot_core::{BotError, Homework};

use crate::config::Config;
use crate::formatters;

/// Sequential poller over one status endpoint and one chat.
///
/// The only state carried across iterations is the timestamp cursor. It
/// starts at "now" and advances to the server-supplied `current_date`
/// after each fully successful iteration; a failed iteration leaves it
/// untouched so the missed window is retried.
pub struct StatusPoller<P, M> {
    config: Config,
    provider: P,
    messenger: M,
    cursor: i64,
}

impl<P: StatusProvider, M: Messenger> StatusPoller<P, M> {
    pub fn new(config: Config, provider: P, messenger: M) -> Self {
        let cursor = Utc::now().timestamp();
        Self::with_cursor(config, provider, messenger, cursor)
    }

    /// Start from an explicit cursor (tests, replays).
    pub fn with_cursor(config: Config, provider: P, messenger: M, cursor: i64) -> Self {
        Self {
            config,
            provider,
            messenger,
            cursor,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// One polling iteration.
    ///
    /// Any returned error is non-fatal; the caller turns it into a
    /// failure notification and keeps looping. Delivery failures for
    /// individual status messages are logged and swallowed here so one
    /// bad send neither aborts the record walk nor blocks the cursor.
    pub async fn run_once(&mut self) -> Result<(), BotError> {
        self.config.check_tokens()?;

        let payload = self.provider.get_api_answer(self.cursor).await?;
        let homeworks = check_response(&payload)?;

        if homeworks.is_empty() {
            debug!("No status changes since {}", self.cursor);
        }

        for record in &homeworks {
            let homework = Homework::from_value(record)?;
            let message = formatters::status_change_message(&homework);
            match self.messenger.send(&message).await {
                Ok(()) => info!("Sent status notification for \"{}\"", homework.name),
                Err(e) => error!("Failed to send status notification: {}", e),
            }
        }

        match current_date(&payload) {
            Some(ts) => self.cursor = ts,
            None => warn!(
                "Response carries no current_date, keeping cursor at {}",
                self.cursor
            ),
        }

        Ok(())
    }

    /// One full loop step minus the sleep: run the iteration and convert
    /// any error into a failure notification. A failed notification send
    /// is logged and swallowed as well.
    pub async fn poll_and_notify(&mut self) {
        if let Err(e) = self.run_once().await {
            match e {
                BotError::MissingConfig(_) => error!("Configuration check failed: {}", e),
                _ => error!("Iteration failed: {}", e),
            }

            let failure = formatters::failure_message(&e);
            if let Err(send_err) = self.messenger.send(&failure).await {
                error!("Failed to send failure notification: {}", send_err);
            }
        }
    }

    /// Run forever. The sleep happens every iteration, success or not.
    pub async fn run(&mut self) {
        info!(
            "Polling {} every {}s",
            self.config.endpoint,
            self.config.retry_interval.as_secs()
        );

        loop {
            self.poll_and_notify().await;
            tokio::time::sleep(self.config.retry_interval).await;
        }
    }
}
