use anyhow::Result;
use dotenv::dotenv;
use log::info;

use hwbot_core::clients::{PracticumClient, TelegramClient};
use status_bot_rust::config::Config;
use status_bot_rust::poller::StatusPoller;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stdout)
        .init();

    info!("Starting homework status bot...");

    let cfg = Config::from_env();
    info!(
        "Config: endpoint={} retry_interval={}s",
        cfg.endpoint,
        cfg.retry_interval.as_secs()
    );

    let provider = PracticumClient::new(cfg.endpoint.clone(), cfg.practicum_token.clone());
    let messenger = TelegramClient::new(cfg.telegram_token.clone(), cfg.telegram_chat_id.clone());

    let mut poller = StatusPoller::new(cfg, provider, messenger);
    poller.run().await;

    Ok(())
}
