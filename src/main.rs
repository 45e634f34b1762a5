//! Order Relay - Telegram front end for the exchange backend
//!
//! The bot owns no trading logic:
//! 1. Receives commands and button presses from Telegram
//! 2. Caches bearer tokens in Redis across logins
//! 3. Forwards order payloads to the backend REST API
//! 4. Relays the backend's responses back to the chat

use std::sync::Arc;
use teloxide::Bot;
use tracing::{info, Level};

use order_relay::{AppState, BackendClient, Config, RedisTokenStore, TemplateCatalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting Order Relay...");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!("Backend: {}", config.backend_url);

    // Load order templates once at startup
    let catalog = TemplateCatalog::load(&config.order_formats_path)?;
    info!("✓ Loaded {} order templates", catalog.len());

    // Connect the token cache
    let tokens = RedisTokenStore::connect(&config.redis_url).await?;
    info!("✓ Connected to token cache");

    // Create backend client
    let backend = BackendClient::new(&config.backend_url)?;

    let bot = Bot::new(&config.bot_token);

    order_relay::dispatcher::run(
        bot,
        AppState {
            backend,
            tokens: Arc::new(tokens),
            catalog,
        },
    )
    .await
}
