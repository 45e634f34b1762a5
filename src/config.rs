//! Bot Configuration

use std::path::PathBuf;

/// Configuration loaded from environment
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub backend_url: String,
    pub redis_url: String,
    pub order_formats_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// - `TELEGRAM_BOT_TOKEN` - bot API token (required)
    /// - `BACKEND_URL` - trading backend base URL (default: http://localhost:8000)
    /// - `REDIS_URL` - token cache (default: redis://127.0.0.1:6379)
    /// - `ORDER_FORMATS_PATH` - order template file (default: order_formats.yaml)
    pub fn from_env() -> anyhow::Result<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow::anyhow!("TELEGRAM_BOT_TOKEN environment variable required"))?;

        let backend_url = std::env::var("BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        let redis_url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

        let order_formats_path = std::env::var("ORDER_FORMATS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("order_formats.yaml"));

        Ok(Config {
            bot_token,
            backend_url,
            redis_url,
            order_formats_path,
        })
    }
}
