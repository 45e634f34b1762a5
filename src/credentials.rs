//! Credential store - caches bearer tokens between logins

use async_trait::async_trait;
use redis::AsyncCommands;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Store for bearer tokens, keyed per chat so concurrent users
/// never overwrite each other's credentials.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Cache a token for a chat, replacing any previous one
    async fn set_token(&self, chat_id: i64, token: &str) -> anyhow::Result<()>;

    /// Get the cached token for a chat, if any
    async fn token(&self, chat_id: i64) -> anyhow::Result<Option<String>>;
}

fn token_key(chat_id: i64) -> String {
    format!("auth_token:{}", chat_id)
}

/// Redis-backed token store
pub struct RedisTokenStore {
    conn: redis::aio::MultiplexedConnection,
}

impl RedisTokenStore {
    pub async fn connect(redis_url: &str) -> anyhow::Result<Self> {
        let client = redis::Client::open(redis_url)?;
        let conn = client.get_multiplexed_async_connection().await?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn set_token(&self, chat_id: i64, token: &str) -> anyhow::Result<()> {
        // Explicit type annotation to avoid never type fallback
        let _: () = self.conn.clone().set(token_key(chat_id), token).await?;
        debug!("Stored token for chat {}", chat_id);
        Ok(())
    }

    async fn token(&self, chat_id: i64) -> anyhow::Result<Option<String>> {
        let value: Option<String> = self.conn.clone().get(token_key(chat_id)).await?;
        Ok(value)
    }
}

/// In-memory token store for running without Redis and for tests
#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<HashMap<i64, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn set_token(&self, chat_id: i64, token: &str) -> anyhow::Result<()> {
        self.tokens.write().await.insert(chat_id, token.to_string());
        Ok(())
    }

    async fn token(&self, chat_id: i64) -> anyhow::Result<Option<String>> {
        Ok(self.tokens.read().await.get(&chat_id).cloned())
    }
}
