use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::Pool;
use redis::AsyncCommands;
use std::sync::Arc;

use crate::modules::passport::application::ports::outgoing::{
    SessionBlacklist, SessionBlacklistError,
};

/// Redis-backed session-token blacklist.
///
/// ## Redis data model
///
/// ```text
/// session:blacklist:{token_hash} -> "1"   (TTL = token remainder)
/// ```
///
/// - Key exists ⇒ token is revoked
/// - TTL equals the token's remaining lifetime, so entries disappear exactly
///   when the token would have expired anyway
///
/// Revoking a token that has already expired is a no-op.
#[derive(Clone)]
pub struct RedisSessionBlacklist {
    pool: Arc<Pool>,
}

impl RedisSessionBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn key(token_hash: &str) -> String {
        format!("session:blacklist:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionBlacklistError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionBlacklistError::StoreFailed(format!("Pool error: {e}")))
    }
}

#[async_trait]
impl SessionBlacklist for RedisSessionBlacklist {
    async fn revoke(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionBlacklistError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        conn.set_ex::<_, _, ()>(Self::key(token_hash), "1", ttl as u64)
            .await
            .map_err(|e| SessionBlacklistError::StoreFailed(e.to_string()))
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionBlacklistError> {
        let mut conn = self.get_conn().await?;
        conn.exists(Self::key(token_hash))
            .await
            .map_err(|e| SessionBlacklistError::StoreFailed(e.to_string()))
    }
}
