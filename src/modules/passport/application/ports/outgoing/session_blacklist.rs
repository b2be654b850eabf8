use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionBlacklistError {
    #[error("Blacklist operation failed: {0}")]
    StoreFailed(String),
}

/// Revoked session tokens, kept until their natural expiry.
///
/// Tokens are identified by hash, never stored raw. A revoked entry that has
/// already reached its expiry is dropped by the store itself; `revoke` on an
/// expired token is a no-op.
#[async_trait]
pub trait SessionBlacklist: Send + Sync {
    async fn revoke(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionBlacklistError>;

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionBlacklistError>;
}
