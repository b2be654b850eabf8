use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::modules::passport::application::ports::outgoing::{
    SessionBlacklist, SessionTokenProvider,
};
use crate::modules::passport::application::services::token_hasher::hash_token;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Invalid session token")]
    InvalidToken,

    #[error("Blacklist write failed: {0}")]
    BlacklistFailed(String),
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    /// Revokes the presented token until its natural expiry.
    async fn execute(&self, token: &str) -> Result<(), LogoutError>;
}

pub struct LogoutUseCase {
    tokens: Arc<dyn SessionTokenProvider>,
    blacklist: Arc<dyn SessionBlacklist>,
}

impl LogoutUseCase {
    pub fn new(
        tokens: Arc<dyn SessionTokenProvider>,
        blacklist: Arc<dyn SessionBlacklist>,
    ) -> Self {
        Self { tokens, blacklist }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, token: &str) -> Result<(), LogoutError> {
        let claims = self
            .tokens
            .verify_session_token(token)
            .map_err(|_| LogoutError::InvalidToken)?;

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or(LogoutError::InvalidToken)?;

        self.blacklist
            .revoke(&hash_token(token), expires_at)
            .await
            .map_err(|e| LogoutError::BlacklistFailed(e.to_string()))?;

        info!(user_id = claims.sub, "Session revoked");
        Ok(())
    }
}
