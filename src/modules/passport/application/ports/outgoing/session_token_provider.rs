use serde::{Deserialize, Serialize};

use crate::modules::passport::application::domain::entities::SessionUserData;

/// Claims carried by a signed session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: i32,
    pub mobile: String,
    pub nick_name: String,
    pub is_admin: bool,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

pub trait SessionTokenProvider: Send + Sync {
    fn generate_session_token(&self, user: &SessionUserData) -> Result<String, TokenError>;
    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
