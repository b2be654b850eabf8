use std::env;

use crate::constants::SESSION_LIFETIME_SECONDS;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Session token lifetime in seconds. Non-permanent, capped at 7 days.
    pub session_token_expiry: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        // HS256 requires at least 32 bytes of key material
        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let session_token_expiry = env::var("SESSION_LIFETIME")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(SESSION_LIFETIME_SECONDS);

        if session_token_expiry <= 0 || session_token_expiry > SESSION_LIFETIME_SECONDS {
            panic!("SESSION_LIFETIME must be between 1 second and 7 days");
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "newsportal".to_string());

        Self {
            secret_key,
            issuer,
            session_token_expiry,
        }
    }
}
