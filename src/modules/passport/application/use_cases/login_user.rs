use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::passport::application::domain::entities::SessionUserData;
use crate::modules::passport::application::ports::outgoing::{
    PasswordHasher, SessionTokenProvider, UserQuery, UserRepository,
};
use crate::modules::passport::application::services::mobile::is_valid_mobile;

use super::register_user::SessionUserInfo;

// ========================= Request =========================

#[derive(Debug, Clone)]
pub struct LoginRequest {
    mobile: String,
    password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginRequestError {
    #[error("参数有误")]
    MissingField,

    #[error("手机号格式不正确")]
    InvalidMobileFormat,
}

impl LoginRequest {
    pub fn new(
        mobile: Option<String>,
        password: Option<String>,
    ) -> Result<Self, LoginRequestError> {
        let (mobile, password) = match (mobile, password) {
            (Some(m), Some(p)) if !m.is_empty() && !p.is_empty() => (m, p),
            _ => return Err(LoginRequestError::MissingField),
        };

        if !is_valid_mobile(&mobile) {
            return Err(LoginRequestError::InvalidMobileFormat);
        }

        Ok(Self { mobile, password })
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Error / Response =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("User not found")]
    UserNotFound,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Session token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub session_token: String,
    pub user: SessionUserInfo,
}

// ========================= Use case =========================

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError>;
}

pub struct LoginUserUseCase {
    query: Arc<dyn UserQuery>,
    repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn SessionTokenProvider>,
}

impl LoginUserUseCase {
    pub fn new(
        query: Arc<dyn UserQuery>,
        repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn SessionTokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            tokens,
        }
    }
}

#[async_trait]
impl ILoginUserUseCase for LoginUserUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
        let user = self
            .query
            .find_by_mobile(request.mobile())
            .await
            .map_err(LoginError::QueryError)?
            .ok_or(LoginError::UserNotFound)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::VerificationFailed(e.to_string()))?;

        if !is_valid {
            warn!(mobile = %request.mobile(), "Login rejected: wrong password");
            return Err(LoginError::WrongPassword);
        }

        // Login-time bookkeeping only; a failed timestamp write must not
        // block the login itself.
        if let Err(e) = self.repository.update_last_login(user.id).await {
            warn!(user_id = user.id, error = %e, "Failed to update last_login");
        }

        let session = SessionUserData::from(&user);
        let session_token = self
            .tokens
            .generate_session_token(&session)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = user.id, "User logged in");

        Ok(LoginResponse {
            session_token,
            user: session.into(),
        })
    }
}
