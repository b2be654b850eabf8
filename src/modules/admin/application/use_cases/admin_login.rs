use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::passport::application::domain::entities::SessionUserData;
use crate::modules::passport::application::ports::outgoing::{
    PasswordHasher, SessionTokenProvider, UserQuery, UserRepository,
};
use crate::modules::passport::application::use_cases::register_user::SessionUserInfo;

#[derive(Debug, Clone)]
pub struct AdminLoginRequest {
    /// The admin's mobile number doubles as the console username.
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("用户名密码不能为空")]
pub struct AdminLoginRequestError;

impl AdminLoginRequest {
    pub fn new(
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, AdminLoginRequestError> {
        match (username, password) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Ok(Self {
                username: u,
                password: p,
            }),
            _ => Err(AdminLoginRequestError),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminLoginError {
    #[error("Invalid admin username")]
    InvalidUser,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Verification failed: {0}")]
    VerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminLoginResponse {
    pub session_token: String,
    pub user: SessionUserInfo,
}

#[async_trait]
pub trait AdminLoginUseCase: Send + Sync {
    async fn execute(
        &self,
        request: AdminLoginRequest,
    ) -> Result<AdminLoginResponse, AdminLoginError>;
}

pub struct AdminLoginService {
    query: Arc<dyn UserQuery>,
    repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn SessionTokenProvider>,
}

impl AdminLoginService {
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
impl AdminLoginUseCase for AdminLoginService {
    async fn execute(
        &self,
        request: AdminLoginRequest,
    ) -> Result<AdminLoginResponse, AdminLoginError> {
        // The admin flag is part of the lookup: a regular account with the
        // right password is still an invalid console user.
        let user = self
            .query
            .find_admin_by_mobile(&request.username)
            .await
            .map_err(AdminLoginError::QueryError)?
            .ok_or(AdminLoginError::InvalidUser)?;

        let is_valid = self
            .password_hasher
            .verify_password(&request.password, &user.password_hash)
            .await
            .map_err(|e| AdminLoginError::VerificationFailed(e.to_string()))?;

        if !is_valid {
            warn!(mobile = %request.username, "Admin login rejected");
            return Err(AdminLoginError::WrongPassword);
        }

        if let Err(e) = self.repository.update_last_login(user.id).await {
            warn!(user_id = user.id, error = %e, "Failed to update last_login");
        }

        let session = SessionUserData::from(&user);
        let session_token = self
            .tokens
            .generate_session_token(&session)
            .map_err(|e| AdminLoginError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = user.id, "Admin logged in");

        Ok(AdminLoginResponse {
            session_token,
            user: session.into(),
        })
    }
}
