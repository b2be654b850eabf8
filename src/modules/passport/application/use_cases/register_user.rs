use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::modules::passport::application::domain::entities::SessionUserData;
use crate::modules::passport::application::ports::outgoing::{
    CreateUserData, PasswordHasher, SessionTokenProvider, UserRepository, UserRepositoryError,
    VerificationStore,
};
use crate::modules::passport::application::services::mobile::is_valid_mobile;

// ========================= Request =========================

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    mobile: String,
    sms_code: String,
    password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterRequestError {
    #[error("参数有误")]
    MissingField,

    #[error("手机号格式不正确")]
    InvalidMobileFormat,
}

impl RegisterRequest {
    pub fn new(
        mobile: Option<String>,
        sms_code: Option<String>,
        password: Option<String>,
    ) -> Result<Self, RegisterRequestError> {
        let (mobile, sms_code, password) = match (mobile, sms_code, password) {
            (Some(m), Some(c), Some(p)) if !m.is_empty() && !c.is_empty() && !p.is_empty() => {
                (m, c, p)
            }
            _ => return Err(RegisterRequestError::MissingField),
        };

        if !is_valid_mobile(&mobile) {
            return Err(RegisterRequestError::InvalidMobileFormat);
        }

        Ok(Self {
            mobile,
            sms_code,
            password,
        })
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn sms_code(&self) -> &str {
        &self.sms_code
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Error / Response =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterError {
    #[error("SMS code lookup failed: {0}")]
    FetchFailed(String),

    #[error("SMS code expired or never issued")]
    SmsCodeExpired,

    #[error("SMS code does not match")]
    SmsCodeMismatch,

    #[error("Mobile already registered")]
    MobileAlreadyRegistered,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Session token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionUserInfo {
    pub id: i32,
    pub mobile: String,
    pub nick_name: String,
    pub is_admin: bool,
}

impl From<SessionUserData> for SessionUserInfo {
    fn from(user: SessionUserData) -> Self {
        Self {
            id: user.id,
            mobile: user.mobile,
            nick_name: user.nick_name,
            is_admin: user.is_admin,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub session_token: String,
    pub user: SessionUserInfo,
}

// ========================= Use case =========================

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest) -> Result<RegisterResponse, RegisterError>;
}

pub struct RegisterUserUseCase {
    store: Arc<dyn VerificationStore>,
    repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn SessionTokenProvider>,
}

impl RegisterUserUseCase {
    pub fn new(
        store: Arc<dyn VerificationStore>,
        repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn SessionTokenProvider>,
    ) -> Self {
        Self {
            store,
            repository,
            password_hasher,
            tokens,
        }
    }
}

#[async_trait]
impl IRegisterUserUseCase for RegisterUserUseCase {
    async fn execute(&self, request: RegisterRequest) -> Result<RegisterResponse, RegisterError> {
        let stored = self
            .store
            .fetch_sms_code(request.mobile())
            .await
            .map_err(|e| RegisterError::FetchFailed(e.to_string()))?
            .ok_or(RegisterError::SmsCodeExpired)?;

        // Exact comparison. Image codes are matched case-insensitively but
        // SMS codes are not; the asymmetry is preserved deliberately.
        if stored != request.sms_code() {
            return Err(RegisterError::SmsCodeMismatch);
        }

        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(CreateUserData {
                mobile: request.mobile().to_string(),
                // Nickname defaults to the mobile until the user renames it.
                nick_name: request.mobile().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::MobileAlreadyRegistered => {
                    RegisterError::MobileAlreadyRegistered
                }
                other => RegisterError::RepositoryError(other.to_string()),
            })?;

        let session = SessionUserData::from(&user);
        let session_token = self
            .tokens
            .generate_session_token(&session)
            .map_err(|e| RegisterError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = user.id, mobile = %user.mobile, "User registered");

        Ok(RegisterResponse {
            session_token,
            user: session.into(),
        })
    }
}
