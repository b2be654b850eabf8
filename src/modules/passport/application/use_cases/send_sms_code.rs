use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

use crate::constants::SMS_CODE_TEMPLATE_ID;
use crate::modules::passport::application::services::mobile::is_valid_mobile;
use crate::modules::passport::application::ports::outgoing::VerificationStore;
use crate::modules::sms::application::ports::outgoing::SmsSender;

// ========================= Request =========================

/// Validated request: all three fields present, mobile well-formed.
#[derive(Debug, Clone)]
pub struct SendSmsCodeRequest {
    mobile: String,
    image_code: String,
    image_code_id: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SmsCodeRequestError {
    #[error("参数有误")]
    MissingField,

    #[error("手机号格式不正确")]
    InvalidMobileFormat,
}

impl SendSmsCodeRequest {
    pub fn new(
        mobile: Option<String>,
        image_code: Option<String>,
        image_code_id: Option<String>,
    ) -> Result<Self, SmsCodeRequestError> {
        let (mobile, image_code, image_code_id) = match (mobile, image_code, image_code_id) {
            (Some(m), Some(c), Some(id)) if !m.is_empty() && !c.is_empty() && !id.is_empty() => {
                (m, c, id)
            }
            _ => return Err(SmsCodeRequestError::MissingField),
        };

        if !is_valid_mobile(&mobile) {
            return Err(SmsCodeRequestError::InvalidMobileFormat);
        }

        Ok(Self {
            mobile,
            image_code,
            image_code_id,
        })
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn image_code(&self) -> &str {
        &self.image_code
    }

    pub fn image_code_id(&self) -> &str {
        &self.image_code_id
    }
}

// ========================= Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendSmsCodeError {
    #[error("Image code lookup failed: {0}")]
    FetchFailed(String),

    #[error("Image code expired or never issued")]
    ImageCodeExpired,

    #[error("Image code does not match")]
    ImageCodeMismatch,

    #[error("Storing the SMS code failed: {0}")]
    StoreFailed(String),

    #[error("SMS gateway failed: {0}")]
    GatewayFailed(String),
}

// ========================= Use case =========================

#[async_trait]
pub trait ISendSmsCodeUseCase: Send + Sync {
    async fn execute(&self, request: SendSmsCodeRequest) -> Result<(), SendSmsCodeError>;
}

pub struct SendSmsCodeUseCase {
    store: Arc<dyn VerificationStore>,
    sms: Arc<dyn SmsSender>,
}

impl SendSmsCodeUseCase {
    pub fn new(store: Arc<dyn VerificationStore>, sms: Arc<dyn SmsSender>) -> Self {
        Self { store, sms }
    }
}

#[async_trait]
impl ISendSmsCodeUseCase for SendSmsCodeUseCase {
    async fn execute(&self, request: SendSmsCodeRequest) -> Result<(), SendSmsCodeError> {
        // Image codes are compared case-insensitively; SMS codes are not.
        // The asymmetry is part of the existing contract and kept as-is.
        let stored = self
            .store
            .fetch_image_code(request.image_code_id())
            .await
            .map_err(|e| SendSmsCodeError::FetchFailed(e.to_string()))?
            .ok_or(SendSmsCodeError::ImageCodeExpired)?;

        if !stored.eq_ignore_ascii_case(request.image_code()) {
            return Err(SendSmsCodeError::ImageCodeMismatch);
        }

        let code = format!("{:06}", rand::thread_rng().gen_range(0..1_000_000));
        debug!(mobile = %request.mobile(), "Generated SMS verification code");

        // Stored before dispatch so a gateway retry by the user cannot race
        // the code into existence after the SMS already left.
        self.store
            .store_sms_code(request.mobile(), &code)
            .await
            .map_err(|e| SendSmsCodeError::StoreFailed(e.to_string()))?;

        let minutes = (crate::constants::SMS_CODE_REDIS_EXPIRES / 60).to_string();
        self.sms
            .send_template(request.mobile(), &[code, minutes], SMS_CODE_TEMPLATE_ID)
            .await
            .map_err(|e| SendSmsCodeError::GatewayFailed(e.to_string()))?;

        Ok(())
    }
}
