use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::modules::passport::application::ports::outgoing::{
    CaptchaGenerator, VerificationStore,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum IssueImageCodeError {
    #[error("Captcha rendering failed")]
    RenderFailed,

    #[error("Storing the captcha text failed: {0}")]
    StoreFailed(String),
}

#[async_trait]
pub trait IIssueImageCodeUseCase: Send + Sync {
    /// Returns the rendered image bytes; the underlying text lives only in
    /// the verification store.
    async fn execute(&self, image_code_id: &str) -> Result<Vec<u8>, IssueImageCodeError>;
}

pub struct IssueImageCodeUseCase {
    captcha: Arc<dyn CaptchaGenerator>,
    store: Arc<dyn VerificationStore>,
}

impl IssueImageCodeUseCase {
    pub fn new(captcha: Arc<dyn CaptchaGenerator>, store: Arc<dyn VerificationStore>) -> Self {
        Self { captcha, store }
    }
}

#[async_trait]
impl IIssueImageCodeUseCase for IssueImageCodeUseCase {
    async fn execute(&self, image_code_id: &str) -> Result<Vec<u8>, IssueImageCodeError> {
        let generated = self
            .captcha
            .generate()
            .map_err(|_| IssueImageCodeError::RenderFailed)?;

        self.store
            .store_image_code(image_code_id, &generated.text)
            .await
            .map_err(|e| IssueImageCodeError::StoreFailed(e.to_string()))?;

        debug!(image_code_id = %image_code_id, "Image captcha issued");
        Ok(generated.image)
    }
}
