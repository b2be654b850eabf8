#[derive(Debug, Clone)]
pub struct GeneratedCaptcha {
    /// The text the user must type back.
    pub text: String,
    /// Rendered PNG bytes.
    pub image: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CaptchaError {
    #[error("Captcha rendering failed")]
    RenderFailed,
}

pub trait CaptchaGenerator: Send + Sync {
    fn generate(&self) -> Result<GeneratedCaptcha, CaptchaError>;
}
