use captcha::filters::Noise;
use captcha::Captcha;

use crate::modules::passport::application::ports::outgoing::{
    CaptchaError, CaptchaGenerator, GeneratedCaptcha,
};

const CAPTCHA_CHARS: u32 = 4;

/// Renders 4-character image captchas with light noise.
#[derive(Clone, Default)]
pub struct ImageCaptchaGenerator;

impl ImageCaptchaGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CaptchaGenerator for ImageCaptchaGenerator {
    fn generate(&self) -> Result<GeneratedCaptcha, CaptchaError> {
        let mut captcha = Captcha::new();
        captcha
            .add_chars(CAPTCHA_CHARS)
            .apply_filter(Noise::new(0.4))
            .view(220, 120);

        let text = captcha.chars_as_string();
        let image = captcha.as_png().ok_or(CaptchaError::RenderFailed)?;

        Ok(GeneratedCaptcha { text, image })
    }
}
