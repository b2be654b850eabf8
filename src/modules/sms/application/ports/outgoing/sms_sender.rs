use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SmsError {
    /// The gateway answered but reported a non-success status code.
    #[error("SMS gateway rejected the request: {0}")]
    GatewayStatus(String),

    /// The request never produced a usable gateway answer.
    #[error("SMS gateway request failed: {0}")]
    Transport(String),
}

/// Outgoing port for template-SMS dispatch.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send_template(
        &self,
        mobile: &str,
        datas: &[String],
        template_id: &str,
    ) -> Result<(), SmsError>;
}
