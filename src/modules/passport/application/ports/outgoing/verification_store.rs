use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerificationStoreError {
    #[error("Verification store operation failed: {0}")]
    StoreFailed(String),
}

/// Short-lived verification codes keyed by challenge id / mobile number.
///
/// Writes overwrite any previous value for the same key (last-write-wins);
/// expiry is enforced server-side by the store, so a `None` read means the
/// code was never issued or has already lapsed; the two cases are
/// indistinguishable to callers.
#[async_trait]
pub trait VerificationStore: Send + Sync {
    async fn store_image_code(
        &self,
        image_code_id: &str,
        text: &str,
    ) -> Result<(), VerificationStoreError>;

    async fn fetch_image_code(
        &self,
        image_code_id: &str,
    ) -> Result<Option<String>, VerificationStoreError>;

    async fn store_sms_code(&self, mobile: &str, code: &str)
        -> Result<(), VerificationStoreError>;

    async fn fetch_sms_code(&self, mobile: &str) -> Result<Option<String>, VerificationStoreError>;
}
