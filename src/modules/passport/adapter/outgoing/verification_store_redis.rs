use async_trait::async_trait;
use deadpool_redis::Pool;
use redis::AsyncCommands;
use std::sync::Arc;

use crate::constants::{IMAGE_CODE_REDIS_EXPIRES, SMS_CODE_REDIS_EXPIRES};
use crate::modules::passport::application::ports::outgoing::{
    VerificationStore, VerificationStoreError,
};

/// Redis-backed implementation of `VerificationStore`.
///
/// ## Redis data model
///
/// ```text
/// ImageCodeId_{challenge_id} -> captcha text   (TTL 300s)
/// SMS_{mobile}               -> 6-digit code   (TTL 300s)
/// ```
///
/// Both writes are plain `SETEX`: a second issuance for the same key simply
/// overwrites the first (last-write-wins). Redis TTL is the single source of
/// truth for cleanup; nothing ever deletes these keys explicitly.
#[derive(Clone)]
pub struct RedisVerificationStore {
    pool: Arc<Pool>,
}

impl RedisVerificationStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn image_code_key(image_code_id: &str) -> String {
        format!("ImageCodeId_{image_code_id}")
    }

    fn sms_code_key(mobile: &str) -> String {
        format!("SMS_{mobile}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, VerificationStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| VerificationStoreError::StoreFailed(format!("Pool error: {e}")))
    }

    async fn set_with_ttl(
        &self,
        key: String,
        value: &str,
        ttl: u64,
    ) -> Result<(), VerificationStoreError> {
        let mut conn = self.get_conn().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl)
            .await
            .map_err(|e| VerificationStoreError::StoreFailed(e.to_string()))
    }

    async fn get(&self, key: String) -> Result<Option<String>, VerificationStoreError> {
        let mut conn = self.get_conn().await?;
        conn.get(key)
            .await
            .map_err(|e| VerificationStoreError::StoreFailed(e.to_string()))
    }
}

#[async_trait]
impl VerificationStore for RedisVerificationStore {
    async fn store_image_code(
        &self,
        image_code_id: &str,
        text: &str,
    ) -> Result<(), VerificationStoreError> {
        self.set_with_ttl(
            Self::image_code_key(image_code_id),
            text,
            IMAGE_CODE_REDIS_EXPIRES,
        )
        .await
    }

    async fn fetch_image_code(
        &self,
        image_code_id: &str,
    ) -> Result<Option<String>, VerificationStoreError> {
        self.get(Self::image_code_key(image_code_id)).await
    }

    async fn store_sms_code(
        &self,
        mobile: &str,
        code: &str,
    ) -> Result<(), VerificationStoreError> {
        self.set_with_ttl(Self::sms_code_key(mobile), code, SMS_CODE_REDIS_EXPIRES)
            .await
    }

    async fn fetch_sms_code(&self, mobile: &str) -> Result<Option<String>, VerificationStoreError> {
        self.get(Self::sms_code_key(mobile)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_the_store_contract() {
        assert_eq!(
            RedisVerificationStore::image_code_key("x1"),
            "ImageCodeId_x1"
        );
        assert_eq!(
            RedisVerificationStore::sms_code_key("13800000000"),
            "SMS_13800000000"
        );
    }

    // Integration tests against a live Redis; skipped unless REDIS_URL is set.
    async fn setup_store() -> RedisVerificationStore {
        let redis_url = match std::env::var("REDIS_URL") {
            Ok(v) => v,
            Err(_) => {
                eprintln!("REDIS_URL not set; skipping Redis integration tests");
                std::process::exit(0);
            }
        };

        let pool = deadpool_redis::Config::from_url(&redis_url)
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .expect("Failed to create Redis pool");

        RedisVerificationStore::new(Arc::new(pool))
    }

    #[tokio::test]
    async fn image_code_round_trip() {
        let store = setup_store().await;

        store.store_image_code("it_x1", "AB3D").await.unwrap();
        let fetched = store.fetch_image_code("it_x1").await.unwrap();
        assert_eq!(fetched.as_deref(), Some("AB3D"));
    }

    #[tokio::test]
    async fn absent_code_reads_as_none() {
        let store = setup_store().await;

        let fetched = store.fetch_image_code("it_never_issued").await.unwrap();
        assert_eq!(fetched, None);
    }

    #[tokio::test]
    async fn sms_code_overwrite_is_last_write_wins() {
        let store = setup_store().await;

        store.store_sms_code("13811112222", "111111").await.unwrap();
        store.store_sms_code("13811112222", "222222").await.unwrap();

        let fetched = store.fetch_sms_code("13811112222").await.unwrap();
        assert_eq!(fetched.as_deref(), Some("222222"));
    }
}
