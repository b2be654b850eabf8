use async_trait::async_trait;

/// Read-side of the self-referential follow graph. The product only ever
/// traverses one level, so plain count/membership queries are enough.
#[async_trait]
pub trait FollowQuery: Send + Sync {
    async fn is_following(&self, follower_id: i32, followed_id: i32) -> Result<bool, String>;

    async fn follower_count(&self, user_id: i32) -> Result<u64, String>;

    async fn authored_news_count(&self, user_id: i32) -> Result<u64, String>;
}
