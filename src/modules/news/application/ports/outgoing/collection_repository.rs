use async_trait::async_trait;

use super::news_query::NewsPage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CollectionRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// The user's collected-news set. Both writes are idempotent toggles: a
/// collect on an already-collected pair and a cancel on an absent pair are
/// no-ops.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    async fn collect(&self, user_id: i32, news_id: i32) -> Result<(), CollectionRepositoryError>;

    async fn cancel_collect(
        &self,
        user_id: i32,
        news_id: i32,
    ) -> Result<(), CollectionRepositoryError>;

    async fn is_collected(
        &self,
        user_id: i32,
        news_id: i32,
    ) -> Result<bool, CollectionRepositoryError>;

    /// Collected news, most recently collected first.
    async fn list_collected(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<NewsPage, CollectionRepositoryError>;
}
