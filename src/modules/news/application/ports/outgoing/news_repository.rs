use async_trait::async_trait;

use crate::modules::news::application::domain::entities::NewsStatus;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NewsRepositoryError {
    #[error("News not found")]
    NewsNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Bump the click counter by one, atomically in SQL.
    async fn increment_clicks(&self, news_id: i32) -> Result<(), NewsRepositoryError>;

    /// Moderation transition. `reason` accompanies rejections only.
    async fn set_status(
        &self,
        news_id: i32,
        status: NewsStatus,
        reason: Option<String>,
    ) -> Result<(), NewsRepositoryError>;
}
