use async_trait::async_trait;

use crate::modules::news::application::domain::entities::Comment;

#[derive(Debug, Clone)]
pub struct CreateCommentData {
    pub user_id: i32,
    pub news_id: i32,
    pub content: String,
    pub parent_id: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Comment not found")]
    CommentNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// A comment joined with its author and, for replies, its parent, plus the
/// viewer's like flag.
#[derive(Debug, Clone)]
pub struct CommentWithUser {
    pub comment: Comment,
    pub user_id: i32,
    pub user_nick: String,
    pub user_avatar: Option<String>,
    pub is_like: bool,
    pub parent: Option<Comment>,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, data: CreateCommentData) -> Result<Comment, CommentRepositoryError>;

    async fn find_by_id(&self, comment_id: i32)
        -> Result<Option<Comment>, CommentRepositoryError>;

    /// Idempotent: liking an already-liked comment changes nothing. The like
    /// edge and the denormalized counter move in one database transaction.
    async fn add_like(&self, comment_id: i32, user_id: i32)
        -> Result<(), CommentRepositoryError>;

    /// Idempotent counterpart of `add_like`, same transactional guarantee.
    async fn remove_like(
        &self,
        comment_id: i32,
        user_id: i32,
    ) -> Result<(), CommentRepositoryError>;

    /// All comments of a news item, newest first, with the viewer's like
    /// flags resolved when a viewer is present.
    async fn list_for_news(
        &self,
        news_id: i32,
        viewer: Option<i32>,
    ) -> Result<Vec<CommentWithUser>, CommentRepositoryError>;
}
