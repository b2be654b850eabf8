use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::news::application::ports::outgoing::CommentRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    Add,
    Remove,
}

#[derive(Debug, Clone)]
pub struct CommentLikeRequest {
    pub comment_id: i32,
    pub action: LikeAction,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("参数错误")]
pub struct CommentLikeRequestError;

impl CommentLikeRequest {
    pub fn new(
        comment_id: Option<i32>,
        action: Option<String>,
    ) -> Result<Self, CommentLikeRequestError> {
        let comment_id = comment_id.ok_or(CommentLikeRequestError)?;
        let action = match action.as_deref() {
            Some("add") => LikeAction::Add,
            Some("remove") => LikeAction::Remove,
            _ => return Err(CommentLikeRequestError),
        };

        Ok(Self { comment_id, action })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentLikeError {
    #[error("Comment not found")]
    CommentNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IToggleCommentLikeUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: i32,
        request: CommentLikeRequest,
    ) -> Result<(), CommentLikeError>;
}

pub struct ToggleCommentLikeUseCase {
    comments: Arc<dyn CommentRepository>,
}

impl ToggleCommentLikeUseCase {
    pub fn new(comments: Arc<dyn CommentRepository>) -> Self {
        Self { comments }
    }
}

#[async_trait]
impl IToggleCommentLikeUseCase for ToggleCommentLikeUseCase {
    async fn execute(
        &self,
        user_id: i32,
        request: CommentLikeRequest,
    ) -> Result<(), CommentLikeError> {
        self.comments
            .find_by_id(request.comment_id)
            .await
            .map_err(|e| CommentLikeError::RepositoryError(e.to_string()))?
            .ok_or(CommentLikeError::CommentNotFound)?;

        // The edge write and the counter update commit together inside the
        // repository; there is no window where only one of them is visible.
        match request.action {
            LikeAction::Add => self
                .comments
                .add_like(request.comment_id, user_id)
                .await
                .map_err(|e| CommentLikeError::RepositoryError(e.to_string()))?,

            LikeAction::Remove => self
                .comments
                .remove_like(request.comment_id, user_id)
                .await
                .map_err(|e| CommentLikeError::RepositoryError(e.to_string()))?,
        }

        info!(user_id, comment_id = request.comment_id, "Comment like toggled");
        Ok(())
    }
}
