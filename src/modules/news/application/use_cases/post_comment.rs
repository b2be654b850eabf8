use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::news::application::domain::views::{
    format_time, CommentUserView, CommentView, ParentCommentView,
};
use crate::modules::news::application::ports::outgoing::{
    CommentRepository, CreateCommentData, NewsQuery,
};
use crate::modules::passport::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone)]
pub struct PostCommentRequest {
    pub news_id: i32,
    pub content: String,
    pub parent_id: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("参数错误")]
pub struct PostCommentRequestError;

impl PostCommentRequest {
    pub fn new(
        news_id: Option<i32>,
        content: Option<String>,
        parent_id: Option<i32>,
    ) -> Result<Self, PostCommentRequestError> {
        let news_id = news_id.ok_or(PostCommentRequestError)?;
        let content = match content {
            Some(c) if !c.trim().is_empty() => c,
            _ => return Err(PostCommentRequestError),
        };

        Ok(Self {
            news_id,
            content,
            parent_id,
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostCommentError {
    #[error("News not found")]
    NewsNotFound,

    #[error("Parent comment not found")]
    ParentNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IPostCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: i32,
        request: PostCommentRequest,
    ) -> Result<CommentView, PostCommentError>;
}

pub struct PostCommentUseCase {
    news_query: Arc<dyn NewsQuery>,
    comments: Arc<dyn CommentRepository>,
    users: Arc<dyn UserQuery>,
}

impl PostCommentUseCase {
    pub fn new(
        news_query: Arc<dyn NewsQuery>,
        comments: Arc<dyn CommentRepository>,
        users: Arc<dyn UserQuery>,
    ) -> Self {
        Self {
            news_query,
            comments,
            users,
        }
    }
}

#[async_trait]
impl IPostCommentUseCase for PostCommentUseCase {
    async fn execute(
        &self,
        user_id: i32,
        request: PostCommentRequest,
    ) -> Result<CommentView, PostCommentError> {
        self.news_query
            .find_by_id(request.news_id)
            .await
            .map_err(PostCommentError::QueryFailed)?
            .ok_or(PostCommentError::NewsNotFound)?;

        // A parent id must reference an existing comment; beyond existence it
        // is unvalidated (any depth is accepted, display flattens to one
        // level).
        let parent = match request.parent_id {
            Some(parent_id) => Some(
                self.comments
                    .find_by_id(parent_id)
                    .await
                    .map_err(|e| PostCommentError::QueryFailed(e.to_string()))?
                    .ok_or(PostCommentError::ParentNotFound)?,
            ),
            None => None,
        };

        let comment = self
            .comments
            .create(CreateCommentData {
                user_id,
                news_id: request.news_id,
                content: request.content,
                parent_id: request.parent_id,
            })
            .await
            .map_err(|e| PostCommentError::RepositoryError(e.to_string()))?;

        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(PostCommentError::QueryFailed)?;

        info!(user_id, news_id = comment.news_id, comment_id = comment.id, "Comment created");

        Ok(CommentView {
            id: comment.id,
            news_id: comment.news_id,
            content: comment.content.clone(),
            create_time: format_time(comment.create_time),
            like_count: comment.like_count,
            is_like: false,
            user: CommentUserView {
                id: user_id,
                nick_name: user
                    .as_ref()
                    .map(|u| u.nick_name.clone())
                    .unwrap_or_default(),
                avatar_url: user.and_then(|u| u.avatar_url),
            },
            parent: parent.as_ref().map(ParentCommentView::from),
        })
    }
}
