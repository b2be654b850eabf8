use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::news::application::ports::outgoing::{CollectionRepository, NewsQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectAction {
    Collect,
    CancelCollect,
}

#[derive(Debug, Clone)]
pub struct CollectNewsRequest {
    pub news_id: i32,
    pub action: CollectAction,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("参数错误")]
pub struct CollectRequestError;

impl CollectNewsRequest {
    pub fn new(news_id: Option<i32>, action: Option<String>) -> Result<Self, CollectRequestError> {
        let news_id = news_id.ok_or(CollectRequestError)?;
        let action = match action.as_deref() {
            Some("collect") => CollectAction::Collect,
            Some("cancel_collect") => CollectAction::CancelCollect,
            _ => return Err(CollectRequestError),
        };

        Ok(Self { news_id, action })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CollectNewsError {
    #[error("News not found")]
    NewsNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICollectNewsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: i32,
        request: CollectNewsRequest,
    ) -> Result<(), CollectNewsError>;
}

pub struct CollectNewsUseCase {
    news_query: Arc<dyn NewsQuery>,
    collections: Arc<dyn CollectionRepository>,
}

impl CollectNewsUseCase {
    pub fn new(news_query: Arc<dyn NewsQuery>, collections: Arc<dyn CollectionRepository>) -> Self {
        Self {
            news_query,
            collections,
        }
    }
}

#[async_trait]
impl ICollectNewsUseCase for CollectNewsUseCase {
    async fn execute(
        &self,
        user_id: i32,
        request: CollectNewsRequest,
    ) -> Result<(), CollectNewsError> {
        self.news_query
            .find_by_id(request.news_id)
            .await
            .map_err(CollectNewsError::QueryFailed)?
            .ok_or(CollectNewsError::NewsNotFound)?;

        match request.action {
            CollectAction::Collect => self
                .collections
                .collect(user_id, request.news_id)
                .await
                .map_err(|e| CollectNewsError::RepositoryError(e.to_string()))?,

            CollectAction::CancelCollect => self
                .collections
                .cancel_collect(user_id, request.news_id)
                .await
                .map_err(|e| CollectNewsError::RepositoryError(e.to_string()))?,
        }

        info!(user_id, news_id = request.news_id, "Collection toggled");
        Ok(())
    }
}
