use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::constants::USER_COLLECTION_MAX_NEWS;
use crate::modules::news::application::domain::views::NewsBasicView;
use crate::modules::news::application::ports::outgoing::CollectionRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCollectionError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionListResponse {
    pub total_page: u64,
    pub current_page: u64,
    pub collections: Vec<NewsBasicView>,
}

#[async_trait]
pub trait IListCollectionUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: i32,
        page: u64,
    ) -> Result<CollectionListResponse, ListCollectionError>;
}

pub struct ListCollectionUseCase {
    collections: Arc<dyn CollectionRepository>,
}

impl ListCollectionUseCase {
    pub fn new(collections: Arc<dyn CollectionRepository>) -> Self {
        Self { collections }
    }
}

#[async_trait]
impl IListCollectionUseCase for ListCollectionUseCase {
    async fn execute(
        &self,
        user_id: i32,
        page: u64,
    ) -> Result<CollectionListResponse, ListCollectionError> {
        let page = page.max(1);
        let result = self
            .collections
            .list_collected(user_id, page, USER_COLLECTION_MAX_NEWS)
            .await
            .map_err(|e| ListCollectionError::QueryFailed(e.to_string()))?;

        Ok(CollectionListResponse {
            total_page: result.total_pages,
            current_page: result.current_page,
            collections: result.items.iter().map(NewsBasicView::from).collect(),
        })
    }
}
