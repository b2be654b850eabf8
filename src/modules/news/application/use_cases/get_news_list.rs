use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::constants::{HOME_CATEGORY_ID, NEWS_LIST_MAX_COUNT};
use crate::modules::news::application::domain::views::{CategoryView, NewsBasicView};
use crate::modules::news::application::ports::outgoing::{CategoryRepository, NewsQuery};

#[derive(Debug, Clone)]
pub struct GetNewsListRequest {
    pub category_id: i32,
    pub page: u64,
    pub per_page: u64,
}

impl GetNewsListRequest {
    pub fn new(category_id: Option<i32>, page: Option<u64>, per_page: Option<u64>) -> Self {
        Self {
            category_id: category_id.unwrap_or(HOME_CATEGORY_ID),
            page: page.unwrap_or(1).max(1),
            per_page: per_page.unwrap_or(NEWS_LIST_MAX_COUNT).clamp(1, 100),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetNewsListError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsListResponse {
    pub total_page: u64,
    pub current_page: u64,
    pub news_dict_list: Vec<NewsBasicView>,
    pub categories: Vec<CategoryView>,
}

#[async_trait]
pub trait IGetNewsListUseCase: Send + Sync {
    async fn execute(&self, request: GetNewsListRequest)
        -> Result<NewsListResponse, GetNewsListError>;
}

pub struct GetNewsListUseCase {
    news_query: Arc<dyn NewsQuery>,
    categories: Arc<dyn CategoryRepository>,
}

impl GetNewsListUseCase {
    pub fn new(news_query: Arc<dyn NewsQuery>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self {
            news_query,
            categories,
        }
    }
}

#[async_trait]
impl IGetNewsListUseCase for GetNewsListUseCase {
    async fn execute(
        &self,
        request: GetNewsListRequest,
    ) -> Result<NewsListResponse, GetNewsListError> {
        let page = self
            .news_query
            .list_approved(request.category_id, request.page, request.per_page)
            .await
            .map_err(GetNewsListError::QueryFailed)?;

        let categories = self
            .categories
            .list()
            .await
            .map_err(|e| GetNewsListError::QueryFailed(e.to_string()))?;

        Ok(NewsListResponse {
            total_page: page.total_pages,
            current_page: page.current_page,
            news_dict_list: page.items.iter().map(NewsBasicView::from).collect(),
            categories: categories.iter().map(CategoryView::from).collect(),
        })
    }
}
