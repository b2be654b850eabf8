use async_trait::async_trait;

use crate::modules::news::application::domain::entities::News;

/// One page of news plus pagination facts.
#[derive(Debug, Clone)]
pub struct NewsPage {
    pub items: Vec<News>,
    pub total_pages: u64,
    pub current_page: u64,
}

#[async_trait]
pub trait NewsQuery: Send + Sync {
    async fn find_by_id(&self, news_id: i32) -> Result<Option<News>, String>;

    /// Approved news only, newest first. `category_id` equal to the home
    /// category means "all categories".
    async fn list_approved(
        &self,
        category_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<NewsPage, String>;

    /// Most-clicked approved news for the detail-page sidebar.
    async fn click_rank(&self, limit: u64) -> Result<Vec<News>, String>;

    async fn comments_count(&self, news_id: i32) -> Result<u64, String>;

    /// Moderation queue: everything not yet approved (pending or rejected),
    /// newest first, optionally filtered by a title keyword.
    async fn list_review(
        &self,
        keywords: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<NewsPage, String>;
}
