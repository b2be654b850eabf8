use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::constants::ADMIN_NEWS_PAGE_MAX_COUNT;
use crate::modules::news::application::domain::entities::NewsStatus;
use crate::modules::news::application::domain::views::{
    format_time, NewsReviewView,
};
use crate::modules::news::application::ports::outgoing::{NewsQuery, NewsRepository};

// ========================= Review list =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewListError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewListResponse {
    pub news_list: Vec<NewsReviewView>,
    pub total_page: u64,
    pub current_page: u64,
}

#[async_trait]
pub trait ListReviewNewsUseCase: Send + Sync {
    async fn execute(
        &self,
        keywords: Option<String>,
        page: u64,
    ) -> Result<ReviewListResponse, ReviewListError>;
}

pub struct ListReviewNewsService {
    news_query: Arc<dyn NewsQuery>,
}

impl ListReviewNewsService {
    pub fn new(news_query: Arc<dyn NewsQuery>) -> Self {
        Self { news_query }
    }
}

#[async_trait]
impl ListReviewNewsUseCase for ListReviewNewsService {
    async fn execute(
        &self,
        keywords: Option<String>,
        page: u64,
    ) -> Result<ReviewListResponse, ReviewListError> {
        let page = page.max(1);

        let result = self
            .news_query
            .list_review(keywords, page, ADMIN_NEWS_PAGE_MAX_COUNT)
            .await
            .map_err(ReviewListError::QueryFailed)?;

        Ok(ReviewListResponse {
            news_list: result.items.iter().map(NewsReviewView::from).collect(),
            total_page: result.total_pages,
            current_page: result.current_page,
        })
    }
}

// ========================= Review detail =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewDetailError {
    #[error("News not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Full projection for the moderation screen, including the body.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewDetailView {
    pub id: i32,
    pub title: String,
    pub source: String,
    pub digest: String,
    pub content: String,
    pub create_time: String,
    pub index_image_url: Option<String>,
    pub status: i32,
    pub reason: String,
}

#[async_trait]
pub trait GetReviewDetailUseCase: Send + Sync {
    async fn execute(&self, news_id: i32) -> Result<ReviewDetailView, ReviewDetailError>;
}

pub struct GetReviewDetailService {
    news_query: Arc<dyn NewsQuery>,
}

impl GetReviewDetailService {
    pub fn new(news_query: Arc<dyn NewsQuery>) -> Self {
        Self { news_query }
    }
}

#[async_trait]
impl GetReviewDetailUseCase for GetReviewDetailService {
    async fn execute(&self, news_id: i32) -> Result<ReviewDetailView, ReviewDetailError> {
        let news = self
            .news_query
            .find_by_id(news_id)
            .await
            .map_err(ReviewDetailError::QueryFailed)?
            .ok_or(ReviewDetailError::NotFound)?;

        Ok(ReviewDetailView {
            id: news.id,
            title: news.title,
            source: news.source,
            digest: news.digest,
            content: news.content,
            create_time: format_time(news.create_time),
            index_image_url: news.index_image_url,
            status: news.status.as_i32(),
            reason: news.reason.unwrap_or_default(),
        })
    }
}

// ========================= Review action =========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Accept,
    Reject,
}

#[derive(Debug, Clone)]
pub struct ReviewActionRequest {
    pub news_id: i32,
    pub action: ReviewAction,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("参数错误")]
pub struct ReviewActionRequestError;

impl ReviewActionRequest {
    pub fn new(
        news_id: Option<i32>,
        action: Option<String>,
        reason: Option<String>,
    ) -> Result<Self, ReviewActionRequestError> {
        let news_id = news_id.ok_or(ReviewActionRequestError)?;
        let action = match action.as_deref() {
            Some("accept") => ReviewAction::Accept,
            Some("reject") => ReviewAction::Reject,
            _ => return Err(ReviewActionRequestError),
        };

        Ok(Self {
            news_id,
            action,
            reason,
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewActionError {
    #[error("News not found or not pending")]
    NotFound,

    #[error("A rejection needs a reason")]
    MissingReason,

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReviewNewsUseCase: Send + Sync {
    async fn execute(&self, request: ReviewActionRequest) -> Result<(), ReviewActionError>;
}

pub struct ReviewNewsService {
    news_query: Arc<dyn NewsQuery>,
    news_repository: Arc<dyn NewsRepository>,
}

impl ReviewNewsService {
    pub fn new(news_query: Arc<dyn NewsQuery>, news_repository: Arc<dyn NewsRepository>) -> Self {
        Self {
            news_query,
            news_repository,
        }
    }
}

#[async_trait]
impl ReviewNewsUseCase for ReviewNewsService {
    async fn execute(&self, request: ReviewActionRequest) -> Result<(), ReviewActionError> {
        // Only pending items can transition; approved/rejected stay put
        // unless re-submitted.
        let news = self
            .news_query
            .find_by_id(request.news_id)
            .await
            .map_err(ReviewActionError::QueryFailed)?
            .filter(|n| n.status == NewsStatus::Pending)
            .ok_or(ReviewActionError::NotFound)?;

        let (status, reason) = match request.action {
            ReviewAction::Accept => (NewsStatus::Approved, None),
            ReviewAction::Reject => {
                // Checked before any write: a reasonless rejection leaves the
                // status untouched.
                let reason = request
                    .reason
                    .as_deref()
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .ok_or(ReviewActionError::MissingReason)?
                    .to_string();
                (NewsStatus::Rejected, Some(reason))
            }
        };

        self.news_repository
            .set_status(news.id, status, reason)
            .await
            .map_err(|e| ReviewActionError::RepositoryError(e.to_string()))?;

        info!(news_id = news.id, status = status.as_i32(), "News reviewed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::news::application::domain::entities::News;
    use crate::modules::news::application::ports::outgoing::{NewsPage, NewsRepositoryError};
    use chrono::Utc;
    use std::sync::Mutex;

    fn pending_news(id: i32) -> News {
        News {
            id,
            title: "待审核".into(),
            source: "s".into(),
            digest: "d".into(),
            content: "c".into(),
            clicks: 0,
            index_image_url: None,
            category_id: 2,
            user_id: Some(3),
            status: NewsStatus::Pending,
            reason: None,
            create_time: Utc::now(),
        }
    }

    struct StubQuery {
        news: Option<News>,
    }

    #[async_trait]
    impl NewsQuery for StubQuery {
        async fn find_by_id(&self, _: i32) -> Result<Option<News>, String> {
            Ok(self.news.clone())
        }

        async fn list_approved(&self, _: i32, _: u64, _: u64) -> Result<NewsPage, String> {
            unimplemented!("Not used in review tests")
        }

        async fn click_rank(&self, _: u64) -> Result<Vec<News>, String> {
            unimplemented!("Not used in review tests")
        }

        async fn comments_count(&self, _: i32) -> Result<u64, String> {
            unimplemented!("Not used in review tests")
        }

        async fn list_review(
            &self,
            _: Option<String>,
            page: u64,
            _: u64,
        ) -> Result<NewsPage, String> {
            Ok(NewsPage {
                items: vec![pending_news(5)],
                total_pages: 1,
                current_page: page,
            })
        }
    }

    #[derive(Default)]
    struct StubRepo {
        transitions: Mutex<Vec<(i32, i32, Option<String>)>>,
    }

    #[async_trait]
    impl NewsRepository for StubRepo {
        async fn increment_clicks(&self, _: i32) -> Result<(), NewsRepositoryError> {
            unimplemented!("Not used in review tests")
        }

        async fn set_status(
            &self,
            news_id: i32,
            status: NewsStatus,
            reason: Option<String>,
        ) -> Result<(), NewsRepositoryError> {
            self.transitions
                .lock()
                .unwrap()
                .push((news_id, status.as_i32(), reason));
            Ok(())
        }
    }

    #[test]
    fn action_request_validation() {
        assert!(ReviewActionRequest::new(Some(5), Some("accept".into()), None).is_ok());
        assert!(ReviewActionRequest::new(Some(5), Some("publish".into()), None).is_err());
        assert!(ReviewActionRequest::new(None, Some("accept".into()), None).is_err());
    }

    #[tokio::test]
    async fn accept_moves_pending_to_approved() {
        let repo = Arc::new(StubRepo::default());
        let uc = ReviewNewsService::new(
            Arc::new(StubQuery {
                news: Some(pending_news(5)),
            }),
            repo.clone(),
        );

        uc.execute(ReviewActionRequest::new(Some(5), Some("accept".into()), None).unwrap())
            .await
            .unwrap();

        let transitions = repo.transitions.lock().unwrap();
        assert_eq!(transitions.as_slice(), &[(5, 0, None)]);
    }

    #[tokio::test]
    async fn reject_requires_a_reason_and_stays_pending_without_one() {
        let repo = Arc::new(StubRepo::default());
        let uc = ReviewNewsService::new(
            Arc::new(StubQuery {
                news: Some(pending_news(5)),
            }),
            repo.clone(),
        );

        let result = uc
            .execute(ReviewActionRequest::new(Some(5), Some("reject".into()), None).unwrap())
            .await;
        assert!(matches!(result, Err(ReviewActionError::MissingReason)));

        let result = uc
            .execute(
                ReviewActionRequest::new(Some(5), Some("reject".into()), Some("   ".into()))
                    .unwrap(),
            )
            .await;
        assert!(matches!(result, Err(ReviewActionError::MissingReason)));

        // No transition happened.
        assert!(repo.transitions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn reject_with_reason_moves_to_rejected() {
        let repo = Arc::new(StubRepo::default());
        let uc = ReviewNewsService::new(
            Arc::new(StubQuery {
                news: Some(pending_news(5)),
            }),
            repo.clone(),
        );

        uc.execute(
            ReviewActionRequest::new(Some(5), Some("reject".into()), Some("内容不实".into()))
                .unwrap(),
        )
        .await
        .unwrap();

        let transitions = repo.transitions.lock().unwrap();
        assert_eq!(
            transitions.as_slice(),
            &[(5, -1, Some("内容不实".to_string()))]
        );
    }

    #[tokio::test]
    async fn already_reviewed_news_cannot_transition() {
        let mut news = pending_news(5);
        news.status = NewsStatus::Approved;

        let repo = Arc::new(StubRepo::default());
        let uc = ReviewNewsService::new(Arc::new(StubQuery { news: Some(news) }), repo.clone());

        let result = uc
            .execute(ReviewActionRequest::new(Some(5), Some("accept".into()), None).unwrap())
            .await;
        assert!(matches!(result, Err(ReviewActionError::NotFound)));
        assert!(repo.transitions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn review_list_pages() {
        let uc = ListReviewNewsService::new(Arc::new(StubQuery { news: None }));

        let response = uc.execute(None, 1).await.unwrap();
        assert_eq!(response.news_list.len(), 1);
        assert_eq!(response.news_list[0].status, 1);
    }
}
