use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::constants::CLICK_RANK_MAX_NEWS;
use crate::modules::news::application::domain::entities::News;
use crate::modules::news::application::domain::views::{
    format_time, AuthorView, CategoryView, CommentUserView, CommentView, NewsBasicView,
    NewsDetailView, ParentCommentView,
};
use crate::modules::news::application::ports::outgoing::{
    CategoryRepository, CollectionRepository, CommentRepository, FollowQuery, NewsQuery,
    NewsRepository,
};
use crate::modules::passport::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetNewsDetailError {
    #[error("News not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsDetailResponse {
    pub news: NewsDetailView,
    pub click_rank_list: Vec<NewsBasicView>,
    pub is_collected: bool,
    pub is_followed: bool,
    pub comments: Vec<CommentView>,
}

#[async_trait]
pub trait IGetNewsDetailUseCase: Send + Sync {
    async fn execute(
        &self,
        news_id: i32,
        viewer: Option<i32>,
    ) -> Result<NewsDetailResponse, GetNewsDetailError>;
}

pub struct GetNewsDetailUseCase {
    news_query: Arc<dyn NewsQuery>,
    news_repository: Arc<dyn NewsRepository>,
    categories: Arc<dyn CategoryRepository>,
    comments: Arc<dyn CommentRepository>,
    collections: Arc<dyn CollectionRepository>,
    follows: Arc<dyn FollowQuery>,
    users: Arc<dyn UserQuery>,
}

impl GetNewsDetailUseCase {
    pub fn new(
        news_query: Arc<dyn NewsQuery>,
        news_repository: Arc<dyn NewsRepository>,
        categories: Arc<dyn CategoryRepository>,
        comments: Arc<dyn CommentRepository>,
        collections: Arc<dyn CollectionRepository>,
        follows: Arc<dyn FollowQuery>,
        users: Arc<dyn UserQuery>,
    ) -> Self {
        Self {
            news_query,
            news_repository,
            categories,
            comments,
            collections,
            follows,
            users,
        }
    }

    async fn author_view(&self, news: &News) -> Option<AuthorView> {
        let author_id = news.user_id?;
        let author = match self.users.find_by_id(author_id).await {
            Ok(Some(author)) => author,
            Ok(None) => return None,
            Err(e) => {
                warn!(author_id, error = %e, "Author lookup failed");
                return None;
            }
        };

        let followers_count = self
            .follows
            .follower_count(author_id)
            .await
            .unwrap_or_default();
        let news_count = self
            .follows
            .authored_news_count(author_id)
            .await
            .unwrap_or_default();

        Some(AuthorView {
            id: author.id,
            nick_name: author.nick_name,
            avatar_url: author.avatar_url,
            signature: author.signature.unwrap_or_default(),
            gender: author.gender.as_str().to_string(),
            followers_count,
            news_count,
        })
    }
}

#[async_trait]
impl IGetNewsDetailUseCase for GetNewsDetailUseCase {
    async fn execute(
        &self,
        news_id: i32,
        viewer: Option<i32>,
    ) -> Result<NewsDetailResponse, GetNewsDetailError> {
        let news = self
            .news_query
            .find_by_id(news_id)
            .await
            .map_err(GetNewsDetailError::QueryFailed)?
            .ok_or(GetNewsDetailError::NotFound)?;

        // Every view counts as a click. A failed bump must not break the page.
        if let Err(e) = self.news_repository.increment_clicks(news_id).await {
            warn!(news_id, error = %e, "Click increment failed");
        }

        let click_rank = self
            .news_query
            .click_rank(CLICK_RANK_MAX_NEWS)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "Click rank query failed");
                Vec::new()
            });

        let comments_count = self
            .news_query
            .comments_count(news_id)
            .await
            .map_err(GetNewsDetailError::QueryFailed)?;

        let category = self
            .categories
            .list()
            .await
            .ok()
            .and_then(|cats| cats.into_iter().find(|c| c.id == news.category_id))
            .map(|c| CategoryView::from(&c));

        let author = self.author_view(&news).await;

        let (is_collected, is_followed) = match viewer {
            Some(viewer_id) => {
                let collected = self
                    .collections
                    .is_collected(viewer_id, news_id)
                    .await
                    .map_err(|e| GetNewsDetailError::QueryFailed(e.to_string()))?;

                let followed = match news.user_id {
                    Some(author_id) => self
                        .follows
                        .is_following(viewer_id, author_id)
                        .await
                        .map_err(GetNewsDetailError::QueryFailed)?,
                    None => false,
                };

                (collected, followed)
            }
            None => (false, false),
        };

        let comments = self
            .comments
            .list_for_news(news_id, viewer)
            .await
            .map_err(|e| GetNewsDetailError::QueryFailed(e.to_string()))?
            .into_iter()
            .map(|c| CommentView {
                id: c.comment.id,
                news_id: c.comment.news_id,
                content: c.comment.content.clone(),
                create_time: format_time(c.comment.create_time),
                like_count: c.comment.like_count,
                is_like: c.is_like,
                user: CommentUserView {
                    id: c.user_id,
                    nick_name: c.user_nick,
                    avatar_url: c.user_avatar,
                },
                parent: c.parent.as_ref().map(ParentCommentView::from),
            })
            .collect();

        // The click bump above is not reflected in `news` (it was read
        // first); mirror it so the page shows the count including this view.
        let detail = NewsDetailView {
            id: news.id,
            title: news.title.clone(),
            source: news.source.clone(),
            digest: news.digest.clone(),
            content: news.content.clone(),
            clicks: news.clicks + 1,
            create_time: format_time(news.create_time),
            index_image_url: news.index_image_url.clone(),
            comments_count,
            category,
            author,
        };

        Ok(NewsDetailResponse {
            news: detail,
            click_rank_list: click_rank.iter().map(NewsBasicView::from).collect(),
            is_collected,
            is_followed,
            comments,
        })
    }
}
