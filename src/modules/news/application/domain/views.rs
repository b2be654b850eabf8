//! Serializable projections of the domain entities, shaped the way the
//! clients already consume them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::entities::{Category, Comment, News};

pub fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub id: i32,
    pub name: String,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

/// List-item projection: no content body.
#[derive(Debug, Clone, Serialize)]
pub struct NewsBasicView {
    pub id: i32,
    pub title: String,
    pub source: String,
    pub digest: String,
    pub create_time: String,
    pub index_image_url: Option<String>,
    pub clicks: i32,
}

impl From<&News> for NewsBasicView {
    fn from(news: &News) -> Self {
        Self {
            id: news.id,
            title: news.title.clone(),
            source: news.source.clone(),
            digest: news.digest.clone(),
            create_time: format_time(news.create_time),
            index_image_url: news.index_image_url.clone(),
            clicks: news.clicks,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorView {
    pub id: i32,
    pub nick_name: String,
    pub avatar_url: Option<String>,
    pub signature: String,
    pub gender: String,
    pub followers_count: u64,
    pub news_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsDetailView {
    pub id: i32,
    pub title: String,
    pub source: String,
    pub digest: String,
    pub content: String,
    pub clicks: i32,
    pub create_time: String,
    pub index_image_url: Option<String>,
    pub comments_count: u64,
    pub category: Option<CategoryView>,
    pub author: Option<AuthorView>,
}

/// Moderation-list projection.
#[derive(Debug, Clone, Serialize)]
pub struct NewsReviewView {
    pub id: i32,
    pub title: String,
    pub create_time: String,
    pub status: i32,
    pub reason: String,
}

impl From<&News> for NewsReviewView {
    fn from(news: &News) -> Self {
        Self {
            id: news.id,
            title: news.title.clone(),
            create_time: format_time(news.create_time),
            status: news.status.as_i32(),
            reason: news.reason.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentUserView {
    pub id: i32,
    pub nick_name: String,
    pub avatar_url: Option<String>,
}

/// Replies render one level deep: a parent appears inline as a plain
/// projection without its own parent.
#[derive(Debug, Clone, Serialize)]
pub struct ParentCommentView {
    pub id: i32,
    pub content: String,
    pub create_time: String,
}

impl From<&Comment> for ParentCommentView {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content.clone(),
            create_time: format_time(comment.create_time),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
    pub id: i32,
    pub news_id: i32,
    pub content: String,
    pub create_time: String,
    pub like_count: i32,
    pub is_like: bool,
    pub user: CommentUserView,
    pub parent: Option<ParentCommentView>,
}
