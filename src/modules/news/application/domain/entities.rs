use chrono::{DateTime, Utc};

/// Moderation state of a news item.
///
/// The numeric values are part of the client contract:
/// 0 approved, 1 pending, -1 rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsStatus {
    Approved,
    Pending,
    Rejected,
}

impl NewsStatus {
    pub fn as_i32(self) -> i32 {
        match self {
            NewsStatus::Approved => 0,
            NewsStatus::Pending => 1,
            NewsStatus::Rejected => -1,
        }
    }

    pub fn parse(value: i32) -> Option<Self> {
        match value {
            0 => Some(NewsStatus::Approved),
            1 => Some(NewsStatus::Pending),
            -1 => Some(NewsStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub source: String,
    pub digest: String,
    pub content: String,
    pub clicks: i32,
    pub index_image_url: Option<String>,
    pub category_id: i32,
    pub user_id: Option<i32>,
    pub status: NewsStatus,
    pub reason: Option<String>,
    pub create_time: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i32,
    pub user_id: i32,
    pub news_id: i32,
    pub content: String,
    pub parent_id: Option<i32>,
    pub like_count: i32,
    pub create_time: DateTime<Utc>,
}
