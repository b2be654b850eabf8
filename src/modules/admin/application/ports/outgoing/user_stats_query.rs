use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// One row of the admin user list.
#[derive(Debug, Clone)]
pub struct AdminUserRow {
    pub id: i32,
    pub nick_name: String,
    pub mobile: String,
    pub register: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AdminUserPage {
    pub items: Vec<AdminUserRow>,
    pub total_pages: u64,
    pub current_page: u64,
}

/// Analytics over the (non-admin) user base.
#[async_trait]
pub trait UserStatsQuery: Send + Sync {
    async fn total_user_count(&self) -> Result<u64, String>;

    async fn count_registered_since(&self, since: DateTime<Utc>) -> Result<u64, String>;

    /// Users whose last login falls in `[begin, end)`.
    async fn active_count_between(
        &self,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, String>;

    async fn page_users(&self, page: u64, per_page: u64) -> Result<AdminUserPage, String>;
}
