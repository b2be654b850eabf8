use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::constants::ADMIN_USER_PAGE_MAX_COUNT;
use crate::modules::admin::application::ports::outgoing::UserStatsQuery;
use crate::modules::news::application::domain::views::format_time;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminUserView {
    pub id: i32,
    pub nick_name: String,
    pub mobile: String,
    pub register: String,
    pub last_login: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserListResponse {
    pub users: Vec<AdminUserView>,
    pub total_page: u64,
    pub current_page: u64,
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, page: u64) -> Result<UserListResponse, ListUsersError>;
}

pub struct ListUsersService {
    stats: Arc<dyn UserStatsQuery>,
}

impl ListUsersService {
    pub fn new(stats: Arc<dyn UserStatsQuery>) -> Self {
        Self { stats }
    }
}

#[async_trait]
impl ListUsersUseCase for ListUsersService {
    async fn execute(&self, page: u64) -> Result<UserListResponse, ListUsersError> {
        let page = page.max(1);

        let result = self
            .stats
            .page_users(page, ADMIN_USER_PAGE_MAX_COUNT)
            .await
            .map_err(ListUsersError::QueryFailed)?;

        Ok(UserListResponse {
            users: result
                .items
                .into_iter()
                .map(|row| AdminUserView {
                    id: row.id,
                    nick_name: row.nick_name,
                    mobile: row.mobile,
                    register: format_time(row.register),
                    last_login: format_time(row.last_login),
                })
                .collect(),
            total_page: result.total_pages,
            current_page: result.current_page,
        })
    }
}
