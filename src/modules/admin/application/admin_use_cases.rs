use std::sync::Arc;

use super::use_cases::admin_login::AdminLoginUseCase;
use super::use_cases::get_user_stats::GetUserStatsUseCase;
use super::use_cases::list_users::ListUsersUseCase;
use super::use_cases::manage_categories::{ListCategoriesUseCase, SaveCategoryUseCase};
use super::use_cases::review_news::{
    GetReviewDetailUseCase, ListReviewNewsUseCase, ReviewNewsUseCase,
};

/// The console's use cases, bundled so `AppState` carries one handle.
#[derive(Clone)]
pub struct AdminUseCases {
    pub login: Arc<dyn AdminLoginUseCase + Send + Sync>,
    pub user_stats: Arc<dyn GetUserStatsUseCase + Send + Sync>,
    pub user_list: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub review_list: Arc<dyn ListReviewNewsUseCase + Send + Sync>,
    pub review_detail: Arc<dyn GetReviewDetailUseCase + Send + Sync>,
    pub review_action: Arc<dyn ReviewNewsUseCase + Send + Sync>,
    pub category_list: Arc<dyn ListCategoriesUseCase + Send + Sync>,
    pub save_category: Arc<dyn SaveCategoryUseCase + Send + Sync>,
}
