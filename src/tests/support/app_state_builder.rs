use actix_web::web;
use std::sync::Arc;

use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::use_cases::admin_login::AdminLoginUseCase;
use crate::modules::admin::application::use_cases::get_user_stats::GetUserStatsUseCase;
use crate::modules::admin::application::use_cases::list_users::ListUsersUseCase;
use crate::modules::admin::application::use_cases::manage_categories::{
    ListCategoriesUseCase, SaveCategoryUseCase,
};
use crate::modules::admin::application::use_cases::review_news::{
    GetReviewDetailUseCase, ListReviewNewsUseCase, ReviewNewsUseCase,
};
use crate::modules::news::application::use_cases::collect_news::ICollectNewsUseCase;
use crate::modules::news::application::use_cases::get_news_detail::IGetNewsDetailUseCase;
use crate::modules::news::application::use_cases::get_news_list::IGetNewsListUseCase;
use crate::modules::news::application::use_cases::post_comment::IPostCommentUseCase;
use crate::modules::news::application::use_cases::toggle_comment_like::IToggleCommentLikeUseCase;
use crate::modules::passport::application::use_cases::issue_image_code::IIssueImageCodeUseCase;
use crate::modules::passport::application::use_cases::login_user::ILoginUserUseCase;
use crate::modules::passport::application::use_cases::logout_user::ILogoutUseCase;
use crate::modules::passport::application::use_cases::register_user::IRegisterUserUseCase;
use crate::modules::passport::application::use_cases::send_sms_code::ISendSmsCodeUseCase;
use crate::modules::profile::application::use_cases::fetch_profile::IFetchProfileUseCase;
use crate::modules::profile::application::use_cases::list_collection::IListCollectionUseCase;
use crate::modules::profile::application::use_cases::update_base_info::IUpdateBaseInfoUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a benign stub; tests swap in
/// the one double they actually exercise.
pub struct TestAppStateBuilder {
    issue_image_code: Arc<dyn IIssueImageCodeUseCase + Send + Sync>,
    send_sms_code: Arc<dyn ISendSmsCodeUseCase + Send + Sync>,
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    logout_user: Arc<dyn ILogoutUseCase + Send + Sync>,
    get_news_list: Arc<dyn IGetNewsListUseCase + Send + Sync>,
    get_news_detail: Arc<dyn IGetNewsDetailUseCase + Send + Sync>,
    collect_news: Arc<dyn ICollectNewsUseCase + Send + Sync>,
    post_comment: Arc<dyn IPostCommentUseCase + Send + Sync>,
    toggle_comment_like: Arc<dyn IToggleCommentLikeUseCase + Send + Sync>,
    fetch_profile: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    update_base_info: Arc<dyn IUpdateBaseInfoUseCase + Send + Sync>,
    list_collection: Arc<dyn IListCollectionUseCase + Send + Sync>,
    admin_login: Arc<dyn AdminLoginUseCase + Send + Sync>,
    admin_user_stats: Arc<dyn GetUserStatsUseCase + Send + Sync>,
    admin_user_list: Arc<dyn ListUsersUseCase + Send + Sync>,
    admin_review_list: Arc<dyn ListReviewNewsUseCase + Send + Sync>,
    admin_review_detail: Arc<dyn GetReviewDetailUseCase + Send + Sync>,
    admin_review_action: Arc<dyn ReviewNewsUseCase + Send + Sync>,
    admin_category_list: Arc<dyn ListCategoriesUseCase + Send + Sync>,
    admin_save_category: Arc<dyn SaveCategoryUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            issue_image_code: Arc::new(StubIssueImageCodeUseCase),
            send_sms_code: Arc::new(StubSendSmsCodeUseCase),
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            logout_user: Arc::new(StubLogoutUseCase),
            get_news_list: Arc::new(StubGetNewsListUseCase),
            get_news_detail: Arc::new(StubGetNewsDetailUseCase),
            collect_news: Arc::new(StubCollectNewsUseCase),
            post_comment: Arc::new(StubPostCommentUseCase),
            toggle_comment_like: Arc::new(StubToggleCommentLikeUseCase),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
            update_base_info: Arc::new(StubUpdateBaseInfoUseCase),
            list_collection: Arc::new(StubListCollectionUseCase),
            admin_login: Arc::new(StubAdminLoginUseCase),
            admin_user_stats: Arc::new(StubGetUserStatsUseCase),
            admin_user_list: Arc::new(StubListUsersUseCase),
            admin_review_list: Arc::new(StubListReviewNewsUseCase),
            admin_review_detail: Arc::new(StubGetReviewDetailUseCase),
            admin_review_action: Arc::new(StubReviewNewsUseCase),
            admin_category_list: Arc::new(StubListCategoriesUseCase),
            admin_save_category: Arc::new(StubSaveCategoryUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_issue_image_code(
        mut self,
        uc: impl IIssueImageCodeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.issue_image_code = Arc::new(uc);
        self
    }

    pub fn with_send_sms_code(
        mut self,
        uc: impl ISendSmsCodeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.send_sms_code = Arc::new(uc);
        self
    }

    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    pub fn with_get_news_list(
        mut self,
        uc: impl IGetNewsListUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_news_list = Arc::new(uc);
        self
    }

    pub fn with_get_news_detail(
        mut self,
        uc: impl IGetNewsDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_news_detail = Arc::new(uc);
        self
    }

    pub fn with_collect_news(
        mut self,
        uc: impl ICollectNewsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.collect_news = Arc::new(uc);
        self
    }

    pub fn with_post_comment(
        mut self,
        uc: impl IPostCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post_comment = Arc::new(uc);
        self
    }

    pub fn with_toggle_comment_like(
        mut self,
        uc: impl IToggleCommentLikeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.toggle_comment_like = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl IFetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_base_info(
        mut self,
        uc: impl IUpdateBaseInfoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_base_info = Arc::new(uc);
        self
    }

    pub fn with_list_collection(
        mut self,
        uc: impl IListCollectionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_collection = Arc::new(uc);
        self
    }

    pub fn with_admin_login(mut self, uc: impl AdminLoginUseCase + Send + Sync + 'static) -> Self {
        self.admin_login = Arc::new(uc);
        self
    }

    pub fn with_admin_user_stats(
        mut self,
        uc: impl GetUserStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin_user_stats = Arc::new(uc);
        self
    }

    pub fn with_admin_user_list(
        mut self,
        uc: impl ListUsersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin_user_list = Arc::new(uc);
        self
    }

    pub fn with_admin_review_list(
        mut self,
        uc: impl ListReviewNewsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin_review_list = Arc::new(uc);
        self
    }

    pub fn with_admin_review_detail(
        mut self,
        uc: impl GetReviewDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin_review_detail = Arc::new(uc);
        self
    }

    pub fn with_admin_review_action(
        mut self,
        uc: impl ReviewNewsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin_review_action = Arc::new(uc);
        self
    }

    pub fn with_admin_category_list(
        mut self,
        uc: impl ListCategoriesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin_category_list = Arc::new(uc);
        self
    }

    pub fn with_admin_save_category(
        mut self,
        uc: impl SaveCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin_save_category = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            issue_image_code_use_case: self.issue_image_code,
            send_sms_code_use_case: self.send_sms_code,
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            logout_user_use_case: self.logout_user,
            get_news_list_use_case: self.get_news_list,
            get_news_detail_use_case: self.get_news_detail,
            collect_news_use_case: self.collect_news,
            post_comment_use_case: self.post_comment,
            toggle_comment_like_use_case: self.toggle_comment_like,
            fetch_profile_use_case: self.fetch_profile,
            update_base_info_use_case: self.update_base_info,
            list_collection_use_case: self.list_collection,
            admin: AdminUseCases {
                login: self.admin_login,
                user_stats: self.admin_user_stats,
                user_list: self.admin_user_list,
                review_list: self.admin_review_list,
                review_detail: self.admin_review_detail,
                review_action: self.admin_review_action,
                category_list: self.admin_category_list,
                save_category: self.admin_save_category,
            },
        })
    }
}
