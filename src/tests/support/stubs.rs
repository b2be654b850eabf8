//! Benign default doubles for every `AppState` entry, plus the session-guard
//! helper the protected-route tests share.

use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::modules::admin::application::use_cases::admin_login::{
    AdminLoginError, AdminLoginRequest, AdminLoginResponse, AdminLoginUseCase,
};
use crate::modules::admin::application::use_cases::get_user_stats::{
    GetUserStatsError, GetUserStatsUseCase, UserStatsResponse,
};
use crate::modules::admin::application::use_cases::list_users::{
    ListUsersError, ListUsersUseCase, UserListResponse,
};
use crate::modules::admin::application::use_cases::manage_categories::{
    CategoryListError, CategoryListResponse, ListCategoriesUseCase, SaveCategoryError,
    SaveCategoryRequest, SaveCategoryUseCase,
};
use crate::modules::admin::application::use_cases::review_news::{
    GetReviewDetailUseCase, ListReviewNewsUseCase, ReviewActionError, ReviewActionRequest,
    ReviewDetailError, ReviewDetailView, ReviewListError, ReviewListResponse, ReviewNewsUseCase,
};
use crate::modules::news::application::domain::views::{CommentUserView, CommentView};
use crate::modules::news::application::use_cases::collect_news::{
    CollectNewsError, CollectNewsRequest, ICollectNewsUseCase,
};
use crate::modules::news::application::use_cases::get_news_detail::{
    GetNewsDetailError, IGetNewsDetailUseCase, NewsDetailResponse,
};
use crate::modules::news::application::use_cases::get_news_list::{
    GetNewsListError, GetNewsListRequest, IGetNewsListUseCase, NewsListResponse,
};
use crate::modules::news::application::use_cases::post_comment::{
    IPostCommentUseCase, PostCommentError, PostCommentRequest,
};
use crate::modules::news::application::use_cases::toggle_comment_like::{
    CommentLikeError, CommentLikeRequest, IToggleCommentLikeUseCase,
};
use crate::modules::passport::adapter::incoming::web::extractors::SessionGuard;
use crate::modules::passport::application::domain::entities::SessionUserData;
use crate::modules::passport::application::ports::outgoing::{
    SessionBlacklist, SessionBlacklistError, SessionClaims, SessionTokenProvider, TokenError,
};
use crate::modules::passport::application::use_cases::issue_image_code::{
    IIssueImageCodeUseCase, IssueImageCodeError,
};
use crate::modules::passport::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginResponse,
};
use crate::modules::passport::application::use_cases::logout_user::{ILogoutUseCase, LogoutError};
use crate::modules::passport::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterError, RegisterRequest, RegisterResponse, SessionUserInfo,
};
use crate::modules::passport::application::use_cases::send_sms_code::{
    ISendSmsCodeUseCase, SendSmsCodeError, SendSmsCodeRequest,
};
use crate::modules::profile::application::use_cases::fetch_profile::{
    FetchProfileError, IFetchProfileUseCase, UserInfoView,
};
use crate::modules::profile::application::use_cases::list_collection::{
    CollectionListResponse, IListCollectionUseCase, ListCollectionError,
};
use crate::modules::profile::application::use_cases::update_base_info::{
    IUpdateBaseInfoUseCase, UpdateBaseInfoError, UpdateBaseInfoRequest,
};

// ============================================================
// Session guard doubles
// ============================================================

/// Accepts any bearer token and resolves it to a fixed principal.
pub struct StubSessionTokens {
    pub user_id: i32,
    pub is_admin: bool,
}

impl SessionTokenProvider for StubSessionTokens {
    fn generate_session_token(&self, _: &SessionUserData) -> Result<String, TokenError> {
        Ok("stub.session.token".into())
    }

    fn verify_session_token(&self, _: &str) -> Result<SessionClaims, TokenError> {
        Ok(SessionClaims {
            sub: self.user_id,
            mobile: "13800000000".into(),
            nick_name: "testuser".into(),
            is_admin: self.is_admin,
            exp: Utc::now().timestamp() + 3600,
            iat: Utc::now().timestamp(),
            nbf: Utc::now().timestamp(),
            token_type: "session".into(),
        })
    }
}

pub struct NoopBlacklist;

#[async_trait]
impl SessionBlacklist for NoopBlacklist {
    async fn revoke(
        &self,
        _: &str,
        _: chrono::DateTime<Utc>,
    ) -> Result<(), SessionBlacklistError> {
        Ok(())
    }

    async fn is_revoked(&self, _: &str) -> Result<bool, SessionBlacklistError> {
        Ok(false)
    }
}

/// Guard data for route tests: any bearer token authenticates as the given
/// principal; no token still fails extraction.
pub fn session_guard_data(user_id: i32, is_admin: bool) -> web::Data<SessionGuard> {
    web::Data::new(SessionGuard {
        tokens: Arc::new(StubSessionTokens { user_id, is_admin }),
        blacklist: Arc::new(NoopBlacklist),
    })
}

// ============================================================
// Passport stubs
// ============================================================

pub struct StubIssueImageCodeUseCase;

#[async_trait]
impl IIssueImageCodeUseCase for StubIssueImageCodeUseCase {
    async fn execute(&self, _: &str) -> Result<Vec<u8>, IssueImageCodeError> {
        Ok(vec![0x89, 0x50, 0x4e, 0x47])
    }
}

pub struct StubSendSmsCodeUseCase;

#[async_trait]
impl ISendSmsCodeUseCase for StubSendSmsCodeUseCase {
    async fn execute(&self, _: SendSmsCodeRequest) -> Result<(), SendSmsCodeError> {
        Ok(())
    }
}

fn stub_session_user() -> SessionUserInfo {
    SessionUserInfo {
        id: 1,
        mobile: "13800000000".into(),
        nick_name: "testuser".into(),
        is_admin: false,
    }
}

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _: RegisterRequest) -> Result<RegisterResponse, RegisterError> {
        Ok(RegisterResponse {
            session_token: "stub.session.token".into(),
            user: stub_session_user(),
        })
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _: LoginRequest) -> Result<LoginResponse, LoginError> {
        Ok(LoginResponse {
            session_token: "stub.session.token".into(),
            user: stub_session_user(),
        })
    }
}

pub struct StubLogoutUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _: &str) -> Result<(), LogoutError> {
        Ok(())
    }
}

// ============================================================
// News stubs
// ============================================================

pub struct StubGetNewsListUseCase;

#[async_trait]
impl IGetNewsListUseCase for StubGetNewsListUseCase {
    async fn execute(&self, _: GetNewsListRequest) -> Result<NewsListResponse, GetNewsListError> {
        Ok(NewsListResponse {
            total_page: 0,
            current_page: 1,
            news_dict_list: vec![],
            categories: vec![],
        })
    }
}

pub struct StubGetNewsDetailUseCase;

#[async_trait]
impl IGetNewsDetailUseCase for StubGetNewsDetailUseCase {
    async fn execute(
        &self,
        _: i32,
        _: Option<i32>,
    ) -> Result<NewsDetailResponse, GetNewsDetailError> {
        Err(GetNewsDetailError::NotFound)
    }
}

pub struct StubCollectNewsUseCase;

#[async_trait]
impl ICollectNewsUseCase for StubCollectNewsUseCase {
    async fn execute(&self, _: i32, _: CollectNewsRequest) -> Result<(), CollectNewsError> {
        Ok(())
    }
}

pub struct StubPostCommentUseCase;

#[async_trait]
impl IPostCommentUseCase for StubPostCommentUseCase {
    async fn execute(
        &self,
        user_id: i32,
        request: PostCommentRequest,
    ) -> Result<CommentView, PostCommentError> {
        Ok(CommentView {
            id: 1,
            news_id: request.news_id,
            content: request.content,
            create_time: "2025-03-11 09:30:05".into(),
            like_count: 0,
            is_like: false,
            user: CommentUserView {
                id: user_id,
                nick_name: "testuser".into(),
                avatar_url: None,
            },
            parent: None,
        })
    }
}

pub struct StubToggleCommentLikeUseCase;

#[async_trait]
impl IToggleCommentLikeUseCase for StubToggleCommentLikeUseCase {
    async fn execute(&self, _: i32, _: CommentLikeRequest) -> Result<(), CommentLikeError> {
        Ok(())
    }
}

// ============================================================
// Profile stubs
// ============================================================

pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, user_id: i32) -> Result<UserInfoView, FetchProfileError> {
        Ok(UserInfoView {
            id: user_id,
            nick_name: "testuser".into(),
            mobile: "13800000000".into(),
            avatar_url: None,
            signature: "".into(),
            gender: "MAN".into(),
            followers_count: 0,
            news_count: 0,
        })
    }
}

pub struct StubUpdateBaseInfoUseCase;

#[async_trait]
impl IUpdateBaseInfoUseCase for StubUpdateBaseInfoUseCase {
    async fn execute(&self, _: i32, _: UpdateBaseInfoRequest) -> Result<(), UpdateBaseInfoError> {
        Ok(())
    }
}

pub struct StubListCollectionUseCase;

#[async_trait]
impl IListCollectionUseCase for StubListCollectionUseCase {
    async fn execute(&self, _: i32, page: u64) -> Result<CollectionListResponse, ListCollectionError> {
        Ok(CollectionListResponse {
            total_page: 0,
            current_page: page,
            collections: vec![],
        })
    }
}

// ============================================================
// Admin stubs
// ============================================================

pub struct StubAdminLoginUseCase;

#[async_trait]
impl AdminLoginUseCase for StubAdminLoginUseCase {
    async fn execute(&self, _: AdminLoginRequest) -> Result<AdminLoginResponse, AdminLoginError> {
        Err(AdminLoginError::InvalidUser)
    }
}

pub struct StubGetUserStatsUseCase;

#[async_trait]
impl GetUserStatsUseCase for StubGetUserStatsUseCase {
    async fn execute(&self) -> Result<UserStatsResponse, GetUserStatsError> {
        Ok(UserStatsResponse {
            total_count: 0,
            mon_count: 0,
            day_count: 0,
            active_time: vec![],
            active_count: vec![],
        })
    }
}

pub struct StubListUsersUseCase;

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self, page: u64) -> Result<UserListResponse, ListUsersError> {
        Ok(UserListResponse {
            users: vec![],
            total_page: 0,
            current_page: page,
        })
    }
}

pub struct StubListReviewNewsUseCase;

#[async_trait]
impl ListReviewNewsUseCase for StubListReviewNewsUseCase {
    async fn execute(
        &self,
        _: Option<String>,
        page: u64,
    ) -> Result<ReviewListResponse, ReviewListError> {
        Ok(ReviewListResponse {
            news_list: vec![],
            total_page: 0,
            current_page: page,
        })
    }
}

pub struct StubGetReviewDetailUseCase;

#[async_trait]
impl GetReviewDetailUseCase for StubGetReviewDetailUseCase {
    async fn execute(&self, _: i32) -> Result<ReviewDetailView, ReviewDetailError> {
        Err(ReviewDetailError::NotFound)
    }
}

pub struct StubReviewNewsUseCase;

#[async_trait]
impl ReviewNewsUseCase for StubReviewNewsUseCase {
    async fn execute(&self, _: ReviewActionRequest) -> Result<(), ReviewActionError> {
        Ok(())
    }
}

pub struct StubListCategoriesUseCase;

#[async_trait]
impl ListCategoriesUseCase for StubListCategoriesUseCase {
    async fn execute(&self) -> Result<CategoryListResponse, CategoryListError> {
        Ok(CategoryListResponse { categories: vec![] })
    }
}

pub struct StubSaveCategoryUseCase;

#[async_trait]
impl SaveCategoryUseCase for StubSaveCategoryUseCase {
    async fn execute(&self, _: SaveCategoryRequest) -> Result<(), SaveCategoryError> {
        Ok(())
    }
}
