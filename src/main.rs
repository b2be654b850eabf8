pub mod api;
pub mod constants;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::admin;
pub use modules::news;
pub use modules::passport;
pub use modules::profile;
pub use modules::sms;

use crate::admin::adapter::outgoing::user_stats_postgres::UserStatsPostgres;
use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::use_cases::admin_login::{AdminLoginService, AdminLoginUseCase};
use crate::admin::application::use_cases::get_user_stats::{
    GetUserStatsService, GetUserStatsUseCase,
};
use crate::admin::application::use_cases::list_users::{ListUsersService, ListUsersUseCase};
use crate::admin::application::use_cases::manage_categories::{
    ListCategoriesService, ListCategoriesUseCase, SaveCategoryService, SaveCategoryUseCase,
};
use crate::admin::application::use_cases::review_news::{
    GetReviewDetailService, GetReviewDetailUseCase, ListReviewNewsService, ListReviewNewsUseCase,
    ReviewNewsService, ReviewNewsUseCase,
};
use crate::news::adapter::outgoing::category_repository_postgres::CategoryRepositoryPostgres;
use crate::news::adapter::outgoing::collection_repository_postgres::CollectionRepositoryPostgres;
use crate::news::adapter::outgoing::comment_repository_postgres::CommentRepositoryPostgres;
use crate::news::adapter::outgoing::follow_query_postgres::FollowQueryPostgres;
use crate::news::adapter::outgoing::news_query_postgres::NewsQueryPostgres;
use crate::news::adapter::outgoing::news_repository_postgres::NewsRepositoryPostgres;
use crate::news::application::ports::outgoing::{
    CategoryRepository, CollectionRepository, CommentRepository, FollowQuery, NewsQuery,
    NewsRepository,
};
use crate::news::application::use_cases::collect_news::{CollectNewsUseCase, ICollectNewsUseCase};
use crate::news::application::use_cases::get_news_detail::{
    GetNewsDetailUseCase, IGetNewsDetailUseCase,
};
use crate::news::application::use_cases::get_news_list::{GetNewsListUseCase, IGetNewsListUseCase};
use crate::news::application::use_cases::post_comment::{IPostCommentUseCase, PostCommentUseCase};
use crate::news::application::use_cases::toggle_comment_like::{
    IToggleCommentLikeUseCase, ToggleCommentLikeUseCase,
};
use crate::passport::adapter::incoming::web::extractors::SessionGuard;
use crate::passport::adapter::outgoing::captcha_image::ImageCaptchaGenerator;
use crate::passport::adapter::outgoing::jwt::{JwtConfig, JwtSessionService};
use crate::passport::adapter::outgoing::security::Argon2Hasher;
use crate::passport::adapter::outgoing::session_blacklist_redis::RedisSessionBlacklist;
use crate::passport::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::passport::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::passport::adapter::outgoing::verification_store_redis::RedisVerificationStore;
use crate::passport::application::ports::outgoing::{
    CaptchaGenerator, PasswordHasher, SessionBlacklist, SessionTokenProvider, UserQuery,
    UserRepository, VerificationStore,
};
use crate::passport::application::use_cases::issue_image_code::{
    IIssueImageCodeUseCase, IssueImageCodeUseCase,
};
use crate::passport::application::use_cases::login_user::{ILoginUserUseCase, LoginUserUseCase};
use crate::passport::application::use_cases::logout_user::{ILogoutUseCase, LogoutUseCase};
use crate::passport::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserUseCase,
};
use crate::passport::application::use_cases::send_sms_code::{
    ISendSmsCodeUseCase, SendSmsCodeUseCase,
};
use crate::profile::application::use_cases::fetch_profile::{
    FetchProfileUseCase, IFetchProfileUseCase,
};
use crate::profile::application::use_cases::list_collection::{
    IListCollectionUseCase, ListCollectionUseCase,
};
use crate::profile::application::use_cases::update_base_info::{
    IUpdateBaseInfoUseCase, UpdateBaseInfoUseCase,
};
use crate::sms::adapter::outgoing::{CloopenSmsSender, MockSmsSender};
use crate::sms::application::ports::outgoing::SmsSender;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
pub mod tests;

#[derive(Clone)]
pub struct AppState {
    pub issue_image_code_use_case: Arc<dyn IIssueImageCodeUseCase + Send + Sync>,
    pub send_sms_code_use_case: Arc<dyn ISendSmsCodeUseCase + Send + Sync>,
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub get_news_list_use_case: Arc<dyn IGetNewsListUseCase + Send + Sync>,
    pub get_news_detail_use_case: Arc<dyn IGetNewsDetailUseCase + Send + Sync>,
    pub collect_news_use_case: Arc<dyn ICollectNewsUseCase + Send + Sync>,
    pub post_comment_use_case: Arc<dyn IPostCommentUseCase + Send + Sync>,
    pub toggle_comment_like_use_case: Arc<dyn IToggleCommentLikeUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub update_base_info_use_case: Arc<dyn IUpdateBaseInfoUseCase + Send + Sync>,
    pub list_collection_use_case: Arc<dyn IListCollectionUseCase + Send + Sync>,
    pub admin: AdminUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Outgoing adapters
    let verification_store: Arc<dyn VerificationStore> =
        Arc::new(RedisVerificationStore::new(Arc::clone(&redis_arc)));
    let session_blacklist: Arc<dyn SessionBlacklist> =
        Arc::new(RedisSessionBlacklist::new(Arc::clone(&redis_arc)));
    let captcha: Arc<dyn CaptchaGenerator> = Arc::new(ImageCaptchaGenerator::new());
    let tokens: Arc<dyn SessionTokenProvider> =
        Arc::new(JwtSessionService::new(JwtConfig::from_env()));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env());

    // SMS_MODE=mock keeps local runs off the real gateway
    let sms_sender: Arc<dyn SmsSender> =
        if env::var("SMS_MODE").as_deref() == Ok("mock") || env_name == "test" {
            Arc::new(MockSmsSender::new())
        } else {
            Arc::new(CloopenSmsSender::from_env())
        };

    let user_repository: Arc<dyn UserRepository> =
        Arc::new(UserRepositoryPostgres::new(Arc::clone(&db_arc)));
    let user_query: Arc<dyn UserQuery> = Arc::new(UserQueryPostgres::new(Arc::clone(&db_arc)));

    let news_query: Arc<dyn NewsQuery> = Arc::new(NewsQueryPostgres::new(Arc::clone(&db_arc)));
    let news_repository: Arc<dyn NewsRepository> =
        Arc::new(NewsRepositoryPostgres::new(Arc::clone(&db_arc)));
    let comment_repository: Arc<dyn CommentRepository> =
        Arc::new(CommentRepositoryPostgres::new(Arc::clone(&db_arc)));
    let collection_repository: Arc<dyn CollectionRepository> =
        Arc::new(CollectionRepositoryPostgres::new(Arc::clone(&db_arc)));
    let follow_query: Arc<dyn FollowQuery> =
        Arc::new(FollowQueryPostgres::new(Arc::clone(&db_arc)));
    let category_repository: Arc<dyn CategoryRepository> =
        Arc::new(CategoryRepositoryPostgres::new(Arc::clone(&db_arc)));
    let user_stats: Arc<dyn crate::admin::application::ports::outgoing::UserStatsQuery> =
        Arc::new(UserStatsPostgres::new(Arc::clone(&db_arc)));

    // Passport use cases
    let issue_image_code_use_case =
        IssueImageCodeUseCase::new(Arc::clone(&captcha), Arc::clone(&verification_store));
    let send_sms_code_use_case =
        SendSmsCodeUseCase::new(Arc::clone(&verification_store), Arc::clone(&sms_sender));
    let register_user_use_case = RegisterUserUseCase::new(
        Arc::clone(&verification_store),
        Arc::clone(&user_repository),
        Arc::clone(&password_hasher),
        Arc::clone(&tokens),
    );
    let login_user_use_case = LoginUserUseCase::new(
        Arc::clone(&user_query),
        Arc::clone(&user_repository),
        Arc::clone(&password_hasher),
        Arc::clone(&tokens),
    );
    let logout_user_use_case =
        LogoutUseCase::new(Arc::clone(&tokens), Arc::clone(&session_blacklist));

    // News use cases
    let get_news_list_use_case =
        GetNewsListUseCase::new(Arc::clone(&news_query), Arc::clone(&category_repository));
    let get_news_detail_use_case = GetNewsDetailUseCase::new(
        Arc::clone(&news_query),
        Arc::clone(&news_repository),
        Arc::clone(&category_repository),
        Arc::clone(&comment_repository),
        Arc::clone(&collection_repository),
        Arc::clone(&follow_query),
        Arc::clone(&user_query),
    );
    let collect_news_use_case =
        CollectNewsUseCase::new(Arc::clone(&news_query), Arc::clone(&collection_repository));
    let post_comment_use_case = PostCommentUseCase::new(
        Arc::clone(&news_query),
        Arc::clone(&comment_repository),
        Arc::clone(&user_query),
    );
    let toggle_comment_like_use_case =
        ToggleCommentLikeUseCase::new(Arc::clone(&comment_repository));

    // Profile use cases
    let fetch_profile_use_case =
        FetchProfileUseCase::new(Arc::clone(&user_query), Arc::clone(&follow_query));
    let update_base_info_use_case = UpdateBaseInfoUseCase::new(Arc::clone(&user_repository));
    let list_collection_use_case = ListCollectionUseCase::new(Arc::clone(&collection_repository));

    // Admin use cases
    let admin_login: Arc<dyn AdminLoginUseCase + Send + Sync> = Arc::new(AdminLoginService::new(
        Arc::clone(&user_query),
        Arc::clone(&user_repository),
        Arc::clone(&password_hasher),
        Arc::clone(&tokens),
    ));
    let admin_user_stats: Arc<dyn GetUserStatsUseCase + Send + Sync> =
        Arc::new(GetUserStatsService::new(Arc::clone(&user_stats)));
    let admin_user_list: Arc<dyn ListUsersUseCase + Send + Sync> =
        Arc::new(ListUsersService::new(Arc::clone(&user_stats)));
    let admin_review_list: Arc<dyn ListReviewNewsUseCase + Send + Sync> =
        Arc::new(ListReviewNewsService::new(Arc::clone(&news_query)));
    let admin_review_detail: Arc<dyn GetReviewDetailUseCase + Send + Sync> =
        Arc::new(GetReviewDetailService::new(Arc::clone(&news_query)));
    let admin_review_action: Arc<dyn ReviewNewsUseCase + Send + Sync> = Arc::new(
        ReviewNewsService::new(Arc::clone(&news_query), Arc::clone(&news_repository)),
    );
    let admin_category_list: Arc<dyn ListCategoriesUseCase + Send + Sync> =
        Arc::new(ListCategoriesService::new(Arc::clone(&category_repository)));
    let admin_save_category: Arc<dyn SaveCategoryUseCase + Send + Sync> =
        Arc::new(SaveCategoryService::new(Arc::clone(&category_repository)));

    let state = AppState {
        issue_image_code_use_case: Arc::new(issue_image_code_use_case),
        send_sms_code_use_case: Arc::new(send_sms_code_use_case),
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        get_news_list_use_case: Arc::new(get_news_list_use_case),
        get_news_detail_use_case: Arc::new(get_news_detail_use_case),
        collect_news_use_case: Arc::new(collect_news_use_case),
        post_comment_use_case: Arc::new(post_comment_use_case),
        toggle_comment_like_use_case: Arc::new(toggle_comment_like_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        update_base_info_use_case: Arc::new(update_base_info_use_case),
        list_collection_use_case: Arc::new(list_collection_use_case),
        admin: AdminUseCases {
            login: admin_login,
            user_stats: admin_user_stats,
            user_list: admin_user_list,
            review_list: admin_review_list,
            review_detail: admin_review_detail,
            review_action: admin_review_action,
            category_list: admin_category_list,
            save_category: admin_save_category,
        },
    };

    let session_guard = SessionGuard {
        tokens: Arc::clone(&tokens),
        blacklist: Arc::clone(&session_blacklist),
    };

    let db_for_server = Arc::clone(&db_arc);
    let redis_for_server = Arc::clone(&redis_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(session_guard.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_for_server)))
            .app_data(shared::api::custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Passport
    cfg.service(crate::passport::adapter::incoming::web::routes::get_image_code_handler);
    cfg.service(crate::passport::adapter::incoming::web::routes::send_sms_code_handler);
    cfg.service(crate::passport::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::passport::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::passport::adapter::incoming::web::routes::logout_user_handler);
    // News
    cfg.service(crate::news::adapter::incoming::web::routes::news_list_handler);
    cfg.service(crate::news::adapter::incoming::web::routes::news_collect_handler);
    cfg.service(crate::news::adapter::incoming::web::routes::news_comment_handler);
    cfg.service(crate::news::adapter::incoming::web::routes::comment_like_handler);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::user_info_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_base_info_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::user_collection_handler);
    // Admin
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_login_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_user_count_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_user_list_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_news_review_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_news_review_detail_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_news_review_action_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_category_list_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_add_category_handler);
    // News detail matches bare numeric paths; registered last.
    cfg.service(crate::news::adapter::incoming::web::routes::news_detail_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
