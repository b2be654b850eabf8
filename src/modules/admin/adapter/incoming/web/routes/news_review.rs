use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::admin::application::use_cases::review_news::ReviewListError;
use crate::modules::passport::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct NewsReviewQuery {
    page: Option<u64>,
    keywords: Option<String>,
}

/// Moderation queue: pending and rejected news, optional title keyword.
#[get("/admin/news_review")]
pub async fn admin_news_review_handler(
    admin: AdminUser,
    query: web::Query<NewsReviewQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let q = query.into_inner();

    match data
        .admin
        .review_list
        .execute(q.keywords, q.page.unwrap_or(1))
        .await
    {
        Ok(response) => ApiResponse::ok(response),

        Err(ReviewListError::QueryFailed(ref e)) => {
            error!(admin_id = admin.user_id, error = %e, "Review list failed");
            ApiResponse::db_err()
        }
    }
}
