use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::admin::application::use_cases::review_news::ReviewDetailError;
use crate::modules::passport::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::{ApiResponse, ErrCode};
use crate::AppState;

#[derive(Deserialize)]
pub struct ReviewDetailQuery {
    news_id: Option<i32>,
}

/// One news item in full, for the moderation screen.
#[get("/admin/news_review_detail")]
pub async fn admin_news_review_detail_handler(
    admin: AdminUser,
    query: web::Query<ReviewDetailQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let news_id = match query.into_inner().news_id {
        Some(id) => id,
        None => return ApiResponse::param_err("参数错误"),
    };

    match data.admin.review_detail.execute(news_id).await {
        Ok(view) => ApiResponse::ok(view),

        Err(ReviewDetailError::NotFound) => {
            ApiResponse::err(ErrCode::NoData, "未查询到新闻数据")
        }

        Err(ReviewDetailError::QueryFailed(ref e)) => {
            error!(admin_id = admin.user_id, news_id, error = %e, "Review detail failed");
            ApiResponse::db_err()
        }
    }
}
