use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::passport::adapter::incoming::web::extractors::SessionUser;
use crate::modules::news::application::use_cases::collect_news::{
    CollectNewsError, CollectNewsRequest,
};
use crate::shared::api::{ApiResponse, ErrCode};
use crate::AppState;

#[derive(Deserialize)]
pub struct NewsCollectDto {
    pub news_id: Option<i32>,
    pub action: Option<String>,
}

/// Collect / uncollect a news item for the session user. Both directions are
/// idempotent.
#[post("/news_collect")]
pub async fn news_collect_handler(
    session: SessionUser,
    req: web::Json<NewsCollectDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match CollectNewsRequest::new(dto.news_id, dto.action) {
        Ok(req) => req,
        Err(e) => return ApiResponse::param_err(&e.to_string()),
    };

    match data
        .collect_news_use_case
        .execute(session.user_id, request)
        .await
    {
        Ok(()) => ApiResponse::ok_msg("操作成功"),

        Err(CollectNewsError::NewsNotFound) => {
            ApiResponse::err(ErrCode::NoData, "未查询到新闻数据")
        }

        Err(CollectNewsError::QueryFailed(ref e))
        | Err(CollectNewsError::RepositoryError(ref e)) => {
            error!(user_id = session.user_id, error = %e, "Collection toggle failed");
            ApiResponse::db_err()
        }
    }
}
