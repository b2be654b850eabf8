use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::admin::application::use_cases::review_news::{
    ReviewActionError, ReviewActionRequest,
};
use crate::modules::passport::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::{ApiResponse, ErrCode};
use crate::AppState;

#[derive(Deserialize)]
pub struct ReviewActionDto {
    pub news_id: Option<i32>,
    /// "accept" or "reject"
    pub action: Option<String>,
    /// Mandatory when rejecting
    pub reason: Option<String>,
}

/// Moderation transition: pending → approved, or pending → rejected with a
/// reason.
#[post("/admin/news_review_action")]
pub async fn admin_news_review_action_handler(
    admin: AdminUser,
    req: web::Json<ReviewActionDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match ReviewActionRequest::new(dto.news_id, dto.action, dto.reason) {
        Ok(req) => req,
        Err(e) => return ApiResponse::param_err(&e.to_string()),
    };

    match data.admin.review_action.execute(request).await {
        Ok(()) => ApiResponse::ok_msg("操作成功"),

        Err(ReviewActionError::MissingReason) => ApiResponse::param_err("请输入拒绝原因"),

        Err(ReviewActionError::NotFound) => {
            ApiResponse::err(ErrCode::NoData, "未查询到待审核的新闻数据")
        }

        Err(ReviewActionError::QueryFailed(ref e))
        | Err(ReviewActionError::RepositoryError(ref e)) => {
            error!(admin_id = admin.user_id, error = %e, "Review action failed");
            ApiResponse::db_err()
        }
    }
}
