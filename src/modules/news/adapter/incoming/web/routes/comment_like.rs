use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::passport::adapter::incoming::web::extractors::SessionUser;
use crate::modules::news::application::use_cases::toggle_comment_like::{
    CommentLikeError, CommentLikeRequest,
};
use crate::shared::api::{ApiResponse, ErrCode};
use crate::AppState;

#[derive(Deserialize)]
pub struct CommentLikeDto {
    pub comment_id: Option<i32>,
    pub action: Option<String>,
}

/// Like / unlike a comment. The like edge and the denormalized counter move
/// in one transaction.
#[post("/comment_like")]
pub async fn comment_like_handler(
    session: SessionUser,
    req: web::Json<CommentLikeDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match CommentLikeRequest::new(dto.comment_id, dto.action) {
        Ok(req) => req,
        Err(e) => return ApiResponse::param_err(&e.to_string()),
    };

    match data
        .toggle_comment_like_use_case
        .execute(session.user_id, request)
        .await
    {
        Ok(()) => ApiResponse::ok_msg("操作成功"),

        Err(CommentLikeError::CommentNotFound) => {
            ApiResponse::err(ErrCode::NoData, "未查询到评论数据")
        }

        Err(CommentLikeError::RepositoryError(ref e)) => {
            error!(user_id = session.user_id, error = %e, "Like toggle failed");
            ApiResponse::db_err()
        }
    }
}
