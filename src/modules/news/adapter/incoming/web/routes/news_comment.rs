use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::passport::adapter::incoming::web::extractors::SessionUser;
use crate::modules::news::application::use_cases::post_comment::{
    PostCommentError, PostCommentRequest,
};
use crate::shared::api::{ApiResponse, ErrCode};
use crate::AppState;

#[derive(Deserialize)]
pub struct NewsCommentDto {
    pub news_id: Option<i32>,
    pub comment: Option<String>,
    pub parent_id: Option<i32>,
}

/// Post a comment (optionally a reply) on a news item.
#[post("/news_comment")]
pub async fn news_comment_handler(
    session: SessionUser,
    req: web::Json<NewsCommentDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match PostCommentRequest::new(dto.news_id, dto.comment, dto.parent_id) {
        Ok(req) => req,
        Err(e) => return ApiResponse::param_err(&e.to_string()),
    };

    match data
        .post_comment_use_case
        .execute(session.user_id, request)
        .await
    {
        Ok(view) => ApiResponse::ok_msg_data("评论成功", view),

        Err(PostCommentError::NewsNotFound) => {
            ApiResponse::err(ErrCode::NoData, "未查询到新闻数据")
        }

        Err(PostCommentError::ParentNotFound) => {
            ApiResponse::err(ErrCode::NoData, "未查询到评论数据")
        }

        Err(PostCommentError::QueryFailed(ref e))
        | Err(PostCommentError::RepositoryError(ref e)) => {
            error!(user_id = session.user_id, error = %e, "Comment creation failed");
            ApiResponse::db_err()
        }
    }
}
