use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::news::application::use_cases::get_news_list::{
    GetNewsListError, GetNewsListRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct NewsListQuery {
    cid: Option<i32>,
    page: Option<u64>,
    per_page: Option<u64>,
}

/// Public news list: approved items only, newest first, with the category
/// strip. `cid=1` means all categories.
#[get("/news_list")]
pub async fn news_list_handler(
    query: web::Query<NewsListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let q = query.into_inner();
    let request = GetNewsListRequest::new(q.cid, q.page, q.per_page);

    match data.get_news_list_use_case.execute(request).await {
        Ok(response) => ApiResponse::ok(response),

        Err(GetNewsListError::QueryFailed(ref e)) => {
            error!(error = %e, "News list query failed");
            ApiResponse::db_err()
        }
    }
}
