use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::modules::passport::adapter::incoming::web::extractors::SessionUser;
use crate::modules::profile::application::use_cases::fetch_profile::FetchProfileError;
use crate::modules::profile::application::use_cases::fetch_profile::UserInfoView;
use crate::shared::api::{ApiResponse, ErrCode};
use crate::AppState;

#[derive(Serialize)]
struct UserInfoData {
    user: UserInfoView,
}

/// The session user's own profile.
#[get("/user/info")]
pub async fn user_info_handler(
    session: SessionUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_profile_use_case.execute(session.user_id).await {
        Ok(user) => ApiResponse::ok(UserInfoData { user }),

        Err(FetchProfileError::NotFound) => ApiResponse::err_default(ErrCode::UserErr),

        Err(FetchProfileError::QueryFailed(ref e)) => {
            error!(user_id = session.user_id, error = %e, "Profile query failed");
            ApiResponse::db_err()
        }
    }
}
