use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::admin::application::use_cases::get_user_stats::GetUserStatsError;
use crate::modules::passport::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Dashboard analytics: user totals and the 31-day active-user series.
#[get("/admin/user_count")]
pub async fn admin_user_count_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.user_stats.execute().await {
        Ok(response) => ApiResponse::ok(response),

        Err(GetUserStatsError::QueryFailed(ref e)) => {
            error!(admin_id = admin.user_id, error = %e, "User stats failed");
            ApiResponse::db_err()
        }
    }
}
