use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::admin::application::use_cases::list_users::ListUsersError;
use crate::modules::passport::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct UserListQuery {
    page: Option<u64>,
}

/// Paginated non-admin user list for the console.
#[get("/admin/user_list")]
pub async fn admin_user_list_handler(
    admin: AdminUser,
    query: web::Query<UserListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = query.into_inner().page.unwrap_or(1);

    match data.admin.user_list.execute(page).await {
        Ok(response) => ApiResponse::ok(response),

        Err(ListUsersError::QueryFailed(ref e)) => {
            error!(admin_id = admin.user_id, error = %e, "User list failed");
            ApiResponse::db_err()
        }
    }
}
