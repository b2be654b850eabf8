use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::admin::application::use_cases::manage_categories::CategoryListError;
use crate::modules::passport::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Editable categories (the synthetic home category is excluded).
#[get("/admin/category_list")]
pub async fn admin_category_list_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.category_list.execute().await {
        Ok(response) => ApiResponse::ok(response),

        Err(CategoryListError::QueryFailed(ref e)) => {
            error!(admin_id = admin.user_id, error = %e, "Category list failed");
            ApiResponse::db_err()
        }
    }
}
