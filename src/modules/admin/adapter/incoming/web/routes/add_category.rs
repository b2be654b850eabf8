use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::admin::application::use_cases::manage_categories::{
    SaveCategoryError, SaveCategoryRequest,
};
use crate::modules::passport::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::{ApiResponse, ErrCode};
use crate::AppState;

#[derive(Deserialize)]
pub struct AddCategoryDto {
    /// Present: rename that category. Absent: create a new one.
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[post("/admin/add_category")]
pub async fn admin_add_category_handler(
    admin: AdminUser,
    req: web::Json<AddCategoryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match SaveCategoryRequest::new(dto.id, dto.name) {
        Ok(req) => req,
        Err(e) => return ApiResponse::param_err(&e.to_string()),
    };

    match data.admin.save_category.execute(request).await {
        Ok(()) => ApiResponse::ok_msg("操作成功"),

        Err(SaveCategoryError::NotFound) => {
            ApiResponse::err(ErrCode::NoData, "未查询到分类数据")
        }

        Err(SaveCategoryError::NameExists) => {
            ApiResponse::err(ErrCode::DataExist, "分类名已存在")
        }

        Err(SaveCategoryError::RepositoryError(ref e)) => {
            error!(admin_id = admin.user_id, error = %e, "Category save failed");
            ApiResponse::db_err()
        }
    }
}
