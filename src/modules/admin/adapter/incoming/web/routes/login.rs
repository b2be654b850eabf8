use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};

use crate::modules::admin::application::use_cases::admin_login::{
    AdminLoginError, AdminLoginRequest,
};
use crate::shared::api::{ApiResponse, ErrCode};
use crate::AppState;

#[derive(Deserialize)]
pub struct AdminLoginDto {
    /// The admin's mobile number
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Console login. The only `/admin/*` route without the admin gate.
#[post("/admin/login")]
pub async fn admin_login_handler(
    req: web::Json<AdminLoginDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match AdminLoginRequest::new(dto.username, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::param_err(&e.to_string()),
    };

    match data.admin.login.execute(request).await {
        Ok(response) => ApiResponse::ok_msg_data("登录成功", response),

        Err(AdminLoginError::InvalidUser) => {
            warn!("Admin login with invalid username");
            ApiResponse::err(ErrCode::UserErr, "无效的用户名")
        }

        Err(AdminLoginError::WrongPassword) => {
            ApiResponse::err(ErrCode::PwdErr, "用户名密码错误")
        }

        Err(AdminLoginError::QueryError(ref e)) => {
            error!(error = %e, "Admin lookup failed");
            ApiResponse::db_err()
        }

        Err(AdminLoginError::VerificationFailed(ref e))
        | Err(AdminLoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Admin login failed");
            ApiResponse::internal_error()
        }
    }
}
