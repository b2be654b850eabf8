use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::modules::passport::application::use_cases::register_user::{
    RegisterError, RegisterRequest,
};
use crate::shared::api::{ApiResponse, ErrCode};
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    /// Mobile number, 11 digits
    #[schema(example = "13800000000")]
    pub mobile: Option<String>,

    /// The SMS verification code
    #[schema(example = "123456")]
    pub smscode: Option<String>,

    /// Password
    pub password: Option<String>,
}

/// User registration.
///
/// Verifies the SMS code, creates the account (nickname defaults to the
/// mobile number) and establishes a session.
#[utoipa::path(
    post,
    path = "/register",
    tag = "passport",
    request_body = RegisterRequestDto,
    responses(
        (status = 200, description = "Envelope; errno 0 with session token, 4002 expired code, 4004 wrong code, 4003 mobile already registered"),
    )
)]
#[post("/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match RegisterRequest::new(dto.mobile, dto.smscode, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::param_err(&e.to_string()),
    };

    match data.register_user_use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = response.user.id, "Registration complete");
            ApiResponse::ok_msg_data("注册成功", response)
        }

        Err(RegisterError::SmsCodeExpired) => ApiResponse::err(ErrCode::NoData, "验证码已过期"),

        Err(RegisterError::SmsCodeMismatch) => {
            warn!("SMS code mismatch during registration");
            ApiResponse::err(ErrCode::DataErr, "验证码输入错误")
        }

        Err(RegisterError::MobileAlreadyRegistered) => {
            ApiResponse::err(ErrCode::DataExist, "该手机号已注册")
        }

        Err(RegisterError::FetchFailed(ref e)) => {
            error!(error = %e, "SMS code lookup failed");
            ApiResponse::err(ErrCode::DbErr, "数据查询失败")
        }

        Err(RegisterError::RepositoryError(ref e)) => {
            error!(error = %e, "User insert failed");
            ApiResponse::err(ErrCode::DbErr, "数据保存失败")
        }

        Err(RegisterError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(RegisterError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Session token generation failed");
            ApiResponse::internal_error()
        }
    }
}
