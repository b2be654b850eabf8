use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::modules::passport::application::use_cases::send_sms_code::{
    SendSmsCodeError, SendSmsCodeRequest,
};
use crate::shared::api::{ApiResponse, ErrCode};
use crate::AppState;

/// SMS-code request from the client.
#[derive(Deserialize, ToSchema)]
pub struct SmsCodeRequestDto {
    /// Mobile number, 11 digits
    #[schema(example = "13800000000")]
    pub mobile: Option<String>,

    /// Text the user read off the image captcha
    #[schema(example = "AB3D")]
    pub image_code: Option<String>,

    /// Client-generated captcha challenge id
    #[schema(example = "x1")]
    pub image_code_id: Option<String>,
}

/// Issue an SMS verification code.
///
/// Validates the image captcha first, then stores a fresh 6-digit code under
/// the mobile number and dispatches it through the SMS gateway.
#[utoipa::path(
    post,
    path = "/sms_code",
    tag = "passport",
    request_body = SmsCodeRequestDto,
    responses(
        (status = 200, description = "Envelope; errno 0 on success, 4002 expired captcha, 4004 wrong captcha, 4301 gateway failure"),
    )
)]
#[post("/sms_code")]
pub async fn send_sms_code_handler(
    req: web::Json<SmsCodeRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match SendSmsCodeRequest::new(dto.mobile, dto.image_code, dto.image_code_id) {
        Ok(req) => req,
        Err(e) => return ApiResponse::param_err(&e.to_string()),
    };

    match data.send_sms_code_use_case.execute(request).await {
        Ok(()) => {
            info!("SMS verification code dispatched");
            ApiResponse::ok_msg("发送成功")
        }

        Err(SendSmsCodeError::ImageCodeExpired) => {
            ApiResponse::err(ErrCode::NoData, "图片验证码已过期")
        }

        Err(SendSmsCodeError::ImageCodeMismatch) => {
            warn!("Image captcha mismatch");
            ApiResponse::err(ErrCode::DataErr, "验证码输入错误")
        }

        Err(SendSmsCodeError::FetchFailed(ref e)) => {
            error!(error = %e, "Image captcha lookup failed");
            ApiResponse::err(ErrCode::DbErr, "数据查询失败")
        }

        Err(SendSmsCodeError::StoreFailed(ref e)) => {
            error!(error = %e, "Storing SMS code failed");
            ApiResponse::err(ErrCode::DbErr, "验证码生成保存失败")
        }

        Err(SendSmsCodeError::GatewayFailed(ref e)) => {
            error!(error = %e, "SMS gateway failure");
            ApiResponse::err(ErrCode::ThirdErr, "第三方平台错误，短信发送失败")
        }
    }
}
