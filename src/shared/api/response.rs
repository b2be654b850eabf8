// src/shared/api/response.rs
use actix_web::HttpResponse;
use serde::Serialize;

/// Error codes of the uniform response envelope.
///
/// The numeric values are part of the client contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrCode {
    Ok = 0,
    DbErr = 4001,
    NoData = 4002,
    DataExist = 4003,
    DataErr = 4004,
    SessionErr = 4101,
    LoginErr = 4102,
    ParamErr = 4103,
    UserErr = 4104,
    RoleErr = 4105,
    PwdErr = 4106,
    ThirdErr = 4301,
    ServerErr = 4500,
}

impl ErrCode {
    pub fn errno(self) -> u32 {
        self as u32
    }

    /// Fallback message when the handler has nothing more specific to say.
    pub fn default_msg(self) -> &'static str {
        match self {
            ErrCode::Ok => "OK",
            ErrCode::DbErr => "数据库查询错误",
            ErrCode::NoData => "无数据",
            ErrCode::DataExist => "数据已存在",
            ErrCode::DataErr => "数据错误",
            ErrCode::SessionErr => "用户未登录",
            ErrCode::LoginErr => "用户登录失败",
            ErrCode::ParamErr => "参数错误",
            ErrCode::UserErr => "用户不存在",
            ErrCode::RoleErr => "用户身份错误",
            ErrCode::PwdErr => "用户名或密码错误",
            ErrCode::ThirdErr => "第三方系统错误",
            ErrCode::ServerErr => "内部错误",
        }
    }
}

/// Uniform JSON envelope: `{errno, errmsg, data?}`.
///
/// Handler-level failures are reported with HTTP 200 and a non-zero errno;
/// HTTP status codes are reserved for transport-level conditions (missing
/// captcha challenge id, malformed JSON bodies).
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: u32,
    pub errmsg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            errno: ErrCode::Ok.errno(),
            errmsg: "OK".to_string(),
            data: Some(data),
        })
    }

    pub fn ok_msg_data(errmsg: &str, data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            errno: ErrCode::Ok.errno(),
            errmsg: errmsg.to_string(),
            data: Some(data),
        })
    }
}

impl ApiResponse<()> {
    pub fn ok_msg(errmsg: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            errno: ErrCode::Ok.errno(),
            errmsg: errmsg.to_string(),
            data: None,
        })
    }

    pub fn err(code: ErrCode, errmsg: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            errno: code.errno(),
            errmsg: errmsg.to_string(),
            data: None,
        })
    }

    pub fn err_default(code: ErrCode) -> HttpResponse {
        Self::err(code, code.default_msg())
    }

    pub fn param_err(errmsg: &str) -> HttpResponse {
        Self::err(ErrCode::ParamErr, errmsg)
    }

    pub fn db_err() -> HttpResponse {
        Self::err_default(ErrCode::DbErr)
    }

    pub fn session_err() -> HttpResponse {
        Self::err_default(ErrCode::SessionErr)
    }

    pub fn internal_error() -> HttpResponse {
        Self::err_default(ErrCode::ServerErr)
    }
}
