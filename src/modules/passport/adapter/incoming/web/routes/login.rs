use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::modules::passport::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::{ApiResponse, ErrCode};
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Mobile number, 11 digits
    #[schema(example = "13800000000")]
    pub mobile: Option<String>,

    /// Password
    pub password: Option<String>,
}

/// User login.
///
/// Verifies the password, refreshes `last_login` and establishes a session.
#[utoipa::path(
    post,
    path = "/login",
    tag = "passport",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Envelope; errno 0 with session token, 4104 unknown mobile, 4106 wrong password"),
    )
)]
#[post("/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.mobile, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::param_err(&e.to_string()),
    };

    info!(mobile = %request.mobile(), "Login attempt");

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = response.user.id, "User logged in");
            ApiResponse::ok_msg_data("登录成功", response)
        }

        Err(LoginError::UserNotFound) => ApiResponse::err(ErrCode::UserErr, "用户不存在"),

        Err(LoginError::WrongPassword) => {
            warn!("Login failed: wrong password");
            ApiResponse::err(ErrCode::PwdErr, "用户名或密码错误")
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "User lookup failed");
            ApiResponse::err(ErrCode::DbErr, "数据查询失败")
        }

        Err(LoginError::VerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Session token generation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::passport::application::use_cases::login_user::{
        ILoginUserUseCase, LoginResponse,
    };
    use crate::modules::passport::application::use_cases::register_user::SessionUserInfo;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct StubLogin {
        result: Result<LoginResponse, LoginError>,
    }

    #[async_trait]
    impl ILoginUserUseCase for StubLogin {
        async fn execute(&self, _: LoginRequest) -> Result<LoginResponse, LoginError> {
            self.result.clone()
        }
    }

    fn success_response() -> LoginResponse {
        LoginResponse {
            session_token: "signed.session.token".to_string(),
            user: SessionUserInfo {
                id: 3,
                mobile: "13800000000".to_string(),
                nick_name: "reader".to_string(),
                is_admin: false,
            },
        }
    }

    async fn call(stub: StubLogin, body: serde_json::Value) -> serde_json::Value {
        let app_state = TestAppStateBuilder::default().with_login_user(stub).build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        test::read_body_json(resp).await
    }

    #[actix_web::test]
    async fn login_success_returns_session() {
        let body = call(
            StubLogin {
                result: Ok(success_response()),
            },
            serde_json::json!({"mobile": "13800000000", "password": "hunter42"}),
        )
        .await;

        assert_eq!(body["errno"], 0);
        assert_eq!(body["errmsg"], "登录成功");
        assert_eq!(body["data"]["user"]["nick_name"], "reader");
    }

    #[actix_web::test]
    async fn unknown_user_is_usererr() {
        let body = call(
            StubLogin {
                result: Err(LoginError::UserNotFound),
            },
            serde_json::json!({"mobile": "13800000000", "password": "hunter42"}),
        )
        .await;
        assert_eq!(body["errno"], 4104);
        assert_eq!(body["errmsg"], "用户不存在");
    }

    #[actix_web::test]
    async fn wrong_password_is_pwderr() {
        let body = call(
            StubLogin {
                result: Err(LoginError::WrongPassword),
            },
            serde_json::json!({"mobile": "13800000000", "password": "nope"}),
        )
        .await;
        assert_eq!(body["errno"], 4106);
    }

    #[actix_web::test]
    async fn missing_fields_are_param_error() {
        let body = call(
            StubLogin {
                result: Ok(success_response()),
            },
            serde_json::json!({"mobile": "13800000000"}),
        )
        .await;
        assert_eq!(body["errno"], 4103);
    }
}
