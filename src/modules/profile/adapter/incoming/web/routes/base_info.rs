use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::passport::adapter::incoming::web::extractors::SessionUser;
use crate::modules::profile::application::use_cases::update_base_info::{
    UpdateBaseInfoError, UpdateBaseInfoRequest,
};
use crate::shared::api::{ApiResponse, ErrCode};
use crate::AppState;

#[derive(Deserialize)]
pub struct BaseInfoDto {
    pub nick_name: Option<String>,
    pub signature: Option<String>,
    pub gender: Option<String>,
}

/// Update nickname, signature and gender of the session user.
#[post("/user/base_info")]
pub async fn update_base_info_handler(
    session: SessionUser,
    req: web::Json<BaseInfoDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match UpdateBaseInfoRequest::new(dto.nick_name, dto.signature, dto.gender) {
        Ok(req) => req,
        Err(e) => return ApiResponse::param_err(&e.to_string()),
    };

    match data
        .update_base_info_use_case
        .execute(session.user_id, request)
        .await
    {
        Ok(()) => ApiResponse::ok_msg("OK"),

        Err(UpdateBaseInfoError::NicknameTaken) => {
            ApiResponse::err(ErrCode::DataExist, "昵称已被占用")
        }

        Err(UpdateBaseInfoError::UserNotFound) => ApiResponse::err_default(ErrCode::UserErr),

        Err(UpdateBaseInfoError::RepositoryError(ref e)) => {
            error!(user_id = session.user_id, error = %e, "Base info update failed");
            ApiResponse::db_err()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::application::use_cases::update_base_info::IUpdateBaseInfoUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::session_guard_data;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct StubUpdate {
        result: Result<(), UpdateBaseInfoError>,
    }

    #[async_trait]
    impl IUpdateBaseInfoUseCase for StubUpdate {
        async fn execute(
            &self,
            _: i32,
            _: UpdateBaseInfoRequest,
        ) -> Result<(), UpdateBaseInfoError> {
            self.result.clone()
        }
    }

    async fn call(stub: StubUpdate, body: serde_json::Value) -> serde_json::Value {
        let app_state = TestAppStateBuilder::default()
            .with_update_base_info(stub)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(session_guard_data(3, false))
                .service(update_base_info_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/user/base_info")
            .insert_header(("Authorization", "Bearer token"))
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        test::read_body_json(resp).await
    }

    #[actix_web::test]
    async fn base_info_update_succeeds() {
        let body = call(
            StubUpdate { result: Ok(()) },
            serde_json::json!({"nick_name": "新昵称", "signature": "签名", "gender": "WOMAN"}),
        )
        .await;
        assert_eq!(body["errno"], 0);
    }

    #[actix_web::test]
    async fn unknown_gender_is_param_error() {
        let body = call(
            StubUpdate { result: Ok(()) },
            serde_json::json!({"nick_name": "n", "signature": "s", "gender": "OTHER"}),
        )
        .await;
        assert_eq!(body["errno"], 4103);
    }

    #[actix_web::test]
    async fn taken_nickname_is_conflict() {
        let body = call(
            StubUpdate {
                result: Err(UpdateBaseInfoError::NicknameTaken),
            },
            serde_json::json!({"nick_name": "n", "signature": "s", "gender": "MAN"}),
        )
        .await;
        assert_eq!(body["errno"], 4003);
    }
}
