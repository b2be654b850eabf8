use actix_web::{get, web, HttpRequest, Responder};
use tracing::error;

use crate::modules::passport::adapter::incoming::web::extractors::{
    extract_token_from_header, SessionUser,
};
use crate::modules::passport::application::use_cases::logout_user::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Logout: revokes the presented session token until its natural expiry.
#[get("/logout")]
pub async fn logout_user_handler(
    req: HttpRequest,
    session: SessionUser,
    data: web::Data<AppState>,
) -> impl Responder {
    // The extractor already proved the header is present and valid.
    let token = match extract_token_from_header(&req) {
        Some(t) => t,
        None => return ApiResponse::session_err(),
    };

    match data.logout_user_use_case.execute(&token).await {
        Ok(()) => ApiResponse::ok_msg("退出成功"),

        Err(LogoutError::InvalidToken) => ApiResponse::session_err(),

        Err(LogoutError::BlacklistFailed(ref e)) => {
            error!(user_id = session.user_id, error = %e, "Session revocation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::passport::application::use_cases::logout_user::ILogoutUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::session_guard_data;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct StubLogout {
        result: Result<(), LogoutError>,
    }

    #[async_trait]
    impl ILogoutUseCase for StubLogout {
        async fn execute(&self, _: &str) -> Result<(), LogoutError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn logout_revokes_the_session() {
        let app_state = TestAppStateBuilder::default()
            .with_logout_user(StubLogout { result: Ok(()) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(session_guard_data(3, false))
                .service(logout_user_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/logout")
            .insert_header(("Authorization", "Bearer any.session.token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["errmsg"], "退出成功");
    }

    #[actix_web::test]
    async fn logout_without_session_is_rejected() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(session_guard_data(3, false))
                .service(logout_user_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/logout").to_request();
        let resp = test::call_service(&app, req).await;
        // Extractor failure: envelope with SESSIONERR
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["errno"], 4101);
    }
}
