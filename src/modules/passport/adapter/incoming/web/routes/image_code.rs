use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::passport::application::use_cases::issue_image_code::IssueImageCodeError;
use crate::AppState;

#[derive(Deserialize)]
pub struct ImageCodeQuery {
    #[serde(rename = "imageCodeId")]
    image_code_id: Option<String>,
}

/// Image captcha issuance.
///
/// Unlike the JSON endpoints this one speaks raw bytes: the response body is
/// the rendered image, and failures abort with an HTTP status instead of the
/// envelope (there is no JSON channel to put it in).
#[get("/image_code")]
pub async fn get_image_code_handler(
    query: web::Query<ImageCodeQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let image_code_id = match query.into_inner().image_code_id {
        Some(id) if !id.is_empty() => id,
        _ => return HttpResponse::Forbidden().finish(),
    };

    match data
        .issue_image_code_use_case
        .execute(&image_code_id)
        .await
    {
        Ok(image) => HttpResponse::Ok().content_type("image/jpg").body(image),

        Err(IssueImageCodeError::RenderFailed) => {
            error!("Captcha rendering failed");
            HttpResponse::InternalServerError().finish()
        }

        Err(IssueImageCodeError::StoreFailed(ref e)) => {
            error!(error = %e, "Failed to store captcha text");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::passport::application::use_cases::issue_image_code::IIssueImageCodeUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct StubIssueImageCode {
        result: Result<Vec<u8>, IssueImageCodeError>,
    }

    #[async_trait]
    impl IIssueImageCodeUseCase for StubIssueImageCode {
        async fn execute(&self, _: &str) -> Result<Vec<u8>, IssueImageCodeError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn returns_image_bytes_for_a_challenge_id() {
        let app_state = TestAppStateBuilder::default()
            .with_issue_image_code(StubIssueImageCode {
                result: Ok(vec![1, 2, 3]),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_image_code_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/image_code?imageCodeId=x1")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "image/jpg"
        );

        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), &[1, 2, 3]);
    }

    #[actix_web::test]
    async fn missing_challenge_id_is_403() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_image_code_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/image_code").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let req = test::TestRequest::get()
            .uri("/image_code?imageCodeId=")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn store_failure_is_500() {
        let app_state = TestAppStateBuilder::default()
            .with_issue_image_code(StubIssueImageCode {
                result: Err(IssueImageCodeError::StoreFailed("redis down".into())),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_image_code_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/image_code?imageCodeId=x1")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }
}
