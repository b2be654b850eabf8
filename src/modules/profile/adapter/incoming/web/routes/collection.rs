use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::passport::adapter::incoming::web::extractors::SessionUser;
use crate::modules::profile::application::use_cases::list_collection::ListCollectionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct CollectionQuery {
    page: Option<u64>,
}

/// The session user's collected news, paginated.
#[get("/user/collection")]
pub async fn user_collection_handler(
    session: SessionUser,
    query: web::Query<CollectionQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = query.into_inner().page.unwrap_or(1);

    match data
        .list_collection_use_case
        .execute(session.user_id, page)
        .await
    {
        Ok(response) => ApiResponse::ok(response),

        Err(ListCollectionError::QueryFailed(ref e)) => {
            error!(user_id = session.user_id, error = %e, "Collection list failed");
            ApiResponse::db_err()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::application::use_cases::list_collection::{
        CollectionListResponse, IListCollectionUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::session_guard_data;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct StubList {
        result: Result<CollectionListResponse, ListCollectionError>,
    }

    #[async_trait]
    impl IListCollectionUseCase for StubList {
        async fn execute(
            &self,
            _: i32,
            _: u64,
        ) -> Result<CollectionListResponse, ListCollectionError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn collection_list_returns_pages() {
        let app_state = TestAppStateBuilder::default()
            .with_list_collection(StubList {
                result: Ok(CollectionListResponse {
                    total_page: 1,
                    current_page: 1,
                    collections: vec![],
                }),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(session_guard_data(3, false))
                .service(user_collection_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/user/collection?page=1")
            .insert_header(("Authorization", "Bearer token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["total_page"], 1);
    }
}
