use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::passport::adapter::incoming::web::extractors::SessionUser;
use crate::modules::news::application::use_cases::get_news_detail::GetNewsDetailError;
use crate::shared::api::{ApiResponse, ErrCode};
use crate::AppState;

/// News detail page data: the item itself (click counter bumped), the
/// click-rank sidebar, the viewer's collect/follow flags and the comment
/// tree. Works with or without a session.
#[get("/{news_id:[0-9]+}")]
pub async fn news_detail_handler(
    path: web::Path<i32>,
    session: Option<SessionUser>,
    data: web::Data<AppState>,
) -> impl Responder {
    let news_id = path.into_inner();
    let viewer = session.map(|s| s.user_id);

    match data.get_news_detail_use_case.execute(news_id, viewer).await {
        Ok(response) => ApiResponse::ok(response),

        Err(GetNewsDetailError::NotFound) => {
            ApiResponse::err(ErrCode::NoData, "未查询到新闻数据")
        }

        Err(GetNewsDetailError::QueryFailed(ref e)) => {
            error!(news_id, error = %e, "News detail query failed");
            ApiResponse::db_err()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::news::application::domain::views::NewsDetailView;
    use crate::modules::news::application::use_cases::get_news_detail::{
        IGetNewsDetailUseCase, NewsDetailResponse,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::session_guard_data;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubNewsDetail {
        result: Result<NewsDetailResponse, GetNewsDetailError>,
        seen_viewer: Mutex<Option<Option<i32>>>,
    }

    #[async_trait]
    impl IGetNewsDetailUseCase for StubNewsDetail {
        async fn execute(
            &self,
            _: i32,
            viewer: Option<i32>,
        ) -> Result<NewsDetailResponse, GetNewsDetailError> {
            *self.seen_viewer.lock().unwrap() = Some(viewer);
            self.result.clone()
        }
    }

    fn detail_response() -> NewsDetailResponse {
        NewsDetailResponse {
            news: NewsDetailView {
                id: 5,
                title: "标题".into(),
                source: "来源".into(),
                digest: "摘要".into(),
                content: "正文".into(),
                clicks: 11,
                create_time: "2025-03-11 09:30:05".into(),
                index_image_url: None,
                comments_count: 4,
                category: None,
                author: None,
            },
            click_rank_list: vec![],
            is_collected: false,
            is_followed: false,
            comments: vec![],
        }
    }

    #[actix_web::test]
    async fn detail_works_without_a_session() {
        let app_state = TestAppStateBuilder::default()
            .with_get_news_detail(StubNewsDetail {
                result: Ok(detail_response()),
                seen_viewer: Mutex::new(None),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(session_guard_data(3, false))
                .service(news_detail_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/5").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["news"]["clicks"], 11);
    }

    #[actix_web::test]
    async fn missing_news_is_nodata() {
        let app_state = TestAppStateBuilder::default()
            .with_get_news_detail(StubNewsDetail {
                result: Err(GetNewsDetailError::NotFound),
                seen_viewer: Mutex::new(None),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(session_guard_data(3, false))
                .service(news_detail_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/999").to_request();
        let resp = test::call_service(&app, req).await;

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["errno"], 4002);
    }

    #[actix_web::test]
    async fn non_numeric_path_does_not_match() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(session_guard_data(3, false))
                .service(news_detail_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/not-a-number").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
