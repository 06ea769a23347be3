#[cfg(test)]
mod integration_tests {
    use crate::schemas::{ErrorResponse, HealthResponse};
    use crate::test_utils::test_utils::{
        setup_test_app, setup_test_app_state, setup_test_app_with_state,
    };
    use axum::http::{header, StatusCode};
    use axum_test::TestServer;
    use common::Locale;
    use model::Course;
    use std::sync::Arc;

    fn budgeting_course() -> Course {
        Course::new("budgeting_101", "k1", "Budgeting Basics", false)
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app(model::sample_courses()).await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.courses, 3);
        assert_eq!(body.routes, 10);
        assert_eq!(body.locales, vec![Locale::En, Locale::Ha]);
    }

    #[tokio::test]
    async fn test_home_page_renders_html() {
        let app = setup_test_app(vec![budgeting_course()]).await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        let content_type = response.header(header::CONTENT_TYPE);
        assert!(content_type.to_str().unwrap().starts_with("text/html"));

        let html = response.text();
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("Learn the basics of creating and managing a budget."));
        assert!(html.contains("Free course"));
        assert_eq!(html.matches("course_id=budgeting_101").count(), 1);
    }

    #[tokio::test]
    async fn test_home_page_without_courses_shows_fallback() {
        let app = setup_test_app(Vec::new()).await;
        let server = TestServer::new(app).unwrap();

        let html = server.get("/").await.text();

        assert_eq!(html.matches("data-course-fallback").count(), 1);
        assert_eq!(html.matches("View all courses").count(), 1);
        assert_eq!(html.matches("data-course-entry").count(), 0);
    }

    #[tokio::test]
    async fn test_lang_query_selects_hausa() {
        let app = setup_test_app(model::sample_courses()).await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").add_query_param("lang", "ha").await;

        response.assert_status(StatusCode::OK);
        let html = response.text();
        assert!(html.contains("<html lang=\"ha\">"));
        assert!(html.contains("Tsarin Kudi 101"));
        assert!(!html.contains("Budgeting Learning 101"));
    }

    #[tokio::test]
    async fn test_accept_language_selects_hausa() {
        let app = setup_test_app(model::sample_courses()).await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/")
            .add_header(header::ACCEPT_LANGUAGE, header::HeaderValue::from_static("ha-NG,en;q=0.8"))
            .await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("Jarabawar Kudi"));
    }

    #[tokio::test]
    async fn test_accept_language_weights_are_honoured() {
        let app = setup_test_app(model::sample_courses()).await;
        let server = TestServer::new(app).unwrap();

        let refused = server
            .get("/")
            .add_header(header::ACCEPT_LANGUAGE, header::HeaderValue::from_static("ha;q=0, en"))
            .await;
        assert!(refused.text().contains("<html lang=\"en\">"));

        let weighted = server
            .get("/")
            .add_header(header::ACCEPT_LANGUAGE, header::HeaderValue::from_static("en;q=0.1, ha;q=0.9"))
            .await;
        assert!(weighted.text().contains("<html lang=\"ha\">"));
    }

    #[tokio::test]
    async fn test_unsupported_lang_uses_default() {
        let app = setup_test_app(model::sample_courses()).await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").add_query_param("lang", "fr").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("<html lang=\"en\">"));
    }

    #[tokio::test]
    async fn test_invalid_lang_is_rejected() {
        let app = setup_test_app(model::sample_courses()).await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").add_query_param("lang", "x").expect_failure().await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_route_returns_server_error() {
        let mut state = setup_test_app_state(vec![budgeting_course()]).await;
        let site = Arc::get_mut(&mut state.site).unwrap();
        site.routes.remove(crate::routes::BUDGET);

        let server = TestServer::new(setup_test_app_with_state(state)).unwrap();

        let response = server.get("/").expect_failure().await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "PAGE_RENDER_ERROR");
        assert!(body.error.contains("budget.main"));
    }

    #[tokio::test]
    async fn test_rendered_page_is_cached_per_locale() {
        let state = setup_test_app_state(vec![budgeting_course()]).await;
        let cache = state.cache.clone();
        let server = TestServer::new(setup_test_app_with_state(state)).unwrap();

        server.get("/").await.assert_status(StatusCode::OK);
        server.get("/").add_query_param("lang", "ha").await.assert_status(StatusCode::OK);
        server.get("/").await.assert_status(StatusCode::OK);

        cache.run_pending_tasks().await;
        assert_eq!(cache.entry_count(), 2);
        assert!(cache.contains_key(&Locale::En));
        assert!(cache.contains_key(&Locale::Ha));
    }

    #[tokio::test]
    async fn test_home_script_is_served() {
        let app = setup_test_app(Vec::new()).await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/static/js/home.js").await;

        response.assert_status(StatusCode::OK);
        let content_type = response.header(header::CONTENT_TYPE);
        assert!(content_type.to_str().unwrap().starts_with("application/javascript"));
        let script = response.text();
        assert!(script.contains("data-collapse-target"));
        assert!(script.contains("SCROLL_OFFSET = -60"));
        assert!(script.contains("EXPAND_DELAY_MS = 300"));
    }

    #[tokio::test]
    async fn test_prometheus_metrics_endpoint_disabled_in_tests() {
        let app = setup_test_app(Vec::new()).await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/metrics").expect_failure().await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let app = setup_test_app(Vec::new()).await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let doc: serde_json::Value = response.json();
        assert!(doc["paths"]["/health"].is_object());
        assert!(doc["paths"]["/"].is_object());
    }
}
