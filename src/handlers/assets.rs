use axum::{http::header, response::IntoResponse};

const HOME_SCRIPT: &str = include_str!("../../static/js/home.js");

/// Serve the home page script (carousel and journey-step navigation)
pub async fn home_script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        HOME_SCRIPT,
    )
}
