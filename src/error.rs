use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::RouteError;
use thiserror::Error;
use tracing::error;

use crate::schemas::ErrorResponse;

/// Error types for page rendering
#[derive(Error, Debug, Clone)]
pub enum PageError {
    /// A link on the page points at a route the application cannot resolve
    #[error("Route error: {0}")]
    Route(#[from] RouteError),
}

impl PageError {
    pub fn code(&self) -> &'static str {
        match self {
            PageError::Route(_) => "PAGE_RENDER_ERROR",
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!("Failed to render page: {}", self);
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            success: false,
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
