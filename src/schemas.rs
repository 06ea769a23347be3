use common::Locale;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::site::Site;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Catalogs, routes and courses the pages are rendered from
    pub site: Arc<Site>,
    /// Rendered home pages, one per locale
    pub cache: Cache<Locale, Arc<String>>,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Locales with a loaded catalog
    pub locales: Vec<Locale>,
    /// Number of courses listed on the home page
    pub courses: usize,
    /// Number of named routes the pages can link to
    pub routes: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::home::home_page,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            Locale,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "pages", description = "Server-rendered HTML pages"),
    ),
    info(
        title = "Ficore Africa",
        description = "Home page service for the Ficore Africa personal finance tools",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
