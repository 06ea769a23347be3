use axum::{
    extract::{Query, State},
    http::{HeaderMap, header},
};
use axum_valid::Valid;
use common::Locale;
use maud::{Markup, PreEscaped};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument, trace};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::PageError;
use crate::schemas::AppState;

/// Query parameters for the home page
#[derive(Debug, Deserialize, Serialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct HomeQuery {
    /// Language code (e.g. `en`, `ha`); unsupported codes fall back to the default
    #[validate(length(min = 2, max = 16))]
    pub lang: Option<String>,
}

/// Picks the page locale: explicit `lang` query, then `Accept-Language`, then the default.
pub fn resolve_locale(query: &HomeQuery, headers: &HeaderMap, default: Locale) -> Locale {
    if let Some(locale) = query.lang.as_deref().and_then(Locale::parse) {
        trace!(%locale, "locale from query");
        return locale;
    }
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(Locale::from_accept_language)
        .unwrap_or(default)
}

/// Render the home page
#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    params(HomeQuery),
    responses(
        (status = 200, description = "Rendered home page", body = String, content_type = "text/html"),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "A linked route could not be resolved", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state, headers))]
pub async fn home_page(
    Valid(Query(query)): Valid<Query<HomeQuery>>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Markup, PageError> {
    let locale = resolve_locale(&query, &headers, state.site.default_locale);
    debug!("Serving home page for locale {}", locale);

    let site = Arc::clone(&state.site);
    let page = state
        .cache
        .try_get_with(locale, async move { site.render_home(locale).map(Arc::new) })
        .await
        .map_err(|e: Arc<PageError>| (*e).clone())?;

    Ok(PreEscaped(page.as_ref().clone()))
}
