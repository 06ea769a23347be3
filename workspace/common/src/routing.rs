//! Named routes and URL generation.
//!
//! A route pattern is an absolute path whose segments may be `:name`
//! placeholders. Generating a URL fills the placeholders from the supplied
//! parameters; every parameter that is not a placeholder is appended as a
//! form-encoded query string, in the order given.

use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors raised while registering routes or generating URLs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Could not build url for endpoint '{0}'")]
    UnknownRoute(String),

    #[error("Could not build url for endpoint '{route}': missing value for '{param}'")]
    MissingParam { route: String, param: String },

    #[error("Invalid value '{value}' for path parameter '{param}' of endpoint '{route}'")]
    InvalidParam {
        route: String,
        param: String,
        value: String,
    },

    #[error("Invalid route pattern '{0}'")]
    InvalidPattern(String),

    #[error("Failed to encode query string: {0}")]
    Query(String),
}

/// Resolves a symbolic route name plus parameters to a URL.
pub trait UrlFor: Send + Sync {
    fn url_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed route pattern such as `/quiz/` or `/courses/:course_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
    trailing_slash: bool,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(RouteError::InvalidPattern(pattern.to_string()));
        };

        let mut segments = Vec::new();
        for part in rest.split('/').filter(|part| !part.is_empty()) {
            match part.strip_prefix(':') {
                Some("") => return Err(RouteError::InvalidPattern(pattern.to_string())),
                Some(name) => segments.push(Segment::Param(name.to_string())),
                None => segments.push(Segment::Literal(part.to_string())),
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
            trailing_slash: pattern.len() > 1 && pattern.ends_with('/'),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in path order.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Builds the URL for this pattern. `route` is only used for error messages.
    pub fn build(&self, route: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == name.as_str())
                        .map(|(_, value)| *value)
                        .ok_or_else(|| RouteError::MissingParam {
                            route: route.to_string(),
                            param: name.clone(),
                        })?;
                    if !is_path_safe(value) {
                        return Err(RouteError::InvalidParam {
                            route: route.to_string(),
                            param: name.clone(),
                            value: value.to_string(),
                        });
                    }
                    path.push_str(value);
                }
            }
        }
        if path.is_empty() || self.trailing_slash {
            path.push('/');
        }

        let query: Vec<(&str, &str)> = params
            .iter()
            .filter(|(key, _)| !self.params().any(|name| name == *key))
            .copied()
            .collect();
        if !query.is_empty() {
            let encoded = serde_urlencoded::to_string(&query)
                .map_err(|e| RouteError::Query(e.to_string()))?;
            path.push('?');
            path.push_str(&encoded);
        }

        Ok(path)
    }
}

fn is_path_safe(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

/// Registry of named routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: BTreeMap<String, RoutePattern>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name`, replacing any previous pattern for it.
    pub fn insert(&mut self, name: impl Into<String>, pattern: &str) -> Result<(), RouteError> {
        let name = name.into();
        let pattern = RoutePattern::parse(pattern)?;
        debug!(route = %name, pattern = pattern.as_str(), "registering route");
        self.routes.insert(name, pattern);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<RoutePattern> {
        self.routes.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl UrlFor for RouteTable {
    fn url_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let pattern = self
            .routes
            .get(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;
        let url = pattern.build(name, params)?;
        trace!(route = name, %url, "resolved url");
        Ok(url)
    }
}
