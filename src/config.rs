use anyhow::Result;
use common::Locale;
use config::{Config, ConfigError, Environment, File};
use moka::future::Cache;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::routes::RouteOverride;
use crate::schemas::AppState;
use crate::site::Site;

/// Runtime settings, layered from defaults, an optional config file and
/// `FICORE_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Address the web server binds to (IP:PORT)
    pub bind_address: String,
    /// Locale used when the request does not ask for a supported one
    pub default_locale: Locale,
    /// Directory holding `<code>.yaml` catalogs that override the built-in ones
    #[serde(default)]
    pub translations_dir: Option<PathBuf>,
    /// YAML or JSON course list; the built-in sample courses are used when unset
    #[serde(default)]
    pub courses_file: Option<PathBuf>,
    pub request_timeout_secs: u64,
    pub page_cache_ttl_secs: u64,
    /// Remounted or additional named routes
    #[serde(default)]
    pub routes: Vec<RouteOverride>,
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("default_locale", Locale::En.code())?
            .set_default("request_timeout_secs", 30_i64)?
            .set_default("page_cache_ttl_secs", 300_i64)?;

        if let Some(path) = path {
            debug!("Reading settings from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix("FICORE").try_parsing(true))
            .build()?
            .try_deserialize()?;
        debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Initialize application state from settings
pub async fn initialize_app_state(settings: &Settings) -> Result<AppState> {
    let site = Site::from_settings(settings)?;
    info!(
        "Site ready: {} courses, locales {:?}",
        site.courses.len(),
        site.catalogs.locales()
    );

    // Rendered pages only change on restart; the TTL bounds memory for stale locales
    let cache = Cache::builder()
        .max_capacity(64)
        .time_to_live(Duration::from_secs(settings.page_cache_ttl_secs))
        .build();

    Ok(AppState {
        site: Arc::new(site),
        cache,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.default_locale, Locale::En);
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
        assert_eq!(settings.page_cache_ttl_secs, 300);
        assert!(settings.courses_file.is_none());
        assert!(settings.routes.is_empty());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ficore.toml");
        std::fs::write(
            &path,
            "default_locale = \"ha\"\nbind_address = \"127.0.0.1:8080\"\n\n[[routes]]\nname = \"news.news_list\"\npath = \"/articles/\"\n",
        )
        .unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.default_locale, Locale::Ha);
        assert_eq!(settings.bind_address, "127.0.0.1:8080");
        assert_eq!(
            settings.routes,
            vec![RouteOverride {
                name: "news.news_list".to_string(),
                path: "/articles/".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/ficore.toml"))).is_err());
    }
}
