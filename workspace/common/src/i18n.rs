//! Translation catalogs and the `t(key, default)` lookup used by the pages.
//!
//! A lookup never fails: a key that is absent from the active catalog, or
//! present with a blank value, resolves to the caller's default string.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, trace, warn};
use utoipa::ToSchema;

/// Languages the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// Hausa.
    Ha,
}

/// Every supported locale, default first.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Ha];

impl Locale {
    /// Canonical language code, also used for catalog file names.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ha => "ha",
        }
    }

    /// Parses a language tag, ignoring case and any region subtag
    /// (`ha-NG`, `en_GB`).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or_default();
        match lang {
            "en" => Some(Self::En),
            "ha" => Some(Self::Ha),
            _ => None,
        }
    }

    /// Picks the supported language with the highest `q` weight from an
    /// `Accept-Language` header. A missing weight counts as 1, `q=0` refuses
    /// the language, and ties go to the entry listed first.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut best: Option<(Self, f32)> = None;
        for entry in header.split(',') {
            let mut parts = entry.split(';');
            let Some(locale) = parts.next().and_then(Self::parse) else {
                continue;
            };
            let weight = parts
                .find_map(|param| {
                    let (name, value) = param.split_once('=')?;
                    if name.trim().eq_ignore_ascii_case("q") {
                        value.trim().parse::<f32>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(1.0)
                .clamp(0.0, 1.0);
            if weight <= 0.0 {
                continue;
            }
            if best.is_none_or(|(_, top)| weight > top) {
                best = Some((locale, weight));
            }
        }
        best.map(|(locale, _)| locale)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CatalogError::UnsupportedLocale(s.to_string()))
    }
}

/// Errors raised while loading translation catalogs.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog for locale '{locale}': {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Locale-aware string lookup with a mandatory fallback.
pub trait Translator: Send + Sync {
    /// Raw catalog entry for `key`, if any.
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Resolves `key`, falling back to `default` when the entry is missing
    /// or blank.
    fn t(&self, key: &str, default: &str) -> String {
        match self.lookup(key) {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            _ => {
                trace!(key, "translation missing, using default");
                default.to_string()
            }
        }
    }
}

impl Translator for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Flat `key -> message` table for one locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: Locale,
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            messages: HashMap::new(),
        }
    }

    /// Parses a YAML mapping of `key: message` pairs.
    pub fn from_yaml_str(locale: Locale, text: &str) -> Result<Self, CatalogError> {
        let messages: Option<HashMap<String, String>> = serde_yaml::from_str(text)
            .map_err(|source| CatalogError::Parse { locale, source })?;
        let messages = messages.unwrap_or_default();
        debug!(%locale, entries = messages.len(), "parsed translation catalog");
        Ok(Self { locale, messages })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    /// Copies every entry of `other` into this catalog, replacing existing keys.
    pub fn merge(&mut self, other: Catalog) {
        self.messages.extend(other.messages);
    }
}

impl Translator for Catalog {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }
}

/// The catalogs of every loaded locale.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    catalogs: HashMap<Locale, Catalog>,
}

impl Catalogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a catalog, merging into any catalog already present for its locale.
    pub fn insert(&mut self, catalog: Catalog) {
        match self.catalogs.get_mut(&catalog.locale) {
            Some(existing) => existing.merge(catalog),
            None => {
                self.catalogs.insert(catalog.locale, catalog);
            }
        }
    }

    /// Catalog for `locale`, or an empty one so every lookup yields its default.
    pub fn for_locale(&self, locale: Locale) -> Cow<'_, Catalog> {
        match self.catalogs.get(&locale) {
            Some(catalog) => Cow::Borrowed(catalog),
            None => Cow::Owned(Catalog::new(locale)),
        }
    }

    /// Locales that have a catalog, in `SUPPORTED_LOCALES` order.
    pub fn locales(&self) -> Vec<Locale> {
        SUPPORTED_LOCALES
            .iter()
            .copied()
            .filter(|locale| self.catalogs.contains_key(locale))
            .collect()
    }

    /// Reads `<dir>/<code>.yaml` for each supported locale that has a file
    /// and merges it over the catalogs already held.
    pub fn load_dir(&mut self, dir: &Path) -> Result<(), CatalogError> {
        for locale in SUPPORTED_LOCALES {
            let path = dir.join(format!("{}.yaml", locale.code()));
            if !path.exists() {
                warn!(path = %path.display(), "no catalog file for locale {}", locale);
                continue;
            }
            let text = std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "loading translation catalog");
            self.insert(Catalog::from_yaml_str(*locale, &text)?);
        }
        Ok(())
    }
}
