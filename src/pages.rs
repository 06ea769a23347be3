//! Server-rendered HTML pages.

pub mod home;
pub mod layout;

use common::{Locale, Translator, UrlFor};
use model::Course;

pub use home::render_home;

/// Everything a page needs from the hosting application.
///
/// Translation and URL generation are injected so pages stay independent of
/// where catalogs and routes come from.
pub struct RenderContext<'a> {
    pub locale: Locale,
    pub t: &'a dyn Translator,
    pub urls: &'a dyn UrlFor,
    pub courses: Option<&'a [Course]>,
}

/// A translatable string: catalog key plus the text used when the key is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub key: &'static str,
    pub default: &'static str,
}

impl Text {
    pub const fn new(key: &'static str, default: &'static str) -> Self {
        Self { key, default }
    }
}

impl RenderContext<'_> {
    pub fn tr(&self, text: Text) -> String {
        self.t.t(text.key, text.default)
    }
}
