use anyhow::{Context, Result};
use common::{Catalog, Catalogs, Locale, RouteTable};
use model::Course;
use tracing::{debug, info, instrument};

use crate::config::Settings;
use crate::error::PageError;
use crate::pages::{RenderContext, render_home};
use crate::routes::build_route_table;

const BUILTIN_CATALOGS: [(Locale, &str); 2] = [
    (Locale::En, include_str!("../translations/en.yaml")),
    (Locale::Ha, include_str!("../translations/ha.yaml")),
];

/// Everything the pages are rendered from. Immutable once built.
#[derive(Debug)]
pub struct Site {
    pub catalogs: Catalogs,
    pub routes: RouteTable,
    pub courses: Vec<Course>,
    pub default_locale: Locale,
}

/// Catalogs compiled into the binary.
pub fn builtin_catalogs() -> Result<Catalogs> {
    let mut catalogs = Catalogs::new();
    for (locale, text) in BUILTIN_CATALOGS {
        catalogs.insert(Catalog::from_yaml_str(locale, text)?);
    }
    Ok(catalogs)
}

impl Site {
    #[instrument(skip_all)]
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut catalogs = builtin_catalogs()?;
        if let Some(dir) = &settings.translations_dir {
            info!("Loading translation overrides from {}", dir.display());
            catalogs
                .load_dir(dir)
                .with_context(|| format!("loading catalogs from {}", dir.display()))?;
        }

        let routes = build_route_table(&settings.routes).context("building route table")?;

        let courses = match &settings.courses_file {
            Some(path) => model::load_courses(path)?,
            None => {
                debug!("No course file configured, using sample courses");
                model::sample_courses()
            }
        };

        Ok(Self {
            catalogs,
            routes,
            courses,
            default_locale: settings.default_locale,
        })
    }

    /// Renders the home page for `locale` to a string.
    pub fn render_home(&self, locale: Locale) -> Result<String, PageError> {
        let catalog = self.catalogs.for_locale(locale);
        let ctx = RenderContext {
            locale,
            t: catalog.as_ref(),
            urls: &self.routes,
            courses: Some(&self.courses),
        };
        Ok(render_home(&ctx)?.into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::load(None).unwrap()
    }

    #[test]
    fn test_builtin_catalogs_cover_all_locales() {
        let catalogs = builtin_catalogs().unwrap();
        assert_eq!(catalogs.locales(), vec![Locale::En, Locale::Ha]);
    }

    #[test]
    fn test_sample_site_renders_in_hausa() {
        let site = Site::from_settings(&settings()).unwrap();
        assert_eq!(site.courses.len(), 3);

        let html = site.render_home(Locale::Ha).unwrap();
        assert!(html.contains("<html lang=\"ha\">"));
        assert!(html.contains("Jarabawar Kudi"));
        assert!(html.contains("Asalin Tattara Kudi"));
        assert!(html.contains("Ka Mallaki Harkokin Kudinka"));
        assert!(html.contains("Duba Lafiyar Kudinka"));
        assert!(html.contains("Tantance Harkokin Kudi"));
        assert!(html.contains("Koyo da Ci Gaba"));
        assert!(html.contains("Kwas kyauta"));
        assert!(!html.contains("Free course"));
        // untranslated strings keep their English defaults
        assert!(html.contains("Stay Informed"));
    }

    #[test]
    fn test_sample_budgeting_course_has_no_blurb() {
        let site = Site::from_settings(&settings()).unwrap();
        let html = site.render_home(Locale::En).unwrap();
        assert!(html.contains("Budgeting Learning 101"));
        assert!(!html.contains("Learn the basics of creating and managing a budget."));
        assert!(html.contains("Test your financial knowledge with our interactive quiz."));
    }

    #[test]
    fn test_course_file_and_translation_dir() {
        let dir = tempfile::tempdir().unwrap();
        let courses = dir.path().join("courses.json");
        std::fs::write(&courses, "[]").unwrap();
        std::fs::write(dir.path().join("en.yaml"), "home_hero_title: Own Your Money\n").unwrap();

        let mut settings = settings();
        settings.courses_file = Some(courses);
        settings.translations_dir = Some(dir.path().to_path_buf());

        let site = Site::from_settings(&settings).unwrap();
        assert!(site.courses.is_empty());
        let html = site.render_home(Locale::En).unwrap();
        assert!(html.contains("Own Your Money"));
        assert!(html.contains("data-course-fallback"));
        // built-in entries survive the merge
        assert!(html.contains("Ficore Africa"));
    }

    #[test]
    fn test_hausa_premium_badge() {
        let mut site = Site::from_settings(&settings()).unwrap();
        for course in &mut site.courses {
            course.is_premium = true;
        }
        let html = site.render_home(Locale::Ha).unwrap();
        assert_eq!(html.matches("Kwas na musamman").count(), 3);
        assert!(!html.contains("Kwas kyauta"));
    }

    #[test]
    fn test_hausa_course_fallback() {
        let mut site = Site::from_settings(&settings()).unwrap();
        site.courses.clear();
        let html = site.render_home(Locale::Ha).unwrap();
        assert!(html.contains("Babu kwasa-kwasai a yanzu."));
        assert!(html.contains("Duba dukkan kwasa-kwasai"));
        assert!(!html.contains("No courses are available right now."));
    }

    #[test]
    fn test_missing_catalog_renders_defaults() {
        let mut site = Site::from_settings(&settings()).unwrap();
        site.catalogs = Catalogs::new();
        let html = site.render_home(Locale::Ha).unwrap();
        assert!(html.contains("<html lang=\"ha\">"));
        assert!(html.contains("Financial Assessment"));
        assert!(html.contains("Savings Basics"));
    }

    #[test]
    fn test_unregistered_route_fails() {
        let mut site = Site::from_settings(&settings()).unwrap();
        site.routes.remove(crate::routes::TAXATION);
        let err = site.render_home(Locale::En).unwrap_err();
        assert!(err.to_string().contains("taxation.calculate_tax"));
    }
}
