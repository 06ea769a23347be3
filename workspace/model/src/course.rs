use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

/// Error types for loading course data
#[derive(Error, Debug)]
pub enum ModelError {
    /// The course file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML course file did not match the course schema
    #[error("Invalid YAML course file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON course file did not match the course schema
    #[error("Invalid JSON course file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File extension is neither yaml/yml nor json
    #[error("Unsupported course file format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// A learning hub course, as listed on the home page.
///
/// Owned by the learning hub; the pages only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    /// Stable course identifier (e.g. `savings_basics`)
    pub id: String,
    /// Translation key for the course title
    pub title_key: String,
    /// English title, used when the key has no translation
    pub title_en: String,
    /// Hausa title as published by the learning hub
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_ha: Option<String>,
    /// Learning hub's own English summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    /// Learning hub's own Hausa summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_ha: Option<String>,
    /// Whether the course requires a premium account
    #[serde(default)]
    pub is_premium: bool,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        title_key: impl Into<String>,
        title_en: impl Into<String>,
        is_premium: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title_key: title_key.into(),
            title_en: title_en.into(),
            title_ha: None,
            description_en: None,
            description_ha: None,
            is_premium,
        }
    }
}

/// The courses shipped with the learning hub.
pub fn sample_courses() -> Vec<Course> {
    vec![
        Course {
            id: "budgeting_learning_101".to_string(),
            title_key: "learning_hub_course_budgeting101_title".to_string(),
            title_en: "Budgeting Learning 101".to_string(),
            title_ha: Some("Tsarin Kudi 101".to_string()),
            description_en: Some("Learn the basics of budgeting.".to_string()),
            description_ha: Some("Koyon asalin tsarin kudi.".to_string()),
            is_premium: false,
        },
        Course {
            id: "financial_quiz".to_string(),
            title_key: "learning_hub_course_financial_quiz_title".to_string(),
            title_en: "Financial Quiz".to_string(),
            title_ha: Some("Jarabawar Kudi".to_string()),
            description_en: Some("Test your financial knowledge.".to_string()),
            description_ha: Some("Gwada ilimin ku na kudi.".to_string()),
            is_premium: false,
        },
        Course {
            id: "savings_basics".to_string(),
            title_key: "learning_hub_course_savings_basics_title".to_string(),
            title_en: "Savings Basics".to_string(),
            title_ha: Some("Asalin Tattara Kudi".to_string()),
            description_en: Some("Understand how to save effectively.".to_string()),
            description_ha: Some("Fahimci yadda ake tattara kudi yadda ya kamata.".to_string()),
            is_premium: false,
        },
    ]
}

/// Loads an ordered course list from a `.yaml`/`.yml` or `.json` file.
#[instrument]
pub fn load_courses(path: &Path) -> Result<Vec<Course>, ModelError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let courses: Vec<Course> = match extension.as_deref() {
        Some("yaml" | "yml") => serde_yaml::from_str(&text).map_err(|source| ModelError::Yaml {
            path: path.to_path_buf(),
            source,
        })?,
        Some("json") => serde_json::from_str(&text).map_err(|source| ModelError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        _ => return Err(ModelError::UnsupportedFormat(path.to_path_buf())),
    };

    debug!(ids = ?courses.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), "parsed courses");
    info!("Loaded {} courses from {}", courses.len(), path.display());
    Ok(courses)
}
