use anyhow::{anyhow, Context, Result};
use common::Locale;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{info, debug, error};

use crate::config::Settings;
use crate::site::Site;

pub async fn render(
    config_path: Option<&Path>,
    locale: Option<&str>,
    courses: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let mut settings = Settings::load(config_path)?;
    if let Some(courses) = courses {
        settings.courses_file = Some(courses.to_path_buf());
    }

    let locale = match locale {
        Some(code) => Locale::parse(code).ok_or_else(|| anyhow!("Unsupported locale: {}", code))?,
        None => settings.default_locale,
    };
    debug!("Rendering home page for locale {}", locale);

    let site = Site::from_settings(&settings)?;
    let html = match site.render_home(locale) {
        Ok(html) => html,
        Err(e) => {
            error!("Failed to render home page: {}", e);
            return Err(e.into());
        }
    };

    match output {
        Some(path) => {
            tokio::fs::write(path, &html)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(html.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("index.html");

        render(None, Some("ha"), None, Some(&output)).await.unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("<html lang=\"ha\">"));
        assert!(html.contains("Jarabawar Kudi"));
    }

    #[tokio::test]
    async fn test_render_rejects_unknown_locale() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("index.html");

        let err = render(None, Some("xx"), None, Some(&output)).await.unwrap_err();
        assert!(err.to_string().contains("Unsupported locale"));
        assert!(!output.exists());
    }
}
