//! Loading the axe-core script and its locale files.
//!
//! axe-core is not bundled. The script is fetched from a URL or read from a
//! local file, and locale JSON is looked up in the `locales/` directory next
//! to the script, which is how the axe-core package is laid out.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, warn};

/// Where axe-core is loaded from when no `--axe-source` is given.
pub const DEFAULT_AXE_SOURCE: &str = "https://cdn.jsdelivr.net/npm/axe-core@4.10.2/axe.min.js";

/// Location of the axe-core script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxeSource {
    /// Fetched over HTTP(S).
    Url(String),
    /// Read from disk.
    File(PathBuf),
}

impl Default for AxeSource {
    fn default() -> Self {
        AxeSource::Url(DEFAULT_AXE_SOURCE.to_string())
    }
}

impl FromStr for AxeSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            anyhow::bail!("Empty axe-core source");
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(AxeSource::Url(s.to_string()))
        } else {
            Ok(AxeSource::File(PathBuf::from(s)))
        }
    }
}

impl std::fmt::Display for AxeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxeSource::Url(url) => write!(f, "{}", url),
            AxeSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Whether axe-core could ship a locale file with this name.
fn is_locale_name(locale: &str) -> bool {
    !locale.is_empty()
        && !locale.starts_with('_')
        && locale.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
}

impl AxeSource {
    /// Load the axe-core script source.
    pub async fn load_script(&self) -> Result<String> {
        debug!("Loading axe-core from {}", self);
        match self {
            AxeSource::Url(url) => {
                let response = reqwest::get(url)
                    .await
                    .with_context(|| format!("Failed to fetch axe-core from {}", url))?
                    .error_for_status()
                    .with_context(|| format!("Failed to fetch axe-core from {}", url))?;
                response
                    .text()
                    .await
                    .context("Failed to read axe-core response")
            }
            AxeSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read axe-core from {:?}", path)),
        }
    }

    /// Location of the axe-core locale file for `locale`.
    ///
    /// English is axe-core's built-in language, so it has no locale file.
    pub fn locale_location(&self, locale: &str) -> Option<AxeSource> {
        if locale == "en" || !is_locale_name(locale) {
            return None;
        }
        let file_name = format!("{}.json", locale);
        match self {
            AxeSource::Url(url) => {
                let (base, _script) = url.rsplit_once('/')?;
                Some(AxeSource::Url(format!("{}/locales/{}", base, file_name)))
            }
            AxeSource::File(path) => {
                let dir = path.parent().map(PathBuf::from).unwrap_or_default();
                Some(AxeSource::File(dir.join("locales").join(file_name)))
            }
        }
    }

    /// Load the axe-core locale for `locale`, if axe-core ships one.
    pub async fn load_locale(&self, locale: &str) -> Result<Option<Value>> {
        let Some(location) = self.locale_location(locale) else {
            return Ok(None);
        };

        let content = match &location {
            AxeSource::Url(url) => {
                let response = reqwest::get(url)
                    .await
                    .with_context(|| format!("Failed to fetch axe-core locale from {}", url))?;
                if response.status() == reqwest::StatusCode::NOT_FOUND {
                    warn!("No axe-core locale for {}, using English", locale);
                    return Ok(None);
                }
                response
                    .error_for_status()
                    .with_context(|| format!("Failed to fetch axe-core locale from {}", url))?
                    .text()
                    .await
                    .context("Failed to read axe-core locale response")?
            }
            AxeSource::File(path) => {
                if !path.is_file() {
                    warn!("No axe-core locale for {}, using English", locale);
                    return Ok(None);
                }
                std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read axe-core locale {:?}", path))?
            }
        };

        let value = serde_json::from_str(&content)
            .with_context(|| format!("Invalid axe-core locale file {}", location))?;
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            "https://unpkg.com/axe-core/axe.min.js".parse::<AxeSource>().unwrap(),
            AxeSource::Url("https://unpkg.com/axe-core/axe.min.js".to_string())
        );
        assert_eq!(
            "./node_modules/axe-core/axe.js".parse::<AxeSource>().unwrap(),
            AxeSource::File(PathBuf::from("./node_modules/axe-core/axe.js"))
        );
        assert!("  ".parse::<AxeSource>().is_err());
    }

    #[test]
    fn test_locale_location() {
        let source = AxeSource::default();
        assert_eq!(
            source.locale_location("ja"),
            Some(AxeSource::Url(
                "https://cdn.jsdelivr.net/npm/axe-core@4.10.2/locales/ja.json".to_string()
            ))
        );
        assert_eq!(source.locale_location("en"), None);
        assert_eq!(source.locale_location("_template"), None);
        assert_eq!(source.locale_location("../secrets"), None);

        let file = AxeSource::File(PathBuf::from("vendor/axe-core/axe.min.js"));
        assert_eq!(
            file.locale_location("pt_BR"),
            Some(AxeSource::File(PathBuf::from("vendor/axe-core/locales/pt_BR.json")))
        );
    }

    #[tokio::test]
    async fn test_load_from_files() {
        let temp = assert_fs::TempDir::new().unwrap();
        let script = temp.child("axe.min.js");
        script.write_str("window.axe = {};").unwrap();
        temp.child("locales").create_dir_all().unwrap();
        temp.child("locales/ja.json")
            .write_str(r#"{"lang": "ja"}"#)
            .unwrap();

        let source = AxeSource::File(script.path().to_path_buf());
        assert_eq!(source.load_script().await.unwrap(), "window.axe = {};");

        let locale = source.load_locale("ja").await.unwrap();
        assert_eq!(locale, Some(serde_json::json!({"lang": "ja"})));

        assert_eq!(source.load_locale("de").await.unwrap(), None);
        assert_eq!(source.load_locale("en").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_script_file() {
        let source = AxeSource::File(PathBuf::from("/nonexistent/axe.min.js"));
        assert!(source.load_script().await.is_err());
    }
}
