//! axe-scan configuration file handling.
//!
//! The configuration lives in `axe-scan.config.json`, either in the current
//! directory or in the user's home directory. Keys missing from the file fall
//! back to the built-in defaults.

use crate::error::{Error, Result};
use crate::result_type::ResultType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "axe-scan.config.json";

/// Keys accepted by `axe-scan config --change-value`.
pub const CONFIG_KEYS: [&str; 4] = ["axeCoreTags", "resultTypes", "filePath", "locale"];

/// axe-scan settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// axe-core tags used to select the rules to run.
    pub axe_core_tags: Vec<String>,
    /// Result types written by `axe-scan run`.
    pub result_types: Vec<ResultType>,
    /// Default URL list file.
    pub file_path: String,
    /// Locale for messages and axe-core output.
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            axe_core_tags: ["wcag2a", "wcag2aa", "wcag21a", "wcag21aa"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            result_types: vec![ResultType::Incomplete, ResultType::Violations],
            file_path: "./urls.txt".to_string(),
            locale: "en".to_string(),
        }
    }
}

/// Error raised by [`Config::apply_change`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigChangeError {
    #[error("No key=value pair was given")]
    MissingKeyValue,

    #[error("Invalid configuration key: {0}")]
    InvalidKey(String),

    #[error("Invalid value for resultTypes: {0}")]
    InvalidResultTypes(String),
}

impl Config {
    /// Current settings as `(key, JSON value)` pairs sorted by key.
    pub fn settings(&self) -> Result<Vec<(String, String)>> {
        Ok(vec![
            ("axeCoreTags".to_string(), serde_json::to_string(&self.axe_core_tags)?),
            ("filePath".to_string(), serde_json::to_string(&self.file_path)?),
            ("locale".to_string(), serde_json::to_string(&self.locale)?),
            ("resultTypes".to_string(), serde_json::to_string(&self.result_types)?),
        ])
    }

    /// Apply a `key=value` change. List keys take comma-separated values.
    pub fn apply_change(&mut self, key_value: &str) -> std::result::Result<(), ConfigChangeError> {
        let (key, value) = key_value
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or(ConfigChangeError::MissingKeyValue)?;
        let key = key.trim();
        let value = value.trim();

        match key {
            "axeCoreTags" => {
                self.axe_core_tags = split_list(value);
            }
            "resultTypes" => {
                let result_types = split_list(value)
                    .iter()
                    .map(|v| v.parse::<ResultType>())
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|_| ConfigChangeError::InvalidResultTypes(value.to_string()))?;
                self.result_types = result_types;
            }
            "filePath" => self.file_path = value.to_string(),
            "locale" => self.locale = value.to_string(),
            _ => return Err(ConfigChangeError::InvalidKey(key.to_string())),
        }

        Ok(())
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Where a configuration file is looked up first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// Current directory, then home directory.
    Current,
    /// Home directory only.
    Home,
}

/// Directories that may hold a configuration file.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub current_dir: PathBuf,
    pub home_dir: Option<PathBuf>,
}

impl ConfigPaths {
    pub fn new(current_dir: impl Into<PathBuf>, home_dir: Option<PathBuf>) -> Self {
        Self {
            current_dir: current_dir.into(),
            home_dir,
        }
    }

    /// Paths for the running process.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            current_dir: std::env::current_dir()?,
            home_dir: dirs::home_dir(),
        })
    }

    pub fn current_file(&self) -> PathBuf {
        self.current_dir.join(CONFIG_FILE_NAME)
    }

    pub fn home_file(&self) -> Option<PathBuf> {
        self.home_dir.as_ref().map(|home| home.join(CONFIG_FILE_NAME))
    }

    /// The file a scope writes to.
    pub fn file_for(&self, scope: ConfigScope) -> Result<PathBuf> {
        match scope {
            ConfigScope::Current => Ok(self.current_file()),
            ConfigScope::Home => self.home_file().ok_or(Error::NoHomeDir),
        }
    }
}

/// Resolve the active configuration for a scope, falling back to defaults.
pub fn load_config(paths: &ConfigPaths, scope: ConfigScope) -> Result<Config> {
    let candidates = match scope {
        ConfigScope::Current => vec![Some(paths.current_file()), paths.home_file()],
        ConfigScope::Home => vec![paths.home_file()],
    };

    for path in candidates.into_iter().flatten() {
        if path.is_file() {
            debug!("Using config file {:?}", path);
            return read_config_file(&path);
        }
    }

    debug!("No config file found, using defaults");
    Ok(Config::default())
}

/// Read a single configuration file, filling in defaults for absent keys.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a configuration file.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Dirs {
        _tmp: TempDir,
        paths: ConfigPaths,
    }

    fn dirs() -> Dirs {
        let tmp = TempDir::new().unwrap();
        let current = tmp.path().join("work");
        let home = tmp.path().join("home");
        std::fs::create_dir_all(&current).unwrap();
        std::fs::create_dir_all(&home).unwrap();
        Dirs {
            paths: ConfigPaths::new(current, Some(home)),
            _tmp: tmp,
        }
    }

    fn write(path: &Path, json: &str) {
        std::fs::write(path, json).unwrap();
    }

    #[test]
    fn test_defaults_without_config_file() {
        let d = dirs();
        let config = load_config(&d.paths, ConfigScope::Current).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.axe_core_tags,
            vec!["wcag2a", "wcag2aa", "wcag21a", "wcag21aa"]
        );
        assert_eq!(
            config.result_types,
            vec![ResultType::Incomplete, ResultType::Violations]
        );
        assert_eq!(config.file_path, "./urls.txt");
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn test_present_keys_override_defaults() {
        let d = dirs();
        write(
            &d.paths.current_file(),
            r#"{"axeCoreTags":["wcag21aa"],"filePath":"./mock-urls-local.txt","locale":"ja"}"#,
        );

        let config = load_config(&d.paths, ConfigScope::Current).unwrap();
        assert_eq!(config.axe_core_tags, vec!["wcag21aa"]);
        assert_eq!(
            config.result_types,
            vec![ResultType::Incomplete, ResultType::Violations]
        );
        assert_eq!(config.file_path, "./mock-urls-local.txt");
        assert_eq!(config.locale, "ja");
    }

    #[test]
    fn test_current_dir_wins_over_home() {
        let d = dirs();
        write(&d.paths.current_file(), r#"{"locale":"ja"}"#);
        write(&d.paths.home_file().unwrap(), r#"{"locale":"fr"}"#);

        let config = load_config(&d.paths, ConfigScope::Current).unwrap();
        assert_eq!(config.locale, "ja");
    }

    #[test]
    fn test_current_scope_falls_back_to_home() {
        let d = dirs();
        write(
            &d.paths.home_file().unwrap(),
            r#"{"resultTypes":["incomplete","violations","passes"],"filePath":"./mock-urls-global.txt"}"#,
        );

        let config = load_config(&d.paths, ConfigScope::Current).unwrap();
        assert_eq!(
            config.result_types,
            vec![
                ResultType::Incomplete,
                ResultType::Violations,
                ResultType::Passes
            ]
        );
        assert_eq!(config.file_path, "./mock-urls-global.txt");
        assert_eq!(config.axe_core_tags, Config::default().axe_core_tags);
    }

    #[test]
    fn test_home_scope_ignores_current_dir() {
        let d = dirs();
        write(&d.paths.current_file(), r#"{"locale":"ja"}"#);

        let config = load_config(&d.paths, ConfigScope::Home).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let d = dirs();
        write(&d.paths.current_file(), r#"{"encoding":"utf8","locale":"ja"}"#);

        let config = load_config(&d.paths, ConfigScope::Current).unwrap();
        assert_eq!(config.locale, "ja");
    }

    #[test]
    fn test_malformed_config_names_the_file() {
        let d = dirs();
        write(&d.paths.current_file(), "{not json");

        let err = load_config(&d.paths, ConfigScope::Current).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_save_then_load() {
        let d = dirs();
        let mut config = Config::default();
        config.locale = "ja".to_string();
        save_config(&d.paths.current_file(), &config).unwrap();

        assert_eq!(read_config_file(&d.paths.current_file()).unwrap(), config);
    }

    #[test]
    fn test_missing_home_dir() {
        let paths = ConfigPaths::new("/tmp", None);
        assert!(matches!(
            paths.file_for(ConfigScope::Home),
            Err(Error::NoHomeDir)
        ));
    }

    #[test]
    fn test_settings_are_sorted() {
        let keys: Vec<String> = Config::default()
            .settings()
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["axeCoreTags", "filePath", "locale", "resultTypes"]);

        let settings = Config::default().settings().unwrap();
        assert_eq!(
            settings[3],
            (
                "resultTypes".to_string(),
                r#"["incomplete","violations"]"#.to_string()
            )
        );
    }

    #[test]
    fn test_settings_match_config_keys() {
        let mut config = Config::default();
        config.apply_change("filePath=./pages, list.txt").unwrap();
        let settings = config.settings().unwrap();

        let keys: Vec<&str> = settings.iter().map(|(k, _)| k.as_str()).collect();
        let mut expected = CONFIG_KEYS.to_vec();
        expected.sort();
        assert_eq!(keys, expected);
        assert_eq!(settings[1].1, r#""./pages, list.txt""#);
    }

    #[test]
    fn test_apply_change_lists() {
        let mut config = Config::default();
        config
            .apply_change("resultTypes=incomplete,violations,passes")
            .unwrap();
        assert_eq!(
            config.result_types,
            vec![
                ResultType::Incomplete,
                ResultType::Violations,
                ResultType::Passes
            ]
        );

        config.apply_change("axeCoreTags=wcag2aa").unwrap();
        assert_eq!(config.axe_core_tags, vec!["wcag2aa"]);
    }

    #[test]
    fn test_apply_change_scalars() {
        let mut config = Config::default();
        config.apply_change("filePath=./list.txt").unwrap();
        config.apply_change("locale=ja").unwrap();
        assert_eq!(config.file_path, "./list.txt");
        assert_eq!(config.locale, "ja");
    }

    #[test]
    fn test_apply_change_rejects_bad_input() {
        let mut config = Config::default();
        assert_eq!(
            config.apply_change("resultTypes=violations,failures"),
            Err(ConfigChangeError::InvalidResultTypes(
                "violations,failures".to_string()
            ))
        );
        assert_eq!(
            config.apply_change("encoding=utf8"),
            Err(ConfigChangeError::InvalidKey("encoding".to_string()))
        );
        assert_eq!(
            config.apply_change("locale"),
            Err(ConfigChangeError::MissingKeyValue)
        );
        assert_eq!(
            config.apply_change(""),
            Err(ConfigChangeError::MissingKeyValue)
        );
        assert_eq!(config, Config::default());
    }
}
