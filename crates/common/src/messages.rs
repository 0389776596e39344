//! Localized user-facing messages.

use crate::config::{ConfigChangeError, CONFIG_FILE_NAME};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Locale used when the requested one is unavailable.
pub const DEFAULT_LOCALE: &str = "en";

/// Locales with a message table.
pub const AVAILABLE_LOCALES: [&str; 2] = ["en", "ja"];

/// Message identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    InitCreated,
    InitUpdated,
    Running,
    Summarizing,
    PromptOverwrite,
    InitAbort,
    CurrentConfig,
    CurrentConfigSuffix,
    ConfigUpdated,
    ConfigFileNotFound,
    KeyValueNotSet,
    InvalidResultTypes,
    InvalidConfigKey,
}

// Placeholders: {file}, {path}, {global}, {key}.
fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::InitCreated => "{path} has been created.",
        MessageKey::InitUpdated => "{path} has been updated.",
        MessageKey::Running => "Running accessibility scan...",
        MessageKey::Summarizing => "Creating summarized report of the accessibility scan...",
        MessageKey::PromptOverwrite => "{path} already exists. Do you want to overwrite? (y/N)",
        MessageKey::InitAbort => "No overwriting. Aborting axe-scan initiation process.",
        MessageKey::CurrentConfig => "Current axe-scan settings:\n",
        MessageKey::CurrentConfigSuffix => {
            "\nTo change a setting, run `axe-scan config --change-value <key=value>`."
        }
        MessageKey::ConfigUpdated => "{file} has been updated.",
        MessageKey::ConfigFileNotFound => {
            "{path} was not found. Run `axe-scan init{global}` to create it first."
        }
        MessageKey::KeyValueNotSet => {
            "Designate the setting to change in the form of key=value, e.g. axe-scan config -V locale=en"
        }
        MessageKey::InvalidResultTypes => {
            "Invalid value for resultTypes. Choose from passes, violations, incomplete, and inapplicable."
        }
        MessageKey::InvalidConfigKey => {
            "{key} is not a valid configuration key. Choose from axeCoreTags, resultTypes, filePath, and locale."
        }
    }
}

fn japanese(key: MessageKey) -> &'static str {
    match key {
        MessageKey::InitCreated => "完了：設定ファイル {path} 新規作成",
        MessageKey::InitUpdated => "完了：設定ファイル {path} 更新",
        MessageKey::Running => "アクセシビリティ検査を実行中...",
        MessageKey::Summarizing => "アクセシビリティ検査報告書を作成中...",
        MessageKey::PromptOverwrite => "{path} はすでに存在します。上書きしますか？ (y/N)",
        MessageKey::InitAbort => {
            "中断：axe-scan 初期化を中断しました。設定ファイルは上書きされませんでした。"
        }
        MessageKey::CurrentConfig => "現在の axe-scan 設定：\n",
        MessageKey::CurrentConfigSuffix => {
            "\n設定を変更するには `axe-scan config --change-value <key=value>` を実行してください。"
        }
        MessageKey::ConfigUpdated => "完了：設定ファイル {file} 更新",
        MessageKey::ConfigFileNotFound => {
            "{path} が見つかりません。先に `axe-scan init{global}` を実行してください。"
        }
        MessageKey::KeyValueNotSet => {
            "変更する設定を key=value の形式で指定してください。例：axe-scan config -V locale=ja"
        }
        MessageKey::InvalidResultTypes => {
            "resultTypes の値が不正です。passes, violations, incomplete, inapplicable から選択してください。"
        }
        MessageKey::InvalidConfigKey => {
            "{key} は設定項目ではありません。axeCoreTags, resultTypes, filePath, locale から選択してください。"
        }
    }
}

static LOCALE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}(_[A-Za-z]{2})?$").unwrap());

/// Resolve a user locale to one with a message table.
///
/// `ja_JP` resolves to `ja`; anything unknown or malformed resolves to `en`.
pub fn resolve_locale(locale: &str) -> &'static str {
    if !LOCALE_PATTERN.is_match(locale) {
        return DEFAULT_LOCALE;
    }
    let two_letter = &locale[..2];
    AVAILABLE_LOCALES
        .iter()
        .find(|l| **l == locale)
        .or_else(|| AVAILABLE_LOCALES.iter().find(|l| **l == two_letter))
        .copied()
        .unwrap_or(DEFAULT_LOCALE)
}

/// Message table for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    locale: &'static str,
}

impl Messages {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: resolve_locale(locale),
        }
    }

    pub fn locale(&self) -> &'static str {
        self.locale
    }

    /// Raw message text.
    pub fn text(&self, key: MessageKey) -> &'static str {
        match self.locale {
            "ja" => japanese(key),
            _ => english(key),
        }
    }

    pub fn init_created(&self, path: &Path) -> String {
        self.text(MessageKey::InitCreated)
            .replace("{path}", &path.display().to_string())
    }

    pub fn init_updated(&self, path: &Path) -> String {
        self.text(MessageKey::InitUpdated)
            .replace("{path}", &path.display().to_string())
    }

    pub fn prompt_overwrite(&self, path: &Path) -> String {
        self.text(MessageKey::PromptOverwrite)
            .replace("{path}", &path.display().to_string())
    }

    pub fn config_updated(&self) -> String {
        self.text(MessageKey::ConfigUpdated)
            .replace("{file}", CONFIG_FILE_NAME)
    }

    pub fn config_file_not_found(&self, path: &Path, global: bool) -> String {
        self.text(MessageKey::ConfigFileNotFound)
            .replace("{path}", &path.display().to_string())
            .replace("{global}", if global { " --global" } else { "" })
    }

    /// Settings listing printed by `axe-scan config`.
    pub fn current_config(&self, settings: &[(String, String)]) -> String {
        let mut text = self.text(MessageKey::CurrentConfig).to_string();
        for (key, value) in settings {
            text.push_str(&format!("{}: {}\n", key, value));
        }
        text.push_str(self.text(MessageKey::CurrentConfigSuffix));
        text
    }

    /// User-facing text for a rejected `--change-value`.
    pub fn config_change_error(&self, err: &ConfigChangeError) -> String {
        match err {
            ConfigChangeError::MissingKeyValue => self.text(MessageKey::KeyValueNotSet).to_string(),
            ConfigChangeError::InvalidResultTypes(_) => {
                self.text(MessageKey::InvalidResultTypes).to_string()
            }
            ConfigChangeError::InvalidKey(key) => {
                self.text(MessageKey::InvalidConfigKey).replace("{key}", key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("en"), "en");
        assert_eq!(resolve_locale("ja"), "ja");
        assert_eq!(resolve_locale("ja_JP"), "ja");
        assert_eq!(resolve_locale("fr"), "en");
        assert_eq!(resolve_locale("fr_FR"), "en");
        assert_eq!(resolve_locale("japanese"), "en");
        assert_eq!(resolve_locale("ja-JP"), "en");
        assert_eq!(resolve_locale(""), "en");
    }

    #[test]
    fn test_localized_text() {
        let en = Messages::new("en");
        let ja = Messages::new("ja_JP");
        assert_eq!(en.text(MessageKey::Running), "Running accessibility scan...");
        assert_eq!(ja.text(MessageKey::Running), "アクセシビリティ検査を実行中...");
    }

    #[test]
    fn test_placeholders() {
        let en = Messages::new("en");
        let path = Path::new("/home/me/axe-scan.config.json");
        assert_eq!(
            en.init_created(path),
            "/home/me/axe-scan.config.json has been created."
        );
        assert!(en
            .config_file_not_found(path, true)
            .contains("axe-scan init --global"));
        assert!(en
            .config_file_not_found(path, false)
            .contains("`axe-scan init`"));
        assert_eq!(
            en.config_change_error(&ConfigChangeError::InvalidKey("encoding".into())),
            "encoding is not a valid configuration key. Choose from axeCoreTags, resultTypes, filePath, and locale."
        );
    }

    #[test]
    fn test_current_config_listing() {
        let en = Messages::new("en");
        let text = en.current_config(&[
            ("filePath".to_string(), "\"./urls.txt\"".to_string()),
            ("locale".to_string(), "\"en\"".to_string()),
        ]);
        assert!(text.starts_with("Current axe-scan settings:\nfilePath: \"./urls.txt\"\nlocale: \"en\"\n"));
        assert!(text.ends_with("`axe-scan config --change-value <key=value>`."));
    }
}
