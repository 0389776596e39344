//! `axe-scan summary`

use super::{messages, scan_into, BrowserSettings, ScanInput};
use anyhow::Result;
use axe_scan_common::{load_config, ConfigPaths, ConfigScope, MessageKey};
use axe_scan_report::{PageReport, SummaryReport};
use std::path::PathBuf;
use tracing::info;

pub async fn run(
    settings: &BrowserSettings,
    file: Option<PathBuf>,
    allowlist: Option<PathBuf>,
    by_page: bool,
) -> Result<()> {
    let paths = ConfigPaths::from_env()?;
    let config = load_config(&paths, ConfigScope::Current)?;
    let input = ScanInput::load(&config, file, allowlist.as_deref())?;

    info!("{}", messages(&config).text(MessageKey::Summarizing));

    let mut report = SummaryReport::new(config.axe_core_tags.clone(), by_page, input.allowlist);
    scan_into(settings, &config, &input.urls, &mut report).await?;

    println!("{}", report.render()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::scan_pages;
    use crate::commands::testing::{urls, FakeScanner};
    use axe_scan_common::{Config, VERSION};
    use axe_scan_report::{Allowlist, SUMMARY_HEADER};
    use serde_json::json;

    fn scanner() -> FakeScanner {
        let image = |html: &str| {
            json!({
                "id": "image-alt",
                "impact": "critical",
                "tags": ["cat.text-alternatives", "wcag2a", "wcag111"],
                "nodes": [{"html": html, "target": ["img"]}]
            })
        };
        FakeScanner::default()
            .with_page("https://a.example/", json!({"violations": [image("<img src=a.png>")]}))
            .with_page("https://b.example/", json!({"passes": [image("<img src=b.png alt=b>")]}))
    }

    async fn render(by_page: bool, allowlist: Option<Allowlist>) -> String {
        let config = Config::default();
        let mut report = SummaryReport::new(config.axe_core_tags.clone(), by_page, allowlist);
        scan_pages(
            &scanner(),
            &urls(&["https://a.example/", "https://b.example/"]),
            &mut report,
        )
        .await
        .unwrap();
        report.render().unwrap()
    }

    #[tokio::test]
    async fn test_all_pages_combined() {
        let expected = format!("{}\nALL,1.1.1,A,VIOLATION,{}", SUMMARY_HEADER, VERSION);
        assert_eq!(render(false, None).await, expected);
    }

    #[tokio::test]
    async fn test_by_page() {
        let expected = format!(
            "{}\nhttps://a.example/,1.1.1,A,VIOLATION,{v}\nhttps://b.example/,1.1.1,A,PASS,{v}",
            SUMMARY_HEADER,
            v = VERSION
        );
        assert_eq!(render(true, None).await, expected);
    }

    #[tokio::test]
    async fn test_allowlisted_violation_passes() {
        let allowlist = Allowlist::from_reader(
            "URL,Rule Type,Result Type,Rule Set,Impact,HTML Element,DOM Element,WCAG Criteria\n\
             https://a.example/,image-alt,violations,wcag2a,critical,<img src=a.png>,img,1.1.1\n"
                .as_bytes(),
        )
        .unwrap();

        let expected = format!("{}\nALL,1.1.1,A,PASS,{}", SUMMARY_HEADER, VERSION);
        assert_eq!(render(false, Some(allowlist)).await, expected);
    }
}
