//! Subcommand handlers.

pub mod config;
pub mod init;
pub mod run;
pub mod summary;

use anyhow::{Context, Result};
use axe_scan_common::{Config, Messages};
use axe_scan_report::{Allowlist, PageReport};
use axe_scan_scanner::{
    read_url_list, scan_urls, AxeSource, ChromeOptions, ChromeScanner, PageScanner, ScanOptions,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where axe-core comes from and how the browser is started.
pub struct BrowserSettings {
    pub axe_source: AxeSource,
    pub chrome: ChromeOptions,
}

/// Inputs of a scan, resolved before the browser is started.
pub struct ScanInput {
    pub urls: Vec<String>,
    pub allowlist: Option<Allowlist>,
}

impl ScanInput {
    /// Read the URL list (`file` or the configured one) and the optional allowlist.
    pub fn load(config: &Config, file: Option<PathBuf>, allowlist: Option<&Path>) -> Result<Self> {
        let file = file.unwrap_or_else(|| PathBuf::from(&config.file_path));
        let urls = read_url_list(&file)?;
        let allowlist = allowlist.map(Allowlist::from_path).transpose()?;
        Ok(Self { urls, allowlist })
    }
}

/// Scan every URL in a headless browser and add each page to `report`.
///
/// Nothing is loaded or launched when there are no URLs. The browser is shut
/// down whether or not the scan succeeded.
pub async fn scan_into<R: PageReport + ?Sized>(
    settings: &BrowserSettings,
    config: &Config,
    urls: &[String],
    report: &mut R,
) -> Result<()> {
    if urls.is_empty() {
        info!("No URLs to scan");
        return Ok(());
    }

    let script = settings.axe_source.load_script().await?;
    let locale = settings.axe_source.load_locale(&config.locale).await?;
    let options = ScanOptions {
        tags: config.axe_core_tags.clone(),
        locale,
    };

    let scanner = ChromeScanner::launch(&settings.chrome, script, &options).await?;
    let outcome = scan_pages(&scanner, urls, report).await;
    let closed = scanner.close().await;

    let pages = settle(outcome, closed)?;
    info!("Scanned {} page(s)", pages);
    Ok(())
}

/// Scan every URL with `scanner` and add each page to `report`.
pub async fn scan_pages<S, R>(scanner: &S, urls: &[String], report: &mut R) -> Result<usize>
where
    S: PageScanner + ?Sized,
    R: PageReport + ?Sized,
{
    scan_urls(scanner, urls, |results| {
        report.add_page(&results);
        Ok(())
    })
    .await
    .context("Accessibility scan failed")
}

/// Combine the scan outcome with the browser shutdown. A scan error wins.
fn settle(outcome: Result<usize>, closed: Result<()>) -> Result<usize> {
    match (outcome, closed) {
        (Ok(pages), Ok(())) => Ok(pages),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_err)) => {
            warn!("{:#}", close_err);
            Err(e)
        }
    }
}

/// Messages in the configured locale.
pub fn messages(config: &Config) -> Messages {
    Messages::new(&config.locale)
}
