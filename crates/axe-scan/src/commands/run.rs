//! `axe-scan run`

use super::{messages, scan_into, BrowserSettings, ScanInput};
use anyhow::Result;
use axe_scan_common::{load_config, Config, ConfigPaths, ConfigScope, MessageKey};
use axe_scan_report::{Allowlist, PageReport, RawReport, RunReport};
use std::path::PathBuf;
use tracing::info;

pub async fn run(
    settings: &BrowserSettings,
    file: Option<PathBuf>,
    allowlist: Option<PathBuf>,
    raw: bool,
) -> Result<()> {
    let paths = ConfigPaths::from_env()?;
    let config = load_config(&paths, ConfigScope::Current)?;
    let input = ScanInput::load(&config, file, allowlist.as_deref())?;

    info!("{}", messages(&config).text(MessageKey::Running));

    let mut report = new_report(&config, input.allowlist, raw);
    scan_into(settings, &config, &input.urls, report.as_mut()).await?;

    println!("{}", report.render()?);
    Ok(())
}

/// Report written by `run`: raw axe-core JSON, or one CSV row per finding.
fn new_report(config: &Config, allowlist: Option<Allowlist>, raw: bool) -> Box<dyn PageReport> {
    if raw {
        Box::new(RawReport::new())
    } else {
        Box::new(RunReport::new(config, allowlist))
    }
}
