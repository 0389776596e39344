//! Sequential page iteration.

use crate::browser::PageScanner;
use anyhow::Result;
use axe_scan_results::AxeResults;
use tracing::{debug, info};

/// Scan each URL in order, handing every page's results to `on_page`.
///
/// One page is scanned and handled before the next is opened. The first
/// failure, from the scanner or from `on_page`, aborts the run. Returns the
/// number of pages scanned.
pub async fn scan_urls<S, F>(scanner: &S, urls: &[String], mut on_page: F) -> Result<usize>
where
    S: PageScanner + ?Sized,
    F: FnMut(AxeResults) -> Result<()>,
{
    let total = urls.len();
    info!("Scanning {} page(s)", total);

    for (index, url) in urls.iter().enumerate() {
        info!("[{}/{}] {}", index + 1, total, url);
        let results = scanner.scan(url).await?;
        debug!(
            "{}: {} violation(s), {} incomplete, {} pass(es), {} inapplicable",
            results.url,
            results.violations.len(),
            results.incomplete.len(),
            results.passes.len(),
            results.inapplicable.len()
        );
        on_page(results)?;
    }

    Ok(total)
}
