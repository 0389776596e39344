//! Unprocessed axe-core results, for `axe-scan run --raw`.

use crate::PageReport;
use axe_scan_results::AxeResults;

/// JSON array of every page's axe-core results, in scan order.
#[derive(Debug, Default)]
pub struct RawReport {
    pages: Vec<AxeResults>,
}

impl RawReport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageReport for RawReport {
    fn add_page(&mut self, results: &AxeResults) {
        self.pages.push(results.clone());
    }

    fn render(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.pages)?)
    }
}
