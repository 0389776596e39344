//! axe-scan report - Turn axe-core results into CSV reports.

pub mod allowlist;
pub mod escape;
pub mod finding;
pub mod raw;
pub mod run_report;
pub mod summary;

pub use allowlist::Allowlist;
pub use escape::convert_for_csv;
pub use finding::{Finding, FindingKey};
pub use raw::RawReport;
pub use run_report::{RunReport, REPORT_HEADER};
pub use summary::{CriterionSummary, SummaryReport, SummaryResult, SUMMARY_HEADER};

use axe_scan_results::AxeResults;

/// A report built one scanned page at a time.
pub trait PageReport {
    /// Add the results of one page.
    fn add_page(&mut self, results: &AxeResults);

    /// Render the report as it is written to standard output.
    fn render(&self) -> anyhow::Result<String>;
}
