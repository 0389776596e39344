//! Per-finding report written by `axe-scan run`.

use crate::allowlist::Allowlist;
use crate::escape::csv_row;
use crate::finding::findings_for_page;
use crate::PageReport;
use axe_scan_common::{Config, ResultType};
use axe_scan_results::AxeResults;
use tracing::debug;

pub const REPORT_HEADER: &str = "URL,Rule Type,Result Type,Result Condition,Result Condition Index,Rule Set,Impact,Message,HTML Element,DOM Element,Help,Help URL,WCAG Criteria,axe-scan version";

/// Rows for every check of every configured result type.
#[derive(Debug)]
pub struct RunReport {
    tags: Vec<String>,
    result_types: Vec<ResultType>,
    allowlist: Option<Allowlist>,
    rows: Vec<String>,
    suppressed: usize,
}

impl RunReport {
    pub fn new(config: &Config, allowlist: Option<Allowlist>) -> Self {
        Self {
            tags: config.axe_core_tags.clone(),
            result_types: config.result_types.clone(),
            allowlist,
            rows: Vec::new(),
            suppressed: 0,
        }
    }

    /// Number of rows left out because they were allowlisted.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl PageReport for RunReport {
    fn add_page(&mut self, results: &AxeResults) {
        let before = self.rows.len();
        for finding in findings_for_page(results, &self.result_types, &self.tags) {
            if let Some(ref allowlist) = self.allowlist {
                if allowlist.contains(&finding.key()) {
                    self.suppressed += 1;
                    continue;
                }
            }
            self.rows.push(csv_row(&finding.fields()));
        }
        debug!("{}: {} row(s)", results.url, self.rows.len() - before);
    }

    fn render(&self) -> anyhow::Result<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(REPORT_HEADER.to_string());
        lines.extend(self.rows.iter().cloned());
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::fixtures::sample_page;
    use axe_scan_common::VERSION;
    use pretty_assertions::assert_eq;

    fn config() -> Config {
        Config {
            axe_core_tags: vec!["wcag2a".to_string(), "wcag2aa".to_string()],
            result_types: vec![ResultType::Incomplete, ResultType::Violations],
            ..Default::default()
        }
    }

    #[test]
    fn test_render() {
        let mut report = RunReport::new(&config(), None);
        report.add_page(&sample_page());

        let expected = [
            REPORT_HEADER.to_string(),
            format!("https://example.com/,color-contrast,incomplete,any,1,wcag2aa,serious,Element's background color could not be determined,<p class=\"note\">   Note- read this </p>,.note,Elements must meet minimum color contrast ratio thresholds,https://dequeuniversity.com/rules/axe/4.10/color-contrast,1.4.3,{}", VERSION),
            format!("https://example.com/,image-alt,violations,any,1,wcag2a,critical,Element does not have an alt attribute,<img src=\"logo.png\">,#header > img,Images must have alternate text,https://dequeuniversity.com/rules/axe/4.10/image-alt,1.1.1,{}", VERSION),
            format!("https://example.com/,image-alt,violations,any,2,wcag2a,critical,aria-label attribute does not exist or is empty,<img src=\"logo.png\">,#header > img,Images must have alternate text,https://dequeuniversity.com/rules/axe/4.10/image-alt,1.1.1,{}", VERSION),
            format!("https://example.com/,image-alt,violations,none,1,wcag2a,critical,Element has a valid alt attribute value,<img src=\"logo.png\">,#header > img,Images must have alternate text,https://dequeuniversity.com/rules/axe/4.10/image-alt,1.1.1,{}", VERSION),
        ]
        .join("\n");

        assert_eq!(report.render().unwrap(), expected);
        assert_eq!(report.len(), 4);
    }

    #[test]
    fn test_empty_report_is_header_only() {
        let report = RunReport::new(&config(), None);
        assert_eq!(report.render().unwrap(), REPORT_HEADER);
        assert!(report.is_empty());
    }

    #[test]
    fn test_allowlisted_rows_are_suppressed() {
        let allowlist = Allowlist::from_reader(
            "URL,Rule Type,Result Type,Rule Set,Impact,HTML Element,DOM Element,WCAG Criteria\n\
             https://example.com/,image-alt,violations,wcag2a,critical,<img src=\"logo.png\">,#header > img,1.1.1\n"
                .as_bytes(),
        )
        .unwrap();

        let mut report = RunReport::new(&config(), Some(allowlist));
        report.add_page(&sample_page());

        assert_eq!(report.len(), 1);
        assert_eq!(report.suppressed(), 3);
        assert!(!report.render().unwrap().contains("image-alt"));
    }
}
