//! WCAG success-criterion summary written by `axe-scan summary`.

use crate::allowlist::Allowlist;
use crate::escape::csv_row;
use crate::finding::FindingKey;
use crate::PageReport;
use axe_scan_common::{ResultType, VERSION};
use axe_scan_results::wcag::criteria;
use axe_scan_results::{AxeResults, RuleResult, SuccessCriterion, WcagLevel};
use std::collections::BTreeMap;
use std::fmt;

pub const SUMMARY_HEADER: &str = "Page,WCAG Criterion,WCAG Level,Result,axe-scan version";

/// Page key used when results from all pages are combined.
pub const ALL_PAGES: &str = "ALL";

/// Outcome of a criterion, ordered by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SummaryResult {
    Inapplicable,
    Pass,
    Violation,
}

impl fmt::Display for SummaryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SummaryResult::Inapplicable => "INAPPLICABLE",
            SummaryResult::Pass => "PASS",
            SummaryResult::Violation => "VIOLATION",
        };
        write!(f, "{}", s)
    }
}

impl SummaryResult {
    fn for_bucket(result_type: ResultType) -> Self {
        match result_type {
            ResultType::Inapplicable => SummaryResult::Inapplicable,
            ResultType::Passes => SummaryResult::Pass,
            ResultType::Incomplete | ResultType::Violations => SummaryResult::Violation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionSummary {
    pub level: WcagLevel,
    pub result: SummaryResult,
}

impl CriterionSummary {
    /// Merge a newer observation. Higher priority wins; ties go to the newer one.
    fn merge(&mut self, other: CriterionSummary) {
        if other.result >= self.result {
            *self = other;
        }
    }
}

/// Buckets in the order they are folded into the summary.
const BUCKET_ORDER: [ResultType; 4] = [
    ResultType::Inapplicable,
    ResultType::Passes,
    ResultType::Incomplete,
    ResultType::Violations,
];

/// Worst-case result per WCAG criterion, per page or across all pages.
#[derive(Debug)]
pub struct SummaryReport {
    tags: Vec<String>,
    by_page: bool,
    allowlist: Option<Allowlist>,
    pages: BTreeMap<String, BTreeMap<SuccessCriterion, CriterionSummary>>,
}

impl SummaryReport {
    pub fn new(tags: Vec<String>, by_page: bool, allowlist: Option<Allowlist>) -> Self {
        Self {
            tags,
            by_page,
            allowlist,
            pages: BTreeMap::new(),
        }
    }

    /// Summary for a page key (`ALL` unless summarizing by page).
    pub fn page(&self, page: &str) -> Option<&BTreeMap<SuccessCriterion, CriterionSummary>> {
        self.pages.get(page)
    }

    fn rule_result(&self, results: &AxeResults, rule: &RuleResult, result_type: ResultType) -> SummaryResult {
        let result = SummaryResult::for_bucket(result_type);
        if result != SummaryResult::Violation {
            return result;
        }

        let Some(ref allowlist) = self.allowlist else {
            return result;
        };
        let all_allowlisted = rule.nodes.iter().all(|node| {
            allowlist.contains(&FindingKey::for_node(
                &results.url,
                rule,
                result_type,
                node,
                &self.tags,
            ))
        });
        if all_allowlisted {
            SummaryResult::Pass
        } else {
            result
        }
    }
}

impl PageReport for SummaryReport {
    fn add_page(&mut self, results: &AxeResults) {
        let key = if self.by_page {
            results.url.clone()
        } else {
            ALL_PAGES.to_string()
        };

        let mut updates = Vec::new();
        for result_type in BUCKET_ORDER {
            for rule in results.bucket(result_type) {
                let found = criteria(&rule.tags);
                if found.is_empty() {
                    continue;
                }
                let summary = CriterionSummary {
                    level: WcagLevel::from_tags(&rule.tags),
                    result: self.rule_result(results, rule, result_type),
                };
                updates.extend(found.into_iter().map(|criterion| (criterion, summary)));
            }
        }

        let page = self.pages.entry(key).or_default();
        for (criterion, summary) in updates {
            page.entry(criterion)
                .and_modify(|existing| existing.merge(summary))
                .or_insert(summary);
        }
    }

    fn render(&self) -> anyhow::Result<String> {
        let mut lines = vec![SUMMARY_HEADER.to_string()];
        for (page, criteria) in &self.pages {
            for (criterion, summary) in criteria {
                lines.push(csv_row(&[
                    page.clone(),
                    criterion.to_string(),
                    summary.level.to_string(),
                    summary.result.to_string(),
                    VERSION.to_string(),
                ]));
            }
        }
        Ok(lines.join("\n"))
    }
}
