//! Flattening axe-core results into one finding per check.

use crate::escape::convert_for_csv;
use axe_scan_common::{ResultType, VERSION};
use axe_scan_results::{criteria_label, AxeResults, CheckCondition, NodeResult, RuleResult};

/// Rule tags that are also among the configured tags, joined with commas.
pub fn rule_set(rule_tags: &[String], configured_tags: &[String]) -> String {
    rule_tags
        .iter()
        .filter(|tag| configured_tags.contains(tag))
        .cloned()
        .collect::<Vec<_>>()
        .join(",")
}

/// The fields that identify a finding for allowlisting.
///
/// Values are stored CSV-escaped so a key built from a scan compares equal
/// to the same finding read back from a report.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FindingKey {
    pub url: String,
    pub rule_type: String,
    pub result_type: String,
    pub rule_set: String,
    pub impact: String,
    pub html_element: String,
    pub dom_element: String,
    pub wcag_criteria: String,
}

impl FindingKey {
    /// Build a key from raw field values, escaping each of them.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        url: &str,
        rule_type: &str,
        result_type: &str,
        rule_set: &str,
        impact: &str,
        html_element: &str,
        dom_element: &str,
        wcag_criteria: &str,
    ) -> Self {
        Self {
            url: convert_for_csv(url),
            rule_type: convert_for_csv(rule_type),
            result_type: convert_for_csv(result_type),
            rule_set: convert_for_csv(rule_set),
            impact: convert_for_csv(impact),
            html_element: convert_for_csv(html_element),
            dom_element: convert_for_csv(dom_element),
            wcag_criteria: convert_for_csv(wcag_criteria),
        }
    }

    /// Key of a node within a rule on a scanned page.
    pub fn for_node(
        page_url: &str,
        rule: &RuleResult,
        result_type: ResultType,
        node: &NodeResult,
        configured_tags: &[String],
    ) -> Self {
        Self::new(
            page_url,
            &rule.id,
            result_type.as_str(),
            &rule_set(&rule.tags, configured_tags),
            &impact_label(rule),
            &node.html,
            &node.dom_element(),
            &criteria_label(&rule.tags),
        )
    }
}

fn impact_label(rule: &RuleResult) -> String {
    rule.impact.map(|i| i.to_string()).unwrap_or_default()
}

/// One row of the `run` report: a single check on a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub url: String,
    pub rule_type: String,
    pub result_type: ResultType,
    pub condition: CheckCondition,
    /// 1-based position of the check within its condition.
    pub condition_index: usize,
    pub rule_set: String,
    pub impact: String,
    pub message: String,
    pub html_element: String,
    pub dom_element: String,
    pub help: String,
    pub help_url: String,
    pub wcag_criteria: String,
}

impl Finding {
    /// Field values in report column order.
    pub fn fields(&self) -> Vec<String> {
        vec![
            self.url.clone(),
            self.rule_type.clone(),
            self.result_type.to_string(),
            self.condition.to_string(),
            self.condition_index.to_string(),
            self.rule_set.clone(),
            self.impact.clone(),
            self.message.clone(),
            self.html_element.clone(),
            self.dom_element.clone(),
            self.help.clone(),
            self.help_url.clone(),
            self.wcag_criteria.clone(),
            VERSION.to_string(),
        ]
    }

    pub fn key(&self) -> FindingKey {
        FindingKey::new(
            &self.url,
            &self.rule_type,
            self.result_type.as_str(),
            &self.rule_set,
            &self.impact,
            &self.html_element,
            &self.dom_element,
            &self.wcag_criteria,
        )
    }
}

/// Every finding on a page for the given result types, in axe-core order.
pub fn findings_for_page(
    results: &AxeResults,
    result_types: &[ResultType],
    configured_tags: &[String],
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for &result_type in result_types {
        for rule in results.bucket(result_type) {
            let rule_set = rule_set(&rule.tags, configured_tags);
            let impact = impact_label(rule);
            let wcag_criteria = criteria_label(&rule.tags);

            for node in &rule.nodes {
                let dom_element = node.dom_element();
                for condition in CheckCondition::ALL {
                    for (index, check) in node.checks(condition).iter().enumerate() {
                        findings.push(Finding {
                            url: results.url.clone(),
                            rule_type: rule.id.clone(),
                            result_type,
                            condition,
                            condition_index: index + 1,
                            rule_set: rule_set.clone(),
                            impact: impact.clone(),
                            message: check.message.clone(),
                            html_element: node.html.clone(),
                            dom_element: dom_element.clone(),
                            help: rule.help.clone(),
                            help_url: rule.help_url.clone(),
                            wcag_criteria: wcag_criteria.clone(),
                        });
                    }
                }
            }
        }
    }

    findings
}
