//! axe-core result types.
//!
//! Only the fields axe-scan reads are typed. Everything else axe-core returns
//! is kept in `extra` so the raw output can be written back unchanged.

use axe_scan_common::ResultType;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Results of one `axe.run` call on one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxeResults {
    /// URL of the page as reported by axe-core (after redirects).
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub passes: Vec<RuleResult>,
    #[serde(default)]
    pub violations: Vec<RuleResult>,
    #[serde(default)]
    pub incomplete: Vec<RuleResult>,
    #[serde(default)]
    pub inapplicable: Vec<RuleResult>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl AxeResults {
    /// Rules classified under a result type.
    pub fn bucket(&self, result_type: ResultType) -> &[RuleResult] {
        match result_type {
            ResultType::Passes => &self.passes,
            ResultType::Violations => &self.violations,
            ResultType::Incomplete => &self.incomplete,
            ResultType::Inapplicable => &self.inapplicable,
        }
    }
}

/// Impact level assigned by axe-core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Minor,
    Moderate,
    Serious,
    Critical,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::Minor => write!(f, "minor"),
            Impact::Moderate => write!(f, "moderate"),
            Impact::Serious => write!(f, "serious"),
            Impact::Critical => write!(f, "critical"),
        }
    }
}

/// One rule and the nodes it was evaluated on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleResult {
    /// Rule ID, e.g. `color-contrast`.
    pub id: String,
    #[serde(default)]
    pub impact: Option<Impact>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub help_url: String,
    #[serde(default)]
    pub nodes: Vec<NodeResult>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A DOM node a rule was evaluated on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeResult {
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub target: Vec<Selector>,
    #[serde(default)]
    pub impact: Option<Impact>,
    #[serde(default)]
    pub any: Vec<CheckResult>,
    #[serde(default)]
    pub all: Vec<CheckResult>,
    #[serde(default)]
    pub none: Vec<CheckResult>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl NodeResult {
    /// Check results for one condition.
    pub fn checks(&self, condition: CheckCondition) -> &[CheckResult] {
        match condition {
            CheckCondition::Any => &self.any,
            CheckCondition::All => &self.all,
            CheckCondition::None => &self.none,
        }
    }

    /// Target selectors joined with commas.
    pub fn dom_element(&self) -> String {
        self.target
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// A CSS selector path to a node.
///
/// Nodes inside iframes or shadow roots are addressed by a list of selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selector {
    Single(String),
    Nested(Vec<String>),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Single(s) => f.write_str(s),
            Selector::Nested(parts) => f.write_str(&parts.join(",")),
        }
    }
}

/// Outcome of a single check within a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub impact: Option<Impact>,
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// How the checks of a node combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckCondition {
    Any,
    All,
    None,
}

impl CheckCondition {
    pub const ALL: [CheckCondition; 3] = [CheckCondition::Any, CheckCondition::All, CheckCondition::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckCondition::Any => "any",
            CheckCondition::All => "all",
            CheckCondition::None => "none",
        }
    }
}

impl fmt::Display for CheckCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
