//! Result model for axe-scan.
//!
//! This crate defines the axe-core result tree as it comes back from the
//! browser, and the WCAG tag vocabulary used to group it.

pub mod axe;
pub mod wcag;

pub use axe::{AxeResults, CheckCondition, CheckResult, Impact, NodeResult, RuleResult, Selector};
pub use axe_scan_common::ResultType;
pub use wcag::{criteria_label, InvalidCriterion, SuccessCriterion, WcagLevel};
