//! Allowlist of previously reviewed findings.
//!
//! The allowlist is a CSV file with a header row, usually an edited copy of
//! an earlier `run` report. Only the identifying columns are read.

use crate::finding::FindingKey;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct AllowlistEntry {
    #[serde(rename = "URL")]
    url: String,
    #[serde(rename = "Rule Type")]
    rule_type: String,
    #[serde(rename = "Result Type")]
    result_type: String,
    #[serde(rename = "Rule Set")]
    rule_set: String,
    #[serde(rename = "Impact")]
    impact: String,
    #[serde(rename = "HTML Element")]
    html_element: String,
    #[serde(rename = "DOM Element")]
    dom_element: String,
    #[serde(rename = "WCAG Criteria")]
    wcag_criteria: String,
}

impl From<AllowlistEntry> for FindingKey {
    fn from(entry: AllowlistEntry) -> Self {
        FindingKey::new(
            &entry.url,
            &entry.rule_type,
            &entry.result_type,
            &entry.rule_set,
            &entry.impact,
            &entry.html_element,
            &entry.dom_element,
            &entry.wcag_criteria,
        )
    }
}

/// Set of findings to leave out of reports.
#[derive(Debug, Clone, Default)]
pub struct Allowlist {
    keys: HashSet<FindingKey>,
}

impl Allowlist {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open allowlist {:?}", path))?;
        let allowlist =
            Self::from_reader(file).with_context(|| format!("Invalid allowlist {:?}", path))?;
        debug!("Loaded {} allowlist entries from {:?}", allowlist.len(), path);
        Ok(allowlist)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut keys = HashSet::new();
        for (index, record) in reader.deserialize::<AllowlistEntry>().enumerate() {
            let entry = record.with_context(|| format!("Allowlist row {}", index + 2))?;
            keys.insert(FindingKey::from(entry));
        }

        Ok(Self { keys })
    }

    /// Whether every identifying field of `key` matches one allowlist row.
    pub fn contains(&self, key: &FindingKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
