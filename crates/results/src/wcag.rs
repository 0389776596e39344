//! WCAG tag parsing.
//!
//! axe-core tags rules with the success criteria they test (`wcag143` for
//! 1.4.3, `wcag1410` for 1.4.10) and with the conformance level of the WCAG
//! version that introduced them (`wcag2a`, `wcag21aa`, `wcag2aaa`).

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static CRITERION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^wcag([1-9])([1-9])(\d{1,2})$").unwrap());

static LEVEL_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^wcag\d{1,2}(a{1,3})$").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid WCAG criterion: {0}")]
pub struct InvalidCriterion(pub String);

/// A WCAG success criterion such as 1.4.3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SuccessCriterion {
    pub principle: u8,
    pub guideline: u8,
    pub criterion: u8,
}

impl SuccessCriterion {
    pub fn new(principle: u8, guideline: u8, criterion: u8) -> Self {
        Self {
            principle,
            guideline,
            criterion,
        }
    }

    /// Parse an axe-core criterion tag like `wcag143`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let caps = CRITERION_TAG.captures(tag)?;
        Some(Self {
            principle: caps[1].parse().ok()?,
            guideline: caps[2].parse().ok()?,
            criterion: caps[3].parse().ok()?,
        })
    }
}

impl fmt::Display for SuccessCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.principle, self.guideline, self.criterion)
    }
}

impl FromStr for SuccessCriterion {
    type Err = InvalidCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            [p, g, c] => Ok(Self {
                principle: p.parse().map_err(|_| InvalidCriterion(s.to_string()))?,
                guideline: g.parse().map_err(|_| InvalidCriterion(s.to_string()))?,
                criterion: c.parse().map_err(|_| InvalidCriterion(s.to_string()))?,
            }),
            _ => Err(InvalidCriterion(s.to_string())),
        }
    }
}

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WcagLevel {
    A,
    AA,
    AAA,
    /// The rule carries no level tag.
    NA,
}

impl WcagLevel {
    /// Parse an axe-core level tag like `wcag21aa`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let caps = LEVEL_TAG.captures(tag)?;
        match caps[1].len() {
            1 => Some(WcagLevel::A),
            2 => Some(WcagLevel::AA),
            3 => Some(WcagLevel::AAA),
            _ => None,
        }
    }

    /// Level of the first level tag in `tags`, or `NA`.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        tags.iter()
            .find_map(|t| WcagLevel::from_tag(t.as_ref()))
            .unwrap_or(WcagLevel::NA)
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WcagLevel::A => write!(f, "A"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
            WcagLevel::NA => write!(f, "NA"),
        }
    }
}

/// Whether a tag is a WCAG criterion or level tag.
pub fn is_wcag_tag(tag: &str) -> bool {
    CRITERION_TAG.is_match(tag) || LEVEL_TAG.is_match(tag)
}

/// Success criteria referenced by `tags`, in tag order.
pub fn criteria<S: AsRef<str>>(tags: &[S]) -> Vec<SuccessCriterion> {
    tags.iter()
        .filter_map(|t| SuccessCriterion::from_tag(t.as_ref()))
        .collect()
}

/// Success criteria joined by a space, e.g. `1.3.1 4.1.2`.
pub fn criteria_label<S: AsRef<str>>(tags: &[S]) -> String {
    criteria(tags)
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
