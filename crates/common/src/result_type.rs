//! axe-core result type definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result bucket as classified by axe-core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    Passes,
    Violations,
    Incomplete,
    Inapplicable,
}

impl ResultType {
    /// Every result type, in the order axe-core reports them.
    pub const ALL: [ResultType; 4] = [
        ResultType::Passes,
        ResultType::Violations,
        ResultType::Incomplete,
        ResultType::Inapplicable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Passes => "passes",
            ResultType::Violations => "violations",
            ResultType::Incomplete => "incomplete",
            ResultType::Inapplicable => "inapplicable",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the four result types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid result type: {0}")]
pub struct InvalidResultType(pub String);

impl FromStr for ResultType {
    type Err = InvalidResultType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "passes" => Ok(ResultType::Passes),
            "violations" => Ok(ResultType::Violations),
            "incomplete" => Ok(ResultType::Incomplete),
            "inapplicable" => Ok(ResultType::Inapplicable),
            _ => Err(InvalidResultType(s.to_string())),
        }
    }
}
