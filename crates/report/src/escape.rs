//! CSV field escaping.
//!
//! Reports are plain comma-joined text, so fields are made delimiter-free
//! instead of being quoted.

use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Replace commas with hyphens and each line break with a single space.
pub fn convert_for_csv(text: &str) -> String {
    LINE_BREAK
        .replace_all(&text.replace(',', "-"), " ")
        .into_owned()
}

/// Escape each field and join them into one CSV row.
pub fn csv_row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| convert_for_csv(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}
