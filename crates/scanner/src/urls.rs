//! URL list input.

use anyhow::{Context, Result};
use std::path::Path;

/// Read the list of URLs to scan.
pub fn read_url_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read URL list {:?}", path))?;
    Ok(parse_url_list(&content))
}

/// Split a URL list on line breaks and commas, dropping blank entries.
pub fn parse_url_list(content: &str) -> Vec<String> {
    content
        .split(['\r', '\n', ','])
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}
