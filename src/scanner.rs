// SPDX-License-Identifier: PMPL-1.0-or-later
//! Scan drivers: fetch a URL or read a file, then run the analyzer.

use crate::analyzer::analyze_html;
use crate::config::Config;
use crate::error::Result;
use crate::fetch::{normalize_url, PageFetcher};
use crate::model::ScanResult;
use std::path::Path;
use tracing::info;

/// Normalize `input`, fetch the page and analyze it
pub fn scan_url(input: &str, config: &Config) -> Result<ScanResult> {
    let url = normalize_url(input)?;
    info!("Scanning {}", url);

    let fetcher = PageFetcher::new(&config.fetch)?;
    let html = fetcher.fetch(&url)?;

    Ok(analyze_html(&html, url.as_str()))
}

/// Analyze a local HTML file. `label` defaults to the file path.
pub fn scan_file(path: &Path, label: Option<&str>) -> Result<ScanResult> {
    let content = std::fs::read_to_string(path)?;
    let label = match label {
        Some(l) => l.to_string(),
        None => path.display().to_string(),
    };
    info!("Scanning file {}", path.display());
    Ok(analyze_html(&content, &label))
}
