// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page fetcher.
//!
//! Sits in front of the analyzer: normalizes the user-supplied URL, fetches
//! the page under a wall-clock deadline and maps every failure to its own
//! error kind. The analyzer never calls into this module.

use crate::config::FetchConfig;
use crate::error::{Result, ScanError};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};
use url::Url;

/// Normalize user input into an absolute http(s) URL.
///
/// Inputs without a scheme are assumed to be `https://`.
pub fn normalize_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ScanError::MissingUrl);
    }

    let candidate = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&candidate)
        .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", trimmed, e)))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ScanError::InvalidUrl(trimmed.to_string()));
    }

    Ok(url)
}

/// Blocking HTTP client for fetching pages to analyze
pub struct PageFetcher {
    client: Client,
    accept: String,
    timeout_secs: u64,
}

impl PageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| ScanError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            accept: config.accept.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Fetch the page body. Redirects are followed.
    pub fn fetch(&self, url: &Url) -> Result<String> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, self.accept.as_str())
            .send()
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} responded with {}", url, status);
            return Err(ScanError::HttpStatus(status.as_u16()));
        }

        response.text().map_err(|e| self.classify(e))
    }

    fn classify(&self, error: reqwest::Error) -> ScanError {
        if error.is_timeout() {
            ScanError::Timeout(self.timeout_secs)
        } else {
            ScanError::Unreachable(error.to_string())
        }
    }
}
