// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for accessscan
//!
//! The analyzer itself never fails. These errors belong to the layers
//! around it: fetching the page, reading files and loading configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("A URL is required")]
    MissingUrl,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unable to reach the site: {0}")]
    Unreachable(String),

    #[error("The site responded with status {0}")]
    HttpStatus(u16),

    #[error("The site took too long to respond (>{0}s)")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
