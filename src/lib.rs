// SPDX-License-Identifier: PMPL-1.0-or-later
//! AccessScan - static HTML accessibility auditor
//!
//! Parses a document, runs a fixed battery of structural checks derived from
//! WCAG and RGAA criteria, locates each violation in the tree and turns the
//! findings into a 0-100 score.
//!
//! ## Checks
//!
//! - **Alt Text** (1.1.1): images without an `alt` attribute
//! - **Contrast** (1.4.3): low-contrast inline `color`/`background` pairs
//! - **Form Labels** (1.3.1): fields without an accessible name
//! - **Language** (3.1.1): missing `lang` on `<html>`
//! - **Title** (2.4.2): missing or empty `<title>`
//! - **Link Text** (2.4.4): links without an accessible name
//!
//! ## Scoring
//!
//! 100 minus 15 per critical, 8 per major and 3 per minor issue, clamped to
//! 0..=100.
//!
//! ```
//! let result = accessscan::analyze_html(
//!     r#"<html lang="en"><head><title>Home</title></head><body><img src="a.png"></body></html>"#,
//!     "https://example.com/",
//! );
//! assert_eq!(result.score(), 85);
//! ```

pub mod analyzer;
pub mod analyzers;
pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod locator;
pub mod model;
pub mod report;
pub mod scanner;
pub mod scoring;

pub use analyzer::analyze_html;
pub use error::{Result, ScanError};
pub use model::{Issue, ScanResult, Severity, Summary};
