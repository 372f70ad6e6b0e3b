// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text check - WCAG 1.1.1 Non-text Content, RGAA 1.1 / 1.2
//!
//! Every `<img>` must carry an `alt` attribute. An empty `alt=""` marks a
//! decorative image and is valid; only a missing attribute is flagged.

use crate::analyzers::Check;
use crate::document::{attr, selector, truncate, Document};
use crate::locator::locate;
use crate::model::{Issue, Severity};
use scraper::Selector;
use std::sync::LazyLock;

static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));

/// Maximum length of the `src` echoed in the issue
const MAX_SRC_LEN: usize = 60;

/// Check for images without alt attribute
pub struct AltTextCheck;

impl Check for AltTextCheck {
    fn name(&self) -> &str {
        "Image alt text"
    }

    fn wcag(&self) -> &str {
        "1.1.1"
    }

    fn run(&self, document: &Document, issues: &mut Vec<Issue>) {
        for img in document.select(&IMG) {
            if attr(img, "alt").is_some() {
                continue;
            }

            let src = attr(img, "src").filter(|s| !s.is_empty()).unwrap_or("unknown");
            issues.push(
                Issue::new(
                    "Image without alternative text",
                    Severity::Critical,
                    "Image without alt attribute detected",
                )
                .with_wcag("1.1.1")
                .with_rgaa("1.1 / 1.2")
                .with_element(&format!("<img src=\"{}\">", truncate(src, MAX_SRC_LEN)))
                .with_location(locate(img))
                .with_fix("Add a descriptive alt attribute: alt=\"Description of the image\""),
            );
        }
    }
}
