// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page language check - WCAG 3.1.1 Language of Page, RGAA 8.3
//!
//! The root `<html>` element must declare a non-blank `lang`. Fires at most
//! once per document.

use crate::analyzers::Check;
use crate::document::{attr, selector, Document};
use crate::model::{Issue, Severity};
use scraper::Selector;
use std::sync::LazyLock;

static HTML: LazyLock<Selector> = LazyLock::new(|| selector("html"));

/// Page language check
pub struct LanguageCheck;

impl Check for LanguageCheck {
    fn name(&self) -> &str {
        "Page language"
    }

    fn wcag(&self) -> &str {
        "3.1.1"
    }

    fn run(&self, document: &Document, issues: &mut Vec<Issue>) {
        let lang = document.first(&HTML).and_then(|html| attr(html, "lang"));
        if lang.is_some_and(|l| !l.trim().is_empty()) {
            return;
        }

        issues.push(
            Issue::new(
                "Page language not defined",
                Severity::Major,
                "The lang attribute is missing on the <html> element",
            )
            .with_wcag("3.1.1")
            .with_rgaa("8.3")
            .with_element("<html>")
            .with_location("Document root element".to_string())
            .with_fix("Add lang=\"en\" (or the appropriate language) on the <html> element"),
        );
    }
}
