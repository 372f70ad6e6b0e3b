// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page title check - WCAG 2.4.2 Page Titled, RGAA 8.5

use crate::analyzers::Check;
use crate::document::{collapsed_text, selector, Document};
use crate::model::{Issue, Severity};
use scraper::Selector;
use std::sync::LazyLock;

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));

/// Page title check
pub struct TitleCheck;

impl Check for TitleCheck {
    fn name(&self) -> &str {
        "Page title"
    }

    fn wcag(&self) -> &str {
        "2.4.2"
    }

    fn run(&self, document: &Document, issues: &mut Vec<Issue>) {
        let has_title = document
            .first(&TITLE)
            .is_some_and(|t| !collapsed_text(t).is_empty());
        if has_title {
            return;
        }

        issues.push(
            Issue::new(
                "Missing page title",
                Severity::Major,
                "The <title> element is missing or empty",
            )
            .with_wcag("2.4.2")
            .with_rgaa("8.5")
            .with_element("<head>")
            .with_location("Document head (<head> element)".to_string())
            .with_fix("Add a descriptive <title> element inside <head>"),
        );
    }
}
