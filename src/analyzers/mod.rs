// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility checks derived from WCAG and RGAA criteria.
//!
//! Each check is stateless, reads the parsed document and appends zero or
//! more issues. Checks never depend on one another and all of them run on
//! every scan, so the issue list is ordered by check first.

pub mod alt_text;
pub mod contrast;
pub mod forms;
pub mod language;
pub mod links;
pub mod title;

use crate::document::Document;
use crate::model::Issue;
use tracing::debug;

/// Trait implemented by all checks
pub trait Check: Send + Sync {
    /// Human-readable name of this check
    fn name(&self) -> &str;

    /// WCAG criterion this check covers
    fn wcag(&self) -> &str;

    /// Inspect the document and append any violations to `issues`
    fn run(&self, document: &Document, issues: &mut Vec<Issue>);
}

/// The fixed battery of checks, in execution order
pub fn all_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(alt_text::AltTextCheck),
        Box::new(contrast::ContrastCheck),
        Box::new(forms::FormLabelCheck),
        Box::new(language::LanguageCheck),
        Box::new(title::TitleCheck),
        Box::new(links::LinkTextCheck),
    ]
}

/// Run every check over the document, in order
pub fn run_checks(document: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();

    for check in all_checks() {
        let before = issues.len();
        check.run(document, &mut issues);
        debug!(
            "{} (WCAG {}): {} issue(s)",
            check.name(),
            check.wcag(),
            issues.len() - before
        );
    }

    issues
}
