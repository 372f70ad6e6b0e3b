// SPDX-License-Identifier: PMPL-1.0-or-later
//! Analysis entry point: parse, run checks, score, assemble.
//!
//! `analyze_html` is total over its input. Any string, however malformed,
//! produces a result. No I/O happens here; the URL is only a label.

use crate::analyzers::{self, forms};
use crate::document::{selector, Document};
use crate::model::{ScanResult, Summary};
use crate::scoring;
use chrono::Utc;
use scraper::Selector;
use std::sync::LazyLock;
use tracing::info;

static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static LINKS: LazyLock<Selector> = LazyLock::new(|| selector("a"));

/// Document-level checks counted once per scan (language and title)
const DOCUMENT_CHECKS: usize = 2;

/// Analyze an HTML document and assemble the scan result
pub fn analyze_html(html: &str, url: &str) -> ScanResult {
    let document = Document::parse(html);

    let mut issues = analyzers::run_checks(&document);
    // stable: equal severities keep check order
    issues.sort_by(|a, b| scoring::compare_severity(a.severity, b.severity));

    let summary = Summary::from_issues(&issues);
    let score = scoring::score(&summary);
    let total_checks = total_checks(&document);

    info!(
        "Analyzed {}: score {}, {} issue(s) ({} critical, {} major, {} minor)",
        url,
        score,
        issues.len(),
        summary.critical,
        summary.major,
        summary.minor
    );

    ScanResult::new(
        url.to_string(),
        Utc::now(),
        score,
        total_checks,
        issues,
        summary,
    )
}

/// Images, eligible form fields and links examined, plus the document checks
fn total_checks(document: &Document) -> usize {
    document.count(&IMG)
        + forms::eligible_fields(document).len()
        + document.count(&LINKS)
        + DOCUMENT_CHECKS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    const WELL_FORMED_HEAD: &str = r#"<html lang="en"><head><title>Shop</title></head>"#;

    #[test]
    fn test_empty_string() {
        let result = analyze_html("", "https://example.com/");
        assert_eq!(result.issues_found(), 2);
        assert_eq!(result.summary(), Summary { critical: 0, major: 2, minor: 0 });
        assert_eq!(result.score(), 84);
        assert_eq!(result.total_checks(), 2);
    }

    #[test]
    fn test_clean_document_scores_100() {
        let html = format!("{}<body><p>Hello</p></body></html>", WELL_FORMED_HEAD);
        let result = analyze_html(&html, "https://example.com/");
        assert!(result.is_clean());
        assert_eq!(result.score(), 100);
    }

    #[test]
    fn test_sorted_critical_first() {
        let html = r#"<html><body><a href="/a"></a><img src="x.png"><input id="q"></body></html>"#;
        let result = analyze_html(html, "https://example.com/");
        let severities: Vec<Severity> = result.issues().iter().map(|i| i.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Critical,
                Severity::Critical,
                Severity::Major,
                Severity::Major,
                Severity::Major,
            ]
        );
        // ties keep check order: alt text before form label, language before title before links
        let refs: Vec<&str> = result.issues().iter().map(|i| i.wcag_ref.as_str()).collect();
        assert_eq!(refs, vec!["1.1.1", "1.3.1", "3.1.1", "2.4.2", "2.4.4"]);
    }

    #[test]
    fn test_total_checks_excludes_exempt_fields() {
        let html = format!(
            r#"{}<body><img alt="a"><img alt="b"><input type="hidden"><input aria-label="q"><a href="/">Home</a></body></html>"#,
            WELL_FORMED_HEAD
        );
        let result = analyze_html(&html, "https://example.com/");
        assert_eq!(result.total_checks(), 2 + 1 + 1 + 2);
    }

    #[test]
    fn test_url_passed_through() {
        let result = analyze_html("<p>x</p>", "https://example.com/path?q=1");
        assert_eq!(result.url(), "https://example.com/path?q=1");
    }
}
