// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link text check - WCAG 2.4.4 Link Purpose (In Context), RGAA 6.1
//!
//! A link has an accessible name when it has visible text, a naming
//! attribute, or contains an image with an `alt` attribute.

use crate::analyzers::Check;
use crate::document::{attr, collapsed_text, has_nonempty_attr, selector, truncate, Document};
use crate::locator::locate;
use crate::model::{Issue, Severity};
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

static LINKS: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static IMG_WITH_ALT: LazyLock<Selector> = LazyLock::new(|| selector("img[alt]"));

/// Maximum length of the `href` echoed in the issue
const MAX_HREF_LEN: usize = 50;

const NAMING_ATTRIBUTES: &[&str] = &["aria-label", "aria-labelledby", "title"];

/// Empty link check
pub struct LinkTextCheck;

impl Check for LinkTextCheck {
    fn name(&self) -> &str {
        "Link text"
    }

    fn wcag(&self) -> &str {
        "2.4.4"
    }

    fn run(&self, document: &Document, issues: &mut Vec<Issue>) {
        for link in document.select(&LINKS) {
            if has_accessible_name(link) {
                continue;
            }

            let href = attr(link, "href").unwrap_or("");
            issues.push(
                Issue::new(
                    "Link without accessible name",
                    Severity::Major,
                    "Link with no text and no accessible alternative",
                )
                .with_wcag("2.4.4")
                .with_rgaa("6.1")
                .with_element(&format!("<a href=\"{}\">", truncate(href, MAX_HREF_LEN)))
                .with_location(locate(link))
                .with_fix("Add visible text or an aria-label attribute to the link"),
            );
        }
    }
}

fn has_accessible_name(link: ElementRef<'_>) -> bool {
    !collapsed_text(link).is_empty()
        || NAMING_ATTRIBUTES.iter().any(|a| has_nonempty_attr(link, a))
        || link.select(&IMG_WITH_ALT).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        LinkTextCheck.run(&Document::parse(html), &mut issues);
        issues
    }

    #[test]
    fn test_empty_link() {
        let issues = run(r#"<a href="/x"></a>"#);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Major);
        assert_eq!(issues[0].element, "<a href=\"/x\">");
    }

    #[test]
    fn test_whitespace_only_link() {
        assert_eq!(run("<a href=\"/x\">  \n </a>").len(), 1);
    }

    #[test]
    fn test_link_with_text() {
        assert!(run(r#"<a href="/x">Pricing</a>"#).is_empty());
    }

    #[test]
    fn test_link_with_image_alt() {
        assert!(run(r#"<a href="/x"><img alt="go"></a>"#).is_empty());
        // an empty alt still counts as present
        assert!(run(r#"<a href="/x"><img src="i.png" alt=""></a>"#).is_empty());
        assert_eq!(run(r#"<a href="/x"><img src="i.png"></a>"#).len(), 1);
    }

    #[test]
    fn test_link_with_naming_attribute() {
        assert!(run(r#"<a href="/x" aria-label="Close"></a>"#).is_empty());
        assert!(run(r#"<a href="/x" title="Home"></a>"#).is_empty());
        assert!(run(r#"<a href="/x" aria-labelledby="lbl"></a>"#).is_empty());
    }

    #[test]
    fn test_long_href_truncated() {
        let href = format!("/{}", "p".repeat(70));
        let issues = run(&format!(r#"<a href="{}"></a>"#, href));
        assert_eq!(issues[0].element, format!("<a href=\"{}...\">", &href[..50]));
    }
}
