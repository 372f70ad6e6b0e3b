// SPDX-License-Identifier: PMPL-1.0-or-later
//! Document loader: a parsed, read-only HTML tree with the queries the
//! checks need.
//!
//! Parsing is best-effort. Malformed or partial markup never fails; absent
//! elements simply produce empty selections. Nothing referenced by the
//! document (images, stylesheets, scripts) is ever loaded.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document owned by a single analysis call
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse an HTML string. Never fails.
    pub fn parse(content: &str) -> Self {
        Self {
            html: Html::parse_document(content),
        }
    }

    /// All elements matching `selector`, in document order
    pub fn select<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.html.select(selector).collect()
    }

    /// First element matching `selector`
    pub fn first<'a>(&'a self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.html.select(selector).next()
    }

    /// Number of elements matching `selector`
    pub fn count(&self, selector: &Selector) -> usize {
        self.html.select(selector).count()
    }
}

/// Compile a static selector
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Attribute value, if present (possibly empty)
pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// Whether the attribute is present with a non-empty value
pub fn has_nonempty_attr(element: ElementRef<'_>, name: &str) -> bool {
    attr(element, name).is_some_and(|v| !v.is_empty())
}

/// Lowercase tag name
pub fn tag_name<'a>(element: ElementRef<'a>) -> &'a str {
    element.value().name()
}

/// Text content of the element and its descendants, whitespace collapsed
/// and trimmed
pub fn collapsed_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parent, if it is an element (not the document node)
pub fn parent_element<'a>(element: ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.parent().and_then(ElementRef::wrap)
}

/// Whether any ancestor element has the given tag name
pub fn has_ancestor(element: ElementRef<'_>, tag: &str) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| a.value().name() == tag)
}

/// Cap `text` at `max` characters, appending "..." when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut cut: String = text.chars().take(max).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_in_document_order() {
        let doc = Document::parse(r#"<p id="a"></p><div><p id="b"></p></div><p id="c"></p>"#);
        let ids: Vec<_> = doc
            .select(&selector("p"))
            .into_iter()
            .filter_map(|p| attr(p, "id"))
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_malformed_input_does_not_fail() {
        let doc = Document::parse("<div><span>unclosed <p>< <<>> </div></table>");
        assert_eq!(doc.count(&selector("img")), 0);
        assert!(doc.first(&selector("span")).is_some());
    }

    #[test]
    fn test_empty_input_has_synthesized_root() {
        let doc = Document::parse("");
        assert!(doc.first(&selector("html")).is_some());
        assert!(doc.first(&selector("title")).is_none());
    }

    #[test]
    fn test_collapsed_text() {
        let doc = Document::parse("<div>\n  Hello   <b>big</b>\n\n world  </div>");
        let div = doc.first(&selector("div")).unwrap();
        assert_eq!(collapsed_text(div), "Hello big world");
    }

    #[test]
    fn test_attr_presence_vs_empty() {
        let doc = Document::parse(r#"<img alt=""><img>"#);
        let imgs = doc.select(&selector("img"));
        assert_eq!(attr(imgs[0], "alt"), Some(""));
        assert!(!has_nonempty_attr(imgs[0], "alt"));
        assert_eq!(attr(imgs[1], "alt"), None);
    }

    #[test]
    fn test_ancestors() {
        let doc = Document::parse("<label>Name <span><input id=x></span></label>");
        let input = doc.first(&selector("input")).unwrap();
        assert!(has_ancestor(input, "label"));
        assert!(!has_ancestor(input, "form"));
        assert_eq!(parent_element(input).map(tag_name), Some("span"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("éééé", 2), "éé...");
    }
}
