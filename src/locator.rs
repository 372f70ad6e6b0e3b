// SPDX-License-Identifier: PMPL-1.0-or-later
//! Locates a flagged element for a human reader.
//!
//! A location is a short CSS-like path (at most three levels, root to leaf)
//! followed by a snippet of the surrounding text, e.g.
//! `nav#main > ul > a — Context: "Home About Contact"`.

use crate::document::{attr, collapsed_text, parent_element, tag_name, truncate};
use scraper::ElementRef;

/// Maximum number of path levels
const MAX_DEPTH: usize = 3;

/// Maximum length of an id or class token in a path level
const MAX_TOKEN_LEN: usize = 25;

/// Maximum length of the text snippet
const MAX_SNIPPET_LEN: usize = 60;

/// Rendered when neither a path nor a snippet can be produced
pub const UNDETERMINED: &str = "Position undetermined";

/// Build the location string for an element
pub fn locate(element: ElementRef<'_>) -> String {
    let mut parts = Vec::with_capacity(2);

    let path = structural_path(element);
    if !path.is_empty() {
        parts.push(path);
    }

    if let Some(snippet) = context_snippet(element) {
        parts.push(format!("Context: \"{}\"", snippet));
    }

    if parts.is_empty() {
        UNDETERMINED.to_string()
    } else {
        parts.join(" — ")
    }
}

/// Path of up to three levels ending at `element`, stopping at `html`/`body`
pub fn structural_path(element: ElementRef<'_>) -> String {
    let mut levels = Vec::with_capacity(MAX_DEPTH);
    let mut current = Some(element);

    while let Some(el) = current {
        if levels.len() == MAX_DEPTH {
            break;
        }
        let tag = tag_name(el);
        if tag == "html" || tag == "body" {
            break;
        }
        levels.push(path_level(el));
        current = parent_element(el);
    }

    levels.reverse();
    levels.join(" > ")
}

/// One path level: `tag#id`, `tag.class` or `tag`
fn path_level(element: ElementRef<'_>) -> String {
    let tag = tag_name(element).to_lowercase();

    if let Some(id) = attr(element, "id").filter(|v| !v.is_empty()) {
        let token = id.split(char::is_whitespace).next().unwrap_or("");
        return format!("{}#{}", tag, take_chars(token, MAX_TOKEN_LEN));
    }

    if let Some(class) = attr(element, "class") {
        let first = class.split_whitespace().next().unwrap_or("");
        let first = take_chars(first, MAX_TOKEN_LEN);
        if !first.is_empty() && !first.starts_with(|c: char| c.is_ascii_digit()) {
            return format!("{}.{}", tag, first);
        }
    }

    tag
}

/// Parent's collapsed text, capped
pub fn context_snippet(element: ElementRef<'_>) -> Option<String> {
    let parent = parent_element(element)?;
    let text = collapsed_text(parent);
    if text.is_empty() {
        None
    } else {
        Some(truncate(&text, MAX_SNIPPET_LEN))
    }
}

fn take_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
