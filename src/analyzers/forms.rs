// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form label check - WCAG 1.3.1 Info and Relationships, RGAA 11.1
//!
//! Every user-editable `input`, `select` and `textarea` needs an accessible
//! name from one of:
//! - a `<label for="id">` pointing at the field
//! - an enclosing `<label>`
//! - `aria-label`, `aria-labelledby` or `title`
//!
//! A placeholder alone is not a label; it is only echoed in the description.

use crate::analyzers::Check;
use crate::document::{attr, has_ancestor, has_nonempty_attr, selector, tag_name, Document};
use crate::locator::locate;
use crate::model::{Issue, Severity};
use scraper::{ElementRef, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

static FIELDS: LazyLock<Selector> = LazyLock::new(|| selector("input, select, textarea"));
static LABELS: LazyLock<Selector> = LazyLock::new(|| selector("label[for]"));

/// Input types that do not need a label
const EXEMPT_INPUT_TYPES: &[&str] = &["hidden", "submit", "button", "reset", "image"];

/// Attributes that give a field an accessible name on their own
const NAMING_ATTRIBUTES: &[&str] = &["aria-label", "aria-labelledby", "title"];

/// Form field label check
pub struct FormLabelCheck;

impl Check for FormLabelCheck {
    fn name(&self) -> &str {
        "Form labels"
    }

    fn wcag(&self) -> &str {
        "1.3.1"
    }

    fn run(&self, document: &Document, issues: &mut Vec<Issue>) {
        let label_targets: HashSet<&str> = document
            .select(&LABELS)
            .into_iter()
            .filter_map(|l| attr(l, "for"))
            .collect();

        for field in eligible_fields(document) {
            if is_labelled(field, &label_targets) {
                continue;
            }

            let field_type = field_type(field);
            let name = attr(field, "name")
                .filter(|n| !n.is_empty())
                .unwrap_or(field_type);

            let mut description = "Form field without an associated label".to_string();
            if let Some(placeholder) = attr(field, "placeholder").filter(|p| !p.is_empty()) {
                description.push_str(&format!(" (placeholder: \"{}\")", placeholder));
            }

            issues.push(
                Issue::new("Missing form label", Severity::Critical, &description)
                    .with_wcag("1.3.1")
                    .with_rgaa("11.1")
                    .with_element(&format!(
                        "<{} type=\"{}\" name=\"{}\">",
                        tag_name(field),
                        field_type,
                        name
                    ))
                    .with_location(locate(field))
                    .with_fix("Add a <label for=\"id\"> or an aria-label attribute"),
            );
        }
    }
}

/// Form fields that require a label, in document order
pub fn eligible_fields(document: &Document) -> Vec<ElementRef<'_>> {
    document
        .select(&FIELDS)
        .into_iter()
        .filter(|f| !EXEMPT_INPUT_TYPES.contains(&field_type(*f)))
        .collect()
}

/// Declared `type`, defaulting to "text"
fn field_type<'a>(field: ElementRef<'a>) -> &'a str {
    attr(field, "type").filter(|t| !t.is_empty()).unwrap_or("text")
}

fn is_labelled(field: ElementRef<'_>, label_targets: &HashSet<&str>) -> bool {
    let by_for = attr(field, "id")
        .filter(|id| !id.is_empty())
        .is_some_and(|id| label_targets.contains(id));

    by_for
        || has_ancestor(field, "label")
        || NAMING_ATTRIBUTES.iter().any(|a| has_nonempty_attr(field, a))
}
