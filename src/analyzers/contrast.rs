// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast check - WCAG 1.4.3 Contrast (Minimum), RGAA 3.2
//!
//! Only inline `style` attributes are inspected. A `color` and a
//! `background`/`background-color` declaration on the same element are
//! parsed and their contrast ratio computed with the WCAG luminance
//! formula. Stylesheets, inherited and computed styles are out of reach.

use crate::analyzers::Check;
use crate::document::{attr, collapsed_text, selector, Document};
use crate::locator::locate;
use crate::model::{Issue, Severity};
use regex::Regex;
use scraper::Selector;
use std::collections::HashMap;
use std::sync::LazyLock;

/// An sRGB color
pub type Rgb = (u8, u8, u8);

/// Minimum ratio for normal text at level AA
pub const MIN_CONTRAST_RATIO: f64 = 4.5;

/// Maximum length of the element text echoed in the issue
const MAX_TEXT_LEN: usize = 40;

static STYLED: LazyLock<Selector> = LazyLock::new(|| selector("[style]"));

static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|;)\s*color\s*:\s*([^;]+)").expect("valid regex"));

static BACKGROUND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)background(?:-color)?\s*:\s*([^;]+)").expect("valid regex"));

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)").expect("valid regex")
});

static NAMED_COLORS: LazyLock<HashMap<&'static str, Rgb>> = LazyLock::new(|| {
    HashMap::from([
        ("white", (255, 255, 255)),
        ("black", (0, 0, 0)),
        ("red", (255, 0, 0)),
        ("green", (0, 128, 0)),
        ("blue", (0, 0, 255)),
        ("yellow", (255, 255, 0)),
        ("gray", (128, 128, 128)),
        ("grey", (128, 128, 128)),
        ("silver", (192, 192, 192)),
        ("orange", (255, 165, 0)),
        ("purple", (128, 0, 128)),
        ("navy", (0, 0, 128)),
        ("lightgray", (211, 211, 211)),
        ("lightgrey", (211, 211, 211)),
        ("darkgray", (169, 169, 169)),
        ("darkgrey", (169, 169, 169)),
        ("whitesmoke", (245, 245, 245)),
    ])
});

/// Inline style contrast check
pub struct ContrastCheck;

impl Check for ContrastCheck {
    fn name(&self) -> &str {
        "Color contrast"
    }

    fn wcag(&self) -> &str {
        "1.4.3"
    }

    fn run(&self, document: &Document, issues: &mut Vec<Issue>) {
        for element in document.select(&STYLED) {
            let style = attr(element, "style").unwrap_or("");
            let Some(ratio) = inline_contrast(style) else {
                continue;
            };
            if ratio >= MIN_CONTRAST_RATIO {
                continue;
            }

            let text: String = collapsed_text(element).chars().take(MAX_TEXT_LEN).collect();
            let rendered = if text.is_empty() {
                "Element with inline style".to_string()
            } else {
                format!("\"{}\"", text)
            };

            issues.push(
                Issue::new(
                    "Insufficient text contrast",
                    Severity::Major,
                    &format!(
                        "Contrast ratio {:.2}:1 (minimum required: {}:1)",
                        ratio, MIN_CONTRAST_RATIO
                    ),
                )
                .with_wcag("1.4.3")
                .with_rgaa("3.2")
                .with_element(&rendered)
                .with_location(locate(element))
                .with_fix("Increase the contrast between the text color and the background"),
            );
        }
    }
}

/// Contrast ratio of the foreground/background pair declared in an inline
/// style, if both are present and parseable
pub fn inline_contrast(style: &str) -> Option<f64> {
    let fg = COLOR_RE.captures(style).and_then(|c| parse_color(&c[1]))?;
    let bg = BACKGROUND_RE.captures(style).and_then(|c| parse_color(&c[1]))?;
    Some(contrast_ratio(fg, bg))
}

/// Parse a CSS color value: 3/6-digit hex, `rgb(r, g, b)` or a named color.
/// Keywords such as `transparent` and `inherit` yield `None`.
pub fn parse_color(value: &str) -> Option<Rgb> {
    let value = value.trim().to_lowercase();
    if matches!(value.as_str(), "transparent" | "inherit" | "initial") {
        return None;
    }
    if value.starts_with('#') {
        return parse_hex_color(&value);
    }
    if let Some(caps) = RGB_RE.captures(&value) {
        let r = caps[1].parse().ok()?;
        let g = caps[2].parse().ok()?;
        let b = caps[3].parse().ok()?;
        return Some((r, g, b));
    }
    NAMED_COLORS.get(value.as_str()).copied()
}

/// Parse `#rgb` or `#rrggbb`
pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => Some((
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

/// Relative luminance of an sRGB color
pub fn relative_luminance((r, g, b): Rgb) -> f64 {
    let [r, g, b] = [r, g, b].map(|c| {
        let v = c as f64 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    });
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two colors, always >= 1.0
pub fn contrast_ratio(fg: Rgb, bg: Rgb) -> f64 {
    let l1 = relative_luminance(fg);
    let l2 = relative_luminance(bg);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        ContrastCheck.run(&Document::parse(html), &mut issues);
        issues
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#ff0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex_color("#ffff"), None);
        assert_eq!(parse_hex_color("#+f+f+f"), None);
        assert_eq!(parse_hex_color("#zzz"), None);
    }

    #[test]
    fn test_parse_color_forms() {
        assert_eq!(parse_color(" rgb(10, 20 ,30) "), Some((10, 20, 30)));
        assert_eq!(parse_color("WhiteSmoke"), Some((245, 245, 245)));
        assert_eq!(parse_color("#ABC"), Some((0xaa, 0xbb, 0xcc)));
        assert_eq!(parse_color("transparent"), None);
        assert_eq!(parse_color("inherit"), None);
        assert_eq!(parse_color("rgb(300, 0, 0)"), None);
        assert_eq!(parse_color("hsl(0, 0%, 0%)"), None);
        assert_eq!(parse_color("rebeccapurple"), None);
    }

    #[test]
    fn test_relative_luminance() {
        assert!((relative_luminance((255, 255, 255)) - 1.0).abs() < 1e-9);
        assert!(relative_luminance((0, 0, 0)).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_ratio_black_white() {
        let ratio = contrast_ratio((0, 0, 0), (255, 255, 255));
        assert!((ratio - 21.0).abs() < 1e-9, "got {:.4}", ratio);
        assert_eq!(ratio, contrast_ratio((255, 255, 255), (0, 0, 0)));
    }

    #[test]
    fn test_near_black_pair_flagged() {
        let ratio = inline_contrast("color:#000000;background-color:#050505").unwrap();
        assert!(ratio < 1.05, "got {:.4}", ratio);

        let issues = run(r#"<p style="color:#000000;background-color:#050505">dark</p>"#);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Major);
        assert!(issues[0].description.starts_with(&format!("Contrast ratio {:.2}:1", ratio)));
        assert_eq!(issues[0].element, "\"dark\"");
    }

    #[test]
    fn test_black_on_white_passes() {
        assert!(run(r#"<p style="color:#000000;background:#ffffff">ok</p>"#).is_empty());
    }

    #[test]
    fn test_background_color_is_not_foreground() {
        // only a background declaration: no pair, no check
        assert!(inline_contrast("background-color:#fff").is_none());
        assert!(run(r#"<p style="background-color:#fff">x</p>"#).is_empty());
    }

    #[test]
    fn test_keyword_skips_silently() {
        assert!(run(r#"<p style="color:#777;background:transparent">x</p>"#).is_empty());
        assert!(run(r#"<p style="color:inherit;background:#777">x</p>"#).is_empty());
    }

    #[test]
    fn test_named_colors() {
        let issues = run(r#"<span style="background: white; color: lightgray">faint</span>"#);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_empty_text_label() {
        let issues = run(r#"<div style="color:#fff;background-color:#eee"></div>"#);
        assert_eq!(issues[0].element, "Element with inline style");
    }
}
