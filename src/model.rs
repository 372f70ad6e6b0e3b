// SPDX-License-Identifier: PMPL-1.0-or-later
//! Output contract of a scan: issues, severity summary and the scan result.
//!
//! Field names and the severity values are part of the wire format read by
//! the presentation and report consumers, so the serde renames here must not
//! change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a detected violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks access to content for some users
    Critical,
    /// Significantly degrades access
    Major,
    /// Inconvenience
    Minor,
}

impl Severity {
    /// All severities in reporting order
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Major, Severity::Minor];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Major => "major",
            Severity::Minor => "minor",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Major => write!(f, "MAJOR"),
            Severity::Minor => write!(f, "MINOR"),
        }
    }
}

/// A single detected accessibility violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Short name of the failed check
    pub criterion: String,
    /// WCAG success criterion (e.g. "1.1.1")
    #[serde(rename = "wcag")]
    pub wcag_ref: String,
    /// RGAA criterion (e.g. "8.3")
    #[serde(rename = "rgaa", default, skip_serializing_if = "Option::is_none")]
    pub rgaa_ref: Option<String>,
    pub severity: Severity,
    /// Generated explanation
    pub description: String,
    /// Truncated rendering of the offending markup
    pub element: String,
    /// Structural path and text context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Remediation instruction
    pub fix: String,
}

impl Issue {
    /// Create a new issue
    pub fn new(criterion: &str, severity: Severity, description: &str) -> Self {
        Self {
            criterion: criterion.to_string(),
            wcag_ref: String::new(),
            rgaa_ref: None,
            severity,
            description: description.to_string(),
            element: String::new(),
            location: None,
            fix: String::new(),
        }
    }

    /// Set the WCAG criterion
    pub fn with_wcag(mut self, criterion: &str) -> Self {
        self.wcag_ref = criterion.to_string();
        self
    }

    /// Set the RGAA criterion
    pub fn with_rgaa(mut self, criterion: &str) -> Self {
        self.rgaa_ref = Some(criterion.to_string());
        self
    }

    /// Set the offending element rendering
    pub fn with_element(mut self, element: &str) -> Self {
        self.element = element.to_string();
        self
    }

    /// Set the location string
    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the fix instruction
    pub fn with_fix(mut self, fix: &str) -> Self {
        self.fix = fix.to_string();
        self
    }
}

/// Issue counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub critical: usize,
    pub major: usize,
    pub minor: usize,
}

impl Summary {
    /// Count issues per severity
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut summary = Summary::default();
        for issue in issues {
            match issue.severity {
                Severity::Critical => summary.critical += 1,
                Severity::Major => summary.major += 1,
                Severity::Minor => summary.minor += 1,
            }
        }
        summary
    }

    /// Count for one severity
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::Major => self.major,
            Severity::Minor => self.minor,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.major + self.minor
    }
}

/// The complete output of one analysis pass.
///
/// Only the assembler builds one; the accessors give read-only views so the
/// counts and the score always agree with the issue list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    url: String,
    timestamp: DateTime<Utc>,
    score: u32,
    total_checks: usize,
    issues_found: usize,
    issues: Vec<Issue>,
    summary: Summary,
}

impl ScanResult {
    pub(crate) fn new(
        url: String,
        timestamp: DateTime<Utc>,
        score: u32,
        total_checks: usize,
        issues: Vec<Issue>,
        summary: Summary,
    ) -> Self {
        Self {
            url,
            timestamp,
            score,
            total_checks,
            issues_found: issues.len(),
            issues,
            summary,
        }
    }

    /// Scanned URL, passed through verbatim
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Capture time of the result
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Score in 0..=100
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of elements and document-level checks examined
    pub fn total_checks(&self) -> usize {
        self.total_checks
    }

    pub fn issues_found(&self) -> usize {
        self.issues_found
    }

    /// Issues, critical first
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Issues of one severity, in result order
    pub fn by_severity(&self, severity: Severity) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.severity == severity).collect()
    }

    /// Whether any critical issue was found
    pub fn has_critical(&self) -> bool {
        self.summary.critical > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
