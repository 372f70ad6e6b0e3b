// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for scan results.
//!
//! Supports multiple output formats:
//! - Text: human-readable score and issue cards
//! - JSON: the scan result wire format, for the dashboard and report consumers
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use crate::model::{ScanResult, Severity};
use crate::scoring::ScoreGrade;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Scan result as JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report from a scan result
pub fn generate_report(result: &ScanResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(result),
        OutputFormat::Json => generate_json_report(result),
        OutputFormat::Sarif => generate_sarif_report(result),
    }
}

/// Generate human-readable text report
fn generate_text_report(result: &ScanResult) -> String {
    let mut output = String::new();
    let summary = result.summary();

    output.push_str("=== AccessScan Accessibility Report ===\n\n");
    output.push_str(&format!("URL: {}\n", result.url()));
    output.push_str(&format!("Scanned: {}\n", result.timestamp().to_rfc3339()));
    output.push_str(&format!(
        "Score: {}/100 ({})\n",
        result.score(),
        ScoreGrade::from_score(result.score())
    ));
    output.push_str(&format!(
        "{} check(s), {} issue(s): {} critical | {} major | {} minor\n\n",
        result.total_checks(),
        result.issues_found(),
        summary.critical,
        summary.major,
        summary.minor
    ));

    if result.is_clean() {
        output.push_str("No accessibility issues found.\n");
        return output;
    }

    let mut number = 0;
    for severity in Severity::ALL {
        let issues = result.by_severity(severity);
        if issues.is_empty() {
            continue;
        }

        output.push_str(&format!("--- {} ({}) ---\n", severity, issues.len()));

        for issue in issues {
            number += 1;
            output.push_str(&format!("{}. {}\n", number, issue.criterion));

            match issue.rgaa_ref {
                Some(ref rgaa) => output.push_str(&format!(
                    "  WCAG {} / RGAA {} - {}\n",
                    issue.wcag_ref, rgaa, issue.description
                )),
                None => output.push_str(&format!(
                    "  WCAG {} - {}\n",
                    issue.wcag_ref, issue.description
                )),
            }

            output.push_str(&format!("  Element: {}\n", issue.element));
            if let Some(ref location) = issue.location {
                output.push_str(&format!("  Location: {}\n", location));
            }
            output.push_str(&format!("  Fix: {}\n\n", issue.fix));
        }
    }

    output
}

/// Generate JSON report
fn generate_json_report(result: &ScanResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize scan result: {}\"}}", e)
    })
}

/// SARIF report structure (simplified)
#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
    #[serde(rename = "logicalLocations", skip_serializing_if = "Vec::is_empty")]
    logical_locations: Vec<SarifLogicalLocation>,
}

#[derive(Debug, Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Debug, Serialize)]
struct SarifLogicalLocation {
    #[serde(rename = "fullyQualifiedName")]
    fully_qualified_name: String,
}

/// Generate SARIF report
fn generate_sarif_report(result: &ScanResult) -> String {
    let results: Vec<SarifResult> = result
        .issues()
        .iter()
        .map(|issue| {
            let level = match issue.severity {
                Severity::Critical => "error",
                Severity::Major => "warning",
                Severity::Minor => "note",
            };

            SarifResult {
                rule_id: format!("WCAG-{}", issue.wcag_ref),
                level: level.to_string(),
                message: SarifMessage {
                    text: format!("{}: {} ({})", issue.criterion, issue.description, issue.element),
                },
                locations: vec![SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: result.url().to_string(),
                        },
                    },
                    logical_locations: issue
                        .location
                        .iter()
                        .map(|l| SarifLogicalLocation {
                            fully_qualified_name: l.clone(),
                        })
                        .collect(),
                }],
            }
        })
        .collect();

    let report = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "accessscan".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            },
            results,
        }],
    };

    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize SARIF report: {}\"}}", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_html;

    fn sample_result() -> ScanResult {
        analyze_html(
            r#"<html><body><img src="hero.png"><a href="/x"></a></body></html>"#,
            "https://example.com/",
        )
    }

    #[test]
    fn test_text_report_clean() {
        let result = analyze_html(
            r#"<html lang="en"><head><title>Ok</title></head><body></body></html>"#,
            "https://example.com/",
        );
        let report = generate_report(&result, OutputFormat::Text);
        assert!(report.contains("Score: 100/100 (Excellent)"));
        assert!(report.contains("No accessibility issues found"));
    }

    #[test]
    fn test_text_report_with_issues() {
        let report = generate_report(&sample_result(), OutputFormat::Text);
        assert!(report.contains("URL: https://example.com/"));
        assert!(report.contains("--- CRITICAL (1) ---"));
        assert!(report.contains("--- MAJOR (3) ---"));
        assert!(report.contains("1. Image without alternative text"));
        assert!(report.contains("WCAG 1.1.1 / RGAA 1.1 / 1.2"));
        assert!(report.find("CRITICAL").unwrap() < report.find("MAJOR").unwrap());
    }

    #[test]
    fn test_json_report() {
        let report = generate_report(&sample_result(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert_eq!(parsed["issuesFound"], 4);
        assert_eq!(parsed["issues"][0]["severity"], "critical");
        assert_eq!(parsed["summary"]["major"], 3);
    }

    #[test]
    fn test_json_report_deserializes_back() {
        let result = sample_result();
        let report = generate_report(&result, OutputFormat::Json);
        let parsed: ScanResult = serde_json::from_str(&report).expect("valid scan result");
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_sarif_report() {
        let report = generate_report(&sample_result(), OutputFormat::Sarif);
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert_eq!(parsed["version"], "2.1.0");
        let results = parsed["runs"][0]["results"].as_array().unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0]["ruleId"], "WCAG-1.1.1");
        assert_eq!(results[0]["level"], "error");
        assert_eq!(
            results[0]["locations"][0]["physicalLocation"]["artifactLocation"]["uri"],
            "https://example.com/"
        );
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("sarif".parse::<OutputFormat>().unwrap(), OutputFormat::Sarif);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }
}
