// SPDX-License-Identifier: PMPL-1.0-or-later
//! Scoring model.
//!
//! Linear penalties per issue, subtracted from 100 and clamped to 0..=100.
//! Severity ordering and penalty weights are declared as tables so the sort
//! order and the score both derive from one place.

use crate::model::{Severity, Summary};
use std::cmp::Ordering;

/// Reporting order, most severe first
pub const SEVERITY_RANK: [Severity; 3] = [Severity::Critical, Severity::Major, Severity::Minor];

/// Points deducted per issue
pub const PENALTIES: [(Severity, u32); 3] = [
    (Severity::Critical, 15),
    (Severity::Major, 8),
    (Severity::Minor, 3),
];

pub const MAX_SCORE: u32 = 100;

/// Position of a severity in the reporting order
pub fn rank(severity: Severity) -> usize {
    SEVERITY_RANK
        .iter()
        .position(|s| *s == severity)
        .unwrap_or(SEVERITY_RANK.len())
}

/// Comparator for sorting issues critical → major → minor
pub fn compare_severity(a: Severity, b: Severity) -> Ordering {
    rank(a).cmp(&rank(b))
}

/// Penalty for one issue of the given severity
pub fn penalty(severity: Severity) -> u32 {
    PENALTIES
        .iter()
        .find(|(s, _)| *s == severity)
        .map(|(_, p)| *p)
        .unwrap_or(0)
}

/// Score for a severity summary
pub fn score(summary: &Summary) -> u32 {
    let total_penalty: u64 = Severity::ALL
        .iter()
        .map(|s| summary.count(*s) as u64 * penalty(*s) as u64)
        .sum();
    MAX_SCORE.saturating_sub(total_penalty.min(MAX_SCORE as u64) as u32)
}

/// Qualitative band for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreGrade {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
    Critical,
}

impl ScoreGrade {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => ScoreGrade::Excellent,
            80..=89 => ScoreGrade::Good,
            60..=79 => ScoreGrade::NeedsImprovement,
            40..=59 => ScoreGrade::Poor,
            _ => ScoreGrade::Critical,
        }
    }
}

impl std::fmt::Display for ScoreGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreGrade::Excellent => write!(f, "Excellent"),
            ScoreGrade::Good => write!(f, "Good"),
            ScoreGrade::NeedsImprovement => write!(f, "Needs improvement"),
            ScoreGrade::Poor => write!(f, "Poor"),
            ScoreGrade::Critical => write!(f, "Critical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(critical: usize, major: usize, minor: usize) -> Summary {
        Summary { critical, major, minor }
    }

    #[test]
    fn test_perfect_score() {
        assert_eq!(score(&summary(0, 0, 0)), 100);
    }

    #[test]
    fn test_linear_penalties() {
        assert_eq!(score(&summary(2, 0, 0)), 70);
        assert_eq!(score(&summary(0, 2, 0)), 84);
        assert_eq!(score(&summary(1, 1, 1)), 74);
    }

    #[test]
    fn test_clamped_at_zero() {
        assert_eq!(score(&summary(7, 0, 0)), 0);
        assert_eq!(score(&summary(1000, 1000, 1000)), 0);
    }

    #[test]
    fn test_matches_formula() {
        for c in 0..5 {
            for m in 0..5 {
                for n in 0..5 {
                    let expected = (100i64 - 15 * c - 8 * m - 3 * n).clamp(0, 100) as u32;
                    assert_eq!(
                        score(&summary(c as usize, m as usize, n as usize)),
                        expected
                    );
                }
            }
        }
    }

    #[test]
    fn test_rank_order() {
        assert_eq!(compare_severity(Severity::Critical, Severity::Major), Ordering::Less);
        assert_eq!(compare_severity(Severity::Minor, Severity::Major), Ordering::Greater);
        assert_eq!(compare_severity(Severity::Major, Severity::Major), Ordering::Equal);
    }

    #[test]
    fn test_grades() {
        assert_eq!(ScoreGrade::from_score(100), ScoreGrade::Excellent);
        assert_eq!(ScoreGrade::from_score(84), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_score(70), ScoreGrade::NeedsImprovement);
        assert_eq!(ScoreGrade::from_score(40), ScoreGrade::Poor);
        assert_eq!(ScoreGrade::from_score(0), ScoreGrade::Critical);
    }
}
