//! WAVE third-party accessibility extraction.

use serde::Deserialize;
use serde_json::{Value, json};

use super::Accumulator;
use crate::report::{Category, Finding, Severity};

const CRITICAL_PENALTY: f64 = 20.0;
const MODERATE_PENALTY: f64 = 10.0;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WavePayload {
    issues: Vec<WaveIssue>,
    artifacts: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WaveIssue {
    impact: String,
    summary: String,
    #[serde(rename = "type")]
    kind: String,
    selector: Option<String>,
}

/// Fold one WAVE result into the accumulator.
///
/// WAVE never lowers the accessibility score: the category ends up as good
/// as the more lenient of the credible scanners says it is.
pub fn extract(item: &Value, acc: &mut Accumulator) {
    let payload: WavePayload = super::lenient(item);

    let critical = payload.issues.iter().filter(|i| i.impact == "critical").count() as f64;
    let moderate = payload.issues.iter().filter(|i| i.impact == "moderate").count() as f64;

    let score = (100.0 - critical * CRITICAL_PENALTY - moderate * MODERATE_PENALTY).max(0.0);
    acc.score.a11y = acc.score.a11y.max(score);

    for issue in &payload.issues {
        let severity = if issue.impact == "critical" {
            Severity::High
        } else {
            Severity::Medium
        };
        acc.findings.push(Finding {
            category: Category::A11y,
            severity,
            summary: issue.summary.clone(),
            evidence: json!({
                "type": issue.kind,
                "selector": issue.selector,
            }),
            recommendation: format!("Review {} issue", issue.kind),
        });
    }

    acc.artifacts.extend(payload.artifacts.iter().cloned());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_merges_accessibility() {
        let item = json!({
            "reportType": 2,
            "issues": [
                {"impact": "critical", "summary": "Missing alt", "type": "alt_missing"},
                {"impact": "moderate", "summary": "Low contrast", "type": "contrast"}
            ]
        });

        // Axe already scored lower; WAVE's 70 wins.
        let mut acc = Accumulator::default();
        acc.score.a11y = 45.0;
        extract(&item, &mut acc);
        assert_eq!(acc.score.a11y, 70.0);

        // An existing higher score stays.
        let mut acc = Accumulator::default();
        acc.score.a11y = 85.0;
        extract(&item, &mut acc);
        assert_eq!(acc.score.a11y, 85.0);
    }

    #[test]
    fn test_issue_severities() {
        let item = json!({
            "reportType": 2,
            "issues": [
                {"impact": "critical", "summary": "Bad", "type": "alt_missing"},
                {"impact": "moderate", "summary": "Meh", "type": "contrast"}
            ]
        });

        let mut acc = Accumulator::default();
        extract(&item, &mut acc);

        assert_eq!(acc.findings[0].severity, Severity::High);
        assert_eq!(acc.findings[1].severity, Severity::Medium);
        assert_eq!(acc.findings[1].recommendation, "Review contrast issue");
    }

    #[test]
    fn test_collects_artifacts() {
        let item = json!({
            "reportType": 2,
            "issues": [],
            "artifacts": ["artifacts/wave-20240101_120000.json"]
        });

        let mut acc = Accumulator::default();
        extract(&item, &mut acc);

        assert_eq!(acc.artifacts, vec!["artifacts/wave-20240101_120000.json"]);
        // No issues at all still counts as a perfect signal.
        assert_eq!(acc.score.a11y, 100.0);
    }
}
