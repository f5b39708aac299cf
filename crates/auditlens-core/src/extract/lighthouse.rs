//! Lighthouse performance and SEO extraction.

use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;

use super::Accumulator;
use crate::report::{Category, Finding, Severity};

/// Audits scoring below this are surfaced as findings.
const FINDING_CUTOFF: f64 = 0.9;
/// Audits scoring below this are reported as high severity.
const HIGH_SEVERITY_CUTOFF: f64 = 0.5;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct LighthousePayload {
    category_scores: CategoryScores,
    audits: BTreeMap<String, Audit>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CategoryScores {
    performance: f64,
    accessibility: f64,
    seo: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Audit {
    /// 0..1 audit score; informational audits carry none and count as passing.
    score: Option<f64>,
    title: Option<String>,
    display_value: Option<String>,
    description: Option<String>,
}

/// Fold one Lighthouse result into the accumulator.
///
/// Performance and SEO have no second source and overwrite outright.
/// Accessibility only ever raises the running value: a dedicated scanner may
/// already have scored it, and the better signal wins.
pub fn extract(item: &Value, acc: &mut Accumulator) {
    let payload: LighthousePayload = super::lenient(item);

    acc.score.perf = payload.category_scores.performance;
    acc.score.seo = payload.category_scores.seo;

    let a11y = payload.category_scores.accessibility;
    if a11y > 0.0 {
        acc.score.a11y = acc.score.a11y.max(a11y);
    }

    for (audit_id, audit) in &payload.audits {
        if audit.score.unwrap_or(1.0) >= FINDING_CUTOFF {
            continue;
        }
        let category = if audit_id.contains("performance") {
            Category::Perf
        } else {
            Category::Seo
        };
        let severity = if audit.score.unwrap_or(1.0) < HIGH_SEVERITY_CUTOFF {
            Severity::High
        } else {
            Severity::Medium
        };
        acc.findings.push(Finding {
            category,
            severity,
            summary: audit.title.clone().unwrap_or_else(|| audit_id.clone()),
            evidence: json!({
                "score": audit.score,
                "displayValue": audit.display_value,
            }),
            recommendation: audit.description.clone().unwrap_or_default(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_category_scores() {
        let item = json!({
            "status": "ok",
            "categoryScores": {
                "performance": 85,
                "accessibility": 90,
                "seo": 80,
                "bestPractices": 88
            },
            "audits": {}
        });

        let mut acc = Accumulator::default();
        extract(&item, &mut acc);

        assert_eq!(acc.score.perf, 85.0);
        assert_eq!(acc.score.seo, 80.0);
        assert_eq!(acc.score.a11y, 90.0);
        assert!(acc.findings.is_empty());
    }

    #[test]
    fn test_zero_accessibility_leaves_existing_score() {
        let item = json!({
            "categoryScores": {"performance": 70, "seo": 60, "accessibility": 0}
        });

        let mut acc = Accumulator::default();
        acc.score.a11y = 45.0;
        extract(&item, &mut acc);

        assert_eq!(acc.score.a11y, 45.0);
    }

    #[test]
    fn test_failing_audits_become_findings() {
        let item = json!({
            "categoryScores": {"performance": 50, "seo": 70},
            "audits": {
                "uses-performance-marks": {
                    "score": 0.3,
                    "title": "Slow marks",
                    "description": "Speed things up"
                },
                "meta-description": {
                    "score": 0.7,
                    "title": "Missing meta description"
                },
                "passing-audit": {"score": 1.0, "title": "Fine"},
                "informational": {"title": "No score at all"}
            }
        });

        let mut acc = Accumulator::default();
        extract(&item, &mut acc);

        assert_eq!(acc.findings.len(), 2);
        let perf = acc
            .findings
            .iter()
            .find(|f| f.category == Category::Perf)
            .unwrap();
        assert_eq!(perf.severity, Severity::High);
        assert_eq!(perf.summary, "Slow marks");
        assert_eq!(perf.recommendation, "Speed things up");

        let seo = acc
            .findings
            .iter()
            .find(|f| f.category == Category::Seo)
            .unwrap();
        assert_eq!(seo.severity, Severity::Medium);
    }

    #[test]
    fn test_malformed_payload_contributes_nothing() {
        let item = json!({"categoryScores": "definitely not an object"});

        let mut acc = Accumulator::default();
        extract(&item, &mut acc);

        assert_eq!(acc.score.perf, 0.0);
        assert!(acc.findings.is_empty());
    }
}
