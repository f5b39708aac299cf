//! Axe DOM-accessibility extraction.

use serde::Deserialize;
use serde_json::{Value, json};

use super::Accumulator;
use crate::report::{Category, Finding, Severity};

// Score deductions per violation, by axe impact level.
const CRITICAL_PENALTY: f64 = 25.0;
const SERIOUS_PENALTY: f64 = 15.0;
const MODERATE_PENALTY: f64 = 10.0;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AxePayload {
    violations: Vec<Violation>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Violation {
    id: String,
    impact: String,
    description: Option<String>,
    help: String,
    /// Number of affected DOM nodes.
    nodes: u64,
    tags: Vec<String>,
}

/// Fold one axe result into the accumulator.
///
/// Axe is the primary accessibility source: its deduction-based score
/// overwrites whatever is there. A WAVE result processed later may still
/// raise it via max-merge.
pub fn extract(item: &Value, acc: &mut Accumulator) {
    let payload: AxePayload = super::lenient(item);

    let critical = count_impact(&payload.violations, "critical");
    let serious = count_impact(&payload.violations, "serious");
    let moderate = count_impact(&payload.violations, "moderate");

    let score = 100.0
        - critical * CRITICAL_PENALTY
        - serious * SERIOUS_PENALTY
        - moderate * MODERATE_PENALTY;
    acc.score.a11y = score.max(0.0);

    for violation in &payload.violations {
        acc.findings.push(Finding {
            category: Category::A11y,
            severity: impact_severity(&violation.impact),
            summary: violation
                .description
                .clone()
                .unwrap_or_else(|| violation.id.clone()),
            evidence: json!({
                "nodes": violation.nodes,
                "tags": violation.tags,
            }),
            recommendation: violation.help.clone(),
        });
    }
}

fn count_impact(violations: &[Violation], impact: &str) -> f64 {
    violations.iter().filter(|v| v.impact == impact).count() as f64
}

fn impact_severity(impact: &str) -> Severity {
    match impact {
        "critical" => Severity::Critical,
        "serious" => Severity::High,
        "moderate" => Severity::Medium,
        "minor" => Severity::Low,
        _ => Severity::Medium,
    }
}
