//! ZAP dynamic-security extraction.

use serde::Deserialize;
use serde_json::{Value, json};

use super::Accumulator;
use crate::report::{Category, Finding, Severity};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ZapPayload {
    security_score: f64,
    alerts: Vec<ZapAlert>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ZapAlert {
    name: String,
    /// Risk label such as "High (Medium)" or "WARN NEW"; only the first word
    /// drives the severity mapping.
    risk: String,
    instances: u64,
    solution: Option<String>,
}

/// Fold one ZAP scan result into the accumulator.
///
/// An active scan can only lower the security score: a clean header check
/// does not excuse a live vulnerability. A still-unset (zero) score is
/// treated as 100 so the min-merge starts from "no worse signal yet".
pub fn extract(item: &Value, acc: &mut Accumulator) {
    let payload: ZapPayload = super::lenient(item);

    let current = if acc.score.security == 0.0 {
        100.0
    } else {
        acc.score.security
    };
    acc.score.security = current.min(payload.security_score);

    for alert in &payload.alerts {
        acc.findings.push(Finding {
            category: Category::Security,
            severity: risk_severity(&alert.risk),
            summary: alert.name.clone(),
            evidence: json!({
                "risk": alert.risk,
                "instances": alert.instances,
            }),
            recommendation: alert
                .solution
                .clone()
                .unwrap_or_else(|| "Review security alert".to_string()),
        });
    }
}

fn risk_severity(risk: &str) -> Severity {
    let level = risk
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase();
    match level.as_str() {
        "high" => Severity::Critical,
        "medium" => Severity::High,
        _ => Severity::Medium,
    }
}
