//! Webhint best-practices extraction.
//!
//! Webhint cuts across categories and contributes findings only, never a
//! base score; the category of each hint is inferred from its id.

use serde::Deserialize;
use serde_json::{Value, json};

use super::Accumulator;
use crate::report::{Category, Finding, Severity};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WebhintPayload {
    hints: Vec<Hint>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Hint {
    hint_id: String,
    severity: Option<String>,
    message: String,
    resource: Option<String>,
}

pub fn extract(item: &Value, acc: &mut Accumulator) {
    let payload: WebhintPayload = super::lenient(item);

    for hint in &payload.hints {
        acc.findings.push(Finding {
            category: hint_category(&hint.hint_id),
            severity: hint_severity(hint.severity.as_deref()),
            summary: hint.message.clone(),
            evidence: json!({
                "hintId": hint.hint_id,
                "resource": hint.resource,
            }),
            recommendation: format!("Address {} issue", hint.hint_id),
        });
    }
}

fn hint_category(hint_id: &str) -> Category {
    if hint_id.contains("accessibility") || hint_id.contains("axe") {
        Category::A11y
    } else if hint_id.contains("performance") || hint_id.contains("speed") {
        Category::Perf
    } else if hint_id.contains("security") || hint_id.contains("https") {
        Category::Security
    } else {
        Category::Seo
    }
}

fn hint_severity(severity: Option<&str>) -> Severity {
    // An absent severity means webhint's informational "hint" level.
    match severity.unwrap_or("hint") {
        "error" => Severity::High,
        "warning" => Severity::Medium,
        "hint" => Severity::Low,
        _ => Severity::Medium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_inference() {
        assert_eq!(hint_category("axe/forms"), Category::A11y);
        assert_eq!(hint_category("accessibility-check"), Category::A11y);
        assert_eq!(hint_category("speed-index"), Category::Perf);
        assert_eq!(hint_category("https-only"), Category::Security);
        assert_eq!(hint_category("meta-viewport"), Category::Seo);
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(hint_severity(Some("error")), Severity::High);
        assert_eq!(hint_severity(Some("warning")), Severity::Medium);
        assert_eq!(hint_severity(Some("hint")), Severity::Low);
        assert_eq!(hint_severity(Some("information")), Severity::Medium);
        assert_eq!(hint_severity(None), Severity::Low);
    }

    #[test]
    fn test_hints_become_findings_without_scores() {
        let item = json!({
            "hints": [{
                "hintId": "https-only",
                "severity": "error",
                "message": "Site served over plain HTTP",
                "resource": "http://example.com/"
            }]
        });

        let mut acc = Accumulator::default();
        extract(&item, &mut acc);

        assert_eq!(acc.score, Default::default());
        let f = &acc.findings[0];
        assert_eq!(f.category, Category::Security);
        assert_eq!(f.severity, Severity::High);
        assert_eq!(f.summary, "Site served over plain HTTP");
        assert_eq!(f.recommendation, "Address https-only issue");
        assert_eq!(f.evidence["resource"], "http://example.com/");
    }
}
