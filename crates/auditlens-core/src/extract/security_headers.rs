//! Security response-header extraction.

use serde::Deserialize;
use serde_json::{Value, json};

use super::Accumulator;
use crate::report::{Category, Finding, Severity};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SecurityHeadersPayload {
    security_score: f64,
    headers: HeaderFlags,
}

/// Presence flags for the six headers the analyzer checks.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HeaderFlags {
    csp: bool,
    hsts: bool,
    xfo: bool,
    xcto: bool,
    referrer: bool,
    permissions: bool,
}

impl HeaderFlags {
    /// Flags in their fixed reporting order.
    fn entries(&self) -> [(&'static str, bool); 6] {
        [
            ("csp", self.csp),
            ("hsts", self.hsts),
            ("xfo", self.xfo),
            ("xcto", self.xcto),
            ("referrer", self.referrer),
            ("permissions", self.permissions),
        ]
    }
}

fn display_name(key: &'static str) -> &'static str {
    match key {
        "csp" => "Content Security Policy",
        "hsts" => "HTTP Strict Transport Security",
        "xfo" => "X-Frame-Options",
        "xcto" => "X-Content-Type-Options",
        "referrer" => "Referrer Policy",
        "permissions" => "Permissions Policy",
        _ => key,
    }
}

/// Fold one security-headers result into the accumulator.
///
/// Header analysis can only raise the security score; a later ZAP scan may
/// still drag it down via min-merge.
pub fn extract(item: &Value, acc: &mut Accumulator) {
    let payload: SecurityHeadersPayload = super::lenient(item);

    acc.score.security = acc.score.security.max(payload.security_score);

    for (key, present) in payload.headers.entries() {
        if present {
            continue;
        }
        let severity = if matches!(key, "csp" | "hsts") {
            Severity::High
        } else {
            Severity::Medium
        };
        acc.findings.push(Finding {
            category: Category::Security,
            severity,
            summary: format!("Missing {} header", display_name(key)),
            evidence: json!({"header": key}),
            recommendation: format!("Implement {} header", display_name(key)),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_headers_present() {
        let item = json!({
            "securityScore": 100,
            "headers": {
                "csp": true, "hsts": true, "xfo": true,
                "xcto": true, "referrer": true, "permissions": true
            }
        });

        let mut acc = Accumulator::default();
        extract(&item, &mut acc);

        assert_eq!(acc.score.security, 100.0);
        assert!(acc.findings.is_empty());
    }

    #[test]
    fn test_missing_headers_become_findings() {
        let item = json!({
            "securityScore": 50,
            "headers": {
                "csp": false, "hsts": true, "xfo": false,
                "xcto": true, "referrer": true, "permissions": true
            }
        });

        let mut acc = Accumulator::default();
        extract(&item, &mut acc);

        assert_eq!(acc.findings.len(), 2);

        let csp = &acc.findings[0];
        assert_eq!(csp.severity, Severity::High);
        assert_eq!(csp.summary, "Missing Content Security Policy header");
        assert_eq!(csp.evidence["header"], "csp");

        let xfo = &acc.findings[1];
        assert_eq!(xfo.severity, Severity::Medium);
        assert_eq!(xfo.recommendation, "Implement X-Frame-Options header");
    }

    #[test]
    fn test_never_lowers_security_score() {
        let item = json!({"securityScore": 60, "headers": {
            "csp": true, "hsts": true, "xfo": true,
            "xcto": true, "referrer": true, "permissions": true
        }});

        let mut acc = Accumulator::default();
        acc.score.security = 90.0;
        extract(&item, &mut acc);

        assert_eq!(acc.score.security, 90.0);
    }
}
