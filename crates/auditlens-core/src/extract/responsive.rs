//! Responsive-layout probe extraction.

use serde::Deserialize;
use serde_json::{Value, json};

use super::Accumulator;
use crate::report::{Category, Finding, Severity};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ResponsivePayload {
    responsive_score: f64,
    summaries: Vec<ViewportSummary>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ViewportSummary {
    /// Viewport size such as "360x640".
    viewport: String,
    overflow_count: u64,
    bad_tap_targets: u64,
    screenshot_path: Option<String>,
}

/// Fold one responsive probe result into the accumulator.
///
/// The probe is the only responsive source, so its score lands as-is.
pub fn extract(item: &Value, acc: &mut Accumulator) {
    let payload: ResponsivePayload = super::lenient(item);

    acc.score.responsive = payload.responsive_score;

    for summary in &payload.summaries {
        if summary.overflow_count > 0 {
            acc.findings.push(Finding {
                category: Category::Responsive,
                severity: Severity::Medium,
                summary: format!("Horizontal overflow detected on {}", summary.viewport),
                evidence: json!({
                    "viewport": summary.viewport,
                    "overflowCount": summary.overflow_count,
                }),
                recommendation: "Fix horizontal scrolling issues".to_string(),
            });
        }

        if summary.bad_tap_targets > 0 {
            acc.findings.push(Finding {
                category: Category::Responsive,
                severity: Severity::Medium,
                summary: format!("Small tap targets detected on {}", summary.viewport),
                evidence: json!({
                    "viewport": summary.viewport,
                    "badTapTargets": summary.bad_tap_targets,
                }),
                recommendation: "Increase tap target sizes to at least 44px".to_string(),
            });
        }

        if let Some(path) = &summary.screenshot_path {
            acc.artifacts.push(path.clone());
        }
    }
}
