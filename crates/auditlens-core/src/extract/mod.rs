//! Per-tool extraction of scores, findings, and artifacts.
//!
//! Each submodule owns the expected payload shape for one tool family and
//! folds one classified result into the shared [`Accumulator`]. Payloads are
//! deserialized leniently: missing fields take defaults and a malformed
//! payload degrades to an empty one instead of failing the merge.
//!
//! Where two tools cover the same category, the merge direction encodes a
//! policy judgment:
//! - accessibility is a quality signal, so the better score wins (`max`);
//! - security is a risk signal, so the worse score wins (`min`);
//! - performance, SEO, and responsive have a single source and overwrite.

pub mod axe;
pub mod lighthouse;
pub mod responsive;
pub mod security_headers;
pub mod wave;
pub mod webhint;
pub mod zap;

use serde_json::Value;

use crate::classify::ToolKind;
use crate::report::{Finding, ScoreMap};

/// Call-scoped accumulator one merge folds every result into.
///
/// Owned by the orchestrator for the duration of a single merge call;
/// extractors only ever see it as a mutable borrow.
#[derive(Debug, Default)]
pub struct Accumulator {
    pub score: ScoreMap,
    pub findings: Vec<Finding>,
    pub artifacts: Vec<String>,
}

/// Dispatch one classified result to its extractor.
pub fn apply(kind: ToolKind, item: &Value, acc: &mut Accumulator) {
    match kind {
        ToolKind::Lighthouse => lighthouse::extract(item, acc),
        ToolKind::Axe => axe::extract(item, acc),
        ToolKind::Wave => wave::extract(item, acc),
        ToolKind::SecurityHeaders => security_headers::extract(item, acc),
        ToolKind::Zap => zap::extract(item, acc),
        ToolKind::Responsive => responsive::extract(item, acc),
        ToolKind::Webhint => webhint::extract(item, acc),
        ToolKind::Unknown => {}
    }
}

/// Deserialize a tool payload out of a raw result, falling back to the
/// payload's default when the shape does not line up.
fn lenient<T>(item: &Value) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    serde_json::from_value(item.clone()).unwrap_or_default()
}
