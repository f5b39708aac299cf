//! Structural classification of raw audit results.
//!
//! Tool results carry no explicit type tag, so the producing tool is
//! recognized from the fields present in the object. The checks run in a
//! fixed priority order and the first match wins.

use serde_json::Value;

/// The tool family a raw audit result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Lighthouse,
    Axe,
    Wave,
    SecurityHeaders,
    Zap,
    Responsive,
    Webhint,
    Unknown,
}

impl ToolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolKind::Lighthouse => "lighthouse",
            ToolKind::Axe => "axe",
            ToolKind::Wave => "wave",
            ToolKind::SecurityHeaders => "security_headers",
            ToolKind::Zap => "zap",
            ToolKind::Responsive => "responsive",
            ToolKind::Webhint => "webhint",
            ToolKind::Unknown => "unknown",
        }
    }
}

/// Identify the producing tool from the result's shape alone.
///
/// Total function: anything that matches no signature is [`ToolKind::Unknown`]
/// and contributes nothing to a merge.
pub fn classify(item: &Value) -> ToolKind {
    let has = |key: &str| item.get(key).is_some();

    if has("categoryScores") {
        ToolKind::Lighthouse
    } else if has("violations") {
        ToolKind::Axe
    } else if has("issues") && has("reportType") {
        ToolKind::Wave
    } else if has("headers") && has("securityScore") {
        ToolKind::SecurityHeaders
    } else if has("alerts") && has("scanDuration") {
        ToolKind::Zap
    } else if has("summaries") && has("responsiveScore") {
        ToolKind::Responsive
    } else if has("hints") {
        ToolKind::Webhint
    } else {
        ToolKind::Unknown
    }
}
