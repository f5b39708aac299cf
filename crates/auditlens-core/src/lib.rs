//! # auditlens-core
//!
//! Core library for merging results from independent web-quality audit
//! tools (Lighthouse, axe, WAVE, security-header analysis, ZAP, a
//! responsive-layout probe, webhint) into a single normalized report with a
//! weighted composite score and budget-based pass/fail gating.
//!
//! The engine never runs a tool itself: the caller collects raw per-tool
//! result objects and hands them over as a batch. Each result is classified
//! by shape, folded into shared score and finding accumulators by its
//! extractor, aggregated into a weighted global score, optionally gated
//! against budgets, and rendered as JSON and HTML documents.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn example() -> Result<(), auditlens_core::MergeError> {
//! let items = vec![serde_json::json!({
//!     "status": "ok",
//!     "categoryScores": {"performance": 85, "accessibility": 90, "seo": 80}
//! })];
//!
//! let outcome = auditlens_core::merge(&items, None, Path::new("artifacts"))?;
//! println!("global score: {}", outcome.report.score.global);
//! # Ok(())
//! # }
//! ```

pub mod budget;
pub mod classify;
pub mod error;
pub mod extract;
pub mod merge;
pub mod render;
pub mod report;
pub mod score;

// Re-export the merge surface most callers need.
pub use budget::Budgets;
pub use classify::{ToolKind, classify};
pub use error::MergeError;
pub use merge::{MergeOutcome, merge, merge_reports};
pub use report::{
    BudgetResult, Category, Finding, MergedReport, ScoreMap, Severity, Summary,
};
