//! Merge orchestration.
//!
//! The engine is a synchronous fold over an already-collected batch of tool
//! results: classify each item, let its extractor fold scores and findings
//! into a call-scoped accumulator, aggregate, gate against budgets, render.
//! The only side effect lives in [`merge`], which persists the two rendered
//! documents; [`merge_reports`] is the pure part.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde_json::Value;
use tracing::{debug, warn};

use crate::budget::{self, Budgets};
use crate::classify::{self, ToolKind};
use crate::error::{MergeError, Result};
use crate::extract::{self, Accumulator};
use crate::render;
use crate::report::{MergedReport, Summary};
use crate::score;

/// A merged report plus the files it was persisted to.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub report: MergedReport,
    pub json_path: PathBuf,
    pub html_path: PathBuf,
}

/// Merge a batch of raw audit results into one report, without touching disk.
///
/// Items whose `status` is not `"ok"` and items of unrecognized shape are
/// skipped silently; their absence from the report is the only diagnostic.
/// The remaining items are processed in input order.
pub fn merge_reports(items: &[Value], budgets: Option<&Budgets>) -> Result<MergedReport> {
    if items.is_empty() {
        return Err(MergeError::EmptyInput);
    }

    let mut acc = Accumulator::default();
    for item in items {
        if item.get("status").and_then(Value::as_str) != Some("ok") {
            warn!("skipping audit result without ok status");
            continue;
        }

        let kind = classify::classify(item);
        if kind == ToolKind::Unknown {
            warn!("skipping audit result of unrecognized shape");
            continue;
        }

        debug!(tool = kind.as_str(), "merging audit result");
        extract::apply(kind, item, &mut acc);
    }

    let Accumulator {
        mut score,
        findings,
        artifacts,
    } = acc;
    score::finalize(&mut score);

    let budgets = budgets
        .map(|b| budget::evaluate(&score, b))
        .unwrap_or_default();
    let summary = Summary::compute(&score, &findings);

    Ok(MergedReport {
        timestamp: Local::now().to_rfc3339(),
        score,
        findings,
        artifacts,
        budgets,
        summary,
    })
}

/// Merge a batch of results and persist the JSON and HTML reports.
///
/// Reports are named with one-second granularity; two merges within the same
/// second write to the same paths and the later one wins. The output
/// directory is created if missing. On any persistence failure the error
/// carries the underlying cause and no outcome is returned.
pub fn merge(items: &[Value], budgets: Option<&Budgets>, out_dir: &Path) -> Result<MergeOutcome> {
    let report = merge_reports(items, budgets)?;

    fs::create_dir_all(out_dir)?;
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let json_path = out_dir.join(format!("report-{stamp}.json"));
    let html_path = out_dir.join(format!("report-{stamp}.html"));

    fs::write(&json_path, render::render_json(&report)?)?;
    fs::write(&html_path, render::render_html(&report))?;

    debug!(
        json = %json_path.display(),
        html = %html_path.display(),
        "wrote merged reports"
    );

    Ok(MergeOutcome {
        report,
        json_path,
        html_path,
    })
}
