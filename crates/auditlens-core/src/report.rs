//! Data model for merged audit reports.
//!
//! A [`MergedReport`] is built once per merge call and never mutated after
//! construction. Its JSON serialization is the structured report document.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Number of finding summaries surfaced as top issues.
pub const TOP_ISSUE_LIMIT: usize = 5;

/// One of the five scored quality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Perf,
    A11y,
    Seo,
    Security,
    Responsive,
}

impl Category {
    /// Short key used in score maps and budget lookups.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Perf => "perf",
            Category::A11y => "a11y",
            Category::Seo => "seo",
            Category::Security => "security",
            Category::Responsive => "responsive",
        }
    }

    /// Human-readable label used in rendered reports.
    pub fn label(self) -> &'static str {
        match self {
            Category::Perf => "Performance",
            Category::A11y => "Accessibility",
            Category::Seo => "SEO",
            Category::Security => "Security",
            Category::Responsive => "Responsive",
        }
    }
}

/// How urgent a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

/// Per-category scores in [0, 100], plus the weighted global composite.
///
/// A category no tool contributed to stays at 0 and still weighs into the
/// global score; "untested" and "failed" are indistinguishable here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreMap {
    pub perf: f64,
    pub a11y: f64,
    pub seo: f64,
    pub security: f64,
    pub responsive: f64,
    pub global: f64,
}

impl ScoreMap {
    /// Look up a score by its short key, `"global"` included.
    ///
    /// Returns `None` for names outside the fixed category set, which is how
    /// unknown budget keys end up silently ignored.
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "perf" => Some(self.perf),
            "a11y" => Some(self.a11y),
            "seo" => Some(self.seo),
            "security" => Some(self.security),
            "responsive" => Some(self.responsive),
            "global" => Some(self.global),
            _ => None,
        }
    }

    /// Score of one of the five quality dimensions.
    pub fn category(&self, category: Category) -> f64 {
        match category {
            Category::Perf => self.perf,
            Category::A11y => self.a11y,
            Category::Seo => self.seo,
            Category::Security => self.security,
            Category::Responsive => self.responsive,
        }
    }
}

/// One discrete issue extracted from a tool's raw output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub category: Category,
    pub severity: Severity,
    /// One-line description of the issue.
    pub summary: String,
    /// Tool-specific supporting data, kept opaque.
    pub evidence: Value,
    /// What to do about it.
    pub recommendation: String,
}

/// Outcome of gating one category score against its budget threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetResult {
    pub threshold: f64,
    pub actual: f64,
    pub passed: bool,
}

/// Headline numbers for the merged report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub overall_score: f64,
    pub total_findings: usize,
    pub critical_findings: usize,
    pub high_findings: usize,
    /// Summaries of the first critical findings, then high findings, in
    /// insertion order, capped at [`TOP_ISSUE_LIMIT`].
    pub top_issues: Vec<String>,
}

impl Summary {
    /// Derive the summary from final scores and the full findings list.
    pub fn compute(score: &ScoreMap, findings: &[Finding]) -> Self {
        let critical_findings = findings
            .iter()
            .filter(|f| f.severity == Severity::Critical)
            .count();
        let high_findings = findings
            .iter()
            .filter(|f| f.severity == Severity::High)
            .count();

        let top_issues = findings
            .iter()
            .filter(|f| f.severity == Severity::Critical)
            .chain(findings.iter().filter(|f| f.severity == Severity::High))
            .take(TOP_ISSUE_LIMIT)
            .map(|f| f.summary.clone())
            .collect();

        Summary {
            overall_score: score.global,
            total_findings: findings.len(),
            critical_findings,
            high_findings,
            top_issues,
        }
    }
}

/// The unified result of one merge call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedReport {
    /// RFC 3339 generation time.
    pub timestamp: String,
    pub score: ScoreMap,
    pub findings: Vec<Finding>,
    /// Paths to artifacts collected from the tools (screenshots, raw dumps).
    pub artifacts: Vec<String>,
    /// Budget verdicts, empty when the caller supplied no budgets.
    pub budgets: BTreeMap<String, BudgetResult>,
    pub summary: Summary,
}
