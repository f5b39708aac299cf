//! Report rendering.
//!
//! Two documents come out of every merge: the lossless JSON serialization of
//! the [`MergedReport`] and a self-contained HTML page with no external
//! assets. Both are deterministic for a given report.

use std::fmt::Write;

use crate::report::{Category, MergedReport};

const GOOD_CUTOFF: f64 = 80.0;
const AVERAGE_CUTOFF: f64 = 60.0;

/// Serialize the full report to pretty-printed JSON.
pub fn render_json(report: &MergedReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Render the report as a standalone HTML page.
pub fn render_html(report: &MergedReport) -> String {
    let score = &report.score;
    let summary = &report.summary;

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Web Audit Report</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        .header {{ background: #f5f5f5; padding: 20px; border-radius: 8px; }}
        .score-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 15px; margin: 20px 0; }}
        .score-card {{ background: white; border: 1px solid #ddd; padding: 15px; border-radius: 8px; text-align: center; }}
        .score {{ font-size: 2em; font-weight: bold; }}
        .score.good {{ color: #4CAF50; }}
        .score.average {{ color: #FF9800; }}
        .score.poor {{ color: #F44336; }}
        .findings {{ margin: 20px 0; }}
        .finding {{ background: white; border-left: 4px solid #ddd; padding: 15px; margin: 10px 0; }}
        .finding.critical {{ border-left-color: #F44336; }}
        .finding.high {{ border-left-color: #FF9800; }}
        .finding.medium {{ border-left-color: #2196F3; }}
        .finding.low {{ border-left-color: #4CAF50; }}
    </style>
</head>
<body>
    <div class="header">
        <h1>Web Audit Report</h1>
        <p>Generated: {timestamp}</p>
        <p>Overall Score: <strong>{global:.1}/100</strong></p>
    </div>

    <div class="score-grid">
"#,
        timestamp = escape_html(&report.timestamp),
        global = score.global,
    );

    for category in [
        Category::Perf,
        Category::A11y,
        Category::Seo,
        Category::Security,
        Category::Responsive,
    ] {
        let value = score.category(category);
        let _ = write!(
            html,
            r#"        <div class="score-card">
            <div class="score {class}">{value:.0}</div>
            <div>{label}</div>
        </div>
"#,
            class = score_class(value),
            label = category.label(),
        );
    }

    let _ = write!(
        html,
        r#"    </div>

    <h2>Summary</h2>
    <ul>
        <li>Total Findings: {total}</li>
        <li>Critical Issues: {critical}</li>
        <li>High Priority Issues: {high}</li>
    </ul>

    <h2>Findings</h2>
    <div class="findings">
"#,
        total = summary.total_findings,
        critical = summary.critical_findings,
        high = summary.high_findings,
    );

    for finding in &report.findings {
        let _ = write!(
            html,
            r#"        <div class="finding {severity}">
            <h3>{summary}</h3>
            <p><strong>Category:</strong> {category}</p>
            <p><strong>Severity:</strong> {severity_upper}</p>
            <p><strong>Recommendation:</strong> {recommendation}</p>
        </div>
"#,
            severity = finding.severity.as_str(),
            summary = escape_html(&finding.summary),
            category = finding.category.as_str().to_uppercase(),
            severity_upper = finding.severity.as_str().to_uppercase(),
            recommendation = escape_html(&finding.recommendation),
        );
    }

    html.push_str("    </div>\n</body>\n</html>\n");
    html
}

/// CSS class bucketing a score for color coding.
fn score_class(score: f64) -> &'static str {
    if score >= GOOD_CUTOFF {
        "good"
    } else if score >= AVERAGE_CUTOFF {
        "average"
    } else {
        "poor"
    }
}

/// Escape text that originated in tool output before embedding it in HTML.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
