//! auditlens — merge web-quality audit results into one scored report.
//!
//! Each positional argument is a JSON file holding the raw result of one
//! audit tool (Lighthouse, axe, WAVE, security headers, ZAP, responsive
//! probe, webhint). The files are merged into a unified report, written as
//! JSON and HTML, and summarized on stdout.

use std::env;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auditlens_core::{Budgets, MergeOutcome, render};

const APP_NAME: &str = "auditlens";
const VERSION: &str = env!("CARGO_PKG_VERSION");

const DIVIDER: &str = "─────────────────────────────────────────────────────────────";
const LABEL_WIDTH: usize = 16;

struct CliOptions {
    inputs: Vec<PathBuf>,
    out_dir: PathBuf,
    budgets: Budgets,
    json_output: bool,
}

enum CliCommand {
    Run(CliOptions),
    Help,
    Version,
}

fn parse_arguments(args: &[String]) -> Result<CliCommand> {
    if args.is_empty() {
        return Ok(CliCommand::Help);
    }

    let mut inputs = Vec::new();
    let mut out_dir: Option<PathBuf> = None;
    let mut budgets = Budgets::new();
    let mut json_output = false;
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if matches!(arg.as_str(), "-h" | "--help") {
            return Ok(CliCommand::Help);
        }

        if matches!(arg.as_str(), "-v" | "--version") {
            return Ok(CliCommand::Version);
        }

        if matches!(arg.as_str(), "-j" | "--json") {
            json_output = true;
            i += 1;
            continue;
        }

        if let Some(value) = arg.strip_prefix("--out=") {
            if out_dir.is_some() {
                return Err(anyhow!("--out specified multiple times"));
            }
            out_dir = Some(PathBuf::from(value));
            i += 1;
            continue;
        }

        if matches!(arg.as_str(), "-o" | "--out") {
            if out_dir.is_some() {
                return Err(anyhow!("--out specified multiple times"));
            }
            let value = args
                .get(i + 1)
                .ok_or_else(|| anyhow!("--out requires a directory argument"))?;
            out_dir = Some(PathBuf::from(value));
            i += 2;
            continue;
        }

        if let Some(value) = arg.strip_prefix("--budget=") {
            let (category, threshold) = parse_budget(value)?;
            budgets.insert(category, threshold);
            i += 1;
            continue;
        }

        if matches!(arg.as_str(), "-b" | "--budget") {
            let value = args
                .get(i + 1)
                .ok_or_else(|| anyhow!("--budget requires a CATEGORY=SCORE argument"))?;
            let (category, threshold) = parse_budget(value)?;
            budgets.insert(category, threshold);
            i += 2;
            continue;
        }

        if arg.starts_with('-') {
            return Err(anyhow!("unknown flag: {arg}"));
        }

        inputs.push(PathBuf::from(arg));
        i += 1;
    }

    if inputs.is_empty() {
        return Err(anyhow!("missing <RESULT.json> arguments"));
    }

    Ok(CliCommand::Run(CliOptions {
        inputs,
        out_dir: out_dir.unwrap_or_else(|| PathBuf::from("artifacts")),
        budgets,
        json_output,
    }))
}

fn parse_budget(value: &str) -> Result<(String, f64)> {
    let (category, threshold) = value
        .split_once('=')
        .ok_or_else(|| anyhow!("budget must look like CATEGORY=SCORE, got: {value}"))?;
    let threshold: f64 = threshold
        .parse()
        .with_context(|| format!("invalid budget score for {category}: {threshold}"))?;
    Ok((category.to_string(), threshold))
}

fn print_help() {
    println!("{APP_NAME} — one scored report from many web audits");
    println!("Usage: {APP_NAME} [OPTIONS] <RESULT.json>...\n");
    println!("Options:");
    println!("  -o, --out DIR           Directory for report files (default: artifacts)");
    println!("  -b, --budget CAT=SCORE  Minimum score gate, repeatable (e.g. perf=80)");
    println!("  -j, --json              Print the merged report as JSON");
    println!("  -v, --version           Show version information");
    println!("  -h, --help              Show this help message");
}

fn print_version() {
    println!("{APP_NAME} {VERSION}");
}

fn push_section_header(buf: &mut String, icon: &str, title: &str) {
    let _ = writeln!(buf, "{DIVIDER}");
    let _ = writeln!(buf, "{icon} {title}");
    let _ = writeln!(buf, "{DIVIDER}");
}

fn push_key_value(buf: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let _ = writeln!(buf, "• {:<width$} : {}", label, value, width = LABEL_WIDTH);
}

fn render_summary(outcome: &MergeOutcome) -> String {
    let report = &outcome.report;
    let mut output = String::new();

    push_section_header(&mut output, "📊", "Web Audit Report");
    push_key_value(&mut output, "Overall", &format!("{:.1}/100", report.score.global));
    push_key_value(&mut output, "Performance", &format!("{:.0}", report.score.perf));
    push_key_value(&mut output, "Accessibility", &format!("{:.0}", report.score.a11y));
    push_key_value(&mut output, "SEO", &format!("{:.0}", report.score.seo));
    push_key_value(&mut output, "Security", &format!("{:.0}", report.score.security));
    push_key_value(&mut output, "Responsive", &format!("{:.0}", report.score.responsive));
    let _ = writeln!(&mut output);

    push_key_value(
        &mut output,
        "Findings",
        &format!(
            "{} total ({} critical, {} high)",
            report.summary.total_findings,
            report.summary.critical_findings,
            report.summary.high_findings
        ),
    );
    for issue in &report.summary.top_issues {
        let _ = writeln!(&mut output, "  - {issue}");
    }

    if !report.budgets.is_empty() {
        let _ = writeln!(&mut output);
        push_section_header(&mut output, "🎯", "Budgets");
        for (category, result) in &report.budgets {
            let mark = if result.passed { "✓" } else { "✗" };
            let _ = writeln!(
                &mut output,
                "{mark} {:<width$} : {:.1} (needs {:.1})",
                category,
                result.actual,
                result.threshold,
                width = LABEL_WIDTH
            );
        }
    }

    let _ = writeln!(&mut output);
    push_key_value(&mut output, "JSON report", &outcome.json_path.display().to_string());
    push_key_value(&mut output, "HTML report", &outcome.html_path.display().to_string());

    output
}

fn run(options: CliOptions) -> Result<bool> {
    let mut items: Vec<Value> = Vec::with_capacity(options.inputs.len());
    for path in &options.inputs {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read result file {}", path.display()))?;
        let item = serde_json::from_str(&raw)
            .with_context(|| format!("result file {} is not valid JSON", path.display()))?;
        items.push(item);
    }

    let budgets = (!options.budgets.is_empty()).then_some(&options.budgets);
    let outcome = auditlens_core::merge(&items, budgets, &options.out_dir)
        .context("report merge failed")?;

    if options.json_output {
        println!("{}", render::render_json(&outcome.report)?);
    } else {
        print!("{}", render_summary(&outcome));
    }

    let budgets_passed = outcome.report.budgets.values().all(|b| b.passed);
    Ok(budgets_passed)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auditlens=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let raw_args = env::args().skip(1).collect::<Vec<_>>();
    match parse_arguments(&raw_args) {
        Ok(CliCommand::Help) => {
            print_help();
            ExitCode::SUCCESS
        }
        Ok(CliCommand::Version) => {
            print_version();
            ExitCode::SUCCESS
        }
        Ok(CliCommand::Run(options)) => match run(options) {
            Ok(true) => ExitCode::SUCCESS,
            // Merge succeeded but at least one budget failed its gate.
            Ok(false) => ExitCode::from(2),
            Err(error) => {
                eprintln!("{APP_NAME}: {error:#}");
                ExitCode::FAILURE
            }
        },
        Err(error) => {
            eprintln!("{APP_NAME}: {error:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_shows_help() {
        assert!(matches!(parse_arguments(&[]), Ok(CliCommand::Help)));
    }

    #[test]
    fn test_parses_inputs_and_flags() {
        let parsed = parse_arguments(&args(&[
            "lighthouse.json",
            "axe.json",
            "--out=reports",
            "--budget=perf=80",
            "-b",
            "global=70",
            "--json",
        ]))
        .unwrap();

        let CliCommand::Run(options) = parsed else {
            panic!("expected run command");
        };
        assert_eq!(options.inputs.len(), 2);
        assert_eq!(options.out_dir, PathBuf::from("reports"));
        assert_eq!(options.budgets["perf"], 80.0);
        assert_eq!(options.budgets["global"], 70.0);
        assert!(options.json_output);
    }

    #[test]
    fn test_out_dir_defaults_to_artifacts() {
        let CliCommand::Run(options) =
            parse_arguments(&args(&["results.json"])).unwrap()
        else {
            panic!("expected run command");
        };
        assert_eq!(options.out_dir, PathBuf::from("artifacts"));
        assert!(options.budgets.is_empty());
        assert!(!options.json_output);
    }

    #[test]
    fn test_rejects_bad_budget() {
        assert!(parse_arguments(&args(&["r.json", "--budget=perf"])).is_err());
        assert!(parse_arguments(&args(&["r.json", "--budget=perf=fast"])).is_err());
        assert!(parse_arguments(&args(&["r.json", "--budget"])).is_err());
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(parse_arguments(&args(&["--frobnicate", "r.json"])).is_err());
    }

    #[test]
    fn test_missing_inputs_is_an_error() {
        assert!(parse_arguments(&args(&["--json"])).is_err());
    }
}
