use std::io::Write;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use crate::capabilities::Capabilities;
use crate::content;
use crate::self_check::{run_checks_with, CheckInput, Report};
use crate::theme::Theme;

#[derive(Parser, Debug)]
#[command(name = "self-check", about = "Verify the landing page configuration")]
pub struct Args {
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
    /// Check this `#RRGGBB` primary color instead of the built-in one.
    #[arg(long, value_name = "HEX")]
    pub primary: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Runs the checks and writes the report to `out`. Failing checks are part of
/// the returned report; only bad arguments or a broken writer are errors.
pub fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<Report> {
    let theme = match &args.primary {
        Some(hex) => Theme::from_hex(hex).with_context(|| format!("invalid --primary {}", hex))?,
        None => Theme::builtin(),
    };
    let gallery = content::gallery();
    let capabilities = Capabilities::detect();
    let report = Report::new(run_checks_with(&CheckInput {
        theme: &theme,
        brands: content::brands(),
        gallery: &gallery,
        capabilities: &capabilities,
    }));

    for failure in report.failures() {
        tracing::warn!(check = %failure.message, "self-check failure");
    }
    tracing::info!(
        lines = report.results.len(),
        failures = report.failures().count(),
        "self-check finished"
    );

    match args.format {
        Format::Text => {
            for line in report.lines() {
                writeln!(out, "{}", line).context("failed to write report")?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &report).context("failed to serialize report")?;
            writeln!(out).context("failed to write report")?;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("self-check").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn text_output_lists_every_line() {
        let mut out = Vec::new();
        let report = run(&parse(&[]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 18);
        assert!(text.contains("✓ brand color set to #3D9BE9"));
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn other_primary_fails_the_run() {
        let mut out = Vec::new();
        let report = run(&parse(&["--primary", "#112233"]), &mut out).unwrap();
        assert_eq!(report.exit_code(), 1);
        assert!(String::from_utf8(out).unwrap().contains("✗ brand color incorrect: #112233"));
    }

    #[test]
    fn lowercase_primary_is_normalized_before_the_check() {
        let mut out = Vec::new();
        let report = run(&parse(&["--primary", "#3d9be9"]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("✓ brand color set to #3D9BE9"));
        assert!(text.contains("✓ brand alpha 80 defined"));
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn json_output_is_a_report() {
        let mut out = Vec::new();
        run(&parse(&["--format", "json"]), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["passed"], true);
        assert_eq!(value["results"].as_array().unwrap().len(), 18);
    }

    #[test]
    fn invalid_primary_is_an_error() {
        let mut out = Vec::new();
        let err = run(&parse(&["--primary", "blue"]), &mut out).unwrap_err();
        assert!(err.to_string().contains("invalid --primary blue"));
        assert!(out.is_empty());
    }
}
