//! Implementation of the `revpath lint` command.

use revpath::config::Config;
use revpath::error::{Result, RevpathError};
use revpath::lint::{LintReport, lint};

/// Execute the `revpath lint` command.
///
/// Warnings are reported but do not fail the command; any error-level
/// finding exits with the lint failure code.
pub fn cmd_lint(config: &Config) -> Result<()> {
    let report = lint(config);
    print!("{}", render_report(&report));

    if report.error_count() > 0 {
        return Err(RevpathError::LintFailed(format!(
            "{} error(s), {} warning(s)",
            report.error_count(),
            report.warning_count()
        )));
    }

    Ok(())
}

pub(super) fn render_report(report: &LintReport) -> String {
    if report.is_clean() {
        return "No issues found.\n".to_string();
    }

    let mut out = format!("Issues detected ({}):\n\n", report.findings.len());
    for (i, finding) in report.findings.iter().enumerate() {
        out.push_str(&format!(
            "  {}. [{}] {} - {}\n",
            i + 1,
            finding.severity,
            finding.code,
            finding.message
        ));
        out.push_str(&format!("     At: {}\n\n", finding.location));
    }

    out.push_str(&format!(
        "Summary: {} error(s), {} warning(s)\n",
        report.error_count(),
        report.warning_count()
    ));
    out
}
