//! Rendering helpers (markdown) for human-readable run reports.

use localefix_types::outcome::FileStatus;
use localefix_types::report::{RunReport, VerdictStatus};

pub fn render_report_md(report: &RunReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("# localefix {}\n\n", report.operation));
    out.push_str(&format!("- Verdict: `{}`\n", status_label(report.verdict.status)));

    let summary = report.verdict.summary;
    out.push_str(&format!(
        "- Files: {} attempted, {} repaired, {} unchanged, {} skipped, {} failed\n",
        summary.attempted, summary.repaired, summary.unchanged, summary.skipped, summary.failed
    ));
    if !report.verdict.reasons.is_empty() {
        out.push_str(&format!("- Reasons: {}\n", report.verdict.reasons.join(", ")));
    }
    out.push('\n');

    out.push_str("## Files\n\n");
    if report.outcomes.is_empty() {
        out.push_str("_No files targeted._\n");
        return out;
    }

    for outcome in &report.outcomes {
        out.push_str(&format!(
            "- `{}` — `{}`",
            outcome.path,
            file_status_label(outcome.status)
        ));
        if let Some(message) = &outcome.message {
            out.push_str(&format!(": {}", message));
        }
        out.push('\n');

        if let Some(change) = &outcome.change {
            out.push_str(&format!(
                "  - `{}` → `{}`\n",
                short_sha(&change.before_sha256),
                short_sha(&change.after_sha256)
            ));
        }
    }

    out
}

fn status_label(status: VerdictStatus) -> &'static str {
    match status {
        VerdictStatus::Pass => "pass",
        VerdictStatus::Warn => "warn",
        VerdictStatus::Fail => "fail",
        VerdictStatus::Unknown => "unknown",
    }
}

fn file_status_label(status: FileStatus) -> &'static str {
    match status {
        FileStatus::Repaired => "repaired",
        FileStatus::Unchanged => "unchanged",
        FileStatus::Skipped => "skipped",
        FileStatus::Failed => "failed",
    }
}

fn short_sha(sha: &str) -> &str {
    sha.get(..12).unwrap_or(sha)
}
