use localefix_types::locale::{Locale, Section};
use localefix_types::outcome::{FileOutcome, FileStatus};
use localefix_types::report::{RunReport, ToolInfo, VerdictStatus};
use pretty_assertions::assert_eq;

fn tool() -> ToolInfo {
    ToolInfo {
        name: "localefix".to_string(),
        version: Some("1.0.0".to_string()),
        repo: None,
    }
}

#[test]
fn file_status_serializes_snake_case() {
    let repaired = serde_json::to_value(FileStatus::Repaired).expect("serialize");
    let unchanged = serde_json::to_value(FileStatus::Unchanged).expect("serialize");
    let skipped = serde_json::to_value(FileStatus::Skipped).expect("serialize");
    let failed = serde_json::to_value(FileStatus::Failed).expect("serialize");

    assert_eq!(repaired, serde_json::json!("repaired"));
    assert_eq!(unchanged, serde_json::json!("unchanged"));
    assert_eq!(skipped, serde_json::json!("skipped"));
    assert_eq!(failed, serde_json::json!("failed"));
}

#[test]
fn run_report_new_sets_schema_and_defaults() {
    let report = RunReport::new(tool(), "fix-structure");

    assert_eq!(report.schema, localefix_types::schema::LOCALEFIX_REPORT_V1);
    assert_eq!(report.operation, "fix-structure");
    assert_eq!(report.verdict.status, VerdictStatus::Unknown);
    assert!(report.outcomes.is_empty());
    assert!(report.run.started_at.is_some());
    assert!(report.run.ended_at.is_none());
}

#[test]
fn file_outcome_omits_empty_optionals() {
    let outcome = FileOutcome::unchanged("messages/en.json");
    let value = serde_json::to_value(&outcome).expect("serialize outcome");

    assert_eq!(value["path"], "messages/en.json");
    assert!(value.get("message").is_none());
    assert!(value.get("change").is_none());
}

#[test]
fn run_report_round_trips_through_json() {
    let mut report = RunReport::new(tool(), "update-sections");
    report
        .outcomes
        .push(FileOutcome::failed("messages/ru.json", "read failed"));
    report.verdict.summary.record(FileStatus::Failed);

    let json = serde_json::to_string_pretty(&report).expect("serialize report");
    let back: RunReport = serde_json::from_str(&json).expect("parse report");

    assert_eq!(back.outcomes.len(), 1);
    assert_eq!(back.outcomes[0].status, FileStatus::Failed);
    assert_eq!(back.verdict.summary.failed, 1);
}

#[test]
fn locale_and_section_serialize_as_codes() {
    assert_eq!(
        serde_json::to_value(Locale::En).expect("serialize"),
        serde_json::json!("en")
    );
    assert_eq!(
        serde_json::to_value(Section::Breadcrumbs).expect("serialize"),
        serde_json::json!("breadcrumbs")
    );
}
