use crate::outcome::{FileOutcome, RunSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of the tool that produced a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

/// Wall-clock bounds of a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    Pass,
    Warn,
    Fail,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(default)]
    pub status: VerdictStatus,

    #[serde(default)]
    pub summary: RunSummary,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}

/// File names of sibling artifacts written alongside the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportArtifacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_md: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
}

/// The run report envelope, serialized to `report.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Schema identifier, `localefix.report.v1`.
    pub schema: String,

    pub tool: ToolInfo,

    /// The operation this run performed, e.g. `fix-structure`.
    pub operation: String,

    #[serde(default)]
    pub run: RunInfo,

    #[serde(default)]
    pub verdict: Verdict,

    #[serde(default)]
    pub outcomes: Vec<FileOutcome>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<ReportArtifacts>,
}

impl RunReport {
    pub fn new(tool: ToolInfo, operation: impl Into<String>) -> Self {
        Self {
            schema: crate::schema::LOCALEFIX_REPORT_V1.to_string(),
            tool,
            operation: operation.into(),
            run: RunInfo {
                started_at: Some(Utc::now()),
                ended_at: None,
            },
            verdict: Verdict::default(),
            outcomes: vec![],
            artifacts: None,
        }
    }
}
