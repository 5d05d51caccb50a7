use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a single file's read-transform-write cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// The file was rewritten (or would be, in a dry run).
    Repaired,
    /// The file already had the expected shape; output equals input.
    Unchanged,
    /// The file was not attempted (dry run write, or filtered out).
    Skipped,
    /// The cycle failed; the file was left as found.
    Failed,
}

impl FileStatus {
    pub fn is_failure(self) -> bool {
        matches!(self, FileStatus::Failed)
    }
}

/// Before/after fingerprint of a changed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileChange {
    pub path: String,
    pub before_sha256: String,
    pub after_sha256: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_bytes: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_bytes: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<DateTime<Utc>>,
}

/// Per-file result record for a batch run.
///
/// One outcome is produced for every target file, including files whose cycle
/// failed; a failure never removes the file from the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    pub path: Utf8PathBuf,
    pub status: FileStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<FileChange>,
}

impl FileOutcome {
    pub fn failed(path: impl Into<Utf8PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Failed,
            message: Some(message.into()),
            change: None,
        }
    }

    pub fn unchanged(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Unchanged,
            message: None,
            change: None,
        }
    }
}

/// Aggregate counts for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub attempted: u64,
    pub repaired: u64,
    pub unchanged: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl RunSummary {
    /// Fold a single outcome into the counters.
    pub fn record(&mut self, status: FileStatus) {
        self.attempted += 1;
        match status {
            FileStatus::Repaired => self.repaired += 1,
            FileStatus::Unchanged => self.unchanged += 1,
            FileStatus::Skipped => self.skipped += 1,
            FileStatus::Failed => self.failed += 1,
        }
    }
}
