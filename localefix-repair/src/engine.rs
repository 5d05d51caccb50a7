//! File-level driver: read, transform, validate, back up, write.

use crate::error::{RepairError, RepairResult};
use crate::sections::{MergeMode, update_sections};
use crate::structure::repair_structure;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use diffy::PatchFormatter;
use fs_err as fs;
use localefix_catalog::SectionSet;
use localefix_types::outcome::FileChange;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ApplyOptions {
    /// Transform and report without writing anything.
    pub dry_run: bool,
    /// Reject structure-repair output that does not parse as JSON.
    pub validate: bool,
    pub backup_enabled: bool,
    pub backup_suffix: String,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            validate: true,
            backup_enabled: true,
            backup_suffix: ".localefix.bak".to_string(),
        }
    }
}

/// A repair operation on one document's contents.
#[derive(Debug, Clone)]
pub enum RepairOp<'a> {
    /// Re-nest misplaced root-level calculator entries.
    FixStructure,
    /// Merge shared-section translations.
    UpdateSections {
        sections: &'a SectionSet,
        mode: MergeMode,
    },
}

impl RepairOp<'_> {
    fn name(&self) -> &'static str {
        match self {
            RepairOp::FixStructure => "fix-structure",
            RepairOp::UpdateSections { .. } => "update-sections",
        }
    }
}

/// Apply an operation to in-memory contents.
pub fn apply_to_content(contents: &str, op: &RepairOp) -> RepairResult<String> {
    match op {
        RepairOp::FixStructure => Ok(repair_structure(contents).text),
        RepairOp::UpdateSections { sections, mode } => update_sections(contents, sections, *mode),
    }
}

/// Result of one file's repair cycle.
#[derive(Debug, Clone)]
pub struct FileRepair {
    pub path: Utf8PathBuf,
    pub before: String,
    pub after: String,
    /// True when the new contents were written to disk.
    pub written: bool,
    pub backup_path: Option<Utf8PathBuf>,
}

impl FileRepair {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }

    /// Before/after fingerprint for the run report.
    pub fn change_record(&self) -> FileChange {
        FileChange {
            path: self.path.to_string(),
            before_sha256: sha256_hex(self.before.as_bytes()),
            after_sha256: sha256_hex(self.after.as_bytes()),
            before_bytes: Some(self.before.len() as u64),
            after_bytes: Some(self.after.len() as u64),
            applied_at: self.written.then(Utc::now),
        }
    }
}

/// Run one read-transform-validate-write cycle.
///
/// The target is only written when the transform changed it and `dry_run` is
/// off. Section-update output is constructed from a parsed tree and needs no
/// gate; structure-repair output is checked against `serde_json` when
/// `validate` is on, and a rejected document is left as found.
pub fn repair_file(
    path: &Utf8Path,
    op: &RepairOp,
    opts: &ApplyOptions,
) -> RepairResult<FileRepair> {
    let before = fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    let after = apply_to_content(&before, op)?;

    if opts.validate
        && matches!(op, RepairOp::FixStructure)
        && let Err(e) = serde_json::from_str::<serde_json::Value>(&after)
    {
        return Err(RepairError::Validation {
            message: format!("repaired output does not parse: {e}"),
        });
    }

    let changed = after != before;
    let mut written = false;
    let mut backup_path = None;

    if changed && !opts.dry_run {
        if opts.backup_enabled {
            let backup = Utf8PathBuf::from(format!("{path}{}", opts.backup_suffix));
            fs::write(&backup, &before).with_context(|| format!("write backup {}", backup))?;
            backup_path = Some(backup);
        }
        fs::write(path, &after).with_context(|| format!("write {}", path))?;
        written = true;
    }

    debug!(
        op = op.name(),
        %path,
        changed,
        written,
        "repair cycle finished"
    );

    Ok(FileRepair {
        path: path.to_path_buf(),
        before,
        after,
        written,
        backup_path,
    })
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Render a git-style unified diff over every changed file.
pub fn render_patch(
    before: &BTreeMap<Utf8PathBuf, String>,
    after: &BTreeMap<Utf8PathBuf, String>,
) -> String {
    let mut out = String::new();
    let formatter = PatchFormatter::new();

    for (path, old) in before {
        let new = after.get(path).unwrap_or(old);
        if old == new {
            continue;
        }

        out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
        out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

        let patch = diffy::create_patch(old, new);
        out.push_str(&formatter.fmt_patch(&patch).to_string());
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}
