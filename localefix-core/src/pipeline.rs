//! Sequential batch pipelines for structure repair and section update.
//!
//! One read-transform-write cycle per file, in deterministic order. A failed
//! file becomes a `Failed` outcome in the run report; the batch always moves on
//! to the next file.

use crate::ports::{CatalogSource, WritePort};
use crate::settings::{SectionsSettings, StructureSettings};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use localefix_repair::{ApplyOptions, MergeMode, RepairOp, render_patch, repair_file};
use localefix_types::locale::Locale;
use localefix_types::outcome::{FileOutcome, FileStatus};
use localefix_types::report::{ReportArtifacts, RunReport, ToolInfo, VerdictStatus};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Outcome of a batch run.
pub struct RunOutcome {
    pub report: RunReport,
    pub patch: String,
}

/// Run the structure-repair pipeline over the configured locale files.
pub fn run_structure_repair(
    settings: &StructureSettings,
    tool: ToolInfo,
) -> anyhow::Result<RunOutcome> {
    let targets = resolve_targets(&settings.messages_dir, &settings.locales)?;
    let opts = ApplyOptions {
        dry_run: settings.dry_run,
        validate: settings.validate,
        backup_enabled: settings.backup_enabled,
        backup_suffix: settings.backup_suffix.clone(),
    };

    let mut report = RunReport::new(tool, "fix-structure");
    let mut before = BTreeMap::new();
    let mut after = BTreeMap::new();

    for (_, path) in targets {
        info!(%path, "repairing structure");
        let outcome = run_file(&path, &RepairOp::FixStructure, &opts, &mut before, &mut after);
        report.verdict.summary.record(outcome.status);
        report.outcomes.push(outcome);
    }

    finish_report(&mut report);
    let patch = render_patch(&before, &after);
    Ok(RunOutcome { report, patch })
}

/// Run the section-update pipeline over the configured locale files.
pub fn run_section_update(
    settings: &SectionsSettings,
    catalog: &dyn CatalogSource,
    tool: ToolInfo,
) -> anyhow::Result<RunOutcome> {
    let targets = resolve_targets(&settings.messages_dir, &settings.locales)?;
    let entries = catalog.load_sections().context("load catalog")?;
    let opts = ApplyOptions {
        dry_run: settings.dry_run,
        validate: true,
        backup_enabled: settings.backup_enabled,
        backup_suffix: settings.backup_suffix.clone(),
    };
    let mode = if settings.only_missing {
        MergeMode::FillMissing
    } else {
        MergeMode::Overwrite
    };

    let mut report = RunReport::new(tool, "update-sections");
    let mut before = BTreeMap::new();
    let mut after = BTreeMap::new();

    for (locale, path) in targets {
        let Some(entry) = entries.iter().find(|e| e.locale == locale) else {
            warn!(%locale, "no catalog entry; skipping");
            let mut outcome = FileOutcome::unchanged(path);
            outcome.status = FileStatus::Skipped;
            outcome.message = Some("no catalog entry".to_string());
            report.verdict.summary.record(outcome.status);
            report.outcomes.push(outcome);
            continue;
        };

        let outcome = match &entry.sections {
            Ok(sections) => {
                info!(%path, %locale, "updating shared sections");
                let op = RepairOp::UpdateSections { sections, mode };
                run_file(&path, &op, &opts, &mut before, &mut after)
            }
            Err(e) => {
                warn!(%path, source = %entry.source, error = %e, "catalog entry unusable");
                FileOutcome::failed(path, format!("catalog {}: {e}", entry.source))
            }
        };
        report.verdict.summary.record(outcome.status);
        report.outcomes.push(outcome);
    }

    finish_report(&mut report);
    let patch = render_patch(&before, &after);
    Ok(RunOutcome { report, patch })
}

/// Write `report.json`, `report.md` and `patch.diff` to the output directory.
pub fn write_run_artifacts(
    outcome: &RunOutcome,
    out_dir: &Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    writer.create_dir_all(out_dir)?;

    let report_json =
        serde_json::to_string_pretty(&outcome.report).context("serialize report")?;
    writer.write_file(&out_dir.join("report.json"), report_json.as_bytes())?;

    let report_md = localefix_render::render_report_md(&outcome.report);
    writer.write_file(&out_dir.join("report.md"), report_md.as_bytes())?;

    writer.write_file(&out_dir.join("patch.diff"), outcome.patch.as_bytes())?;

    Ok(())
}

/// One file's cycle: never propagates the error, always yields an outcome.
fn run_file(
    path: &Utf8Path,
    op: &RepairOp,
    opts: &ApplyOptions,
    before: &mut BTreeMap<Utf8PathBuf, String>,
    after: &mut BTreeMap<Utf8PathBuf, String>,
) -> FileOutcome {
    match repair_file(path, op, opts) {
        Ok(repair) => {
            before.insert(repair.path.clone(), repair.before.clone());
            after.insert(repair.path.clone(), repair.after.clone());

            if !repair.changed() {
                info!(%path, "already well-formed");
                FileOutcome::unchanged(path.to_path_buf())
            } else if repair.written {
                info!(%path, "repaired");
                FileOutcome {
                    path: path.to_path_buf(),
                    status: FileStatus::Repaired,
                    message: None,
                    change: Some(repair.change_record()),
                }
            } else {
                info!(%path, "dry-run: not written");
                FileOutcome {
                    path: path.to_path_buf(),
                    status: FileStatus::Skipped,
                    message: Some("dry-run: not written".to_string()),
                    change: Some(repair.change_record()),
                }
            }
        }
        Err(e) => {
            warn!(%path, error = %e, "file failed; batch continues");
            FileOutcome::failed(path.to_path_buf(), e.to_string())
        }
    }
}

/// Resolve target files: explicit locales map straight to paths (missing files
/// surface as per-file failures later); otherwise every known locale file in
/// the messages directory, in path order.
fn resolve_targets(
    messages_dir: &Utf8Path,
    locales: &[Locale],
) -> anyhow::Result<Vec<(Locale, Utf8PathBuf)>> {
    if !locales.is_empty() {
        return Ok(locales
            .iter()
            .map(|&locale| (locale, messages_dir.join(locale.file_name())))
            .collect());
    }

    let pattern = messages_dir.join("*.json");
    debug!(pattern = %pattern, "scanning messages dir for locale files");

    let mut found = Vec::new();
    for entry in glob::glob(pattern.as_str()).context("glob <messages-dir>/*.json")? {
        let path = entry.map_err(|e| anyhow::anyhow!("glob error: {e}"))?;
        let Ok(path) = Utf8PathBuf::from_path_buf(path) else {
            continue;
        };
        let Some(stem) = path.file_stem() else {
            continue;
        };
        let Ok(locale) = stem.parse::<Locale>() else {
            debug!(%path, "skipping non-locale json file");
            continue;
        };
        found.push((locale, path));
    }

    // Deterministic order matters.
    found.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(found)
}

fn finish_report(report: &mut RunReport) {
    let summary = report.verdict.summary;
    report.verdict.status = if summary.failed > 0 {
        VerdictStatus::Fail
    } else if summary.skipped > 0 {
        VerdictStatus::Warn
    } else {
        VerdictStatus::Pass
    };

    if summary.failed > 0 {
        report.verdict.reasons.push("file_failures".to_string());
    }
    if summary.skipped > 0 {
        report.verdict.reasons.push("pending_changes".to_string());
    }

    report.run.ended_at = Some(Utc::now());
    report.artifacts = Some(ReportArtifacts {
        report_md: Some("report.md".to_string()),
        patch: Some("patch.diff".to_string()),
    });
}
