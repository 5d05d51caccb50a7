mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use config::LocalefixConfig;
use fs_err as fs;
use localefix_core::{
    CatalogSource, EmbeddedCatalogSource, FsCatalogSource, FsWritePort, RunOutcome,
    SectionsSettings, StructureSettings, run_section_update, run_structure_repair,
    write_run_artifacts,
};
use localefix_types::locale::Locale;
use localefix_types::report::ToolInfo;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "localefix",
    version,
    about = "Plan/apply repair tool for calculator-site locale message catalogs."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Re-nest misplaced calculator entries inside the calculators object.
    FixStructure(FixStructureArgs),
    /// Rewrite the shared UI sections from the translation catalog.
    UpdateSections(UpdateSectionsArgs),
    /// List supported locales and their message files.
    ListLocales(ListLocalesArgs),
}

#[derive(Debug, Parser)]
struct FixStructureArgs {
    /// Directory holding <locale>.json message files (default: messages).
    #[arg(long)]
    messages_dir: Option<Utf8PathBuf>,

    /// Locales to target. May repeat; default is every locale file found.
    #[arg(long = "locale")]
    locales: Vec<Locale>,

    /// Output directory for run artifacts (default: <messages-dir>/.localefix).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,

    /// Apply changes to disk. If omitted, runs a dry-run and only emits artifacts.
    #[arg(long, default_value_t = false)]
    apply: bool,

    /// Skip the JSON validation gate on repaired output (legacy behavior).
    #[arg(long, default_value_t = false)]
    no_validate: bool,
}

#[derive(Debug, Parser)]
struct UpdateSectionsArgs {
    /// Directory holding <locale>.json message files (default: messages).
    #[arg(long)]
    messages_dir: Option<Utf8PathBuf>,

    /// Locales to target. May repeat; default is every locale file found.
    #[arg(long = "locale")]
    locales: Vec<Locale>,

    /// Output directory for run artifacts (default: <messages-dir>/.localefix).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,

    /// Apply changes to disk. If omitted, runs a dry-run and only emits artifacts.
    #[arg(long, default_value_t = false)]
    apply: bool,

    /// Only add missing keys; never overwrite an existing translation.
    #[arg(long, default_value_t = false)]
    only_missing: bool,

    /// Directory with per-locale catalog override files.
    #[arg(long)]
    catalog_dir: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ListLocalesArgs {
    /// Directory holding <locale>.json message files (default: messages).
    #[arg(long)]
    messages_dir: Option<Utf8PathBuf>,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::FixStructure(args) => cmd_fix_structure(args),
        Command::UpdateSections(args) => cmd_update_sections(args),
        Command::ListLocales(args) => cmd_list_locales(args),
    }
}

fn cmd_fix_structure(args: FixStructureArgs) -> anyhow::Result<()> {
    let file_config = config::load_or_default(Utf8Path::new(".")).context("load localefix.toml")?;
    let messages_dir = resolve_messages_dir(args.messages_dir, &file_config);
    let out_dir = args
        .out_dir
        .unwrap_or_else(|| messages_dir.join(".localefix"));

    let settings = StructureSettings {
        messages_dir,
        locales: resolve_locales(args.locales, &file_config),
        out_dir: out_dir.clone(),
        dry_run: !args.apply,
        validate: !args.no_validate && file_config.validation.strict,
        backup_enabled: file_config.backups.enabled,
        backup_suffix: file_config.backups.suffix.clone(),
    };

    let outcome = run_structure_repair(&settings, tool_info()).context("run structure repair")?;
    finish(&outcome, &out_dir)
}

fn cmd_update_sections(args: UpdateSectionsArgs) -> anyhow::Result<()> {
    let file_config = config::load_or_default(Utf8Path::new(".")).context("load localefix.toml")?;
    let messages_dir = resolve_messages_dir(args.messages_dir, &file_config);
    let out_dir = args
        .out_dir
        .unwrap_or_else(|| messages_dir.join(".localefix"));

    let settings = SectionsSettings {
        messages_dir,
        locales: resolve_locales(args.locales, &file_config),
        out_dir: out_dir.clone(),
        dry_run: !args.apply,
        only_missing: args.only_missing,
        backup_enabled: file_config.backups.enabled,
        backup_suffix: file_config.backups.suffix.clone(),
    };

    let catalog: Box<dyn CatalogSource> = match args.catalog_dir {
        Some(dir) => Box::new(FsCatalogSource::new(dir)),
        None => Box::new(EmbeddedCatalogSource),
    };

    let outcome = run_section_update(&settings, catalog.as_ref(), tool_info())
        .context("run section update")?;
    finish(&outcome, &out_dir)
}

fn cmd_list_locales(args: ListLocalesArgs) -> anyhow::Result<()> {
    let file_config = config::load_or_default(Utf8Path::new(".")).context("load localefix.toml")?;
    let messages_dir = resolve_messages_dir(args.messages_dir, &file_config);

    match args.format {
        OutputFormat::Text => {
            for locale in Locale::ALL {
                let path = messages_dir.join(locale.file_name());
                let marker = if path.exists() { "present" } else { "missing" };
                println!("{locale}\t{path}\t{marker}");
            }
        }
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = Locale::ALL
                .iter()
                .map(|&locale| {
                    let path = messages_dir.join(locale.file_name());
                    serde_json::json!({
                        "locale": locale,
                        "path": path.as_str(),
                        "exists": path.exists(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

/// Write artifacts and report the run on stdout. Per-file failures are carried
/// in the report; a completed batch always exits zero.
fn finish(outcome: &RunOutcome, out_dir: &Utf8Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir))?;
    write_run_artifacts(outcome, out_dir, &FsWritePort).context("write run artifacts")?;

    let summary = outcome.report.verdict.summary;
    println!(
        "{}: {} file(s) attempted, {} repaired, {} unchanged, {} skipped, {} failed",
        outcome.report.operation,
        summary.attempted,
        summary.repaired,
        summary.unchanged,
        summary.skipped,
        summary.failed
    );
    info!("wrote run artifacts to {}", out_dir);
    Ok(())
}

fn resolve_messages_dir(cli: Option<Utf8PathBuf>, config: &LocalefixConfig) -> Utf8PathBuf {
    cli.or_else(|| config.messages_dir.clone())
        .unwrap_or_else(|| Utf8PathBuf::from("messages"))
}

fn resolve_locales(cli: Vec<Locale>, config: &LocalefixConfig) -> Vec<Locale> {
    if cli.is_empty() {
        config.locales.clone()
    } else {
        cli
    }
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "localefix".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        repo: None,
    }
}
