//! Core batch pipelines, extracted from the CLI.
//!
//! These entry points are I/O-light: the catalog and artifact writes go
//! through the port traits, and per-file repair work is delegated to
//! `localefix-repair`. Batches are fully sequential; a file's failure is
//! folded into the run report and never aborts the batch.

mod adapters;
mod pipeline;
mod ports;
mod settings;

pub use adapters::{EmbeddedCatalogSource, FsCatalogSource, FsWritePort};
pub use pipeline::{
    RunOutcome, run_section_update, run_structure_repair, write_run_artifacts,
};
pub use ports::{CatalogSource, WritePort};
pub use settings::{SectionsSettings, StructureSettings};
