//! Port traits abstracting catalog and artifact I/O away from the pipeline.

use camino::Utf8Path;
use localefix_catalog::LoadedSections;

/// Source of shared-section translations.
pub trait CatalogSource {
    fn load_sections(&self) -> anyhow::Result<Vec<LoadedSections>>;
}

/// File-system write operations for run artifacts.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()>;
}
