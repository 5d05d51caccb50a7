//! Default implementations of the port traits.

use crate::ports::{CatalogSource, WritePort};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use localefix_catalog::LoadedSections;

/// The catalog shipped inside the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalogSource;

impl CatalogSource for EmbeddedCatalogSource {
    fn load_sections(&self) -> anyhow::Result<Vec<LoadedSections>> {
        Ok(localefix_catalog::embedded_catalog())
    }
}

/// Embedded catalog with per-locale override files from a directory.
#[derive(Debug, Clone)]
pub struct FsCatalogSource {
    pub catalog_dir: Utf8PathBuf,
}

impl FsCatalogSource {
    pub fn new(catalog_dir: Utf8PathBuf) -> Self {
        Self { catalog_dir }
    }
}

impl CatalogSource for FsCatalogSource {
    fn load_sections(&self) -> anyhow::Result<Vec<LoadedSections>> {
        Ok(localefix_catalog::load_catalog_overrides(&self.catalog_dir))
    }
}

/// Filesystem write operations.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create parent dir for {}", path))?;
        }
        std::fs::write(path, contents).with_context(|| format!("write {}", path))
    }

    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()> {
        std::fs::create_dir_all(path).with_context(|| format!("create_dir_all {}", path))
    }
}
