//! Shared-section translation catalog.
//!
//! localefix owns the translations for the shared UI-string sections (`common`,
//! `brand`, `breadcrumbs`, `navigation`, `footer`). They live as per-locale JSON
//! data files embedded in this crate rather than as literals in source, so a
//! translation change never requires touching Rust code. A directory of override
//! files can replace the embedded data per locale; a broken override degrades
//! that locale only.

mod load;

pub use load::{
    CatalogError, LoadedSections, SectionSet, embedded_catalog, load_catalog_overrides,
};
