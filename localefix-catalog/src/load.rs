use camino::Utf8Path;
use fs_err as fs;
use localefix_types::locale::{Locale, Section};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

const EN_DATA: &str = include_str!("../data/en.json");
const DE_DATA: &str = include_str!("../data/de.json");
const ES_DATA: &str = include_str!("../data/es.json");
const RU_DATA: &str = include_str!("../data/ru.json");

#[derive(Debug, Error, Clone)]
pub enum CatalogError {
    #[error("io error: {message}")]
    Io { message: String },

    #[error("json parse error: {message}")]
    Json { message: String },

    #[error("catalog shape error: {message}")]
    Shape { message: String },
}

/// The shared sections for one locale, in data-file order.
///
/// Only the known [`Section`] keys are kept; other top-level keys in a data
/// file are ignored. Every kept section is guaranteed to be a JSON object.
#[derive(Debug, Clone)]
pub struct SectionSet {
    sections: Map<String, Value>,
}

impl SectionSet {
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let Value::Object(map) = value else {
            return Err(CatalogError::Shape {
                message: "catalog document is not a JSON object".to_string(),
            });
        };

        let mut sections = Map::new();
        for (key, value) in map {
            let Ok(section) = key.parse::<Section>() else {
                debug!(key = %key, "ignoring unknown catalog key");
                continue;
            };
            if !value.is_object() {
                return Err(CatalogError::Shape {
                    message: format!("section {} is not a JSON object", section),
                });
            }
            sections.insert(key, value);
        }

        Ok(Self { sections })
    }

    pub fn get(&self, section: Section) -> Option<&Value> {
        self.sections.get(section.as_str())
    }

    /// Sections in document order, as they appeared in the data file.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &Value)> {
        self.sections.iter().map(|(key, value)| {
            let section = key.parse::<Section>().expect("keys are validated sections");
            (section, value)
        })
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// One locale's catalog entry, loaded tolerantly.
///
/// A data file that fails to read or parse keeps its error here instead of
/// failing the whole catalog; the pipeline reports it per locale.
#[derive(Debug, Clone)]
pub struct LoadedSections {
    pub locale: Locale,
    /// Where the data came from: `embedded` or an override file path.
    pub source: String,
    pub sections: Result<SectionSet, CatalogError>,
}

fn parse_sections(contents: &str) -> Result<SectionSet, CatalogError> {
    let value: Value = serde_json::from_str(contents).map_err(|e| CatalogError::Json {
        message: e.to_string(),
    })?;
    SectionSet::from_value(value)
}

fn embedded_data(locale: Locale) -> &'static str {
    match locale {
        Locale::En => EN_DATA,
        Locale::De => DE_DATA,
        Locale::Es => ES_DATA,
        Locale::Ru => RU_DATA,
    }
}

/// The catalog shipped with the binary, one entry per supported locale.
pub fn embedded_catalog() -> Vec<LoadedSections> {
    Locale::ALL
        .iter()
        .map(|&locale| LoadedSections {
            locale,
            source: "embedded".to_string(),
            sections: parse_sections(embedded_data(locale)),
        })
        .collect()
}

/// Load the catalog with per-locale overrides from `dir`.
///
/// For each locale, `<dir>/<locale>.json` replaces the embedded data when
/// present. A missing override falls back to the embedded data; an unreadable
/// or unparseable override is kept as that locale's error.
pub fn load_catalog_overrides(dir: &Utf8Path) -> Vec<LoadedSections> {
    Locale::ALL
        .iter()
        .map(|&locale| {
            let path = dir.join(locale.file_name());
            if !path.exists() {
                debug!(%path, "no catalog override, using embedded data");
                return LoadedSections {
                    locale,
                    source: "embedded".to_string(),
                    sections: parse_sections(embedded_data(locale)),
                };
            }

            let sections = match fs::read_to_string(&path) {
                Ok(contents) => parse_sections(&contents),
                Err(e) => Err(CatalogError::Io {
                    message: e.to_string(),
                }),
            };

            LoadedSections {
                locale,
                source: path.to_string(),
                sections,
            }
        })
        .collect()
}
