use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A locale supported by the message store.
///
/// The store is a closed set of four languages; message files live at
/// `<messages-dir>/<locale>.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    De,
    Es,
    Ru,
}

impl Locale {
    /// All supported locales, in deterministic order.
    pub const ALL: [Locale; 4] = [Locale::En, Locale::De, Locale::Es, Locale::Ru];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
            Locale::Es => "es",
            Locale::Ru => "ru",
        }
    }

    /// File name of this locale's message document.
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale: {}", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "de" => Ok(Locale::De),
            "es" => Ok(Locale::Es),
            "ru" => Ok(Locale::Ru),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// A shared UI-string section of a message document.
///
/// These are the document-root sections the section updater owns; everything
/// else in a message file (calculator entries, categories) is left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Common,
    Brand,
    Breadcrumbs,
    Navigation,
    Footer,
}

impl Section {
    /// All shared sections, in document order.
    pub const ALL: [Section; 5] = [
        Section::Common,
        Section::Brand,
        Section::Breadcrumbs,
        Section::Navigation,
        Section::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Common => "common",
            Section::Brand => "brand",
            Section::Breadcrumbs => "breadcrumbs",
            Section::Navigation => "navigation",
            Section::Footer => "footer",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(Section::Common),
            "brand" => Ok(Section::Brand),
            "breadcrumbs" => Ok(Section::Breadcrumbs),
            "navigation" => Ok(Section::Navigation),
            "footer" => Ok(Section::Footer),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section: {}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_round_trips_through_str() {
        for locale in Locale::ALL {
            assert_eq!(locale.as_str().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn locale_rejects_unknown_code() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert_eq!(err.0, "fr");
    }

    #[test]
    fn locale_serde_uses_lowercase_code() {
        let json = serde_json::to_string(&Locale::De).unwrap();
        assert_eq!(json, "\"de\"");
        let back: Locale = serde_json::from_str("\"ru\"").unwrap();
        assert_eq!(back, Locale::Ru);
    }

    #[test]
    fn section_round_trips_through_str() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn file_name_appends_json_extension() {
        assert_eq!(Locale::Es.file_name(), "es.json");
    }
}
