use serde_json::{Map, Value};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::domain::errors::DomainError;

/// Local storage key holding the chosen language code
pub const LANGUAGE_STORAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Sp,
    Gr,
    It,
    Ru,
}

impl Language {
    pub fn code(self) -> &'static str {
        self.into()
    }

    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        code.parse().map_err(|_| DomainError::UnknownLanguage(code.to_string()))
    }

    fn flag_file(self) -> &'static str {
        match self {
            Language::En => "us.jpg",
            Language::Sp => "spain.jpg",
            Language::Gr => "germany.jpg",
            Language::It => "italy.jpg",
            Language::Ru => "russia.jpg",
        }
    }

    pub fn flag_src(self, static_root: &str) -> String {
        format!("{}/images/flags/{}", static_root.trim_end_matches('/'), self.flag_file())
    }

    pub fn bundle_url(self, static_root: &str) -> String {
        format!("{}/lang/{}.json", static_root.trim_end_matches('/'), self.code())
    }
}

/// Translation file: element keys to text, plus a `head` block for the title
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationBundle {
    entries: Map<String, Value>,
}

impl TranslationBundle {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(entries) => Self { entries },
            _ => Self::default(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.entries.get("head")?.get("title")?.as_str()
    }

    /// `(key, text)` pairs for every string entry; nested blocks are skipped.
    pub fn texts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|text| (key.as_str(), text)))
    }
}
