//! Natural-language maps: the `<name>Map` companions of `name`, `summary`,
//! `content` and `preferredUsername`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Language tag to localized text, kept apart from the property's ordinary
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NaturalLanguageMap {
    entries: BTreeMap<String, String>,
}

impl NaturalLanguageMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text for a language tag.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&str> {
        self.entries.get(language).map(String::as_str)
    }

    /// Sets the text for a language tag, returning the previous text.
    pub fn insert(&mut self, language: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.entries.insert(language.into(), text.into())
    }

    /// Removes the text for a language tag.
    pub fn remove(&mut self, language: &str) -> Option<String> {
        self.entries.remove(language)
    }

    /// Number of languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no language is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(language, text)` pairs ordered by language tag.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Decodes a flat string-to-string map. Returns `None` for anything else.
    #[must_use]
    pub fn from_value(raw: &Value) -> Option<Self> {
        let entries = raw
            .as_object()?
            .iter()
            .map(|(k, v)| Some((k.clone(), v.as_str()?.to_owned())))
            .collect::<Option<BTreeMap<_, _>>>()?;
        Some(Self { entries })
    }

    /// Encodes the map as a JSON object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect::<Map<_, _>>(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NaturalLanguageMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
