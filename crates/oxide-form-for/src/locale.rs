//! Translation lookup for label texts.

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use crate::error::{FormError, Result};

/// Looks up translated strings by dotted key.
///
/// Injected once through [`crate::FormOptions::locale`]; the default label
/// getter queries it with `model.<model>.attributes.<attribute>` and
/// `model.attributes.<attribute>`.
pub trait Locale: Send + Sync {
    /// Returns the translation for `key`, if there is one.
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<F> Locale for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// An in-memory translation catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Builder method to add a translation.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Loads a catalog from a JSON document.
    ///
    /// Nested objects are flattened into dotted keys, so
    /// `{"model": {"attributes": {"total": "Sum"}}}` defines
    /// `model.attributes.total`. Non-string leaves are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        let root: JsonValue = serde_json::from_str(json)?;
        let JsonValue::Object(map) = root else {
            return Err(FormError::InvalidJson(
                "catalog root must be a JSON object".to_string(),
            ));
        };

        let mut catalog = Self::new();
        let mut pending: Vec<(String, JsonValue)> = map.into_iter().collect();
        while let Some((key, value)) = pending.pop() {
            match value {
                JsonValue::String(text) => catalog.insert(key, text),
                JsonValue::Object(children) => pending.extend(
                    children
                        .into_iter()
                        .map(|(child, value)| (format!("{key}.{child}"), value)),
                ),
                _ => {}
            }
        }
        Ok(catalog)
    }

    /// Returns the number of translations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Locale for Catalog {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
