//! Ordered HTML attribute maps.

use crate::escape::html_escape;

/// An insertion-ordered set of HTML attributes.
///
/// A key can be *suppressed*: it stays in the map without a value, which
/// keeps it out of the rendered output and also stops primitives from
/// filling in their default for it (for example a label without `for`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: Vec<(String, Option<String>)>,
}

impl Attrs {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets an attribute, keeping its position if it already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.put(key.into(), Some(value.into()));
    }

    /// Marks an attribute as explicitly absent.
    pub fn suppress(&mut self, key: impl Into<String>) {
        self.put(key.into(), None);
    }

    fn put(&mut self, key: String, value: Option<String>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to suppress an attribute.
    #[must_use]
    pub fn without(mut self, key: impl Into<String>) -> Self {
        self.suppress(key);
        self
    }

    /// Returns the value of an attribute, if it is set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Returns whether the key is present, either set or suppressed.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Removes a key and returns its value if it was set.
    pub fn take(&mut self, key: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        self.entries.remove(idx).1
    }

    /// Overlays `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.entries {
            self.put(key.clone(), value.clone());
        }
    }

    /// Returns `defaults` overlaid with `self`.
    ///
    /// Default keys keep their leading position in the output.
    #[must_use]
    pub fn with_defaults(self, defaults: Self) -> Self {
        let mut merged = defaults;
        merged.merge(&self);
        merged
    }

    /// Returns whether no keys are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the attributes that carry a value.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    /// Renders the attributes as `key="value"` pairs separated by spaces.
    pub fn to_html(&self) -> String {
        self.iter()
            .map(|(k, v)| format!(r#"{k}="{}""#, html_escape(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

/// Renders attributes with a leading space, or nothing when none carry a value.
pub fn attributes(attrs: &Attrs) -> String {
    let html = attrs.to_html();
    if html.is_empty() {
        html
    } else {
        format!(" {html}")
    }
}
