//! Form configuration options.

use std::sync::Arc;

use oxide_html::Attrs;

use crate::getters::{LabelGetter, ValueGetter};
use crate::locale::Locale;

/// Configuration for a [`crate::FormFor`].
///
/// Everything except `name` is forwarded to nested forms created with
/// `fields_for`, so getters, locale and form attributes apply to the whole
/// form tree.
#[derive(Clone, Default)]
pub struct FormOptions {
    /// Overrides the base name derived from the model's type name.
    pub name: Option<String>,
    /// Custom label getter; defaults to a locale-aware humanizer.
    pub label_getter: Option<Arc<dyn LabelGetter>>,
    /// Custom value getter; defaults to direct attribute access.
    pub value_getter: Option<Arc<dyn ValueGetter>>,
    /// Translation lookup used by the default label getter.
    pub locale: Option<Arc<dyn Locale>>,
    /// Attributes of the `<form>` tag.
    pub attributes: Attrs,
}

impl std::fmt::Debug for FormOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormOptions")
            .field("name", &self.name)
            .field("label_getter", &self.label_getter.is_some())
            .field("value_getter", &self.value_getter.is_some())
            .field("locale", &self.locale.is_some())
            .field("attributes", &self.attributes)
            .finish()
    }
}

impl FormOptions {
    /// Creates options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the label getter.
    #[must_use]
    pub fn label_getter(mut self, getter: impl LabelGetter + 'static) -> Self {
        self.label_getter = Some(Arc::new(getter));
        self
    }

    /// Sets the value getter.
    #[must_use]
    pub fn value_getter(mut self, getter: impl ValueGetter + 'static) -> Self {
        self.value_getter = Some(Arc::new(getter));
        self
    }

    /// Sets the locale.
    #[must_use]
    pub fn locale(mut self, locale: impl Locale + 'static) -> Self {
        self.locale = Some(Arc::new(locale));
        self
    }

    /// Sets a `<form>` tag attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Returns `self` overridden by every option set in `other`.
    #[must_use]
    pub fn merged_with(mut self, other: Self) -> Self {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.label_getter.is_some() {
            self.label_getter = other.label_getter;
        }
        if other.value_getter.is_some() {
            self.value_getter = other.value_getter;
        }
        if other.locale.is_some() {
            self.locale = other.locale;
        }
        self.attributes.merge(&other.attributes);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Catalog;

    #[test]
    fn test_merged_with_overrides_set_options() {
        let base = FormOptions::new()
            .name("order")
            .locale(Catalog::new())
            .attr("class", "a")
            .attr("data-x", "1");
        let merged = base.merged_with(FormOptions::new().attr("class", "b"));

        assert_eq!(merged.name.as_deref(), Some("order"));
        assert!(merged.locale.is_some());
        assert!(merged.label_getter.is_none());
        assert_eq!(merged.attributes.get("class"), Some("b"));
        assert_eq!(merged.attributes.get("data-x"), Some("1"));
    }
}
