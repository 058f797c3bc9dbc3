//! Decorator configuration.

use std::sync::Arc;

use crate::error::ErrorGetter;

/// Configuration for a [`super::BootstrapFormFor`].
#[derive(Clone, Default)]
pub struct BootstrapOptions {
    /// CSS class given to text-like inputs that set no class of their own.
    pub input_class: Option<String>,
    /// Error lookup; defaults to the model's own error getter.
    pub error_getter: Option<Arc<dyn ErrorGetter>>,
}

impl std::fmt::Debug for BootstrapOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapOptions")
            .field("input_class", &self.input_class)
            .field("error_getter", &self.error_getter.is_some())
            .finish()
    }
}

impl BootstrapOptions {
    /// Creates options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input class.
    #[must_use]
    pub fn input_class(mut self, class: impl Into<String>) -> Self {
        self.input_class = Some(class.into());
        self
    }

    /// Sets the error getter.
    #[must_use]
    pub fn error_getter(mut self, getter: impl ErrorGetter + 'static) -> Self {
        self.error_getter = Some(Arc::new(getter));
        self
    }

    /// Returns `self` overridden by every option set in `other`.
    #[must_use]
    pub fn merged_with(mut self, other: Self) -> Self {
        if other.input_class.is_some() {
            self.input_class = other.input_class;
        }
        if other.error_getter.is_some() {
            self.error_getter = other.error_getter;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_with_keeps_unset_options() {
        let base = BootstrapOptions::new().input_class("span4");
        let merged = base.clone().merged_with(BootstrapOptions::new());
        assert_eq!(merged.input_class.as_deref(), Some("span4"));

        let merged = base.merged_with(
            BootstrapOptions::new()
                .input_class("span2")
                .error_getter(|_: &str| Some("bad".to_string())),
        );
        assert_eq!(merged.input_class.as_deref(), Some("span2"));
        assert_eq!(
            merged.error_getter.unwrap().error("total").as_deref(),
            Some("bad")
        );
    }
}
