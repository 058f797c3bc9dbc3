//! Error types for form builders.

use std::collections::HashMap;
use thiserror::Error;

/// Form builder errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// The model has no attribute with this name.
    #[error("attribute `{attribute}` not found on model `{model}`")]
    AttributeNotFound { model: String, attribute: String },

    /// `fields_for` was asked to recurse into something that is not a model.
    #[error("attribute `{attribute}` is not an association")]
    NotAnAssociation { attribute: String },

    /// A forwarded operation does not exist on the wrapped form.
    #[error("method {operation} does not exist in {decorator} or the underlying {wrapped} object")]
    UnknownOperation {
        operation: String,
        decorator: &'static str,
        wrapped: &'static str,
    },

    /// JSON input could not be parsed or serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON input has the wrong shape.
    #[error("invalid JSON input: {0}")]
    InvalidJson(String),
}

impl FormError {
    /// Shorthand for [`FormError::AttributeNotFound`].
    pub fn attribute_not_found(model: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::AttributeNotFound {
            model: model.into(),
            attribute: attribute.into(),
        }
    }
}

/// Looks up the validation error text for an attribute.
///
/// Models expose one through [`crate::Model::error_getter`]; the Bootstrap
/// decorator uses it to render error blocks.
pub trait ErrorGetter: Send + Sync {
    /// Returns the error text for `attribute`, if any.
    fn error(&self, attribute: &str) -> Option<String>;
}

impl<F> ErrorGetter for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn error(&self, attribute: &str) -> Option<String> {
        self(attribute)
    }
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Builder method to add an error.
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}

impl ErrorGetter for ValidationErrors {
    fn error(&self, attribute: &str) -> Option<String> {
        self.get(attribute)
            .filter(|messages| !messages.is_empty())
            .map(|messages| messages.join(" "))
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
