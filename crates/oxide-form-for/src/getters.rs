//! Strategies for reading attribute values and label texts.
//!
//! A [`crate::FormFor`] resolves one [`ValueGetter`] and one [`LabelGetter`]
//! when it is built and uses them for every attribute. Closures with the
//! matching signature implement both traits.

use std::sync::Arc;

use tracing::trace;

use crate::error::Result;
use crate::form_for::FormFor;
use crate::locale::Locale;
use crate::model::{Model, Value};
use crate::naming::humanize;

/// Reads an attribute value from a model.
pub trait ValueGetter: Send + Sync {
    /// Returns the value of `attribute` on `model`.
    fn get(&self, model: &dyn Model, attribute: &str) -> Result<Value>;
}

impl<F> ValueGetter for F
where
    F: Fn(&dyn Model, &str) -> Result<Value> + Send + Sync,
{
    fn get(&self, model: &dyn Model, attribute: &str) -> Result<Value> {
        self(model, attribute)
    }
}

/// Reads the attribute directly and formats dates as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueGetter;

impl ValueGetter for DefaultValueGetter {
    fn get(&self, model: &dyn Model, attribute: &str) -> Result<Value> {
        Ok(match model.value(attribute)? {
            Value::Date(date) => Value::Text(date.format("%Y-%m-%d").to_string()),
            Value::DateTime(dt) => Value::Text(dt.format("%Y-%m-%d").to_string()),
            other => other,
        })
    }
}

/// Produces the label text for an attribute.
pub trait LabelGetter: Send + Sync {
    /// Returns the label text for `attribute` on `form`.
    fn label(&self, form: &FormFor, attribute: &str) -> String;
}

impl<F> LabelGetter for F
where
    F: Fn(&FormFor, &str) -> String + Send + Sync,
{
    fn label(&self, form: &FormFor, attribute: &str) -> String {
        self(form, attribute)
    }
}

/// Looks the label up in a locale, falling back to [`humanize`].
#[derive(Clone, Default)]
pub struct DefaultLabelGetter {
    locale: Option<Arc<dyn Locale>>,
}

impl DefaultLabelGetter {
    /// Creates a label getter using `locale` when present.
    pub fn new(locale: Option<Arc<dyn Locale>>) -> Self {
        Self { locale }
    }
}

impl std::fmt::Debug for DefaultLabelGetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultLabelGetter")
            .field("locale", &self.locale.is_some())
            .finish()
    }
}

impl LabelGetter for DefaultLabelGetter {
    fn label(&self, form: &FormFor, attribute: &str) -> String {
        default_label_text(self.locale.as_deref(), form.model_name(), attribute)
    }
}

/// Computes the default label for an attribute of the named model.
///
/// Tries `model.<model_name>.attributes.<attribute>` and then
/// `model.attributes.<attribute>`. A translation is accepted when it is not
/// empty and, with surrounding brackets trimmed, differs from its key.
pub fn default_label_text(locale: Option<&dyn Locale>, model_name: &str, attribute: &str) -> String {
    if let Some(locale) = locale {
        let keys = [
            format!("model.{model_name}.attributes.{attribute}"),
            format!("model.attributes.{attribute}"),
        ];
        for key in &keys {
            if let Some(label) = locale.lookup(key) {
                let bare = label.trim_matches(|c: char| "({[]})".contains(c));
                if !label.is_empty() && bare != key.as_str() {
                    return label;
                }
            }
        }
        trace!(model = model_name, attribute, "no translation, humanizing");
    }
    humanize(attribute)
}
