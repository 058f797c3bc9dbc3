//! Model trait and attribute values.
//!
//! A form is bound to anything implementing [`Model`]: the builder only
//! needs the model's type name and a way to read attributes by name.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{ErrorGetter, FormError, Result};

/// A domain object whose attributes can be bound to form fields.
///
/// # Example
///
/// ```rust
/// use oxide_form_for::{FormError, Model, Result, Value};
///
/// struct Order {
///     total: i64,
/// }
///
/// impl Model for Order {
///     fn value(&self, attribute: &str) -> Result<Value> {
///         match attribute {
///             "total" => Ok(self.total.into()),
///             _ => Err(FormError::attribute_not_found("Order", attribute)),
///         }
///     }
/// }
/// ```
pub trait Model: Send + Sync {
    /// Returns the model's type name, possibly namespace-qualified.
    ///
    /// The default is the Rust type path, e.g. `shop::models::Order`.
    fn model_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(type_name::<Self>())
    }

    /// Reads an attribute.
    ///
    /// Unknown attributes fail with [`FormError::AttributeNotFound`].
    fn value(&self, attribute: &str) -> Result<Value>;

    /// Returns the model's validation errors, if it tracks any.
    fn error_getter(&self) -> Option<Arc<dyn ErrorGetter>> {
        None
    }
}

/// The value of a model attribute.
#[derive(Clone, Default)]
pub enum Value {
    /// No value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
    /// Date and time without a timezone.
    DateTime(NaiveDateTime),
    /// A list of values, e.g. a has-many association.
    List(Vec<Value>),
    /// A related model, e.g. a has-one association.
    Model(Arc<dyn Model>),
}

impl Value {
    /// Wraps a model as an association value.
    pub fn model(model: impl Model + 'static) -> Self {
        Self::Model(Arc::new(model))
    }

    /// Returns whether the value is [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text written into an input's `value` attribute.
    ///
    /// Null, lists and models have no scalar representation.
    pub fn as_form_value(&self) -> Option<String> {
        match self {
            Self::Null | Self::List(_) | Self::Model(_) => None,
            Self::Bool(true) => Some("1".to_string()),
            Self::Bool(false) => Some(String::new()),
            Self::Int(n) => Some(n.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            Self::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }

    /// Returns the values selected by this value in a multi-choice control.
    ///
    /// Models in a list are identified by their `id` attribute.
    pub fn as_selection(&self) -> Vec<String> {
        match self {
            Self::List(items) => items.iter().filter_map(Self::selection_key).collect(),
            other => other.selection_key().into_iter().collect(),
        }
    }

    fn selection_key(&self) -> Option<String> {
        match self {
            Self::Model(model) => model.value("id").ok().and_then(|id| id.as_form_value()),
            other => other.as_form_value(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Date(d) => f.debug_tuple("Date").field(d).finish(),
            Self::DateTime(dt) => f.debug_tuple("DateTime").field(dt).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Model(model) => f.debug_tuple("Model").field(&model.model_name()).finish(),
        }
    }
}

/// Models compare by identity, everything else by value.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Model(a), Self::Model(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<Arc<dyn Model>> for Value {
    fn from(model: Arc<dyn Model>) -> Self {
        Self::Model(model)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// The model or models a nested form is built for.
#[derive(Clone)]
pub enum Associated {
    /// A single related model (one-to-one).
    One(Arc<dyn Model>),
    /// A list of related models (one-to-many).
    Many(Vec<Arc<dyn Model>>),
}

impl Associated {
    /// A single related model.
    pub fn one(model: impl Model + 'static) -> Self {
        Self::One(Arc::new(model))
    }

    /// A list of related models.
    pub fn many<M: Model + 'static>(models: impl IntoIterator<Item = M>) -> Self {
        Self::Many(
            models
                .into_iter()
                .map(|m| Arc::new(m) as Arc<dyn Model>)
                .collect(),
        )
    }

    /// Interprets an attribute value as an association.
    ///
    /// Accepts a model or a list made only of models.
    pub fn from_value(attribute: &str, value: Value) -> Result<Self> {
        let not_an_association = || FormError::NotAnAssociation {
            attribute: attribute.to_string(),
        };
        match value {
            Value::Model(model) => Ok(Self::One(model)),
            Value::List(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Model(model) => Ok(model),
                    _ => Err(not_an_association()),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Many),
            _ => Err(not_an_association()),
        }
    }
}

impl fmt::Debug for Associated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(model) => f.debug_tuple("One").field(&model.model_name()).finish(),
            Self::Many(models) => f
                .debug_tuple("Many")
                .field(&models.iter().map(|m| m.model_name()).collect::<Vec<_>>())
                .finish(),
        }
    }
}
