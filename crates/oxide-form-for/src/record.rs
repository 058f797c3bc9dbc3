//! JSON-backed models.

use std::borrow::Cow;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::error::{ErrorGetter, FormError, Result};
use crate::model::{Model, Value};

/// A model whose attributes come from a JSON object.
///
/// Any `Serialize` type can be turned into a `Record`, so plain structs can be
/// bound to a form without a hand-written [`Model`] impl. Nested objects
/// become nested records named after the attribute holding them.
///
/// ```rust
/// use oxide_form_for::{FormFor, Record};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Order {
///     total: i64,
/// }
///
/// let record = Record::from_serialize("Order", &Order { total: 12 }).unwrap();
/// let form = FormFor::for_model(record);
/// assert_eq!(form.field_name("total"), "order[total]");
/// ```
#[derive(Clone)]
pub struct Record {
    name: String,
    fields: Map<String, JsonValue>,
    errors: Option<Arc<dyn ErrorGetter>>,
}

impl Record {
    /// Creates an empty record with the given model name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Map::new(),
            errors: None,
        }
    }

    /// Builds a record from a JSON object.
    pub fn from_json(name: impl Into<String>, json: JsonValue) -> Result<Self> {
        let name = name.into();
        match json {
            JsonValue::Object(fields) => Ok(Self {
                name,
                fields,
                errors: None,
            }),
            other => Err(FormError::InvalidJson(format!(
                "record `{name}` must be a JSON object, got {other}"
            ))),
        }
    }

    /// Builds a record by serializing `value`.
    pub fn from_serialize<T: Serialize>(name: impl Into<String>, value: &T) -> Result<Self> {
        Self::from_json(name, serde_json::to_value(value)?)
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(attribute.into(), value.into());
        self
    }

    /// Builder method to attach validation errors.
    #[must_use]
    pub fn with_errors(mut self, errors: impl ErrorGetter + 'static) -> Self {
        self.errors = Some(Arc::new(errors));
        self
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl Model for Record {
    fn model_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn value(&self, attribute: &str) -> Result<Value> {
        self.fields
            .get(attribute)
            .map(|json| from_json_value(attribute, json))
            .ok_or_else(|| FormError::attribute_not_found(&self.name, attribute))
    }

    fn error_getter(&self) -> Option<Arc<dyn ErrorGetter>> {
        self.errors.clone()
    }
}

fn from_json_value(attribute: &str, json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => n
            .as_i64()
            .map(Value::Int)
            .or_else(|| n.as_f64().map(Value::Float))
            .unwrap_or(Value::Null),
        JsonValue::String(s) => Value::Text(s.clone()),
        JsonValue::Array(items) => Value::List(
            items
                .iter()
                .map(|item| from_json_value(attribute, item))
                .collect(),
        ),
        JsonValue::Object(fields) => Value::model(Record {
            name: attribute.to_string(),
            fields: fields.clone(),
            errors: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_attributes() {
        let record = Record::from_json(
            "Order",
            json!({ "total": 12, "rate": 0.5, "paid": true, "note": "x", "gone": null }),
        )
        .unwrap();
        assert_eq!(record.value("total").unwrap(), Value::Int(12));
        assert_eq!(record.value("rate").unwrap(), Value::Float(0.5));
        assert_eq!(record.value("paid").unwrap(), Value::Bool(true));
        assert_eq!(record.value("note").unwrap(), Value::from("x"));
        assert!(record.value("gone").unwrap().is_null());
    }

    #[test]
    fn test_missing_attribute() {
        let record = Record::new("Order");
        let err = record.value("total").unwrap_err();
        assert!(matches!(
            err,
            FormError::AttributeNotFound { ref model, ref attribute }
                if model == "Order" && attribute == "total"
        ));
    }

    #[test]
    fn test_nested_objects_become_models() {
        let record = Record::from_json(
            "Order",
            json!({ "customer": { "name": "Ann" }, "items": [{ "sku": "a" }, { "sku": "b" }] }),
        )
        .unwrap();

        let Value::Model(customer) = record.value("customer").unwrap() else {
            panic!("expected a model");
        };
        assert_eq!(customer.model_name(), "customer");
        assert_eq!(customer.value("name").unwrap(), Value::from("Ann"));

        let Value::List(items) = record.value("items").unwrap() else {
            panic!("expected a list");
        };
        assert_eq!(items.len(), 2);
        assert!(matches!(items[1], Value::Model(_)));
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = Record::from_json("Order", json!([1, 2])).unwrap_err();
        assert!(matches!(err, FormError::InvalidJson(_)));
    }

    #[test]
    fn test_from_serialize() {
        #[derive(Serialize)]
        struct Address {
            city: String,
        }

        let record = Record::from_serialize(
            "Address",
            &Address {
                city: "Ghent".to_string(),
            },
        )
        .unwrap();
        assert_eq!(record.value("city").unwrap(), Value::from("Ghent"));
    }
}
