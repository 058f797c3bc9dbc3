#![allow(dead_code)]

use std::borrow::Cow;
use std::sync::Arc;

use chrono::NaiveDate;
use oxide_form_for::{ErrorGetter, FormError, Model, Result, ValidationErrors, Value};

pub struct LineItem {
    pub sku: String,
    pub price: i64,
}

impl Model for LineItem {
    fn model_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Shop\\LineItem")
    }

    fn value(&self, attribute: &str) -> Result<Value> {
        match attribute {
            "sku" => Ok(self.sku.as_str().into()),
            "price" => Ok(self.price.into()),
            _ => Err(FormError::attribute_not_found("LineItem", attribute)),
        }
    }
}

pub struct ShippingAddress {
    pub street: String,
}

impl Model for ShippingAddress {
    fn model_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Namespace\\ShippingAddress")
    }

    fn value(&self, attribute: &str) -> Result<Value> {
        match attribute {
            "street" => Ok(self.street.as_str().into()),
            _ => Err(FormError::attribute_not_found("ShippingAddress", attribute)),
        }
    }
}

pub struct Order {
    pub total: i64,
    pub paid: bool,
    pub due_date: NaiveDate,
    pub contact_email: String,
    pub items: Vec<Arc<dyn Model>>,
    pub address: Arc<dyn Model>,
    pub errors: ValidationErrors,
}

impl Model for Order {
    fn model_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Shop\\Order")
    }

    fn value(&self, attribute: &str) -> Result<Value> {
        match attribute {
            "total" => Ok(self.total.into()),
            "paid" => Ok(self.paid.into()),
            "dueDate" => Ok(self.due_date.into()),
            "contact_email" => Ok(self.contact_email.as_str().into()),
            "items" => Ok(Value::List(
                self.items.iter().cloned().map(Value::Model).collect(),
            )),
            "address" => Ok(Value::Model(self.address.clone())),
            _ => Err(FormError::attribute_not_found("Order", attribute)),
        }
    }

    fn error_getter(&self) -> Option<Arc<dyn ErrorGetter>> {
        if self.errors.is_empty() {
            None
        } else {
            Some(Arc::new(self.errors.clone()))
        }
    }
}

pub fn item(sku: &str, price: i64) -> Arc<dyn Model> {
    Arc::new(LineItem {
        sku: sku.to_string(),
        price,
    })
}

/// An order with three line items and a shipping address.
pub fn order() -> Order {
    Order {
        total: 60,
        paid: false,
        due_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        contact_email: "buyer@example.com".to_string(),
        items: vec![item("A-1", 10), item("B-2", 20), item("C-3", 30)],
        address: Arc::new(ShippingAddress {
            street: "1 Main St".to_string(),
        }),
        errors: ValidationErrors::new(),
    }
}

pub fn order_with_errors(errors: ValidationErrors) -> Order {
    Order {
        errors,
        ..order()
    }
}

pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in:\n{haystack}"))
}
