//! # oxide-form-for
//!
//! Model-bound HTML form builders with Bootstrap 2 decoration.
//!
//! This crate provides:
//! - [`FormFor`], which names, fills and labels inputs from a model's
//!   attributes, including nested one-to-one and one-to-many associations
//! - [`BootstrapFormFor`], which wraps those inputs in `control-group` rows
//!   with help text, add-ons and validation errors
//! - [`Record`], a ready-made model built from any serializable value
//! - Pluggable value, label, locale and error lookups
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_form_for::{FormFor, FormOptions, Record};
//! use oxide_html::Attrs;
//!
//! let order = Record::new("Order")
//!     .with("total", 12)
//!     .with("items", serde_json::json!([{ "price": 3 }, { "price": 4 }]));
//! let form = FormFor::new(order, "/orders", FormOptions::new());
//!
//! assert_eq!(form.field_name("total"), "order[total]");
//!
//! let items = form.fields_for("items", None, FormOptions::new()).unwrap();
//! let second = &items.into_vec()[1];
//! assert_eq!(second.field_name("price"), "order[items][1][price]");
//! assert_eq!(second.open(&Attrs::new()), None);
//! ```
//!
//! ## Bootstrap Rows
//!
//! ```rust
//! use oxide_form_for::{BootstrapFormFor, BootstrapOptions, Record, RowOptions, ValidationErrors};
//! use oxide_html::Attrs;
//!
//! let order = Record::new("Order")
//!     .with("total", 0)
//!     .with_errors(ValidationErrors::new().with("total", "must be positive"));
//! let form = BootstrapFormFor::forge(order, BootstrapOptions::new().input_class("span3"));
//!
//! let row = form
//!     .text("total", &Attrs::new(), RowOptions::new().prepend("$"))
//!     .unwrap();
//! assert!(row.starts_with(r#"<div class="control-group error">"#));
//! assert!(row.contains("must be positive"));
//! ```
//!
//! ## Labels
//!
//! ```rust
//! use oxide_form_for::{Catalog, FormFor, FormOptions, Record};
//!
//! let catalog = Catalog::new().with("model.order.attributes.total", "Grand total");
//! let order = Record::new("Order").with("total", 1).with("dueDate", "2024-01-31");
//! let form = FormFor::new(order, "", FormOptions::new().locale(catalog));
//!
//! assert_eq!(form.label_text("total"), "Grand total");
//! assert_eq!(form.label_text("dueDate"), "Due Date");
//! ```

pub mod bootstrap;
pub mod error;
pub mod form_for;
pub mod getters;
pub mod locale;
pub mod model;
pub mod naming;
pub mod options;
pub mod record;

pub use bootstrap::{BootstrapFormFor, BootstrapOptions, Help, RowOptions};
pub use error::{ErrorGetter, FormError, Result, ValidationErrors};
pub use form_for::{FormFor, Nested};
pub use getters::{
    default_label_text, DefaultLabelGetter, DefaultValueGetter, LabelGetter, ValueGetter,
};
pub use locale::{Catalog, Locale};
pub use model::{Associated, Model, Value};
pub use naming::{derive_base_name, humanize};
pub use options::FormOptions;
pub use record::Record;
