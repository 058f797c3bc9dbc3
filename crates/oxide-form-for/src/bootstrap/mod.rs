//! Bootstrap 2 control-group decoration for [`FormFor`].
//!
//! [`BootstrapFormFor`] renders each control through the wrapped [`FormFor`]
//! and places it in a `control-group` row with its label, optional add-ons,
//! help text and validation errors.
//!
//! ```rust
//! use oxide_form_for::bootstrap::{BootstrapFormFor, BootstrapOptions, RowOptions};
//! use oxide_form_for::Record;
//! use oxide_html::Attrs;
//!
//! let order = Record::new("Order").with("total", 12);
//! let form = BootstrapFormFor::forge(order, BootstrapOptions::new());
//!
//! let row = form
//!     .text("total", &Attrs::new(), RowOptions::new().help("Gross amount"))
//!     .unwrap();
//! assert!(row.starts_with(r#"<div class="control-group">"#));
//! assert!(row.contains(r#"<span class="help-inline">Gross amount</span>"#));
//! ```

mod options;
mod row;

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Label};
use oxide_html::{tag, Attrs, CheckBox, Choice, Content};
use tracing::{debug, warn};

pub use options::BootstrapOptions;
pub use row::{Help, RowOptions};

use crate::error::{ErrorGetter, FormError, Result};
use crate::form_for::{FormFor, Nested};
use crate::model::{Associated, Model, Value};
use crate::options::FormOptions;

/// A [`FormFor`] decorated with Bootstrap 2 form markup.
#[derive(Clone)]
pub struct BootstrapFormFor {
    form: FormFor,
    input_class: Option<String>,
    error_getter: Option<Arc<dyn ErrorGetter>>,
    options_for_nested: BootstrapOptions,
}

impl BootstrapFormFor {
    /// Decorates `form`.
    ///
    /// The error getter is the one from `options` or, failing that, the one
    /// exposed by the form's model. Nested decorators look up their own.
    pub fn new(form: FormFor, options: BootstrapOptions) -> Self {
        let mut options_for_nested = options;
        let error_getter = options_for_nested
            .error_getter
            .take()
            .or_else(|| form.model().error_getter());

        Self {
            input_class: options_for_nested.input_class.clone(),
            form,
            error_getter,
            options_for_nested,
        }
    }

    /// Decorates a default [`FormFor`] for `model`.
    pub fn forge(model: impl Model + 'static, options: BootstrapOptions) -> Self {
        Self::new(FormFor::for_model(model), options)
    }

    /// The bound model.
    pub fn model(&self) -> &Arc<dyn Model> {
        self.form.model()
    }

    /// The wrapped form.
    pub fn form(&self) -> &FormFor {
        &self.form
    }

    /// The form's opening tag with the `form-horizontal` class by default.
    pub fn open(&self, extra: &Attrs) -> Option<String> {
        let extra = extra
            .clone()
            .with_defaults(Attrs::new().with("class", "form-horizontal"));
        self.form.open(&extra)
    }

    /// The form's closing tag.
    pub fn close(&self) -> Option<String> {
        self.form.close()
    }

    /// A label with the `control-label` class by default.
    pub fn label(&self, attribute: &str, text: Option<&str>, attrs: &Attrs) -> String {
        let attrs = attrs
            .clone()
            .with_defaults(Attrs::new().with("class", "control-label"));
        self.form.label(attribute, text, &attrs)
    }

    /// A text input row.
    pub fn text(&self, attribute: &str, attrs: &Attrs, row: RowOptions) -> Result<String> {
        let control = self.form.text(attribute, &self.input_attrs(attrs))?;
        Ok(self.control_row(attribute, &control, row))
    }

    /// A password input row.
    pub fn password(&self, attribute: &str, attrs: &Attrs, row: RowOptions) -> String {
        let control = self.form.password(attribute, &self.input_attrs(attrs));
        self.control_row(attribute, &control, row)
    }

    /// A textarea row.
    pub fn text_area(&self, attribute: &str, attrs: &Attrs, row: RowOptions) -> Result<String> {
        let control = self.form.text_area(attribute, &self.input_attrs(attrs))?;
        Ok(self.control_row(attribute, &control, row))
    }

    /// A select box row.
    pub fn select(
        &self,
        attribute: &str,
        collection: &[Choice],
        attrs: &Attrs,
        row: RowOptions,
    ) -> Result<String> {
        let control = self
            .form
            .select(attribute, collection, &self.input_attrs(attrs))?;
        Ok(self.control_row(attribute, &control, row))
    }

    /// A hidden input, without any row around it.
    pub fn hidden(&self, attribute: &str, attrs: &Attrs) -> Result<String> {
        self.form.hidden(attribute, attrs)
    }

    /// A checkbox row.
    ///
    /// The hidden companion field goes right after the row label so it sits
    /// outside the `controls` element. The inline help is shown inside the
    /// checkbox label instead of after it; help attributes go on a `span`
    /// around the help text.
    pub fn check_box(&self, attribute: &str, attrs: &Attrs, mut row: RowOptions) -> Result<String> {
        let CheckBox { hidden, input } = self.form.check_box(attribute, attrs, true)?;

        let content = Element::<Label>::new().class("checkbox").raw(&input);
        let content = match row.help.take().filter(|help| !help.text.is_empty()) {
            Some(help) if help.attributes.is_empty() => content.text(&help.text),
            Some(help) => {
                content.raw(tag("span", &help.attributes, Content::Text(&help.text)))
            }
            None => content.raw("&nbsp;"),
        };

        let mut label = self.label(attribute, row.label.take().as_deref(), &Attrs::new());
        label.push_str(hidden.as_deref().unwrap_or_default());
        row.errors = self.resolve_errors(attribute, row.errors.take());

        Ok(self.row(&label, &content.render(), row))
    }

    /// A row of inline checkboxes for a has-many association.
    pub fn collection_check_boxes(
        &self,
        attribute: &str,
        collection: &[Choice],
        row: RowOptions,
    ) -> Result<String> {
        let control = self.form.collection_check_boxes(
            attribute,
            collection,
            &Attrs::new().with("class", "checkbox inline"),
        )?;
        Ok(self.control_row(attribute, &control, row))
    }

    /// A row of radio buttons. The row label points at no single input.
    pub fn collection_radios(
        &self,
        attribute: &str,
        collection: &[Choice],
        mut row: RowOptions,
    ) -> Result<String> {
        let control = self.form.collection_radios(
            attribute,
            collection,
            &Attrs::new().with("class", "radio"),
        )?;
        let label_attrs = Attrs::new().without("for").without("id");
        let label = self.label(attribute, row.label.take().as_deref(), &label_attrs);
        row.errors = self.resolve_errors(attribute, row.errors.take());
        Ok(self.row(&label, &control, row))
    }

    /// A group of buttons acting as a radio selection.
    ///
    /// The button whose value matches the attribute's current value is marked
    /// `active`. Client-side script is expected to copy the chosen
    /// `data-value` into the field named by `data-field`.
    pub fn button_group(
        &self,
        attribute: &str,
        collection: &[Choice],
        row: RowOptions,
    ) -> Result<String> {
        let selected = self.form.value(attribute)?.as_form_value();

        let buttons: String = collection
            .iter()
            .map(|(value, text)| {
                let class = if selected.as_deref() == Some(value.as_str()) {
                    "btn btn-large active"
                } else {
                    "btn btn-large"
                };
                let attrs = Attrs::new()
                    .with("data-value", value)
                    .with("class", class);
                self.form.button(attribute, text, &attrs)
            })
            .collect();

        let group = Element::<Div>::new()
            .class("btn-group masked-radio")
            .attr("data-toggle", "buttons-radio")
            .attr("data-field", attribute)
            .raw(&buttons)
            .render();

        Ok(self.control_row(attribute, &group, row))
    }

    /// Creates decorated nested forms for the association `name`.
    ///
    /// `options` override this decorator's options for the nested ones;
    /// `form_options` are passed to [`FormFor::fields_for`].
    pub fn fields_for(
        &self,
        name: &str,
        models: Option<Associated>,
        options: BootstrapOptions,
        form_options: FormOptions,
    ) -> Result<Nested<Self>> {
        let options = self.options_for_nested.clone().merged_with(options);
        let nested = self.form.fields_for(name, models, form_options)?;
        Ok(nested.map(|form| Self::new(form, options.clone())))
    }

    /// Wraps already rendered markup in a control group.
    pub fn row(&self, label: &str, controls: &str, options: RowOptions) -> String {
        row::render(label, controls, options)
    }

    /// The validation error text for an attribute, if any.
    pub fn error_text_for(&self, attribute: &str) -> Option<String> {
        self.error_getter.as_ref()?.error(attribute)
    }

    /// The plain text input of the wrapped form.
    pub fn raw_text(&self, attribute: &str, attrs: &Attrs) -> Result<String> {
        self.form.text(attribute, attrs)
    }

    /// The plain textarea of the wrapped form.
    pub fn raw_text_area(&self, attribute: &str, attrs: &Attrs) -> Result<String> {
        self.form.text_area(attribute, attrs)
    }

    /// The plain checkbox of the wrapped form.
    pub fn raw_check_box(
        &self,
        attribute: &str,
        attrs: &Attrs,
        with_hidden: bool,
    ) -> Result<CheckBox> {
        self.form.check_box(attribute, attrs, with_hidden)
    }

    /// The plain radio button of the wrapped form.
    pub fn raw_radio(
        &self,
        attribute: &str,
        value: impl Into<Value>,
        attrs: &Attrs,
    ) -> Result<String> {
        self.form.radio(attribute, value, attrs)
    }

    /// The plain password input of the wrapped form.
    pub fn raw_password(&self, attribute: &str, attrs: &Attrs) -> String {
        self.form.password(attribute, attrs)
    }

    /// The plain select box of the wrapped form.
    pub fn raw_select(&self, attribute: &str, collection: &[Choice], attrs: &Attrs) -> Result<String> {
        self.form.select(attribute, collection, attrs)
    }

    /// The plain hidden input of the wrapped form.
    pub fn raw_hidden(&self, attribute: &str, attrs: &Attrs) -> Result<String> {
        self.form.hidden(attribute, attrs)
    }

    /// The plain label of the wrapped form, without the `control-label` class.
    pub fn raw_label(&self, attribute: &str, text: Option<&str>, attrs: &Attrs) -> String {
        self.form.label(attribute, text, attrs)
    }

    /// The plain button of the wrapped form.
    pub fn raw_button(&self, attribute: &str, text: &str, attrs: &Attrs) -> String {
        self.form.button(attribute, text, attrs)
    }

    /// The plain checkbox collection of the wrapped form.
    pub fn raw_collection_check_boxes(
        &self,
        attribute: &str,
        collection: &[Choice],
        label_attrs: &Attrs,
    ) -> Result<String> {
        self.form
            .collection_check_boxes(attribute, collection, label_attrs)
    }

    /// The plain radio collection of the wrapped form.
    pub fn raw_collection_radios(
        &self,
        attribute: &str,
        collection: &[Choice],
        label_attrs: &Attrs,
    ) -> Result<String> {
        self.form.collection_radios(attribute, collection, label_attrs)
    }

    /// Calls an undecorated operation of the wrapped form by name.
    ///
    /// Meant for templates that only know the operation name. A leading `_`
    /// is accepted, in snake or camel case (`text_area` or `textArea`).
    /// Tags a nested form does not have render as an empty string, and
    /// `value` renders the attribute as written into an input. Operations
    /// needing more than an attribute and attributes (radios, selects,
    /// buttons) are only reachable through the `raw_*` methods; any other
    /// name fails with [`FormError::UnknownOperation`].
    pub fn forward(&self, operation: &str, attribute: &str, attrs: &Attrs) -> Result<String> {
        let name = operation.strip_prefix('_').unwrap_or(operation);
        debug!(operation, attribute, "forwarding to wrapped form");

        match name {
            "text" => self.raw_text(attribute, attrs),
            "text_area" | "textArea" => self.raw_text_area(attribute, attrs),
            "password" => Ok(self.raw_password(attribute, attrs)),
            "hidden" => self.raw_hidden(attribute, attrs),
            "check_box" | "checkBox" => Ok(self.raw_check_box(attribute, attrs, true)?.to_string()),
            "label" => Ok(self.raw_label(attribute, None, attrs)),
            "open" => Ok(self.form.open(attrs).unwrap_or_default()),
            "close" => Ok(self.form.close().unwrap_or_default()),
            "field_name" | "fieldName" => Ok(self.form.field_name(attribute)),
            "field_id" | "fieldId" => Ok(self.form.field_id(attribute)),
            "label_text" | "labelText" => Ok(self.form.label_text(attribute)),
            "value" | "getValue" | "get_value" => Ok(self
                .form
                .value(attribute)?
                .as_form_value()
                .unwrap_or_default()),
            _ => {
                warn!(operation, "unknown forwarded operation");
                Err(FormError::UnknownOperation {
                    operation: operation.to_string(),
                    decorator: type_name::<Self>(),
                    wrapped: type_name::<FormFor>(),
                })
            }
        }
    }

    fn input_attrs(&self, attrs: &Attrs) -> Attrs {
        match &self.input_class {
            Some(class) => attrs
                .clone()
                .with_defaults(Attrs::new().with("class", class.as_str())),
            None => attrs.clone(),
        }
    }

    /// Error getter output wins over errors passed by the caller.
    fn resolve_errors(&self, attribute: &str, fallback: Option<String>) -> Option<String> {
        self.error_text_for(attribute).or(fallback)
    }

    fn control_row(&self, attribute: &str, control: &str, mut row: RowOptions) -> String {
        let label = self.label(attribute, row.label.take().as_deref(), &Attrs::new());
        row.errors = self.resolve_errors(attribute, row.errors.take());
        self.row(&label, control, row)
    }
}

/// Writes the opening tag, like [`FormFor`].
impl fmt::Display for BootstrapFormFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.open(&Attrs::new()) {
            Some(open) => f.write_str(&open),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for BootstrapFormFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapFormFor")
            .field("form", &self.form)
            .field("input_class", &self.input_class)
            .field("error_getter", &self.error_getter.is_some())
            .finish()
    }
}
