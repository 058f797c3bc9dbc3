//! The model-bound form builder.

use std::fmt;
use std::sync::Arc;

use oxide_html::{form, Attrs, CheckBox, Choice};
use tracing::debug;

use crate::error::Result;
use crate::getters::{DefaultLabelGetter, DefaultValueGetter, LabelGetter, ValueGetter};
use crate::model::{Associated, Model, Value};
use crate::naming::derive_base_name;
use crate::options::FormOptions;

/// Builds form inputs bound to a model's attributes.
///
/// Every input gets a name of the form `base[attribute]`, an id derived from
/// it and the attribute's current value.
///
/// ```rust
/// use oxide_form_for::{FormFor, FormOptions, Record};
/// use oxide_html::Attrs;
///
/// let transport = Record::new("Transport").with("user_id", 123);
/// let f = FormFor::new(transport, "/action-url", FormOptions::new());
///
/// assert_eq!(
///     f.open(&Attrs::new()).unwrap(),
///     r#"<form action="/action-url" method="post">"#,
/// );
/// assert_eq!(
///     f.text("user_id", &Attrs::new()).unwrap(),
///     r#"<input type="text" id="transport_user_id" name="transport[user_id]" value="123">"#,
/// );
/// ```
#[derive(Clone)]
pub struct FormFor {
    model: Arc<dyn Model>,
    model_name: String,
    name: String,
    action: String,
    attributes: Attrs,
    label_getter: Arc<dyn LabelGetter>,
    value_getter: Arc<dyn ValueGetter>,
    options_for_nested: FormOptions,
    nested: bool,
}

/// One nested form or one per element of an association.
#[derive(Debug, Clone)]
pub enum Nested<F> {
    /// Form for a single related model.
    One(F),
    /// Forms for each element of a collection, in order.
    Many(Vec<F>),
}

impl<F> Nested<F> {
    /// Applies `f` to every form.
    pub fn map<G>(self, mut f: impl FnMut(F) -> G) -> Nested<G> {
        match self {
            Self::One(form) => Nested::One(f(form)),
            Self::Many(forms) => Nested::Many(forms.into_iter().map(f).collect()),
        }
    }

    /// Returns the single form, if this is not a collection.
    pub fn one(self) -> Option<F> {
        match self {
            Self::One(form) => Some(form),
            Self::Many(_) => None,
        }
    }

    /// Returns all forms as a list.
    pub fn into_vec(self) -> Vec<F> {
        match self {
            Self::One(form) => vec![form],
            Self::Many(forms) => forms,
        }
    }

    /// Returns the number of forms.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(forms) => forms.len(),
        }
    }

    /// Returns whether there are no forms.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FormFor {
    /// Creates a form for `model` submitting to `action`.
    pub fn new(model: impl Model + 'static, action: impl Into<String>, options: FormOptions) -> Self {
        Self::from_arc(Arc::new(model), action, options)
    }

    /// Creates a form with no action and default options.
    pub fn for_model(model: impl Model + 'static) -> Self {
        Self::new(model, "", FormOptions::default())
    }

    /// Creates a form for a shared model.
    pub fn from_arc(model: Arc<dyn Model>, action: impl Into<String>, options: FormOptions) -> Self {
        let model_name = derive_base_name(&model.model_name());

        let mut options_for_nested = options;
        let name = options_for_nested
            .name
            .take()
            .unwrap_or_else(|| model_name.clone());

        let label_getter = options_for_nested.label_getter.clone().unwrap_or_else(|| {
            Arc::new(DefaultLabelGetter::new(options_for_nested.locale.clone()))
        });
        let value_getter = options_for_nested
            .value_getter
            .clone()
            .unwrap_or_else(|| Arc::new(DefaultValueGetter));

        Self {
            model,
            model_name,
            name,
            action: action.into(),
            attributes: options_for_nested.attributes.clone(),
            label_getter,
            value_getter,
            options_for_nested,
            nested: false,
        }
    }

    /// Creates nested forms for an association.
    ///
    /// A single model yields a form named `parent[name]`; a collection yields
    /// one form per element named `parent[name][index]`. Without a parent the
    /// leading `parent` is left out.
    pub fn create_fields_for(
        name: &str,
        models: Associated,
        parent_name: Option<&str>,
        options: FormOptions,
    ) -> Nested<Self> {
        let base = match parent_name {
            Some(parent) => format!("{parent}[{name}]"),
            None => name.to_string(),
        };

        match models {
            Associated::One(model) => {
                debug!(name = %base, "creating nested form");
                Nested::One(Self::nested(model, options.name(base)))
            }
            Associated::Many(models) => {
                debug!(name = %base, count = models.len(), "creating nested forms");
                Nested::Many(
                    models
                        .into_iter()
                        .enumerate()
                        .map(|(idx, model)| {
                            Self::nested(model, options.clone().name(format!("{base}[{idx}]")))
                        })
                        .collect(),
                )
            }
        }
    }

    fn nested(model: Arc<dyn Model>, options: FormOptions) -> Self {
        let mut form = Self::from_arc(model, "", options);
        form.nested = true;
        form
    }

    /// Creates nested forms for the association `name`.
    ///
    /// When `models` is `None` the association's current value is used,
    /// which must be a model or a list of models.
    pub fn fields_for(
        &self,
        name: &str,
        models: Option<Associated>,
        options: FormOptions,
    ) -> Result<Nested<Self>> {
        let models = match models {
            Some(models) => models,
            None => Associated::from_value(name, self.value(name)?)?,
        };
        let options = self.options_for_nested.clone().merged_with(options);
        Ok(Self::create_fields_for(name, models, Some(&self.name), options))
    }

    /// The form's opening tag, or `None` for nested forms.
    pub fn open(&self, extra: &Attrs) -> Option<String> {
        if self.nested {
            return None;
        }
        let mut attrs = self.attributes.clone();
        attrs.merge(extra);
        Some(form::open(&self.action, &attrs))
    }

    /// The form's closing tag, or `None` for nested forms.
    pub fn close(&self) -> Option<String> {
        if self.nested {
            return None;
        }
        Some(form::close())
    }

    /// A label for an attribute; `text` defaults to [`Self::label_text`].
    pub fn label(&self, attribute: &str, text: Option<&str>, attrs: &Attrs) -> String {
        let text = text.map_or_else(|| self.label_text(attribute), str::to_string);
        form::label(&text, &self.field_name(attribute), attrs)
    }

    /// A text input.
    pub fn text(&self, attribute: &str, attrs: &Attrs) -> Result<String> {
        let value = self.value(attribute)?.as_form_value();
        Ok(form::text(&self.field_name(attribute), value.as_deref(), attrs))
    }

    /// A password input. The model value is never written into the page.
    pub fn password(&self, attribute: &str, attrs: &Attrs) -> String {
        form::password(&self.field_name(attribute), None, attrs)
    }

    /// A hidden input.
    pub fn hidden(&self, attribute: &str, attrs: &Attrs) -> Result<String> {
        let value = self.value(attribute)?.as_form_value();
        Ok(form::hidden(&self.field_name(attribute), value.as_deref(), attrs))
    }

    /// A textarea. A `value` entry in `attrs` replaces the model value.
    pub fn text_area(&self, attribute: &str, attrs: &Attrs) -> Result<String> {
        let mut attrs = attrs.clone();
        let text = match attrs.take("value") {
            Some(text) => Some(text),
            None => self.value(attribute)?.as_form_value(),
        };
        Ok(form::text_area(&self.field_name(attribute), text.as_deref(), &attrs))
    }

    /// A checkbox submitting `1`, checked when the model value is `1`.
    ///
    /// With `with_hidden`, a hidden `0` field keeps the attribute present in
    /// submitted data when the box is left unchecked.
    pub fn check_box(&self, attribute: &str, attrs: &Attrs, with_hidden: bool) -> Result<CheckBox> {
        let checked = self.value(attribute)?.as_form_value().as_deref() == Some("1");
        Ok(form::check_box(
            &self.field_name(attribute),
            checked,
            "1",
            attrs,
            with_hidden,
        ))
    }

    /// One checkbox per choice for a has-many association.
    pub fn collection_check_boxes(
        &self,
        attribute: &str,
        collection: &[Choice],
        label_attrs: &Attrs,
    ) -> Result<String> {
        let selected = self.value(attribute)?.as_selection();
        Ok(form::collection_check_boxes(
            &self.field_name(attribute),
            collection,
            &selected,
            label_attrs,
        )
        .concat())
    }

    /// A radio button, checked when the model value equals `value`.
    pub fn radio(&self, attribute: &str, value: impl Into<Value>, attrs: &Attrs) -> Result<String> {
        let value = value.into();
        let checked = self.value(attribute)? == value;
        Ok(form::radio(
            &self.field_name(attribute),
            &value.as_form_value().unwrap_or_default(),
            checked,
            attrs,
        ))
    }

    /// One labelled radio button per choice.
    pub fn collection_radios(
        &self,
        attribute: &str,
        collection: &[Choice],
        label_attrs: &Attrs,
    ) -> Result<String> {
        let selected = self.value(attribute)?.as_form_value();
        Ok(form::collection_radios(
            &self.field_name(attribute),
            collection,
            selected.as_deref(),
            label_attrs,
        )
        .concat())
    }

    /// A select box with the model value pre-selected.
    pub fn select(&self, attribute: &str, collection: &[Choice], attrs: &Attrs) -> Result<String> {
        let selected = self.value(attribute)?.as_selection();
        Ok(form::select(
            &self.field_name(attribute),
            collection,
            &selected,
            attrs,
        ))
    }

    /// A button carrying the attribute's field name.
    pub fn button(&self, attribute: &str, text: &str, attrs: &Attrs) -> String {
        form::button(&self.field_name(attribute), text, attrs)
    }

    /// The submitted name of an attribute, e.g. `order[items][1][price]`.
    pub fn field_name(&self, attribute: &str) -> String {
        format!("{}[{attribute}]", self.name)
    }

    /// The element id of an attribute's input.
    pub fn field_id(&self, attribute: &str) -> String {
        form::auto_id(&self.field_name(attribute))
    }

    /// Reads an attribute through the configured value getter.
    pub fn value(&self, attribute: &str) -> Result<Value> {
        self.value_getter.get(self.model.as_ref(), attribute)
    }

    /// Label text for an attribute through the configured label getter.
    pub fn label_text(&self, attribute: &str) -> String {
        self.label_getter.label(self, attribute)
    }

    /// The bound model.
    pub fn model(&self) -> &Arc<dyn Model> {
        &self.model
    }

    /// The base name derived from the model's type name.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// The name prefix of every field, e.g. `order[items][1]`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The form action.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Whether this form was created by `fields_for`.
    pub fn is_nested(&self) -> bool {
        self.nested
    }
}

/// Writes the opening tag, so `format!("{form}")` starts a form.
impl fmt::Display for FormFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.open(&Attrs::new()) {
            Some(open) => f.write_str(&open),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for FormFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormFor")
            .field("model_name", &self.model_name)
            .field("name", &self.name)
            .field("action", &self.action)
            .field("nested", &self.nested)
            .finish_non_exhaustive()
    }
}
