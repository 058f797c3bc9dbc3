//! Control-group rows.

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Span, P};
use oxide_html::{tag, Attrs, Content};

/// Help text with optional extra attributes for its element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The help text. Empty text renders nothing.
    pub text: String,
    /// Extra attributes; a `class` here replaces the default one.
    pub attributes: Attrs,
}

impl Help {
    /// Creates help text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: Attrs::new(),
        }
    }

    /// Builder method to set an attribute on the help element.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    fn render(&self, element: &str, class: &str) -> String {
        if self.text.is_empty() {
            return String::new();
        }
        let attrs = self
            .attributes
            .clone()
            .with_defaults(Attrs::new().with("class", class));
        tag(element, &attrs, Content::Text(&self.text))
    }

    pub(crate) fn inline(&self) -> String {
        self.render("span", "help-inline")
    }

    pub(crate) fn block(&self) -> String {
        self.render("p", "help-block")
    }
}

impl From<&str> for Help {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Help {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Decorations applied around the controls of a row.
#[derive(Debug, Clone, Default)]
pub struct RowOptions {
    /// Extra classes for the control group.
    pub class: Vec<String>,
    /// Label text override, used by the control helpers.
    pub label: Option<String>,
    /// Add-on text shown before the control.
    pub prepend: Option<String>,
    /// Add-on text shown after the control.
    pub append: Option<String>,
    /// Raw markup placed right after the control.
    pub content_after: Option<String>,
    /// Inline help shown next to the control.
    pub help: Option<Help>,
    /// Error text. Marks the group with the `error` class.
    pub errors: Option<String>,
    /// Block help shown below everything else.
    pub help_block: Option<Help>,
    /// Other attributes of the control group element.
    pub attributes: Attrs,
}

impl RowOptions {
    /// Creates empty row options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class to the control group.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class.push(class.into());
        self
    }

    /// Overrides the label text.
    #[must_use]
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(text.into());
        self
    }

    /// Sets the prepended add-on.
    #[must_use]
    pub fn prepend(mut self, text: impl Into<String>) -> Self {
        self.prepend = Some(text.into());
        self
    }

    /// Sets the appended add-on.
    #[must_use]
    pub fn append(mut self, text: impl Into<String>) -> Self {
        self.append = Some(text.into());
        self
    }

    /// Sets raw markup placed after the control.
    #[must_use]
    pub fn content_after(mut self, html: impl Into<String>) -> Self {
        self.content_after = Some(html.into());
        self
    }

    /// Sets inline help.
    #[must_use]
    pub fn help(mut self, help: impl Into<Help>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Sets the error text.
    #[must_use]
    pub fn errors(mut self, text: impl Into<String>) -> Self {
        self.errors = Some(text.into());
        self
    }

    /// Sets block help.
    #[must_use]
    pub fn help_block(mut self, help: impl Into<Help>) -> Self {
        self.help_block = Some(help.into());
        self
    }

    /// Sets an attribute on the control group element.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }
}

/// Assembles a control group around already rendered controls.
pub(crate) fn render(label: &str, controls: &str, options: RowOptions) -> String {
    let RowOptions {
        class,
        prepend,
        append,
        content_after,
        help,
        errors,
        help_block,
        mut attributes,
        ..
    } = options;

    let mut classes = vec!["control-group".to_string()];
    classes.extend(class.into_iter().filter(|c| !c.is_empty()));
    if let Some(extra) = attributes.take("class") {
        classes.push(extra);
    }

    let mut controls = prepend_and_append(
        controls,
        prepend.as_deref().filter(|s| !s.is_empty()),
        append.as_deref().filter(|s| !s.is_empty()),
    );

    if let Some(html) = content_after {
        controls.push_str(&html);
    }

    if let Some(help) = help {
        controls.push_str(&help.inline());
    }

    if let Some(errors) = errors.filter(|e| !e.is_empty()) {
        controls.push_str(&error_block(&errors));
        classes.push("error".to_string());
    }

    if let Some(help) = help_block {
        controls.push_str(&help.block());
    }

    let mut group = Attrs::new().with("class", classes.join(" "));
    group.merge(&attributes);

    let controls_div = Element::<Div>::new()
        .class("controls")
        .raw(&controls)
        .render();
    tag("div", &group, Content::Raw(&format!("{label}{controls_div}")))
}

fn error_block(errors: &str) -> String {
    Element::<P>::new().class("help-block").text(errors).render()
}

fn prepend_and_append(input: &str, prepend: Option<&str>, append: Option<&str>) -> String {
    if prepend.is_none() && append.is_none() {
        return input.to_string();
    }

    let mut wrapper_class = Vec::new();
    let mut output = String::new();

    if let Some(text) = prepend {
        output.push_str(&add_on(text));
        wrapper_class.push("input-prepend");
    }

    output.push_str(input);

    if let Some(text) = append {
        output.push_str(&add_on(text));
        wrapper_class.push("input-append");
    }

    Element::<Div>::new()
        .class(wrapper_class.join(" "))
        .raw(&output)
        .render()
}

fn add_on(text: &str) -> String {
    Element::<Span>::new().class("add-on").text(text).render()
}
