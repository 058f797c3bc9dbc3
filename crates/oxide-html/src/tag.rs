//! Generic tag rendering.

use crate::attrs::{attributes, Attrs};
use crate::escape::html_escape;

/// Whether tag content is escaped before it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    /// No content: renders a void element such as `<input>`.
    Void,
    /// Text that is escaped.
    Text(&'a str),
    /// Markup written as-is.
    Raw(&'a str),
}

/// Renders a single tag.
///
/// ```rust
/// use oxide_html::{tag, Attrs, Content};
///
/// let html = tag("span", &Attrs::new().with("class", "add-on"), Content::Text("$"));
/// assert_eq!(html, r#"<span class="add-on">$</span>"#);
/// ```
pub fn tag(name: &str, attrs: &Attrs, content: Content<'_>) -> String {
    let attrs = attributes(attrs);
    match content {
        Content::Void => format!("<{name}{attrs}>"),
        Content::Text(text) => format!("<{name}{attrs}>{}</{name}>", html_escape(text)),
        Content::Raw(html) => format!("<{name}{attrs}>{html}</{name}>"),
    }
}
