//! Form input primitives.
//!
//! Every input receives an `id` derived from its name with [`auto_id`]
//! unless the caller supplies one (or suppresses it).

use std::fmt;

use crate::attrs::Attrs;
use crate::tag::{tag, Content};

/// A `(value, label)` pair used by selects, radio and checkbox collections.
pub type Choice = (String, String);

/// Builds a list of choices from any pairs of string-like values.
pub fn choices<V, L>(items: impl IntoIterator<Item = (V, L)>) -> Vec<Choice>
where
    V: Into<String>,
    L: Into<String>,
{
    items
        .into_iter()
        .map(|(v, l)| (v.into(), l.into()))
        .collect()
}

/// Derives an element id from a field name.
///
/// Brackets become underscores, so `order[items][1][price]` yields
/// `order_items_1_price`.
pub fn auto_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            ']' => {}
            c if c.is_ascii_alphanumeric() || c == '_' || c == '-' => id.push(c),
            _ => id.push('_'),
        }
    }
    id
}

/// Opening `<form>` tag. `method` defaults to `post`.
pub fn open(action: &str, attrs: &Attrs) -> String {
    let attrs = attrs
        .clone()
        .with_defaults(Attrs::new().with("action", action).with("method", "post"));
    tag("form", &attrs, Content::Void)
}

/// Closing `</form>` tag.
pub fn close() -> String {
    "</form>".to_string()
}

/// A label pointing at the input rendered for `for_name`.
pub fn label(text: &str, for_name: &str, attrs: &Attrs) -> String {
    let id = auto_id(for_name);
    let attrs = attrs.clone().with_defaults(
        Attrs::new()
            .with("id", format!("{id}_label"))
            .with("for", id),
    );
    tag("label", &attrs, Content::Text(text))
}

fn input(input_type: &str, name: &str, value: Option<&str>, attrs: &Attrs) -> String {
    let mut defaults = Attrs::new()
        .with("type", input_type)
        .with("id", auto_id(name))
        .with("name", name);
    if let Some(value) = value {
        defaults.set("value", value);
    }
    let attrs = attrs.clone().with_defaults(defaults);
    tag("input", &attrs, Content::Void)
}

/// A text input.
pub fn text(name: &str, value: Option<&str>, attrs: &Attrs) -> String {
    input("text", name, value, attrs)
}

/// A password input.
pub fn password(name: &str, value: Option<&str>, attrs: &Attrs) -> String {
    input("password", name, value, attrs)
}

/// A hidden input.
pub fn hidden(name: &str, value: Option<&str>, attrs: &Attrs) -> String {
    input("hidden", name, value, attrs)
}

/// A textarea holding `text`.
pub fn text_area(name: &str, text: Option<&str>, attrs: &Attrs) -> String {
    let attrs = attrs
        .clone()
        .with_defaults(Attrs::new().with("id", auto_id(name)).with("name", name));
    tag("textarea", &attrs, Content::Text(text.unwrap_or_default()))
}

/// A rendered checkbox together with its optional hidden companion.
///
/// The companion carries a `0` value so the field is submitted even when the
/// box is unchecked. Displaying a `CheckBox` writes the companion first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckBox {
    /// Hidden zero-value field, when requested.
    pub hidden: Option<String>,
    /// The checkbox input itself.
    pub input: String,
}

impl fmt::Display for CheckBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(hidden) = &self.hidden {
            f.write_str(hidden)?;
        }
        f.write_str(&self.input)
    }
}

/// A checkbox submitting `checked_value` when ticked.
pub fn check_box(
    name: &str,
    checked: bool,
    checked_value: &str,
    attrs: &Attrs,
    with_hidden: bool,
) -> CheckBox {
    let mut attrs = attrs.clone();
    if checked {
        attrs.set("checked", "checked");
    }
    let input = input("checkbox", name, Some(checked_value), &attrs);
    let hidden = with_hidden.then(|| {
        let attrs = Attrs::new()
            .with("type", "hidden")
            .with("name", name)
            .with("value", "0");
        tag("input", &attrs, Content::Void)
    });
    CheckBox { hidden, input }
}

/// A radio button. Its id includes the value so siblings stay unique.
pub fn radio(name: &str, value: &str, checked: bool, attrs: &Attrs) -> String {
    let mut attrs = attrs
        .clone()
        .with_defaults(Attrs::new().with("id", auto_id(&format!("{name}_{value}"))));
    if checked {
        attrs.set("checked", "checked");
    }
    input("radio", name, Some(value), &attrs)
}

/// One labelled checkbox per choice, submitted as `name[]`.
pub fn collection_check_boxes(
    name: &str,
    collection: &[Choice],
    selected: &[String],
    label_attrs: &Attrs,
) -> Vec<String> {
    let field_name = format!("{name}[]");
    collection
        .iter()
        .map(|(value, text)| {
            let id = auto_id(&format!("{name}_{value}"));
            let mut attrs = Attrs::new().with("id", id);
            if selected.iter().any(|s| s == value) {
                attrs.set("checked", "checked");
            }
            let input = input("checkbox", &field_name, Some(value), &attrs);
            labelled(&input, text, label_attrs)
        })
        .collect()
}

/// One labelled radio button per choice.
pub fn collection_radios(
    name: &str,
    collection: &[Choice],
    selected: Option<&str>,
    label_attrs: &Attrs,
) -> Vec<String> {
    collection
        .iter()
        .map(|(value, text)| {
            let input = radio(name, value, selected == Some(value.as_str()), &Attrs::new());
            labelled(&input, text, label_attrs)
        })
        .collect()
}

fn labelled(input: &str, text: &str, label_attrs: &Attrs) -> String {
    let content = format!("{input}{}", crate::escape::html_escape(text));
    tag("label", label_attrs, Content::Raw(&content))
}

/// A select box; options whose value is in `selected` are pre-selected.
pub fn select(name: &str, collection: &[Choice], selected: &[String], attrs: &Attrs) -> String {
    let options: String = collection
        .iter()
        .map(|(value, text)| {
            let mut option = Attrs::new().with("value", value.as_str());
            if selected.iter().any(|s| s == value) {
                option.set("selected", "selected");
            }
            tag("option", &option, Content::Text(text))
        })
        .collect();
    let attrs = attrs
        .clone()
        .with_defaults(Attrs::new().with("id", auto_id(name)).with("name", name));
    tag("select", &attrs, Content::Raw(&options))
}

/// A `<button type="button">` carrying the field name.
pub fn button(name: &str, text: &str, attrs: &Attrs) -> String {
    let attrs = attrs
        .clone()
        .with_defaults(Attrs::new().with("type", "button").with("name", name));
    tag("button", &attrs, Content::Text(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_id() {
        assert_eq!(auto_id("order[items][1][price]"), "order_items_1_price");
        assert_eq!(auto_id("transport[user_id]"), "transport_user_id");
        assert_eq!(auto_id("plain"), "plain");
    }

    #[test]
    fn test_open_and_close() {
        let html = open("/orders", &Attrs::new().with("class", "form-horizontal"));
        assert_eq!(
            html,
            r#"<form action="/orders" method="post" class="form-horizontal">"#
        );
        assert_eq!(close(), "</form>");
    }

    #[test]
    fn test_label() {
        let html = label("User", "transport[user_id]", &Attrs::new());
        assert_eq!(
            html,
            r#"<label id="transport_user_id_label" for="transport_user_id">User</label>"#
        );
    }

    #[test]
    fn test_label_without_for() {
        let html = label("Pick", "a[b]", &Attrs::new().without("for").without("id"));
        assert_eq!(html, "<label>Pick</label>");
    }

    #[test]
    fn test_text_input() {
        let html = text("order[total]", Some("12"), &Attrs::new().with("class", "span4"));
        assert_eq!(
            html,
            r#"<input type="text" id="order_total" name="order[total]" value="12" class="span4">"#
        );
    }

    #[test]
    fn test_password_without_value() {
        let html = password("user[password]", None, &Attrs::new());
        assert!(html.contains(r#"type="password""#));
        assert!(!html.contains("value="));
    }

    #[test]
    fn test_text_area() {
        let html = text_area("post[body]", Some("a < b"), &Attrs::new());
        assert_eq!(
            html,
            r#"<textarea id="post_body" name="post[body]">a &lt; b</textarea>"#
        );
    }

    #[test]
    fn test_check_box_with_hidden() {
        let cb = check_box("user[admin]", true, "1", &Attrs::new(), true);
        let hidden = cb.hidden.as_deref().unwrap();
        assert_eq!(hidden, r#"<input type="hidden" name="user[admin]" value="0">"#);
        assert!(cb.input.contains(r#"checked="checked""#));
        assert!(cb.to_string().starts_with(hidden));
    }

    #[test]
    fn test_check_box_without_hidden() {
        let cb = check_box("user[admin]", false, "1", &Attrs::new(), false);
        assert!(cb.hidden.is_none());
        assert!(!cb.input.contains("checked"));
    }

    #[test]
    fn test_radio_ids_are_unique() {
        let a = radio("user[role]", "admin", false, &Attrs::new());
        let b = radio("user[role]", "guest", true, &Attrs::new());
        assert!(a.contains(r#"id="user_role_admin""#));
        assert!(b.contains(r#"id="user_role_guest""#));
        assert!(b.contains("checked"));
    }

    #[test]
    fn test_collection_check_boxes() {
        let items = collection_check_boxes(
            "user[tags]",
            &choices([("1", "Red"), ("2", "Blue")]),
            &["2".to_string()],
            &Attrs::new().with("class", "checkbox"),
        );
        assert_eq!(items.len(), 2);
        assert!(items[0].starts_with(r#"<label class="checkbox">"#));
        assert!(items[0].contains(r#"name="user[tags][]""#));
        assert!(!items[0].contains("checked"));
        assert!(items[1].contains("checked"));
        assert!(items[1].ends_with("Blue</label>"));
    }

    #[test]
    fn test_collection_radios() {
        let items = collection_radios(
            "user[size]",
            &choices([("s", "Small"), ("l", "Large")]),
            Some("l"),
            &Attrs::new(),
        );
        assert!(!items[0].contains("checked"));
        assert!(items[1].contains("checked"));
    }

    #[test]
    fn test_select() {
        let html = select(
            "coffee[kind]",
            &choices([("b", "black"), ("w", "white")]),
            &["w".to_string()],
            &Attrs::new(),
        );
        assert!(html.starts_with(r#"<select id="coffee_kind" name="coffee[kind]">"#));
        assert!(html.contains(r#"<option value="b">black</option>"#));
        assert!(html.contains(r#"<option value="w" selected="selected">white</option>"#));
    }

    #[test]
    fn test_button() {
        let html = button("user[size]", "Big", &Attrs::new().with("data-value", "l"));
        assert_eq!(
            html,
            r#"<button type="button" name="user[size]" data-value="l">Big</button>"#
        );
    }
}
