//! Field naming helpers.

use std::sync::LazyLock;

use regex::Regex;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel case boundary pattern"));

/// Derives the default form name from a model's type name.
///
/// Generic arguments and the namespace prefix (`::` or `\` separated) are
/// dropped, then camel case becomes snake case.
///
/// ```rust
/// use oxide_form_for::derive_base_name;
///
/// assert_eq!(derive_base_name("Namespace\\ShippingAddress"), "shipping_address");
/// assert_eq!(derive_base_name("shop::models::LineItem"), "line_item");
/// ```
pub fn derive_base_name(type_name: &str) -> String {
    let name = type_name.split('<').next().unwrap_or(type_name);
    let name = name
        .rsplit(['\\', ':'])
        .find(|segment| !segment.is_empty())
        .unwrap_or(name);
    CAMEL_BOUNDARY
        .replace_all(name, "${1}_${2}")
        .to_lowercase()
}

/// Turns an attribute name into label text.
///
/// Words are split at camel case boundaries, underscores and hyphens, and the
/// first letter of each word is upper-cased.
///
/// ```rust
/// use oxide_form_for::humanize;
///
/// assert_eq!(humanize("dueDate"), "Due Date");
/// assert_eq!(humanize("contact_email"), "Contact Email");
/// ```
pub fn humanize(attribute: &str) -> String {
    let spaced = CAMEL_BOUNDARY
        .replace_all(attribute, "${1} ${2}")
        .replace(['_', '-'], " ");

    let mut out = String::with_capacity(spaced.len());
    let mut word_start = true;
    for c in spaced.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = c.is_whitespace();
    }
    out
}
