//! # oxide-html
//!
//! Low-level HTML rendering used by the form helpers.
//!
//! This crate provides:
//! - An insertion-ordered attribute map with escaping ([`Attrs`])
//! - A generic [`tag`] renderer
//! - Form input primitives keyed by field name ([`form`])
//!
//! ```rust
//! use oxide_html::{form, Attrs};
//!
//! let html = form::text("order[total]", Some("12.50"), &Attrs::new());
//! assert_eq!(
//!     html,
//!     r#"<input type="text" id="order_total" name="order[total]" value="12.50">"#,
//! );
//! ```

mod attrs;
mod escape;
pub mod form;
mod tag;

pub use attrs::{attributes, Attrs};
pub use escape::html_escape;
pub use form::{auto_id, choices, CheckBox, Choice};
pub use tag::{tag, Content};
