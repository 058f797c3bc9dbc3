//! Tests for field naming, values, labels and nested forms.

mod common;
use common::*;

use oxide_form_for::{
    derive_base_name, Associated, Catalog, FormError, FormFor, FormOptions, Model, Nested,
    Record, Value,
};
use oxide_html::Attrs;
use serde::Serialize;

#[test]
fn test_top_level_field_name() {
    let form = FormFor::for_model(order());
    assert_eq!(form.name(), "order");
    assert_eq!(form.field_name("total"), "order[total]");
}

#[test]
fn test_collection_element_field_name() {
    let form = FormFor::for_model(order());
    let items = form
        .fields_for("items", None, FormOptions::new())
        .unwrap()
        .into_vec();
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].field_name("price"), "order[items][1][price]");
    assert_eq!(items[1].field_id("price"), "order_items_1_price");
    assert_eq!(items[1].model_name(), "line_item");
    assert_eq!(items[1].value("price").unwrap(), Value::Int(20));
}

#[test]
fn test_single_association_field_name() {
    let form = FormFor::for_model(order());
    let address = form
        .fields_for("address", None, FormOptions::new())
        .unwrap()
        .one()
        .unwrap();
    assert_eq!(address.field_name("street"), "order[address][street]");
    assert_eq!(address.model_name(), "shipping_address");
    assert!(address.is_nested());
}

#[test]
fn test_deeply_nested_field_name() {
    let record = Record::new("Order").with(
        "items",
        serde_json::json!([{ "options": [{ "size": "L" }] }]),
    );
    let form = FormFor::for_model(record);
    let item = form
        .fields_for("items", None, FormOptions::new())
        .unwrap()
        .into_vec()
        .remove(0);
    let option = item
        .fields_for("options", None, FormOptions::new())
        .unwrap()
        .into_vec()
        .remove(0);
    assert_eq!(option.field_name("size"), "order[items][0][options][0][size]");
    assert_eq!(
        option.text("size", &Attrs::new()).unwrap(),
        r#"<input type="text" id="order_items_0_options_0_size" name="order[items][0][options][0][size]" value="L">"#
    );
}

#[test]
fn test_empty_collection_builds_no_forms() {
    let nested = FormFor::create_fields_for(
        "items",
        Associated::Many(Vec::new()),
        Some("order"),
        FormOptions::new(),
    );
    assert!(nested.is_empty());
    assert!(matches!(nested, Nested::Many(forms) if forms.is_empty()));
}

#[test]
fn test_explicit_models_override_association_value() {
    let form = FormFor::for_model(order());
    let nested = form
        .fields_for(
            "items",
            Some(Associated::Many(vec![item("Z-9", 99)])),
            FormOptions::new(),
        )
        .unwrap()
        .into_vec();
    assert_eq!(nested.len(), 1);
    assert_eq!(nested[0].value("sku").unwrap(), Value::from("Z-9"));
}

#[test]
fn test_fields_for_rejects_plain_attributes() {
    let form = FormFor::for_model(order());
    let err = form
        .fields_for("total", None, FormOptions::new())
        .unwrap_err();
    assert!(matches!(err, FormError::NotAnAssociation { attribute } if attribute == "total"));
}

#[test]
fn test_fields_for_propagates_missing_attribute() {
    let form = FormFor::for_model(order());
    let err = form
        .fields_for("coupons", None, FormOptions::new())
        .unwrap_err();
    assert!(matches!(err, FormError::AttributeNotFound { .. }));
}

#[test]
fn test_base_name_strips_namespace() {
    assert_eq!(derive_base_name("Namespace\\ShippingAddress"), "shipping_address");
    assert_eq!(derive_base_name("shop::models::LineItem"), "line_item");
}

#[test]
fn test_humanized_labels() {
    let form = FormFor::for_model(order());
    assert_eq!(form.label_text("dueDate"), "Due Date");
    assert_eq!(form.label_text("contact_email"), "Contact Email");
}

#[test]
fn test_locale_labels_are_inherited_by_nested_forms() {
    let catalog = Catalog::new()
        .with("model.line_item.attributes.price", "Unit price")
        .with("model.attributes.sku", "SKU");
    let form = FormFor::new(order(), "/orders", FormOptions::new().locale(catalog));
    let items = form
        .fields_for("items", None, FormOptions::new())
        .unwrap()
        .into_vec();
    assert_eq!(items[0].label_text("price"), "Unit price");
    assert_eq!(items[0].label_text("sku"), "SKU");
    assert_eq!(form.label_text("price"), "Price");
}

#[test]
fn test_custom_getters() {
    let options = FormOptions::new()
        .label_getter(|form: &FormFor, attribute: &str| {
            format!("{}.{attribute}", form.model_name())
        })
        .value_getter(|model: &dyn Model, attribute: &str| -> oxide_form_for::Result<Value> {
            match model.value(attribute)? {
                Value::Int(cents) => Ok(Value::Text(format!("{}.{:02}", cents / 100, cents % 100))),
                other => Ok(other),
            }
        });
    let form = FormFor::new(order(), "", options);
    assert_eq!(form.label_text("total"), "order.total");
    assert!(form
        .text("total", &Attrs::new())
        .unwrap()
        .contains(r#"value="0.60""#));

    let items = form
        .fields_for("items", None, FormOptions::new())
        .unwrap()
        .into_vec();
    assert_eq!(items[2].value("price").unwrap(), Value::from("0.30"));
}

#[test]
fn test_dates_are_formatted_for_inputs() {
    let form = FormFor::for_model(order());
    assert!(form
        .text("dueDate", &Attrs::new())
        .unwrap()
        .contains(r#"value="2024-03-01""#));
}

#[test]
fn test_missing_attribute_is_not_translated() {
    let form = FormFor::for_model(order());
    let err = form.hidden("nope", &Attrs::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "attribute `nope` not found on model `Order`"
    );
}

#[test]
fn test_form_tags() {
    let form = FormFor::new(
        order(),
        "/orders",
        FormOptions::new().attr("enctype", "multipart/form-data"),
    );
    assert_eq!(
        form.to_string(),
        r#"<form action="/orders" method="post" enctype="multipart/form-data">"#
    );
    assert_eq!(form.close().as_deref(), Some("</form>"));
}

#[derive(Serialize)]
struct Customer {
    name: String,
    newsletter: bool,
    tags: Vec<String>,
}

#[test]
fn test_serializable_structs_as_models() {
    let customer = Customer {
        name: "Ada".to_string(),
        newsletter: true,
        tags: vec!["vip".to_string()],
    };
    let record = Record::from_serialize("Customer", &customer).unwrap();
    let form = FormFor::for_model(record);

    assert!(form
        .text("name", &Attrs::new())
        .unwrap()
        .contains(r#"value="Ada""#));
    let cb = form.check_box("newsletter", &Attrs::new(), true).unwrap();
    assert!(cb.input.contains(r#"checked="checked""#));

    let choices = oxide_html::choices([("vip", "VIP"), ("new", "New")]);
    let boxes = form.collection_check_boxes("tags", &choices, &Attrs::new()).unwrap();
    assert_eq!(boxes.matches(r#"checked="checked""#).count(), 1);
    assert!(boxes.contains(r#"name="customer[tags][]""#));
}
