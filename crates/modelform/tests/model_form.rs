//! End-to-end tests for form generation from a model schema.

use std::collections::HashMap;
use std::sync::Arc;

use modelform::forms::validation::MinLengthValidator;
use modelform::schema::ModelObject;
use modelform::{
    model_form, FieldArgs, FieldDescriptor, FieldKind, FieldValue, FormOptions, ModelConverter,
    ModelSchema,
};

fn book_model() -> ModelSchema {
    ModelSchema::new("Book")
        .field(FieldDescriptor::new("id", FieldKind::Integer).required())
        .field(FieldDescriptor::new("title", FieldKind::Char { max_length: 255 }).required())
        .field(FieldDescriptor::new("content", FieldKind::Text))
        .field(FieldDescriptor::new("created", FieldKind::DateTime))
        .field(FieldDescriptor::new("released", FieldKind::Boolean))
        .field(FieldDescriptor::new("price", FieldKind::Float))
}

fn data(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[derive(Default)]
struct Book {
    id: Option<i64>,
    title: Option<String>,
    content: Option<String>,
    released: bool,
    price: Option<f64>,
}

impl ModelObject for Book {
    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.map_or(FieldValue::Null, FieldValue::Integer)),
            "title" => Some(
                self.title
                    .clone()
                    .map_or(FieldValue::Null, FieldValue::String),
            ),
            "content" => Some(
                self.content
                    .clone()
                    .map_or(FieldValue::Null, FieldValue::String),
            ),
            "released" => Some(FieldValue::Boolean(self.released)),
            "price" => Some(self.price.map_or(FieldValue::Null, FieldValue::Float)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) {
        match (name, value) {
            ("id", FieldValue::Integer(v)) => self.id = Some(v),
            ("title", FieldValue::String(v)) => self.title = Some(v),
            ("content", FieldValue::String(v)) => self.content = Some(v),
            ("released", FieldValue::Boolean(v)) => self.released = v,
            ("price", FieldValue::Float(v)) => self.price = Some(v),
            _ => {}
        }
    }
}

#[test]
fn full_form_keeps_model_field_order() {
    let schema = model_form(&book_model(), &FormOptions::new());
    assert_eq!(
        schema.field_names(),
        vec!["id", "title", "content", "created", "released", "price"]
    );
}

#[test]
fn unbound_form_data_is_defaults() {
    let schema = model_form(&book_model(), &FormOptions::new());
    let form = schema.empty();
    let values = form.data();

    assert_eq!(values["id"], FieldValue::Null);
    assert_eq!(values["title"], FieldValue::Null);
    assert_eq!(values["content"], FieldValue::Null);
    assert_eq!(values["created"], FieldValue::Null);
    assert_eq!(values["released"], FieldValue::Boolean(false));
    assert_eq!(values["price"], FieldValue::Null);
}

#[test]
fn exclude_removes_fields_in_model_order() {
    let options = FormOptions::new().exclude(&["id", "content"]);
    let schema = model_form(&book_model(), &options);
    assert_eq!(
        schema.field_names(),
        vec!["title", "created", "released", "price"]
    );
}

#[test]
fn only_restricts_and_orders_fields() {
    let options = FormOptions::new().only(&["content", "title"]);
    let schema = model_form(&book_model(), &options);
    assert_eq!(schema.field_names(), vec!["content", "title"]);
}

#[test]
fn only_wins_over_exclude() {
    let options = FormOptions::new().only(&["title"]).exclude(&["title"]);
    let schema = model_form(&book_model(), &options);
    assert_eq!(schema.field_names(), vec!["title"]);
}

#[test]
fn empty_only_selects_no_fields() {
    let options = FormOptions::new().only(&[]);
    let schema = model_form(&book_model(), &options);
    assert!(schema.is_empty());
    assert!(schema.skipped().is_empty());
}

#[test]
fn unknown_only_names_are_dropped() {
    let options = FormOptions::new().only(&["title", "publisher"]);
    let schema = model_form(&book_model(), &options);
    assert_eq!(schema.field_names(), vec!["title"]);
}

#[test]
fn label_override_wins() {
    let options = FormOptions::new()
        .only(&["title"])
        .field_args("title", FieldArgs::new().label("Your new label"));
    let schema = model_form(&book_model(), &options);

    let field = schema.field("title").unwrap();
    assert_eq!(field.label, "Your new label");
    assert_ne!(field.label, "Title");
}

#[test]
fn required_validator_survives_validator_override() {
    let options = FormOptions::new().only(&["title"]).field_args(
        "title",
        FieldArgs::new().validators(vec![Arc::new(MinLengthValidator::new(2))]),
    );
    let schema = model_form(&book_model(), &options);

    // Override list plus the re-appended presence validator, plus the
    // converter's max-length validator.
    assert_eq!(schema.field("title").unwrap().validators.len(), 3);

    let mut form = schema.empty();
    assert!(!form.validate());
    assert!(form
        .errors()
        .get("title")
        .unwrap()
        .iter()
        .any(|m| m == "This field is required."));
}

#[test]
fn char_field_enforces_declared_max_length() {
    let schema = model_form(&book_model(), &FormOptions::new().only(&["title"]));
    let long_title = "x".repeat(256);
    let mut form = schema.bind(&data(&[("title", long_title.as_str())]));
    assert!(!form.validate());

    let mut ok = schema.bind(&data(&[("title", "A reasonable title")]));
    assert!(ok.validate());
}

#[test]
fn uuid_field_enforces_fixed_max_length() {
    let model = ModelSchema::new("Token")
        .field(FieldDescriptor::new("key", FieldKind::Uuid).required());
    let schema = model_form(&model, &FormOptions::new());

    let canonical = "550e8400-e29b-41d4-a716-446655440000";
    assert_eq!(canonical.len(), 36);
    let mut ok = schema.bind(&data(&[("key", canonical)]));
    assert!(ok.validate());

    let too_long = format!("{canonical}0");
    let mut bad = schema.bind(&data(&[("key", too_long.as_str())]));
    assert!(!bad.validate());
}

#[test]
fn empty_submission_fails_on_required_fields() {
    let schema = model_form(&book_model(), &FormOptions::new());
    let mut form = schema.empty();

    assert!(!form.validate());
    assert!(form.errors().get("id").is_some());
    assert!(form.errors().get("title").is_some());
    assert!(form.errors().get("content").is_none());
    assert!(form.errors().get("released").is_none());
}

#[test]
fn bound_form_validates_and_exposes_data() {
    let options = FormOptions::new().exclude(&["id", "created"]);
    let schema = model_form(&book_model(), &options);

    let mut form = schema.bind(&data(&[
        ("title", "Book1"),
        ("content", "Content1"),
        ("released", "true"),
        ("price", "10.5"),
    ]));
    assert!(form.validate());

    let values = form.data();
    assert_eq!(values["title"], FieldValue::from("Book1"));
    assert_eq!(values["content"], FieldValue::from("Content1"));
    assert_eq!(values["released"], FieldValue::Boolean(true));
    assert_eq!(values["price"], FieldValue::Float(10.5));
}

#[test]
fn example_scenario_exclude_id() {
    let model = ModelSchema::new("Book")
        .field(FieldDescriptor::new("id", FieldKind::Integer).required())
        .field(FieldDescriptor::new("title", FieldKind::Char { max_length: 255 }).required())
        .field(FieldDescriptor::new("content", FieldKind::Text));

    let schema = model_form(&model, &FormOptions::new().exclude(&["id"]));
    assert_eq!(schema.field_names(), vec!["title", "content"]);

    let mut form = schema.bind(&data(&[("title", "A"), ("content", "B")]));
    assert!(form.validate());

    let values = form.data();
    assert_eq!(values.len(), 2);
    assert_eq!(values["title"], FieldValue::from("A"));
    assert_eq!(values["content"], FieldValue::from("B"));
}

#[test]
fn non_numeric_integer_input_fails_validation() {
    let schema = model_form(&book_model(), &FormOptions::new().only(&["id"]));
    let mut form = schema.bind(&data(&[("id", "abc")]));
    assert!(!form.validate());
    assert_eq!(
        form.errors().get("id").map(|v| v[0].as_str()),
        Some("Not a valid integer value.")
    );
}

#[test]
fn bad_datetime_input_fails_validation() {
    let schema = model_form(&book_model(), &FormOptions::new().only(&["created"]));
    let mut bad = schema.bind(&data(&[("created", "soon")]));
    assert!(!bad.validate());

    let mut ok = schema.bind(&data(&[("created", "2024-01-15 10:30:00")]));
    assert!(ok.validate());
}

#[test]
fn repeated_generation_yields_independent_forms() {
    let model = book_model();
    let options = FormOptions::new().exclude(&["id"]);

    let first = model_form(&model, &options);
    let second = model_form(&model, &options);
    assert_eq!(first.field_names(), second.field_names());
    assert_eq!(first.name(), second.name());

    let mut a = first.empty();
    a.set("title", "Dune");
    let b = second.empty();
    assert!(b.raw_value("title").is_none());
}

#[test]
fn custom_empty_registry_reports_skipped_fields() {
    let options = FormOptions::new().converter(ModelConverter::with_converters(HashMap::new()));
    let schema = model_form(&book_model(), &options);

    assert!(schema.is_empty());
    assert_eq!(
        schema.skipped(),
        ["id", "title", "content", "created", "released", "price"]
    );
}

#[test]
fn prefill_from_object() {
    let book = Book {
        id: Some(1),
        title: Some("Dune".to_string()),
        content: Some("Spice".to_string()),
        released: true,
        price: Some(10.5),
    };

    let options = FormOptions::new().exclude(&["created"]);
    let schema = model_form(&book_model(), &options);
    let mut form = schema.from_object(&book);

    assert_eq!(form.raw_value("title"), Some("Dune"));
    assert_eq!(form.raw_value("price"), Some("10.5"));
    assert!(form.validate());
    assert_eq!(form.data()["released"], FieldValue::Boolean(true));
}

#[test]
fn populate_object_writes_validated_values_back() {
    let options = FormOptions::new().exclude(&["id", "created"]);
    let schema = model_form(&book_model(), &options);

    let mut form = schema.bind(&data(&[
        ("title", "Book1"),
        ("content", "Content1"),
        ("released", "on"),
        ("price", "12.0"),
    ]));
    assert!(form.validate());

    let mut book = Book::default();
    form.populate_object(&mut book);

    assert_eq!(book.title.as_deref(), Some("Book1"));
    assert_eq!(book.content.as_deref(), Some("Content1"));
    assert!(book.released);
    assert_eq!(book.price, Some(12.0));
    assert_eq!(book.id, None);
}

#[test]
fn help_text_flows_from_descriptor_and_override() {
    let model = ModelSchema::new("Book").field(
        FieldDescriptor::new("title", FieldKind::Char { max_length: 255 })
            .help_text("The book title"),
    );

    let derived = model_form(&model, &FormOptions::new());
    assert_eq!(
        derived.field("title").unwrap().help_text.as_deref(),
        Some("The book title")
    );

    let options =
        FormOptions::new().field_args("title", FieldArgs::new().help_text("Pick something catchy"));
    let overridden = model_form(&model, &options);
    assert_eq!(
        overridden.field("title").unwrap().help_text.as_deref(),
        Some("Pick something catchy")
    );
}

#[test]
fn decimal_and_float_collapse_to_float_input() {
    let model = ModelSchema::new("Invoice")
        .field(FieldDescriptor::new(
            "total",
            FieldKind::Decimal {
                max_digits: 10,
                decimal_places: 2,
            },
        ))
        .field(FieldDescriptor::new("rate", FieldKind::Float));

    let schema = model_form(&model, &FormOptions::new());
    assert_eq!(
        schema.field("total").unwrap().kind,
        modelform::InputKind::Float
    );
    assert_eq!(
        schema.field("rate").unwrap().kind,
        modelform::InputKind::Float
    );
}
