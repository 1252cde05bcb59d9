//! Book Form Example
//!
//! Generates a form from a Book model schema, binds submitted data to it
//! and validates, then copies the values back onto a model object.
//! Run with: cargo run --example book_form

use std::collections::HashMap;

use modelform::schema::ModelObject;
use modelform::{
    model_form, FieldArgs, FieldDescriptor, FieldKind, FieldValue, FormOptions, ModelSchema,
};

/// The application's model instance type.
#[derive(Debug, Default)]
struct Book {
    id: Option<i64>,
    title: Option<String>,
    content: Option<String>,
    pages: Option<i64>,
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
            "pages" => Some(self.pages.map_or(FieldValue::Null, FieldValue::Integer)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) {
        match (name, value) {
            ("id", FieldValue::Integer(v)) => self.id = Some(v),
            ("title", FieldValue::String(v)) => self.title = Some(v),
            ("content", FieldValue::String(v)) => self.content = Some(v),
            ("pages", FieldValue::Integer(v)) => self.pages = Some(v),
            _ => {}
        }
    }
}

fn main() {
    // The model layer describes its fields once; the form tracks it.
    let book = ModelSchema::new("Book")
        .field(FieldDescriptor::new("id", FieldKind::Integer).required())
        .field(FieldDescriptor::new("title", FieldKind::Char { max_length: 255 }).required())
        .field(FieldDescriptor::new("content", FieldKind::Text))
        .field(FieldDescriptor::new("created", FieldKind::DateTime))
        .field(FieldDescriptor::new("pages", FieldKind::Integer));

    // Create/edit flows never expose the primary key or the timestamp.
    let options = FormOptions::new()
        .exclude(&["id", "created"])
        .field_args("content", FieldArgs::new().label("Body"));
    let schema = model_form(&book, &options);

    println!("generated {} with fields:", schema.name());
    for field in schema.fields() {
        println!(
            "  {:<10} {:?} label={:?} validators={}",
            field.name,
            field.kind,
            field.label,
            field.validators.len()
        );
    }

    // A submission that fails validation.
    let mut invalid = schema.bind(&HashMap::from([(
        "pages".to_string(),
        "lots".to_string(),
    )]));
    if !invalid.validate() {
        println!("\ninvalid submission:");
        for (field, message) in invalid.errors().all_errors() {
            println!("  {field}: {message}");
        }
    }

    // A submission that passes, copied back onto a model instance.
    let mut form = schema.bind(&HashMap::from([
        ("title".to_string(), "Dune".to_string()),
        ("content".to_string(), "A desert planet.".to_string()),
        ("pages".to_string(), "412".to_string()),
    ]));
    if form.validate() {
        let mut saved = Book::default();
        form.populate_object(&mut saved);
        println!("\nsaved: {saved:?}");
    }
}
