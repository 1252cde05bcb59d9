//! # modelform
//!
//! Generates instantiable form schemas from model schemas, so an input form
//! always tracks the shape of the data model behind it.
//!
//! Given a [`ModelSchema`](schema::ModelSchema) the generator selects which
//! fields to expose (`only`/`exclude`), converts each descriptor into an
//! input field through a registry of converter functions, merges any
//! per-field overrides and assembles the result into a fresh
//! [`FormSchema`]. The schema is a plain value that can be instantiated
//! empty, bound to submitted data or pre-filled from a model object.
//!
//! ## Generating a form
//!
//! ```rust
//! use modelform::schema::{FieldDescriptor, FieldKind, ModelSchema};
//! use modelform::{model_form, FormOptions};
//!
//! let book = ModelSchema::new("Book")
//!     .field(FieldDescriptor::new("id", FieldKind::Integer).required())
//!     .field(FieldDescriptor::new("title", FieldKind::Char { max_length: 255 }).required())
//!     .field(FieldDescriptor::new("content", FieldKind::Text));
//!
//! let schema = model_form(&book, &FormOptions::new().exclude(&["id"]));
//! assert_eq!(schema.name(), "BookForm");
//! assert_eq!(schema.field_names(), vec!["title", "content"]);
//! ```
//!
//! ## Binding and validating
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use modelform::schema::{FieldDescriptor, FieldKind, ModelSchema};
//! use modelform::{model_form, FormOptions};
//!
//! let book = ModelSchema::new("Book")
//!     .field(FieldDescriptor::new("title", FieldKind::Char { max_length: 255 }).required());
//! let schema = model_form(&book, &FormOptions::new());
//!
//! let data = HashMap::from([("title".to_string(), "Dune".to_string())]);
//! let mut form = schema.bind(&data);
//! assert!(form.validate());
//!
//! let mut empty = schema.empty();
//! assert!(!empty.validate());
//! ```
//!
//! ## Overriding construction arguments
//!
//! ```rust
//! use modelform::schema::{FieldDescriptor, FieldKind, ModelSchema};
//! use modelform::{model_form, FieldArgs, FormOptions};
//!
//! let book = ModelSchema::new("Book")
//!     .field(FieldDescriptor::new("title", FieldKind::Char { max_length: 255 }));
//!
//! let options = FormOptions::new()
//!     .only(&["title"])
//!     .field_args("title", FieldArgs::new().label("Your new label"));
//! let schema = model_form(&book, &options);
//! assert_eq!(schema.field("title").unwrap().label, "Your new label");
//! ```

mod assemble;
mod convert;
mod options;
mod select;

pub use assemble::{model_fields, model_form};
pub use convert::{ConstructArgs, ConverterFn, ModelConverter};
pub use options::{FieldArgs, FormOptions};
pub use select::select_field_names;

pub use modelform_forms as forms;
pub use modelform_schema as schema;

pub use modelform_forms::{FormField, FormInstance, FormSchema, InputKind, ValidationErrors};
pub use modelform_schema::{FieldDescriptor, FieldKind, FieldTag, FieldValue, ModelSchema};
