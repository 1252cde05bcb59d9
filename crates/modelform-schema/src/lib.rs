//! # modelform-schema
//!
//! Model schema descriptors: the read-only metadata the form generator
//! consumes.
//!
//! A [`ModelSchema`] is an ordered collection of [`FieldDescriptor`]s plus a
//! display name. Each descriptor carries a [`FieldKind`] (a closed set of
//! supported field kinds), a required flag, an optional default and optional
//! help text. The schema layer owns none of the form logic; it only
//! describes what a data model looks like.
//!
//! ## Example
//!
//! ```rust
//! use modelform_schema::{FieldDescriptor, FieldKind, ModelSchema};
//!
//! let book = ModelSchema::new("Book")
//!     .field(FieldDescriptor::new("id", FieldKind::Integer).required())
//!     .field(FieldDescriptor::new("title", FieldKind::Char { max_length: 255 }).required())
//!     .field(FieldDescriptor::new("content", FieldKind::Text));
//!
//! assert_eq!(book.field_names(), vec!["id", "title", "content"]);
//! assert!(book.descriptor("title").is_some());
//! ```

mod descriptor;
mod kind;
mod model;
mod value;

pub use descriptor::FieldDescriptor;
pub use kind::{FieldKind, FieldTag};
pub use model::{ModelObject, ModelSchema};
pub use value::FieldValue;
