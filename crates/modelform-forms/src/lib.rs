//! # modelform-forms
//!
//! The input-field library behind generated forms.
//!
//! This crate provides:
//! - [`FormField`]: one input field's spec (label, kind, default, validators)
//! - [`FormSchema`]: an ordered, instantiable set of form fields
//! - [`FormInstance`]: one instantiation of a schema, bound or empty
//! - [`validation`]: reusable field validators
//! - [`ValidationErrors`]: per-field validation error collection
//!
//! A [`FormSchema`] is a plain value; it can be built by hand or produced by
//! the `modelform` generator. Every instantiation is independent.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use modelform_forms::validation::{MaxLengthValidator, RequiredValidator};
//! use modelform_forms::{FormField, FormSchema, InputKind};
//!
//! let schema = FormSchema::new(
//!     "BookForm",
//!     vec![
//!         FormField::new("title", "Title", InputKind::Text)
//!             .validator(RequiredValidator::new())
//!             .validator(MaxLengthValidator::new(255)),
//!         FormField::new("content", "Content", InputKind::TextArea),
//!     ],
//! );
//!
//! let data = HashMap::from([("title".to_string(), "Dune".to_string())]);
//! let mut form = schema.bind(&data);
//! assert!(form.validate());
//! ```

mod error;
mod field;
mod form;
pub mod validation;

pub use error::{FormError, Result, ValidationErrors};
pub use field::{FormField, InputKind};
pub use form::{FormInstance, FormSchema};
