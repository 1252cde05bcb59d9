//! Form schemas and their instances.

use std::collections::HashMap;
use std::sync::Arc;

use modelform_schema::{FieldValue, ModelObject};

use crate::error::{FormError, Result, ValidationErrors};
use crate::field::{FormField, InputKind};

/// An ordered, instantiable set of form fields.
///
/// A schema is a plain first-class value: building one allocates nothing
/// global and two schemas built from the same inputs are fully independent.
/// Instantiation (empty, bound or pre-filled from an object) is cheap; the
/// field list is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct FormSchema {
    name: String,
    fields: Arc<Vec<FormField>>,
    skipped: Vec<String>,
}

impl FormSchema {
    /// Creates a schema from a name and an ordered field list.
    pub fn new(name: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            name: name.into(),
            fields: Arc::new(fields),
            skipped: Vec::new(),
        }
    }

    /// Records the model field names that produced no form field.
    #[must_use]
    pub fn with_skipped(mut self, names: Vec<String>) -> Self {
        self.skipped = names;
        self
    }

    /// Returns the schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fields in order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Returns the field names in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Returns the named field, if present.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the model field names that were dropped during generation
    /// because no converter was registered for their kind.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Creates an instance with no bound data.
    pub fn empty(&self) -> FormInstance {
        FormInstance::new(self.clone(), HashMap::new())
    }

    /// Creates an instance bound to submitted key/value data.
    ///
    /// Keys that match no field are ignored.
    pub fn bind(&self, data: &HashMap<String, String>) -> FormInstance {
        let values = self
            .fields
            .iter()
            .filter_map(|f| data.get(&f.name).map(|v| (f.name.clone(), v.clone())))
            .collect();
        FormInstance::new(self.clone(), values)
    }

    /// Creates an instance pre-filled from an existing model object.
    pub fn from_object(&self, obj: &dyn ModelObject) -> FormInstance {
        let mut values = HashMap::new();
        for field in self.fields.iter() {
            if let Some(value) = obj.get_field(&field.name) {
                if !value.is_null() {
                    values.insert(field.name.clone(), value.to_string());
                }
            }
        }
        FormInstance::new(self.clone(), values)
    }
}

/// One instantiation of a [`FormSchema`].
///
/// Holds the raw string values and, after [`validate`](Self::validate), the
/// per-field errors. Instances are stateless between each other: mutating
/// one never affects another, even from the same schema.
#[derive(Debug, Clone)]
pub struct FormInstance {
    schema: FormSchema,
    values: HashMap<String, String>,
    errors: ValidationErrors,
}

impl FormInstance {
    fn new(schema: FormSchema, values: HashMap<String, String>) -> Self {
        Self {
            schema,
            values,
            errors: ValidationErrors::new(),
        }
    }

    /// Returns the schema this instance was created from.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Returns the raw string value bound for a field, if any.
    pub fn raw_value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Sets the raw value for a field.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Runs every field's validators plus the kind coercion check.
    ///
    /// Returns whether the instance is valid; errors are available through
    /// [`errors`](Self::errors) afterwards. A missing field validates as
    /// the empty string, so required fields fail on absent data.
    pub fn validate(&mut self) -> bool {
        let mut errors = ValidationErrors::new();

        for field in self.schema.fields() {
            let raw = self
                .values
                .get(&field.name)
                .map(String::as_str)
                .unwrap_or("");

            for validator in &field.validators {
                if let Err(message) = validator.validate(raw) {
                    errors.add(&field.name, message);
                }
            }

            // Empty optional input is absence, not a malformed value.
            if !raw.trim().is_empty() {
                if let Err(message) = field.kind.coerce(raw) {
                    errors.add(&field.name, message);
                }
            }
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Returns the errors collected by the last [`validate`](Self::validate).
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns the effective typed value of every field.
    ///
    /// A bound value is coerced per the field's kind; an unbound field falls
    /// back to its default, a checkbox to `false`, anything else to `Null`.
    /// Bound values that fail coercion come back as `Null`; `validate`
    /// reports those.
    pub fn data(&self) -> HashMap<String, FieldValue> {
        let mut out = HashMap::new();
        for field in self.schema.fields() {
            let value = match self.values.get(&field.name) {
                Some(raw) => field.kind.coerce(raw).unwrap_or(FieldValue::Null),
                None if field.kind == InputKind::Checkbox => FieldValue::Boolean(false),
                None => field.default.clone().unwrap_or(FieldValue::Null),
            };
            out.insert(field.name.clone(), value);
        }
        out
    }

    /// Validates and returns the typed data, or the collected errors.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Validation`] when any field fails validation.
    pub fn try_data(&mut self) -> Result<HashMap<String, FieldValue>> {
        if self.validate() {
            Ok(self.data())
        } else {
            Err(FormError::Validation(self.errors.clone()))
        }
    }

    /// Copies every field's effective value onto an existing model object.
    pub fn populate_object(&self, obj: &mut dyn ModelObject) {
        for (name, value) in self.data() {
            obj.set_field(&name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{MaxLengthValidator, RequiredValidator};

    fn book_schema() -> FormSchema {
        FormSchema::new(
            "BookForm",
            vec![
                FormField::new("title", "Title", InputKind::Text)
                    .validator(RequiredValidator::new())
                    .validator(MaxLengthValidator::new(10)),
                FormField::new("content", "Content", InputKind::TextArea),
                FormField::new("released", "Released", InputKind::Checkbox),
                FormField::new("price", "Price", InputKind::Float),
            ],
        )
    }

    #[test]
    fn test_empty_instance_fails_required() {
        let mut form = book_schema().empty();
        assert!(!form.validate());
        assert!(form.errors().get("title").is_some());
        assert!(form.errors().get("content").is_none());
    }

    #[test]
    fn test_bound_instance_validates() {
        let data = HashMap::from([
            ("title".to_string(), "Dune".to_string()),
            ("content".to_string(), "Spice".to_string()),
            ("released".to_string(), "on".to_string()),
            ("price".to_string(), "10.5".to_string()),
        ]);
        let mut form = book_schema().bind(&data);
        assert!(form.validate());

        let data = form.data();
        assert_eq!(data["title"], FieldValue::from("Dune"));
        assert_eq!(data["released"], FieldValue::Boolean(true));
        assert_eq!(data["price"], FieldValue::Float(10.5));
    }

    #[test]
    fn test_bind_ignores_unknown_keys() {
        let data = HashMap::from([
            ("title".to_string(), "Dune".to_string()),
            ("ghost".to_string(), "boo".to_string()),
        ]);
        let form = book_schema().bind(&data);
        assert_eq!(form.raw_value("title"), Some("Dune"));
        assert!(form.raw_value("ghost").is_none());
    }

    #[test]
    fn test_coercion_failure_is_a_validation_error() {
        let data = HashMap::from([
            ("title".to_string(), "Dune".to_string()),
            ("price".to_string(), "ten".to_string()),
        ]);
        let mut form = book_schema().bind(&data);
        assert!(!form.validate());
        assert_eq!(
            form.errors().get("price").map(|v| v[0].as_str()),
            Some("Not a valid float value.")
        );
    }

    #[test]
    fn test_unbound_data_uses_defaults() {
        let schema = FormSchema::new(
            "NoteForm",
            vec![
                FormField::new("title", "Title", InputKind::Text).default("Untitled"),
                FormField::new("pinned", "Pinned", InputKind::Checkbox),
                FormField::new("body", "Body", InputKind::TextArea),
            ],
        );
        let form = schema.empty();
        let data = form.data();
        assert_eq!(data["title"], FieldValue::from("Untitled"));
        assert_eq!(data["pinned"], FieldValue::Boolean(false));
        assert_eq!(data["body"], FieldValue::Null);
    }

    #[test]
    fn test_instances_are_independent() {
        let schema = book_schema();
        let mut a = schema.empty();
        let b = schema.empty();

        a.set("title", "changed");
        assert_eq!(a.raw_value("title"), Some("changed"));
        assert!(b.raw_value("title").is_none());
    }

    #[test]
    fn test_try_data() {
        let data = HashMap::from([("title".to_string(), "Dune".to_string())]);
        let mut form = book_schema().bind(&data);
        assert!(form.try_data().is_ok());

        let mut empty = book_schema().empty();
        assert!(matches!(
            empty.try_data(),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_then_fix() {
        let mut form = book_schema().empty();
        assert!(!form.validate());
        form.set("title", "Dune");
        assert!(form.validate());
        assert!(form.errors().is_empty());
    }
}
