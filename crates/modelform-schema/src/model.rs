//! Model schemas and model object access.

use serde::{Deserialize, Serialize};

use crate::descriptor::FieldDescriptor;
use crate::value::FieldValue;

/// An ordered set of field descriptors plus a display name.
///
/// Field order is declaration order and is preserved everywhere downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSchema {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl ModelSchema {
    /// Creates an empty schema with the given model name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field descriptor.
    #[must_use]
    pub fn field(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    /// Returns the model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all field descriptors in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Returns all field names in declaration order.
    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    /// Returns the descriptor for the named field, if declared.
    pub fn descriptor(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Read/write access to one model instance's field values.
///
/// Implemented by whatever the application uses as its model instances so
/// generated forms can pre-fill from an object and write validated values
/// back onto one.
pub trait ModelObject {
    /// Returns the current value of the named field.
    fn get_field(&self, name: &str) -> Option<FieldValue>;

    /// Sets the named field to the given value.
    fn set_field(&mut self, name: &str, value: FieldValue);
}
