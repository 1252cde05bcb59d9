//! Field descriptors.

use serde::{Deserialize, Serialize};

use crate::kind::FieldKind;
use crate::value::FieldValue;

/// Read-only metadata describing one attribute of a data model.
///
/// Owned by the model layer; the form generator only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name in the model's declaration.
    pub name: String,
    /// The kind of the field.
    pub kind: FieldKind,
    /// Whether a value is required.
    pub required: bool,
    /// Default value, if any.
    pub default: Option<FieldValue>,
    /// Help text for generated forms.
    pub help_text: Option<String>,
}

impl FieldDescriptor {
    /// Creates a new descriptor for the given name and kind.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            default: None,
            help_text: None,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }
}
