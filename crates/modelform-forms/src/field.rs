//! Input field specifications.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use modelform_schema::FieldValue;

use crate::validation::Validator;

/// Accepted datetime layouts, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// The concrete kind of input a form field presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Whole-number input.
    Integer,
    /// Floating-point input.
    Float,
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    TextArea,
    /// Checkbox input.
    Checkbox,
    /// Calendar date input.
    Date,
    /// Date and time input.
    DateTime,
}

impl InputKind {
    /// Coerces a raw submitted string into a typed value.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message when the value does not parse for
    /// this kind.
    pub fn coerce(self, raw: &str) -> Result<FieldValue, String> {
        match self {
            Self::Integer => raw
                .trim()
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| "Not a valid integer value.".to_string()),
            Self::Float => raw
                .trim()
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|_| "Not a valid float value.".to_string()),
            Self::Text | Self::TextArea => Ok(FieldValue::String(raw.to_string())),
            Self::Checkbox => Ok(FieldValue::Boolean(is_truthy(raw))),
            Self::Date => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map(|_| FieldValue::String(raw.trim().to_string()))
                .map_err(|_| "Not a valid date value.".to_string()),
            Self::DateTime => {
                let trimmed = raw.trim();
                if DATETIME_FORMATS
                    .iter()
                    .any(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).is_ok())
                {
                    Ok(FieldValue::String(trimmed.to_string()))
                } else {
                    Err("Not a valid datetime value.".to_string())
                }
            }
        }
    }
}

/// How browsers and common clients spell "unchecked" or "false".
fn is_truthy(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "" | "false" | "0" | "off" | "no"
    )
}

/// One input field's specification.
///
/// Produced by the generator or built by hand; owned by the form schema it
/// ends up in.
#[derive(Clone)]
pub struct FormField {
    /// Field name, matching the submitted data key.
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// The input kind.
    pub kind: InputKind,
    /// Default value used when no data is bound.
    pub default: Option<FieldValue>,
    /// Help text.
    pub help_text: Option<String>,
    /// Validators run against the raw submitted value.
    pub validators: Vec<Arc<dyn Validator>>,
}

impl std::fmt::Debug for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormField")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("default", &self.default)
            .field("help_text", &self.help_text)
            .field("validators", &self.validators.len())
            .finish_non_exhaustive()
    }
}

impl FormField {
    /// Creates a new field spec.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: InputKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            default: None,
            help_text: None,
            validators: Vec::new(),
        }
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

    /// Appends a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    /// Replaces the validator list.
    #[must_use]
    pub fn validators(mut self, validators: Vec<Arc<dyn Validator>>) -> Self {
        self.validators = validators;
        self
    }
}
