//! Options controlling form generation.

use std::collections::HashMap;
use std::sync::Arc;

use modelform_forms::validation::Validator;
use modelform_schema::FieldValue;

use crate::convert::ModelConverter;

/// Per-field construction argument overrides.
///
/// Every set member is merged key-for-key over the auto-derived construction
/// arguments for that field, override winning. A required field gets its
/// presence validator appended after the merge, so replacing the validator
/// list here never removes it.
#[derive(Clone, Default)]
pub struct FieldArgs {
    /// Overrides the derived label.
    pub label: Option<String>,
    /// Overrides the descriptor's default.
    pub default: Option<FieldValue>,
    /// Replaces the validator list.
    pub validators: Option<Vec<Arc<dyn Validator>>>,
    /// Overrides the descriptor's help text.
    pub help_text: Option<String>,
}

impl std::fmt::Debug for FieldArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldArgs")
            .field("label", &self.label)
            .field("default", &self.default)
            .field("validators", &self.validators.as_ref().map(Vec::len))
            .field("help_text", &self.help_text)
            .finish()
    }
}

impl FieldArgs {
    /// Creates empty overrides.
    pub fn new() -> Self {
        Self {
            label: None,
            default: None,
            validators: None,
            help_text: None,
        }
    }

    /// Sets the label override.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the default-value override.
    #[must_use]
    pub fn default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Appends a validator to the override list, creating it if absent.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators
            .get_or_insert_with(Vec::new)
            .push(Arc::new(validator));
        self
    }

    /// Replaces the validator list outright.
    #[must_use]
    pub fn validators(mut self, validators: Vec<Arc<dyn Validator>>) -> Self {
        self.validators = Some(validators);
        self
    }

    /// Sets the help-text override.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }
}

/// Options for one generation call.
#[derive(Debug, Default)]
pub struct FormOptions {
    /// Field names to include, in the order the form should use them.
    /// `Some` wins over `exclude`; `Some(vec![])` selects nothing.
    pub(crate) only: Option<Vec<String>>,
    /// Field names to leave out when `only` is absent.
    pub(crate) exclude: Vec<String>,
    /// Per-field construction overrides.
    pub(crate) field_args: HashMap<String, FieldArgs>,
    /// Converter to use instead of the default one.
    pub(crate) converter: Option<ModelConverter>,
}

impl FormOptions {
    /// Creates options selecting every field with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the form to the given fields, in this order.
    #[must_use]
    pub fn only(mut self, names: &[&str]) -> Self {
        self.only = Some(names.iter().map(|s| (*s).to_string()).collect());
        self
    }

    /// Excludes the given fields.
    #[must_use]
    pub fn exclude(mut self, names: &[&str]) -> Self {
        self.exclude = names.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Sets construction overrides for one field.
    #[must_use]
    pub fn field_args(mut self, name: &str, args: FieldArgs) -> Self {
        self.field_args.insert(name.to_string(), args);
        self
    }

    /// Uses a custom converter for this call.
    #[must_use]
    pub fn converter(mut self, converter: ModelConverter) -> Self {
        self.converter = Some(converter);
        self
    }
}
