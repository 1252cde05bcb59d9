//! Converts model field descriptors into form fields.
//!
//! The default conversions between field kinds and input kinds:
//!
//! | model kind                   | input kind | extra validators        |
//! |------------------------------|------------|-------------------------|
//! | SmallInt, Integer, BigInt    | Integer    |                         |
//! | Char                         | Text       | max length (declared)   |
//! | Uuid                         | Text       | max length 36           |
//! | Text                         | TextArea   |                         |
//! | Boolean                      | Checkbox   |                         |
//! | Float, Decimal               | Float      |                         |
//! | DateTime                     | DateTime   |                         |
//! | Date                         | Date       |                         |

use std::collections::HashMap;
use std::sync::Arc;

use modelform_forms::validation::{MaxLengthValidator, RequiredValidator, Validator};
use modelform_forms::{FormField, InputKind};
use modelform_schema::{FieldDescriptor, FieldKind, FieldTag, FieldValue, ModelSchema};

use crate::options::FieldArgs;

/// Length of the canonical hyphenated string form of a UUID.
const UUID_STRING_LENGTH: usize = 36;

/// Merged construction arguments handed to a converter function.
#[derive(Clone)]
pub struct ConstructArgs {
    /// Field label.
    pub label: String,
    /// Default value.
    pub default: Option<FieldValue>,
    /// Validators accumulated so far.
    pub validators: Vec<Arc<dyn Validator>>,
    /// Help text.
    pub help_text: Option<String>,
}

impl std::fmt::Debug for ConstructArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstructArgs")
            .field("label", &self.label)
            .field("default", &self.default)
            .field("validators", &self.validators.len())
            .field("help_text", &self.help_text)
            .finish()
    }
}

/// A pure conversion function from one descriptor to a form field.
///
/// Returning `None` drops the field from the generated form.
pub type ConverterFn =
    fn(&ModelSchema, &FieldDescriptor, ConstructArgs) -> Option<FormField>;

fn build_field(prop: &FieldDescriptor, kind: InputKind, args: ConstructArgs) -> FormField {
    let mut field = FormField::new(&prop.name, args.label, kind).validators(args.validators);
    if let Some(default) = args.default {
        field = field.default(default);
    }
    if let Some(text) = args.help_text {
        field = field.help_text(text);
    }
    field
}

/// Converts any integer kind; size sub-classes all collapse to one input.
fn convert_integer(
    _model: &ModelSchema,
    prop: &FieldDescriptor,
    args: ConstructArgs,
) -> Option<FormField> {
    Some(build_field(prop, InputKind::Integer, args))
}

/// Converts a bounded string, enforcing its declared maximum length.
fn convert_char(
    _model: &ModelSchema,
    prop: &FieldDescriptor,
    mut args: ConstructArgs,
) -> Option<FormField> {
    let FieldKind::Char { max_length } = &prop.kind else {
        return None;
    };
    args.validators
        .push(Arc::new(MaxLengthValidator::new(*max_length)));
    Some(build_field(prop, InputKind::Text, args))
}

fn convert_text(
    _model: &ModelSchema,
    prop: &FieldDescriptor,
    args: ConstructArgs,
) -> Option<FormField> {
    Some(build_field(prop, InputKind::TextArea, args))
}

/// Converts a UUID field. The max length is always 36, the canonical string
/// form, regardless of any declared length metadata.
fn convert_uuid(
    _model: &ModelSchema,
    prop: &FieldDescriptor,
    mut args: ConstructArgs,
) -> Option<FormField> {
    args.validators
        .push(Arc::new(MaxLengthValidator::new(UUID_STRING_LENGTH)));
    Some(build_field(prop, InputKind::Text, args))
}

fn convert_boolean(
    _model: &ModelSchema,
    prop: &FieldDescriptor,
    args: ConstructArgs,
) -> Option<FormField> {
    Some(build_field(prop, InputKind::Checkbox, args))
}

/// Converts float and decimal kinds; both map to a floating-point input.
fn convert_float(
    _model: &ModelSchema,
    prop: &FieldDescriptor,
    args: ConstructArgs,
) -> Option<FormField> {
    Some(build_field(prop, InputKind::Float, args))
}

fn convert_datetime(
    _model: &ModelSchema,
    prop: &FieldDescriptor,
    args: ConstructArgs,
) -> Option<FormField> {
    Some(build_field(prop, InputKind::DateTime, args))
}

fn convert_date(
    _model: &ModelSchema,
    prop: &FieldDescriptor,
    args: ConstructArgs,
) -> Option<FormField> {
    Some(build_field(prop, InputKind::Date, args))
}

/// Converts field descriptors to form fields through a registry of
/// converter functions keyed by field tag.
///
/// The registry is read-only once constructed, so one converter can serve
/// any number of concurrent generation calls.
#[derive(Debug, Clone)]
pub struct ModelConverter {
    converters: HashMap<FieldTag, ConverterFn>,
}

impl Default for ModelConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelConverter {
    /// Creates a converter with the built-in conversion table.
    pub fn new() -> Self {
        Self {
            converters: Self::default_converters(),
        }
    }

    /// Creates a converter from a caller-supplied table.
    ///
    /// The table is a full replacement, not a patch: kinds missing from it
    /// are skipped during generation.
    pub fn with_converters(converters: HashMap<FieldTag, ConverterFn>) -> Self {
        Self { converters }
    }

    /// Returns the built-in conversion table.
    pub fn default_converters() -> HashMap<FieldTag, ConverterFn> {
        let mut table: HashMap<FieldTag, ConverterFn> = HashMap::new();
        table.insert(FieldTag::SmallInt, convert_integer);
        table.insert(FieldTag::Integer, convert_integer);
        table.insert(FieldTag::BigInt, convert_integer);
        table.insert(FieldTag::Char, convert_char);
        table.insert(FieldTag::Text, convert_text);
        table.insert(FieldTag::Uuid, convert_uuid);
        table.insert(FieldTag::Boolean, convert_boolean);
        table.insert(FieldTag::Float, convert_float);
        table.insert(FieldTag::Decimal, convert_float);
        table.insert(FieldTag::DateTime, convert_datetime);
        table.insert(FieldTag::Date, convert_date);
        table
    }

    /// Converts one descriptor into a form field.
    ///
    /// Derives the base construction arguments from the descriptor, merges
    /// `field_args` over them, appends the presence validator for required
    /// fields and dispatches on the descriptor's tag. Returns `None` when
    /// no converter is registered for the tag.
    pub fn convert(
        &self,
        model: &ModelSchema,
        prop: &FieldDescriptor,
        field_args: Option<&FieldArgs>,
    ) -> Option<FormField> {
        let mut args = ConstructArgs {
            label: title_case(&prop.name),
            default: prop.default.clone(),
            validators: Vec::new(),
            help_text: prop.help_text.clone(),
        };

        if let Some(overrides) = field_args {
            if let Some(label) = &overrides.label {
                args.label = label.clone();
            }
            if let Some(default) = &overrides.default {
                args.default = Some(default.clone());
            }
            if let Some(validators) = &overrides.validators {
                args.validators = validators.clone();
            }
            if let Some(text) = &overrides.help_text {
                args.help_text = Some(text.clone());
            }
        }

        // Appended after the override merge: a required field keeps its
        // presence validator even when the override replaced the list.
        if prop.required {
            args.validators.push(Arc::new(RequiredValidator::new()));
        }

        let converter = self.converters.get(&prop.kind.tag())?;
        converter(model, prop, args)
    }
}

/// Capitalizes each underscore-separated word: `created_at` -> `Created At`.
fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
