//! Assembles form schemas from model schemas.

use modelform_forms::{FormField, FormSchema};
use modelform_schema::ModelSchema;
use tracing::{debug, trace};

use crate::convert::ModelConverter;
use crate::options::FormOptions;
use crate::select::select_field_names;

/// Extracts form fields for the selected model fields.
///
/// Fields come back in selection order. Names whose kind has no registered
/// converter are returned separately instead of silently vanishing.
pub fn model_fields(model: &ModelSchema, options: &FormOptions) -> (Vec<FormField>, Vec<String>) {
    let default_converter = ModelConverter::new();
    let converter = options.converter.as_ref().unwrap_or(&default_converter);

    let names = select_field_names(
        &model.field_names(),
        options.only.as_deref(),
        &options.exclude,
    );

    let mut fields = Vec::with_capacity(names.len());
    let mut skipped = Vec::new();
    for name in names {
        let Some(prop) = model.descriptor(&name) else {
            continue;
        };
        match converter.convert(model, prop, options.field_args.get(&name)) {
            Some(field) => {
                trace!(model = model.name(), field = %name, "converted field");
                fields.push(field);
            }
            None => {
                debug!(
                    model = model.name(),
                    field = %name,
                    "no converter registered for field kind, skipping"
                );
                skipped.push(name);
            }
        }
    }

    (fields, skipped)
}

/// Builds a fresh form schema for a model.
///
/// The schema is named after the model with a `Form` suffix and carries the
/// selected, converted fields plus the names skipped for lack of a
/// converter. Every call builds a new, independent schema; nothing is
/// cached or shared between calls.
pub fn model_form(model: &ModelSchema, options: &FormOptions) -> FormSchema {
    let (fields, skipped) = model_fields(model, options);
    FormSchema::new(format!("{}Form", model.name()), fields).with_skipped(skipped)
}
