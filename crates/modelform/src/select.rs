//! Field selection.

/// Computes the ordered subset of field names to expose in a form.
///
/// When `only` is given it wins over `exclude` and the result follows
/// `only`'s order, restricted to names that exist in `all`; unknown names
/// are dropped silently, and an empty `only` selects nothing. Otherwise any
/// name in `exclude` is removed from `all`, preserving `all`'s order.
pub fn select_field_names(
    all: &[String],
    only: Option<&[String]>,
    exclude: &[String],
) -> Vec<String> {
    if let Some(only) = only {
        only.iter()
            .filter(|name| all.contains(name))
            .cloned()
            .collect()
    } else {
        all.iter()
            .filter(|name| !exclude.contains(name))
            .cloned()
            .collect()
    }
}
