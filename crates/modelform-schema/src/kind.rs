//! Model field kinds.

use serde::{Deserialize, Serialize};

/// The kind of a model field.
///
/// This is a closed set: every kind a model may declare is listed here, and
/// the converter registry is keyed by the matching [`FieldTag`]. Adding
/// support for a new kind means extending this enum, which lets the compiler
/// point at every match that needs updating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// A 16-bit integer.
    SmallInt,
    /// A 32-bit integer.
    Integer,
    /// A 64-bit integer.
    BigInt,
    /// A bounded string.
    Char {
        /// Maximum length of the string.
        max_length: usize,
    },
    /// An unbounded string.
    Text,
    /// A unique identifier stored in its canonical string form.
    Uuid,
    /// A boolean.
    Boolean,
    /// A floating-point number.
    Float,
    /// A fixed-precision decimal.
    Decimal {
        /// Maximum number of digits.
        max_digits: u8,
        /// Number of decimal places.
        decimal_places: u8,
    },
    /// A date and time.
    DateTime,
    /// A calendar date.
    Date,
}

impl FieldKind {
    /// Returns the fieldless tag used as the converter registry key.
    pub fn tag(&self) -> FieldTag {
        match self {
            Self::SmallInt => FieldTag::SmallInt,
            Self::Integer => FieldTag::Integer,
            Self::BigInt => FieldTag::BigInt,
            Self::Char { .. } => FieldTag::Char,
            Self::Text => FieldTag::Text,
            Self::Uuid => FieldTag::Uuid,
            Self::Boolean => FieldTag::Boolean,
            Self::Float => FieldTag::Float,
            Self::Decimal { .. } => FieldTag::Decimal,
            Self::DateTime => FieldTag::DateTime,
            Self::Date => FieldTag::Date,
        }
    }
}

/// Fieldless discriminant of [`FieldKind`].
///
/// Used as the exact-match lookup key in the converter registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldTag {
    /// See [`FieldKind::SmallInt`].
    SmallInt,
    /// See [`FieldKind::Integer`].
    Integer,
    /// See [`FieldKind::BigInt`].
    BigInt,
    /// See [`FieldKind::Char`].
    Char,
    /// See [`FieldKind::Text`].
    Text,
    /// See [`FieldKind::Uuid`].
    Uuid,
    /// See [`FieldKind::Boolean`].
    Boolean,
    /// See [`FieldKind::Float`].
    Float,
    /// See [`FieldKind::Decimal`].
    Decimal,
    /// See [`FieldKind::DateTime`].
    DateTime,
    /// See [`FieldKind::Date`].
    Date,
}
