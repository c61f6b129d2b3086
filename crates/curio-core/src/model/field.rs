use crate::value::Value;
use std::fmt;

///
/// FieldModel
/// Runtime field metadata used by the builder and validation.
///

#[derive(Debug, Eq, PartialEq)]
pub struct FieldModel {
    /// Field name as it appears in metadata.
    pub name: &'static str,
    /// Declared value shape; checked by validation, never coerced.
    pub kind: FieldKind,
    /// Whether validation rejects a `Null` value.
    pub required: bool,
}

impl FieldModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    #[must_use]
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }
}

///
/// FieldKind
///
/// Minimal type surface for entity fields.
/// Aligned with `Value` variants; validation compares against it.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Bool,
    Text,
    Uint,
}

impl FieldKind {
    /// Whether a non-null value has the shape this kind declares.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Bool => value.as_bool().is_some(),
            Self::Text => value.as_text().is_some(),
            Self::Uint => value.as_uint().is_some(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bool => "Bool",
            Self::Text => "Text",
            Self::Uint => "Uint",
        };

        f.write_str(label)
    }
}
