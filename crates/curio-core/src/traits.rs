use crate::{error::ConstructionError, model::EntityModel, validate::Issues, value::Value};

// ============================================================================
// FOUNDATIONAL KINDS
// ============================================================================

///
/// Path
/// Fully-qualified type path.
///

pub trait Path {
    const PATH: &'static str;
}

// ============================================================================
// ENTITY SCHEMA & SLOTS
// ============================================================================

///
/// EntityKind
///
/// An entity a builder can construct.
///
/// ## Semantics
/// - `MODEL` declares every assignable field; `field`/`field_mut` expose the
///   matching storage slots and return `None` for any other name
/// - `SETTABLE_FIELDS` is the default whitelist; it must be a subset of `MODEL`
/// - `instantiate` is the only constructor a builder calls
///

pub trait EntityKind: Path + Default + Sized {
    const ENTITY_NAME: &'static str;
    const MODEL: &'static EntityModel;
    const SETTABLE_FIELDS: &'static [&'static str];

    /// Create an empty entity.
    fn instantiate() -> Result<Self, ConstructionError> {
        Ok(Self::default())
    }

    /// Read the slot backing a declared field.
    fn field(&self, name: &str) -> Option<&Value>;

    /// Mutable access to the slot backing a declared field.
    fn field_mut(&mut self, name: &str) -> Option<&mut Value>;

    /// Entity-specific checks run after the per-field kind checks.
    fn validate_custom(&self, _issues: &mut Issues) {}
}
