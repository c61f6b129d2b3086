use crate::traits::EntityKind;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// ValidateError
///

#[derive(Debug, ThisError)]
pub enum ValidateError {
    #[error("validation failed for {entity}")]
    ValidationFailed {
        entity: &'static str,
        issues: BTreeMap<String, Vec<String>>,
    },
}

impl ValidateError {
    /// Issues grouped by field path.
    #[must_use]
    pub const fn issues(&self) -> &BTreeMap<String, Vec<String>> {
        match self {
            Self::ValidationFailed { issues, .. } => issues,
        }
    }
}

///
/// Issues
///
/// Non-fatal validation findings collected by field path.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Issues(BTreeMap<String, Vec<String>>);

impl Issues {
    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_default().push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

///
/// validate
/// Check a built entity against its model before it is persisted.
///
/// Builders never call this; assignment copies values as supplied and
/// rejection belongs to whoever persists the entity.
///
pub fn validate<E: EntityKind>(entity: &E) -> Result<(), ValidateError> {
    let mut issues = Issues::default();

    for field in E::MODEL.fields {
        let Some(value) = entity.field(field.name) else {
            issues.add(field.name, "declared field has no storage slot");
            continue;
        };

        if value.is_null() {
            if field.required {
                issues.add(field.name, "field is required");
            }
            continue;
        }

        if !field.kind.accepts(value) {
            issues.add(
                field.name,
                format!("expected {}, found {}", field.kind, value.tag()),
            );
        }
    }

    entity.validate_custom(&mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidateError::ValidationFailed {
            entity: E::ENTITY_NAME,
            issues: issues.into_inner(),
        })
    }
}
