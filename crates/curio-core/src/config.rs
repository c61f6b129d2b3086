use crate::traits::EntityKind;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("field '{field}' is not declared on {entity}")]
    UnknownField { entity: &'static str, field: String },

    #[error("field '{field}' is listed more than once")]
    DuplicateField { field: String },

    #[error("invalid builder config: {0}")]
    Toml(#[from] toml::de::Error),
}

///
/// BuilderConfig
///
/// Static binding of a builder to one entity type and its whitelist.
///
/// ```toml
/// entity_type = "Collection"
/// settable_fields = ["name", "description", "public", "featured", "owner_id"]
/// ```
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BuilderConfig {
    pub entity_type: String,
    pub settable_fields: Vec<String>,
}

impl BuilderConfig {
    /// The entity's compiled-in defaults.
    #[must_use]
    pub fn for_entity<E: EntityKind>() -> Self {
        Self {
            entity_type: E::ENTITY_NAME.to_string(),
            settable_fields: E::SETTABLE_FIELDS.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}
