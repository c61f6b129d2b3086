use crate::{config::ConfigError, entity::CollectorError};
use thiserror::Error as ThisError;

///
/// ConstructionError
///
/// The builder could not produce an empty entity of its configured type.
///

#[derive(Debug, ThisError)]
pub enum ConstructionError {
    #[error("builder for {expected} cannot be bound to entity type '{found}'")]
    EntityTypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("cannot instantiate {entity}: {reason}")]
    Instantiate {
        entity: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

///
/// BuildError
///
/// Failures surfaced by a build call.
/// Hook failures are carried as-is so callers can match on the source.
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Collector(#[from] CollectorError),

    #[error("build hook for {entity} failed: {source}")]
    Hook {
        entity: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl BuildError {
    /// Wrap an arbitrary hook failure.
    pub fn hook<E>(entity: &'static str, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Hook {
            entity,
            source: source.into(),
        }
    }
}
