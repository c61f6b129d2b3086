use curio_core::{
    config::ConfigError,
    entity::CollectorError,
    error::{BuildError, ConstructionError},
    metadata::MetadataError,
    validate::ValidateError,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Debug, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string())
    }
}

impl From<ConstructionError> for Error {
    fn from(err: ConstructionError) -> Self {
        match err {
            ConstructionError::Config(err) => err.into(),
            err => Self::new(ErrorKind::Construction, ErrorOrigin::Builder, err.to_string()),
        }
    }
}

impl From<CollectorError> for Error {
    fn from(err: CollectorError) -> Self {
        Self::new(
            ErrorKind::Relation(RelationErrorKind::from(err.leaf())),
            ErrorOrigin::Hook,
            err.to_string(),
        )
    }
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::Construction(err) => err.into(),
            BuildError::Collector(err) => err.into(),
            err @ BuildError::Hook { .. } => Self::new(
                ErrorKind::Relation(RelationErrorKind::Rejected),
                ErrorOrigin::Hook,
                err.to_string(),
            ),
        }
    }
}

impl From<MetadataError> for Error {
    fn from(err: MetadataError) -> Self {
        Self::new(ErrorKind::Input, ErrorOrigin::Metadata, err.to_string())
    }
}

impl From<ValidateError> for Error {
    fn from(err: ValidateError) -> Self {
        let issues = err.issues().clone();

        Self::new(
            ErrorKind::Validation(issues),
            ErrorOrigin::Validate,
            err.to_string(),
        )
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers and request handlers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// Builder configuration is inconsistent with the entity model.
    Config,

    /// The entity could not be instantiated.
    Construction,

    /// A related entity could not be attached.
    Relation(RelationErrorKind),

    /// The built entity failed validation; issues are keyed by field.
    Validation(BTreeMap<String, Vec<String>>),

    /// Submitted metadata could not be read.
    Input,
}

///
/// RelationErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RelationErrorKind {
    /// The relation key did not hold a list.
    NotAList,

    /// A descriptor had the wrong shape or a blank name.
    InvalidDescriptor,

    /// A custom hook refused the build.
    Rejected,
}

impl From<&CollectorError> for RelationErrorKind {
    fn from(err: &CollectorError) -> Self {
        match err {
            CollectorError::NotAList { .. } => Self::NotAList,
            CollectorError::Context { source, .. } => Self::from(source.as_ref()),
            CollectorError::InvalidDescriptor { .. }
            | CollectorError::EmptyName
            | CollectorError::InvalidName { .. }
            | CollectorError::InvalidInstitution { .. } => Self::InvalidDescriptor,
        }
    }
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers and request handlers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Builder,
    Config,
    Hook,
    Metadata,
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use curio_core::value::Value;
    use proptest::prelude::*;

    fn arb_leaf() -> impl Strategy<Value = (CollectorError, RelationErrorKind)> {
        prop_oneof![
            Just((
                CollectorError::NotAList { found: "Text" },
                RelationErrorKind::NotAList
            )),
            Just((
                CollectorError::InvalidDescriptor { found: "Uint" },
                RelationErrorKind::InvalidDescriptor
            )),
            Just((CollectorError::EmptyName, RelationErrorKind::InvalidDescriptor)),
            Just((
                CollectorError::InvalidName { found: "Bool" },
                RelationErrorKind::InvalidDescriptor
            )),
            Just((
                CollectorError::InvalidInstitution { found: "List" },
                RelationErrorKind::InvalidDescriptor
            )),
        ]
    }

    proptest! {
        #[test]
        fn collector_errors_map_to_their_leaf_kind(
            (leaf, expected) in arb_leaf(),
            indexes in prop::collection::vec(0usize..64, 0..4),
        ) {
            let err = indexes
                .into_iter()
                .fold(leaf, CollectorError::with_index);
            let message = err.to_string();

            let err: Error = BuildError::from(err).into();

            prop_assert_eq!(err.kind, ErrorKind::Relation(expected));
            prop_assert_eq!(err.origin, ErrorOrigin::Hook);
            prop_assert_eq!(err.message, message);
        }
    }

    #[test]
    fn collector_context_maps_to_its_leaf_kind() {
        let err: Error = CollectorError::InvalidName { found: "Uint" }
            .with_index(3)
            .into();

        assert_eq!(
            err.kind,
            ErrorKind::Relation(RelationErrorKind::InvalidDescriptor)
        );
        assert_eq!(err.origin, ErrorOrigin::Hook);
        assert!(err.message.starts_with("collector [3]"));
    }

    #[test]
    fn config_errors_unwrap_from_construction() {
        let err: Error = ConstructionError::Config(ConfigError::DuplicateField {
            field: "name".to_string(),
        })
        .into();

        assert_eq!(err.kind, ErrorKind::Config);
        assert_eq!(err.origin, ErrorOrigin::Config);
    }

    #[test]
    fn type_mismatch_is_a_construction_error() {
        let err: Error = BuildError::from(ConstructionError::EntityTypeMismatch {
            expected: "Collection",
            found: "Item".to_string(),
        })
        .into();

        assert_eq!(err.kind, ErrorKind::Construction);
        assert_eq!(err.origin.to_string(), "Builder");
    }

    #[test]
    fn metadata_errors_are_input_errors() {
        let err: Error = curio_core::metadata::Metadata::from_json("true")
            .unwrap_err()
            .into();

        assert_eq!(err.kind, ErrorKind::Input);
        assert_eq!(err.origin, ErrorOrigin::Metadata);
        assert_eq!(err.message, "metadata must be an object, found Bool");
    }

    #[test]
    fn validation_issues_survive_conversion() {
        let mut collection = curio_core::entity::Collection::default();
        collection.public = Value::Uint(1);
        let err: Error = curio_core::validate::validate(&collection)
            .unwrap_err()
            .into();

        let ErrorKind::Validation(issues) = &err.kind else {
            panic!("expected validation kind, got {:?}", err.kind);
        };
        assert!(issues.contains_key("name"));
        assert!(issues.contains_key("public"));
    }

    #[test]
    fn serializes_for_transport() {
        let err = Error::new(ErrorKind::Input, ErrorOrigin::Metadata, "bad body");

        let json = serde_json::to_string(&err).unwrap();

        assert_eq!(
            json,
            r#"{"kind":"Input","origin":"Metadata","message":"bad body"}"#
        );
    }
}
