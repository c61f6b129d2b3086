use crate::value::Value;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// CollectorError
///
/// Structured failures for collector descriptors.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CollectorError {
    #[error("collectors must be a list, found {found}")]
    NotAList { found: &'static str },

    #[error("invalid collector descriptor: expected Text or Map, found {found}")]
    InvalidDescriptor { found: &'static str },

    #[error("collector name must not be blank")]
    EmptyName,

    #[error("collector name must be Text, found {found}")]
    InvalidName { found: &'static str },

    #[error("collector institution must be Text, found {found}")]
    InvalidInstitution { found: &'static str },

    #[error("collector [{index}]: {source}")]
    Context {
        index: usize,
        #[source]
        source: Box<Self>,
    },
}

impl CollectorError {
    /// Attach the descriptor's position in the input list.
    #[must_use]
    pub fn with_index(self, index: usize) -> Self {
        Self::Context {
            index,
            source: Box::new(self),
        }
    }

    /// Position of the offending descriptor, if known.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Context { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Return the innermost, non-context variant.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.leaf(),
            _ => self,
        }
    }
}

///
/// Collector
///
/// A person or organization associated with a collection.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "CollectorRecord")]
pub struct Collector {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    institution: Option<String>,
}

///
/// CollectorRecord
///
/// Unchecked persisted shape; converted through `Collector::new`.
///

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CollectorRecord {
    name: String,
    #[serde(default)]
    institution: Option<String>,
}

impl TryFrom<CollectorRecord> for Collector {
    type Error = CollectorError;

    fn try_from(record: CollectorRecord) -> Result<Self, Self::Error> {
        let collector = Self::new(record.name)?;

        Ok(match record.institution {
            Some(institution) => collector.with_institution(institution),
            None => collector,
        })
    }
}

impl Collector {
    /// Create a collector from a name; blank names are rejected.
    pub fn new(name: impl AsRef<str>) -> Result<Self, CollectorError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(CollectorError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            institution: None,
        })
    }

    #[must_use]
    pub fn with_institution(mut self, institution: impl AsRef<str>) -> Self {
        let institution = institution.as_ref().trim();
        self.institution = (!institution.is_empty()).then(|| institution.to_string());
        self
    }

    /// Parse a descriptor: either the name as text, or a map with a `name`
    /// entry and an optional `institution` entry.
    pub fn from_descriptor(descriptor: &Value) -> Result<Self, CollectorError> {
        match descriptor {
            Value::Text(name) => Self::new(name),
            Value::Map(map) => {
                let name = match map.get("name") {
                    Some(Value::Text(name)) => name,
                    Some(other) => return Err(CollectorError::InvalidName { found: other.tag() }),
                    None => return Err(CollectorError::EmptyName),
                };

                let collector = Self::new(name)?;
                match map.get("institution") {
                    None | Some(Value::Null) => Ok(collector),
                    Some(Value::Text(institution)) => Ok(collector.with_institution(institution)),
                    Some(other) => Err(CollectorError::InvalidInstitution { found: other.tag() }),
                }
            }
            other => Err(CollectorError::InvalidDescriptor { found: other.tag() }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn institution(&self) -> Option<&str> {
        self.institution.as_deref()
    }
}
