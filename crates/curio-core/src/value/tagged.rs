//! Variant-preserving encoding for persisted `Value` fields.
//!
//! `Value` reads untagged so request bodies map onto it directly, but that
//! loses the variant on the way back (`Int(5)` reloads as `Uint(5)`). Entity
//! fields use this module through `#[serde(with = ...)]` instead.

use crate::value::Value;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

///
/// TaggedValue
///

#[derive(Deserialize, Serialize)]
enum TaggedValue {
    Null,
    Bool(bool),
    Uint(u64),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Self>),
    Map(BTreeMap<String, Self>),
}

impl From<&Value> for TaggedValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Uint(n) => Self::Uint(*n),
            Value::Int(n) => Self::Int(*n),
            Value::Float(n) => Self::Float(*n),
            Value::Text(s) => Self::Text(s.clone()),
            Value::List(items) => Self::List(items.iter().map(Self::from).collect()),
            Value::Map(map) => Self::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<TaggedValue> for Value {
    fn from(value: TaggedValue) -> Self {
        match value {
            TaggedValue::Null => Self::Null,
            TaggedValue::Bool(b) => Self::Bool(b),
            TaggedValue::Uint(n) => Self::Uint(n),
            TaggedValue::Int(n) => Self::Int(n),
            TaggedValue::Float(n) => Self::Float(n),
            TaggedValue::Text(s) => Self::Text(s),
            TaggedValue::List(items) => Self::List(items.into_iter().map(Self::from).collect()),
            TaggedValue::Map(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

pub fn serialize<S>(value: &Value, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    TaggedValue::from(value).serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    TaggedValue::deserialize(deserializer).map(Value::from)
}
