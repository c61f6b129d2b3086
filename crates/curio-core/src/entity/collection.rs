use crate::{
    entity::collector::{Collector, CollectorError},
    model::{EntityModel, FieldKind, FieldModel},
    traits::{EntityKind, Path},
    validate::Issues,
    value::Value,
};
use serde::{Deserialize, Serialize};

const COLLECTION_FIELDS: &[FieldModel] = &[
    FieldModel::required("name", FieldKind::Text),
    FieldModel::new("description", FieldKind::Text),
    FieldModel::new("public", FieldKind::Bool),
    FieldModel::new("featured", FieldKind::Bool),
    FieldModel::new("owner_id", FieldKind::Uint),
];

const COLLECTION_MODEL: EntityModel = EntityModel {
    path: "curio_core::entity::Collection",
    entity_name: "Collection",
    fields: COLLECTION_FIELDS,
};

///
/// Collection
///
/// A named, optionally public or featured set of items with the people
/// who collected them.
///
/// Flat fields hold the metadata value exactly as it was supplied; the typed
/// accessors below read through them. Collectors are only ever attached via
/// the association methods.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Collection {
    #[serde(with = "crate::value::tagged")]
    pub name: Value,
    #[serde(with = "crate::value::tagged")]
    pub description: Value,
    #[serde(with = "crate::value::tagged")]
    pub public: Value,
    #[serde(with = "crate::value::tagged")]
    pub featured: Value,
    #[serde(with = "crate::value::tagged")]
    pub owner_id: Value,
    collectors: Vec<Collector>,
}

impl Collection {
    /// Empty collection carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Value::Text(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_text()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_text()
    }

    /// True only when `public` holds `Bool(true)`.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.public.as_bool().unwrap_or(false)
    }

    /// True only when `featured` holds `Bool(true)`.
    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.featured.as_bool().unwrap_or(false)
    }

    #[must_use]
    pub fn owner_id(&self) -> Option<u64> {
        self.owner_id.as_uint()
    }

    // ------------------------------------------------------------------
    // Collectors
    // ------------------------------------------------------------------

    /// Parse a collector descriptor and append it.
    pub fn add_collector(&mut self, descriptor: &Value) -> Result<(), CollectorError> {
        let collector = Collector::from_descriptor(descriptor)?;
        self.collectors.push(collector);

        Ok(())
    }

    pub fn push_collector(&mut self, collector: Collector) {
        self.collectors.push(collector);
    }

    /// Remove the first collector with this name.
    pub fn remove_collector(&mut self, name: &str) -> bool {
        let name = name.trim();
        match self.collectors.iter().position(|c| c.name() == name) {
            Some(pos) => {
                self.collectors.remove(pos);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn collectors(&self) -> &[Collector] {
        &self.collectors
    }

    #[must_use]
    pub fn collector_names(&self) -> Vec<&str> {
        self.collectors.iter().map(Collector::name).collect()
    }

    #[must_use]
    pub fn has_collectors(&self) -> bool {
        !self.collectors.is_empty()
    }
}

impl Path for Collection {
    const PATH: &'static str = COLLECTION_MODEL.path;
}

impl EntityKind for Collection {
    const ENTITY_NAME: &'static str = COLLECTION_MODEL.entity_name;
    const MODEL: &'static EntityModel = &COLLECTION_MODEL;
    const SETTABLE_FIELDS: &'static [&'static str] =
        &["name", "description", "public", "featured", "owner_id"];

    fn field(&self, name: &str) -> Option<&Value> {
        match name {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "public" => Some(&self.public),
            "featured" => Some(&self.featured),
            "owner_id" => Some(&self.owner_id),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        match name {
            "name" => Some(&mut self.name),
            "description" => Some(&mut self.description),
            "public" => Some(&mut self.public),
            "featured" => Some(&mut self.featured),
            "owner_id" => Some(&mut self.owner_id),
            _ => None,
        }
    }

    fn validate_custom(&self, issues: &mut Issues) {
        if self.name().is_some_and(|name| name.trim().is_empty()) {
            issues.add("name", "collection name must not be blank");
        }
    }
}
