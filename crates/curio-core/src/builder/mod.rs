//! Whitelisted entity construction.
//!
//! A build copies only whitelisted metadata keys onto a fresh entity, then
//! hands the entity to its hook for relation wiring. Nothing is persisted.

mod hook;
mod report;


pub use hook::{BuildHook, CollectorsHook, NoopHook};
pub use report::{BuildReport, Built};

use crate::{
    config::BuilderConfig,
    entity::Collection,
    error::{BuildError, ConstructionError},
    metadata::Metadata,
    model::FieldWhitelist,
    traits::EntityKind,
};
use std::marker::PhantomData;
use tracing::{debug, trace, warn};

///
/// CollectionBuilder
///

pub type CollectionBuilder = EntityBuilder<Collection, CollectorsHook>;

///
/// EntityBuilder
///
/// Builds `E` from untrusted metadata.
///
/// The whitelist and hook are fixed when the builder is constructed; a
/// build only touches the entity it creates, so one builder can be shared
/// freely across threads.
///

#[derive(Clone, Debug)]
pub struct EntityBuilder<E, H = NoopHook> {
    whitelist: FieldWhitelist,
    hook: H,
    _marker: PhantomData<fn() -> E>,
}

impl<E, H> EntityBuilder<E, H>
where
    E: EntityKind,
    H: BuildHook<E>,
{
    /// Builder using the entity's compiled-in whitelist.
    pub fn new(hook: H) -> Result<Self, ConstructionError> {
        let whitelist = FieldWhitelist::resolve(E::MODEL, E::SETTABLE_FIELDS)?;

        Self::with_whitelist(whitelist, hook)
    }

    /// Builder bound by external configuration.
    pub fn from_config(config: &BuilderConfig, hook: H) -> Result<Self, ConstructionError> {
        if config.entity_type != E::ENTITY_NAME {
            return Err(ConstructionError::EntityTypeMismatch {
                expected: E::ENTITY_NAME,
                found: config.entity_type.clone(),
            });
        }

        let whitelist = FieldWhitelist::resolve(E::MODEL, &config.settable_fields)?;

        Self::with_whitelist(whitelist, hook)
    }

    /// Builder over a pre-resolved whitelist.
    ///
    /// The whitelist must have been resolved against `E::MODEL`; one resolved
    /// for another entity is rejected.
    pub fn with_whitelist(whitelist: FieldWhitelist, hook: H) -> Result<Self, ConstructionError> {
        if whitelist.entity_name() != E::ENTITY_NAME {
            return Err(ConstructionError::EntityTypeMismatch {
                expected: E::ENTITY_NAME,
                found: whitelist.entity_name().to_string(),
            });
        }

        Ok(Self {
            whitelist,
            hook,
            _marker: PhantomData,
        })
    }

    #[must_use]
    pub const fn whitelist(&self) -> &FieldWhitelist {
        &self.whitelist
    }

    #[must_use]
    pub const fn hook(&self) -> &H {
        &self.hook
    }

    /// Build a new entity from `metadata`.
    pub fn build(&self, metadata: &Metadata) -> Result<E, BuildError> {
        self.build_with_report(metadata).map(Built::into_entity)
    }

    /// Build a new entity and report how each metadata key was handled.
    pub fn build_with_report(&self, metadata: &Metadata) -> Result<Built<E>, BuildError> {
        let entity = E::instantiate()?;

        self.apply(entity, metadata)
    }

    /// Apply `metadata` to an existing entity.
    ///
    /// Whitelisted fields present in the bag are overwritten, everything else
    /// keeps its current value, and the hook runs as for a new entity.
    pub fn build_onto(&self, entity: E, metadata: &Metadata) -> Result<E, BuildError> {
        self.apply(entity, metadata).map(Built::into_entity)
    }

    fn apply(&self, mut entity: E, metadata: &Metadata) -> Result<Built<E>, BuildError> {
        let mut report = BuildReport {
            entity: E::ENTITY_NAME,
            ..BuildReport::default()
        };

        for field in self.whitelist.iter() {
            let Some(value) = metadata.get(field.name) else {
                continue;
            };

            // resolved against E::MODEL, so the slot exists
            if let Some(slot) = entity.field_mut(field.name) {
                slot.clone_from(value);
                report.applied.push(field.name);
            }
        }

        let reserved = self.hook.reserved_keys();
        for key in metadata.keys() {
            if self.whitelist.contains(key) {
                continue;
            }

            if reserved.iter().any(|r| *r == key) {
                report.relations.push(key.to_string());
            } else {
                trace!(entity = E::ENTITY_NAME, key, "metadata key not settable, skipped");
                report.skipped.push(key.to_string());
            }
        }

        if let Err(err) = self.hook.before_build(&mut entity, metadata) {
            warn!(entity = E::ENTITY_NAME, error = %err, "build hook failed");
            return Err(err);
        }

        debug!(
            entity = E::ENTITY_NAME,
            applied = report.applied.len(),
            relations = report.relations.len(),
            skipped = report.skipped.len(),
            "built entity"
        );

        Ok(Built { entity, report })
    }
}

impl EntityBuilder<Collection, CollectorsHook> {
    /// The stock collection builder: `name`, `description`, `public`,
    /// `featured` and `owner_id` are settable, collectors come from the hook.
    pub fn collection() -> Result<Self, ConstructionError> {
        Self::new(CollectorsHook)
    }
}
