//! Core runtime for Curio: metadata values, entity models, the whitelisted
//! entity builder, and the bundled collection entities.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod builder;
pub mod config;
pub mod entity;
pub mod error;
pub mod metadata;
pub mod model;
pub mod traits;
pub mod validate;
pub mod value;

///
/// CONSTANTS
///

/// Metadata key the collection hook reads collector descriptors from.
///
/// Never part of a field whitelist; collectors are attached through the
/// association call, not flat assignment.
pub const COLLECTORS_KEY: &str = "collectors";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, configuration, or validators are re-exported here.
///

pub mod prelude {
    pub use crate::{
        builder::{BuildHook, CollectionBuilder, CollectorsHook, EntityBuilder, NoopHook},
        entity::{Collection, Collector},
        metadata::Metadata,
        model::{EntityModel, FieldKind, FieldModel, FieldWhitelist},
        traits::{EntityKind, Path},
        value::Value,
    };
}
