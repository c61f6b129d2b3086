//! ## Crate layout
//! - `core`: metadata values, entity models, builders, validation, and the
//!   bundled collection entities.
//! - `error`: the public error type with a stable kind/origin taxonomy.
//!
//! The `prelude` module mirrors the surface used by request handlers that
//! turn submitted metadata into records.

pub use curio_core as core;

pub mod error;

pub use error::{Error, ErrorKind, ErrorOrigin};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        builder::{BuildHook, BuildReport, Built, CollectionBuilder, CollectorsHook, EntityBuilder},
        config::BuilderConfig,
        entity::{Collection, Collector},
        metadata::Metadata,
        traits::{EntityKind as _, Path as _},
        validate::validate,
        value::Value,
    };
    pub use crate::error::Error;
}
