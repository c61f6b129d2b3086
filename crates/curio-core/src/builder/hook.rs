use crate::{
    COLLECTORS_KEY,
    entity::{Collection, CollectorError},
    error::BuildError,
    metadata::Metadata,
    value::Value,
};

///
/// BuildHook
///
/// Per-entity wiring that cannot be expressed as a flat field copy.
///
/// Runs after the whitelist copy. Any keys the hook consumes must be listed
/// in `reserved_keys` so reports do not count them as skipped.
///

pub trait BuildHook<E> {
    fn before_build(&self, _entity: &mut E, _metadata: &Metadata) -> Result<(), BuildError> {
        Ok(())
    }

    fn reserved_keys(&self) -> &'static [&'static str] {
        &[]
    }
}

///
/// NoopHook
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHook;

impl<E> BuildHook<E> for NoopHook {}

///
/// CollectorsHook
///
/// Attaches the descriptors under `collectors` to a collection, in order.
/// A missing or null key attaches nothing.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct CollectorsHook;

impl BuildHook<Collection> for CollectorsHook {
    fn before_build(&self, entity: &mut Collection, metadata: &Metadata) -> Result<(), BuildError> {
        let descriptors = match metadata.get(COLLECTORS_KEY) {
            None | Some(Value::Null) => return Ok(()),
            Some(Value::List(items)) => items,
            Some(other) => return Err(CollectorError::NotAList { found: other.tag() }.into()),
        };

        for (index, descriptor) in descriptors.iter().enumerate() {
            entity
                .add_collector(descriptor)
                .map_err(|err| err.with_index(index))?;
        }

        Ok(())
    }

    fn reserved_keys(&self) -> &'static [&'static str] {
        &[COLLECTORS_KEY]
    }
}
