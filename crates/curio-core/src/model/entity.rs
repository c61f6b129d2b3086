use crate::model::field::FieldModel;

///
/// EntityModel
/// Static runtime model for one entity.
///

#[derive(Debug)]
pub struct EntityModel {
    /// Fully-qualified Rust type path (for diagnostics).
    pub path: &'static str,
    /// Stable external name used by builder configuration.
    pub entity_name: &'static str,
    /// Ordered field list (authoritative for assignment and validation).
    pub fields: &'static [FieldModel],
}

impl EntityModel {
    /// Look up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }
}
