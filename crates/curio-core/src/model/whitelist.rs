use crate::{
    config::ConfigError,
    model::{entity::EntityModel, field::FieldModel},
};

///
/// FieldWhitelist
///
/// Ordered set of the only fields a builder may copy from metadata.
///
/// Every entry is resolved against the entity model up front, so a build
/// never meets a whitelisted name the entity cannot hold.
///

#[derive(Clone, Debug)]
pub struct FieldWhitelist {
    entity_name: &'static str,
    fields: Vec<&'static FieldModel>,
}

impl FieldWhitelist {
    /// Resolve names against `model`, keeping their order.
    pub fn resolve<I, S>(model: &'static EntityModel, names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fields: Vec<&'static FieldModel> = Vec::new();

        for name in names {
            let name = name.as_ref();
            let field = model.field(name).ok_or_else(|| ConfigError::UnknownField {
                entity: model.entity_name,
                field: name.to_string(),
            })?;

            if fields.iter().any(|f| f.name == field.name) {
                return Err(ConfigError::DuplicateField {
                    field: name.to_string(),
                });
            }

            fields.push(field);
        }

        Ok(Self {
            entity_name: model.entity_name,
            fields,
        })
    }

    /// Name of the entity model the fields were resolved against.
    #[must_use]
    pub const fn entity_name(&self) -> &'static str {
        self.entity_name
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static FieldModel> + '_ {
        self.fields.iter().copied()
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name).collect()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
