//! Static runtime models: what fields an entity has and which of them a
//! builder may assign.

pub mod entity;
pub mod field;
pub mod whitelist;

pub use entity::EntityModel;
pub use field::{FieldKind, FieldModel};
pub use whitelist::FieldWhitelist;
