//! Common types for all entity kinds

pub mod entity_kind;
pub mod entity_record;
pub mod relation_ref;

// Re-exports
pub use entity_kind::{EntityDomIds, EntityKind};
pub use entity_record::EntityRecord;
pub use relation_ref::RelationRef;
