//! Core metadata types for form fields
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::field_type::FieldType;
use super::validation::ValidationRules;
use crate::domain::common::EntityKind;

/// Metadata for a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetadata {
    /// JSON key and form field name
    pub name: &'static str,
    pub field_type: FieldType,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
    /// Entity kind listed by the select (for AggregateRef / AggregateRefList)
    pub ref_entity: Option<EntityKind>,
}

impl FieldMetadata {
    pub fn is_multi(&self) -> bool {
        self.field_type == FieldType::AggregateRefList
    }

    pub fn is_textarea(&self) -> bool {
        self.ui.widget == Some("textarea")
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub widget: Option<&'static str>,
}
