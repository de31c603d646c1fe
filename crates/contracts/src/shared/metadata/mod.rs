//! Declarative form metadata for entity kinds
//!
//! Each entity kind declares its form fields as static [`FieldMetadata`]
//! slices. The same schema drives both the rendered inputs and the JSON
//! payload sent on create and update.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::common::EntityKind;
//! use contracts::shared::metadata::{build_payload, FormMode, FormValues};
//!
//! let mut values = FormValues::default();
//! values.set_text("name", "Фабрика 1");
//! let payload = build_payload(EntityKind::Factories.fields(), &values, FormMode::Create);
//! ```

mod field_type;
mod form_values;
mod payload;
mod types;
mod validation;

pub use field_type::FieldType;
pub use form_values::{FieldInput, FormValues};
pub use payload::{build_payload, FormMode};
pub use types::{FieldMetadata, FieldUiMetadata};
pub use validation::ValidationRules;
