//! Field type enumeration for form metadata

/// Category of form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,             // free text input or textarea
    Number,           // numeric input, sent as f64
    AggregateRef,     // single select of another entity kind (`*_id`)
    AggregateRefList, // multi select of another entity kind (`*_ids`)
}

