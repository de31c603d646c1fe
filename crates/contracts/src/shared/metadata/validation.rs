//! Validation rules for form fields

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
    /// Blank value is sent as `null`, in both create and update
    pub nullable: bool,
}

impl ValidationRules {
    /// Create empty validation rules (optional, omitted when blank)
    pub const fn none() -> Self {
        Self {
            required: false,
            nullable: false,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            nullable: false,
        }
    }

    /// Optional field that can be cleared explicitly
    pub const fn nullable() -> Self {
        Self {
            required: false,
            nullable: true,
        }
    }
}
