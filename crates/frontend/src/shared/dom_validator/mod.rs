pub mod validator;

pub use validator::{expected_ids, missing_ids, validate_page, ExpectedId, ValidationReport};
