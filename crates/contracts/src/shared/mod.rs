pub mod error_detail;
pub mod metadata;
pub mod query;
