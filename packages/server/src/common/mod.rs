// Common types and utilities shared across the application

pub mod entity_ids;
pub mod error;

pub use entity_ids::*;
pub use error::{ApiError, ApiResult};
