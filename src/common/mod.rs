// Common module - shared types and utilities across all modules

pub mod error;
pub mod helpers;
pub mod migrations;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::ApiError;
pub use helpers::{now_timestamp, safe_email_log};
pub use state::AppState;
pub use validation::{ValidationError, ValidationResult, Validator};
