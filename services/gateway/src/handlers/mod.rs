pub mod queue;
pub mod stats;

use crate::error::AppError;

/// Unwrap a required body field
fn required(field: Option<String>, name: &str) -> Result<String, AppError> {
    field
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid request: missing {name}")))
}
