//! Form definitions backing the admin routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod content;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("content is empty after sanitizing")]
    EmptyContent,
}
