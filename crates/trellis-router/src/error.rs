//! Error types for registration.

use thiserror::Error;

use crate::table::MAX_PARAMS;
use trellis_core::CompileError;

/// Errors raised while registering a route.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// More positional parameters were declared than the registration
    /// grammar supports.
    #[error("template {template:?} declares {declared} parameters; at most {MAX_PARAMS} are supported")]
    TooManyParameters {
        /// The raw template.
        template: String,
        /// Parameter kinds supplied.
        declared: usize,
    },

    /// The template failed to normalize.
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Result type alias for registration operations.
pub type Result<T> = std::result::Result<T, RegisterError>;
