//! Compile-time error types.

use thiserror::Error;

use crate::route::RouteId;

/// Errors raised while normalizing templates or compiling the matcher.
///
/// All variants are fatal to the build step that raised them: a matcher is
/// never swapped in over a failed compile.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The template string is empty.
    #[error("empty URI template")]
    EmptyTemplate,

    /// A `{...}` placeholder body was not the anonymous `?`.
    #[error("invalid placeholder {body:?} in template {template:?}: placeholders must be `{{?}}`")]
    TemplateSyntax {
        /// The raw template being scanned.
        template: String,
        /// The offending placeholder body.
        body: String,
    },

    /// The number of `{?}` placeholders does not match the number of
    /// declared parameter kinds.
    #[error(
        "template {template:?} has {placeholders} placeholder(s) but {kinds} parameter kind(s) were declared"
    )]
    ParameterCountMismatch {
        /// The raw template being scanned.
        template: String,
        /// Placeholders found in the template.
        placeholders: usize,
        /// Parameter kinds supplied by the registration.
        kinds: usize,
    },

    /// Two registrations produced byte-identical prepared templates.
    #[error("duplicate registration: routes {first} and {second} both prepare to {prepared:?}")]
    DuplicateRegistration {
        /// The earlier registration.
        first: RouteId,
        /// The later registration.
        second: RouteId,
        /// The shared canonical form.
        prepared: String,
    },
}

/// Result type alias for compile-time operations.
pub type Result<T> = std::result::Result<T, CompileError>;
