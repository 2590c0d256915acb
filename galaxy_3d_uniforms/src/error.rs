//! Error types for Galaxy3D uniforms
//!
//! Lookups and flushes report expected failures (missing name, wrong kind,
//! rejected by the shader) through `Option`/`bool` first. These variants are
//! what the `try_*` accessors and `ShaderTarget` implementations return when
//! the caller wants the reason.

use std::fmt;
use crate::uniform::UniformType;

/// Result type for Galaxy3D uniform operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D uniform errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// No uniform is stored under this name
    UniformNotFound(String),

    /// A uniform exists under this name but holds another kind
    UniformTypeMismatch {
        name: String,
        expected: UniformType,
        found: UniformType,
    },

    /// The shader target refused the named uniform (e.g. not active in the program)
    TargetRejected(String),

    /// A flat buffer does not match the element count it was given with
    InvalidLength {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Backend-specific error reported by a shader target
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UniformNotFound(name) => write!(f, "Uniform not found: '{}'", name),
            Error::UniformTypeMismatch { name, expected, found } => write!(
                f,
                "Uniform type mismatch: '{}' is {}, requested {}",
                name, found, expected
            ),
            Error::TargetRejected(name) => write!(f, "Shader target rejected uniform '{}'", name),
            Error::InvalidLength { name, expected, actual } => write!(
                f,
                "Invalid length for uniform '{}': expected {} values, got {}",
                name, expected, actual
            ),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
