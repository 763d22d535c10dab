//! Error types for API contract validation.

use thiserror::Error;

/// Two endpoints in one API definition share the same method and path.
///
/// The `key` is the canonical `"{method} {path}"` string of the colliding
/// pair, with the method in lowercase (e.g. `"get /users/:id"`).
///
/// ## Examples
///
/// ```
/// use blueprint_define::DuplicateEndpointError;
///
/// let err = DuplicateEndpointError::new("get /a");
/// assert_eq!(err.key(), "get /a");
/// assert_eq!(err.to_string(), "Duplicate endpoint: get /a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Duplicate endpoint: {key}")]
pub struct DuplicateEndpointError {
    key: String,
}

impl DuplicateEndpointError {
    /// Creates an error for the given `"{method} {path}"` key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The `"{method} {path}"` key that collided.
    pub fn key(&self) -> &str {
        &self.key
    }
}
