//! Duplicate endpoint detection.
//!
//! Every path that produces an [`ApiDefinition`](crate::ApiDefinition) goes
//! through [`check_api`]: direct assembly, the incremental builder, the CRUD
//! generator and the composition helpers.

use std::collections::HashSet;

use tracing::debug;

use crate::errors::DuplicateEndpointError;
use crate::types::Endpoint;

/// Checks that no two endpoints share both method and path.
///
/// Endpoints are scanned in order; the error names the key of the first
/// endpoint whose `(method, path)` was already seen earlier in the slice.
///
/// ## Examples
///
/// ```
/// use blueprint_define::{check_api, Endpoint, Method, Schema};
///
/// let api = vec![
///     Endpoint::new(Method::Get, "/users", Schema::any()),
///     Endpoint::new(Method::Post, "/users", Schema::any()),
/// ];
/// assert!(check_api(&api).is_ok());
///
/// let api = vec![
///     Endpoint::new(Method::Get, "/a", Schema::any()),
///     Endpoint::new(Method::Get, "/a", Schema::any()),
/// ];
/// assert_eq!(check_api(&api).unwrap_err().key(), "get /a");
/// ```
///
/// ## Errors
///
/// Returns [`DuplicateEndpointError`] on the first repeated `(method, path)`.
pub fn check_api<S>(api: &[Endpoint<S>]) -> Result<(), DuplicateEndpointError> {
    debug!(endpoints = api.len(), "checking API for duplicate endpoints");

    let mut seen = HashSet::with_capacity(api.len());
    for endpoint in api {
        let key = endpoint.key();
        if seen.contains(&key) {
            debug!(%key, "duplicate endpoint found");
            return Err(DuplicateEndpointError::new(key));
        }
        seen.insert(key);
    }

    Ok(())
}
