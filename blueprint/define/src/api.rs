//! Validated API definitions and the declaration helpers that produce them.

use serde::Serialize;

use crate::errors::DuplicateEndpointError;
use crate::types::{Endpoint, ErrorResponse, Method, Parameter};
use crate::validation::check_api;

/// An ordered collection of endpoints with unique `(method, path)` pairs.
///
/// The only way to obtain one is through a validating constructor
/// ([`as_api`], [`ApiBuilder::build`](crate::ApiBuilder::build),
/// [`generate_crud`](crate::generate_crud), [`prefix_api`](crate::prefix_api)
/// or [`merge_apis`](crate::merge_apis)), and it offers no way to modify the
/// endpoints afterwards.
///
/// ## Examples
///
/// ```
/// use blueprint_define::{as_api, Endpoint, Method, Schema};
///
/// let api = as_api(vec![
///     Endpoint::new(Method::Get, "/health", Schema::string()).with_alias("health"),
/// ])
/// .unwrap();
///
/// assert_eq!(api.len(), 1);
/// assert!(api.find(Method::Get, "/health").is_some());
/// assert!(api.find_by_alias("health").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ApiDefinition<S> {
    endpoints: Vec<Endpoint<S>>,
}

impl<S> ApiDefinition<S> {
    /// The endpoints in declaration order.
    pub fn endpoints(&self) -> &[Endpoint<S>] {
        &self.endpoints
    }

    /// Iterates over the endpoints in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Endpoint<S>> {
        self.endpoints.iter()
    }

    /// Number of endpoints.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// True for a definition built from an empty list.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Consumes the definition, returning its endpoints in order.
    pub fn into_endpoints(self) -> Vec<Endpoint<S>> {
        self.endpoints
    }

    /// Looks up the endpoint for a method and path.
    pub fn find(&self, method: Method, path: &str) -> Option<&Endpoint<S>> {
        self.endpoints
            .iter()
            .find(|endpoint| endpoint.method == method && endpoint.path == path)
    }

    /// Returns the first endpoint carrying `alias`.
    pub fn find_by_alias(&self, alias: &str) -> Option<&Endpoint<S>> {
        self.endpoints
            .iter()
            .find(|endpoint| endpoint.alias.as_deref() == Some(alias))
    }
}

impl<'a, S> IntoIterator for &'a ApiDefinition<S> {
    type Item = &'a Endpoint<S>;
    type IntoIter = std::slice::Iter<'a, Endpoint<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.endpoints.iter()
    }
}

impl<S> IntoIterator for ApiDefinition<S> {
    type Item = Endpoint<S>;
    type IntoIter = std::vec::IntoIter<Endpoint<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.endpoints.into_iter()
    }
}

/// Validates `endpoints` and returns them, unchanged, as an [`ApiDefinition`].
///
/// ## Errors
///
/// Returns [`DuplicateEndpointError`] if two endpoints share method and path.
pub fn as_api<S>(endpoints: Vec<Endpoint<S>>) -> Result<ApiDefinition<S>, DuplicateEndpointError> {
    check_api(&endpoints)?;
    Ok(ApiDefinition { endpoints })
}

/// Declares a single endpoint. Performs no validation.
pub fn as_endpoint<S>(endpoint: Endpoint<S>) -> Endpoint<S> {
    endpoint
}

/// Declares a parameter list. Performs no validation.
pub fn as_parameters<S>(parameters: Vec<Parameter<S>>) -> Vec<Parameter<S>> {
    parameters
}

/// Declares an error list. Performs no validation.
pub fn as_errors<S>(errors: Vec<ErrorResponse<S>>) -> Vec<ErrorResponse<S>> {
    errors
}
