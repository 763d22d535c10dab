//! Incremental, immutable builders for endpoints lists and parameter lists.
//!
//! Both builders have value semantics: every `add_*` call takes `&self` and
//! returns a new builder, so an intermediate state can be kept and branched
//! into several different definitions.

use tracing::trace;

use crate::api::{ApiDefinition, as_api};
use crate::errors::DuplicateEndpointError;
use crate::schema::Schema;
use crate::types::{Endpoint, Parameter, ParameterKind};

/// Accumulates endpoints one at a time and validates them on [`build`](Self::build).
///
/// ## Examples
///
/// ```
/// use blueprint_define::{api_builder, Endpoint, Method, Schema};
///
/// let base = api_builder(Endpoint::new(Method::Get, "/users", Schema::any()));
///
/// // Branch two definitions from the same intermediate state
/// let with_post = base.add_endpoint(Endpoint::new(Method::Post, "/users", Schema::any()));
/// let with_dup = base.add_endpoint(Endpoint::new(Method::Get, "/users", Schema::any()));
///
/// assert_eq!(base.endpoints().len(), 1);
/// assert_eq!(with_post.build().unwrap().len(), 2);
/// assert_eq!(with_dup.build().unwrap_err().key(), "get /users");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiBuilder<S = Schema> {
    endpoints: Vec<Endpoint<S>>,
}

impl<S: Clone> ApiBuilder<S> {
    /// Starts a builder holding a single endpoint.
    pub fn new(initial: Endpoint<S>) -> Self {
        Self {
            endpoints: vec![initial],
        }
    }

    /// Returns a new builder with `endpoint` appended. `self` is unchanged.
    #[must_use]
    pub fn add_endpoint(&self, endpoint: Endpoint<S>) -> Self {
        trace!(key = %endpoint.key(), position = self.endpoints.len(), "adding endpoint");
        let mut endpoints = Vec::with_capacity(self.endpoints.len() + 1);
        endpoints.extend_from_slice(&self.endpoints);
        endpoints.push(endpoint);
        Self { endpoints }
    }

    /// Endpoints accumulated so far, in insertion order.
    pub fn endpoints(&self) -> &[Endpoint<S>] {
        &self.endpoints
    }

    /// Validates the accumulated endpoints and returns them as a definition.
    ///
    /// ## Errors
    ///
    /// Returns [`DuplicateEndpointError`] if two endpoints share method and path.
    pub fn build(&self) -> Result<ApiDefinition<S>, DuplicateEndpointError> {
        as_api(self.endpoints.clone())
    }
}

/// Starts an [`ApiBuilder`] from its first endpoint.
pub fn api_builder<S: Clone>(initial: Endpoint<S>) -> ApiBuilder<S> {
    ApiBuilder::new(initial)
}

/// Accumulates parameter descriptions with the same value semantics as
/// [`ApiBuilder`]. No validation is performed.
///
/// ## Examples
///
/// ```
/// use blueprint_define::{parameters_builder, ParameterKind, Schema};
///
/// let params = parameters_builder()
///     .add_path("id", Schema::integer())
///     .add_query("expand", Schema::boolean())
///     .build();
///
/// assert_eq!(params.len(), 2);
/// assert_eq!(params[0].kind, ParameterKind::Path);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParametersBuilder<S = Schema> {
    parameters: Vec<Parameter<S>>,
}

impl<S: Clone> Default for ParametersBuilder<S> {
    fn default() -> Self {
        Self {
            parameters: Vec::new(),
        }
    }
}

impl<S: Clone> ParametersBuilder<S> {
    /// Starts an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new builder with `parameter` appended. `self` is unchanged.
    #[must_use]
    pub fn add_parameter(&self, parameter: Parameter<S>) -> Self {
        let mut parameters = self.parameters.clone();
        parameters.push(parameter);
        Self { parameters }
    }

    /// Appends a path parameter.
    #[must_use]
    pub fn add_path(&self, name: impl Into<String>, schema: S) -> Self {
        self.add_parameter(Parameter::new(name, ParameterKind::Path, schema))
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn add_query(&self, name: impl Into<String>, schema: S) -> Self {
        self.add_parameter(Parameter::new(name, ParameterKind::Query, schema))
    }

    /// Appends a header parameter.
    #[must_use]
    pub fn add_header(&self, name: impl Into<String>, schema: S) -> Self {
        self.add_parameter(Parameter::new(name, ParameterKind::Header, schema))
    }

    /// Appends a body parameter.
    #[must_use]
    pub fn add_body(&self, name: impl Into<String>, schema: S) -> Self {
        self.add_parameter(Parameter::new(name, ParameterKind::Body, schema))
    }

    /// Returns the accumulated parameters in insertion order.
    pub fn build(&self) -> Vec<Parameter<S>> {
        self.parameters.clone()
    }
}

/// Starts an empty [`ParametersBuilder`].
pub fn parameters_builder<S: Clone>() -> ParametersBuilder<S> {
    ParametersBuilder::new()
}
