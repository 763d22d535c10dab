//! Blueprint Definition Library
//!
//! This crate provides types for declaring REST API contracts: lists of
//! endpoint descriptions (method, path, parameters, response shape, errors)
//! that are checked for duplicate `(method, path)` pairs before they are
//! handed to client or router generators. Nothing here performs a request.
//!
//! ## Core Types
//!
//! - [`Endpoint`] - A single API endpoint with method, path, and payload schemas
//! - [`Method`] - HTTP methods (get, post, put, ...)
//! - [`Parameter`] / [`ParameterKind`] - Path, query, header and body inputs
//! - [`ErrorResponse`] / [`ErrorStatus`] - Declared error payloads
//! - [`ApiDefinition`] - A validated, ordered list of endpoints
//! - [`SchemaCapability`] - What an endpoint needs from a payload schema
//! - [`Schema`] - The built-in JSON shape description
//!
//! ## Producing an API Definition
//!
//! Every constructor of [`ApiDefinition`] runs [`check_api`]:
//!
//! - [`as_api`] - validate a complete list
//! - [`api_builder`] / [`ApiBuilder`] - append endpoints one at a time
//! - [`generate_crud`] - expand a resource into six CRUD endpoints
//! - [`prefix_api`] / [`merge_apis`] - re-root and combine definitions
//!
//! ## Examples
//!
//! ```
//! use blueprint_define::prelude::*;
//!
//! let user = Schema::object(vec![
//!     Field::required("id", Schema::integer()),
//!     Field::required("name", Schema::string()),
//! ]);
//!
//! let api = api_builder(
//!     Endpoint::new(Method::Get, "/health", Schema::string()).with_alias("health"),
//! )
//! .add_endpoint(
//!     Endpoint::new(Method::Get, "/users/:id", user.clone())
//!         .with_alias("getUser")
//!         .with_error(ErrorResponse::new(ErrorStatus::Code(404), Schema::string())),
//! )
//! .build()
//! .unwrap();
//!
//! assert_eq!(api.len(), 2);
//!
//! let crud = generate_crud("user", user).unwrap();
//! assert_eq!(crud.endpoints()[2].alias.as_deref(), Some("createUser"));
//! ```

pub mod api;
pub mod builder;
pub mod compose;
pub mod crud;
pub mod errors;
pub mod prelude;
pub mod schema;
pub mod types;
pub mod validation;

// Re-export main types at crate root
pub use api::{ApiDefinition, as_api, as_endpoint, as_errors, as_parameters};
pub use builder::{ApiBuilder, ParametersBuilder, api_builder, parameters_builder};
pub use compose::{merge_apis, prefix_api};
pub use crud::{BODY_PARAMETER, capitalize, generate_crud};
pub use errors::DuplicateEndpointError;
pub use schema::{Field, Schema, SchemaCapability, SchemaViolation};
pub use types::{Endpoint, ErrorResponse, ErrorStatus, Method, Parameter, ParameterKind};
pub use validation::check_api;
