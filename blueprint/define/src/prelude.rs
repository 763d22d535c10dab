//! Convenient re-exports for declaring API contracts.
//!
//! ```
//! use blueprint_define::prelude::*;
//!
//! let api = as_api(vec![
//!     Endpoint::new(Method::Get, "/items", Schema::any().array()),
//!     Endpoint::new(Method::Post, "/items", Schema::any())
//!         .with_parameter(Parameter::new("body", ParameterKind::Body, Schema::any())),
//! ])
//! .unwrap();
//!
//! assert_eq!(api.len(), 2);
//! ```

pub use crate::api::{ApiDefinition, as_api, as_endpoint, as_errors, as_parameters};
pub use crate::builder::{ApiBuilder, ParametersBuilder, api_builder, parameters_builder};
pub use crate::compose::{merge_apis, prefix_api};
pub use crate::crud::generate_crud;
pub use crate::errors::DuplicateEndpointError;
pub use crate::schema::{Field, Schema, SchemaCapability};
pub use crate::types::{Endpoint, ErrorResponse, ErrorStatus, Method, Parameter, ParameterKind};
pub use crate::validation::check_api;
