//! Core types for API contract definitions.
//!
//! - [`Endpoint`] - A single API operation (method, path, payload shapes)
//! - [`Method`] - HTTP method enumeration
//! - [`Parameter`] / [`ParameterKind`] - Inputs to an endpoint
//! - [`ErrorResponse`] / [`ErrorStatus`] - Declared failure payloads

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::schema::Schema;

/// HTTP methods an endpoint can declare.
///
/// Displays and serializes in lowercase, which is also the form used in
/// duplicate-endpoint keys. Parsing is case-insensitive.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use blueprint_define::Method;
///
/// assert_eq!(Method::from_str("GET").unwrap(), Method::Get);
/// assert_eq!(Method::from_str("patch").unwrap(), Method::Patch);
/// assert_eq!(Method::Delete.to_string(), "delete");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

/// Where a parameter is carried in the request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum ParameterKind {
    /// A `:name` segment of the endpoint path.
    Path,
    Query,
    Header,
    /// The request body.
    Body,
}

/// One input of an endpoint.
///
/// ## Examples
///
/// ```
/// use blueprint_define::{Parameter, ParameterKind, Schema};
///
/// let limit = Parameter::new("limit", ParameterKind::Query, Schema::integer())
///     .with_description("Maximum number of items to return");
///
/// assert_eq!(limit.kind, ParameterKind::Query);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter<S = Schema> {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub schema: S,
}

impl<S> Parameter<S> {
    /// Creates a parameter with no description.
    pub fn new(name: impl Into<String>, kind: ParameterKind, schema: S) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            schema,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The status condition an [`ErrorResponse`] applies to.
///
/// Serialized as the bare status number, or the string `"default"` for the
/// catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StatusRepr", into = "StatusRepr")]
pub enum ErrorStatus {
    Code(u16),
    /// Any status without a more specific entry.
    Default,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StatusRepr {
    Code(u16),
    Keyword(String),
}

impl From<ErrorStatus> for StatusRepr {
    fn from(status: ErrorStatus) -> Self {
        match status {
            ErrorStatus::Code(code) => StatusRepr::Code(code),
            ErrorStatus::Default => StatusRepr::Keyword("default".to_string()),
        }
    }
}

impl TryFrom<StatusRepr> for ErrorStatus {
    type Error = String;

    fn try_from(repr: StatusRepr) -> Result<Self, Self::Error> {
        match repr {
            StatusRepr::Code(code) => Ok(ErrorStatus::Code(code)),
            StatusRepr::Keyword(word) if word == "default" => Ok(ErrorStatus::Default),
            StatusRepr::Keyword(word) => Err(format!(
                "invalid error status '{word}': expected a status code or \"default\""
            )),
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorStatus::Code(code) => write!(f, "{code}"),
            ErrorStatus::Default => f.write_str("default"),
        }
    }
}

/// A failure payload an endpoint may return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse<S = Schema> {
    pub status: ErrorStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub schema: S,
}

impl<S> ErrorResponse<S> {
    /// Creates an error response with no description.
    pub fn new(status: ErrorStatus, schema: S) -> Self {
        Self {
            status,
            description: None,
            schema,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A single API endpoint description.
///
/// Within one API definition the `(method, path)` pair must be unique; see
/// [`check_api`](crate::check_api). The alias is not checked for uniqueness.
///
/// ## Path Parameters
///
/// Paths mark parameters with a leading colon: `/users/:id`.
///
/// ## Examples
///
/// ```
/// use blueprint_define::{Endpoint, ErrorResponse, ErrorStatus, Method, Parameter, ParameterKind, Schema};
///
/// let endpoint = Endpoint::new(Method::Get, "/users/:id", Schema::any())
///     .with_alias("getUser")
///     .with_description("Retrieve a user by ID")
///     .with_parameter(Parameter::new("expand", ParameterKind::Query, Schema::boolean()))
///     .with_error(ErrorResponse::new(ErrorStatus::Code(404), Schema::string()));
///
/// assert_eq!(endpoint.key(), "get /users/:id");
/// assert_eq!(endpoint.path_params(), vec!["id"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "S: Deserialize<'de>"))]
pub struct Endpoint<S = Schema> {
    pub method: Method,
    pub path: String,
    /// Human-friendly identifier, typically used as a client method name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter<S>>,
    /// Shape of the success payload.
    pub response: S,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorResponse<S>>,
}

impl<S> Endpoint<S> {
    /// Creates an endpoint with no alias, description, parameters or errors.
    pub fn new(method: Method, path: impl Into<String>, response: S) -> Self {
        Self {
            method,
            path: path.into(),
            alias: None,
            description: None,
            parameters: Vec::new(),
            response,
            errors: Vec::new(),
        }
    }

    /// Sets the alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter<S>) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Appends an error response.
    #[must_use]
    pub fn with_error(mut self, error: ErrorResponse<S>) -> Self {
        self.errors.push(error);
        self
    }

    /// The canonical `"{method} {path}"` key used for duplicate detection.
    pub fn key(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    /// Names of the `:param` segments in the path, in order.
    pub fn path_params(&self) -> Vec<&str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix(':'))
            .filter(|name| !name.is_empty())
            .collect()
    }
}
