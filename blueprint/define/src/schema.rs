//! Schema capability for request, response and error payloads.
//!
//! Endpoint definitions never inspect payload shapes themselves. They carry a
//! value implementing [`SchemaCapability`], which knows how to describe a shape,
//! validate a JSON value against it, and derive the partial (all fields
//! optional) and array variants the CRUD generator needs.
//!
//! [`Schema`] is the built-in implementation: a JSON Schema document validated
//! with the `jsonschema` crate. Callers with their own schema library can
//! implement the trait for it and use that type everywhere instead.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use thiserror::Error;

/// The operations an endpoint definition needs from a payload schema.
///
/// ## Examples
///
/// ```
/// use blueprint_define::{Field, Schema, SchemaCapability};
/// use serde_json::json;
///
/// let user = Schema::object(vec![
///     Field::required("id", Schema::integer()),
///     Field::required("name", Schema::string()),
/// ]);
///
/// assert!(user.validate(&json!({ "id": 1, "name": "Ada" })).is_ok());
/// assert!(user.validate(&json!({ "name": "Ada" })).is_err());
///
/// // The partial variant accepts any subset of fields
/// assert!(user.partial().validate(&json!({ "name": "Ada" })).is_ok());
///
/// // The array variant validates a list of users
/// assert!(user.array().validate(&json!([{ "id": 1, "name": "Ada" }])).is_ok());
/// ```
pub trait SchemaCapability: Clone + Debug {
    /// Error produced when a value does not match the schema.
    type Error: std::error::Error;

    /// Human-readable description of the shape.
    fn describe(&self) -> String;

    /// Checks `value` against the shape.
    fn validate(&self, value: &Value) -> Result<(), Self::Error>;

    /// Derives a variant of this schema where every field is optional.
    fn partial(&self) -> Self;

    /// Derives a schema for a list of values of this shape.
    fn array(&self) -> Self;
}

/// A value did not match a [`Schema`], or the schema itself could not be
/// compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Schema violation at '{path}': {reason}")]
pub struct SchemaViolation {
    /// JSON pointer to the offending value; empty for the root.
    pub path: String,
    /// Message reported by the validator.
    pub reason: String,
}

/// A JSON Schema document.
///
/// Serializes as the bare schema document, so definition files embed plain
/// JSON Schema:
///
/// ```
/// use blueprint_define::{Field, Schema};
///
/// use serde_json::json;
///
/// let schema = Schema::object(vec![Field::required("id", Schema::integer())]);
/// assert_eq!(
///     serde_json::to_value(&schema).unwrap(),
///     json!({
///         "type": "object",
///         "properties": { "id": { "type": "integer" } },
///         "required": ["id"]
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(Value);

/// A named property of an object schema, used with [`Schema::object`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub schema: Schema,
    /// Whether the property may be absent.
    pub optional: bool,
}

impl Field {
    /// A property listed under `required`.
    pub fn required(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            optional: false,
        }
    }

    /// A property that may be absent.
    pub fn optional(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            optional: true,
        }
    }
}

impl Schema {
    /// Wraps an existing JSON Schema document.
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    /// The empty schema, which accepts any value.
    pub fn any() -> Self {
        Self(json!({}))
    }

    pub fn null() -> Self {
        Self(json!({ "type": "null" }))
    }

    pub fn boolean() -> Self {
        Self(json!({ "type": "boolean" }))
    }

    /// Numbers with no fractional part (`1` and `1.0` both match).
    pub fn integer() -> Self {
        Self(json!({ "type": "integer" }))
    }

    pub fn number() -> Self {
        Self(json!({ "type": "number" }))
    }

    pub fn string() -> Self {
        Self(json!({ "type": "string" }))
    }

    /// An object schema with the given properties. Properties that are not
    /// listed are allowed.
    pub fn object(fields: Vec<Field>) -> Self {
        let required: Vec<Value> = fields
            .iter()
            .filter(|field| !field.optional)
            .map(|field| Value::String(field.name.clone()))
            .collect();
        let properties: Map<String, Value> = fields
            .into_iter()
            .map(|field| (field.name, field.schema.0))
            .collect();

        let mut document = Map::new();
        document.insert("type".to_string(), json!("object"));
        document.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            document.insert("required".to_string(), Value::Array(required));
        }
        Self(Value::Object(document))
    }

    /// The underlying JSON Schema document.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Schema {
    fn from(document: Value) -> Self {
        Self(document)
    }
}

impl SchemaCapability for Schema {
    type Error = SchemaViolation;

    /// The schema document as compact JSON.
    fn describe(&self) -> String {
        self.0.to_string()
    }

    fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        let validator = jsonschema::validator_for(&self.0).map_err(|err| SchemaViolation {
            path: String::new(),
            reason: format!("invalid schema: {err}"),
        })?;

        validator.validate(value).map_err(|err| SchemaViolation {
            path: err.instance_path.to_string(),
            reason: err.to_string(),
        })
    }

    /// Drops the top-level `required` keyword. Nested objects keep their own
    /// requirements.
    fn partial(&self) -> Self {
        let mut document = self.0.clone();
        if let Value::Object(map) = &mut document {
            map.remove("required");
        }
        Self(document)
    }

    fn array(&self) -> Self {
        Self(json!({ "type": "array", "items": self.0 }))
    }
}
