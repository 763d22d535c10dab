//! Integration tests for CRUD endpoint generation.
//!
//! These tests verify that:
//! - The six generated endpoints match the fixed template for any resource
//! - Body and response schemas are derived through the schema capability
//! - Generated definitions compose with hand-written endpoints
//! - Schema types other than the built-in [`Schema`] work end to end

use std::fmt;

use blueprint_define::prelude::*;
use serde_json::{Value, json};

fn user_schema() -> Schema {
    Schema::object(vec![
        Field::required("id", Schema::integer()),
        Field::required("name", Schema::string()),
        Field::optional("email", Schema::string()),
    ])
}

// =============================================================================
// Template shape
// =============================================================================

#[test]
fn user_list_endpoint_returns_array_of_users() {
    let api = generate_crud("user", user_schema()).unwrap();
    let list = &api.endpoints()[0];

    assert_eq!(list.method, Method::Get);
    assert_eq!(list.path, "/users");
    assert_eq!(list.alias.as_deref(), Some("getUsers"));
    assert_eq!(list.response, user_schema().array());
    assert!(list.parameters.is_empty());
}

#[test]
fn user_create_endpoint_takes_partial_body() {
    let api = generate_crud("user", user_schema()).unwrap();
    let create = &api.endpoints()[2];

    assert_eq!(create.method, Method::Post);
    assert_eq!(create.path, "/users");
    assert_eq!(create.alias.as_deref(), Some("createUser"));
    assert_eq!(create.response, user_schema());
    assert_eq!(
        create.parameters,
        vec![Parameter::new("body", ParameterKind::Body, user_schema().partial())]
    );
}

#[test]
fn widget_template_matches_table() {
    let api = generate_crud("widget", Schema::any()).unwrap();
    let rows: Vec<_> = api
        .iter()
        .map(|e| (e.method, e.path.as_str(), e.alias.as_deref().unwrap_or_default()))
        .collect();

    assert_eq!(
        rows,
        vec![
            (Method::Get, "/widgets", "getWidgets"),
            (Method::Get, "/widgets/:id", "getWidget"),
            (Method::Post, "/widgets", "createWidget"),
            (Method::Put, "/widgets/:id", "updateWidget"),
            (Method::Patch, "/widgets/:id", "patchWidget"),
            (Method::Delete, "/widgets/:id", "deleteWidget"),
        ]
    );
}

#[test]
fn generation_is_deterministic() {
    let first = generate_crud("widget", user_schema()).unwrap();
    let second = generate_crud("widget", user_schema()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn item_endpoints_expose_id_path_param() {
    let api = generate_crud("order", Schema::any()).unwrap();
    for endpoint in api.iter().filter(|e| e.path.ends_with(":id")) {
        assert_eq!(endpoint.path_params(), vec!["id"]);
    }
}

// =============================================================================
// Partial bodies validate the way clients will send them
// =============================================================================

#[test]
fn patch_body_accepts_subset_while_put_body_requires_all() {
    let api = generate_crud("user", user_schema()).unwrap();
    let put = api.find(Method::Put, "/users/:id").unwrap();
    let patch = api.find(Method::Patch, "/users/:id").unwrap();

    let subset = json!({ "name": "Grace" });
    assert!(patch.parameters[0].schema.validate(&subset).is_ok());
    assert!(put.parameters[0].schema.validate(&subset).is_err());

    let full = json!({ "id": 1, "name": "Grace" });
    assert!(put.parameters[0].schema.validate(&full).is_ok());
}

#[test]
fn whole_float_ids_satisfy_integer_fields() {
    let api = generate_crud("user", user_schema()).unwrap();
    let put = api.find(Method::Put, "/users/:id").unwrap();

    let body = json!({ "id": 1.0, "name": "Grace" });
    assert!(put.parameters[0].schema.validate(&body).is_ok());

    let err = put.parameters[0]
        .schema
        .validate(&json!({ "id": 1.5, "name": "Grace" }))
        .unwrap_err();
    assert_eq!(err.path, "/id");
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn crud_output_extends_through_builder() {
    let crud = generate_crud("user", user_schema()).unwrap();
    let mut endpoints = crud.into_endpoints().into_iter();
    let first = endpoints.next().unwrap();

    let builder = endpoints.fold(api_builder(first), |builder, endpoint| {
        builder.add_endpoint(endpoint)
    });
    let api = builder
        .add_endpoint(Endpoint::new(Method::Post, "/users/:id/avatar", Schema::any()))
        .build()
        .unwrap();
    assert_eq!(api.len(), 7);

    let err = builder
        .add_endpoint(Endpoint::new(Method::Delete, "/users/:id", Schema::any()))
        .build()
        .unwrap_err();
    assert_eq!(err.key(), "delete /users/:id");
}

#[test]
fn two_resources_merge_without_collision() {
    let api = merge_apis([
        ("", generate_crud("user", user_schema()).unwrap()),
        ("", generate_crud("post", Schema::any()).unwrap()),
    ])
    .unwrap();
    assert_eq!(api.len(), 12);
    assert!(api.find_by_alias("deletePost").is_some());
}

// =============================================================================
// Custom schema capability
// =============================================================================

/// A schema that only tracks a type name, the way a code generator might.
#[derive(Debug, Clone, PartialEq)]
struct TypeRef(String);

#[derive(Debug)]
struct Never;

impl fmt::Display for Never {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("never")
    }
}

impl std::error::Error for Never {}

impl SchemaCapability for TypeRef {
    type Error = Never;

    fn describe(&self) -> String {
        self.0.clone()
    }

    fn validate(&self, _value: &Value) -> Result<(), Never> {
        Ok(())
    }

    fn partial(&self) -> Self {
        TypeRef(format!("Partial<{}>", self.0))
    }

    fn array(&self) -> Self {
        TypeRef(format!("Vec<{}>", self.0))
    }
}

#[test]
fn custom_schema_flows_through_generator() {
    let api = generate_crud("user", TypeRef("User".into())).unwrap();
    let described: Vec<_> = api.iter().map(|e| e.response.describe()).collect();
    assert_eq!(described[0], "Vec<User>");
    assert!(described[1..].iter().all(|d| d == "User"));

    let create = api.find_by_alias("createUser").unwrap();
    assert_eq!(create.parameters[0].schema, TypeRef("Partial<User>".into()));
    let update = api.find_by_alias("updateUser").unwrap();
    assert_eq!(update.parameters[0].schema, TypeRef("User".into()));
}
