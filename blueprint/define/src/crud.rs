//! CRUD endpoint templates.
//!
//! [`generate_crud`] expands a resource name and its schema into the six
//! standard endpoints, in this order:
//!
//! | method | path            | alias              | body           | response        |
//! |--------|-----------------|--------------------|----------------|-----------------|
//! | get    | `/{r}s`         | `get{R}s`          | -              | array of schema |
//! | get    | `/{r}s/:id`     | `get{R}`           | -              | schema          |
//! | post   | `/{r}s`         | `create{R}`        | partial schema | schema          |
//! | put    | `/{r}s/:id`     | `update{R}`        | full schema    | schema          |
//! | patch  | `/{r}s/:id`     | `patch{R}`         | partial schema | schema          |
//! | delete | `/{r}s/:id`     | `delete{R}`        | -              | schema          |
//!
//! `{R}` is the resource name with its first character ASCII-uppercased. The
//! plural is always the literal resource name followed by `s`.

use tracing::debug;

use crate::api::{ApiDefinition, as_api};
use crate::errors::DuplicateEndpointError;
use crate::schema::SchemaCapability;
use crate::types::{Endpoint, Method, Parameter, ParameterKind};

/// Name of the body parameter on create, update and patch endpoints.
pub const BODY_PARAMETER: &str = "body";

/// Generates the six CRUD endpoints for `resource`.
///
/// ## Examples
///
/// ```
/// use blueprint_define::{generate_crud, Field, Method, Schema, SchemaCapability};
///
/// let widget = Schema::object(vec![Field::required("id", Schema::integer())]);
/// let api = generate_crud("widget", widget.clone()).unwrap();
///
/// let aliases: Vec<_> = api.iter().filter_map(|e| e.alias.as_deref()).collect();
/// assert_eq!(
///     aliases,
///     ["getWidgets", "getWidget", "createWidget", "updateWidget", "patchWidget", "deleteWidget"]
/// );
///
/// let list = api.find(Method::Get, "/widgets").unwrap();
/// assert_eq!(list.response, widget.array());
/// ```
///
/// ## Errors
///
/// The six `(method, path)` pairs are distinct for every resource name, so
/// the validation step only fails if that internal guarantee is broken.
pub fn generate_crud<S: SchemaCapability>(
    resource: &str,
    schema: S,
) -> Result<ApiDefinition<S>, DuplicateEndpointError> {
    let name = capitalize(resource);
    let collection = format!("/{resource}s");
    let item = format!("{collection}/:id");
    let partial = schema.partial();

    let body = |schema: S| Parameter::new(BODY_PARAMETER, ParameterKind::Body, schema);

    let endpoints = vec![
        Endpoint::new(Method::Get, collection.as_str(), schema.array())
            .with_alias(format!("get{name}s"))
            .with_description(format!("Get all {resource}s")),
        Endpoint::new(Method::Get, item.as_str(), schema.clone())
            .with_alias(format!("get{name}"))
            .with_description(format!("Get a {resource}")),
        Endpoint::new(Method::Post, collection.as_str(), schema.clone())
            .with_alias(format!("create{name}"))
            .with_description(format!("Create a {resource}"))
            .with_parameter(body(partial.clone())),
        Endpoint::new(Method::Put, item.as_str(), schema.clone())
            .with_alias(format!("update{name}"))
            .with_description(format!("Update a {resource}"))
            .with_parameter(body(schema.clone())),
        Endpoint::new(Method::Patch, item.as_str(), schema.clone())
            .with_alias(format!("patch{name}"))
            .with_description(format!("Patch a {resource}"))
            .with_parameter(body(partial)),
        Endpoint::new(Method::Delete, item.as_str(), schema)
            .with_alias(format!("delete{name}"))
            .with_description(format!("Delete a {resource}")),
    ];

    debug!(
        resource,
        schema = %endpoints[1].response.describe(),
        "generated CRUD endpoints"
    );

    as_api(endpoints)
}

/// Uppercases the first character if it is ASCII; the rest is unchanged.
///
/// ```
/// use blueprint_define::capitalize;
///
/// assert_eq!(capitalize("widget"), "Widget");
/// assert_eq!(capitalize("éclair"), "éclair");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, Schema};
    use tracing_test::traced_test;

    fn user() -> Schema {
        Schema::object(vec![
            Field::required("id", Schema::integer()),
            Field::required("name", Schema::string()),
        ])
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("user"), "User");
        assert_eq!(capitalize("User"), "User");
        assert_eq!(capitalize("bLOG"), "BLOG");
        assert_eq!(capitalize("1st"), "1st");
    }

    #[test]
    fn generates_six_endpoints_in_fixed_order() {
        let api = generate_crud("widget", user()).unwrap();
        let keys: Vec<_> = api.iter().map(Endpoint::key).collect();
        assert_eq!(
            keys,
            vec![
                "get /widgets",
                "get /widgets/:id",
                "post /widgets",
                "put /widgets/:id",
                "patch /widgets/:id",
                "delete /widgets/:id",
            ]
        );
    }

    #[test]
    fn body_schemas_follow_template() {
        let schema = user();
        let api = generate_crud("user", schema.clone()).unwrap();
        let endpoints = api.endpoints();

        assert!(endpoints[0].parameters.is_empty());
        assert!(endpoints[1].parameters.is_empty());
        assert!(endpoints[5].parameters.is_empty());

        assert_eq!(endpoints[2].parameters[0].schema, schema.partial());
        assert_eq!(endpoints[3].parameters[0].schema, schema);
        assert_eq!(endpoints[4].parameters[0].schema, schema.partial());

        for endpoint in &endpoints[2..5] {
            assert_eq!(endpoint.parameters.len(), 1);
            assert_eq!(endpoint.parameters[0].name, BODY_PARAMETER);
            assert_eq!(endpoint.parameters[0].kind, ParameterKind::Body);
        }
    }

    #[test]
    fn responses_follow_template() {
        let schema = user();
        let api = generate_crud("user", schema.clone()).unwrap();
        assert_eq!(api.endpoints()[0].response, schema.array());
        for endpoint in &api.endpoints()[1..] {
            assert_eq!(endpoint.response, schema);
        }
    }

    #[test]
    fn irregular_plural_gets_literal_suffix() {
        let api = generate_crud("person", Schema::any()).unwrap();
        assert_eq!(api.endpoints()[0].path, "/persons");
        assert_eq!(api.endpoints()[0].alias.as_deref(), Some("getPersons"));
    }

    #[test]
    fn descriptions_are_generated() {
        let api = generate_crud("post", Schema::any()).unwrap();
        let descriptions: Vec<_> = api
            .iter()
            .filter_map(|e| e.description.as_deref())
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "Get all posts",
                "Get a post",
                "Create a post",
                "Update a post",
                "Patch a post",
                "Delete a post",
            ]
        );
    }

    #[test]
    #[traced_test]
    fn generation_is_logged() {
        let _ = generate_crud("order", Schema::any());
        assert!(logs_contain("generated CRUD endpoints"));
    }
}
