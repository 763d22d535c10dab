//! Re-rooting and combining API definitions.

use tracing::debug;

use crate::api::{ApiDefinition, as_api};
use crate::errors::DuplicateEndpointError;

/// Prepends `prefix` to every endpoint path.
///
/// A path of exactly `/` becomes the prefix itself, so `/` under `/v1` is
/// `/v1` rather than `/v1/`.
///
/// ## Examples
///
/// ```
/// use blueprint_define::{as_api, prefix_api, Endpoint, Method, Schema};
///
/// let api = as_api(vec![
///     Endpoint::new(Method::Get, "/", Schema::any()),
///     Endpoint::new(Method::Get, "/:id", Schema::any()),
/// ])
/// .unwrap();
///
/// let api = prefix_api("/users", api).unwrap();
/// let paths: Vec<_> = api.iter().map(|e| e.path.as_str()).collect();
/// assert_eq!(paths, ["/users", "/users/:id"]);
/// ```
///
/// ## Errors
///
/// Returns [`DuplicateEndpointError`] if re-rooting makes two paths equal
/// (only possible when the input contains both `/` and the empty path).
pub fn prefix_api<S>(
    prefix: &str,
    api: ApiDefinition<S>,
) -> Result<ApiDefinition<S>, DuplicateEndpointError> {
    let endpoints = api
        .into_iter()
        .map(|mut endpoint| {
            endpoint.path = join_path(prefix, &endpoint.path);
            endpoint
        })
        .collect();
    as_api(endpoints)
}

/// Prefixes each definition by its key and concatenates them in order.
///
/// ## Examples
///
/// ```
/// use blueprint_define::{generate_crud, merge_apis, Method, Schema};
///
/// let api = merge_apis([
///     ("/v1", generate_crud("user", Schema::any()).unwrap()),
///     ("/v2", generate_crud("user", Schema::any()).unwrap()),
/// ])
/// .unwrap();
///
/// assert_eq!(api.len(), 12);
/// assert!(api.find(Method::Get, "/v2/users/:id").is_some());
/// ```
///
/// ## Errors
///
/// Returns [`DuplicateEndpointError`] if any two resulting endpoints share
/// method and path.
pub fn merge_apis<'a, S>(
    parts: impl IntoIterator<Item = (&'a str, ApiDefinition<S>)>,
) -> Result<ApiDefinition<S>, DuplicateEndpointError> {
    let mut endpoints = Vec::new();
    for (prefix, api) in parts {
        debug!(prefix, endpoints = api.len(), "merging API");
        endpoints.extend(api.into_iter().map(|mut endpoint| {
            endpoint.path = join_path(prefix, &endpoint.path);
            endpoint
        }));
    }
    as_api(endpoints)
}

fn join_path(prefix: &str, path: &str) -> String {
    if path == "/" && !prefix.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crud::generate_crud;
    use crate::schema::Schema;
    use crate::types::{Endpoint, Method};

    #[test]
    fn join_path_handles_root() {
        assert_eq!(join_path("/api", "/"), "/api");
        assert_eq!(join_path("/api", "/items"), "/api/items");
        assert_eq!(join_path("", "/"), "/");
    }

    #[test]
    fn prefix_keeps_everything_but_path() {
        let api = generate_crud("user", Schema::any()).unwrap();
        let original = api.clone();
        let prefixed = prefix_api("/v1", api).unwrap();

        for (before, after) in original.iter().zip(prefixed.iter()) {
            assert_eq!(after.path, format!("/v1{}", before.path));
            assert_eq!(after.method, before.method);
            assert_eq!(after.alias, before.alias);
            assert_eq!(after.parameters, before.parameters);
        }
    }

    #[test]
    fn prefix_can_create_collision() {
        let api = as_api(vec![
            Endpoint::new(Method::Get, "/", Schema::any()),
            Endpoint::new(Method::Get, "", Schema::any()),
        ])
        .unwrap();
        let err = prefix_api("/x", api).unwrap_err();
        assert_eq!(err.key(), "get /x");
    }

    #[test]
    fn merge_detects_cross_part_duplicates() {
        let a = as_api(vec![Endpoint::new(Method::Get, "/users", Schema::any())]).unwrap();
        let b = as_api(vec![Endpoint::new(Method::Get, "/api/users", Schema::any())]).unwrap();

        let err = merge_apis([("/api", a), ("", b)]).unwrap_err();
        assert_eq!(err.key(), "get /api/users");
    }

    #[test]
    fn merge_preserves_part_order() {
        let a = as_api(vec![Endpoint::new(Method::Get, "/", Schema::any())]).unwrap();
        let b = as_api(vec![Endpoint::new(Method::Get, "/", Schema::any())]).unwrap();
        let api = merge_apis([("/b", b), ("/a", a)]).unwrap();
        let paths: Vec<_> = api.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/b", "/a"]);
    }
}
