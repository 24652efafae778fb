//! Parameter shaping shared by the resource groups.
//!
//! Resource methods accept optional parameters as a JSON object ([`Params`]).
//! Defaults are merged underneath the caller's values, id lists are
//! flattened to comma strings for query parameters, and `null` entries are
//! dropped so optional arguments are simply omitted from the request.

use serde_json::{Map, Value};

use crate::clients::{query_value, ApiError, ApiResponse};

/// Caller-supplied request parameters.
pub type Params = Map<String, Value>;

/// The result of every resource method.
pub type ApiResult = Result<ApiResponse, ApiError>;

/// Converts a JSON object literal into [`Params`].
///
/// Non-object values yield empty params. `null` entries are removed.
///
/// # Example
///
/// ```rust
/// use shopee_api::resources::params;
/// use serde_json::json;
///
/// let p = params(json!({"page_size": 20, "cursor": null}));
/// assert_eq!(p.len(), 1);
/// ```
#[must_use]
pub fn params(value: Value) -> Params {
    match value {
        Value::Object(map) => map.into_iter().filter(|(_, v)| !v.is_null()).collect(),
        _ => Params::new(),
    }
}

/// Merges `defaults` underneath `overrides`; caller values win.
///
/// # Example
///
/// ```rust
/// use shopee_api::resources::{merge_defaults, params};
/// use serde_json::json;
///
/// let merged = merge_defaults(
///     json!({"page_no": 1, "page_size": 50}),
///     params(json!({"page_size": 10})),
/// );
/// assert_eq!(merged["page_no"], 1);
/// assert_eq!(merged["page_size"], 10);
/// ```
#[must_use]
pub fn merge_defaults(defaults: Value, overrides: Params) -> Params {
    let mut merged = params(defaults);
    merged.extend(overrides);
    merged
}

/// Something that can be sent as a list of ids.
///
/// Implemented for single ids as well as collections, so a scalar is
/// promoted to a one-element list.
pub trait IdList {
    /// Returns the ids as JSON values.
    fn into_id_list(self) -> Vec<Value>;
}

macro_rules! scalar_id_list {
    ($($ty:ty),*) => {
        $(
            impl IdList for $ty {
                fn into_id_list(self) -> Vec<Value> {
                    vec![Value::from(self)]
                }
            }
        )*
    };
}

scalar_id_list!(u64, i64, u32, i32, &str, String);

impl<T: Into<Value>> IdList for Vec<T> {
    fn into_id_list(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value> + Clone> IdList for &[T] {
    fn into_id_list(self) -> Vec<Value> {
        self.iter().cloned().map(Into::into).collect()
    }
}

impl<T: Into<Value>, const N: usize> IdList for [T; N] {
    fn into_id_list(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

/// Returns `ids` as a JSON array.
#[must_use]
pub fn id_array(ids: impl IdList) -> Value {
    Value::Array(ids.into_id_list())
}

/// Returns `ids` joined with commas, as query parameters expect.
///
/// # Example
///
/// ```rust
/// use shopee_api::resources::join_ids;
///
/// assert_eq!(join_ids(["2311150001", "2311150002"]), "2311150001,2311150002");
/// assert_eq!(join_ids(42_u64), "42");
/// ```
#[must_use]
pub fn join_ids(ids: impl IdList) -> String {
    query_value(&id_array(ids)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_drops_nulls_and_non_objects() {
        let p = params(json!({"a": 1, "b": null, "c": ""}));
        assert_eq!(p.len(), 2);
        assert_eq!(p["c"], "");

        assert!(params(json!([1, 2])).is_empty());
        assert!(params(Value::Null).is_empty());
    }

    #[test]
    fn test_merge_defaults_caller_wins() {
        let merged = merge_defaults(
            json!({"direction": "latest", "type": "all"}),
            params(json!({"type": "pinned", "page_size": 5})),
        );

        assert_eq!(merged["direction"], "latest");
        assert_eq!(merged["type"], "pinned");
        assert_eq!(merged["page_size"], 5);
    }

    #[test]
    fn test_scalar_ids_become_single_element_lists() {
        assert_eq!(id_array(7_u64), json!([7]));
        assert_eq!(id_array("2311150001"), json!(["2311150001"]));
        assert_eq!(id_array(String::from("x")), json!(["x"]));
    }

    #[test]
    fn test_collections_of_ids() {
        assert_eq!(id_array(vec![1_u64, 2, 3]), json!([1, 2, 3]));
        assert_eq!(id_array(&["a", "b"][..]), json!(["a", "b"]));
        assert_eq!(id_array([10_u64, 20]), json!([10, 20]));
        assert_eq!(id_array(Vec::<u64>::new()), json!([]));
    }

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids(vec![100_u64, 200]), "100,200");
        assert_eq!(join_ids("single"), "single");
        assert_eq!(join_ids(Vec::<u64>::new()), "");
    }
}
