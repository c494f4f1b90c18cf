//! Per-call request descriptor handed to the dispatcher.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::query::{Query, QueryParams};
use crate::Error;

/// Verb, path, query and optional JSON body of one API call.
///
/// `path` is relative to the client's base URL (`items/abc`, not
/// `/items/abc?x=1`); query parameters go in `query`.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Merges `query` into the request's parameters.
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query.merge(query);
        self
    }

    /// Merges the parameters produced by a typed filter.
    pub fn with_filters(self, filters: &impl Query) -> Self {
        self.with_query(filters.to_params())
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes `body` to JSON and attaches it.
    pub fn with_json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, Error> {
        let value = serde_json::to_value(body).map_err(|source| Error::Encode {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.with_body(value))
    }

    /// Body that will actually be sent: `None` for GET/HEAD, otherwise the
    /// body with null-valued top-level keys removed, or `None` if nothing
    /// remains.
    pub fn outgoing_body(&self) -> Option<Value> {
        if self.method == Method::GET || self.method == Method::HEAD {
            return None;
        }
        self.body.clone().and_then(strip_nulls)
    }
}

/// Percent-encodes `id` so it fills exactly one path segment: `/`, `?`, `#`
/// and `%` are escaped rather than read as URL syntax.
pub(crate) fn path_segment(id: &str) -> String {
    // byte_serialize is form encoding; a literal `+` has already become %2B,
    // so any remaining `+` stands for a space.
    url::form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Drops top-level object keys whose value is `null`. Returns `None` when the
/// result is an empty object or the value itself is `null`.
pub fn strip_nulls(body: Value) -> Option<Value> {
    match body {
        Value::Null => None,
        Value::Object(map) => {
            let map: serde_json::Map<String, Value> =
                map.into_iter().filter(|(_, v)| !v.is_null()).collect();
            if map.is_empty() {
                None
            } else {
                Some(Value::Object(map))
            }
        }
        other => Some(other),
    }
}
