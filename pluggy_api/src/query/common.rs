//! Query-string infrastructure: [`QueryParams`], the [`Query`] and
//! [`PagedQuery`] traits, and the shared [`PageFilters`] block.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use url::form_urlencoded;

/// A single query value: one scalar, or a list sent comma-separated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValue {
    Scalar(String),
    List(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Scalar(value.to_string())
    }
}
impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Scalar(value)
    }
}
impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Scalar(value.clone())
    }
}
impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Scalar(value.to_string())
    }
}
impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Scalar(value.to_string())
    }
}
impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Scalar(value.to_string())
    }
}
impl From<NaiveDate> for QueryValue {
    fn from(value: NaiveDate) -> Self {
        QueryValue::Scalar(value.format("%Y-%m-%d").to_string())
    }
}
impl<T: ToString> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        QueryValue::List(values.iter().map(ToString::to_string).collect())
    }
}
impl<T: ToString> From<&[T]> for QueryValue {
    fn from(values: &[T]) -> Self {
        QueryValue::List(values.iter().map(ToString::to_string).collect())
    }
}

/// Query parameters keyed by name. Iteration (and therefore the encoded
/// string) follows key order. Keys may hold `None`; those are skipped when
/// encoding, as are empty lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: BTreeMap<String, Option<QueryValue>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn with(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.set(key, Some(value.into()));
        self
    }

    /// Sets `key` to `value`, or to null when `value` is `None`.
    pub fn with_opt<V: Into<QueryValue>>(mut self, key: &str, value: Option<V>) -> Self {
        self.set(key, value.map(Into::into));
        self
    }

    pub fn set(&mut self, key: &str, value: Option<QueryValue>) {
        self.pairs.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.pairs.get(key).and_then(Option::as_ref)
    }

    /// Copies every entry of `other` into `self`, overwriting shared keys.
    pub fn merge(&mut self, other: QueryParams) {
        self.pairs.extend(other.pairs);
    }

    /// True when encoding would produce no pairs.
    pub fn is_empty(&self) -> bool {
        self.encode().is_empty()
    }

    /// URL-encoded `key=value` pairs joined by `&`, without a leading `?`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            match value {
                None => continue,
                Some(QueryValue::Scalar(value)) => {
                    serializer.append_pair(key, value);
                }
                Some(QueryValue::List(values)) if values.is_empty() => continue,
                Some(QueryValue::List(values)) => {
                    serializer.append_pair(key, &values.join(","));
                }
            }
        }
        serializer.finish()
    }

    /// `?` followed by [`encode`](Self::encode), or the empty string when
    /// there is nothing to send.
    pub fn to_query_string(&self) -> String {
        let encoded = self.encode();
        if encoded.is_empty() {
            encoded
        } else {
            format!("?{}", encoded)
        }
    }
}

/// Implemented by every filter type. Converts the filter into query parameters.
pub trait Query {
    /// Writes this filter's parameters into `params`.
    fn add_to_params(&self, params: &mut QueryParams);

    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.add_to_params(&mut params);
        params
    }
}

/// A filter for a paged list endpoint. Provides the shared page builders.
pub trait PagedQuery: Query {
    /// Returns a mutable reference to the page fields.
    fn get_common(&mut self) -> &mut PageFilters;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Sets the number of results per page.
    fn with_page_size(mut self, page_size: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page_size = Some(page_size);
        self
    }
}

/// Page number and size. Unset values fall back to the server defaults
/// (page 1, 20 results).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageFilters {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl Query for PageFilters {
    fn add_to_params(&self, params: &mut QueryParams) {
        params.set("page", self.page.map(Into::into));
        params.set("pageSize", self.page_size.map(Into::into));
    }
}

impl PagedQuery for PageFilters {
    fn get_common(&mut self) -> &mut PageFilters {
        self
    }
}
