//! HTTP client for the Pluggy API.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::{Deserialize, DeserializeOwned};
use serde_json::Value;
use url::Url;

use crate::auth::TokenCache;
use crate::query::QueryParams;
use crate::request::ApiRequest;
use crate::{Credentials, Error};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.pluggy.ai";

pub(crate) const JSON_MIME: &str = "application/json";
const API_KEY_HEADER: &str = "X-API-KEY";
const USER_AGENT: &str = concat!("pluggy_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Pluggy API.
///
/// Authenticates lazily: the first request exchanges the client id and secret
/// for an API key, which is then sent as `X-API-KEY` on every call for the
/// lifetime of the client. One `reqwest::Client` is shared by all requests so
/// connections are pooled.
///
/// `Client` is `Send + Sync`; share it by reference across tasks.
pub struct Client {
    /// API root, always ending in `/`. Defaults to `https://api.pluggy.ai/`.
    base_url: Url,
    http: reqwest::Client,
    tokens: TokenCache,
}

impl Client {
    /// Creates a client pointing at the production API.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, client_id, client_secret)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(
        base_url: &str,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, Error> {
        let credentials = Credentials::new(client_id, client_secret)?;
        Self::from_credentials(base_url, credentials)
    }

    pub fn from_credentials(base_url: &str, credentials: Credentials) -> Result<Self, Error> {
        let base_url = parse_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Configuration(format!("failed to build HTTP client: {e}"))
            })?;
        let tokens = TokenCache::new(credentials, http.clone(), &base_url)?;
        Ok(Self {
            base_url,
            http,
            tokens,
        })
    }

    /// Uses `api_key` instead of calling `/auth`.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.tokens = self.tokens.with_token(api_key.into());
        self
    }

    /// Replaces the transport used for both `/auth` and regular requests.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.tokens.replace_http(http.clone());
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the API key, authenticating first if none is cached yet.
    pub async fn api_key(&self) -> Result<String, Error> {
        self.tokens.get_token().await
    }

    /// The API key if one has already been obtained or injected.
    pub fn cached_api_key(&self) -> Option<&str> {
        self.tokens.cached()
    }

    /// Sends one request and returns the decoded JSON body.
    ///
    /// `path` is relative to the base URL. For POST, PUT, PATCH and DELETE,
    /// top-level `null` fields of `body` are removed before sending.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<Value>,
    ) -> Result<Value, Error> {
        let mut request = ApiRequest::new(method, path);
        if let Some(query) = query {
            request = request.with_query(query.clone());
        }
        if let Some(body) = body {
            request = request.with_body(body);
        }
        self.execute(request).await
    }

    /// Sends a prepared [`ApiRequest`].
    ///
    /// A success response with an empty body yields `Value::Null`. Any
    /// non-2xx status yields [`Error::Request`] carrying the raw body.
    pub async fn execute(&self, request: ApiRequest) -> Result<Value, Error> {
        let url = self.get_url(&request.path, &request.query)?;
        let body = request.outgoing_body();
        let ApiRequest { method, path, .. } = request;

        let api_key = self.tokens.get_token().await?;

        tracing::debug!("{} {}", method, url);
        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(ACCEPT, JSON_MIME)
            .header(CONTENT_TYPE, JSON_MIME)
            .header(API_KEY_HEADER, api_key);
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|source| {
            tracing::error!("Failed to send {} {}: {}", method, path, source);
            Error::Transport {
                method: method.clone(),
                path: path.clone(),
                source,
            }
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|source| {
            tracing::error!("Failed to read response body: {}", source);
            Error::Transport {
                method: method.clone(),
                path: path.clone(),
                source,
            }
        })?;

        if !status.is_success() {
            tracing::error!(
                "{} {} failed with status {}: {}",
                method,
                path,
                status,
                truncate_body(&text)
            );
            return Err(Error::Request {
                status: status.as_u16(),
                body: text,
                method,
                path,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|source| {
            tracing::error!(
                "Failed to parse {} {}: {} | body: {}",
                method,
                path,
                source,
                truncate_body(&text)
            );
            Error::Decode {
                method,
                path,
                body: text,
                source,
            }
        })
    }

    /// Sends `request` and decodes the response into `T`.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, Error> {
        let method = request.method.clone();
        let path = request.path.clone();
        let value = self.execute(request).await?;
        <T as Deserialize>::deserialize(&value).map_err(|source| {
            tracing::error!("Failed to parse {} {}: {}", method, path, source);
            Error::Decode {
                method,
                path,
                body: value.to_string(),
                source,
            }
        })
    }

    /// Appends `path` to the base URL's path. The path is never resolved as
    /// a URL reference, so it cannot change the scheme, host or port.
    fn get_url(&self, path: &str, query: &QueryParams) -> Result<Url, Error> {
        let relative = path.trim_start_matches('/');
        if relative
            .split(['/', '\\'])
            .any(|segment| segment.is_empty() || is_dot_segment(segment))
        {
            tracing::error!("Rejected request path {:?}", path);
            return Err(Error::InvalidPath {
                path: path.to_string(),
            });
        }

        let mut url = self.base_url.clone();
        url.set_path(&format!("{}{}", self.base_url.path(), relative));
        if url.origin() != self.base_url.origin() {
            tracing::error!("Request path {:?} escaped the base URL: {}", path, url);
            return Err(Error::InvalidPath {
                path: path.to_string(),
            });
        }

        let encoded = query.encode();
        url.set_query(if encoded.is_empty() { None } else { Some(&encoded) });
        Ok(url)
    }
}

/// `.` and `..`, including the spellings URL parsers normalize to them
/// (percent-encoded dots, embedded tabs and newlines).
fn is_dot_segment(segment: &str) -> bool {
    let normalized: String = segment
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();
    matches!(
        normalized.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
    )
}

/// Parses `base_url` and makes sure it ends in exactly one `/`, so request
/// paths append under it.
fn parse_base_url(base_url: &str) -> Result<Url, Error> {
    let normalized = format!("{}/", base_url.trim().trim_end_matches('/'));
    let url = Url::parse(&normalized)
        .map_err(|e| Error::Configuration(format!("invalid base URL {base_url:?}: {e}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Configuration(format!(
            "base URL must be an http(s) URL, got {base_url:?}"
        )));
    }
    Ok(url)
}

/// Shortens a response body for log output, on a char boundary.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> Client {
        Client::with_base_url(base, "id", "secret").unwrap()
    }

    #[test]
    fn base_url_gets_single_trailing_slash() {
        assert_eq!(client("http://localhost:8080").base_url().as_str(), "http://localhost:8080/");
        assert_eq!(
            client("https://api.pluggy.ai//").base_url().as_str(),
            "https://api.pluggy.ai/"
        );
        assert_eq!(
            client("http://proxy.local/pluggy").base_url().as_str(),
            "http://proxy.local/pluggy/"
        );
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(matches!(
            Client::with_base_url("not a url", "id", "secret"),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Client::with_base_url("mailto:someone@example.com", "id", "secret"),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn rejects_blank_credentials() {
        assert!(matches!(
            Client::new("  ", "secret"),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(Client::new("id", ""), Err(Error::Configuration(_))));
    }

    #[test]
    fn url_joins_path_and_query() {
        let c = client("http://localhost:8080/");
        let query = QueryParams::new().with("itemId", "abc").with("pageSize", 500u32);
        let url = c.get_url("/accounts", &query).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/accounts?itemId=abc&pageSize=500");

        let url = c.get_url("items/1", &QueryParams::new()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/items/1");
    }

    #[test]
    fn url_keeps_base_path_prefix() {
        let c = client("http://proxy.local/pluggy");
        let url = c.get_url("connectors/2", &QueryParams::new()).unwrap();
        assert_eq!(url.as_str(), "http://proxy.local/pluggy/connectors/2");
    }

    #[test]
    fn absolute_url_as_path_is_rejected() {
        let c = client("http://localhost:8080");
        for path in ["http://other-host/x", "https://other-host", "//other-host/x/"] {
            assert!(
                matches!(c.get_url(path, &QueryParams::new()), Err(Error::InvalidPath { .. })),
                "{path}"
            );
        }
    }

    #[test]
    fn scheme_like_segment_stays_on_base_host() {
        let c = client("http://localhost:8080/api");
        let url = c.get_url("mailto:x/y", &QueryParams::new()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/mailto:x/y");
        let url = c.get_url("//other-host", &QueryParams::new()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/other-host");
    }

    #[test]
    fn empty_and_dot_segments_are_rejected() {
        let c = client("http://localhost:8080/api");
        let paths = [
            "items/..",
            "../webhooks",
            "items/./1",
            "items/%2E%2e",
            "items//1",
            "items\\..",
            "items/.\t.",
        ];
        for path in paths {
            assert!(
                matches!(c.get_url(path, &QueryParams::new()), Err(Error::InvalidPath { .. })),
                "{path}"
            );
        }
    }

    #[test]
    fn reserved_characters_stay_in_the_path() {
        let c = client("http://localhost:8080");
        let query = QueryParams::new().with("pageSize", 500u32);
        let url = c.get_url("items/abc?x=1#frag", &query).unwrap();
        assert_eq!(url.path(), "/items/abc%3Fx=1%23frag");
        assert_eq!(url.query(), Some("pageSize=500"));
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn injected_key_is_cached_immediately() {
        let c = client("http://localhost:8080").with_api_key("tok");
        assert_eq!(c.cached_api_key(), Some("tok"));
        assert_eq!(client("http://localhost:8080").cached_api_key(), None);
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let short = "ok";
        assert_eq!(truncate_body(short), "ok");
        let long = "é".repeat(1500);
        let out = truncate_body(&long);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() <= 2000 + "...[truncated]".len());
    }

    #[test]
    fn client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
