//! Lazily fetched API key, cached for the lifetime of the client.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use tokio::sync::OnceCell;
use url::Url;

use crate::client::{truncate_body, JSON_MIME};
use crate::{Credentials, Error};

const AUTH_PATH: &str = "auth";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    api_key: String,
}

/// Holds the credentials and the single API key slot of one client.
///
/// The slot is filled at most once. Concurrent callers that find it empty
/// wait on the same `/auth` request instead of issuing their own; a failed
/// request leaves the slot empty so the next caller tries again. There is no
/// expiry tracking: once set, the key is reused until the client is dropped.
pub(crate) struct TokenCache {
    credentials: Credentials,
    http: reqwest::Client,
    auth_url: Url,
    token: OnceCell<String>,
}

impl TokenCache {
    pub(crate) fn new(
        credentials: Credentials,
        http: reqwest::Client,
        base_url: &Url,
    ) -> Result<Self, Error> {
        let auth_url = base_url.join(AUTH_PATH).map_err(|source| Error::InvalidUrl {
            path: AUTH_PATH.to_string(),
            source,
        })?;
        Ok(Self {
            credentials,
            http,
            auth_url,
            token: OnceCell::new(),
        })
    }

    /// Seeds the slot with a known API key. `/auth` is never contacted after this.
    pub(crate) fn with_token(mut self, token: String) -> Self {
        self.token = OnceCell::from(token);
        self
    }

    pub(crate) fn replace_http(&mut self, http: reqwest::Client) {
        self.http = http;
    }

    pub(crate) fn cached(&self) -> Option<&str> {
        self.token.get().map(String::as_str)
    }

    /// Returns the cached API key, authenticating first if there is none.
    pub(crate) async fn get_token(&self) -> Result<String, Error> {
        let token = self
            .token
            .get_or_try_init(|| async {
                self.authenticate().await.map_err(|e| {
                    tracing::error!("Failed to obtain API key: {}", e);
                    Error::Authentication(Box::new(e))
                })
            })
            .await?;
        Ok(token.clone())
    }

    async fn authenticate(&self) -> Result<String, Error> {
        tracing::debug!(
            "Requesting API key for client {}",
            self.credentials.client_id()
        );
        let transport = |source: reqwest::Error| Error::Transport {
            method: Method::POST,
            path: AUTH_PATH.to_string(),
            source,
        };

        let resp = self
            .http
            .post(self.auth_url.clone())
            .header(ACCEPT, JSON_MIME)
            .header(CONTENT_TYPE, JSON_MIME)
            .json(&self.credentials)
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport)?;

        if status != StatusCode::OK {
            tracing::error!(
                "Authentication rejected with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::Request {
                status: status.as_u16(),
                body,
                method: Method::POST,
                path: AUTH_PATH.to_string(),
            });
        }

        let parsed = serde_json::from_str::<AuthResponse>(&body).map_err(|source| Error::Decode {
            method: Method::POST,
            path: AUTH_PATH.to_string(),
            body: body.clone(),
            source,
        })?;

        Ok(parsed.api_key)
    }
}
