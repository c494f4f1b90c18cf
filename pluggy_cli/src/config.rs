//! Environment-driven settings for the CLI.

use anyhow::{bail, Context, Result};
use pluggy_api::{Client, DEFAULT_BASE_URL};

/// Credentials and endpoint read from the environment (after `.env` has been
/// loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
    /// Pre-issued API key; skips the `/auth` call when set.
    pub api_key: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`. `PLUGGY_`-prefixed names win over the
    /// bare `CLIENT_ID`/`CLIENT_SECRET` ones.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| lookup(key))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };

        let Some(client_id) = read(&["PLUGGY_CLIENT_ID", "CLIENT_ID"]) else {
            bail!("PLUGGY_CLIENT_ID (or CLIENT_ID) is not set");
        };
        let Some(client_secret) = read(&["PLUGGY_CLIENT_SECRET", "CLIENT_SECRET"]) else {
            bail!("PLUGGY_CLIENT_SECRET (or CLIENT_SECRET) is not set");
        };

        Ok(Self {
            client_id,
            client_secret,
            base_url: read(&["PLUGGY_API_URL"]).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: read(&["PLUGGY_API_KEY"]),
        })
    }

    /// Builds a client from these settings. `base_url_override` (from
    /// `--base-url`) replaces `PLUGGY_API_URL`.
    pub fn client(&self, base_url_override: Option<&str>) -> Result<Client> {
        let base_url = base_url_override.unwrap_or(&self.base_url);
        let client = Client::with_base_url(base_url, &self.client_id, &self.client_secret)
            .with_context(|| format!("failed to configure client for {}", base_url))?;
        Ok(match &self.api_key {
            Some(key) => client.with_api_key(key),
            None => client,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn prefixed_names_take_precedence() {
        let settings = Settings::from_lookup(lookup(&[
            ("PLUGGY_CLIENT_ID", "new-id"),
            ("CLIENT_ID", "old-id"),
            ("CLIENT_SECRET", "old-secret"),
        ]))
        .unwrap();
        assert_eq!(settings.client_id, "new-id");
        assert_eq!(settings.client_secret, "old-secret");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.api_key, None);
    }

    #[test]
    fn blank_prefixed_value_falls_back() {
        let settings = Settings::from_lookup(lookup(&[
            ("PLUGGY_CLIENT_ID", "  "),
            ("CLIENT_ID", "old-id"),
            ("PLUGGY_CLIENT_SECRET", "secret"),
        ]))
        .unwrap();
        assert_eq!(settings.client_id, "old-id");
    }

    #[test]
    fn missing_secret_is_an_error() {
        let err = Settings::from_lookup(lookup(&[("PLUGGY_CLIENT_ID", "id")])).unwrap_err();
        assert!(err.to_string().contains("PLUGGY_CLIENT_SECRET"));
    }

    #[test]
    fn optional_url_and_key_are_read() {
        let settings = Settings::from_lookup(lookup(&[
            ("PLUGGY_CLIENT_ID", "id"),
            ("PLUGGY_CLIENT_SECRET", "secret"),
            ("PLUGGY_API_URL", "http://localhost:9000"),
            ("PLUGGY_API_KEY", "preset"),
        ]))
        .unwrap();
        assert_eq!(settings.base_url, "http://localhost:9000");
        assert_eq!(settings.api_key.as_deref(), Some("preset"));

        let client = settings.client(None).unwrap();
        assert_eq!(client.cached_api_key(), Some("preset"));
        assert_eq!(client.base_url().as_str(), "http://localhost:9000/");

        let client = settings.client(Some("http://127.0.0.1:1234")).unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:1234/");
    }
}
