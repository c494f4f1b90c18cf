//! Client id/secret pair used to obtain an API key.

use std::fmt;

use serde::Serialize;

use crate::Error;

/// Application credentials issued by the Pluggy dashboard.
///
/// Both values are required; an empty (or whitespace-only) id or secret is
/// rejected when the credentials are built, before any request is made.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Validates and wraps a client id and secret.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self, Error> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        if client_id.trim().is_empty() {
            return Err(Error::Configuration("client id is empty".to_string()));
        }
        if client_secret.trim().is_empty() {
            return Err(Error::Configuration("client secret is empty".to_string()));
        }
        Ok(Self {
            client_id,
            client_secret,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_secret() {
        let result = Credentials::new("client", "");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn rejects_blank_id() {
        let result = Credentials::new("   ", "secret");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn serializes_as_auth_body() {
        let creds = Credentials::new("id-1", "secret-1").unwrap();
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"clientId": "id-1", "clientSecret": "secret-1"})
        );
    }

    #[test]
    fn debug_hides_secret() {
        let creds = Credentials::new("id-1", "secret-1").unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("id-1"));
        assert!(!debug.contains("secret-1"));
    }
}
