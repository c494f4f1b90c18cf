//! Error types for the API client.

use reqwest::Method;

/// Errors that can occur when configuring the client or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client was constructed with missing or invalid settings.
    #[error("Invalid client configuration: {0}")]
    Configuration(String),

    /// The `/auth` call failed. Wraps the underlying request, transport,
    /// or decode error.
    #[error("Authentication failed")]
    Authentication(#[source] Box<Error>),

    /// The API answered with a non-success status. `body` is the raw
    /// response text, untouched.
    #[error("{method} {path} failed with status {status}")]
    Request {
        status: u16,
        body: String,
        method: Method,
        path: String,
    },

    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, timeout).
    #[error("{method} {path} could not be sent")]
    Transport {
        method: Method,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// A success response carried a body that could not be decoded.
    #[error("{method} {path} returned a body that could not be decoded")]
    Decode {
        method: Method,
        path: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request body for {path}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The path produced a URL that does not parse.
    #[error("Invalid request URL for {path}")]
    InvalidUrl {
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// The path has empty or dot segments, or would resolve outside the
    /// base URL.
    #[error("Request path {path:?} does not stay under the base URL")]
    InvalidPath { path: String },
}

impl Error {
    /// HTTP status carried by this error, looking through authentication
    /// failures. `None` when no response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Request { status, .. } => Some(*status),
            Error::Authentication(inner) => inner.status(),
            _ => None,
        }
    }

    /// Raw response body carried by this error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Request { body, .. } | Error::Decode { body, .. } => Some(body),
            Error::Authentication(inner) => inner.body(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_error(status: u16) -> Error {
        Error::Request {
            status,
            body: r#"{"message":"invalid"}"#.to_string(),
            method: Method::PATCH,
            path: "items/1".to_string(),
        }
    }

    #[test]
    fn request_error_display_names_method_and_path() {
        let err = request_error(422);
        assert_eq!(err.to_string(), "PATCH items/1 failed with status 422");
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.body(), Some(r#"{"message":"invalid"}"#));
    }

    #[test]
    fn authentication_error_exposes_inner_status() {
        let err = Error::Authentication(Box::new(request_error(401)));
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().starts_with("Authentication failed"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn authentication_error_leaves_inner_message_to_the_source_chain() {
        let err = Error::Authentication(Box::new(request_error(401)));
        assert_eq!(err.to_string(), "Authentication failed");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "PATCH items/1 failed with status 401");
    }

    #[test]
    fn configuration_error_has_no_status() {
        let err = Error::Configuration("client secret is empty".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
        assert!(err.to_string().contains("client secret is empty"));
    }
}
