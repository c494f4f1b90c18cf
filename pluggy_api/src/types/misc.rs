//! Small response and request shapes that do not belong to a larger resource.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Result of `POST /connectors/{id}/validate`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ValidationResult {
    #[serde(default)]
    pub parameters: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ValidationError {
    pub code: String,
    pub message: String,
    pub parameter: Option<String>,
}

/// Yearly income report published by the institution.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IncomeReport {
    /// Sent as a number by some institutions and as a string by others.
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
    /// Download link for the PDF.
    pub url: String,
}

/// Restricted API key for connecting items from a frontend.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConnectToken {
    pub access_token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConnectTokenOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_user_id: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected year as string or number, got {}",
            other
        ))),
    }
}
