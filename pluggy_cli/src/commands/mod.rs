//! CLI subcommand implementations.

pub mod accounts;
pub mod auth;
pub mod categories;
pub mod connectors;
pub mod identity;
pub mod income_reports;
pub mod investments;
pub mod items;
pub mod loans;
pub mod transactions;
pub mod webhooks;

use anyhow::{anyhow, Result};
use pluggy_api::types::Parameters;

/// Parses a `key=value` pair given on the command line.
pub fn parse_key_val(input: &str) -> Result<(String, String), String> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got {:?}", input)),
    }
}

pub fn to_parameters(pairs: &[(String, String)]) -> Parameters {
    pairs.iter().cloned().collect()
}

/// Parses a value into one of the API's enums, naming the flag on failure.
pub fn parse_enum<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("invalid value {:?} for --{}", value, flag))
}

#[cfg(test)]
mod tests {
    use pluggy_api::types::{AccountType, ConnectorType};

    use super::*;

    #[test]
    fn key_val_splits_on_first_equals() {
        assert_eq!(
            parse_key_val("password=a=b").unwrap(),
            ("password".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_key_val("token=").unwrap(),
            ("token".to_string(), String::new())
        );
    }

    #[test]
    fn key_val_rejects_missing_key() {
        assert!(parse_key_val("novalue").is_err());
        assert!(parse_key_val("=x").is_err());
    }

    #[test]
    fn later_parameters_override_earlier() {
        let params = to_parameters(&[
            ("user".to_string(), "a".to_string()),
            ("user".to_string(), "b".to_string()),
        ]);
        assert_eq!(params.get("user").map(String::as_str), Some("b"));
    }

    #[test]
    fn enum_values_are_parsed_case_insensitively() {
        let t: ConnectorType = parse_enum("type", "personal-bank").unwrap();
        assert_eq!(t, ConnectorType::PersonalBank);
        let a: AccountType = parse_enum("type", "credit").unwrap();
        assert_eq!(a, AccountType::Credit);
        let err = parse_enum::<AccountType>("type", "loan").unwrap_err();
        assert_eq!(err.to_string(), "invalid value \"loan\" for --type");
    }
}
