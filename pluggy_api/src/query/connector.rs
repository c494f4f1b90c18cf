use crate::types::ConnectorType;

use super::{Query, QueryParams};

/// Filters for `GET /connectors`.
#[derive(Clone, Debug, Default)]
pub struct ConnectorFilters {
    /// Institution name, or a fragment of it.
    pub name: Option<String>,
    /// Two-letter country codes.
    pub countries: Vec<String>,
    pub types: Vec<ConnectorType>,
    /// Include sandbox connectors. Server default: false.
    pub sandbox: Option<bool>,
    pub is_open_finance: Option<bool>,
    pub supports_payment_initiation: Option<bool>,
}

impl Query for ConnectorFilters {
    fn add_to_params(&self, params: &mut QueryParams) {
        params.set("name", self.name.as_ref().map(Into::into));
        params.set("countries", Some(self.countries.as_slice().into()));
        params.set("types", Some(self.types.as_slice().into()));
        params.set("sandbox", self.sandbox.map(Into::into));
        params.set("isOpenFinance", self.is_open_finance.map(Into::into));
        params.set(
            "supportsPaymentInitiation",
            self.supports_payment_initiation.map(Into::into),
        );
    }
}

impl ConnectorFilters {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.countries.push(country.to_uppercase());
        self
    }
    pub fn with_countries(mut self, countries: &[&str]) -> Self {
        self.countries
            .extend(countries.iter().map(|c| c.to_uppercase()));
        self
    }

    pub fn with_type(mut self, connector_type: ConnectorType) -> Self {
        self.types.push(connector_type);
        self
    }
    pub fn with_types(mut self, types: &[ConnectorType]) -> Self {
        self.types.extend_from_slice(types);
        self
    }

    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = Some(sandbox);
        self
    }

    pub fn with_open_finance(mut self, is_open_finance: bool) -> Self {
        self.is_open_finance = Some(is_open_finance);
        self
    }

    pub fn with_payment_initiation(mut self, supports: bool) -> Self {
        self.supports_payment_initiation = Some(supports);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_filters() {
        insta::assert_snapshot!(ConnectorFilters::default().to_params().to_query_string(), @"");

        insta::assert_snapshot!(ConnectorFilters::default()
            .with_name("itau")
            .with_sandbox(true)
            .to_params()
            .to_query_string(), @"?name=itau&sandbox=true");

        insta::assert_snapshot!(ConnectorFilters::default()
            .with_country("br")
            .with_types(&[ConnectorType::PersonalBank, ConnectorType::BusinessBank])
            .with_open_finance(false)
            .to_params()
            .to_query_string(), @"?countries=BR&isOpenFinance=false&types=PERSONAL_BANK%2CBUSINESS_BANK");
    }
}
