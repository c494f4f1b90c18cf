//! Connector (financial institution integration) types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric connector identifier (e.g. `201` for a sandbox bank).
pub type ConnectorId = i64;

/// Institution integration and the credentials it asks for.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub id: ConnectorId,

    /// Financial institution name.
    pub name: String,

    pub institution_url: Option<String>,

    pub image_url: Option<String>,

    /// Primary brand color, hex without `#`.
    pub primary_color: Option<String>,

    #[serde(rename = "type")]
    pub connector_type: ConnectorType,

    /// Two-letter country code.
    pub country: String,

    /// Parameters a user must supply to create an item.
    #[serde(default)]
    pub credentials: Vec<ConnectorCredential>,

    #[serde(rename = "hasMFA", default)]
    pub has_mfa: bool,

    #[serde(default)]
    pub oauth: bool,

    /// Only for OAuth connectors: where to send the user to authorize.
    pub oauth_url: Option<String>,

    pub health: Option<ConnectorHealth>,

    #[serde(default)]
    pub is_open_finance: bool,

    #[serde(default)]
    pub is_sandbox: bool,

    #[serde(default)]
    pub supports_payment_initiation: bool,

    pub reset_password_url: Option<String>,

    /// Products this institution can provide.
    #[serde(default)]
    pub products: Vec<ProductType>,

    pub created_at: Option<DateTime<Utc>>,
}

/// One input field required by a connector.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorCredential {
    /// Human readable label.
    pub label: String,

    /// Key to use when submitting the value.
    pub name: String,

    #[serde(rename = "type")]
    pub credential_type: Option<CredentialType>,

    /// Whether the parameter is requested during an MFA step.
    pub mfa: Option<bool>,

    /// Base64 image payload for `image` credentials.
    pub data: Option<String>,

    pub assistive_text: Option<String>,

    /// Choices for `select` credentials.
    pub options: Option<Vec<CredentialSelectOption>>,

    /// Regex the value must match.
    pub validation: Option<String>,

    pub validation_message: Option<String>,

    pub placeholder: Option<String>,

    pub optional: Option<bool>,

    pub instructions: Option<String>,

    /// The value must be submitted before this instant.
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CredentialSelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ConnectorHealth {
    pub status: HealthStatus,
    pub stage: Option<HealthStage>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    Online,
    Offline,
    Unstable,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStage {
    Beta,
}

/// Kind of institution a connector integrates with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectorType {
    PersonalBank,
    BusinessBank,
    Invoice,
    Investment,
    Telecommunication,
    DigitalEconomy,
    PaymentAccount,
    Other,
}
impl std::fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ConnectorType::PersonalBank => "PERSONAL_BANK",
                ConnectorType::BusinessBank => "BUSINESS_BANK",
                ConnectorType::Invoice => "INVOICE",
                ConnectorType::Investment => "INVESTMENT",
                ConnectorType::Telecommunication => "TELECOMMUNICATION",
                ConnectorType::DigitalEconomy => "DIGITAL_ECONOMY",
                ConnectorType::PaymentAccount => "PAYMENT_ACCOUNT",
                ConnectorType::Other => "OTHER",
            }
        )
    }
}
impl std::str::FromStr for ConnectorType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "PERSONAL_BANK" => Ok(ConnectorType::PersonalBank),
            "BUSINESS_BANK" => Ok(ConnectorType::BusinessBank),
            "INVOICE" => Ok(ConnectorType::Invoice),
            "INVESTMENT" => Ok(ConnectorType::Investment),
            "TELECOMMUNICATION" => Ok(ConnectorType::Telecommunication),
            "DIGITAL_ECONOMY" => Ok(ConnectorType::DigitalEconomy),
            "PAYMENT_ACCOUNT" => Ok(ConnectorType::PaymentAccount),
            "OTHER" => Ok(ConnectorType::Other),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CredentialType {
    Number,
    Password,
    Text,
    Image,
    Select,
}

/// Data product an item can collect.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Accounts,
    CreditCards,
    Transactions,
    PaymentData,
    Investments,
    InvestmentsTransactions,
    Identity,
    BrokerageNote,
    Opportunities,
    Portfolio,
    IncomeReports,
    MoveSecurity,
    Loans,
    #[serde(other)]
    Unknown,
}
