//! Item (end-user connection) types and the bodies used to create or update one.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Connector, ConnectorCredential, ConnectorId, ProductType};

/// Credential values keyed by the connector's parameter names.
pub type Parameters = BTreeMap<String, String>;

/// A user's connection to one institution.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,

    pub connector: Connector,

    pub status: ItemStatus,

    pub execution_status: ExecutionStatus,

    /// Error details when the last execution finished in an error status.
    pub error: Option<ExecutionErrorResult>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Last successful sync with the institution.
    pub last_updated_at: Option<DateTime<Utc>>,

    /// Extra parameter requested while the item waits for MFA input.
    pub parameter: Option<ConnectorCredential>,

    pub webhook_url: Option<String>,

    pub client_user_id: Option<String>,

    pub user_action: Option<UserAction>,

    #[serde(default)]
    pub consecutive_failed_login_attempts: u32,

    pub next_auto_sync_at: Option<DateTime<Utc>>,
}

/// Item lifecycle status.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Updated,
    Updating,
    WaitingUserInput,
    WaitingUserAction,
    Merging,
    LoginError,
    Outdated,
    #[serde(other)]
    Unknown,
}
impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ItemStatus::Updated => "UPDATED",
                ItemStatus::Updating => "UPDATING",
                ItemStatus::WaitingUserInput => "WAITING_USER_INPUT",
                ItemStatus::WaitingUserAction => "WAITING_USER_ACTION",
                ItemStatus::Merging => "MERGING",
                ItemStatus::LoginError => "LOGIN_ERROR",
                ItemStatus::Outdated => "OUTDATED",
                ItemStatus::Unknown => "UNKNOWN",
            }
        )
    }
}

/// Fine-grained step of the item's current or last execution.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    Creating,
    CreateError,
    Created,
    LoginInProgress,
    WaitingUserInput,
    WaitingUserAction,
    LoginMfaInProgress,
    AccountsInProgress,
    TransactionsInProgress,
    PaymentDataInProgress,
    CreditcardsInProgress,
    InvestmentsInProgress,
    InvestmentsTransactionsInProgress,
    OpportunitiesInProgress,
    IdentityInProgress,
    PortfolioInProgress,
    IncomeReportsInProgress,
    LoansInProgress,
    InvalidCredentials,
    AlreadyLoggedIn,
    UnexpectedError,
    InvalidCredentialsMfa,
    SiteNotAvailable,
    AccountLocked,
    AccountCredentialsReset,
    ConnectionError,
    AccountNeedsAction,
    UserAuthorizationPending,
    UserAuthorizationNotGranted,
    UserNotSupported,
    UserInputTimeout,
    MergeError,
    Error,
    Success,
    PartialSuccess,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionErrorResult {
    pub code: String,
    pub message: String,
    /// Message exactly as shown by the institution, if any.
    pub provider_message: Option<String>,
}

/// Action the user has to complete outside Pluggy (QR scan, authorization).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserAction {
    pub instructions: String,
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Body of `POST /items`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    pub connector_id: ConnectorId,
    pub parameters: Parameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductType>>,
}

impl CreateItem {
    pub fn new(connector_id: ConnectorId, parameters: Parameters) -> Self {
        Self {
            connector_id,
            parameters,
            webhook_url: None,
            client_user_id: None,
            products: None,
        }
    }

    pub fn with_webhook_url(mut self, url: &str) -> Self {
        self.webhook_url = Some(url.to_string());
        self
    }

    pub fn with_client_user_id(mut self, client_user_id: &str) -> Self {
        self.client_user_id = Some(client_user_id.to_string());
        self
    }

    pub fn with_products(mut self, products: &[ProductType]) -> Self {
        self.products = Some(products.to_vec());
        self
    }
}

/// Body of `PATCH /items/{id}`. With no parameters, the item is refreshed
/// using the credentials it last used.
///
/// Unset fields serialize as `null` and are stripped by the dispatcher.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    pub parameters: Option<Parameters>,
    pub webhook_url: Option<String>,
    pub client_user_id: Option<String>,
    pub products: Option<Vec<ProductType>>,
}
