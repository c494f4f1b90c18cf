//! Webhook subscriptions and the payload Pluggy posts to them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: String,
    /// Where notifications are delivered.
    pub url: String,
    pub event: WebhookEvent,
    pub created_at: DateTime<Utc>,
    /// Equal to `created_at` if never updated.
    pub updated_at: DateTime<Utc>,
    pub disabled_at: Option<DateTime<Utc>>,
}

/// Event a webhook subscribes to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookEvent {
    #[serde(rename = "item/created")]
    ItemCreated,
    #[serde(rename = "item/updated")]
    ItemUpdated,
    #[serde(rename = "item/error")]
    ItemError,
    #[serde(rename = "item/deleted")]
    ItemDeleted,
    #[serde(rename = "item/waiting_user_input")]
    ItemWaitingUserInput,
    #[serde(rename = "item/login_succeeded")]
    ItemLoginSucceeded,
    #[serde(rename = "connector/status_updated")]
    ConnectorStatusUpdated,
    #[serde(rename = "transactions/deleted")]
    TransactionsDeleted,
    #[serde(rename = "all")]
    All,
}

impl WebhookEvent {
    fn as_str(&self) -> &'static str {
        match self {
            WebhookEvent::ItemCreated => "item/created",
            WebhookEvent::ItemUpdated => "item/updated",
            WebhookEvent::ItemError => "item/error",
            WebhookEvent::ItemDeleted => "item/deleted",
            WebhookEvent::ItemWaitingUserInput => "item/waiting_user_input",
            WebhookEvent::ItemLoginSucceeded => "item/login_succeeded",
            WebhookEvent::ConnectorStatusUpdated => "connector/status_updated",
            WebhookEvent::TransactionsDeleted => "transactions/deleted",
            WebhookEvent::All => "all",
        }
    }
}
impl std::fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl std::str::FromStr for WebhookEvent {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            WebhookEvent::ItemCreated,
            WebhookEvent::ItemUpdated,
            WebhookEvent::ItemError,
            WebhookEvent::ItemDeleted,
            WebhookEvent::ItemWaitingUserInput,
            WebhookEvent::ItemLoginSucceeded,
            WebhookEvent::ConnectorStatusUpdated,
            WebhookEvent::TransactionsDeleted,
            WebhookEvent::All,
        ]
        .into_iter()
        .find(|event| event.as_str() == s)
        .ok_or(())
    }
}

/// Body of `POST /webhooks`.
#[derive(Serialize, Debug, Clone)]
pub struct CreateWebhook {
    pub event: WebhookEvent,
    pub url: String,
    /// Extra headers sent with every notification.
    pub headers: Option<BTreeMap<String, String>>,
}

/// Body of `PATCH /webhooks/{id}`. `None` fields are left untouched.
#[derive(Serialize, Debug, Clone, Default)]
pub struct UpdateWebhook {
    pub event: Option<WebhookEvent>,
    pub url: Option<String>,
    pub headers: Option<BTreeMap<String, String>>,
    pub enabled: Option<bool>,
}

/// Notification body delivered to a webhook URL.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEventPayload {
    pub id: String,
    pub event_id: String,
    pub event: WebhookEvent,
    pub item_id: Option<String>,
    pub error: Option<super::ExecutionErrorResult>,
    /// `CLIENT`, `USER`, `SYNC` or `INTERNAL`.
    pub triggered_by: Option<String>,
    pub client_id: Option<String>,
    pub account_id: Option<String>,
    pub transaction_ids: Option<Vec<String>>,
}
