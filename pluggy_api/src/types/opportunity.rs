use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CurrencyCode;

/// Pre-approved credit offer available to the item owner.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub item_id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub opportunity_type: OpportunityType,
    pub date: DateTime<Utc>,
    pub currency_code: CurrencyCode,
    pub total_limit: Option<f64>,
    pub used_limit: Option<f64>,
    pub available_limit: Option<f64>,
    pub total_quotas: Option<f64>,
    pub quotas_type: Option<OpportunityDateType>,
    pub interest_rate: Option<f64>,
    pub rate_type: Option<OpportunityDateType>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpportunityType {
    CreditCard,
    PersonalLoan,
    BusinessLoan,
    MortgageLoan,
    VehicleLoan,
    Overdraft,
    OtherLoan,
    Other,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpportunityDateType {
    Yearly,
    Monthly,
}
