use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CurrencyCode;

/// Bank or credit card account collected from an item.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,

    pub item_id: String,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    pub subtype: AccountSubtype,

    /// Institution's account number.
    pub number: String,

    pub balance: f64,

    pub name: String,

    pub marketing_name: Option<String>,

    pub owner: Option<String>,

    pub tax_number: Option<String>,

    pub currency_code: CurrencyCode,

    /// Present for `BANK` accounts.
    pub bank_data: Option<BankData>,

    /// Present for `CREDIT` accounts.
    pub credit_data: Option<CreditData>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BankData {
    pub transfer_number: Option<String>,
    pub closing_balance: Option<f64>,
    pub automatically_invested_balance: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreditData {
    pub level: Option<String>,
    /// Card brand, e.g. Mastercard.
    pub brand: Option<String>,
    pub balance_close_date: Option<DateTime<Utc>>,
    pub balance_due_date: Option<DateTime<Utc>>,
    pub available_credit_limit: Option<f64>,
    pub balance_foreign_currency: Option<f64>,
    pub minimum_payment: Option<f64>,
    pub credit_limit: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Bank,
    Credit,
}
impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AccountType::Bank => "BANK",
                AccountType::Credit => "CREDIT",
            }
        )
    }
}
impl std::str::FromStr for AccountType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BANK" => Ok(AccountType::Bank),
            "CREDIT" => Ok(AccountType::Credit),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountSubtype {
    SavingsAccount,
    CheckingAccount,
    CreditCard,
    #[serde(other)]
    Unknown,
}
impl std::fmt::Display for AccountSubtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AccountSubtype::SavingsAccount => "SAVINGS_ACCOUNT",
                AccountSubtype::CheckingAccount => "CHECKING_ACCOUNT",
                AccountSubtype::CreditCard => "CREDIT_CARD",
                AccountSubtype::Unknown => "UNKNOWN",
            }
        )
    }
}
