//! Investment positions and their transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CurrencyCode;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,

    /// Country-wide identifier of the product (CNPJ in Brazil).
    pub code: Option<String>,

    #[serde(rename = "issuerCNPJ")]
    pub issuer_cnpj: Option<String>,

    pub number: Option<String>,

    pub isin: Option<String>,

    pub item_id: String,

    #[serde(rename = "type")]
    pub investment_type: InvestmentType,

    /// E.g. `CDB`, `STOCK`, `MULTIMARKET_FUND`.
    pub subtype: Option<String>,

    pub name: String,

    pub currency_code: CurrencyCode,

    pub date: Option<DateTime<Utc>>,

    /// Quota value.
    pub value: Option<f64>,

    pub quantity: Option<f64>,

    /// Net current value of the position.
    pub balance: f64,

    /// Gross amount before taxes.
    pub amount: Option<f64>,

    pub amount_withdrawal: Option<f64>,

    pub amount_profit: Option<f64>,

    pub amount_original: Option<f64>,

    pub taxes: Option<f64>,

    pub taxes2: Option<f64>,

    pub due_date: Option<DateTime<Utc>>,

    pub issuer: Option<String>,

    pub issue_date: Option<DateTime<Utc>>,

    pub rate: Option<f64>,

    /// Index the rate is based on, e.g. `CDI`.
    pub rate_type: Option<String>,

    pub fixed_annual_rate: Option<f64>,

    pub last_month_rate: Option<f64>,

    pub annual_rate: Option<f64>,

    pub last_twelve_months_rate: Option<f64>,

    pub status: Option<InvestmentStatus>,

    pub owner: Option<String>,

    pub institution: Option<InvestmentInstitution>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InvestmentInstitution {
    pub name: Option<String>,
    pub number: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentType {
    MutualFund,
    Security,
    Equity,
    Coe,
    FixedIncome,
    Etf,
    Other,
}
impl std::fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                InvestmentType::MutualFund => "MUTUAL_FUND",
                InvestmentType::Security => "SECURITY",
                InvestmentType::Equity => "EQUITY",
                InvestmentType::Coe => "COE",
                InvestmentType::FixedIncome => "FIXED_INCOME",
                InvestmentType::Etf => "ETF",
                InvestmentType::Other => "OTHER",
            }
        )
    }
}
impl std::str::FromStr for InvestmentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "MUTUAL_FUND" => Ok(InvestmentType::MutualFund),
            "SECURITY" => Ok(InvestmentType::Security),
            "EQUITY" => Ok(InvestmentType::Equity),
            "COE" => Ok(InvestmentType::Coe),
            "FIXED_INCOME" => Ok(InvestmentType::FixedIncome),
            "ETF" => Ok(InvestmentType::Etf),
            "OTHER" => Ok(InvestmentType::Other),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentStatus {
    Active,
    Pending,
    TotalWithdrawal,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: Option<InvestmentTransactionType>,
    pub description: Option<String>,
    pub investment_id: Option<String>,
    pub quantity: Option<f64>,
    pub value: Option<f64>,
    pub amount: Option<f64>,
    pub date: DateTime<Utc>,
    pub trade_date: Option<DateTime<Utc>>,
    pub brokerage_number: Option<String>,
    /// Amount including expenses.
    pub net_amount: Option<f64>,
    pub movement_type: Option<MovementType>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentTransactionType {
    Buy,
    Sell,
    Tax,
    Transfer,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    Debit,
    Credit,
}
