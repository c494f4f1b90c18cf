//! Loan contracts as reported through Open Finance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CurrencyCode;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,

    pub item_id: String,

    pub contract_number: Option<String>,

    /// Standardized credit operation identifier (IPOC).
    pub ipoc_code: Option<String>,

    pub product_name: String,

    #[serde(rename = "type")]
    pub loan_type: Option<String>,

    pub date: Option<DateTime<Utc>>,

    pub contract_date: Option<DateTime<Utc>>,

    pub disbursement_dates: Option<Vec<DateTime<Utc>>>,

    pub settlement_date: Option<DateTime<Utc>>,

    pub contract_amount: Option<f64>,

    pub currency_code: CurrencyCode,

    pub due_date: Option<DateTime<Utc>>,

    pub installment_periodicity: Option<String>,

    pub first_installment_due_date: Option<DateTime<Utc>>,

    /// Total effective cost, annual percentage.
    #[serde(rename = "CET")]
    pub cet: Option<f64>,

    pub amortization_scheduled: Option<String>,

    pub cnpj_consignee: Option<String>,

    pub interest_rates: Option<Vec<LoanInterestRate>>,

    pub warranties: Option<Vec<LoanWarranty>>,

    pub installments: Option<LoanInstallments>,

    pub payments: Option<LoanPayments>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoanInterestRate {
    pub tax_type: Option<String>,
    pub interest_rate_type: Option<String>,
    pub tax_periodicity: Option<String>,
    pub calculation: Option<String>,
    pub referential_rate_indexer_type: Option<String>,
    pub pre_fixed_rate: Option<f64>,
    pub post_fixed_rate: Option<f64>,
    pub additional_info: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoanWarranty {
    pub currency_code: Option<CurrencyCode>,
    #[serde(rename = "type")]
    pub warranty_type: Option<String>,
    pub subtype: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoanInstallments {
    pub type_number_of_installments: Option<String>,
    pub total_number_of_installments: Option<f64>,
    pub type_contract_remaining: Option<String>,
    pub contract_remaining_number: Option<f64>,
    pub paid_installments: Option<f64>,
    pub due_installments: Option<f64>,
    pub past_due_installments: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayments {
    /// Amount required to settle the debt.
    pub contract_outstanding_balance: Option<f64>,
}
