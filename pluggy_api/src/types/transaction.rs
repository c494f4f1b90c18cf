//! Account transaction types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CurrencyCode;

/// A single movement on a bank or credit card account.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,

    pub account_id: String,

    pub date: DateTime<Utc>,

    pub description: String,

    /// Description exactly as provided by the institution.
    pub description_raw: Option<String>,

    /// Direction of the movement.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    pub amount: f64,

    /// Amount converted to the account's currency, when they differ.
    pub amount_in_account_currency: Option<f64>,

    /// Account balance after this transaction.
    pub balance: Option<f64>,

    pub currency_code: CurrencyCode,

    /// Assigned category description.
    pub category: Option<String>,

    pub category_id: Option<String>,

    pub status: Option<TransactionStatus>,

    /// Institution code for the transaction type. Not unique.
    pub provider_code: Option<String>,

    pub payment_data: Option<PaymentData>,

    pub credit_card_metadata: Option<CreditCardMetadata>,

    pub merchant: Option<TransactionMerchant>,
}

/// `DEBIT` means money leaving the account, `CREDIT` money entering it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Debit,
    Credit,
}
impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransactionType::Debit => "DEBIT",
                TransactionType::Credit => "CREDIT",
            }
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Posted,
}

/// Payer/receiver details of a transfer.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    pub payer: Option<PaymentParticipant>,
    pub receiver: Option<PaymentParticipant>,
    pub receiver_reference_id: Option<String>,
    /// Transfer rail, e.g. `PIX`, `TED`.
    pub payment_method: Option<String>,
    pub reference_number: Option<String>,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentParticipant {
    pub document_number: Option<DocumentNumber>,
    pub name: Option<String>,
    pub account_number: Option<String>,
    pub branch_number: Option<String>,
    pub routing_number: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DocumentNumber {
    pub value: String,
    /// `CPF` or `CNPJ`.
    #[serde(rename = "type")]
    pub document_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMerchant {
    pub name: String,
    pub business_name: Option<String>,
    pub cnpj: Option<String>,
    pub cnae: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardMetadata {
    pub installment_number: Option<u32>,
    pub total_installments: Option<u32>,
    pub total_amount: Option<f64>,
    #[serde(rename = "payeeMCC")]
    pub payee_mcc: Option<u32>,
    pub purchase_date: Option<DateTime<Utc>>,
}
