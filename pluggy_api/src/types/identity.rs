use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Personal or business data of the item owner.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub id: String,
    pub item_id: String,
    pub birth_date: Option<DateTime<Utc>>,
    /// Tax identifier (CNPJ or CUIT).
    pub tax_number: Option<String>,
    /// Primary document number (DNI or CPF).
    pub document: Option<String>,
    pub document_type: Option<String>,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub full_name: Option<String>,
    pub phone_numbers: Option<Vec<PhoneNumber>>,
    pub emails: Option<Vec<Email>>,
    pub addresses: Option<Vec<Address>>,
    pub relations: Option<Vec<IdentityRelation>>,
    pub investor_profile: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PhoneNumber {
    #[serde(rename = "type")]
    pub phone_type: Option<String>,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Email {
    #[serde(rename = "type")]
    pub email_type: Option<String>,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IdentityRelation {
    #[serde(rename = "type")]
    pub relation_type: Option<String>,
    pub name: Option<String>,
    pub document: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub full_address: Option<String>,
    pub primary_address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub address_type: Option<String>,
}
