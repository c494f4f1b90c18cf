use pluggy_api::types::{
    Account, AccountSubtype, AccountType, Category, Connector, ConnectorType, CredentialType,
    ExecutionStatus, HealthStatus, IdentityResponse, IncomeReport, Item, ItemStatus, PageResponse,
    ProductType, Transaction, TransactionStatus, TransactionType, Webhook, WebhookEvent,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_connectors() {
    let json = load_fixture("connectors.json");
    let resp: PageResponse<Connector> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.results.len(), 2);
    assert_eq!(resp.total_pages, 1);

    let sandbox = &resp.results[0];
    assert_eq!(sandbox.id, 201);
    assert_eq!(sandbox.name, "Pluggy Bank");
    assert_eq!(sandbox.connector_type, ConnectorType::PersonalBank);
    assert!(sandbox.is_sandbox);
    assert!(!sandbox.has_mfa);
    assert_eq!(sandbox.credentials.len(), 2);
    assert_eq!(sandbox.credentials[1].credential_type, Some(CredentialType::Password));
    assert_eq!(sandbox.health.as_ref().unwrap().status, HealthStatus::Online);
    assert_eq!(
        sandbox.products,
        vec![
            ProductType::Accounts,
            ProductType::Transactions,
            ProductType::Identity,
            ProductType::Unknown
        ]
    );

    let nubank = &resp.results[1];
    assert!(nubank.has_mfa);
    assert!(nubank.oauth);
    assert!(nubank.credentials.is_empty());
    assert!(nubank.created_at.is_none());
}

#[test]
fn deserialize_item_with_error() {
    let json = load_fixture("item.json");
    let item: Item = serde_json::from_str(&json).unwrap();
    assert_eq!(item.id, "a3f1e2c4-5b6d-4e7f-8a9b-0c1d2e3f4a5b");
    assert_eq!(item.connector.id, 201);
    assert_eq!(item.status, ItemStatus::LoginError);
    assert_eq!(item.execution_status, ExecutionStatus::InvalidCredentials);
    assert_eq!(item.error.as_ref().unwrap().code, "INVALID_CREDENTIALS");
    assert_eq!(item.client_user_id.as_deref(), Some("user-42"));
    assert_eq!(item.consecutive_failed_login_attempts, 1);
    assert!(item.last_updated_at.is_none());
}

#[test]
fn unknown_item_status_does_not_fail() {
    let json = load_fixture("item.json").replace("LOGIN_ERROR", "SOME_FUTURE_STATUS");
    let item: Item = serde_json::from_str(&json).unwrap();
    assert_eq!(item.status, ItemStatus::Unknown);
}

#[test]
fn deserialize_accounts() {
    let json = load_fixture("accounts.json");
    let resp: PageResponse<Account> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.results.len(), 2);

    let checking = &resp.results[0];
    assert_eq!(checking.account_type, AccountType::Bank);
    assert_eq!(checking.subtype, AccountSubtype::CheckingAccount);
    assert_eq!(checking.balance, 120950.25);
    assert_eq!(checking.currency_code, "BRL");
    assert_eq!(
        checking.bank_data.as_ref().unwrap().transfer_number.as_deref(),
        Some("0001/12345-0")
    );
    assert!(checking.credit_data.is_none());

    let card = &resp.results[1];
    assert_eq!(card.account_type, AccountType::Credit);
    let credit = card.credit_data.as_ref().unwrap();
    assert_eq!(credit.brand.as_deref(), Some("MASTERCARD"));
    assert_eq!(credit.credit_limit, Some(20000.0));
}

#[test]
fn deserialize_transactions() {
    let json = load_fixture("transactions.json");
    let resp: PageResponse<Transaction> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.total, 3);
    let ids: Vec<&str> = resp.results.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["tx-1", "tx-2", "tx-3"]);

    let pix = &resp.results[0];
    assert_eq!(pix.transaction_type, TransactionType::Credit);
    assert_eq!(pix.status, Some(TransactionStatus::Posted));
    let payer = pix.payment_data.as_ref().unwrap().payer.as_ref().unwrap();
    assert_eq!(payer.document_number.as_ref().unwrap().value, "416.799.495-00");

    let uber = &resp.results[1];
    assert_eq!(uber.amount, -23.9);
    assert_eq!(uber.merchant.as_ref().unwrap().business_name.as_deref(), Some("Uber"));

    let installment = &resp.results[2];
    let meta = installment.credit_card_metadata.as_ref().unwrap();
    assert_eq!(meta.installment_number, Some(2));
    assert_eq!(meta.payee_mcc, Some(5999));
    assert!(installment.amount_in_account_currency.is_none());
}

#[test]
fn deserialize_categories() {
    let json = load_fixture("categories.json");
    let resp: PageResponse<Category> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.results.len(), 3);
    assert!(resp.results[0].parent_id.is_none());
    assert_eq!(resp.results[1].parent_description.as_deref(), Some("Income"));
}

#[test]
fn deserialize_webhooks() {
    let json = load_fixture("webhooks.json");
    let resp: PageResponse<Webhook> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.results[0].event, WebhookEvent::ItemUpdated);
    assert!(resp.results[0].disabled_at.is_none());
    assert_eq!(resp.results[1].event, WebhookEvent::TransactionsDeleted);
    assert!(resp.results[1].disabled_at.is_some());
}

#[test]
fn deserialize_identity() {
    let json = load_fixture("identity.json");
    let identity: IdentityResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(identity.full_name.as_deref(), Some("John Doe"));
    assert_eq!(identity.document_type.as_deref(), Some("CPF"));
    assert_eq!(identity.emails.as_ref().unwrap()[0].value, "john@example.com");
    let address = &identity.addresses.as_ref().unwrap()[0];
    assert_eq!(address.city.as_deref(), Some("São Paulo"));
    assert_eq!(
        identity.relations.as_ref().unwrap()[0].relation_type.as_deref(),
        Some("Mother")
    );
}

#[test]
fn page_envelope_defaults_missing_counters() {
    let resp: PageResponse<Category> = serde_json::from_str(r#"{"results": []}"#).unwrap();
    assert_eq!(resp.page, 1);
    assert_eq!(resp.total_pages, 1);
    assert_eq!(resp.total, 0);
}

#[test]
fn income_report_year_accepts_number_or_string() {
    let reports: Vec<IncomeReport> = serde_json::from_str(
        r#"[{"year": 2023, "url": "https://a/1.pdf"}, {"year": "2022", "url": "https://a/2.pdf"}]"#,
    )
    .unwrap();
    assert_eq!(reports[0].year, "2023");
    assert_eq!(reports[1].year, "2022");
}
