use chrono::NaiveDate;
use pluggy_api::types::{AccountType, ConnectorType, InvestmentType};
use pluggy_api::{
    AccountFilters, ApiRequest, ConnectorFilters, InvestmentFilters, PageFilters, PagedQuery,
    Query, QueryParams, TransactionFilters,
};

#[test]
fn connector_filters_full() {
    let query = ConnectorFilters::default()
        .with_name("Banco")
        .with_countries(&["br", "mx"])
        .with_types(&[ConnectorType::PersonalBank, ConnectorType::BusinessBank])
        .with_open_finance(true)
        .with_payment_initiation(false)
        .to_params()
        .to_query_string();
    assert_eq!(
        query,
        "?countries=BR%2CMX&isOpenFinance=true&name=Banco&supportsPaymentInitiation=false&types=PERSONAL_BANK%2CBUSINESS_BANK"
    );
}

#[test]
fn account_filters_type() {
    let params = AccountFilters::default().with_type(AccountType::Bank).to_params();
    assert_eq!(params.encode(), "type=BANK");
}

#[test]
fn transaction_filters_keep_dates_when_paging() {
    let filters = TransactionFilters::default()
        .with_from(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        .with_page(3)
        .with_page_size(100);
    assert_eq!(filters.common.page, Some(3));
    assert_eq!(
        filters.to_params().encode(),
        "from=2024-03-01&page=3&pageSize=100"
    );
}

#[test]
fn investment_filters_type_and_page() {
    let filters = InvestmentFilters::default()
        .with_type(InvestmentType::FixedIncome)
        .with_page_size(50);
    assert_eq!(filters.to_params().encode(), "pageSize=50&type=FIXED_INCOME");
}

#[test]
fn page_filters_default_is_empty() {
    assert!(PageFilters::default().to_params().is_empty());
    assert_eq!(PageFilters::default().to_params().to_query_string(), "");
}

#[test]
fn request_query_merges_filters_over_base_params() {
    let request = ApiRequest::get("transactions")
        .with_query(QueryParams::new().with("accountId", "acc-1").with("page", 9u32))
        .with_filters(&PageFilters::default().with_page(2));
    assert_eq!(request.query.encode(), "accountId=acc-1&page=2");
}
