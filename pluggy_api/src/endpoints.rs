//! Typed wrappers over the REST resources. Each method is one dispatcher call
//! (or, for the `fetch_all_*` methods, one paginator run).

use serde_json::json;

use crate::paginate::fetch_all;
use crate::query::{
    AccountFilters, ConnectorFilters, InvestmentFilters, PageFilters, QueryParams,
    TransactionFilters,
};
use crate::request::{path_segment, ApiRequest};
use crate::types::{
    Account, Category, ConnectToken, ConnectTokenOptions, Connector, ConnectorId, CreateItem,
    CreateWebhook, IdentityResponse, IncomeReport, Investment, InvestmentTransaction, Item, Loan,
    Opportunity, PageResponse, Parameters, Transaction, UpdateItem, UpdateWebhook,
    ValidationResult, Webhook,
};
use crate::{Client, Error};

fn by_item(item_id: &str) -> QueryParams {
    QueryParams::new().with("itemId", item_id)
}

impl Client {
    /// Fetches connectors matching `filters`.
    pub async fn fetch_connectors(
        &self,
        filters: &ConnectorFilters,
    ) -> Result<PageResponse<Connector>, Error> {
        self.send(ApiRequest::get("connectors").with_filters(filters))
            .await
    }

    pub async fn fetch_connector(&self, id: ConnectorId) -> Result<Connector, Error> {
        self.send(ApiRequest::get(format!("connectors/{}", id)))
            .await
    }

    /// Checks `parameters` against a connector's credential rules without
    /// creating an item.
    pub async fn validate_parameters(
        &self,
        id: ConnectorId,
        parameters: &Parameters,
    ) -> Result<ValidationResult, Error> {
        let request = ApiRequest::post(format!("connectors/{}/validate", id)).with_json(parameters)?;
        self.send(request).await
    }

    /// Creates an item, which starts the first sync against the institution.
    pub async fn create_item(&self, item: &CreateItem) -> Result<Item, Error> {
        let request = ApiRequest::post("items").with_json(item)?;
        self.send(request).await
    }

    pub async fn fetch_item(&self, id: &str) -> Result<Item, Error> {
        self.send(ApiRequest::get(format!("items/{}", path_segment(id))))
            .await
    }

    /// Updates an item and triggers a new sync. An empty [`UpdateItem`]
    /// sends no body and simply re-syncs.
    pub async fn update_item(&self, id: &str, update: &UpdateItem) -> Result<Item, Error> {
        let request =
            ApiRequest::patch(format!("items/{}", path_segment(id))).with_json(update)?;
        self.send(request).await
    }

    /// Answers a pending MFA challenge for an item.
    pub async fn update_item_mfa(&self, id: &str, parameters: &Parameters) -> Result<Item, Error> {
        let request =
            ApiRequest::post(format!("items/{}/mfa", path_segment(id))).with_json(parameters)?;
        self.send(request).await
    }

    pub async fn delete_item(&self, id: &str) -> Result<(), Error> {
        self.execute(ApiRequest::delete(format!("items/{}", path_segment(id))))
            .await
            .map(drop)
    }

    /// Fetches the accounts of an item.
    pub async fn fetch_accounts(
        &self,
        item_id: &str,
        filters: &AccountFilters,
    ) -> Result<PageResponse<Account>, Error> {
        let request = ApiRequest::get("accounts")
            .with_query(by_item(item_id))
            .with_filters(filters);
        self.send(request).await
    }

    pub async fn fetch_account(&self, id: &str) -> Result<Account, Error> {
        self.send(ApiRequest::get(format!("accounts/{}", path_segment(id))))
            .await
    }

    /// Fetches one page of an account's transactions.
    pub async fn fetch_transactions(
        &self,
        account_id: &str,
        filters: &TransactionFilters,
    ) -> Result<PageResponse<Transaction>, Error> {
        let request = ApiRequest::get("transactions")
            .with_query(QueryParams::new().with("accountId", account_id))
            .with_filters(filters);
        self.send(request).await
    }

    /// Fetches every transaction of an account matching `filters`, walking
    /// all pages. Any page set on `filters` is ignored.
    pub async fn fetch_all_transactions(
        &self,
        account_id: &str,
        filters: TransactionFilters,
    ) -> Result<Vec<Transaction>, Error> {
        fetch_all(
            move |page: TransactionFilters| async move {
                self.fetch_transactions(account_id, &page).await
            },
            filters,
        )
        .await
    }

    pub async fn fetch_transaction(&self, id: &str) -> Result<Transaction, Error> {
        self.send(ApiRequest::get(format!("transactions/{}", path_segment(id))))
            .await
    }

    /// Recategorizes a transaction.
    pub async fn update_transaction_category(
        &self,
        id: &str,
        category_id: &str,
    ) -> Result<Transaction, Error> {
        let request = ApiRequest::patch(format!("transactions/{}", path_segment(id)))
            .with_body(json!({ "categoryId": category_id }));
        self.send(request).await
    }

    pub async fn fetch_investments(
        &self,
        item_id: &str,
        filters: &InvestmentFilters,
    ) -> Result<PageResponse<Investment>, Error> {
        let request = ApiRequest::get("investments")
            .with_query(by_item(item_id))
            .with_filters(filters);
        self.send(request).await
    }

    pub async fn fetch_investment(&self, id: &str) -> Result<Investment, Error> {
        self.send(ApiRequest::get(format!("investments/{}", path_segment(id))))
            .await
    }

    pub async fn fetch_investment_transactions(
        &self,
        investment_id: &str,
        page: &PageFilters,
    ) -> Result<PageResponse<InvestmentTransaction>, Error> {
        let path = format!("investments/{}/transactions", path_segment(investment_id));
        let request = ApiRequest::get(path).with_filters(page);
        self.send(request).await
    }

    /// Fetches the full movement history of an investment.
    pub async fn fetch_all_investment_transactions(
        &self,
        investment_id: &str,
    ) -> Result<Vec<InvestmentTransaction>, Error> {
        fetch_all(
            move |page: PageFilters| async move {
                self.fetch_investment_transactions(investment_id, &page)
                    .await
            },
            PageFilters::default(),
        )
        .await
    }

    /// Fetches credit offers available to the owner of an item.
    pub async fn fetch_opportunities(
        &self,
        item_id: &str,
        page: &PageFilters,
    ) -> Result<PageResponse<Opportunity>, Error> {
        let request = ApiRequest::get("opportunities")
            .with_query(by_item(item_id))
            .with_filters(page);
        self.send(request).await
    }

    pub async fn fetch_loans(
        &self,
        item_id: &str,
        page: &PageFilters,
    ) -> Result<PageResponse<Loan>, Error> {
        let request = ApiRequest::get("loans")
            .with_query(by_item(item_id))
            .with_filters(page);
        self.send(request).await
    }

    pub async fn fetch_loan(&self, id: &str) -> Result<Loan, Error> {
        self.send(ApiRequest::get(format!("loans/{}", path_segment(id))))
            .await
    }

    pub async fn fetch_identity(&self, id: &str) -> Result<IdentityResponse, Error> {
        self.send(ApiRequest::get(format!("identity/{}", path_segment(id))))
            .await
    }

    pub async fn fetch_identity_by_item_id(
        &self,
        item_id: &str,
    ) -> Result<IdentityResponse, Error> {
        self.send(ApiRequest::get("identity").with_query(by_item(item_id)))
            .await
    }

    pub async fn fetch_categories(&self) -> Result<PageResponse<Category>, Error> {
        self.send(ApiRequest::get("categories")).await
    }

    pub async fn fetch_category(&self, id: &str) -> Result<Category, Error> {
        self.send(ApiRequest::get(format!("categories/{}", path_segment(id))))
            .await
    }

    pub async fn fetch_webhooks(&self) -> Result<PageResponse<Webhook>, Error> {
        self.send(ApiRequest::get("webhooks")).await
    }

    pub async fn fetch_webhook(&self, id: &str) -> Result<Webhook, Error> {
        self.send(ApiRequest::get(format!("webhooks/{}", path_segment(id))))
            .await
    }

    pub async fn create_webhook(&self, webhook: &CreateWebhook) -> Result<Webhook, Error> {
        let request = ApiRequest::post("webhooks").with_json(webhook)?;
        self.send(request).await
    }

    pub async fn update_webhook(&self, id: &str, update: &UpdateWebhook) -> Result<Webhook, Error> {
        let request =
            ApiRequest::patch(format!("webhooks/{}", path_segment(id))).with_json(update)?;
        self.send(request).await
    }

    pub async fn delete_webhook(&self, id: &str) -> Result<(), Error> {
        self.execute(ApiRequest::delete(format!("webhooks/{}", path_segment(id))))
            .await
            .map(drop)
    }

    pub async fn fetch_income_reports(
        &self,
        item_id: &str,
    ) -> Result<PageResponse<IncomeReport>, Error> {
        self.send(ApiRequest::get("income-reports").with_query(by_item(item_id)))
            .await
    }

    /// Creates a connect token for a frontend widget. With `item_id`, the
    /// token is scoped to updating that item.
    pub async fn create_connect_token(
        &self,
        item_id: Option<&str>,
        options: Option<&ConnectTokenOptions>,
    ) -> Result<ConnectToken, Error> {
        let request = ApiRequest::post("connect_token")
            .with_json(&json!({ "itemId": item_id, "options": options }))?;
        self.send(request).await
    }
}
