use anyhow::Result;
use chrono::{DateTime, Utc};
use pluggy_api::types::{
    Account, Category, Connector, IdentityResponse, IncomeReport, Investment, Item, Loan,
    Transaction, Webhook,
};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Tabled, Serialize)]
struct ConnectorRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    connector_type: String,
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    country: String,
    #[tabled(rename = "MFA")]
    #[serde(rename = "MFA")]
    mfa: String,
    #[tabled(rename = "Open Finance")]
    #[serde(rename = "Open Finance")]
    open_finance: String,
}

#[derive(Tabled, Serialize)]
struct ItemRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Connector")]
    #[serde(rename = "Connector")]
    connector: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Execution")]
    #[serde(rename = "Execution")]
    execution: String,
    #[tabled(rename = "Last Updated")]
    #[serde(rename = "Last Updated")]
    last_updated: String,
}

#[derive(Tabled, Serialize)]
struct AccountRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    account_type: String,
    #[tabled(rename = "Subtype")]
    #[serde(rename = "Subtype")]
    subtype: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Number")]
    #[serde(rename = "Number")]
    number: String,
    #[tabled(rename = "Balance")]
    #[serde(rename = "Balance")]
    balance: String,
}

#[derive(Tabled, Serialize)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    tx_type: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
}

#[derive(Tabled, Serialize)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "Parent")]
    #[serde(rename = "Parent")]
    parent: String,
}

#[derive(Tabled, Serialize)]
struct WebhookRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Event")]
    #[serde(rename = "Event")]
    event: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
    #[tabled(rename = "Enabled")]
    #[serde(rename = "Enabled")]
    enabled: String,
}

#[derive(Tabled, Serialize)]
struct InvestmentRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    investment_type: String,
    #[tabled(rename = "Balance")]
    #[serde(rename = "Balance")]
    balance: String,
}

#[derive(Tabled, Serialize)]
struct LoanRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Product")]
    #[serde(rename = "Product")]
    product: String,
    #[tabled(rename = "Contract")]
    #[serde(rename = "Contract")]
    contract: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Due")]
    #[serde(rename = "Due")]
    due: String,
}

#[derive(Tabled, Serialize)]
struct IncomeReportRow {
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

#[derive(Tabled, Serialize)]
struct FieldRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_connector_rows(connectors: &[Connector]) -> Vec<ConnectorRow> {
    connectors
        .iter()
        .map(|c| ConnectorRow {
            id: c.id,
            name: c.name.clone(),
            connector_type: c.connector_type.to_string(),
            country: c.country.clone(),
            mfa: yes_no(c.has_mfa),
            open_finance: yes_no(c.is_open_finance),
        })
        .collect()
}

fn build_item_rows(items: &[Item]) -> Vec<ItemRow> {
    items
        .iter()
        .map(|i| ItemRow {
            id: i.id.clone(),
            connector: i.connector.name.clone(),
            status: i.status.to_string(),
            execution: serde_json::to_value(i.execution_status)
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_else(|| "UNKNOWN".to_string()),
            last_updated: i.last_updated_at.map(format_date).unwrap_or_default(),
        })
        .collect()
}

fn build_account_rows(accounts: &[Account]) -> Vec<AccountRow> {
    accounts
        .iter()
        .map(|a| AccountRow {
            id: a.id.clone(),
            account_type: a.account_type.to_string(),
            subtype: a.subtype.to_string(),
            name: a.marketing_name.clone().unwrap_or_else(|| a.name.clone()),
            number: a.number.clone(),
            balance: format_amount(a.balance, &a.currency_code),
        })
        .collect()
}

fn build_transaction_rows(transactions: &[Transaction]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|t| TransactionRow {
            date: format_date(t.date),
            id: t.id.clone(),
            description: t.description.clone(),
            tx_type: t.transaction_type.to_string(),
            amount: format_amount(t.amount, &t.currency_code),
            category: t.category.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_category_rows(categories: &[Category]) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id.clone(),
            description: c.description.clone(),
            parent: c.parent_description.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_webhook_rows(webhooks: &[Webhook]) -> Vec<WebhookRow> {
    webhooks
        .iter()
        .map(|w| WebhookRow {
            id: w.id.clone(),
            event: w.event.to_string(),
            url: w.url.clone(),
            enabled: yes_no(w.disabled_at.is_none()),
        })
        .collect()
}

fn build_investment_rows(investments: &[Investment]) -> Vec<InvestmentRow> {
    investments
        .iter()
        .map(|i| InvestmentRow {
            id: i.id.clone(),
            name: i.name.clone(),
            investment_type: i.investment_type.to_string(),
            balance: format_amount(i.balance, &i.currency_code),
        })
        .collect()
}

fn build_loan_rows(loans: &[Loan]) -> Vec<LoanRow> {
    loans
        .iter()
        .map(|l| LoanRow {
            id: l.id.clone(),
            product: l.product_name.clone(),
            contract: l.contract_number.clone().unwrap_or_default(),
            amount: l
                .contract_amount
                .map(|a| format_amount(a, &l.currency_code))
                .unwrap_or_default(),
            due: l.due_date.map(format_date).unwrap_or_default(),
        })
        .collect()
}

fn build_income_report_rows(reports: &[IncomeReport]) -> Vec<IncomeReportRow> {
    reports
        .iter()
        .map(|r| IncomeReportRow {
            year: r.year.clone(),
            url: r.url.clone(),
        })
        .collect()
}

fn build_identity_rows(identity: &IdentityResponse) -> Vec<FieldRow> {
    let join = |values: Option<Vec<String>>| values.unwrap_or_default().join(", ");
    vec![
        FieldRow {
            field: "Name",
            value: identity.full_name.clone().unwrap_or_default(),
        },
        FieldRow {
            field: "Document",
            value: match (&identity.document_type, &identity.document) {
                (Some(kind), Some(doc)) => format!("{} {}", kind, doc),
                (None, Some(doc)) => doc.clone(),
                _ => String::new(),
            },
        },
        FieldRow {
            field: "Birth Date",
            value: identity.birth_date.map(format_date).unwrap_or_default(),
        },
        FieldRow {
            field: "Emails",
            value: join(
                identity
                    .emails
                    .as_ref()
                    .map(|e| e.iter().map(|e| e.value.clone()).collect()),
            ),
        },
        FieldRow {
            field: "Phones",
            value: join(
                identity
                    .phone_numbers
                    .as_ref()
                    .map(|p| p.iter().map(|p| p.value.clone()).collect()),
            ),
        },
        FieldRow {
            field: "Addresses",
            value: join(identity.addresses.as_ref().map(|a| {
                a.iter()
                    .filter_map(|a| a.full_address.clone())
                    .collect()
            })),
        },
    ]
}

// -- Output --

fn emit<T: Serialize + ?Sized, R: Tabled + Serialize>(
    data: &T,
    rows: Vec<R>,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

pub fn print_connectors(connectors: &[Connector], format: &OutputFormat) -> Result<()> {
    emit(connectors, build_connector_rows(connectors), format)
}

pub fn print_item(item: &Item, format: &OutputFormat) -> Result<()> {
    emit(item, build_item_rows(std::slice::from_ref(item)), format)
}

pub fn print_accounts(accounts: &[Account], format: &OutputFormat) -> Result<()> {
    emit(accounts, build_account_rows(accounts), format)
}

pub fn print_transactions(transactions: &[Transaction], format: &OutputFormat) -> Result<()> {
    emit(transactions, build_transaction_rows(transactions), format)
}

pub fn print_categories(categories: &[Category], format: &OutputFormat) -> Result<()> {
    emit(categories, build_category_rows(categories), format)
}

pub fn print_webhooks(webhooks: &[Webhook], format: &OutputFormat) -> Result<()> {
    emit(webhooks, build_webhook_rows(webhooks), format)
}

pub fn print_investments(investments: &[Investment], format: &OutputFormat) -> Result<()> {
    emit(investments, build_investment_rows(investments), format)
}

pub fn print_loans(loans: &[Loan], format: &OutputFormat) -> Result<()> {
    emit(loans, build_loan_rows(loans), format)
}

pub fn print_income_reports(reports: &[IncomeReport], format: &OutputFormat) -> Result<()> {
    emit(reports, build_income_report_rows(reports), format)
}

pub fn print_identity(identity: &IdentityResponse, format: &OutputFormat) -> Result<()> {
    emit(identity, build_identity_rows(identity), format)
}

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_amount(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "yes" } else { "no" };
    text.to_string()
}
