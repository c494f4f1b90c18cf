use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use pluggy_api::{Client, PagedQuery, TransactionFilters};

use crate::output::{print_transactions, OutputFormat};

#[derive(Args)]
pub struct TransactionsArgs {
    /// Account whose transactions to list
    #[arg(long)]
    pub account: String,

    /// Only transactions on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Only transactions on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Fetch every page instead of a single one
    #[arg(long)]
    pub all: bool,

    /// Page number (ignored with --all)
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page (ignored with --all)
    #[arg(long, default_value = "20")]
    pub page_size: u32,
}

#[derive(Args)]
pub struct TransactionArgs {
    /// Transaction ID
    pub id: String,
}

#[derive(Args)]
pub struct CategorizeArgs {
    /// Transaction ID
    pub id: String,

    /// Category ID to assign
    #[arg(long)]
    pub category: String,
}

fn parse_date(flag: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid --{} date {:?}, expected YYYY-MM-DD", flag, value))
}

pub fn build_filters(args: &TransactionsArgs) -> Result<TransactionFilters> {
    let mut filters = TransactionFilters::default();
    if let Some(ref from) = args.from {
        filters = filters.with_from(parse_date("from", from)?);
    }
    if let Some(ref to) = args.to {
        filters = filters.with_to(parse_date("to", to)?);
    }
    Ok(filters)
}

pub async fn run(args: &TransactionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let filters = build_filters(args)?;

    if args.all {
        let transactions = client
            .fetch_all_transactions(&args.account, filters)
            .await?;
        eprintln!("{} transactions", transactions.len());
        return print_transactions(&transactions, format);
    }

    let filters = filters.with_page(args.page).with_page_size(args.page_size);
    let resp = client.fetch_transactions(&args.account, &filters).await?;

    eprintln!(
        "Page {}/{} ({} total transactions)",
        resp.page, resp.total_pages, resp.total
    );

    print_transactions(&resp.results, format)
}

pub async fn run_one(args: &TransactionArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let transaction = client.fetch_transaction(&args.id).await?;
    print_transactions(std::slice::from_ref(&transaction), format)
}

pub async fn categorize(args: &CategorizeArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let transaction = client
        .update_transaction_category(&args.id, &args.category)
        .await?;
    print_transactions(std::slice::from_ref(&transaction), format)
}

#[cfg(test)]
mod tests {
    use pluggy_api::Query;

    use super::*;

    fn args(from: Option<&str>, to: Option<&str>) -> TransactionsArgs {
        TransactionsArgs {
            account: "acc-1".to_string(),
            from: from.map(str::to_string),
            to: to.map(str::to_string),
            all: false,
            page: 1,
            page_size: 20,
        }
    }

    #[test]
    fn dates_become_filters() {
        let filters = build_filters(&args(Some("2024-01-01"), Some("2024-01-31"))).unwrap();
        assert_eq!(filters.to_params().encode(), "from=2024-01-01&to=2024-01-31");
    }

    #[test]
    fn bad_date_is_rejected() {
        let err = build_filters(&args(Some("01/02/2024"), None)).unwrap_err();
        assert!(err.to_string().contains("--from"));
    }
}
