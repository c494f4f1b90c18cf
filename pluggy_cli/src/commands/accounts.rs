use anyhow::Result;
use clap::Args;
use pluggy_api::types::AccountType;
use pluggy_api::{AccountFilters, Client};

use super::parse_enum;
use crate::output::{print_accounts, OutputFormat};

#[derive(Args)]
pub struct AccountsArgs {
    /// Item whose accounts to list
    #[arg(long)]
    pub item: String,

    /// Filter by account type: bank, credit
    #[arg(long = "type")]
    pub account_type: Option<String>,
}

#[derive(Args)]
pub struct AccountArgs {
    /// Account ID
    pub id: String,
}

pub async fn run(args: &AccountsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut filters = AccountFilters::default();
    if let Some(ref value) = args.account_type {
        let account_type: AccountType = parse_enum("type", value)?;
        filters = filters.with_type(account_type);
    }

    let resp = client.fetch_accounts(&args.item, &filters).await?;
    eprintln!("{} accounts", resp.total);

    print_accounts(&resp.results, format)
}

pub async fn run_one(args: &AccountArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let account = client.fetch_account(&args.id).await?;
    print_accounts(std::slice::from_ref(&account), format)
}
