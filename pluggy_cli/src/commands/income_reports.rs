use anyhow::Result;
use clap::Args;
use pluggy_api::Client;

use crate::output::{print_income_reports, OutputFormat};

#[derive(Args)]
pub struct IncomeReportsArgs {
    /// Item whose income reports to list
    #[arg(long)]
    pub item: String,
}

pub async fn run(args: &IncomeReportsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.fetch_income_reports(&args.item).await?;
    eprintln!("{} income reports", resp.results.len());
    print_income_reports(&resp.results, format)
}
