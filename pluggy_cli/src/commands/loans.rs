use anyhow::Result;
use clap::Args;
use pluggy_api::{Client, PageFilters, PagedQuery};

use crate::output::{print_loans, OutputFormat};

#[derive(Args)]
pub struct LoansArgs {
    /// Item whose loans to list
    #[arg(long)]
    pub item: String,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: u32,
}

pub async fn run(args: &LoansArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let page = PageFilters::default()
        .with_page(args.page)
        .with_page_size(args.page_size);
    let resp = client.fetch_loans(&args.item, &page).await?;

    eprintln!(
        "Page {}/{} ({} total loans)",
        resp.page, resp.total_pages, resp.total
    );

    print_loans(&resp.results, format)
}
