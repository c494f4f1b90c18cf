use anyhow::Result;
use clap::Args;
use pluggy_api::types::InvestmentType;
use pluggy_api::{Client, InvestmentFilters, PagedQuery};

use super::parse_enum;
use crate::output::{print_investments, OutputFormat};

#[derive(Args)]
pub struct InvestmentsArgs {
    /// Item whose investments to list
    #[arg(long)]
    pub item: String,

    /// Filter by type: mutual-fund, security, equity, coe, fixed-income, etf, other
    #[arg(long = "type")]
    pub investment_type: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: u32,
}

pub async fn run(args: &InvestmentsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut filters = InvestmentFilters::default()
        .with_page(args.page)
        .with_page_size(args.page_size);
    if let Some(ref value) = args.investment_type {
        let investment_type: InvestmentType = parse_enum("type", value)?;
        filters = filters.with_type(investment_type);
    }

    let resp = client.fetch_investments(&args.item, &filters).await?;
    eprintln!(
        "Page {}/{} ({} total investments)",
        resp.page, resp.total_pages, resp.total
    );

    print_investments(&resp.results, format)
}
