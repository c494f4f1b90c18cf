use anyhow::Result;
use clap::Args;
use pluggy_api::types::ConnectorType;
use pluggy_api::{Client, ConnectorFilters};

use super::parse_enum;
use crate::output::{print_connectors, OutputFormat};

#[derive(Args)]
pub struct ConnectorsArgs {
    /// Search by institution name
    #[arg(long)]
    pub name: Option<String>,

    /// Filter by country code, comma-separated (e.g. BR,AR)
    #[arg(long, value_delimiter = ',')]
    pub country: Vec<String>,

    /// Filter by type, comma-separated: personal-bank, business-bank,
    /// investment, invoice, telecommunication, digital-economy,
    /// payment-account, other
    #[arg(long = "type", value_delimiter = ',')]
    pub types: Vec<String>,

    /// Include sandbox connectors
    #[arg(long)]
    pub sandbox: bool,

    /// Only Open Finance connectors
    #[arg(long)]
    pub open_finance: bool,

    /// Only connectors that support payment initiation
    #[arg(long)]
    pub payment_initiation: bool,
}

#[derive(Args)]
pub struct ConnectorArgs {
    /// Connector ID
    pub id: i64,
}

pub fn build_filters(args: &ConnectorsArgs) -> Result<ConnectorFilters> {
    let mut filters = ConnectorFilters::default();
    if let Some(ref name) = args.name {
        filters = filters.with_name(name);
    }
    for country in &args.country {
        filters = filters.with_country(country);
    }
    for value in &args.types {
        let connector_type: ConnectorType = parse_enum("type", value)?;
        filters = filters.with_type(connector_type);
    }
    if args.sandbox {
        filters = filters.with_sandbox(true);
    }
    if args.open_finance {
        filters = filters.with_open_finance(true);
    }
    if args.payment_initiation {
        filters = filters.with_payment_initiation(true);
    }
    Ok(filters)
}

pub async fn run(args: &ConnectorsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let filters = build_filters(args)?;
    let resp = client.fetch_connectors(&filters).await?;

    eprintln!(
        "Page {}/{} ({} total connectors)",
        resp.page, resp.total_pages, resp.total
    );

    print_connectors(&resp.results, format)
}

pub async fn run_one(args: &ConnectorArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let connector = client.fetch_connector(args.id).await?;
    print_connectors(std::slice::from_ref(&connector), format)
}
