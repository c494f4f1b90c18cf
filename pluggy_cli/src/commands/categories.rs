use anyhow::Result;
use clap::Args;
use pluggy_api::Client;

use crate::output::{print_categories, OutputFormat};

#[derive(Args)]
pub struct CategoriesArgs {
    /// Show a single category instead of the full list
    #[arg(long)]
    pub id: Option<String>,
}

pub async fn run(args: &CategoriesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(ref id) = args.id {
        let category = client.fetch_category(id).await?;
        return print_categories(std::slice::from_ref(&category), format);
    }

    let resp = client.fetch_categories().await?;
    eprintln!("{} categories", resp.total);
    print_categories(&resp.results, format)
}
