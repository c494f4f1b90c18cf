use anyhow::{bail, Result};
use clap::Args;
use pluggy_api::Client;

use crate::output::{print_identity, OutputFormat};

#[derive(Args)]
pub struct IdentityArgs {
    /// Look up the identity collected for this item
    #[arg(long, conflicts_with = "id")]
    pub item: Option<String>,

    /// Identity ID
    #[arg(long)]
    pub id: Option<String>,
}

pub async fn run(args: &IdentityArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let identity = match (&args.item, &args.id) {
        (Some(item), _) => client.fetch_identity_by_item_id(item).await?,
        (None, Some(id)) => client.fetch_identity(id).await?,
        (None, None) => bail!("either --item or --id is required"),
    };
    print_identity(&identity, format)
}
