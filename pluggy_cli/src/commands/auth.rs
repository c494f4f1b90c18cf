use anyhow::{Context, Result};
use clap::Args;
use pluggy_api::Client;

#[derive(Args)]
pub struct AuthArgs {
    /// Print the API key to stdout instead of only checking the credentials
    #[arg(long)]
    pub print_key: bool,
}

pub async fn run(args: &AuthArgs, client: &Client) -> Result<()> {
    let api_key = client.api_key().await.context("authentication failed")?;
    eprintln!("Authenticated against {}", client.base_url());
    if args.print_key {
        println!("{}", api_key);
    }
    Ok(())
}
