mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "pluggy")]
#[command(about = "Query open-banking data through the Pluggy API")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    /// API root, overrides PLUGGY_API_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exchange the client credentials for an API key
    Auth(commands::auth::AuthArgs),
    /// List connectors (supported institutions)
    Connectors(commands::connectors::ConnectorsArgs),
    /// Show one connector
    Connector(commands::connectors::ConnectorArgs),
    /// Create, inspect, update or delete items
    Items(commands::items::ItemsArgs),
    /// List the accounts of an item
    Accounts(commands::accounts::AccountsArgs),
    /// Show one account
    Account(commands::accounts::AccountArgs),
    /// List the transactions of an account
    Transactions(commands::transactions::TransactionsArgs),
    /// Show one transaction
    Transaction(commands::transactions::TransactionArgs),
    /// Assign a category to a transaction
    Categorize(commands::transactions::CategorizeArgs),
    /// List transaction categories
    Categories(commands::categories::CategoriesArgs),
    /// List the investments of an item
    Investments(commands::investments::InvestmentsArgs),
    /// List the loans of an item
    Loans(commands::loans::LoansArgs),
    /// Show identity data of an item owner
    Identity(commands::identity::IdentityArgs),
    /// Manage webhooks
    Webhooks(commands::webhooks::WebhooksArgs),
    /// List income reports of an item
    IncomeReports(commands::income_reports::IncomeReportsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let default_directive: tracing_subscriber::filter::Directive = "pluggy=info".parse()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_directive)
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    let client = settings.client(cli.base_url.as_deref())?;
    tracing::debug!("Using API at {}", client.base_url());
    let format = cli.output;

    match &cli.command {
        Commands::Auth(args) => commands::auth::run(args, &client).await?,
        Commands::Connectors(args) => commands::connectors::run(args, &client, &format).await?,
        Commands::Connector(args) => commands::connectors::run_one(args, &client, &format).await?,
        Commands::Items(args) => commands::items::run(args, &client, &format).await?,
        Commands::Accounts(args) => commands::accounts::run(args, &client, &format).await?,
        Commands::Account(args) => commands::accounts::run_one(args, &client, &format).await?,
        Commands::Transactions(args) => {
            commands::transactions::run(args, &client, &format).await?
        }
        Commands::Transaction(args) => {
            commands::transactions::run_one(args, &client, &format).await?
        }
        Commands::Categorize(args) => {
            commands::transactions::categorize(args, &client, &format).await?
        }
        Commands::Categories(args) => commands::categories::run(args, &client, &format).await?,
        Commands::Investments(args) => commands::investments::run(args, &client, &format).await?,
        Commands::Loans(args) => commands::loans::run(args, &client, &format).await?,
        Commands::Identity(args) => commands::identity::run(args, &client, &format).await?,
        Commands::Webhooks(args) => commands::webhooks::run(args, &client, &format).await?,
        Commands::IncomeReports(args) => {
            commands::income_reports::run(args, &client, &format).await?
        }
    }

    Ok(())
}
