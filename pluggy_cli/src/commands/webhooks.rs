use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Args, Subcommand};
use pluggy_api::types::{CreateWebhook, WebhookEvent};
use pluggy_api::Client;

use super::{parse_enum, parse_key_val};
use crate::output::{print_webhooks, OutputFormat};

#[derive(Args)]
pub struct WebhooksArgs {
    #[command(subcommand)]
    pub command: WebhooksCommand,
}

#[derive(Subcommand)]
pub enum WebhooksCommand {
    /// List registered webhooks
    List,
    /// Register a webhook
    Create {
        /// Event to subscribe to, e.g. item/updated, transactions/deleted, all
        #[arg(long)]
        event: String,

        /// URL that receives the notifications
        #[arg(long)]
        url: String,

        /// Extra header sent with every notification, repeatable (NAME=VALUE)
        #[arg(long = "header", value_parser = parse_key_val)]
        headers: Vec<(String, String)>,
    },
    /// Remove a webhook
    Delete {
        /// Webhook ID
        id: String,
    },
}

pub fn build_webhook(
    event: &str,
    url: &str,
    headers: &[(String, String)],
) -> Result<CreateWebhook> {
    let event: WebhookEvent = parse_enum("event", event)?;
    let headers = if headers.is_empty() {
        None
    } else {
        Some(headers.iter().cloned().collect::<BTreeMap<_, _>>())
    };
    Ok(CreateWebhook {
        event,
        url: url.to_string(),
        headers,
    })
}

pub async fn run(args: &WebhooksArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        WebhooksCommand::List => {
            let resp = client.fetch_webhooks().await?;
            eprintln!("{} webhooks", resp.results.len());
            print_webhooks(&resp.results, format)?;
        }
        WebhooksCommand::Create {
            event,
            url,
            headers,
        } => {
            let webhook = client
                .create_webhook(&build_webhook(event, url, headers)?)
                .await?;
            eprintln!("Created webhook {}", webhook.id);
            print_webhooks(std::slice::from_ref(&webhook), format)?;
        }
        WebhooksCommand::Delete { id } => {
            client.delete_webhook(id).await?;
            eprintln!("Deleted webhook {}", id);
        }
    }
    Ok(())
}
