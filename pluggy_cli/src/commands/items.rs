use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use pluggy_api::types::{CreateItem, UpdateItem};
use pluggy_api::Client;

use super::{parse_key_val, to_parameters};
use crate::output::{print_item, OutputFormat};

#[derive(Args)]
pub struct ItemsArgs {
    #[command(subcommand)]
    pub command: ItemsCommand,
}

#[derive(Subcommand)]
pub enum ItemsCommand {
    /// Show one item
    Get {
        /// Item ID
        id: String,
    },
    /// Connect to an institution, starting the first sync
    Create {
        /// Connector ID
        #[arg(long)]
        connector: i64,

        /// Credential parameter, repeatable (e.g. --param user=user-ok)
        #[arg(long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,

        /// URL notified when the item changes
        #[arg(long)]
        webhook_url: Option<String>,

        /// Your identifier for the end user
        #[arg(long)]
        client_user_id: Option<String>,

        /// Skip checking the parameters against the connector first
        #[arg(long)]
        skip_validation: bool,
    },
    /// Update credentials or settings and trigger a new sync
    Update {
        /// Item ID
        id: String,

        /// Credential parameter, repeatable
        #[arg(long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,

        #[arg(long)]
        webhook_url: Option<String>,

        #[arg(long)]
        client_user_id: Option<String>,
    },
    /// Answer a pending MFA challenge
    Mfa {
        /// Item ID
        id: String,

        /// MFA parameter, repeatable (e.g. --param token=123456)
        #[arg(long = "param", value_parser = parse_key_val, required = true)]
        params: Vec<(String, String)>,
    },
    /// Delete an item and its collected data
    Delete {
        /// Item ID
        id: String,
    },
}

pub fn build_update(
    params: &[(String, String)],
    webhook_url: &Option<String>,
    client_user_id: &Option<String>,
) -> UpdateItem {
    UpdateItem {
        parameters: if params.is_empty() {
            None
        } else {
            Some(to_parameters(params))
        },
        webhook_url: webhook_url.clone(),
        client_user_id: client_user_id.clone(),
        products: None,
    }
}

pub async fn run(args: &ItemsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        ItemsCommand::Get { id } => {
            let item = client.fetch_item(id).await?;
            print_item(&item, format)?;
        }
        ItemsCommand::Create {
            connector,
            params,
            webhook_url,
            client_user_id,
            skip_validation,
        } => {
            let parameters = to_parameters(params);
            if !skip_validation {
                let validation = client.validate_parameters(*connector, &parameters).await?;
                if !validation.is_valid() {
                    for error in &validation.errors {
                        eprintln!(
                            "  {}: {}",
                            error.parameter.as_deref().unwrap_or("-"),
                            error.message
                        );
                    }
                    bail!("parameters rejected by connector {}", connector);
                }
            }

            let mut body = CreateItem::new(*connector, parameters);
            if let Some(ref url) = webhook_url {
                body = body.with_webhook_url(url);
            }
            if let Some(ref user) = client_user_id {
                body = body.with_client_user_id(user);
            }
            let item = client.create_item(&body).await?;
            eprintln!("Created item {}", item.id);
            print_item(&item, format)?;
        }
        ItemsCommand::Update {
            id,
            params,
            webhook_url,
            client_user_id,
        } => {
            let update = build_update(params, webhook_url, client_user_id);
            let item = client.update_item(id, &update).await?;
            print_item(&item, format)?;
        }
        ItemsCommand::Mfa { id, params } => {
            let item = client.update_item_mfa(id, &to_parameters(params)).await?;
            print_item(&item, format)?;
        }
        ItemsCommand::Delete { id } => {
            client.delete_item(id).await?;
            eprintln!("Deleted item {}", id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_serializes_to_all_nulls() {
        let update = build_update(&[], &None, &None);
        let value = serde_json::to_value(&update).unwrap();
        assert!(value.as_object().unwrap().values().all(|v| v.is_null()));
    }

    #[test]
    fn update_carries_parameters_and_webhook() {
        let update = build_update(
            &[("password".to_string(), "new".to_string())],
            &Some("https://example.com/hook".to_string()),
            &None,
        );
        assert_eq!(
            update.parameters.unwrap().get("password").map(String::as_str),
            Some("new")
        );
        assert_eq!(update.webhook_url.as_deref(), Some("https://example.com/hook"));
    }
}
