use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use catctl_client::{CatalogClient, Page};
use catctl_core::promotion::{ComboDraft, FlashSaleDraft};
use catctl_core::AppConfig;

use crate::{confirm, print_json};

#[derive(Debug, Subcommand)]
pub enum PromoCommand {
    /// Combo offers.
    #[command(subcommand)]
    Combo(OfferAction),
    /// Flash sales.
    #[command(subcommand)]
    Flash(OfferAction),
}

#[derive(Debug, Subcommand)]
pub enum OfferAction {
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Create from a JSON draft file (validated locally first).
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    Delete {
        id: Uuid,
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(
    command: PromoCommand,
    client: &CatalogClient,
    config: &AppConfig,
) -> anyhow::Result<()> {
    match command {
        PromoCommand::Combo(action) => match action {
            OfferAction::List { page, limit } => {
                let page = page_of(page, limit, config);
                print_json(&client.list_combos(page).await?)
            }
            OfferAction::Create { file } => {
                let draft: ComboDraft = read_draft(&file)?;
                draft.validate()?;
                print_json(&client.create_combo(&draft).await?)
            }
            OfferAction::Delete { id, yes } => {
                if !confirm(&format!("Delete combo offer {id}?"), yes)? {
                    println!("aborted");
                    return Ok(());
                }
                client.delete_combo(id).await?;
                println!("deleted {id}");
                Ok(())
            }
        },
        PromoCommand::Flash(action) => match action {
            OfferAction::List { page, limit } => {
                let page = page_of(page, limit, config);
                print_json(&client.list_flash_sales(page).await?)
            }
            OfferAction::Create { file } => {
                let draft: FlashSaleDraft = read_draft(&file)?;
                draft.validate()?;
                print_json(&client.create_flash_sale(&draft).await?)
            }
            OfferAction::Delete { id, yes } => {
                if !confirm(&format!("Delete flash sale {id}?"), yes)? {
                    println!("aborted");
                    return Ok(());
                }
                client.delete_flash_sale(id).await?;
                println!("deleted {id}");
                Ok(())
            }
        },
    }
}

fn page_of(page: Option<u32>, limit: Option<u32>, config: &AppConfig) -> Page {
    Page {
        page,
        limit: limit.or(Some(config.page_limit)),
    }
}

fn read_draft<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading draft file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing draft from {}", path.display()))
}
