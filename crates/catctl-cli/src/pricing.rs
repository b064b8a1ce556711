use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use catctl_client::CatalogClient;
use catctl_core::pricing::{ProductPricing, SpecialPricing, TierPricing};

use crate::{confirm, print_json};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PricingKind {
    Product,
    Tier,
    Special,
}

#[derive(Debug, Subcommand)]
pub enum PricingCommand {
    /// Fetch a pricing record by product (and optional variant).
    Get {
        kind: PricingKind,
        product_id: Uuid,
        #[arg(long)]
        variant_id: Option<Uuid>,
    },
    /// Create a pricing record from a JSON file.
    Create {
        kind: PricingKind,
        #[arg(long)]
        file: PathBuf,
    },
    /// Replace a pricing record from a JSON file.
    Set {
        kind: PricingKind,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a pricing record (asks for confirmation unless --yes).
    Delete {
        kind: PricingKind,
        product_id: Uuid,
        #[arg(long)]
        variant_id: Option<Uuid>,
        #[arg(long)]
        yes: bool,
    },
    /// Ask the backend for the effective price and print its raw answer.
    Resolve {
        product_id: Uuid,
        #[arg(long)]
        variant_id: Option<Uuid>,
    },
}

pub async fn run(command: PricingCommand, client: &CatalogClient) -> anyhow::Result<()> {
    match command {
        PricingCommand::Get {
            kind,
            product_id,
            variant_id,
        } => match kind {
            PricingKind::Product => {
                print_json(&client.get_product_pricing(product_id, variant_id).await?)
            }
            PricingKind::Tier => {
                print_json(&client.get_tier_pricing(product_id, variant_id).await?)
            }
            PricingKind::Special => {
                print_json(&client.get_special_pricing(product_id, variant_id).await?)
            }
        },
        PricingCommand::Create { kind, file } => match kind {
            PricingKind::Product => {
                let record: ProductPricing = read_record(&file)?;
                print_json(&client.create_product_pricing(&record).await?)
            }
            PricingKind::Tier => {
                let record: TierPricing = read_record(&file)?;
                print_json(&client.create_tier_pricing(&record).await?)
            }
            PricingKind::Special => {
                let record: SpecialPricing = read_record(&file)?;
                print_json(&client.create_special_pricing(&record).await?)
            }
        },
        PricingCommand::Set { kind, file } => match kind {
            PricingKind::Product => {
                let record: ProductPricing = read_record(&file)?;
                print_json(&client.replace_product_pricing(&record).await?)
            }
            PricingKind::Tier => {
                let record: TierPricing = read_record(&file)?;
                print_json(&client.replace_tier_pricing(&record).await?)
            }
            PricingKind::Special => {
                let record: SpecialPricing = read_record(&file)?;
                print_json(&client.replace_special_pricing(&record).await?)
            }
        },
        PricingCommand::Delete {
            kind,
            product_id,
            variant_id,
            yes,
        } => {
            if !confirm(&format!("Delete pricing for product {product_id}?"), yes)? {
                println!("aborted");
                return Ok(());
            }
            match kind {
                PricingKind::Product => {
                    client.delete_product_pricing(product_id, variant_id).await?;
                }
                PricingKind::Tier => {
                    client.delete_tier_pricing(product_id, variant_id).await?;
                }
                PricingKind::Special => {
                    client.delete_special_pricing(product_id, variant_id).await?;
                }
            }
            println!("deleted");
            Ok(())
        }
        PricingCommand::Resolve {
            product_id,
            variant_id,
        } => {
            let resolution = client.resolve_price(product_id, variant_id).await?;
            print_json(&resolution)
        }
    }
}

fn read_record<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading pricing file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing pricing record from {}", path.display()))
}
