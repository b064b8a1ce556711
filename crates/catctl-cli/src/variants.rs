use anyhow::{bail, Context};
use clap::Subcommand;
use rust_decimal::Decimal;
use uuid::Uuid;

use catctl_client::CatalogClient;
use catctl_core::attribute::AttributeSelection;
use catctl_core::variant_gen::{generate_variants, sku_collisions};
use catctl_core::AppConfig;
use catctl_store::ProductStore;

use crate::{confirm, print_json};

#[derive(Debug, Subcommand)]
pub enum VariantsCommand {
    /// List a product's persisted variants.
    List { product_id: Uuid },
    /// Generate the variant cross-product locally and print the drafts.
    Generate {
        #[arg(long)]
        base_sku: String,
        /// Repeatable: --attr "Size=S,M,L" --attr "Color=Red,Blue"
        #[arg(long = "attr", value_name = "NAME=V1,V2,...")]
        attrs: Vec<String>,
        #[arg(long)]
        base_price: Decimal,
    },
    /// Generate and persist the drafts for a product.
    Save {
        product_id: Uuid,
        #[arg(long)]
        base_sku: String,
        #[arg(long = "attr", value_name = "NAME=V1,V2,...")]
        attrs: Vec<String>,
        #[arg(long)]
        base_price: Decimal,
    },
    /// Delete a variant (asks for confirmation unless --yes).
    Delete {
        id: Uuid,
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(
    command: VariantsCommand,
    client: &CatalogClient,
    _config: &AppConfig,
) -> anyhow::Result<()> {
    match command {
        VariantsCommand::List { product_id } => {
            let variants = client.list_variants(product_id).await?;
            print_json(&variants)
        }
        VariantsCommand::Generate {
            base_sku,
            attrs,
            base_price,
        } => {
            let drafts = generate(&base_sku, &attrs, base_price)?;
            print_json(&drafts)
        }
        VariantsCommand::Save {
            product_id,
            base_sku,
            attrs,
            base_price,
        } => {
            let drafts = generate(&base_sku, &attrs, base_price)?;
            let store = ProductStore::new(client.clone());
            let variants = store.save_variants(product_id, &drafts).await?;
            println!("saved {} variants", variants.len());
            print_json(&variants)
        }
        VariantsCommand::Delete { id, yes } => {
            if !confirm(&format!("Delete variant {id}?"), yes)? {
                println!("aborted");
                return Ok(());
            }
            client.delete_variant(id).await?;
            println!("deleted {id}");
            Ok(())
        }
    }
}

fn generate(
    base_sku: &str,
    attrs: &[String],
    base_price: Decimal,
) -> anyhow::Result<Vec<catctl_core::variant::VariantDraft>> {
    let selections = attrs
        .iter()
        .map(|raw| parse_selection(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let drafts = generate_variants(base_sku, &selections, base_price)
        .context("variant generation failed")?;
    let collisions = sku_collisions(&drafts);
    if !collisions.is_empty() {
        eprintln!(
            "warning: {} truncated SKU(s) collide: {}",
            collisions.len(),
            collisions.join(", ")
        );
    }
    Ok(drafts)
}

/// Parses one `--attr` argument of the form `Name=v1,v2,v3`.
fn parse_selection(raw: &str) -> anyhow::Result<AttributeSelection> {
    let Some((name, values)) = raw.split_once('=') else {
        bail!("expected NAME=V1,V2,... but got '{raw}'");
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("attribute name is empty in '{raw}'");
    }
    let values: Vec<String> = values
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    Ok(AttributeSelection::new(name, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_selection_splits_name_and_values() {
        let selection = parse_selection("Size=S,M,L").expect("parse");
        assert_eq!(selection.name, "Size");
        assert_eq!(selection.values, vec!["S", "M", "L"]);
    }

    #[test]
    fn parse_selection_trims_whitespace() {
        let selection = parse_selection(" Color = Navy Blue , Red ").expect("parse");
        assert_eq!(selection.name, "Color");
        assert_eq!(selection.values, vec!["Navy Blue", "Red"]);
    }

    #[test]
    fn parse_selection_without_equals_fails() {
        assert!(parse_selection("SizeS,M").is_err());
    }

    #[test]
    fn parse_selection_empty_name_fails() {
        assert!(parse_selection("=S,M").is_err());
    }

    #[test]
    fn parse_selection_keeps_empty_value_list() {
        // Validation of empty value lists belongs to the generator, which
        // names the attribute in its error.
        let selection = parse_selection("Size=").expect("parse");
        assert!(selection.values.is_empty());
    }

    #[test]
    fn generate_warns_but_returns_drafts() {
        let drafts = generate(
            "TSH",
            &["Size=S,M".to_string(), "Color=Red".to_string()],
            Decimal::from(10),
        )
        .expect("generate");
        assert_eq!(drafts.len(), 2);
    }

    #[test]
    fn generate_propagates_empty_value_error() {
        let result = generate("TSH", &["Size=".to_string()], Decimal::from(10));
        assert!(result.is_err());
    }
}
