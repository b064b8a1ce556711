use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;
use uuid::Uuid;

use catctl_client::{CatalogClient, Page};
use catctl_core::product::ProductDraft;
use catctl_core::AppConfig;

use crate::{confirm, print_json};

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List products (paginated).
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one product with its variants.
    Get { id: Uuid },
    /// Create a product from a JSON draft file.
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    /// Update a product from a JSON draft file.
    Update {
        id: Uuid,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a product (asks for confirmation unless --yes).
    Delete {
        id: Uuid,
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(
    command: ProductsCommand,
    client: &CatalogClient,
    config: &AppConfig,
) -> anyhow::Result<()> {
    match command {
        ProductsCommand::List { page, limit } => {
            let page = Page {
                page,
                limit: limit.or(Some(config.page_limit)),
            };
            let products = client.list_products(page).await?;
            print_json(&products)
        }
        ProductsCommand::Get { id } => {
            let (product, variants) =
                tokio::try_join!(client.get_product(id), client.list_variants(id))?;
            print_json(&product)?;
            if !variants.is_empty() {
                println!("-- variants --");
                print_json(&variants)?;
            }
            Ok(())
        }
        ProductsCommand::Create { file } => {
            let draft = read_draft(&file)?;
            draft.validate()?;
            let product = client.create_product(&draft).await?;
            print_json(&product)
        }
        ProductsCommand::Update { id, file } => {
            let draft = read_draft(&file)?;
            draft.validate()?;
            let product = client.update_product(id, &draft).await?;
            print_json(&product)
        }
        ProductsCommand::Delete { id, yes } => {
            if !confirm(&format!("Delete product {id}? This cannot be undone."), yes)? {
                println!("aborted");
                return Ok(());
            }
            client.delete_product(id).await?;
            println!("deleted {id}");
            Ok(())
        }
    }
}

fn read_draft(path: &Path) -> anyhow::Result<ProductDraft> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading draft file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing product draft from {}", path.display()))
}
