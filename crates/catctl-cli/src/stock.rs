use clap::{Subcommand, ValueEnum};
use uuid::Uuid;

use catctl_client::{CatalogClient, Page};
use catctl_core::stock::{MovementType, StockLogDraft};
use catctl_core::AppConfig;

use crate::print_json;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MovementArg {
    In,
    Out,
}

impl From<MovementArg> for MovementType {
    fn from(arg: MovementArg) -> Self {
        match arg {
            MovementArg::In => MovementType::In,
            MovementArg::Out => MovementType::Out,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum StockCommand {
    /// List stock log entries, optionally filtered to one product.
    List {
        #[arg(long)]
        product_id: Option<Uuid>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Append a stock movement. Entries are never edited or deleted.
    Log {
        #[arg(long)]
        product_id: Uuid,
        #[arg(long)]
        variant_id: Option<Uuid>,
        #[arg(long, value_enum)]
        movement: MovementArg,
        #[arg(long)]
        quantity: u32,
        #[arg(long)]
        source: String,
        #[arg(long)]
        note: Option<String>,
    },
}

pub async fn run(
    command: StockCommand,
    client: &CatalogClient,
    config: &AppConfig,
) -> anyhow::Result<()> {
    match command {
        StockCommand::List {
            product_id,
            page,
            limit,
        } => {
            let page = Page {
                page,
                limit: limit.or(Some(config.page_limit)),
            };
            print_json(&client.list_stock(product_id, page).await?)
        }
        StockCommand::Log {
            product_id,
            variant_id,
            movement,
            quantity,
            source,
            note,
        } => {
            let draft = StockLogDraft {
                product_id,
                variant_id,
                movement: movement.into(),
                quantity,
                source,
                note,
            };
            draft.validate()?;
            print_json(&client.record_stock(&draft).await?)
        }
    }
}
