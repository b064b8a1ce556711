use std::io::Write;

use clap::{Parser, Subcommand};

use catctl_client::CatalogClient;

mod preview;
mod pricing;
mod products;
mod promo;
mod stock;
mod twofa;
mod variants;

#[derive(Debug, Parser)]
#[command(name = "catctl")]
#[command(about = "Catalog admin command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Product CRUD.
    #[command(subcommand)]
    Products(products::ProductsCommand),
    /// Variant listing, generation, and persistence.
    #[command(subcommand)]
    Variants(variants::VariantsCommand),
    /// Product, tier, and special pricing records; price resolution.
    #[command(subcommand)]
    Pricing(pricing::PricingCommand),
    /// Combo offers and flash sales.
    #[command(subcommand)]
    Promo(promo::PromoCommand),
    /// Stock movement log.
    #[command(subcommand)]
    Stock(stock::StockCommand),
    /// Local order quick-preview calculator; no backend call.
    Preview(preview::PreviewArgs),
    /// Two-factor authentication flows.
    #[command(subcommand)]
    Twofa(twofa::TwofaCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Preview is pure local math; it must work without any backend config.
    if let Commands::Preview(args) = &cli.command {
        init_tracing("info");
        return preview::run(args);
    }

    dotenvy::dotenv().ok();
    let config = catctl_core::load_app_config_from_env()?;
    init_tracing(&config.log_level);
    let client = CatalogClient::from_config(&config)?;

    match cli.command {
        Commands::Products(command) => products::run(command, &client, &config).await,
        Commands::Variants(command) => variants::run(command, &client, &config).await,
        Commands::Pricing(command) => pricing::run(command, &client).await,
        Commands::Promo(command) => promo::run(command, &client, &config).await,
        Commands::Stock(command) => stock::run(command, &client, &config).await,
        Commands::Twofa(command) => twofa::run(command, &client).await,
        Commands::Preview(_) => unreachable!("handled above"),
    }
}

fn init_tracing(default_filter: &str) {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

/// Interactive gate for destructive commands. `--yes` skips the prompt.
pub(crate) fn confirm(prompt: &str, assume_yes: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let mut stderr = std::io::stderr();
    write!(stderr, "{prompt} [y/N]: ")?;
    stderr.flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

/// Prints any serializable record as pretty JSON.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
