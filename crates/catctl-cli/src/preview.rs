use anyhow::bail;
use clap::Args;
use rust_decimal::Decimal;

use catctl_core::order_preview::{preview, subtotal, Coupon, LineItem};

use crate::print_json;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Repeatable: --item PRICE,QTY (e.g. --item 12.50,2)
    #[arg(long = "item", value_name = "PRICE,QTY", required = true)]
    items: Vec<String>,
    /// Manual discount amount; ignored when --coupon is given.
    #[arg(long, default_value = "0")]
    discount: Decimal,
    /// Coupon spec: percentage:10 or fixed:5
    #[arg(long)]
    coupon: Option<String>,
    #[arg(long, default_value = "0")]
    shipping: Decimal,
    #[arg(long, default_value = "0")]
    tax: Decimal,
}

pub fn run(args: &PreviewArgs) -> anyhow::Result<()> {
    let items = args
        .items
        .iter()
        .map(|raw| parse_item(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let discount = match &args.coupon {
        Some(raw) => parse_coupon(raw)?.discount(subtotal(&items)),
        None => args.discount,
    };

    let totals = preview(&items, discount, args.shipping, args.tax);
    print_json(&totals)
}

/// Parses one `--item` argument of the form `PRICE,QTY`.
fn parse_item(raw: &str) -> anyhow::Result<LineItem> {
    let Some((price, quantity)) = raw.split_once(',') else {
        bail!("expected PRICE,QTY but got '{raw}'");
    };
    let price: Decimal = price
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid price in '{raw}': {e}"))?;
    let quantity: u32 = quantity
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid quantity in '{raw}': {e}"))?;
    Ok(LineItem { price, quantity })
}

/// Parses a coupon spec of the form `percentage:10` or `fixed:5`.
fn parse_coupon(raw: &str) -> anyhow::Result<Coupon> {
    let Some((kind, value)) = raw.split_once(':') else {
        bail!("expected percentage:VALUE or fixed:VALUE but got '{raw}'");
    };
    let value: Decimal = value
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid coupon value in '{raw}': {e}"))?;
    match kind.trim() {
        "percentage" => Ok(Coupon::Percentage(value)),
        "fixed" => Ok(Coupon::Fixed(value)),
        other => bail!("unknown coupon type '{other}'"),
    }
}
