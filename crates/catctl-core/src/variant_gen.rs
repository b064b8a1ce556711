//! Variant generation: cross-product of selected attribute values.
//!
//! Generation is pure and idempotent; re-running it replaces whatever draft
//! list the caller held before, including any manual price/stock edits made
//! to unsaved drafts. Nothing is persisted here.

use rust_decimal::Decimal;

use crate::attribute::AttributeSelection;
use crate::variant::{VariantDraft, VariantOption, VariantStatus};
use crate::ValidationError;

/// Generated SKUs and barcodes are truncated to this many characters.
pub const MAX_SKU_LEN: usize = 50;

/// Compare-at price is the inherited base price marked up by this factor.
const COMPARE_AT_MARKUP: Decimal = Decimal::from_parts(12, 0, 0, false, 1); // 1.2

/// Builds the full cross-product of variant drafts for a product.
///
/// Combinations preserve attribute order as selected and value order as
/// listed, so the output count is the product of the per-attribute value
/// list sizes. Each draft inherits `base_price` and gets a compare-at price
/// of `base_price * 1.2`, a SKU/barcode derived from `base_sku` plus the
/// joined combination (see [`build_sku`]), and a fresh correlation token.
///
/// An empty selection list produces no drafts.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyAttributeValues`] naming the first
/// attribute that has no selected values; no drafts are produced in that
/// case.
pub fn generate_variants(
    base_sku: &str,
    selections: &[AttributeSelection],
    base_price: Decimal,
) -> Result<Vec<VariantDraft>, ValidationError> {
    for selection in selections {
        if selection.values.is_empty() {
            return Err(ValidationError::EmptyAttributeValues(
                selection.name.clone(),
            ));
        }
    }
    if selections.is_empty() {
        return Ok(Vec::new());
    }

    let mut combos: Vec<Vec<String>> = vec![Vec::new()];
    for selection in selections {
        let mut next = Vec::with_capacity(combos.len() * selection.values.len());
        for combo in &combos {
            for value in &selection.values {
                let mut extended = combo.clone();
                extended.push(value.clone());
                next.push(extended);
            }
        }
        combos = next;
    }

    let drafts = combos
        .into_iter()
        .map(|combo| {
            let sku = build_sku(base_sku, &combo);
            let options = selections
                .iter()
                .zip(&combo)
                .map(|(selection, value)| VariantOption {
                    attribute: selection.name.clone(),
                    value: value.clone(),
                })
                .collect();
            VariantDraft {
                temp_id: temp_id(),
                barcode: sku.clone(),
                sku,
                options,
                price: base_price,
                compare_at_price: base_price * COMPARE_AT_MARKUP,
                stock: 0,
                status: VariantStatus::Active,
            }
        })
        .collect();

    Ok(drafts)
}

/// Derives the SKU for one combination: values are lowercased, whitespace
/// runs become `-`, values are joined with `-` and appended to `base_sku`,
/// and the whole string is truncated to [`MAX_SKU_LEN`] characters.
///
/// Truncation is by character, not byte, so multi-byte values cannot split
/// a code point. Distinct combinations with long suffixes can truncate to
/// the same SKU; [`sku_collisions`] reports those after generation.
#[must_use]
pub fn build_sku(base_sku: &str, values: &[String]) -> String {
    let suffix = values
        .iter()
        .map(|v| slugify(v))
        .collect::<Vec<_>>()
        .join("-");
    let full = format!("{base_sku}-{suffix}");
    full.chars().take(MAX_SKU_LEN).collect()
}

/// Returns the SKUs that appear more than once in `drafts`, in first-seen
/// order. Callers should warn before persisting a batch with collisions.
#[must_use]
pub fn sku_collisions(drafts: &[VariantDraft]) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::with_capacity(drafts.len());
    let mut collided: Vec<String> = Vec::new();
    for draft in drafts {
        if seen.contains(&draft.sku.as_str()) {
            if !collided.iter().any(|s| s == &draft.sku) {
                collided.push(draft.sku.clone());
            }
        } else {
            seen.push(&draft.sku);
        }
    }
    collided
}

fn slugify(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Client-only correlation token: millisecond timestamp plus a random hex
/// suffix. Collision-resistant within a form session, not globally unique.
fn temp_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::random();
    format!("{millis}-{suffix:08x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(name: &str, values: &[&str]) -> AttributeSelection {
        AttributeSelection::new(name, values.iter().map(|v| (*v).to_string()).collect())
    }

    fn base_price() -> Decimal {
        Decimal::new(1000, 2) // 10.00
    }

    #[test]
    fn count_is_product_of_value_list_sizes() {
        let drafts = generate_variants(
            "TSH",
            &[
                selection("Size", &["S", "M", "L"]),
                selection("Color", &["Red", "Blue"]),
            ],
            base_price(),
        )
        .expect("generation should succeed");
        assert_eq!(drafts.len(), 6);
    }

    #[test]
    fn combinations_preserve_selection_order() {
        let drafts = generate_variants(
            "TSH",
            &[
                selection("Size", &["S", "M"]),
                selection("Color", &["Red", "Blue"]),
            ],
            base_price(),
        )
        .expect("generation should succeed");
        let skus: Vec<&str> = drafts.iter().map(|d| d.sku.as_str()).collect();
        assert_eq!(
            skus,
            vec![
                "TSH-s-red",
                "TSH-s-blue",
                "TSH-m-red",
                "TSH-m-blue"
            ]
        );
    }

    #[test]
    fn empty_value_list_fails_and_produces_nothing() {
        let result = generate_variants(
            "TSH",
            &[selection("Size", &["S"]), selection("Color", &[])],
            base_price(),
        );
        assert!(
            matches!(result, Err(ValidationError::EmptyAttributeValues(ref name)) if name == "Color"),
            "expected EmptyAttributeValues(Color), got: {result:?}"
        );
    }

    #[test]
    fn no_selections_yields_no_drafts() {
        let drafts = generate_variants("TSH", &[], base_price()).expect("should succeed");
        assert!(drafts.is_empty());
    }

    #[test]
    fn sku_is_truncated_to_exactly_fifty_characters() {
        let long_value = "extraordinarily long attribute value name here";
        let drafts = generate_variants(
            "ABC",
            &[selection("Edition", &[long_value]), selection("Size", &["XL"])],
            base_price(),
        )
        .expect("generation should succeed");

        let sku = &drafts[0].sku;
        assert_eq!(sku.chars().count(), MAX_SKU_LEN);

        let untruncated = format!(
            "ABC-{}-xl",
            long_value.to_lowercase().replace(' ', "-")
        );
        assert!(
            untruncated.starts_with(sku.as_str()),
            "SKU must be a prefix of the untruncated form: {sku} vs {untruncated}"
        );
    }

    #[test]
    fn barcode_matches_sku() {
        let drafts = generate_variants("TSH", &[selection("Size", &["M"])], base_price())
            .expect("generation should succeed");
        assert_eq!(drafts[0].barcode, drafts[0].sku);
    }

    #[test]
    fn whitespace_in_values_becomes_hyphens() {
        let drafts = generate_variants(
            "MUG",
            &[selection("Color", &["Navy  Blue"])],
            base_price(),
        )
        .expect("generation should succeed");
        assert_eq!(drafts[0].sku, "MUG-navy-blue");
    }

    #[test]
    fn price_is_inherited_and_compare_at_is_marked_up() {
        let drafts = generate_variants("TSH", &[selection("Size", &["M"])], base_price())
            .expect("generation should succeed");
        assert_eq!(drafts[0].price, Decimal::new(1000, 2));
        assert_eq!(drafts[0].compare_at_price, Decimal::new(1200, 2));
    }

    #[test]
    fn options_carry_attribute_names_in_order() {
        let drafts = generate_variants(
            "TSH",
            &[selection("Size", &["M"]), selection("Color", &["Red"])],
            base_price(),
        )
        .expect("generation should succeed");
        let options = &drafts[0].options;
        assert_eq!(options[0].attribute, "Size");
        assert_eq!(options[0].value, "M");
        assert_eq!(options[1].attribute, "Color");
        assert_eq!(options[1].value, "Red");
    }

    #[test]
    fn temp_ids_are_distinct_within_a_batch() {
        let drafts = generate_variants(
            "TSH",
            &[selection("Size", &["S", "M", "L", "XL"])],
            base_price(),
        )
        .expect("generation should succeed");
        for (i, a) in drafts.iter().enumerate() {
            for b in &drafts[i + 1..] {
                assert_ne!(a.temp_id, b.temp_id, "temp ids must not repeat in a batch");
            }
        }
    }

    #[test]
    fn long_suffixes_can_collide_and_are_reported() {
        let v1 = "premium deluxe edition with embroidered collar alpha";
        let v2 = "premium deluxe edition with embroidered collar bravo";
        let drafts = generate_variants(
            "ABC",
            &[selection("Edition", &[v1, v2])],
            base_price(),
        )
        .expect("generation should succeed");
        assert_eq!(drafts[0].sku, drafts[1].sku, "truncation should collide here");

        let collisions = sku_collisions(&drafts);
        assert_eq!(collisions, vec![drafts[0].sku.clone()]);
    }

    #[test]
    fn distinct_short_skus_report_no_collisions() {
        let drafts = generate_variants(
            "TSH",
            &[selection("Size", &["S", "M"])],
            base_price(),
        )
        .expect("generation should succeed");
        assert!(sku_collisions(&drafts).is_empty());
    }
}
