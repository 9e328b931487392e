//! # Line Item Calculator
//!
//! Computes the full pricing breakdown for one order line.
//!
//! ## Computation Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 compute_line(product, qty, ...)                         │
//! │                                                                         │
//! │  base_price ──► resolver ──► effective_unit_price  (tier/override)     │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │            bulk engine ──► bulk_discount_percent   (threshold rule)    │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │  price_after_discount = effective × (1 - bulk%/100)                    │
//! │  discount_amount      = (base - price_after_discount) × qty            │
//! │  tax_amount           = price_after_discount × qty × tax%/100          │
//! │  final_unit_price     = price_after_discount   (before tax)            │
//! │  line_total           = final_unit_price × qty + tax_amount            │
//! │                                                                         │
//! │  All values keep FULL precision. Rounding waits for the projection.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::bulk::best_bulk_discount;
use crate::error::PricingResult;
use crate::money::{apply_percent_discount, percent_of};
use crate::resolver::resolve_unit_price;
use crate::types::{
    BulkPricingRule, LineItemPricingResult, ProductPriceInfo, RetailerContext,
    RetailerPricingOverride,
};
use crate::validation::{validate_base_price, validate_quantity};

/// Computes the full pricing breakdown for one order line.
///
/// `active_override` is the retailer-pricing store's (at most one) active
/// override for this retailer and product; `bulk_rules` are the active rules
/// applicable to the product.
///
/// ## Errors
/// - [`crate::PricingError::InvalidQuantity`] when `quantity` is 0
/// - [`crate::PricingError::InvalidProduct`] when the base price is not a
///   positive finite number
///
/// Everything else resolves permissively: a retailer with no override and an
/// unknown tier still gets a priced line (at base price).
///
/// ## Example
/// ```rust
/// use kulfi_core::line::compute_line;
/// use kulfi_core::tier::PricingTier;
/// use kulfi_core::types::{ProductPriceInfo, RetailerContext};
///
/// let product = ProductPriceInfo {
///     id: "malai".to_string(),
///     name: "Malai Kulfi".to_string(),
///     base_price: 20.0,
///     cost_price: None,
/// };
/// let retailer = RetailerContext {
///     retailer_id: "ret_001".to_string(),
///     tier: PricingTier::Vip,
/// };
///
/// let line = compute_line(&product, 1, Some(&retailer), None, &[], 5.0).unwrap();
/// assert_eq!(line.final_unit_price, 15.0);
/// assert_eq!(line.tax_amount, 0.75);
/// assert_eq!(line.line_total, 15.75);
/// ```
pub fn compute_line(
    product: &ProductPriceInfo,
    quantity: u32,
    retailer: Option<&RetailerContext>,
    active_override: Option<&RetailerPricingOverride>,
    bulk_rules: &[BulkPricingRule],
    tax_percent: f64,
) -> PricingResult<LineItemPricingResult> {
    validate_quantity(quantity)?;
    validate_base_price(&product.id, product.base_price)?;

    // 1. Tier/override resolution
    let resolved = resolve_unit_price(retailer, active_override, product.base_price, quantity);

    // 2. Bulk quantity discount on top of the resolved price
    let bulk_discount_percent = best_bulk_discount(&product.id, quantity, bulk_rules);
    let price_after_discount =
        apply_percent_discount(resolved.resolved_unit_price, bulk_discount_percent);

    // 3. Line-level money. discount_amount is measured against base price so
    //    order aggregation satisfies total = subtotal - discount + tax.
    let quantity_f = f64::from(quantity);
    let discount_amount = (product.base_price - price_after_discount) * quantity_f;
    let tax_amount = percent_of(price_after_discount * quantity_f, tax_percent);
    let final_unit_price = price_after_discount;
    let line_total = final_unit_price * quantity_f + tax_amount;

    Ok(LineItemPricingResult {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        quantity,
        tier: retailer.map(|r| r.tier),
        base_price: product.base_price,
        override_price: resolved.is_custom_price.then(|| resolved.resolved_unit_price),
        effective_unit_price: resolved.resolved_unit_price,
        is_custom_price: resolved.is_custom_price,
        applied_discount_percent: resolved.applied_discount_percent,
        bulk_discount_percent,
        price_after_discount,
        discount_amount,
        tax_percent,
        tax_amount,
        final_unit_price,
        line_total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
