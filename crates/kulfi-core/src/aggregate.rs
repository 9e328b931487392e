//! # Order Pricing Aggregator
//!
//! Sums computed line items into order-level totals.
//!
//! ## Aggregation Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Order Totals                                        │
//! │                                                                         │
//! │  subtotal       = Σ base_price × quantity      (before any discount)   │
//! │  total_discount = Σ line discount_amount       (tier/override + bulk)  │
//! │  total_tax      = Σ line tax_amount                                    │
//! │  total_amount   = Σ line_total                                         │
//! │                                                                         │
//! │  Identity: total_amount = subtotal - total_discount + total_tax        │
//! │            (exact in full precision; ε = one paisa after rounding)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{PricingError, PricingResult};
use crate::types::{LineItemPricingResult, OrderPricingResult};

/// Aggregates computed lines into an order-level result.
///
/// ## Errors
/// - [`PricingError::EmptyOrder`] when `lines` is empty - an order must have
///   at least one line
///
/// ## Example
/// ```rust
/// use kulfi_core::aggregate::aggregate;
/// use kulfi_core::line::compute_line;
/// use kulfi_core::types::ProductPriceInfo;
///
/// let product = ProductPriceInfo {
///     id: "malai".to_string(),
///     name: "Malai Kulfi".to_string(),
///     base_price: 20.0,
///     cost_price: None,
/// };
/// let line = compute_line(&product, 2, None, None, &[], 18.0).unwrap();
///
/// let order = aggregate(vec![line]).unwrap();
/// assert_eq!(order.subtotal, 40.0);
/// ```
pub fn aggregate(lines: Vec<LineItemPricingResult>) -> PricingResult<OrderPricingResult> {
    if lines.is_empty() {
        return Err(PricingError::EmptyOrder);
    }

    let mut subtotal = 0.0;
    let mut total_discount = 0.0;
    let mut total_tax = 0.0;
    let mut total_amount = 0.0;

    for line in &lines {
        subtotal += line.base_price * f64::from(line.quantity);
        total_discount += line.discount_amount;
        total_tax += line.tax_amount;
        total_amount += line.line_total;
    }

    Ok(OrderPricingResult {
        lines,
        subtotal,
        total_discount,
        total_tax,
        total_amount,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
