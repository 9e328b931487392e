//! # Validation Module
//!
//! Input validation for pricing calls.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (order API / admin surface)                           │
//! │  ├── Request shape, auth, rate limits                                  │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - pricing preconditions                          │
//! │  ├── quantity > 0                                                      │
//! │  ├── base price > 0 and finite                                         │
//! │  └── percentages within 0..=100                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Resolution (resolver/bulk) - PERMISSIVE                      │
//! │  └── unknown tier / missing override / inactive rule → no discount     │
//! │                                                                         │
//! │  Hard failures stop a line from being priced; soft gaps never do.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{PricingError, PricingResult};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an order-line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ## Example
/// ```rust
/// use kulfi_core::validation::validate_quantity;
///
/// assert!(validate_quantity(5).is_ok());
/// assert!(validate_quantity(0).is_err());
/// ```
pub fn validate_quantity(quantity: u32) -> PricingResult<()> {
    if quantity == 0 {
        return Err(PricingError::InvalidQuantity {
            quantity: quantity as i64,
        });
    }

    Ok(())
}

/// Validates a product's base price.
///
/// ## Rules
/// - Must be positive (> 0): free or negatively priced products are not
///   orderable
/// - Must be finite (NaN/inf from a corrupted catalog row is rejected)
pub fn validate_base_price(product_id: &str, base_price: f64) -> PricingResult<()> {
    if !base_price.is_finite() {
        return Err(PricingError::invalid_product(
            product_id,
            "base price is not a finite number",
        ));
    }

    if base_price <= 0.0 {
        return Err(PricingError::invalid_product(
            product_id,
            format!("base price must be positive, got {base_price}"),
        ));
    }

    Ok(())
}

/// Checks whether a percentage is usable (finite, 0..=100).
///
/// Resolution is permissive: out-of-range percentages from store data are
/// not errors, they simply don't qualify as discounts. The resolver clamps
/// resulting prices at zero regardless.
pub fn is_valid_percent(percent: f64) -> bool {
    percent.is_finite() && (0.0..=100.0).contains(&percent)
}

// =============================================================================
// Unit Tests
// =============================================================================
