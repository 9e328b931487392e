//! # Price Resolver
//!
//! Resolves the *effective unit price* for a product: the price after
//! tier/override resolution, before any bulk discount.
//!
//! ## Precedence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Effective Price Resolution                           │
//! │                                                                         │
//! │  resolve(retailer?, override?, base_price, quantity)                   │
//! │       │                                                                 │
//! │       ├── retailer absent (anonymous customer)                         │
//! │       │        └──► base price, no discount                            │
//! │       │                                                                 │
//! │       ├── active override AND quantity >= minimum_quantity             │
//! │       │        ├── custom_price set ──► custom price (is_custom=true)  │
//! │       │        └── discount only   ──► base × (1 - discount/100)       │
//! │       │                                                                 │
//! │       └── otherwise ──► tier table: base × (1 - tier_discount/100)     │
//! │                                                                         │
//! │  Result is clamped ≥ 0. The resolver NEVER fails: missing or invalid   │
//! │  data degrades to "no discount" so pricing never blocks an order.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::clamp_price;
use crate::tier::PricingTier;
use crate::types::{RetailerContext, RetailerPricingOverride};
use crate::validation::is_valid_percent;

// =============================================================================
// Resolved Price
// =============================================================================

/// The outcome of tier/override resolution for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPrice {
    /// Factory base price, untouched.
    pub base_price: f64,

    /// Effective unit price after tier/override resolution.
    pub resolved_unit_price: f64,

    /// Whether a custom-price override set the price.
    pub is_custom_price: bool,

    /// Discount percentage versus base that the resolution represents.
    /// For custom prices this is derived: `(base - custom) / base * 100`.
    pub applied_discount_percent: f64,

    /// Minimum quantity the applied override demanded (0 when tier or base
    /// pricing was used).
    pub minimum_quantity_required: u32,
}

impl ResolvedPrice {
    /// Base-price passthrough: no retailer, no discount.
    fn passthrough(base_price: f64) -> Self {
        ResolvedPrice {
            base_price,
            resolved_unit_price: clamp_price(base_price),
            is_custom_price: false,
            applied_discount_percent: 0.0,
            minimum_quantity_required: 0,
        }
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolves the effective unit price for one product under a retailer
/// context.
///
/// `active_override` must be the (at most one) active override for this
/// retailer and product, as returned by the retailer-pricing store. Passing
/// an override for a different retailer or product is a caller bug; the
/// resolver trusts its inputs.
///
/// ## No Error Path
/// This function is total. Unknown tiers, inactive overrides, or malformed
/// discount percentages all degrade to "no discount" rather than failing -
/// pricing must never block an order from being priced.
///
/// ## Example
/// ```rust
/// use kulfi_core::resolver::resolve_unit_price;
/// use kulfi_core::tier::PricingTier;
/// use kulfi_core::types::RetailerContext;
///
/// let retailer = RetailerContext {
///     retailer_id: "ret_001".to_string(),
///     tier: PricingTier::Vip,
/// };
///
/// let resolved = resolve_unit_price(Some(&retailer), None, 20.0, 1);
/// assert_eq!(resolved.resolved_unit_price, 15.0); // VIP: 25% off
/// ```
pub fn resolve_unit_price(
    retailer: Option<&RetailerContext>,
    active_override: Option<&RetailerPricingOverride>,
    base_price: f64,
    quantity: u32,
) -> ResolvedPrice {
    // 1. Anonymous customers always pay base price.
    let Some(retailer) = retailer else {
        return ResolvedPrice::passthrough(base_price);
    };

    // 2. An active override that meets its minimum quantity beats the tier.
    if let Some(ovr) = active_override.filter(|o| o.applies_at(quantity)) {
        if let Some(custom_price) = ovr.custom_price {
            let resolved = clamp_price(custom_price);
            return ResolvedPrice {
                base_price,
                resolved_unit_price: resolved,
                is_custom_price: true,
                applied_discount_percent: derived_discount_percent(base_price, resolved),
                minimum_quantity_required: ovr.minimum_quantity,
            };
        }

        // Discount-only override. A malformed percentage is not a discount.
        if is_valid_percent(ovr.discount_percent) {
            let resolved = clamp_price(base_price * (1.0 - ovr.discount_percent / 100.0));
            return ResolvedPrice {
                base_price,
                resolved_unit_price: resolved,
                is_custom_price: false,
                applied_discount_percent: ovr.discount_percent,
                minimum_quantity_required: ovr.minimum_quantity,
            };
        }
    }

    // 3. Tier table fallback.
    let tier_discount = retailer.tier.discount_percent();
    ResolvedPrice {
        base_price,
        resolved_unit_price: clamp_price(retailer.tier.apply_to(base_price)),
        is_custom_price: false,
        applied_discount_percent: tier_discount,
        minimum_quantity_required: 0,
    }
}

/// Discount percentage a custom price represents versus base.
///
/// Guards against division by zero: a non-positive base yields 0.
fn derived_discount_percent(base_price: f64, resolved_price: f64) -> f64 {
    if base_price <= 0.0 {
        return 0.0;
    }
    (base_price - resolved_price) / base_price * 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn retailer(tier: PricingTier) -> RetailerContext {
        RetailerContext {
            retailer_id: "ret_001".to_string(),
            tier,
        }
    }

    fn override_with(
        custom_price: Option<f64>,
        discount_percent: f64,
        minimum_quantity: u32,
        is_active: bool,
    ) -> RetailerPricingOverride {
        RetailerPricingOverride {
            id: "ovr_001".to_string(),
            retailer_id: "ret_001".to_string(),
            product_id: "chocolate".to_string(),
            custom_price,
            discount_percent,
            minimum_quantity,
            is_active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_anonymous_customer_pays_base_price() {
        let resolved = resolve_unit_price(None, None, 20.0, 10);

        assert_eq!(resolved.resolved_unit_price, 20.0);
        assert_eq!(resolved.applied_discount_percent, 0.0);
        assert!(!resolved.is_custom_price);
    }

    #[test]
    fn test_tier_fallback_without_override() {
        let resolved = resolve_unit_price(Some(&retailer(PricingTier::Vip)), None, 20.0, 1);

        assert_eq!(resolved.resolved_unit_price, 15.0);
        assert_eq!(resolved.applied_discount_percent, 25.0);
        assert!(!resolved.is_custom_price);
    }

    #[test]
    fn test_custom_price_wins_exactly() {
        let ovr = override_with(Some(18.0), 0.0, 0, true);
        let resolved =
            resolve_unit_price(Some(&retailer(PricingTier::Vip)), Some(&ovr), 20.0, 1);

        // Exact equality: the custom price is taken as-is
        assert_eq!(resolved.resolved_unit_price, 18.0);
        assert!(resolved.is_custom_price);
        assert!((resolved.applied_discount_percent - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_price_below_minimum_quantity_falls_back_to_tier() {
        // base 20, custom 18 at minimum 50, quantity 10 → tier pricing
        let ovr = override_with(Some(18.0), 0.0, 50, true);
        let resolved =
            resolve_unit_price(Some(&retailer(PricingTier::Regular)), Some(&ovr), 20.0, 10);

        assert!(!resolved.is_custom_price);
        assert_eq!(resolved.resolved_unit_price, 18.0); // REGULAR 10% off 20
        assert_eq!(resolved.applied_discount_percent, 10.0);
        assert_eq!(resolved.minimum_quantity_required, 0);
    }

    #[test]
    fn test_inactive_override_is_ignored() {
        let ovr = override_with(Some(5.0), 0.0, 0, false);
        let resolved =
            resolve_unit_price(Some(&retailer(PricingTier::Wholesale)), Some(&ovr), 20.0, 100);

        assert!(!resolved.is_custom_price);
        assert_eq!(resolved.resolved_unit_price, 19.0); // WHOLESALE 5%
    }

    #[test]
    fn test_discount_only_override() {
        let ovr = override_with(None, 12.5, 10, true);
        let resolved =
            resolve_unit_price(Some(&retailer(PricingTier::Vip)), Some(&ovr), 40.0, 10);

        assert!(!resolved.is_custom_price);
        assert_eq!(resolved.resolved_unit_price, 35.0);
        assert_eq!(resolved.applied_discount_percent, 12.5);
        assert_eq!(resolved.minimum_quantity_required, 10);
    }

    #[test]
    fn test_malformed_override_discount_degrades_to_tier() {
        let ovr = override_with(None, 250.0, 0, true);
        let resolved =
            resolve_unit_price(Some(&retailer(PricingTier::Premium)), Some(&ovr), 20.0, 1);

        // 250% is not a discount; PREMIUM tier applies instead
        assert_eq!(resolved.resolved_unit_price, 17.0);
        assert_eq!(resolved.applied_discount_percent, 15.0);
    }

    #[test]
    fn test_negative_custom_price_is_clamped() {
        let ovr = override_with(Some(-3.0), 0.0, 0, true);
        let resolved =
            resolve_unit_price(Some(&retailer(PricingTier::Retail)), Some(&ovr), 20.0, 1);

        assert_eq!(resolved.resolved_unit_price, 0.0);
        assert!(resolved.is_custom_price);
    }

    #[test]
    fn test_zero_base_price_guard() {
        // The line calculator rejects base <= 0 before resolution, but the
        // resolver itself must not divide by zero when called directly.
        let ovr = override_with(Some(5.0), 0.0, 0, true);
        let resolved =
            resolve_unit_price(Some(&retailer(PricingTier::Vip)), Some(&ovr), 0.0, 1);

        assert_eq!(resolved.applied_discount_percent, 0.0);
    }

    #[test]
    fn test_custom_tier_without_override_pays_base() {
        let resolved = resolve_unit_price(Some(&retailer(PricingTier::Custom)), None, 30.0, 1);

        assert_eq!(resolved.resolved_unit_price, 30.0);
        assert_eq!(resolved.applied_discount_percent, 0.0);
    }
}
