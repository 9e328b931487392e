//! # Pricing Tiers
//!
//! The fixed retailer tier table and its discount percentages.
//!
//! ## Tier Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricing Tiers                                    │
//! │                                                                         │
//! │  Tier        Discount    Who                                           │
//! │  ─────────   ────────    ─────────────────────────────────────────     │
//! │  VIP           25%       Premium retailers with highest volume         │
//! │  PREMIUM       15%       High volume retailers                         │
//! │  REGULAR       10%       Standard retailers                            │
//! │  WHOLESALE      5%       Bulk buyers                                   │
//! │  RETAIL         0%       Small retailers - standard price              │
//! │  CUSTOM         0%       Marker: use negotiated override pricing       │
//! │                                                                         │
//! │  The table is static. CUSTOM carries no tier discount of its own -     │
//! │  it signals that retailer+product overrides drive the price instead.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Pricing Tier
// =============================================================================

/// A fixed retailer classification carrying a standard discount percentage.
///
/// ## Design Notes
/// - The set is closed: tiers are not admin-programmable
/// - `discount_percent` is pure and total - every tier has a value, there is
///   no error path
/// - Serialized in SCREAMING case ("VIP", "PREMIUM", ...) to match the
///   external contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingTier {
    /// Premium retailers with the highest volume - 25% discount.
    Vip,
    /// High volume retailers - 15% discount.
    Premium,
    /// Standard retailers - 10% discount.
    Regular,
    /// Bulk buyers - 5% discount.
    Wholesale,
    /// Small retailers - standard price.
    Retail,
    /// Custom negotiated prices. Carries no tier discount; the retailer's
    /// per-product overrides are expected to set the price.
    Custom,
}

impl PricingTier {
    /// All tiers, in descending discount order.
    pub const ALL: [PricingTier; 6] = [
        PricingTier::Vip,
        PricingTier::Premium,
        PricingTier::Regular,
        PricingTier::Wholesale,
        PricingTier::Retail,
        PricingTier::Custom,
    ];

    /// Returns the tier's standard discount percentage (0..=100).
    ///
    /// Used as the pricing fallback when no override applies.
    ///
    /// ## Example
    /// ```rust
    /// use kulfi_core::tier::PricingTier;
    ///
    /// assert_eq!(PricingTier::Vip.discount_percent(), 25.0);
    /// assert_eq!(PricingTier::Retail.discount_percent(), 0.0);
    /// ```
    #[inline]
    pub const fn discount_percent(&self) -> f64 {
        match self {
            PricingTier::Vip => 25.0,
            PricingTier::Premium => 15.0,
            PricingTier::Regular => 10.0,
            PricingTier::Wholesale => 5.0,
            PricingTier::Retail => 0.0,
            PricingTier::Custom => 0.0,
        }
    }

    /// Human-readable tier name for admin surfaces.
    pub const fn display_name(&self) -> &'static str {
        match self {
            PricingTier::Vip => "VIP Tier",
            PricingTier::Premium => "Premium Tier",
            PricingTier::Regular => "Regular Tier",
            PricingTier::Wholesale => "Wholesale",
            PricingTier::Retail => "Retail",
            PricingTier::Custom => "Custom Pricing",
        }
    }

    /// Short description of who the tier is for.
    pub const fn description(&self) -> &'static str {
        match self {
            PricingTier::Vip => "Premium retailers with highest volume - 25% discount",
            PricingTier::Premium => "High volume retailers - 15% discount",
            PricingTier::Regular => "Standard retailers - 10% discount",
            PricingTier::Wholesale => "Bulk buyers - 5% discount",
            PricingTier::Retail => "Small retailers - Standard price",
            PricingTier::Custom => "Custom negotiated prices",
        }
    }

    /// Applies the tier discount to a base price.
    ///
    /// ## Example
    /// ```rust
    /// use kulfi_core::tier::PricingTier;
    ///
    /// assert_eq!(PricingTier::Vip.apply_to(20.0), 15.0);
    /// ```
    #[inline]
    pub fn apply_to(&self, base_price: f64) -> f64 {
        base_price * (1.0 - self.discount_percent() / 100.0)
    }
}

/// Unknown or unclassified retailers price at standard retail.
impl Default for PricingTier {
    fn default() -> Self {
        PricingTier::Retail
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discounts_are_fixed_and_in_range() {
        for tier in PricingTier::ALL {
            let pct = tier.discount_percent();
            assert!((0.0..=100.0).contains(&pct), "{tier:?} out of range");
            // Constant: repeated lookups return the same value
            assert_eq!(pct, tier.discount_percent());
        }
    }

    #[test]
    fn test_tier_ordering_is_strict() {
        // VIP > PREMIUM > REGULAR > WHOLESALE > RETAIL by design
        assert!(PricingTier::Vip.discount_percent() > PricingTier::Premium.discount_percent());
        assert!(PricingTier::Premium.discount_percent() > PricingTier::Regular.discount_percent());
        assert!(PricingTier::Regular.discount_percent() > PricingTier::Wholesale.discount_percent());
        assert!(PricingTier::Wholesale.discount_percent() > PricingTier::Retail.discount_percent());
    }

    #[test]
    fn test_custom_carries_no_tier_discount() {
        assert_eq!(PricingTier::Custom.discount_percent(), 0.0);
        assert_eq!(PricingTier::Custom.apply_to(42.0), 42.0);
    }

    #[test]
    fn test_apply_to() {
        assert_eq!(PricingTier::Vip.apply_to(20.0), 15.0);
        assert_eq!(PricingTier::Regular.apply_to(40.0), 36.0);
        assert_eq!(PricingTier::Retail.apply_to(33.5), 33.5);
    }

    #[test]
    fn test_default_is_retail() {
        assert_eq!(PricingTier::default(), PricingTier::Retail);
    }

    #[test]
    fn test_serde_names_match_contract() {
        assert_eq!(
            serde_json::to_string(&PricingTier::Vip).unwrap(),
            "\"VIP\""
        );
        assert_eq!(
            serde_json::to_string(&PricingTier::Wholesale).unwrap(),
            "\"WHOLESALE\""
        );
        let tier: PricingTier = serde_json::from_str("\"PREMIUM\"").unwrap();
        assert_eq!(tier, PricingTier::Premium);
    }
}
