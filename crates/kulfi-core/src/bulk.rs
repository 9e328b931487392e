//! # Bulk Discount Engine
//!
//! Selects the single best-applicable quantity-threshold discount.
//!
//! ## Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Bulk Rule Selection (quantity = 150)                   │
//! │                                                                         │
//! │  Rules:   ≥100 → 5%     ≥200 → 10%     ≥500 → 15%     ≥1000 → 20%      │
//! │              │              │              │               │            │
//! │           150 ≥ 100      150 < 200      150 < 500      150 < 1000      │
//! │              ✓              ✗              ✗               ✗            │
//! │              │                                                          │
//! │              ▼                                                          │
//! │  Winner: the HIGHEST threshold not exceeding the quantity → 5%         │
//! │                                                                         │
//! │  Rules are NOT cumulative: exactly one rule applies, or none.          │
//! │  Stacking would double-discount as quantities cross thresholds.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::BulkPricingRule;
use crate::validation::is_valid_percent;

/// Returns the best-applicable bulk discount percentage for a quantity.
///
/// Filters to active rules whose scope covers `product_id` and whose
/// threshold the quantity meets, then picks the highest threshold. Rules
/// with equal thresholds tie-break on the larger discount, keeping the
/// result deterministic regardless of rule order. Returns 0 when nothing
/// matches.
///
/// ## Example
/// ```rust
/// use kulfi_core::bulk::best_bulk_discount;
/// use kulfi_core::types::{BulkPricingRule, RuleScope};
///
/// let rules = vec![
///     BulkPricingRule {
///         id: "bulk_001".to_string(),
///         scope: RuleScope::AllProducts,
///         minimum_quantity: 100,
///         discount_percent: 5.0,
///         is_active: true,
///     },
///     BulkPricingRule {
///         id: "bulk_002".to_string(),
///         scope: RuleScope::AllProducts,
///         minimum_quantity: 200,
///         discount_percent: 10.0,
///         is_active: true,
///     },
/// ];
///
/// assert_eq!(best_bulk_discount("mango", 150, &rules), 5.0);
/// assert_eq!(best_bulk_discount("mango", 200, &rules), 10.0);
/// assert_eq!(best_bulk_discount("mango", 99, &rules), 0.0);
/// ```
pub fn best_bulk_discount(product_id: &str, quantity: u32, rules: &[BulkPricingRule]) -> f64 {
    rules
        .iter()
        .filter(|rule| rule.is_active)
        .filter(|rule| rule.scope.matches(product_id))
        .filter(|rule| quantity >= rule.minimum_quantity)
        // Malformed percentages from store data are not discounts
        .filter(|rule| is_valid_percent(rule.discount_percent))
        .max_by(|a, b| {
            a.minimum_quantity
                .cmp(&b.minimum_quantity)
                .then(a.discount_percent.total_cmp(&b.discount_percent))
        })
        .map(|rule| rule.discount_percent)
        .unwrap_or(0.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
