//! # In-Memory Pricing Snapshot
//!
//! One immutable value implementing all four store traits from kulfi-core.
//!
//! ## Snapshot Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    MemoryPricingStore                                   │
//! │                                                                         │
//! │   Admin mutation ──► build NEW snapshot ──► swap in for new calls      │
//! │                                                                         │
//! │   Pricing call A ──► snapshot gen 4 ──┐                                │
//! │   Pricing call B ──► snapshot gen 4 ──┤ every lookup inside one call   │
//! │   Pricing call C ──► snapshot gen 5 ──┘ sees ONE rule generation       │
//! │                                                                         │
//! │   The store is immutable after construction, so consistency falls      │
//! │   out of value semantics - no locking, calls run fully in parallel.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This replaces the legacy pattern of mutable in-process registries read as
//! ambient global state: callers inject a snapshot per engine, and tests
//! build exactly the data they need.

use std::collections::HashMap;

use tracing::debug;

use kulfi_core::error::StoreError;
use kulfi_core::store::{BulkRuleStore, CatalogStore, RetailerPricingStore, TaxConfig};
use kulfi_core::tier::PricingTier;
use kulfi_core::types::{BulkPricingRule, ProductPriceInfo, RetailerPricingOverride};
use kulfi_core::DEFAULT_GST_PERCENT;

use crate::retailer::RetailerAccount;

// =============================================================================
// Memory Pricing Store
// =============================================================================

/// An in-memory, read-only pricing snapshot.
///
/// ## Usage
/// ```rust
/// use kulfi_store::MemoryPricingStore;
/// use kulfi_core::types::ProductPriceInfo;
///
/// let store = MemoryPricingStore::new().with_products(vec![ProductPriceInfo {
///     id: "malai".to_string(),
///     name: "Malai Kulfi".to_string(),
///     base_price: 20.0,
///     cost_price: Some(12.0),
/// }]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryPricingStore {
    products: HashMap<String, ProductPriceInfo>,
    retailers: HashMap<String, RetailerAccount>,
    overrides: Vec<RetailerPricingOverride>,
    bulk_rules: Vec<BulkPricingRule>,
    product_gst: HashMap<String, f64>,
    default_gst_percent: f64,
}

impl MemoryPricingStore {
    /// Creates an empty snapshot with the platform default GST.
    pub fn new() -> Self {
        MemoryPricingStore {
            default_gst_percent: DEFAULT_GST_PERCENT,
            ..Default::default()
        }
    }

    /// Adds products to the catalog.
    pub fn with_products(mut self, products: Vec<ProductPriceInfo>) -> Self {
        for product in products {
            self.products.insert(product.id.clone(), product);
        }
        self
    }

    /// Adds retailer accounts.
    pub fn with_retailers(mut self, retailers: Vec<RetailerAccount>) -> Self {
        for retailer in retailers {
            self.retailers.insert(retailer.id.clone(), retailer);
        }
        self
    }

    /// Adds retailer pricing overrides (active and historical).
    pub fn with_overrides(mut self, overrides: Vec<RetailerPricingOverride>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    /// Adds bulk pricing rules.
    pub fn with_bulk_rules(mut self, rules: Vec<BulkPricingRule>) -> Self {
        self.bulk_rules.extend(rules);
        self
    }

    /// Sets a product-specific GST percentage.
    pub fn with_product_gst(mut self, product_id: impl Into<String>, percent: f64) -> Self {
        self.product_gst.insert(product_id.into(), percent);
        self
    }

    /// Sets the default GST percentage.
    pub fn with_default_gst(mut self, percent: f64) -> Self {
        self.default_gst_percent = percent;
        self
    }
}

// =============================================================================
// Store Trait Implementations
// =============================================================================

impl CatalogStore for MemoryPricingStore {
    fn get_product(&self, product_id: &str) -> Result<Option<ProductPriceInfo>, StoreError> {
        debug!(product_id = %product_id, "Catalog lookup");
        Ok(self.products.get(product_id).cloned())
    }
}

impl RetailerPricingStore for MemoryPricingStore {
    /// Returns the active override for the pair.
    ///
    /// At most one active override per (retailer, product) is expected; if
    /// duplicates exist the most recently updated one wins, keeping
    /// resolution deterministic.
    fn get_active_override(
        &self,
        retailer_id: &str,
        product_id: &str,
    ) -> Result<Option<RetailerPricingOverride>, StoreError> {
        let best = self
            .overrides
            .iter()
            .filter(|o| o.is_active && o.retailer_id == retailer_id && o.product_id == product_id)
            .max_by_key(|o| o.updated_at);

        debug!(
            retailer_id = %retailer_id,
            product_id = %product_id,
            found = best.is_some(),
            "Override lookup"
        );
        Ok(best.cloned())
    }

    /// Unknown or deactivated retailers resolve to standard retail pricing.
    fn get_tier(&self, retailer_id: &str) -> Result<PricingTier, StoreError> {
        let tier = self
            .retailers
            .get(retailer_id)
            .map(RetailerAccount::effective_tier)
            .unwrap_or_default();

        debug!(retailer_id = %retailer_id, tier = ?tier, "Tier lookup");
        Ok(tier)
    }
}

impl BulkRuleStore for MemoryPricingStore {
    fn list_active_rules(&self, product_id: &str) -> Result<Vec<BulkPricingRule>, StoreError> {
        let rules: Vec<BulkPricingRule> = self
            .bulk_rules
            .iter()
            .filter(|r| r.is_active && r.scope.matches(product_id))
            .cloned()
            .collect();

        debug!(product_id = %product_id, count = rules.len(), "Bulk rule lookup");
        Ok(rules)
    }
}

impl TaxConfig for MemoryPricingStore {
    fn tax_percent(&self, product_id: Option<&str>) -> Result<f64, StoreError> {
        let percent = product_id
            .and_then(|id| self.product_gst.get(id).copied())
            .unwrap_or(self.default_gst_percent);
        Ok(percent)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use kulfi_core::{project_retailer_view, OrderLineRequest, PricingEngine, MONEY_EPSILON};

    use crate::seed;

    fn override_updated_at(
        custom_price: f64,
        updated_at: chrono::DateTime<Utc>,
    ) -> RetailerPricingOverride {
        RetailerPricingOverride {
            id: uuid::Uuid::new_v4().to_string(),
            retailer_id: "ret_001".to_string(),
            product_id: "chocolate".to_string(),
            custom_price: Some(custom_price),
            discount_percent: 0.0,
            minimum_quantity: 0,
            is_active: true,
            created_at: updated_at,
            updated_at,
        }
    }

    #[test]
    fn test_unknown_product_returns_none() {
        let store = MemoryPricingStore::new();
        assert!(store.get_product("nope").unwrap().is_none());
    }

    #[test]
    fn test_unknown_retailer_gets_retail_tier() {
        let store = MemoryPricingStore::new();
        assert_eq!(store.get_tier("ghost").unwrap(), PricingTier::Retail);
    }

    #[test]
    fn test_inactive_retailer_gets_retail_tier() {
        let mut account = seed::sample_retailers().remove(0);
        account.is_active = false;
        let id = account.id.clone();

        let store = MemoryPricingStore::new().with_retailers(vec![account]);
        assert_eq!(store.get_tier(&id).unwrap(), PricingTier::Retail);
    }

    #[test]
    fn test_duplicate_overrides_most_recent_wins() {
        let now = Utc::now();
        let store = MemoryPricingStore::new().with_overrides(vec![
            override_updated_at(22.0, now - Duration::days(7)),
            override_updated_at(19.0, now),
            override_updated_at(24.0, now - Duration::days(1)),
        ]);

        let best = store
            .get_active_override("ret_001", "chocolate")
            .unwrap()
            .unwrap();
        assert_eq!(best.custom_price, Some(19.0));
    }

    #[test]
    fn test_rule_listing_filters_scope_and_active() {
        let store = seed::seeded_store();
        let rules = store.list_active_rules("malai").unwrap();

        assert!(!rules.is_empty());
        assert!(rules.iter().all(|r| r.is_active && r.scope.matches("malai")));
    }

    #[test]
    fn test_tax_config_falls_back_to_default() {
        let store = MemoryPricingStore::new().with_product_gst("malai", 5.0);

        assert_eq!(store.tax_percent(Some("malai")).unwrap(), 5.0);
        assert_eq!(store.tax_percent(Some("mango")).unwrap(), DEFAULT_GST_PERCENT);
        assert_eq!(store.tax_percent(None).unwrap(), DEFAULT_GST_PERCENT);
    }

    // -------------------------------------------------------------------------
    // End-to-end: engine against the seeded snapshot
    // -------------------------------------------------------------------------

    #[test]
    fn test_end_to_end_vip_order_with_override_and_bulk() {
        let store = seed::seeded_store();
        let engine = PricingEngine::new(&store, &store, &store, &store);

        let order = engine
            .compute_order_pricing(
                Some(seed::KUMAR_SWEET_SHOP),
                &[
                    // VIP tier pricing
                    OrderLineRequest::new("malai", 10),
                    // Custom price 25.0 at minimum quantity 50
                    OrderLineRequest::new("chocolate", 60),
                    // Bulk rule territory: 150 ≥ 100 → extra 5%
                    OrderLineRequest::new("mango", 150),
                ],
            )
            .unwrap();

        assert_eq!(order.lines.len(), 3);

        // Custom price applied exactly on the chocolate line
        let chocolate = &order.lines[1];
        assert!(chocolate.is_custom_price);
        assert_eq!(chocolate.effective_unit_price, 25.0);

        // Mango: VIP 25% off 40 → 30, bulk 5% → 28.5
        let mango = &order.lines[2];
        assert_eq!(mango.bulk_discount_percent, 5.0);
        assert!((mango.price_after_discount - 28.5).abs() < MONEY_EPSILON);

        let identity = order.subtotal - order.total_discount + order.total_tax;
        assert!((order.total_amount - identity).abs() < MONEY_EPSILON);
    }

    #[test]
    fn test_end_to_end_anonymous_customer() {
        let store = seed::seeded_store();
        let engine = PricingEngine::new(&store, &store, &store, &store);

        let order = engine
            .compute_order_pricing(None, &[OrderLineRequest::new("malai", 2)])
            .unwrap();

        let line = &order.lines[0];
        assert_eq!(line.tier, None);
        assert_eq!(line.effective_unit_price, line.base_price);
        assert_eq!(line.applied_discount_percent, 0.0);
    }

    #[test]
    fn test_end_to_end_is_idempotent() {
        let store = seed::seeded_store();
        let engine = PricingEngine::new(&store, &store, &store, &store);
        let request = [
            OrderLineRequest::new("malai", 10),
            OrderLineRequest::new("mango", 150),
        ];

        let first = engine
            .compute_order_pricing(Some(seed::KUMAR_SWEET_SHOP), &request)
            .unwrap();
        let second = engine
            .compute_order_pricing(Some(seed::KUMAR_SWEET_SHOP), &request)
            .unwrap();

        // Same snapshot, same inputs: bit-identical results
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&project_retailer_view(&first)).unwrap(),
            serde_json::to_string(&project_retailer_view(&second)).unwrap()
        );
    }

    #[test]
    fn test_override_below_minimum_quantity_uses_tier() {
        let store = seed::seeded_store();
        let engine = PricingEngine::new(&store, &store, &store, &store);

        // Chocolate override demands 50 units; 10 falls back to VIP tier
        let line = engine
            .compute_line_pricing("chocolate", 10, Some(seed::KUMAR_SWEET_SHOP))
            .unwrap();

        assert!(!line.is_custom_price);
        assert_eq!(line.applied_discount_percent, 25.0);
        assert!((line.effective_unit_price - 22.5).abs() < MONEY_EPSILON);
    }
}
