//! # Store Traits
//!
//! The read-only collaborators the pricing engine consumes.
//!
//! ## Snapshot Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Pricing Store Collaborators                          │
//! │                                                                         │
//! │  CatalogStore          get_product(id) → ProductPriceInfo?             │
//! │  RetailerPricingStore  get_active_override(retailer, product)          │
//! │                        get_tier(retailer) → PricingTier                │
//! │  BulkRuleStore         list_active_rules(product) → [BulkPricingRule]  │
//! │  TaxConfig             tax_percent(product?) → percentage              │
//! │                                                                         │
//! │  Implementors MUST serve a CONSISTENT snapshot per pricing call        │
//! │  (e.g. one read transaction): resolving the tier from one override     │
//! │  generation and the bulk rules from another would skew totals.         │
//! │                                                                         │
//! │  The traits are synchronous - the engine never blocks or suspends.     │
//! │  Any I/O (and its timeout policy) belongs to the implementor, which    │
//! │  surfaces failures as StoreError.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::StoreError;
use crate::tier::PricingTier;
use crate::types::{BulkPricingRule, ProductPriceInfo, RetailerPricingOverride};

/// Read-only product catalog lookups.
pub trait CatalogStore {
    /// Returns pricing data for a product, or None if unknown.
    fn get_product(&self, product_id: &str) -> Result<Option<ProductPriceInfo>, StoreError>;
}

/// Read-only retailer pricing lookups.
pub trait RetailerPricingStore {
    /// Returns the active override for a (retailer, product) pair, if any.
    ///
    /// At most one override is expected per pair; implementors that hold
    /// duplicates must pick one deterministically.
    fn get_active_override(
        &self,
        retailer_id: &str,
        product_id: &str,
    ) -> Result<Option<RetailerPricingOverride>, StoreError>;

    /// Returns the retailer's pricing tier.
    ///
    /// Unknown retailers resolve permissively to [`PricingTier::Retail`]
    /// (standard price) rather than failing.
    fn get_tier(&self, retailer_id: &str) -> Result<PricingTier, StoreError>;
}

/// Read-only bulk rule lookups.
pub trait BulkRuleStore {
    /// Returns the active bulk rules applicable to a product (including
    /// all-product rules).
    fn list_active_rules(&self, product_id: &str) -> Result<Vec<BulkPricingRule>, StoreError>;
}

/// Tax configuration lookups.
pub trait TaxConfig {
    /// Returns the GST percentage for a product, or the platform default
    /// when `product_id` is None or has no specific rate.
    fn tax_percent(&self, product_id: Option<&str>) -> Result<f64, StoreError>;
}

// =============================================================================
// Blanket Impls for References
// =============================================================================
// A single snapshot struct usually implements all four traits; these impls
// let callers hand the same `&snapshot` to each engine slot.

impl<S: CatalogStore + ?Sized> CatalogStore for &S {
    fn get_product(&self, product_id: &str) -> Result<Option<ProductPriceInfo>, StoreError> {
        (**self).get_product(product_id)
    }
}

impl<S: RetailerPricingStore + ?Sized> RetailerPricingStore for &S {
    fn get_active_override(
        &self,
        retailer_id: &str,
        product_id: &str,
    ) -> Result<Option<RetailerPricingOverride>, StoreError> {
        (**self).get_active_override(retailer_id, product_id)
    }

    fn get_tier(&self, retailer_id: &str) -> Result<PricingTier, StoreError> {
        (**self).get_tier(retailer_id)
    }
}

impl<S: BulkRuleStore + ?Sized> BulkRuleStore for &S {
    fn list_active_rules(&self, product_id: &str) -> Result<Vec<BulkPricingRule>, StoreError> {
        (**self).list_active_rules(product_id)
    }
}

impl<S: TaxConfig + ?Sized> TaxConfig for &S {
    fn tax_percent(&self, product_id: Option<&str>) -> Result<f64, StoreError> {
        (**self).tax_percent(product_id)
    }
}
