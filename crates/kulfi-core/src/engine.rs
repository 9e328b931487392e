//! # Pricing Engine Facade
//!
//! The library entry point consumed by the order-placement service and the
//! admin pricing surface.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               compute_order_pricing(retailer?, lines)                   │
//! │                                                                         │
//! │  caller supplies retailer id + (product, quantity) pairs               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  get_tier(retailer) ──► RetailerContext          (once per order)      │
//! │       │                                                                 │
//! │       ▼  per line:                                                      │
//! │  get_product ► get_active_override ► list_active_rules ► tax_percent   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute_line ──► [LineItemPricingResult]                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  aggregate ──► OrderPricingResult                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  project_admin_view / project_retailer_view  (caller's role decides)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is stateless: it owns nothing but handles to read-only store
//! snapshots, injected per construction rather than reached for as ambient
//! global state. Concurrent pricing calls are fully independent.

use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate;
use crate::error::{PricingError, PricingResult};
use crate::line::compute_line;
use crate::store::{BulkRuleStore, CatalogStore, RetailerPricingStore, TaxConfig};
use crate::types::{LineItemPricingResult, OrderPricingResult, RetailerContext};

// =============================================================================
// Order Line Request
// =============================================================================

/// One requested (product, quantity) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub product_id: String,
    pub quantity: u32,
}

impl OrderLineRequest {
    /// Convenience constructor.
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        OrderLineRequest {
            product_id: product_id.into(),
            quantity,
        }
    }
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// Stateless pricing facade over the four store collaborators.
///
/// ## Usage
/// ```rust,ignore
/// let engine = PricingEngine::new(&snapshot, &snapshot, &snapshot, &snapshot);
///
/// let result = engine.compute_order_pricing(
///     Some("ret_001"),
///     &[OrderLineRequest::new("malai", 10)],
/// )?;
///
/// let view = kulfi_core::project_retailer_view(&result);
/// ```
#[derive(Debug, Clone)]
pub struct PricingEngine<C, R, B, T> {
    catalog: C,
    retailer_pricing: R,
    bulk_rules: B,
    tax: T,
}

impl<C, R, B, T> PricingEngine<C, R, B, T>
where
    C: CatalogStore,
    R: RetailerPricingStore,
    B: BulkRuleStore,
    T: TaxConfig,
{
    /// Creates an engine over the given store snapshots.
    ///
    /// The snapshots must be mutually consistent for the lifetime of the
    /// engine value (see [`crate::store`]).
    pub fn new(catalog: C, retailer_pricing: R, bulk_rules: B, tax: T) -> Self {
        PricingEngine {
            catalog,
            retailer_pricing,
            bulk_rules,
            tax,
        }
    }

    /// Prices a single line.
    ///
    /// `retailer_id` is None for anonymous customers, who pay base price.
    ///
    /// ## Errors
    /// - [`PricingError::InvalidProduct`] for unknown products or unusable
    ///   base prices
    /// - [`PricingError::InvalidQuantity`] for a zero quantity
    /// - [`PricingError::StoreUnavailable`] when any lookup fails
    pub fn compute_line_pricing(
        &self,
        product_id: &str,
        quantity: u32,
        retailer_id: Option<&str>,
    ) -> PricingResult<LineItemPricingResult> {
        let retailer = self.retailer_context(retailer_id)?;
        self.price_line(product_id, quantity, retailer.as_ref())
    }

    /// Prices a whole order and aggregates the totals.
    ///
    /// ## Errors
    /// Everything [`Self::compute_line_pricing`] can fail with, plus
    /// [`PricingError::EmptyOrder`] when `lines` is empty.
    pub fn compute_order_pricing(
        &self,
        retailer_id: Option<&str>,
        lines: &[OrderLineRequest],
    ) -> PricingResult<OrderPricingResult> {
        if lines.is_empty() {
            return Err(PricingError::EmptyOrder);
        }

        // Tier resolution happens once: every line of the order prices
        // under the same retailer context.
        let retailer = self.retailer_context(retailer_id)?;

        let mut computed = Vec::with_capacity(lines.len());
        for line in lines {
            computed.push(self.price_line(&line.product_id, line.quantity, retailer.as_ref())?);
        }

        aggregate(computed)
    }

    fn retailer_context(
        &self,
        retailer_id: Option<&str>,
    ) -> PricingResult<Option<RetailerContext>> {
        let Some(retailer_id) = retailer_id else {
            return Ok(None);
        };

        let tier = self.retailer_pricing.get_tier(retailer_id)?;
        Ok(Some(RetailerContext {
            retailer_id: retailer_id.to_string(),
            tier,
        }))
    }

    fn price_line(
        &self,
        product_id: &str,
        quantity: u32,
        retailer: Option<&RetailerContext>,
    ) -> PricingResult<LineItemPricingResult> {
        let product = self
            .catalog
            .get_product(product_id)?
            .ok_or_else(|| PricingError::invalid_product(product_id, "not found in catalog"))?;

        let active_override = match retailer {
            Some(ctx) => self
                .retailer_pricing
                .get_active_override(&ctx.retailer_id, product_id)?,
            None => None,
        };

        let bulk_rules = self.bulk_rules.list_active_rules(product_id)?;
        let tax_percent = self.tax.tax_percent(Some(product_id))?;

        compute_line(
            &product,
            quantity,
            retailer,
            active_override.as_ref(),
            &bulk_rules,
            tax_percent,
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
