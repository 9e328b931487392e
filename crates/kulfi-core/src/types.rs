//! # Domain Types
//!
//! Core domain types for the pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Read-only inputs (owned by the admin catalog/pricing store):          │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌────────────────────────┐  ┌────────────────┐  │
//! │  │ ProductPriceInfo │  │ RetailerPricingOverride│  │ BulkPricingRule│  │
//! │  │  ──────────────  │  │  ────────────────────  │  │  ────────────  │  │
//! │  │  base_price      │  │  custom_price?         │  │  scope         │  │
//! │  │  cost_price?     │  │  discount_percent      │  │  min quantity  │  │
//! │  │  (admin-only)    │  │  minimum_quantity      │  │  discount %    │  │
//! │  └──────────────────┘  │  is_active             │  │  is_active     │  │
//! │                        └────────────────────────┘  └────────────────┘  │
//! │                                                                         │
//! │  Ephemeral outputs (computed per call, never persisted):               │
//! │                                                                         │
//! │  ┌────────────────────────┐       ┌────────────────────────┐           │
//! │  │ LineItemPricingResult  │ ────► │  OrderPricingResult    │           │
//! │  │  full per-line         │  Σ    │  subtotal, discounts,  │           │
//! │  │  breakdown             │       │  tax, total            │           │
//! │  └────────────────────────┘       └────────────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Optionality
//! "Not set" is always `Option<T>`, never a sentinel number or a magic
//! string. `RuleScope` replaces the legacy `"all"` wildcard product id so the
//! precedence logic stays auditable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tier::PricingTier;

// =============================================================================
// Product Price Info
// =============================================================================

/// Pricing-relevant catalog data for one product.
///
/// A read-only snapshot handed to the engine by the catalog store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPriceInfo {
    /// Unique identifier (UUID or catalog slug).
    pub id: String,

    /// Display name shown on order lines.
    pub name: String,

    /// Factory-set selling price before any discount. Must be > 0 for any
    /// orderable product.
    pub base_price: f64,

    /// Factory cost price. Admin-only: NEVER flows into pricing results or
    /// either projection.
    pub cost_price: Option<f64>,
}

// =============================================================================
// Retailer Context
// =============================================================================

/// The retailer identity a pricing call runs under.
///
/// Absent entirely for anonymous end customers, who always pay base price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetailerContext {
    /// Retailer identifier (UUID).
    pub retailer_id: String,

    /// The retailer's pricing tier.
    pub tier: PricingTier,
}

// =============================================================================
// Retailer Pricing Override
// =============================================================================

/// A retailer+product-specific pricing rule.
///
/// ## Precedence
/// An active override that meets its minimum quantity beats tier pricing.
/// If `custom_price` is set it wins outright; otherwise `discount_percent`
/// is applied to the base price.
///
/// ## Lifecycle
/// Created/updated/deactivated by admin action; never hard-deleted (the
/// `is_active` flag preserves history).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetailerPricingOverride {
    /// Unique identifier (UUID).
    pub id: String,

    /// Retailer this override belongs to.
    pub retailer_id: String,

    /// Product this override applies to.
    pub product_id: String,

    /// Negotiated unit price. If set, overrides everything else.
    pub custom_price: Option<f64>,

    /// Percentage discount (0..=100) applied to the base price when no
    /// custom price is set.
    pub discount_percent: f64,

    /// Minimum order quantity for this override to apply.
    pub minimum_quantity: u32,

    /// Soft-delete flag. Inactive overrides are kept for history but never
    /// considered during resolution.
    pub is_active: bool,

    /// When the override was created.
    pub created_at: DateTime<Utc>,

    /// When the override was last updated.
    pub updated_at: DateTime<Utc>,
}

impl RetailerPricingOverride {
    /// Checks whether this override applies to the given quantity.
    #[inline]
    pub fn applies_at(&self, quantity: u32) -> bool {
        self.is_active && quantity >= self.minimum_quantity
    }
}

// =============================================================================
// Bulk Pricing Rule
// =============================================================================

/// What products a bulk rule applies to.
///
/// Explicit enum instead of the legacy `"all"` wildcard string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleScope {
    /// Applies to every product in the catalog.
    AllProducts,
    /// Applies to a single product.
    Product(String),
}

impl RuleScope {
    /// Checks whether the scope covers the given product.
    #[inline]
    pub fn matches(&self, product_id: &str) -> bool {
        match self {
            RuleScope::AllProducts => true,
            RuleScope::Product(id) => id == product_id,
        }
    }
}

/// A quantity-threshold discount rule.
///
/// ## Selection Invariant
/// Rules never stack. Among active, in-scope rules whose threshold does not
/// exceed the order quantity, the one with the HIGHEST threshold wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkPricingRule {
    /// Unique identifier.
    pub id: String,

    /// Products this rule covers.
    pub scope: RuleScope,

    /// Minimum quantity threshold for the rule to apply.
    pub minimum_quantity: u32,

    /// Additional percentage discount (0..=100) on the resolved unit price.
    pub discount_percent: f64,

    /// Soft-delete flag.
    pub is_active: bool,
}

// =============================================================================
// Line Item Pricing Result
// =============================================================================

/// The full pricing breakdown for one order line.
///
/// Ephemeral and server-side only. All monetary fields carry FULL precision;
/// rounding happens in the projections. Callers must never serialize this
/// type to retailers - use [`crate::projection::project_retailer_view`].
///
/// ## Invariant
/// `line_total = price_after_discount * quantity + tax_amount`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemPricingResult {
    /// Product identifier.
    pub product_id: String,

    /// Product name at pricing time.
    pub product_name: String,

    /// Ordered quantity. Always > 0.
    pub quantity: u32,

    /// Tier the price was resolved under. None for anonymous customers.
    pub tier: Option<PricingTier>,

    /// Factory base price per unit.
    pub base_price: f64,

    /// Negotiated custom price, when an override with one applied.
    pub override_price: Option<f64>,

    /// Unit price after tier/override resolution, before bulk discount.
    pub effective_unit_price: f64,

    /// Whether a custom-price override set the effective price.
    pub is_custom_price: bool,

    /// Tier or override discount percentage that produced the effective
    /// price (0 for anonymous customers).
    pub applied_discount_percent: f64,

    /// Bulk quantity discount percentage applied on top (0 if none).
    pub bulk_discount_percent: f64,

    /// Unit price after ALL discounts (tier/override + bulk), before tax.
    pub price_after_discount: f64,

    /// Line-level discount versus base price:
    /// `(base_price - price_after_discount) * quantity`.
    /// Negative when a negotiated custom price sits above base.
    pub discount_amount: f64,

    /// GST percentage applied to this line.
    pub tax_percent: f64,

    /// Line-level tax: `price_after_discount * quantity * tax_percent / 100`.
    pub tax_amount: f64,

    /// Final unit price: after all discounts, before tax.
    pub final_unit_price: f64,

    /// Line total: `final_unit_price * quantity + tax_amount`.
    pub line_total: f64,
}

// =============================================================================
// Order Pricing Result
// =============================================================================

/// Order-level totals over a list of computed lines.
///
/// Ephemeral and server-side only, like the line results it aggregates.
///
/// ## Invariant
/// `total_amount = subtotal - total_discount + total_tax` (within
/// [`crate::MONEY_EPSILON`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPricingResult {
    /// The computed lines, in caller order.
    pub lines: Vec<LineItemPricingResult>,

    /// Sum of `base_price * quantity` before any discount.
    pub subtotal: f64,

    /// Sum of line discount amounts (tier/override + bulk).
    pub total_discount: f64,

    /// Sum of line tax amounts.
    pub total_tax: f64,

    /// Sum of line totals.
    pub total_amount: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
