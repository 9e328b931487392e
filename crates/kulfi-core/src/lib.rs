//! # kulfi-core: Pure Pricing Logic for the Kulfi Ordering Platform
//!
//! This crate is the **heart** of the kulfi B2B ordering platform. It computes
//! per-line and order-level pricing as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Kulfi Platform Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Order Placement / Admin Pricing Surface                │   │
//! │  │    place_order, pricing_preview, override management            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kulfi-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   tier    │  │ resolver  │  │   bulk    │  │   line    │  │   │
//! │  │   │ TierTable │  │ Override  │  │ Threshold │  │ LineCalc  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ aggregate │  │projection │  │  engine   │  │   store   │  │   │
//! │  │   │  Totals   │  │Admin/Ret. │  │  Facade   │  │  Traits   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                kulfi-store (Pricing Snapshots)                  │   │
//! │  │        Catalog, overrides, bulk rules, tax configuration        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`tier`] - Pricing tiers and their fixed discount table
//! - [`types`] - Domain types (overrides, bulk rules, pricing results)
//! - [`money`] - Full-precision monetary helpers and presentation rounding
//! - [`error`] - Pricing error taxonomy
//! - [`validation`] - Input validation
//! - [`resolver`] - Effective unit price resolution (override → tier → base)
//! - [`bulk`] - Quantity-threshold discount selection
//! - [`line`] - Per-line pricing breakdown
//! - [`aggregate`] - Order-level totals
//! - [`projection`] - Admin and retailer views of one internal result
//! - [`store`] - Read-only collaborator traits (catalog, overrides, rules, tax)
//! - [`engine`] - Library facade over the store traits
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Full Precision Internally**: Monetary math stays in full `f64` precision;
//!    rounding to 2 decimals happens once, at the projection boundary
//! 4. **One Result, Two Views**: Admins and retailers see projections of the same
//!    internal computation; retailers never see base price, tier, or overrides
//! 5. **Permissive Resolution**: Missing tiers, overrides, or rules degrade to
//!    "no discount" - pricing never blocks an order from being priced
//!
//! ## Example Usage
//!
//! ```rust
//! use kulfi_core::tier::PricingTier;
//! use kulfi_core::types::{ProductPriceInfo, RetailerContext};
//! use kulfi_core::line::compute_line;
//!
//! let kulfi = ProductPriceInfo {
//!     id: "malai".to_string(),
//!     name: "Malai Kulfi".to_string(),
//!     base_price: 20.0,
//!     cost_price: Some(12.0),
//! };
//! let retailer = RetailerContext {
//!     retailer_id: "ret_001".to_string(),
//!     tier: PricingTier::Vip,
//! };
//!
//! // VIP tier (25% off), 5% GST, no override, no bulk rules
//! let line = compute_line(&kulfi, 1, Some(&retailer), None, &[], 5.0).unwrap();
//! assert!((line.line_total - 15.75).abs() < kulfi_core::MONEY_EPSILON);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod bulk;
pub mod engine;
pub mod error;
pub mod line;
pub mod money;
pub mod projection;
pub mod resolver;
pub mod store;
pub mod tier;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kulfi_core::PricingTier` instead of
// `use kulfi_core::tier::PricingTier`

pub use engine::{OrderLineRequest, PricingEngine};
pub use error::{PricingError, PricingResult, StoreError};
pub use projection::{project_admin_view, project_retailer_view};
pub use tier::PricingTier;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default GST percentage applied when the tax configuration has no
/// product-specific rate.
///
/// ## Why a constant?
/// Kulfi is taxed at the standard 18% GST slab. Tax configuration can still
/// override it per product via [`store::TaxConfig`].
pub const DEFAULT_GST_PERCENT: f64 = 18.0;

/// Tolerance for monetary comparisons.
///
/// Internal computation keeps full `f64` precision; order-level identities
/// (`total = subtotal - discount + tax`) are only meaningful to the paisa.
pub const MONEY_EPSILON: f64 = 0.01;
