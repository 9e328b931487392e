//! # Error Types
//!
//! The pricing error taxonomy for kulfi-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kulfi-core errors (this file)                                         │
//! │  ├── PricingError  - Caller contract violations + store failures       │
//! │  └── StoreError    - External lookup failures (wrapped)                │
//! │                                                                         │
//! │  Order API errors (external consumer)                                  │
//! │  └── Translates PricingError into 4xx responses                        │
//! │                                                                         │
//! │  Flow: StoreError → PricingError → Order API → Client                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, quantity, etc.)
//! 3. Errors are enum variants, never String
//! 4. Soft conditions (unknown tier, missing override, inactive rule) are
//!    NOT errors - they resolve permissively to "no discount"

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// An external pricing-store lookup failed.
///
/// The engine never retries internally; retry policy belongs to the calling
/// order-placement flow.
#[derive(Debug, Clone, Error)]
#[error("pricing store unavailable: {reason}")]
pub struct StoreError {
    /// Human-readable description of the failed lookup.
    pub reason: String,
}

impl StoreError {
    /// Creates a StoreError with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        StoreError {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Pricing Error
// =============================================================================

/// Pricing computation errors.
///
/// These represent caller contract violations or store failures. Everything
/// else (unknown tier, no override, no matching bulk rule) degrades to a sane
/// default rather than failing: pricing must always produce a number for any
/// valid product and quantity.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Quantity must be positive.
    ///
    /// ## When This Occurs
    /// - A line is requested with quantity 0
    /// - The caller forwarded an unvalidated cart row
    #[error("Invalid quantity: {quantity} (must be positive)")]
    InvalidQuantity { quantity: i64 },

    /// Product is unknown or carries an unusable base price.
    ///
    /// ## When This Occurs
    /// - Product id is missing from the catalog
    /// - Base price is zero, negative, or not finite
    #[error("Invalid product {product_id}: {reason}")]
    InvalidProduct { product_id: String, reason: String },

    /// An order must have at least one line.
    #[error("Order has no line items")]
    EmptyOrder,

    /// An external lookup failed (catalog, overrides, bulk rules, or tax).
    ///
    /// Surfaced to the caller as-is; the engine does not retry.
    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),
}

impl PricingError {
    /// Creates an InvalidProduct error for a given product id.
    pub fn invalid_product(product_id: impl Into<String>, reason: impl Into<String>) -> Self {
        PricingError::InvalidProduct {
            product_id: product_id.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
