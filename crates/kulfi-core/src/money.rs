//! # Money Helpers
//!
//! Full-precision monetary math and the single presentation-rounding step.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE AD-HOC ROUNDING PROBLEM                                            │
//! │                                                                         │
//! │  Rounding each intermediate value compounds error across lines:        │
//! │    round(19.995) + round(19.995) = 40.00                               │
//! │    round(19.995 + 19.995)        = 39.99  → totals drift by line count │
//! │                                                                         │
//! │  OUR SOLUTION: One Rounding Boundary                                   │
//! │    resolver → line → aggregate keep FULL f64 precision                 │
//! │    projection (admin/retailer DTOs) rounds once, to 2 decimals         │
//! │                                                                         │
//! │  Order identities (total = subtotal - discount + tax) are checked      │
//! │  to MONEY_EPSILON (one paisa).                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Percentage Application
// =============================================================================

/// Applies a percentage discount to an amount and returns the discounted value.
///
/// ## Example
/// ```rust
/// use kulfi_core::money::apply_percent_discount;
///
/// assert_eq!(apply_percent_discount(40.0, 10.0), 36.0);
/// assert_eq!(apply_percent_discount(36.0, 0.0), 36.0);
/// ```
#[inline]
pub fn apply_percent_discount(amount: f64, percent: f64) -> f64 {
    amount * (1.0 - percent / 100.0)
}

/// Computes a percentage of an amount (used for tax).
///
/// ## Example
/// ```rust
/// use kulfi_core::money::percent_of;
///
/// // 5% GST on 15.00
/// assert_eq!(percent_of(15.0, 5.0), 0.75);
/// ```
#[inline]
pub fn percent_of(amount: f64, percent: f64) -> f64 {
    amount * percent / 100.0
}

// =============================================================================
// Presentation Rounding
// =============================================================================

/// Rounds a monetary value to 2 decimal places, half away from zero.
///
/// This is the ONLY rounding step in the crate and it is applied exclusively
/// when producing the external admin/retailer DTOs. Internal computation
/// keeps full precision so rounding error never accumulates across lines.
///
/// ## Example
/// ```rust
/// use kulfi_core::money::round_money;
///
/// assert_eq!(round_money(15.754999), 15.75);
/// assert_eq!(round_money(0.825), 0.83);
/// assert_eq!(round_money(-0.825), -0.83);
/// ```
#[inline]
pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Clamps a unit price to be non-negative.
///
/// Discount percentages above 100 or malformed overrides must never produce
/// a negative price.
#[inline]
pub fn clamp_price(amount: f64) -> f64 {
    amount.max(0.0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MONEY_EPSILON;

    #[test]
    fn test_apply_percent_discount() {
        assert_eq!(apply_percent_discount(100.0, 25.0), 75.0);
        assert_eq!(apply_percent_discount(20.0, 0.0), 20.0);
        assert!((apply_percent_discount(36.0, 5.0) - 34.2).abs() < 1e-9);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(100.0, 18.0), 18.0);
        assert_eq!(percent_of(15.0, 5.0), 0.75);
        assert_eq!(percent_of(0.0, 18.0), 0.0);
    }

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(0.825), 0.83);
        assert_eq!(round_money(0.824), 0.82);
        assert_eq!(round_money(-0.825), -0.83);
        assert_eq!(round_money(5130.0), 5130.0);
    }

    #[test]
    fn test_clamp_price() {
        assert_eq!(clamp_price(-3.5), 0.0);
        assert_eq!(clamp_price(0.0), 0.0);
        assert_eq!(clamp_price(12.25), 12.25);
    }

    /// Documents why rounding waits for the projection boundary: rounding
    /// per line drifts from rounding the sum.
    #[test]
    fn test_per_line_rounding_would_drift() {
        let lines = [19.995f64; 2];
        let rounded_then_summed: f64 = lines.iter().map(|v| round_money(*v)).sum();
        let summed_then_rounded = round_money(lines.iter().sum());

        assert!((rounded_then_summed - 40.0).abs() < MONEY_EPSILON);
        assert!((summed_then_rounded - 39.99).abs() < MONEY_EPSILON);
        assert_ne!(rounded_then_summed, summed_then_rounded);
    }
}
