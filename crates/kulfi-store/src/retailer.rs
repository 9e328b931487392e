//! # Retailer Accounts
//!
//! Retailer master records owned by the admin surface.
//!
//! The pricing engine itself only ever sees a retailer's id and tier; the
//! rest of the record (shop details, credit standing) belongs to order
//! placement and admin screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kulfi_core::tier::PricingTier;

/// A wholesale buyer registered with the factory.
///
/// ## Lifecycle
/// Created and tier-assigned by admin action. Deactivation is soft
/// (`is_active`); deactivated retailers price at standard retail like any
/// unknown caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailerAccount {
    /// Unique identifier (UUID).
    pub id: String,

    /// Contact person.
    pub name: String,

    /// Registered shop name.
    pub shop_name: String,

    /// City the shop operates in.
    pub city: String,

    /// GST registration number.
    pub gst_number: String,

    /// Assigned pricing tier.
    pub tier: PricingTier,

    /// Soft-delete flag.
    pub is_active: bool,

    /// Outstanding balance owed to the factory.
    pub total_outstanding: f64,

    /// Credit limit granted by the factory.
    pub credit_limit: f64,

    /// When the account was created.
    pub created_at: DateTime<Utc>,

    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl RetailerAccount {
    /// The tier this account prices under.
    ///
    /// Inactive accounts degrade to standard retail pricing; history stays,
    /// discounts don't.
    pub fn effective_tier(&self) -> PricingTier {
        if self.is_active {
            self.tier
        } else {
            PricingTier::default()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn account(tier: PricingTier, is_active: bool) -> RetailerAccount {
        RetailerAccount {
            id: "ret_001".to_string(),
            name: "Rajesh Kumar".to_string(),
            shop_name: "Kumar Sweet Shop".to_string(),
            city: "Kopargaon".to_string(),
            gst_number: "27AABCU9603R1Z5".to_string(),
            tier,
            is_active,
            total_outstanding: 5000.0,
            credit_limit: 50000.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_active_account_keeps_its_tier() {
        assert_eq!(
            account(PricingTier::Vip, true).effective_tier(),
            PricingTier::Vip
        );
    }

    #[test]
    fn test_inactive_account_prices_at_retail() {
        assert_eq!(
            account(PricingTier::Vip, false).effective_tier(),
            PricingTier::Retail
        );
    }
}
