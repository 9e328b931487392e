//! # Seed Data
//!
//! Sample catalog, retailers, overrides, and bulk rules for local
//! development and tests.
//!
//! The fixture mirrors a small kulfi factory's real book: a handful of
//! flavors, two wholesale buyers on different tiers, one negotiated custom
//! price, and the standard quantity ladder.

use chrono::{Duration, Utc};
use uuid::Uuid;

use kulfi_core::tier::PricingTier;
use kulfi_core::types::{BulkPricingRule, ProductPriceInfo, RetailerPricingOverride, RuleScope};

use crate::memory::MemoryPricingStore;
use crate::retailer::RetailerAccount;

/// Retailer id of the seeded VIP account (Kumar Sweet Shop).
pub const KUMAR_SWEET_SHOP: &str = "ret_001";

/// Retailer id of the seeded PREMIUM account (Sharma Ice Cream Parlor).
pub const SHARMA_PARLOR: &str = "ret_002";

/// Retailer id of the seeded REGULAR account.
pub const GUPTA_GENERAL: &str = "ret_003";

/// The full kulfi flavor catalog.
pub fn sample_products() -> Vec<ProductPriceInfo> {
    fn product(id: &str, name: &str, base_price: f64, cost_price: f64) -> ProductPriceInfo {
        ProductPriceInfo {
            id: id.to_string(),
            name: name.to_string(),
            base_price,
            cost_price: Some(cost_price),
        }
    }

    vec![
        product("malai", "Malai Kulfi", 20.0, 12.0),
        product("chocolate", "Chocolate Kulfi", 30.0, 19.0),
        product("mango", "Mango Kulfi", 40.0, 26.0),
        product("pista", "Pista Kulfi", 35.0, 24.0),
        product("rose", "Rose Kulfi", 25.0, 15.0),
        product("kesar_badam", "Kesar Badam Kulfi", 45.0, 30.0),
    ]
}

/// Registered wholesale buyers.
pub fn sample_retailers() -> Vec<RetailerAccount> {
    fn retailer(
        id: &str,
        name: &str,
        shop_name: &str,
        city: &str,
        gst_number: &str,
        tier: PricingTier,
    ) -> RetailerAccount {
        let now = Utc::now();
        RetailerAccount {
            id: id.to_string(),
            name: name.to_string(),
            shop_name: shop_name.to_string(),
            city: city.to_string(),
            gst_number: gst_number.to_string(),
            tier,
            is_active: true,
            total_outstanding: 0.0,
            credit_limit: 50_000.0,
            created_at: now,
            updated_at: now,
        }
    }

    vec![
        retailer(
            KUMAR_SWEET_SHOP,
            "Rajesh Kumar",
            "Kumar Sweet Shop",
            "Kopargaon",
            "27AABCU9603R1Z5",
            PricingTier::Vip,
        ),
        retailer(
            SHARMA_PARLOR,
            "Anita Sharma",
            "Sharma Ice Cream Parlor",
            "Shirdi",
            "27AADCS1234F1Z2",
            PricingTier::Premium,
        ),
        retailer(
            GUPTA_GENERAL,
            "Manoj Gupta",
            "Gupta General Stores",
            "Ahmednagar",
            "27AAACG5678K1Z9",
            PricingTier::Regular,
        ),
    ]
}

/// Negotiated pricing overrides.
///
/// Kumar Sweet Shop buys chocolate kulfi at a flat 25.0 when ordering at
/// least 50 units.
pub fn sample_overrides() -> Vec<RetailerPricingOverride> {
    let now = Utc::now();
    vec![RetailerPricingOverride {
        id: Uuid::new_v4().to_string(),
        retailer_id: KUMAR_SWEET_SHOP.to_string(),
        product_id: "chocolate".to_string(),
        custom_price: Some(25.0),
        discount_percent: 0.0,
        minimum_quantity: 50,
        is_active: true,
        created_at: now - Duration::days(30),
        updated_at: now - Duration::days(30),
    }]
}

/// The standard catalog-wide quantity ladder.
pub fn sample_bulk_rules() -> Vec<BulkPricingRule> {
    fn rule(minimum_quantity: u32, discount_percent: f64) -> BulkPricingRule {
        BulkPricingRule {
            id: Uuid::new_v4().to_string(),
            scope: RuleScope::AllProducts,
            minimum_quantity,
            discount_percent,
            is_active: true,
        }
    }

    vec![
        rule(100, 5.0),
        rule(200, 10.0),
        rule(500, 15.0),
        rule(1000, 20.0),
    ]
}

/// A fully seeded snapshot, default GST 18%.
pub fn seeded_store() -> MemoryPricingStore {
    MemoryPricingStore::new()
        .with_products(sample_products())
        .with_retailers(sample_retailers())
        .with_overrides(sample_overrides())
        .with_bulk_rules(sample_bulk_rules())
}

// =============================================================================
// Unit Tests
// =============================================================================
