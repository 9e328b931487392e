//! # Pricing View Projector
//!
//! Projects one internal [`OrderPricingResult`] into the two external
//! response shapes.
//!
//! ## The Information-Hiding Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              One Internal Result, Two Projections                       │
//! │                                                                         │
//! │                    OrderPricingResult (server-side)                     │
//! │                        │                     │                          │
//! │         project_admin_view           project_retailer_view              │
//! │                        │                     │                          │
//! │                        ▼                     ▼                          │
//! │   AdminOrderPricing              RetailerOrderPricing                   │
//! │   ─────────────────              ────────────────────                   │
//! │   tier, basePrice,               unitPriceFinal, taxAmount,             │
//! │   overridePrice,                 discountAmount, lineTotal              │
//! │   effectivePrice,                + order totals                         │
//! │   quantityDiscountPercentage,                                           │
//! │   gstPercentage, ... everything  NO tier. NO base price. NO override.   │
//! │                                  NO cost structure. HARD requirement:   │
//! │                                  retailers must not infer factory       │
//! │                                  margins or other retailers' tiers.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both projections are pure. This is also where the single presentation
//! rounding step happens: every monetary field is rounded to 2 decimals on
//! the way out, never earlier.

use serde::{Deserialize, Serialize};

use crate::money::round_money;
use crate::tier::PricingTier;
use crate::types::{LineItemPricingResult, OrderPricingResult};

// =============================================================================
// Admin View
// =============================================================================

/// One order line with the full breakdown. ADMIN ONLY.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLinePricing {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    /// Tier the line was priced under. `null` for anonymous customers.
    pub tier: Option<PricingTier>,
    pub base_price: f64,
    /// Negotiated custom price, when one applied.
    pub override_price: Option<f64>,
    /// Unit price after tier/override resolution.
    pub effective_price: f64,
    pub is_custom_price: bool,
    /// Bulk quantity discount percentage.
    pub quantity_discount_percentage: f64,
    /// Line discount versus base price.
    pub discount_amount: f64,
    /// Unit price after all discounts, before tax.
    pub price_after_discount: f64,
    pub gst_percentage: f64,
    pub gst_amount: f64,
    pub unit_price_final: f64,
    pub line_total: f64,
}

/// Complete order pricing for admin surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOrderPricing {
    pub lines: Vec<AdminLinePricing>,
    pub subtotal: f64,
    pub total_discount: f64,
    pub total_tax: f64,
    pub total_amount: f64,
}

// =============================================================================
// Retailer / Customer View
// =============================================================================

/// One order line as retailers and customers see it: final prices only.
///
/// Deliberately has NO field for tier, base price, override, or cost - the
/// type system enforces the non-leakage boundary in one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailerLinePricing {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    /// Final unit price: after all discounts, before tax.
    pub unit_price_final: f64,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub line_total: f64,
}

/// Order pricing for retailer and customer surfaces: final figures only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailerOrderPricing {
    pub items: Vec<RetailerLinePricing>,
    pub subtotal: f64,
    pub total_tax: f64,
    pub total_discount: f64,
    pub total_amount: f64,
}

// =============================================================================
// Projections
// =============================================================================

/// Projects the full internal result for the factory admin.
///
/// Every field per line, plus order totals. Monetary values are rounded to
/// 2 decimals here, at the presentation boundary.
pub fn project_admin_view(result: &OrderPricingResult) -> AdminOrderPricing {
    AdminOrderPricing {
        lines: result.lines.iter().map(admin_line).collect(),
        subtotal: round_money(result.subtotal),
        total_discount: round_money(result.total_discount),
        total_tax: round_money(result.total_tax),
        total_amount: round_money(result.total_amount),
    }
}

/// Projects the internal result for retailers and customers.
///
/// Final prices only: no tier name, no base price, no override flag, no cost
/// price. This boundary is a hard security/business requirement.
pub fn project_retailer_view(result: &OrderPricingResult) -> RetailerOrderPricing {
    RetailerOrderPricing {
        items: result.lines.iter().map(retailer_line).collect(),
        subtotal: round_money(result.subtotal),
        total_tax: round_money(result.total_tax),
        total_discount: round_money(result.total_discount),
        total_amount: round_money(result.total_amount),
    }
}

fn admin_line(line: &LineItemPricingResult) -> AdminLinePricing {
    AdminLinePricing {
        product_id: line.product_id.clone(),
        product_name: line.product_name.clone(),
        quantity: line.quantity,
        tier: line.tier,
        base_price: round_money(line.base_price),
        override_price: line.override_price.map(round_money),
        effective_price: round_money(line.effective_unit_price),
        is_custom_price: line.is_custom_price,
        quantity_discount_percentage: line.bulk_discount_percent,
        discount_amount: round_money(line.discount_amount),
        price_after_discount: round_money(line.price_after_discount),
        gst_percentage: line.tax_percent,
        gst_amount: round_money(line.tax_amount),
        unit_price_final: round_money(line.final_unit_price),
        line_total: round_money(line.line_total),
    }
}

fn retailer_line(line: &LineItemPricingResult) -> RetailerLinePricing {
    RetailerLinePricing {
        product_id: line.product_id.clone(),
        product_name: line.product_name.clone(),
        quantity: line.quantity,
        unit_price_final: round_money(line.final_unit_price),
        tax_amount: round_money(line.tax_amount),
        discount_amount: round_money(line.discount_amount),
        line_total: round_money(line.line_total),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::line::compute_line;
    use crate::tier::PricingTier;
    use crate::types::{ProductPriceInfo, RetailerContext, RetailerPricingOverride};
    use chrono::Utc;
    use serde_json::Value;

    fn sample_order() -> OrderPricingResult {
        let malai = ProductPriceInfo {
            id: "malai".to_string(),
            name: "Malai Kulfi".to_string(),
            base_price: 20.0,
            cost_price: Some(12.0),
        };
        let chocolate = ProductPriceInfo {
            id: "chocolate".to_string(),
            name: "Chocolate Kulfi".to_string(),
            base_price: 30.0,
            cost_price: Some(19.0),
        };
        let retailer = RetailerContext {
            retailer_id: "ret_001".to_string(),
            tier: PricingTier::Vip,
        };
        let ovr = RetailerPricingOverride {
            id: "ovr_001".to_string(),
            retailer_id: "ret_001".to_string(),
            product_id: "chocolate".to_string(),
            custom_price: Some(25.0),
            discount_percent: 0.0,
            minimum_quantity: 50,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let lines = vec![
            compute_line(&malai, 10, Some(&retailer), None, &[], 18.0).unwrap(),
            compute_line(&chocolate, 60, Some(&retailer), Some(&ovr), &[], 18.0).unwrap(),
        ];
        aggregate(lines).unwrap()
    }

    /// Collects every JSON object key in a value tree.
    fn collect_keys(value: &Value, keys: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    keys.push(k.clone());
                    collect_keys(v, keys);
                }
            }
            Value::Array(items) => {
                for item in items {
                    collect_keys(item, keys);
                }
            }
            _ => {}
        }
    }

    #[test]
    fn test_admin_view_carries_full_breakdown() {
        let admin = project_admin_view(&sample_order());

        let json = serde_json::to_value(&admin).unwrap();
        let line = &json["lines"][1];
        assert_eq!(line["tier"], "VIP");
        assert_eq!(line["basePrice"], 30.0);
        assert_eq!(line["overridePrice"], 25.0);
        assert_eq!(line["effectivePrice"], 25.0);
        assert_eq!(line["isCustomPrice"], true);
        assert_eq!(line["gstPercentage"], 18.0);
        assert!(line["quantityDiscountPercentage"].is_number());
        assert!(json["totalAmount"].is_number());
    }

    #[test]
    fn test_retailer_view_field_names() {
        let retailer = project_retailer_view(&sample_order());

        let json = serde_json::to_value(&retailer).unwrap();
        let item = &json["items"][0];
        assert!(item["unitPriceFinal"].is_number());
        assert!(item["taxAmount"].is_number());
        assert!(item["discountAmount"].is_number());
        assert!(item["lineTotal"].is_number());
        assert!(json["subtotal"].is_number());
        assert!(json["totalTax"].is_number());
        assert!(json["totalDiscount"].is_number());
        assert!(json["totalAmount"].is_number());
    }

    /// The non-leakage property, verified structurally: the retailer view
    /// must never contain a field that exposes base price, tier, override,
    /// or cost data - at any nesting depth.
    #[test]
    fn test_retailer_view_leaks_nothing() {
        let retailer = project_retailer_view(&sample_order());
        let json = serde_json::to_value(&retailer).unwrap();

        let mut keys = Vec::new();
        collect_keys(&json, &mut keys);

        const FORBIDDEN: &[&str] = &[
            "tier",
            "basePrice",
            "overridePrice",
            "effectivePrice",
            "isCustomPrice",
            "costPrice",
            "quantityDiscountPercentage",
            "appliedDiscountPercent",
            "priceAfterDiscount",
            "gstPercentage",
        ];
        for key in &keys {
            assert!(
                !FORBIDDEN.contains(&key.as_str()),
                "retailer view leaked field {key}"
            );
        }
    }

    #[test]
    fn test_monetary_fields_are_rounded_to_paise() {
        let order = sample_order();
        let admin = project_admin_view(&order);
        let retailer = project_retailer_view(&order);

        let all = [
            admin.subtotal,
            admin.total_discount,
            admin.total_tax,
            admin.total_amount,
            retailer.items[0].line_total,
            retailer.items[1].tax_amount,
        ];
        for value in all {
            let scaled = value * 100.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-6,
                "{value} is not rounded to 2 decimals"
            );
        }
    }

    #[test]
    fn test_both_views_agree_on_totals() {
        let order = sample_order();
        let admin = project_admin_view(&order);
        let retailer = project_retailer_view(&order);

        assert_eq!(admin.subtotal, retailer.subtotal);
        assert_eq!(admin.total_discount, retailer.total_discount);
        assert_eq!(admin.total_tax, retailer.total_tax);
        assert_eq!(admin.total_amount, retailer.total_amount);
    }
}
