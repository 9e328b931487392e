//! # Pricing Preview
//!
//! Prices a sample order against the seeded snapshot and prints both the
//! admin and retailer JSON views side by side.
//!
//! ## Usage
//! ```bash
//! # Preview the default VIP order
//! cargo run -p kulfi-store --bin preview
//!
//! # Preview for a different seeded retailer
//! cargo run -p kulfi-store --bin preview -- --retailer ret_002
//!
//! # Anonymous walk-in pricing
//! cargo run -p kulfi-store --bin preview -- --anonymous
//! ```
//!
//! Enable `RUST_LOG=debug` to watch the per-line store lookups.

use std::env;

use tracing_subscriber::EnvFilter;

use kulfi_core::{project_admin_view, project_retailer_view, OrderLineRequest, PricingEngine};
use kulfi_store::seed;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut retailer_id: Option<String> = Some(seed::KUMAR_SWEET_SHOP.to_string());

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--retailer" | "-r" => {
                if i + 1 < args.len() {
                    retailer_id = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--anonymous" | "-a" => {
                retailer_id = None;
            }
            "--help" | "-h" => {
                println!("Kulfi Pricing Preview");
                println!();
                println!("Usage: preview [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -r, --retailer <ID>  Price as this retailer (default: ret_001)");
                println!("  -a, --anonymous      Price as an anonymous walk-in customer");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🍨 Kulfi Pricing Preview");
    println!("========================");
    match &retailer_id {
        Some(id) => println!("Retailer: {}", id),
        None => println!("Retailer: (anonymous)"),
    }
    println!();

    let store = seed::seeded_store();
    let engine = PricingEngine::new(&store, &store, &store, &store);

    // A representative order: tier pricing, a negotiated custom price, and
    // a quantity that crosses the 100-unit bulk threshold.
    let order_lines = [
        OrderLineRequest::new("malai", 10),
        OrderLineRequest::new("chocolate", 60),
        OrderLineRequest::new("mango", 150),
    ];

    for line in &order_lines {
        println!("  {} x{}", line.product_id, line.quantity);
    }
    println!();

    let result = engine.compute_order_pricing(retailer_id.as_deref(), &order_lines)?;

    println!("✓ Priced {} lines", result.lines.len());
    println!();

    println!("Admin view (full breakdown):");
    println!(
        "{}",
        serde_json::to_string_pretty(&project_admin_view(&result))?
    );
    println!();

    println!("Retailer view (final prices only):");
    println!(
        "{}",
        serde_json::to_string_pretty(&project_retailer_view(&result))?
    );

    Ok(())
}
