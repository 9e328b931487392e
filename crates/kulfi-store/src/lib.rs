//! # kulfi-store: Pricing Store Layer
//!
//! Read-only pricing-data snapshots for the kulfi ordering platform.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    kulfi-core (Pure Logic)                      │   │
//! │  │        defines: CatalogStore, RetailerPricingStore,             │   │
//! │  │                 BulkRuleStore, TaxConfig                        │   │
//! │  └─────────────────────────────▲───────────────────────────────────┘   │
//! │                                │ implements                            │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │                 kulfi-store (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌────────────┐  ┌────────────┐               │   │
//! │  │   │  retailer  │  │   memory   │  │    seed    │               │   │
//! │  │   │  Accounts  │  │  Snapshot  │  │  Dev data  │               │   │
//! │  │   └────────────┘  └────────────┘  └────────────┘               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`retailer`] - Retailer account records (tier, shop details)
//! - [`memory`] - In-memory snapshot implementing all four store traits
//! - [`seed`] - Sample catalog, retailers, overrides, and bulk rules
//!
//! ## Snapshot Semantics
//!
//! A [`memory::MemoryPricingStore`] is immutable after construction, so one
//! value IS a consistent snapshot: every lookup an engine makes against it
//! observes the same override/rule generation. Admin mutations build a new
//! snapshot; in-flight pricing calls keep the one they started with.

pub mod memory;
pub mod retailer;
pub mod seed;

pub use memory::MemoryPricingStore;
pub use retailer::RetailerAccount;
