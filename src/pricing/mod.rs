//! Quote calculation engine for the studio booking site.
//!
//! Turns order selections into per-service costs, a cross-service quote and
//! a formatted summary. The engine is pure: callers pass the order snapshot
//! and the catalog explicitly.

pub mod aggregator;
pub mod calculators;
pub mod catalog;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod summary;

// Re-export commonly used items
pub use aggregator::{aggregate, LineItem, QuoteBreakdown};
pub use calculators::{
    calculate_photography, calculate_portraits, calculate_reels, format_money, round_money,
    standard_photos_cost, tier_name, tier_progress, ExpressLine, PhotographyCost, PortraitsCost, ReelsCost,
    TierProgress,
};
pub use catalog::PricingCatalog;
pub use models::{
    CanvasSize, CompletedServices, ExpressSpeed, OrderAction, OrderState, PeopleTier,
    PhotographyOrder, PortraitsOrder, ReelPackage, ReelsOrder, ServiceId,
};
pub use routes::router;
pub use summary::{whatsapp_link, Summary, SummaryFormatter};
