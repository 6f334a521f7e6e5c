//! Response DTOs for quote API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::aggregator::QuoteBreakdown;
use super::calculators::{format_money, PhotographyCost, PortraitsCost, ReelsCost, TierProgress};
use super::catalog::PricingCatalog;
use super::models::OrderState;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Prefixed and grouped, e.g. "K18,000"
    pub display: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, catalog: &PricingCatalog) -> Self {
        Self {
            amount,
            display: format_money(amount, &catalog.currency_prefix),
        }
    }
}

/// Response for a photography price check
#[derive(Debug, Serialize)]
pub struct PhotographyQuoteResponse {
    pub cost: PhotographyCost,
    pub total: MoneyResponse,
    /// Running total shown before the session fee is added in the summary step
    pub options_subtotal: MoneyResponse,
    pub progress: TierProgress,
}

/// Response for a reels price check
#[derive(Debug, Serialize)]
pub struct ReelsQuoteResponse {
    pub cost: ReelsCost,
    pub total: MoneyResponse,
}

/// Response for a portraits price check
#[derive(Debug, Serialize)]
pub struct PortraitsQuoteResponse {
    pub cost: PortraitsCost,
    pub total: MoneyResponse,
}

/// Response for the cross-service quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub breakdown: QuoteBreakdown,
    pub grand_total: MoneyResponse,
    pub summary: Vec<String>,
    pub message: String,
    pub whatsapp_url: String,
}

/// Response for an applied order edit
#[derive(Debug, Serialize)]
pub struct ApplyActionResponse {
    pub state: OrderState,
    pub quote: QuoteResponse,
}
