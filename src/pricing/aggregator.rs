//! Cross-service quote aggregation.
//!
//! Only services the visitor has completed contribute to the quote.
//! Pending selections on other services never leak into the totals.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use strum::IntoEnumIterator;

use super::calculators::{
    calculate_photography, calculate_portraits, calculate_reels, PhotographyCost, PortraitsCost,
    ReelsCost,
};
use super::catalog::PricingCatalog;
use super::models::{OrderState, ServiceId};

/// One quoted service as a (label, amount) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub service: ServiceId,
    pub label: String,
    pub amount: Decimal,
}

/// Derived quote; recomputed from the order state on every read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteBreakdown {
    pub per_service_total: BTreeMap<ServiceId, Decimal>,
    pub grand_total: Decimal,
    /// Completed services only, in service order
    pub line_items: Vec<LineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photography: Option<PhotographyCost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reels: Option<ReelsCost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portraits: Option<PortraitsCost>,
}

impl QuoteBreakdown {
    /// Zero for services not in the quote
    pub fn service_total(&self, service: ServiceId) -> Decimal {
        self.per_service_total
            .get(&service)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.grand_total.is_zero()
    }
}

/// Combine the per-service rules into a single quote
pub fn aggregate(state: &OrderState, catalog: &PricingCatalog) -> QuoteBreakdown {
    let mut quote = QuoteBreakdown {
        per_service_total: BTreeMap::new(),
        grand_total: Decimal::ZERO,
        line_items: Vec::new(),
        photography: None,
        reels: None,
        portraits: None,
    };

    for service in ServiceId::iter().filter(|s| state.completed.contains(*s)) {
        let amount = match service {
            ServiceId::Photography => {
                let cost = calculate_photography(&state.photography, catalog);
                let total = cost.total;
                quote.photography = Some(cost);
                total
            }
            ServiceId::Reels => {
                let cost = calculate_reels(&state.reels, catalog);
                let total = cost.total;
                quote.reels = Some(cost);
                total
            }
            ServiceId::Portraits => {
                let cost = calculate_portraits(&state.portraits, catalog);
                let total = cost.total;
                quote.portraits = Some(cost);
                total
            }
        };

        quote.per_service_total.insert(service, amount);
        quote.grand_total += amount;
        quote.line_items.push(LineItem {
            service,
            label: service.title().to_string(),
            amount,
        });
    }

    tracing::debug!(
        services = quote.line_items.len(),
        grand_total = %quote.grand_total,
        "Quote aggregated"
    );

    quote
}
