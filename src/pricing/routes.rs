//! Quote API route handlers.
//!
//! Stateless: every request carries the full order snapshot.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    routing::post,
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::aggregator::aggregate;
use super::calculators::{calculate_photography, calculate_portraits, calculate_reels, tier_progress};
use super::catalog::PricingCatalog;
use super::models::OrderState;
use super::requests::{
    ApplyActionRequest, OrderStateRequest, PhotographyOrderRequest, PortraitsOrderRequest,
    ReelsOrderRequest,
};
use super::responses::{
    ApplyActionResponse, MoneyResponse, PhotographyQuoteResponse, PortraitsQuoteResponse,
    QuoteResponse, ReelsQuoteResponse,
};
use super::summary::whatsapp_link;

/// JSON body whose rejection is reported through `AppError`
type JsonBody<T> = std::result::Result<Json<T>, JsonRejection>;

/// Routes mounted under `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog))
        .route("/quote", post(quote))
        .route("/quote/photography", post(quote_photography))
        .route("/quote/reels", post(quote_reels))
        .route("/quote/portraits", post(quote_portraits))
        .route("/orders/apply", post(apply_action))
}

async fn catalog(State(state): State<AppState>) -> Json<PricingCatalog> {
    Json(state.catalog.as_ref().clone())
}

async fn quote_photography(
    State(state): State<AppState>,
    payload: JsonBody<PhotographyOrderRequest>,
) -> Result<Json<PhotographyQuoteResponse>> {
    let Json(request) = payload?;
    let order = request.into_order()?;
    let catalog = state.catalog.as_ref();
    let cost = calculate_photography(&order, catalog);

    Ok(Json(PhotographyQuoteResponse {
        total: MoneyResponse::new(cost.total, catalog),
        options_subtotal: MoneyResponse::new(cost.options_subtotal(), catalog),
        progress: tier_progress(order.standard_photos, catalog),
        cost,
    }))
}

async fn quote_reels(
    State(state): State<AppState>,
    payload: JsonBody<ReelsOrderRequest>,
) -> Result<Json<ReelsQuoteResponse>> {
    let Json(request) = payload?;
    let order = request.into_order()?;
    let cost = calculate_reels(&order, &state.catalog);

    Ok(Json(ReelsQuoteResponse {
        total: MoneyResponse::new(cost.total, &state.catalog),
        cost,
    }))
}

async fn quote_portraits(
    State(state): State<AppState>,
    payload: JsonBody<PortraitsOrderRequest>,
) -> Result<Json<PortraitsQuoteResponse>> {
    let Json(request) = payload?;
    let order = request.into_order()?;
    let cost = calculate_portraits(&order, &state.catalog);

    Ok(Json(PortraitsQuoteResponse {
        total: MoneyResponse::new(cost.total, &state.catalog),
        cost,
    }))
}

async fn quote(
    State(state): State<AppState>,
    payload: JsonBody<OrderStateRequest>,
) -> Result<Json<QuoteResponse>> {
    let Json(request) = payload?;
    let order_state = request.into_state()?;
    Ok(Json(build_quote(&state, &order_state)))
}

async fn apply_action(
    State(state): State<AppState>,
    payload: JsonBody<ApplyActionRequest>,
) -> Result<Json<ApplyActionResponse>> {
    let Json(request) = payload?;
    let current = request.state.into_state()?;
    let action = request.action.into_action()?;
    let next = current.apply(action);
    tracing::debug!(action = ?action, "Order action applied");

    Ok(Json(ApplyActionResponse {
        quote: build_quote(&state, &next),
        state: next,
    }))
}

/// Aggregate, format and link a quote for one snapshot
fn build_quote(state: &AppState, order_state: &OrderState) -> QuoteResponse {
    let catalog = state.catalog.as_ref();
    let breakdown = aggregate(order_state, catalog);
    let summary = state.formatter.format(&breakdown, catalog);
    let message = summary.message();

    QuoteResponse {
        grand_total: MoneyResponse::new(breakdown.grand_total, catalog),
        whatsapp_url: whatsapp_link(&state.whatsapp_number, &message),
        summary: summary.lines,
        message,
        breakdown,
    }
}
