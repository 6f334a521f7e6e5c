//! Error handling for the application

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Rejected order input at the API boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("Negative count for {field}: {value}")]
    NegativeCount { field: String, value: i64 },

    #[error("Count for {field} is too large: {value}")]
    CountTooLarge { field: String, value: i64 },

    #[error("Unknown {kind} '{key}'")]
    UnknownKey { kind: &'static str, key: String },
}

/// Pricing catalog failed validation at startup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Price for {item} must be a non-negative whole amount, got {amount}")]
    InvalidPrice { item: String, amount: String },

    #[error("Volume tier '{tier}' must start above {previous} photos")]
    TierOrder { tier: String, previous: u32 },

    #[error("Volume tier '{tier}' bundles {bundle} photos but starts at {threshold}")]
    BundleSize {
        tier: String,
        bundle: u32,
        threshold: u32,
    },

    #[error("Pricing paths disagree at {threshold} photos ('{tier}'): {via_previous} vs {via_tier}")]
    Discontinuity {
        tier: String,
        threshold: u32,
        via_previous: String,
        via_tier: String,
    },

    #[error("Pricing inversion entering '{tier}': {at_threshold} is below {before_threshold}")]
    Inversion {
        tier: String,
        at_threshold: String,
        before_threshold: String,
    },
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    InvalidOrder(#[from] QuoteError),

    /// Body was not JSON or did not match the request shape
    #[error("{}", .0.body_text())]
    MalformedRequest(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidOrder(e) => {
                tracing::warn!(error = %e, "Rejected order input");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::MalformedRequest(e) => {
                tracing::warn!(error = %e.body_text(), "Malformed request body");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
