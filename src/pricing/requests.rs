//! Request DTOs for quote API endpoints.
//!
//! Counts arrive as signed integers and keys as free strings so that
//! malformed input is rejected here with a descriptive error instead of
//! being priced.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::QuoteError;

use super::models::{
    CanvasSize, CompletedServices, ExpressCounts, ExpressSpeed, OrderAction, OrderState,
    PeopleTier, PhotographyOrder, PortraitsOrder, ReelPackage, ReelsOrder, ServiceId,
};

fn count(field: String, value: i64) -> Result<u32, QuoteError> {
    if value < 0 {
        return Err(QuoteError::NegativeCount { field, value });
    }
    u32::try_from(value).map_err(|_| QuoteError::CountTooLarge { field, value })
}

fn parse_key<T: FromStr>(kind: &'static str, key: &str) -> Result<T, QuoteError> {
    T::from_str(key).map_err(|_| QuoteError::UnknownKey {
        kind,
        key: key.to_string(),
    })
}

/// Photography selections as sent by the booking screens
#[derive(Debug, Default, Deserialize)]
pub struct PhotographyOrderRequest {
    #[serde(default)]
    pub people: Option<String>,
    #[serde(default)]
    pub standard_photos: i64,
    /// Delivery speed label -> count
    #[serde(default)]
    pub express_photos: BTreeMap<String, i64>,
}

impl PhotographyOrderRequest {
    pub fn into_order(self) -> Result<PhotographyOrder, QuoteError> {
        let people = match self.people.as_deref() {
            Some(key) => parse_key::<PeopleTier>("people tier", key)?,
            None => PeopleTier::default(),
        };
        let standard_photos = count("photography.standard_photos".to_string(), self.standard_photos)?;

        let mut express_photos = ExpressCounts::default();
        for (key, value) in self.express_photos {
            let speed = parse_key::<ExpressSpeed>("express speed", &key)?;
            let value = count(format!("photography.express_photos.{key}"), value)?;
            express_photos = express_photos.with(speed, value);
        }

        Ok(PhotographyOrder {
            people,
            standard_photos,
            express_photos,
        })
    }
}

/// Reel package flags keyed by package name
#[derive(Debug, Default, Deserialize)]
pub struct ReelsOrderRequest {
    #[serde(flatten)]
    pub packages: BTreeMap<String, bool>,
}

impl ReelsOrderRequest {
    pub fn into_order(self) -> Result<ReelsOrder, QuoteError> {
        let mut order = ReelsOrder::default();
        for (key, selected) in self.packages {
            let package = parse_key::<ReelPackage>("reel package", &key)?;
            order = order.with(package, selected);
        }
        Ok(order)
    }
}

/// Canvas quantities keyed by size
#[derive(Debug, Default, Deserialize)]
pub struct PortraitsOrderRequest {
    #[serde(flatten)]
    pub quantities: BTreeMap<String, i64>,
}

impl PortraitsOrderRequest {
    pub fn into_order(self) -> Result<PortraitsOrder, QuoteError> {
        let mut order = PortraitsOrder::default();
        for (key, value) in self.quantities {
            let size = parse_key::<CanvasSize>("canvas size", &key)?;
            let quantity = count(format!("portraits.{key}"), value)?;
            order = order.with(size, quantity);
        }
        Ok(order)
    }
}

/// Full order snapshot plus the completed services
#[derive(Debug, Default, Deserialize)]
pub struct OrderStateRequest {
    #[serde(default)]
    pub photography: PhotographyOrderRequest,
    #[serde(default)]
    pub reels: ReelsOrderRequest,
    #[serde(default)]
    pub portraits: PortraitsOrderRequest,
    #[serde(default)]
    pub completed: Vec<String>,
}

impl OrderStateRequest {
    pub fn into_state(self) -> Result<OrderState, QuoteError> {
        let completed = self
            .completed
            .iter()
            .map(|key| parse_key::<ServiceId>("service", key))
            .collect::<Result<CompletedServices, _>>()?;

        Ok(OrderState {
            photography: self.photography.into_order()?,
            reels: self.reels.into_order()?,
            portraits: self.portraits.into_order()?,
            completed,
        })
    }
}

/// One edit to a snapshot, with its target named by a free string
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum OrderActionRequest {
    SelectPeople { people: String },
    IncrementStandard,
    DecrementStandard,
    IncrementExpress { speed: String },
    DecrementExpress { speed: String },
    ToggleReel { package: String },
    IncrementCanvas { size: String },
    DecrementCanvas { size: String },
    CompleteService { service: String },
}

impl OrderActionRequest {
    pub fn into_action(self) -> Result<OrderAction, QuoteError> {
        Ok(match self {
            Self::SelectPeople { people } => OrderAction::SelectPeople {
                people: parse_key("people tier", &people)?,
            },
            Self::IncrementStandard => OrderAction::IncrementStandard,
            Self::DecrementStandard => OrderAction::DecrementStandard,
            Self::IncrementExpress { speed } => OrderAction::IncrementExpress {
                speed: parse_key("express speed", &speed)?,
            },
            Self::DecrementExpress { speed } => OrderAction::DecrementExpress {
                speed: parse_key("express speed", &speed)?,
            },
            Self::ToggleReel { package } => OrderAction::ToggleReel {
                package: parse_key("reel package", &package)?,
            },
            Self::IncrementCanvas { size } => OrderAction::IncrementCanvas {
                size: parse_key("canvas size", &size)?,
            },
            Self::DecrementCanvas { size } => OrderAction::DecrementCanvas {
                size: parse_key("canvas size", &size)?,
            },
            Self::CompleteService { service } => OrderAction::CompleteService {
                service: parse_key("service", &service)?,
            },
        })
    }
}

/// Request to apply one edit to a snapshot
#[derive(Debug, Deserialize)]
pub struct ApplyActionRequest {
    #[serde(default)]
    pub state: OrderStateRequest,
    pub action: OrderActionRequest,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn action_from(value: serde_json::Value) -> Result<OrderAction, QuoteError> {
        serde_json::from_value::<OrderActionRequest>(value)
            .unwrap()
            .into_action()
    }

    fn state_from(value: serde_json::Value) -> Result<OrderState, QuoteError> {
        serde_json::from_value::<OrderStateRequest>(value)
            .unwrap()
            .into_state()
    }

    #[test]
    fn test_empty_request_is_default_state() {
        assert_eq!(state_from(json!({})).unwrap(), OrderState::default());
    }

    #[test]
    fn test_full_request_parses() {
        let state = state_from(json!({
            "photography": {
                "people": "3-7",
                "standard_photos": 12,
                "express_photos": { "24hrs": 1, "6hrs": 2 }
            },
            "reels": { "basic": true, "premium": false },
            "portraits": { "a3": 2 },
            "completed": ["photography", "portraits"]
        }))
        .unwrap();

        assert_eq!(state.photography.people, PeopleTier::Large);
        assert_eq!(state.photography.standard_photos, 12);
        assert_eq!(state.photography.express_photos.get(ExpressSpeed::Hours6), 2);
        assert!(state.reels.basic);
        assert!(!state.reels.premium);
        assert_eq!(state.portraits.a3, 2);
        assert!(state.completed.contains(ServiceId::Portraits));
        assert!(!state.completed.contains(ServiceId::Reels));
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let err = state_from(json!({ "portraits": { "a1": -1 } })).unwrap_err();
        assert_eq!(
            err,
            QuoteError::NegativeCount {
                field: "portraits.a1".to_string(),
                value: -1
            }
        );

        let err = state_from(json!({ "photography": { "standard_photos": -3 } })).unwrap_err();
        assert!(matches!(err, QuoteError::NegativeCount { value: -3, .. }));
    }

    #[test]
    fn test_oversized_count_is_rejected() {
        let err = state_from(json!({ "portraits": { "a0": 5_000_000_000i64 } })).unwrap_err();
        assert!(matches!(err, QuoteError::CountTooLarge { .. }));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = state_from(json!({ "photography": { "people": "8-12" } })).unwrap_err();
        assert!(matches!(err, QuoteError::UnknownKey { kind: "people tier", .. }));

        let err = state_from(json!({ "photography": { "express_photos": { "1hr": 1 } } })).unwrap_err();
        assert!(matches!(err, QuoteError::UnknownKey { kind: "express speed", .. }));

        let err = state_from(json!({ "reels": { "deluxe": true } })).unwrap_err();
        assert!(matches!(err, QuoteError::UnknownKey { kind: "reel package", .. }));

        let err = state_from(json!({ "completed": ["weddings"] })).unwrap_err();
        assert_eq!(err.to_string(), "Unknown service 'weddings'");
    }

    #[test]
    fn test_action_keys_are_parsed() {
        assert_eq!(
            action_from(json!({ "action": "increment_express", "speed": "12hrs" })).unwrap(),
            OrderAction::IncrementExpress {
                speed: ExpressSpeed::Hours12
            }
        );
        assert_eq!(
            action_from(json!({ "action": "select_people", "people": "3-7" })).unwrap(),
            OrderAction::SelectPeople {
                people: PeopleTier::Large
            }
        );
        assert_eq!(
            action_from(json!({ "action": "decrement_standard" })).unwrap(),
            OrderAction::DecrementStandard
        );
    }

    #[test]
    fn test_unknown_action_keys_are_rejected() {
        let err = action_from(json!({ "action": "toggle_reel", "package": "deluxe" })).unwrap_err();
        assert_eq!(err.to_string(), "Unknown reel package 'deluxe'");

        let err = action_from(json!({ "action": "increment_canvas", "size": "a9" })).unwrap_err();
        assert!(matches!(err, QuoteError::UnknownKey { kind: "canvas size", .. }));

        let err = action_from(json!({ "action": "complete_service", "service": "weddings" })).unwrap_err();
        assert_eq!(err.to_string(), "Unknown service 'weddings'");
    }
}
