//! Core pricing calculation functions.
//!
//! Pure functions for pricing math: each rule takes an order snapshot and
//! the catalog and returns a cost breakdown. Nothing is cached, so callers
//! recompute on every read.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;
use strum::IntoEnumIterator;

use super::catalog::PricingCatalog;
use super::models::{
    CanvasSize, ExpressSpeed, PeopleTier, PhotographyOrder, PortraitsOrder, ReelPackage, ReelsOrder,
};

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use studio_quote::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Format a whole-unit amount with a currency prefix and thousands separators.
///
/// ```
/// use rust_decimal_macros::dec;
/// use studio_quote::pricing::format_money;
///
/// assert_eq!(format_money(dec!(1234567), "K"), "K1,234,567");
/// assert_eq!(format_money(dec!(0), "K"), "K0");
/// ```
pub fn format_money(amount: Decimal, prefix: &str) -> String {
    let whole = round_money(amount, 0);
    let sign = if whole.is_sign_negative() && !whole.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = whole.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{prefix}{grouped}")
}

/// Cost breakdown for a photography order.
///
/// Carries the order detail it was priced from so that a summary can be
/// itemized without a second, possibly different, snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotographyCost {
    pub people: PeopleTier,
    pub session_title: String,
    pub session_fee: Decimal,
    pub standard_photos: u32,
    pub standard_cost: Decimal,
    pub express_unit_cost: Decimal,
    pub express_surcharge_cost: Decimal,
    pub total: Decimal,
    /// Display-only volume tier label for the standard photo count
    pub tier_name: String,
    pub express_photos: u64,
    /// Speeds with at least one photo, in delivery-speed order
    pub express_lines: Vec<ExpressLine>,
}

/// Surcharge for the photos ordered at one delivery speed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpressLine {
    pub speed: ExpressSpeed,
    pub count: u32,
    pub surcharge: Decimal,
}

impl PhotographyCost {
    /// Everything except the session fee
    pub fn options_subtotal(&self) -> Decimal {
        self.standard_cost + self.express_unit_cost + self.express_surcharge_cost
    }
}

/// Standard photo cost with volume tiering.
///
/// Below the first threshold every photo costs the per-photo rate. Once a
/// threshold is reached the tier's bundle price covers its bundled photos
/// and every photo beyond them is charged the per-photo rate.
pub fn standard_photos_cost(photos: u32, catalog: &PricingCatalog) -> Decimal {
    match catalog.volume_tier(photos) {
        Some(tier) => tier.cost(photos, catalog.price_per_photo),
        None => Decimal::from(photos) * catalog.price_per_photo,
    }
}

/// Display label of the volume tier `photos` falls in
pub fn tier_name(photos: u32, catalog: &PricingCatalog) -> &str {
    catalog
        .volume_tier(photos)
        .map_or(catalog.base_tier_name.as_str(), |tier| tier.name.as_str())
}

/// Price a photography order.
///
/// The session fee is always charged, even with zero photos. Express photos
/// pay the per-photo rate plus a per-speed surcharge.
pub fn calculate_photography(order: &PhotographyOrder, catalog: &PricingCatalog) -> PhotographyCost {
    let session = catalog.session(order.people);
    let express_photos = order.express_photos.total();

    if order.standard_photos == 0 && express_photos == 0 {
        return PhotographyCost {
            people: order.people,
            session_title: session.title.clone(),
            session_fee: session.fee,
            standard_photos: 0,
            standard_cost: Decimal::ZERO,
            express_unit_cost: Decimal::ZERO,
            express_surcharge_cost: Decimal::ZERO,
            total: session.fee,
            tier_name: catalog.base_tier_name.clone(),
            express_photos: 0,
            express_lines: Vec::new(),
        };
    }

    let standard_cost = standard_photos_cost(order.standard_photos, catalog);
    let express_unit_cost = Decimal::from(express_photos) * catalog.price_per_photo;
    let express_lines: Vec<ExpressLine> = ExpressSpeed::iter()
        .filter(|speed| order.express_photos.get(*speed) > 0)
        .map(|speed| {
            let count = order.express_photos.get(speed);
            ExpressLine {
                speed,
                count,
                surcharge: Decimal::from(count) * catalog.express_surcharge(speed),
            }
        })
        .collect();
    let express_surcharge_cost = express_lines.iter().map(|line| line.surcharge).sum::<Decimal>();

    PhotographyCost {
        people: order.people,
        session_title: session.title.clone(),
        session_fee: session.fee,
        standard_photos: order.standard_photos,
        standard_cost,
        express_unit_cost,
        express_surcharge_cost,
        total: session.fee + standard_cost + express_unit_cost + express_surcharge_cost,
        tier_name: tier_name(order.standard_photos, catalog).to_string(),
        express_photos,
        express_lines,
    }
}

/// How close the standard photo count is to the next volume tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierProgress {
    pub current_tier: String,
    pub next_tier: Option<String>,
    pub photos_to_next: Option<u32>,
    /// 0-100 within the current band
    pub percent: u8,
}

pub fn tier_progress(photos: u32, catalog: &PricingCatalog) -> TierProgress {
    let current_tier = tier_name(photos, catalog).to_string();
    let band_start = catalog.volume_tier(photos).map_or(0, |tier| tier.min_photos);
    let next = catalog
        .volume_tiers
        .iter()
        .find(|tier| tier.min_photos > photos);

    match next {
        Some(next) => {
            let span = u64::from(next.min_photos - band_start);
            let done = u64::from(photos - band_start);
            let percent = u8::try_from(done * 100 / span).unwrap_or(100);
            TierProgress {
                current_tier,
                next_tier: Some(next.name.clone()),
                photos_to_next: Some(next.min_photos - photos),
                percent,
            }
        }
        None => TierProgress {
            current_tier,
            next_tier: None,
            photos_to_next: None,
            percent: 100,
        },
    }
}

/// Cost breakdown for a reels order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReelsCost {
    pub packages: Vec<ReelLine>,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReelLine {
    pub package: ReelPackage,
    pub title: String,
    pub price: Decimal,
}

/// Sum of the flat price of every selected package
pub fn calculate_reels(order: &ReelsOrder, catalog: &PricingCatalog) -> ReelsCost {
    let packages: Vec<ReelLine> = ReelPackage::iter()
        .filter(|package| order.is_selected(*package))
        .map(|package| {
            let info = catalog.reel(package);
            ReelLine {
                package,
                title: info.title.clone(),
                price: info.price,
            }
        })
        .collect();
    let total = packages.iter().map(|line| line.price).sum();

    ReelsCost { packages, total }
}

/// Cost breakdown for a portraits order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortraitsCost {
    pub canvases: Vec<CanvasLine>,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanvasLine {
    pub size: CanvasSize,
    pub title: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

/// Quantity times unit price per canvas size; strictly linear
pub fn calculate_portraits(order: &PortraitsOrder, catalog: &PricingCatalog) -> PortraitsCost {
    let canvases: Vec<CanvasLine> = CanvasSize::iter()
        .filter(|size| order.quantity(*size) > 0)
        .map(|size| {
            let info = catalog.canvas(size);
            let quantity = order.quantity(size);
            CanvasLine {
                size,
                title: info.title.clone(),
                quantity,
                unit_price: info.price,
                amount: Decimal::from(quantity) * info.price,
            }
        })
        .collect();
    let total = canvases.iter().map(|line| line.amount).sum();

    PortraitsCost { canvases, total }
}
