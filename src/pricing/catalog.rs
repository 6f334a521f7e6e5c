//! Static pricing reference data.
//!
//! Built once at startup, validated, then shared read-only. Amounts are
//! whole units of the studio's currency.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::CatalogError;

use super::models::{CanvasSize, ExpressSpeed, PeopleTier, ReelPackage};

/// Session fee and label for a group size
#[derive(Debug, Clone, Serialize)]
pub struct SessionType {
    pub title: String,
    pub fee: Decimal,
}

/// Session fees keyed by people tier
#[derive(Debug, Clone, Serialize)]
pub struct SessionTypes {
    #[serde(rename = "1-2")]
    pub small: SessionType,
    #[serde(rename = "3-7")]
    pub large: SessionType,
}

/// A photo-count threshold at which a bundle price replaces linear pricing.
///
/// From `min_photos` onwards the first `bundle_photos` are charged
/// `bundle_price` and every photo beyond them the plain per-photo rate.
#[derive(Debug, Clone, Serialize)]
pub struct VolumeTier {
    pub name: String,
    pub min_photos: u32,
    pub bundle_photos: u32,
    pub bundle_price: Decimal,
}

impl VolumeTier {
    /// Standard photo cost under this tier's formula
    pub fn cost(&self, photos: u32, price_per_photo: Decimal) -> Decimal {
        let extra = photos.saturating_sub(self.bundle_photos);
        self.bundle_price + Decimal::from(extra) * price_per_photo
    }
}

/// Per-photo surcharges for express delivery
#[derive(Debug, Clone, Serialize)]
pub struct ExpressSurcharges {
    #[serde(rename = "24hrs")]
    pub hours_24: Decimal,
    #[serde(rename = "12hrs")]
    pub hours_12: Decimal,
    #[serde(rename = "6hrs")]
    pub hours_6: Decimal,
}

/// A flat-price reel package
#[derive(Debug, Clone, Serialize)]
pub struct ReelPackageInfo {
    pub title: String,
    pub details: String,
    pub features: Vec<String>,
    pub best_for: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReelPackages {
    pub basic: ReelPackageInfo,
    pub standard: ReelPackageInfo,
    pub premium: ReelPackageInfo,
}

/// A printed canvas size
#[derive(Debug, Clone, Serialize)]
pub struct CanvasInfo {
    pub title: String,
    pub dimensions: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CanvasPrices {
    pub a3: CanvasInfo,
    pub a2: CanvasInfo,
    pub a1: CanvasInfo,
    pub a0: CanvasInfo,
}

/// Every price the quote engine reads
#[derive(Debug, Clone, Serialize)]
pub struct PricingCatalog {
    pub currency_prefix: String,
    pub sessions: SessionTypes,
    pub price_per_photo: Decimal,
    /// Label used below the first volume tier
    pub base_tier_name: String,
    /// Ascending by `min_photos`
    pub volume_tiers: Vec<VolumeTier>,
    pub express_surcharges: ExpressSurcharges,
    pub reels: ReelPackages,
    pub canvases: CanvasPrices,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl PricingCatalog {
    /// The studio's published price list
    pub fn studio() -> Self {
        Self {
            currency_prefix: "K".to_string(),
            sessions: SessionTypes {
                small: SessionType {
                    title: "1-2 People".to_string(),
                    fee: dec!(2000),
                },
                large: SessionType {
                    title: "3-7 People".to_string(),
                    fee: dec!(3000),
                },
            },
            price_per_photo: dec!(2000),
            base_tier_name: "Standard".to_string(),
            volume_tiers: vec![
                VolumeTier {
                    name: "Session".to_string(),
                    min_photos: 10,
                    bundle_photos: 10,
                    bundle_price: dec!(18000),
                },
                VolumeTier {
                    name: "Session Plus".to_string(),
                    min_photos: 25,
                    bundle_photos: 10,
                    bundle_price: dec!(18000),
                },
            ],
            express_surcharges: ExpressSurcharges {
                hours_24: dec!(3000),
                hours_12: dec!(4500),
                hours_6: dec!(6000),
            },
            reels: ReelPackages {
                basic: ReelPackageInfo {
                    title: "Basic Reel".to_string(),
                    details: "10-15s, 48hr delivery".to_string(),
                    features: strings(&["Simple editing", "Basic color grading", "1 revision"]),
                    best_for: "Quick content, outfit showcases.".to_string(),
                    price: dec!(15000),
                },
                standard: ReelPackageInfo {
                    title: "Standard Reel".to_string(),
                    details: "15-30s, 24hr delivery".to_string(),
                    features: strings(&[
                        "Cinematic transitions",
                        "Advanced color grading",
                        "2 revisions",
                    ]),
                    best_for: "Brand content, storytelling.".to_string(),
                    price: dec!(25000),
                },
                premium: ReelPackageInfo {
                    title: "Premium Cinematic Reel".to_string(),
                    details: "30-60s, 12hr delivery".to_string(),
                    features: strings(&[
                        "Full cinematic edit",
                        "Motion graphics/text",
                        "3 revisions",
                    ]),
                    best_for: "Commercials, ads, artist content.".to_string(),
                    price: dec!(50000),
                },
            },
            canvases: CanvasPrices {
                a3: CanvasInfo {
                    title: "A3".to_string(),
                    dimensions: "30cm x 45cm".to_string(),
                    price: dec!(20000),
                },
                a2: CanvasInfo {
                    title: "A2".to_string(),
                    dimensions: "45cm x 60cm".to_string(),
                    price: dec!(25000),
                },
                a1: CanvasInfo {
                    title: "A1".to_string(),
                    dimensions: "60cm x 90cm".to_string(),
                    price: dec!(35000),
                },
                a0: CanvasInfo {
                    title: "A0".to_string(),
                    dimensions: "90cm x 120cm".to_string(),
                    price: dec!(65000),
                },
            },
        }
    }

    pub fn session(&self, people: PeopleTier) -> &SessionType {
        match people {
            PeopleTier::Small => &self.sessions.small,
            PeopleTier::Large => &self.sessions.large,
        }
    }

    pub fn express_surcharge(&self, speed: ExpressSpeed) -> Decimal {
        match speed {
            ExpressSpeed::Hours24 => self.express_surcharges.hours_24,
            ExpressSpeed::Hours12 => self.express_surcharges.hours_12,
            ExpressSpeed::Hours6 => self.express_surcharges.hours_6,
        }
    }

    pub fn reel(&self, package: ReelPackage) -> &ReelPackageInfo {
        match package {
            ReelPackage::Basic => &self.reels.basic,
            ReelPackage::Standard => &self.reels.standard,
            ReelPackage::Premium => &self.reels.premium,
        }
    }

    pub fn canvas(&self, size: CanvasSize) -> &CanvasInfo {
        match size {
            CanvasSize::A3 => &self.canvases.a3,
            CanvasSize::A2 => &self.canvases.a2,
            CanvasSize::A1 => &self.canvases.a1,
            CanvasSize::A0 => &self.canvases.a0,
        }
    }

    /// Highest volume tier whose threshold `photos` has reached
    pub fn volume_tier(&self, photos: u32) -> Option<&VolumeTier> {
        self.volume_tiers
            .iter()
            .rev()
            .find(|tier| photos >= tier.min_photos)
    }

    /// Check prices and tier structure before serving any quote.
    ///
    /// At every threshold the cost under the previous formula must equal
    /// the cost under the new tier's formula, so the tier boundary never
    /// changes the price at the same photo count.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut prices: Vec<(String, Decimal)> = vec![
            ("session 1-2".to_string(), self.sessions.small.fee),
            ("session 3-7".to_string(), self.sessions.large.fee),
            ("price per photo".to_string(), self.price_per_photo),
            ("express 24hrs".to_string(), self.express_surcharges.hours_24),
            ("express 12hrs".to_string(), self.express_surcharges.hours_12),
            ("express 6hrs".to_string(), self.express_surcharges.hours_6),
            ("basic reel".to_string(), self.reels.basic.price),
            ("standard reel".to_string(), self.reels.standard.price),
            ("premium reel".to_string(), self.reels.premium.price),
            ("canvas a3".to_string(), self.canvases.a3.price),
            ("canvas a2".to_string(), self.canvases.a2.price),
            ("canvas a1".to_string(), self.canvases.a1.price),
            ("canvas a0".to_string(), self.canvases.a0.price),
        ];
        prices.extend(
            self.volume_tiers
                .iter()
                .map(|tier| (format!("{} bundle", tier.name), tier.bundle_price)),
        );
        for (item, amount) in prices {
            if amount.is_sign_negative() || !amount.fract().is_zero() {
                return Err(CatalogError::InvalidPrice {
                    item,
                    amount: amount.to_string(),
                });
            }
        }

        let mut previous: Option<&VolumeTier> = None;
        for tier in &self.volume_tiers {
            if tier.bundle_photos == 0 || tier.bundle_photos > tier.min_photos {
                return Err(CatalogError::BundleSize {
                    tier: tier.name.clone(),
                    bundle: tier.bundle_photos,
                    threshold: tier.min_photos,
                });
            }

            let threshold = tier.min_photos;
            let via_tier = tier.cost(threshold, self.price_per_photo);

            match previous {
                Some(prev) => {
                    if threshold <= prev.min_photos {
                        return Err(CatalogError::TierOrder {
                            tier: tier.name.clone(),
                            previous: prev.min_photos,
                        });
                    }
                    let via_previous = prev.cost(threshold, self.price_per_photo);
                    if via_previous != via_tier {
                        return Err(CatalogError::Discontinuity {
                            tier: tier.name.clone(),
                            threshold,
                            via_previous: via_previous.to_string(),
                            via_tier: via_tier.to_string(),
                        });
                    }
                }
                None => {
                    if threshold == 0 {
                        return Err(CatalogError::TierOrder {
                            tier: tier.name.clone(),
                            previous: 0,
                        });
                    }
                    let before = Decimal::from(threshold - 1) * self.price_per_photo;
                    if via_tier < before {
                        return Err(CatalogError::Inversion {
                            tier: tier.name.clone(),
                            at_threshold: via_tier.to_string(),
                            before_threshold: before.to_string(),
                        });
                    }
                }
            }

            previous = Some(tier);
        }

        Ok(())
    }
}

impl Default for PricingCatalog {
    fn default() -> Self {
        Self::studio()
    }
}
