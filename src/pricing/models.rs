//! Order state models for the booking flows.
//!
//! Every update returns a new snapshot; nothing here mutates in place.
//! The enumerations are closed so that adding a service or a size is a
//! compile-checked change across catalog, orders and quote.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Services offered on the booking site, in display order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ServiceId {
    Photography,
    Reels,
    Portraits,
}

impl ServiceId {
    /// Human-readable service title
    pub fn title(self) -> &'static str {
        match self {
            ServiceId::Photography => "Photography",
            ServiceId::Reels => "Reels",
            ServiceId::Portraits => "Portraits",
        }
    }
}

/// Group size for a photography session
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum PeopleTier {
    /// 1-2 people
    #[default]
    #[serde(rename = "1-2")]
    #[strum(serialize = "1-2")]
    Small,
    /// 3-7 people
    #[serde(rename = "3-7")]
    #[strum(serialize = "3-7")]
    Large,
}

/// Express delivery speed for photos
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum ExpressSpeed {
    #[serde(rename = "24hrs")]
    #[strum(serialize = "24hrs")]
    Hours24,
    #[serde(rename = "12hrs")]
    #[strum(serialize = "12hrs")]
    Hours12,
    #[serde(rename = "6hrs")]
    #[strum(serialize = "6hrs")]
    Hours6,
}

/// Reel package tiers; independent, any subset may be selected
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReelPackage {
    Basic,
    Standard,
    Premium,
}

/// Canvas sizes for printed portraits
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CanvasSize {
    A3,
    A2,
    A1,
    A0,
}

/// Express photo counts per delivery speed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressCounts {
    #[serde(rename = "24hrs", default)]
    pub hours_24: u32,
    #[serde(rename = "12hrs", default)]
    pub hours_12: u32,
    #[serde(rename = "6hrs", default)]
    pub hours_6: u32,
}

impl ExpressCounts {
    pub fn get(&self, speed: ExpressSpeed) -> u32 {
        match speed {
            ExpressSpeed::Hours24 => self.hours_24,
            ExpressSpeed::Hours12 => self.hours_12,
            ExpressSpeed::Hours6 => self.hours_6,
        }
    }

    #[must_use]
    pub fn with(mut self, speed: ExpressSpeed, count: u32) -> Self {
        match speed {
            ExpressSpeed::Hours24 => self.hours_24 = count,
            ExpressSpeed::Hours12 => self.hours_12 = count,
            ExpressSpeed::Hours6 => self.hours_6 = count,
        }
        self
    }

    /// Sum over all delivery speeds; widened so three `u32` counts never overflow
    pub fn total(&self) -> u64 {
        u64::from(self.hours_24) + u64::from(self.hours_12) + u64::from(self.hours_6)
    }
}

/// Photography selections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotographyOrder {
    pub people: PeopleTier,
    pub standard_photos: u32,
    pub express_photos: ExpressCounts,
}

impl PhotographyOrder {
    #[must_use]
    pub fn with_people(self, people: PeopleTier) -> Self {
        Self { people, ..self }
    }

    #[must_use]
    pub fn increment_standard(self) -> Self {
        Self {
            standard_photos: self.standard_photos.saturating_add(1),
            ..self
        }
    }

    /// Clamps at zero
    #[must_use]
    pub fn decrement_standard(self) -> Self {
        Self {
            standard_photos: self.standard_photos.saturating_sub(1),
            ..self
        }
    }

    #[must_use]
    pub fn increment_express(self, speed: ExpressSpeed) -> Self {
        let count = self.express_photos.get(speed).saturating_add(1);
        Self {
            express_photos: self.express_photos.with(speed, count),
            ..self
        }
    }

    /// Clamps at zero
    #[must_use]
    pub fn decrement_express(self, speed: ExpressSpeed) -> Self {
        let count = self.express_photos.get(speed).saturating_sub(1);
        Self {
            express_photos: self.express_photos.with(speed, count),
            ..self
        }
    }

    /// Standard plus express photos
    pub fn total_photos(&self) -> u64 {
        u64::from(self.standard_photos) + self.express_photos.total()
    }
}

/// Reel package selection flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelsOrder {
    #[serde(default)]
    pub basic: bool,
    #[serde(default)]
    pub standard: bool,
    #[serde(default)]
    pub premium: bool,
}

impl ReelsOrder {
    pub fn is_selected(&self, package: ReelPackage) -> bool {
        match package {
            ReelPackage::Basic => self.basic,
            ReelPackage::Standard => self.standard,
            ReelPackage::Premium => self.premium,
        }
    }

    #[must_use]
    pub fn with(mut self, package: ReelPackage, selected: bool) -> Self {
        match package {
            ReelPackage::Basic => self.basic = selected,
            ReelPackage::Standard => self.standard = selected,
            ReelPackage::Premium => self.premium = selected,
        }
        self
    }

    #[must_use]
    pub fn toggle(self, package: ReelPackage) -> Self {
        let selected = !self.is_selected(package);
        self.with(package, selected)
    }
}

/// Canvas quantities per size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortraitsOrder {
    #[serde(default)]
    pub a3: u32,
    #[serde(default)]
    pub a2: u32,
    #[serde(default)]
    pub a1: u32,
    #[serde(default)]
    pub a0: u32,
}

impl PortraitsOrder {
    pub fn quantity(&self, size: CanvasSize) -> u32 {
        match size {
            CanvasSize::A3 => self.a3,
            CanvasSize::A2 => self.a2,
            CanvasSize::A1 => self.a1,
            CanvasSize::A0 => self.a0,
        }
    }

    #[must_use]
    pub fn with(mut self, size: CanvasSize, quantity: u32) -> Self {
        match size {
            CanvasSize::A3 => self.a3 = quantity,
            CanvasSize::A2 => self.a2 = quantity,
            CanvasSize::A1 => self.a1 = quantity,
            CanvasSize::A0 => self.a0 = quantity,
        }
        self
    }

    #[must_use]
    pub fn increment(self, size: CanvasSize) -> Self {
        let quantity = self.quantity(size).saturating_add(1);
        self.with(size, quantity)
    }

    /// Clamps at zero
    #[must_use]
    pub fn decrement(self, size: CanvasSize) -> Self {
        let quantity = self.quantity(size).saturating_sub(1);
        self.with(size, quantity)
    }
}

/// Services the user has walked through and confirmed.
///
/// Append-only for the session: there is no way to un-mark a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedServices(BTreeSet<ServiceId>);

impl CompletedServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, service: ServiceId) -> bool {
        self.0.contains(&service)
    }

    /// Marking an already completed service is a no-op
    #[must_use]
    pub fn mark(mut self, service: ServiceId) -> Self {
        self.0.insert(service);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = ServiceId> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ServiceId> for CompletedServices {
    fn from_iter<I: IntoIterator<Item = ServiceId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Snapshot of everything the visitor has selected so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderState {
    #[serde(default)]
    pub photography: PhotographyOrder,
    #[serde(default)]
    pub reels: ReelsOrder,
    #[serde(default)]
    pub portraits: PortraitsOrder,
    #[serde(default)]
    pub completed: CompletedServices,
}

/// A single user edit on the order state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum OrderAction {
    SelectPeople { people: PeopleTier },
    IncrementStandard,
    DecrementStandard,
    IncrementExpress { speed: ExpressSpeed },
    DecrementExpress { speed: ExpressSpeed },
    ToggleReel { package: ReelPackage },
    IncrementCanvas { size: CanvasSize },
    DecrementCanvas { size: CanvasSize },
    CompleteService { service: ServiceId },
}

impl OrderState {
    /// Apply one edit and return the resulting snapshot
    #[must_use]
    pub fn apply(&self, action: OrderAction) -> Self {
        let mut next = self.clone();
        match action {
            OrderAction::SelectPeople { people } => {
                next.photography = next.photography.with_people(people);
            }
            OrderAction::IncrementStandard => {
                next.photography = next.photography.increment_standard();
            }
            OrderAction::DecrementStandard => {
                next.photography = next.photography.decrement_standard();
            }
            OrderAction::IncrementExpress { speed } => {
                next.photography = next.photography.increment_express(speed);
            }
            OrderAction::DecrementExpress { speed } => {
                next.photography = next.photography.decrement_express(speed);
            }
            OrderAction::ToggleReel { package } => {
                next.reels = next.reels.toggle(package);
            }
            OrderAction::IncrementCanvas { size } => {
                next.portraits = next.portraits.increment(size);
            }
            OrderAction::DecrementCanvas { size } => {
                next.portraits = next.portraits.decrement(size);
            }
            OrderAction::CompleteService { service } => {
                next.completed = next.completed.mark(service);
            }
        }
        next
    }
}
