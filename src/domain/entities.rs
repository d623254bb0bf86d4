use serde::{Deserialize, Serialize};
use time::Date;

use super::format::format_status_label;

/// Number of stages in the shipment pipeline.
pub const STAGE_COUNT: usize = 5;

/// Identifier for shipments in the catalog, always trimmed and uppercase.
pub type TrackingId = String;

/// One step of the linear shipment lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Ordered,
    Processed,
    InTransit,
    OutForDelivery,
    Delivered,
}

impl Stage {
    pub const ALL: [Stage; STAGE_COUNT] = [
        Stage::Ordered,
        Stage::Processed,
        Stage::InTransit,
        Stage::OutForDelivery,
        Stage::Delivered,
    ];

    /// Hyphenated token, also used as the badge CSS class.
    pub fn token(&self) -> &'static str {
        match self {
            Stage::Ordered => "ordered",
            Stage::Processed => "processed",
            Stage::InTransit => "in-transit",
            Stage::OutForDelivery => "out-for-delivery",
            Stage::Delivered => "delivered",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Stage::Ordered => 0,
            Stage::Processed => 1,
            Stage::InTransit => 2,
            Stage::OutForDelivery => 3,
            Stage::Delivered => 4,
        }
    }

    pub fn from_token(token: &str) -> Option<Stage> {
        Stage::ALL.into_iter().find(|stage| stage.token() == token)
    }

    pub fn label(&self) -> String {
        format_status_label(self.token())
    }
}

/// Shipping service level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceTier {
    #[default]
    Land,
    Sea,
    Air,
}

impl ServiceTier {
    pub const ALL: [ServiceTier; 3] = [ServiceTier::Land, ServiceTier::Sea, ServiceTier::Air];

    pub fn name(&self) -> &'static str {
        match self {
            ServiceTier::Land => "Land",
            ServiceTier::Sea => "Sea",
            ServiceTier::Air => "Air",
        }
    }

    /// Lowercase key used by the rate table and the service selector.
    pub fn key(&self) -> &'static str {
        match self {
            ServiceTier::Land => "land",
            ServiceTier::Sea => "sea",
            ServiceTier::Air => "air",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ServiceTier::Land => 0,
            ServiceTier::Sea => 1,
            ServiceTier::Air => 2,
        }
    }

    /// Case-insensitive match against the tier names.
    pub fn parse(value: &str) -> Option<ServiceTier> {
        let value = value.trim();
        ServiceTier::ALL
            .into_iter()
            .find(|tier| tier.key().eq_ignore_ascii_case(value))
    }
}

/// Dates each stage was reached, indexed by stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageDates([Option<Date>; STAGE_COUNT]);

impl StageDates {
    pub fn new(dates: [Option<Date>; STAGE_COUNT]) -> Self {
        Self(dates)
    }

    pub fn get(&self, stage: Stage) -> Option<Date> {
        self.0[stage.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stage, Option<Date>)> + '_ {
        Stage::ALL.into_iter().zip(self.0.iter().copied())
    }
}

/// One parcel in the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentRecord {
    pub tracking_id: TrackingId,
    pub origin: String,
    pub destination: String,
    /// Kilograms.
    pub weight: f64,
    pub service: ServiceTier,
    /// Last completed stage.
    pub status: Stage,
    pub eta: Date,
    /// Number of completed stages; `STAGE_COUNT` once delivered.
    pub current_step: usize,
    pub dates: StageDates,
}

impl ShipmentRecord {
    pub fn status_label(&self) -> String {
        self.status.label()
    }
}

/// Pricing rules for one service tier.
#[derive(Clone, Debug, PartialEq)]
pub struct RateTierConfig {
    pub base_rate: f64,
    pub weight_multiplier: f64,
    pub distance_multiplier: f64,
    /// Display string such as `3-7`.
    pub estimated_days: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_tokens_round_trip_in_pipeline_order() {
        for (idx, stage) in Stage::ALL.iter().enumerate() {
            assert_eq!(stage.index(), idx);
            assert_eq!(Stage::from_token(stage.token()), Some(*stage));
        }
        assert_eq!(Stage::from_token("lost"), None);
    }

    #[test]
    fn stage_labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            Stage::ALL.iter().map(|stage| stage.label()).collect();
        assert_eq!(labels.len(), STAGE_COUNT);
        assert_eq!(Stage::OutForDelivery.label(), "Out For Delivery");
    }

    #[test]
    fn tier_parse_ignores_case() {
        assert_eq!(ServiceTier::parse("air"), Some(ServiceTier::Air));
        assert_eq!(ServiceTier::parse(" Sea "), Some(ServiceTier::Sea));
        assert_eq!(ServiceTier::parse("rail"), None);
    }
}
