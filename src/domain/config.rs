//! Seed data decoding. The catalog and the rate table ship as embedded JSON
//! and are validated once at start-up.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Error as SerdeError;
use thiserror::Error;
use time::{macros::format_description, Date};

use super::{
    entities::{RateTierConfig, ServiceTier, ShipmentRecord, Stage, StageDates, STAGE_COUNT},
    rates::RateTable,
    tracking::Catalog,
};
use crate::util::assets;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: SerdeError,
    },
    #[error("embedded asset {0} is missing or not UTF-8")]
    MissingAsset(&'static str),
    #[error("invalid date {value:?} for {field}")]
    InvalidDate { field: String, value: String },
    #[error("unknown stage {0:?}")]
    UnknownStage(String),
    #[error("shipment catalog is empty")]
    EmptyCatalog,
    #[error("duplicate tracking id {0}")]
    DuplicateTrackingId(String),
    #[error("tracking id {0:?} must be trimmed, uppercase and non-empty")]
    UnnormalizedTrackingId(String),
    #[error("shipment {id} has invalid weight {weight}")]
    InvalidWeight { id: String, weight: f64 },
    #[error("shipment {id} has current step {current_step}, beyond the last stage")]
    StepOutOfRange { id: String, current_step: usize },
    #[error("shipment {id} has status {status} which disagrees with current step {current_step}")]
    StatusMismatch {
        id: String,
        status: &'static str,
        current_step: usize,
    },
    #[error("shipment {id} has a date for stage {stage} that does not match its progress")]
    StageDateMismatch { id: String, stage: &'static str },
    #[error("unknown service tier {0:?}")]
    UnknownTier(String),
    #[error("service tier {0} is configured twice")]
    DuplicateTier(&'static str),
    #[error("service tier {0} has no rate configuration")]
    MissingTier(&'static str),
    #[error("service tier {tier} has invalid {field} {value}")]
    InvalidRate {
        tier: &'static str,
        field: &'static str,
        value: f64,
    },
}

#[derive(Deserialize)]
struct RawShipment {
    tracking_id: String,
    origin: String,
    destination: String,
    weight: f64,
    service: ServiceTier,
    status: Stage,
    eta: String,
    current_step: usize,
    #[serde(default)]
    dates: HashMap<String, String>,
}

#[derive(Deserialize)]
struct RawTier {
    base_rate: f64,
    weight_multiplier: f64,
    distance_multiplier: f64,
    estimated_days: String,
}

/// Decodes and validates the embedded shipment catalog.
pub fn load_catalog() -> Result<Catalog, ConfigError> {
    let json =
        assets::shipments_json().ok_or(ConfigError::MissingAsset(assets::SHIPMENTS_PATH))?;
    parse_catalog(&json)
}

/// Decodes and validates the embedded rate table.
pub fn load_rate_table() -> Result<RateTable, ConfigError> {
    let json = assets::rates_json().ok_or(ConfigError::MissingAsset(assets::RATES_PATH))?;
    parse_rate_table(&json)
}

pub fn parse_catalog(json: &str) -> Result<Catalog, ConfigError> {
    let raw: Vec<RawShipment> = serde_json::from_str(json).map_err(|source| ConfigError::Decode {
        what: "shipment catalog",
        source,
    })?;

    let records = raw
        .into_iter()
        .map(into_record)
        .collect::<Result<Vec<_>, _>>()?;

    Catalog::new(records)
}

pub fn parse_rate_table(json: &str) -> Result<RateTable, ConfigError> {
    let raw: HashMap<String, RawTier> =
        serde_json::from_str(json).map_err(|source| ConfigError::Decode {
            what: "rate table",
            source,
        })?;

    let mut tiers = HashMap::with_capacity(raw.len());
    for (key, tier) in raw {
        let service = ServiceTier::parse(&key).ok_or_else(|| ConfigError::UnknownTier(key))?;
        let config = RateTierConfig {
            base_rate: tier.base_rate,
            weight_multiplier: tier.weight_multiplier,
            distance_multiplier: tier.distance_multiplier,
            estimated_days: tier.estimated_days,
        };
        if tiers.insert(service, config).is_some() {
            return Err(ConfigError::DuplicateTier(service.name()));
        }
    }

    RateTable::new(tiers)
}

fn into_record(raw: RawShipment) -> Result<ShipmentRecord, ConfigError> {
    let tracking_id = raw.tracking_id;
    let eta = parse_date(&raw.eta).ok_or_else(|| ConfigError::InvalidDate {
        field: format!("{tracking_id}.eta"),
        value: raw.eta.clone(),
    })?;

    let mut dates = [None; STAGE_COUNT];
    for (token, value) in &raw.dates {
        let stage =
            Stage::from_token(token).ok_or_else(|| ConfigError::UnknownStage(token.clone()))?;
        if value.trim().is_empty() {
            continue;
        }
        let date = parse_date(value).ok_or_else(|| ConfigError::InvalidDate {
            field: format!("{tracking_id}.dates.{token}"),
            value: value.clone(),
        })?;
        dates[stage.index()] = Some(date);
    }

    Ok(ShipmentRecord {
        tracking_id,
        origin: raw.origin,
        destination: raw.destination,
        weight: raw.weight,
        service: raw.service,
        status: raw.status,
        eta,
        current_step: raw.current_step,
        dates: StageDates::new(dates),
    })
}

fn parse_date(value: &str) -> Option<Date> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).ok()
}
