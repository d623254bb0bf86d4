//! Shipping rate estimation over the per-tier rate table.

use std::collections::HashMap;

use thiserror::Error;

use super::{
    config::ConfigError,
    entities::{RateTierConfig, ServiceTier},
    format::format_currency,
};

#[derive(Clone, Debug, PartialEq, Error)]
pub enum RateError {
    #[error("weight and distance must be positive (got {weight} kg over {distance} km)")]
    InvalidInput { weight: f64, distance: f64 },
    #[error("unknown service tier {0:?}")]
    UnknownTier(String),
}

/// Exactly one pricing config per service tier.
#[derive(Clone, Debug, PartialEq)]
pub struct RateTable {
    tiers: [RateTierConfig; 3],
}

impl RateTable {
    pub fn new(mut configs: HashMap<ServiceTier, RateTierConfig>) -> Result<Self, ConfigError> {
        let mut take = |tier: ServiceTier| -> Result<RateTierConfig, ConfigError> {
            let config = configs
                .remove(&tier)
                .ok_or(ConfigError::MissingTier(tier.name()))?;
            validate_tier(tier, &config)?;
            Ok(config)
        };

        Ok(Self {
            tiers: [
                take(ServiceTier::Land)?,
                take(ServiceTier::Sea)?,
                take(ServiceTier::Air)?,
            ],
        })
    }

    pub fn tier(&self, service: ServiceTier) -> &RateTierConfig {
        &self.tiers[service.index()]
    }
}

fn validate_tier(tier: ServiceTier, config: &RateTierConfig) -> Result<(), ConfigError> {
    let fields = [
        ("base rate", config.base_rate),
        ("weight multiplier", config.weight_multiplier),
        ("distance multiplier", config.distance_multiplier),
    ];
    for (field, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidRate {
                tier: tier.name(),
                field,
                value,
            });
        }
    }
    Ok(())
}

/// Unrounded cost components of one quote.
#[derive(Clone, Debug, PartialEq)]
pub struct RateBreakdown {
    pub service: ServiceTier,
    pub base_rate: f64,
    pub weight_charge: f64,
    pub distance_charge: f64,
    pub total: f64,
    pub estimated_days: String,
}

impl RateBreakdown {
    pub fn delivery_estimate(&self) -> String {
        format!("Estimated delivery: {}", self.estimated_days)
    }

    /// `(label, amount)` rows with amounts rounded to cents.
    pub fn display_rows(&self) -> [(&'static str, String); 4] {
        [
            ("Base Rate", format_currency(self.base_rate)),
            ("Weight Charge", format_currency(self.weight_charge)),
            ("Distance Charge", format_currency(self.distance_charge)),
            ("Total", format_currency(self.total)),
        ]
    }
}

/// Prices `weight` kilograms over `distance` km with the given tier.
pub fn estimate(
    weight: f64,
    distance: f64,
    service: ServiceTier,
    table: &RateTable,
) -> Result<RateBreakdown, RateError> {
    // NaN fails both comparisons, so test for the positive case.
    if !(weight > 0.0 && distance > 0.0) {
        return Err(RateError::InvalidInput { weight, distance });
    }

    let config = table.tier(service);
    let weight_charge = weight * config.weight_multiplier;
    let distance_charge = distance * config.distance_multiplier;

    Ok(RateBreakdown {
        service,
        base_rate: config.base_rate,
        weight_charge,
        distance_charge,
        total: config.base_rate + weight_charge + distance_charge,
        estimated_days: config.estimated_days.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::load_rate_table;

    fn table() -> RateTable {
        load_rate_table().expect("embedded rate table is valid")
    }

    #[test]
    fn air_quote_matches_published_example() {
        let quote = estimate(25.5, 2000.0, ServiceTier::Air, &table()).expect("valid input");
        assert_eq!(quote.base_rate, 200.0);
        assert!((quote.weight_charge - 102.0).abs() < 1e-9);
        assert!((quote.distance_charge - 300.0).abs() < 1e-9);
        assert!((quote.total - 602.0).abs() < 1e-9);
        assert_eq!(quote.estimated_days, "1-2");

        let rows = quote.display_rows();
        assert_eq!(rows[1].1, "$102.00");
        assert_eq!(rows[2].1, "$300.00");
        assert_eq!(rows[3], ("Total", "$602.00".to_string()));
    }

    #[test]
    fn non_positive_inputs_are_invalid() {
        let table = table();
        assert!(matches!(
            estimate(0.0, 100.0, ServiceTier::Land, &table),
            Err(RateError::InvalidInput { .. })
        ));
        assert!(matches!(
            estimate(10.0, 0.0, ServiceTier::Land, &table),
            Err(RateError::InvalidInput { .. })
        ));
        assert!(matches!(
            estimate(-1.0, 10.0, ServiceTier::Sea, &table),
            Err(RateError::InvalidInput { .. })
        ));
        assert!(estimate(f64::NAN, 10.0, ServiceTier::Sea, &table).is_err());
    }

    #[test]
    fn repeated_estimates_are_identical() {
        let table = table();
        let first = estimate(12.3, 456.0, ServiceTier::Sea, &table).expect("valid");
        let second = estimate(12.3, 456.0, ServiceTier::Sea, &table).expect("valid");
        assert_eq!(first.total.to_bits(), second.total.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn land_quote_sums_components() {
        let quote = estimate(10.0, 100.0, ServiceTier::Land, &table()).expect("valid");
        assert_eq!(quote.delivery_estimate(), "Estimated delivery: 3-7");
        assert!((quote.total - (50.0 + 25.0 + 8.0)).abs() < 1e-9);
    }

    #[test]
    fn negative_multipliers_are_rejected() {
        let mut configs = HashMap::new();
        for tier in ServiceTier::ALL {
            configs.insert(
                tier,
                RateTierConfig {
                    base_rate: 1.0,
                    weight_multiplier: 1.0,
                    distance_multiplier: if tier == ServiceTier::Sea { -0.5 } else { 1.0 },
                    estimated_days: "1".to_string(),
                },
            );
        }
        assert!(matches!(
            RateTable::new(configs),
            Err(ConfigError::InvalidRate {
                tier: "Sea",
                field: "distance multiplier",
                ..
            })
        ));
    }
}
