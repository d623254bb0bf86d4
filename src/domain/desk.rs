//! The call surface the pages use: lookup, rate quotes and the sample table.

use rand::{seq::SliceRandom, Rng};
use time::{Date, OffsetDateTime};
use tracing::{debug, error, info};

use super::{
    config::{load_catalog, load_rate_table, ConfigError},
    entities::{ServiceTier, ShipmentRecord},
    format::{format_date, format_days, format_weight, parse_lenient},
    rates::{estimate, RateBreakdown, RateError, RateTable},
    tracking::{build_progress_view, days_in_transit, Catalog, LookupError, StageProgress},
};

/// Read-only catalog and rate table, loaded once and shared by every page.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentDesk {
    catalog: Catalog,
    rates: RateTable,
}

/// Everything the tracking page shows for one shipment.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentView {
    pub record: ShipmentRecord,
    pub progress: Vec<StageProgress>,
    pub status_label: String,
    pub eta_label: String,
    pub days_in_transit: i64,
}

impl ShipmentView {
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Tracking ID", self.record.tracking_id.clone()),
            ("Current Status", self.status_label.clone()),
            ("Origin", self.record.origin.clone()),
            ("Destination", self.record.destination.clone()),
            ("Weight", format_weight(self.record.weight)),
            ("Service Type", self.record.service.name().to_string()),
            ("Estimated Delivery", self.eta_label.clone()),
            ("Days in Transit", format_days(self.days_in_transit)),
        ]
    }
}

impl ShipmentDesk {
    pub fn new(catalog: Catalog, rates: RateTable) -> Self {
        Self { catalog, rates }
    }

    /// Loads the embedded seed data.
    pub fn load() -> Result<Self, ConfigError> {
        let catalog = load_catalog()?;
        let rates = load_rate_table()?;
        info!(
            shipments = catalog.len(),
            tiers = ServiceTier::ALL.len(),
            "loaded shipment catalog and rate table"
        );
        Ok(Self::new(catalog, rates))
    }

    pub fn list_shipments(&self) -> &[ShipmentRecord] {
        self.catalog.records()
    }

    pub fn lookup_shipment(&self, raw: &str) -> Result<ShipmentView, LookupError> {
        self.lookup_shipment_on(raw, today())
    }

    /// Lookup with an explicit "today" for the transit day count.
    pub fn lookup_shipment_on(&self, raw: &str, today: Date) -> Result<ShipmentView, LookupError> {
        match self.catalog.find(raw) {
            Ok(record) => {
                debug!(tracking_id = %record.tracking_id, "shipment found");
                Ok(ShipmentView {
                    progress: build_progress_view(record),
                    status_label: record.status_label(),
                    eta_label: format_date(Some(record.eta)),
                    days_in_transit: days_in_transit(record, today),
                    record: record.clone(),
                })
            }
            Err(err) => {
                if let LookupError::NotFound { query, .. } = &err {
                    info!(%query, "tracking id not in catalog");
                }
                Err(err)
            }
        }
    }

    pub fn estimate_rate(
        &self,
        weight: f64,
        distance: f64,
        service: &str,
    ) -> Result<RateBreakdown, RateError> {
        let Some(tier) = ServiceTier::parse(service) else {
            error!(service, "rate requested for unknown service tier");
            return Err(RateError::UnknownTier(service.to_string()));
        };
        estimate(weight, distance, tier, &self.rates)
    }

    /// Same as [`Self::estimate_rate`] but reads raw form text leniently.
    pub fn estimate_rate_input(
        &self,
        weight: &str,
        distance: &str,
        service: &str,
    ) -> Result<RateBreakdown, RateError> {
        self.estimate_rate(parse_lenient(weight), parse_lenient(distance), service)
    }

    pub fn sample_id(&self) -> &str {
        self.catalog.sample_id()
    }

    pub fn random_sample_id<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.catalog
            .records()
            .choose(rng)
            .map(|record| record.tracking_id.as_str())
    }
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
