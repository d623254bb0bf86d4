//! Shipment lookup and progress stepper derivation.

use std::collections::HashSet;

use thiserror::Error;
use time::Date;

use super::{
    config::ConfigError,
    entities::{ShipmentRecord, Stage, TrackingId, STAGE_COUNT},
    format::{format_date, normalize_tracking_id},
};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Please enter a tracking ID")]
    EmptyQuery,
    #[error("Tracking ID \"{query}\" not found. Try \"{suggestion}\"")]
    NotFound {
        query: TrackingId,
        suggestion: TrackingId,
    },
}

/// The fixed set of shipments available for lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    records: Vec<ShipmentRecord>,
}

impl Catalog {
    /// Validates every record and rejects duplicate ids or an empty list.
    pub fn new(records: Vec<ShipmentRecord>) -> Result<Self, ConfigError> {
        if records.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for record in &records {
            validate_record(record)?;
            if !seen.insert(record.tracking_id.as_str()) {
                return Err(ConfigError::DuplicateTrackingId(record.tracking_id.clone()));
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[ShipmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Known-good id offered when a lookup misses.
    pub fn sample_id(&self) -> &str {
        self.records
            .first()
            .map(|record| record.tracking_id.as_str())
            .unwrap_or_default()
    }

    pub fn find(&self, raw: &str) -> Result<&ShipmentRecord, LookupError> {
        let query = normalize_tracking_id(raw);
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        self.records
            .iter()
            .find(|record| record.tracking_id == query)
            .ok_or_else(|| LookupError::NotFound {
                query,
                suggestion: self.sample_id().to_string(),
            })
    }
}

/// Checks that `status`, `current_step` and the stage dates agree.
pub fn validate_record(record: &ShipmentRecord) -> Result<(), ConfigError> {
    let id = &record.tracking_id;

    if id.is_empty() || *id != normalize_tracking_id(id) {
        return Err(ConfigError::UnnormalizedTrackingId(id.clone()));
    }

    if !record.weight.is_finite() || record.weight <= 0.0 {
        return Err(ConfigError::InvalidWeight {
            id: id.clone(),
            weight: record.weight,
        });
    }

    if record.current_step > STAGE_COUNT {
        return Err(ConfigError::StepOutOfRange {
            id: id.clone(),
            current_step: record.current_step,
        });
    }

    // status names the last completed stage; a fresh order still reads "ordered".
    let expected = Stage::ALL[record.current_step.max(1) - 1];
    if record.status != expected {
        return Err(ConfigError::StatusMismatch {
            id: id.clone(),
            status: record.status.token(),
            current_step: record.current_step,
        });
    }

    for (stage, date) in record.dates.iter() {
        let completed = stage.index() < record.current_step;
        if completed != date.is_some() {
            return Err(ConfigError::StageDateMismatch {
                id: id.clone(),
                stage: stage.token(),
            });
        }
    }

    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageState {
    Completed { date: String },
    Active,
    Pending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageProgress {
    pub stage: Stage,
    pub label: String,
    pub state: StageState,
}

impl StageProgress {
    /// Text shown under the step marker.
    pub fn caption(&self) -> String {
        match &self.state {
            StageState::Completed { date } => date.clone(),
            StageState::Active => "Today".to_string(),
            StageState::Pending => "Pending".to_string(),
        }
    }

    /// CSS modifier for the step marker.
    pub fn class(&self) -> &'static str {
        match self.state {
            StageState::Completed { .. } => "completed",
            StageState::Active => "active",
            StageState::Pending => "",
        }
    }
}

/// One entry per pipeline stage, in order.
pub fn build_progress_view(record: &ShipmentRecord) -> Vec<StageProgress> {
    Stage::ALL
        .into_iter()
        .map(|stage| {
            let index = stage.index();
            let state = if index < record.current_step {
                StageState::Completed {
                    date: format_date(record.dates.get(stage)),
                }
            } else if index == record.current_step {
                StageState::Active
            } else {
                StageState::Pending
            };
            StageProgress {
                stage,
                label: stage.label(),
                state,
            }
        })
        .collect()
}

/// Whole days since the shipment entered transit (or was processed), never negative.
pub fn days_in_transit(record: &ShipmentRecord, today: Date) -> i64 {
    record
        .dates
        .get(Stage::InTransit)
        .or_else(|| record.dates.get(Stage::Processed))
        .map(|start| (today - start).whole_days().max(0))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::domain::{config::load_catalog, entities::StageDates, ServiceTier};

    fn catalog() -> Catalog {
        load_catalog().expect("embedded catalog is valid")
    }

    fn record(
        current_step: usize,
        status: Stage,
        dates: [Option<Date>; STAGE_COUNT],
    ) -> ShipmentRecord {
        ShipmentRecord {
            tracking_id: "TEST-1".to_string(),
            origin: "Kiel".to_string(),
            destination: "Oslo".to_string(),
            weight: 10.0,
            service: ServiceTier::Sea,
            status,
            eta: date!(2024 - 03 - 01),
            current_step,
            dates: StageDates::new(dates),
        }
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let catalog = catalog();
        let padded = catalog.find(" ship-2024 ").expect("found");
        let exact = catalog.find("SHIP-2024").expect("found");
        assert_eq!(padded, exact);
        assert_eq!(exact.origin, "New York, NY");
    }

    #[test]
    fn blank_query_is_empty_not_missing() {
        let catalog = catalog();
        assert_eq!(catalog.find(""), Err(LookupError::EmptyQuery));
        assert_eq!(catalog.find("   \t"), Err(LookupError::EmptyQuery));
    }

    #[test]
    fn unknown_id_carries_query_and_suggestion() {
        let catalog = catalog();
        let err = catalog.find("ship-9999").unwrap_err();
        assert_eq!(
            err,
            LookupError::NotFound {
                query: "SHIP-9999".to_string(),
                suggestion: "SHIP-2024".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Tracking ID \"SHIP-9999\" not found. Try \"SHIP-2024\""
        );
    }

    #[test]
    fn lookup_has_no_partial_matches() {
        let catalog = catalog();
        assert!(matches!(
            catalog.find("SHIP-202"),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn out_for_delivery_shipment_has_one_active_stage() {
        let catalog = catalog();
        let view = build_progress_view(catalog.find("SHIP-2024").expect("found"));
        assert_eq!(view.len(), STAGE_COUNT);
        for progress in &view[..4] {
            match &progress.state {
                StageState::Completed { date } => assert!(!date.is_empty()),
                other => panic!("expected completed stage, got {other:?}"),
            }
        }
        assert_eq!(view[0].caption(), "Feb 15, 2024");
        assert_eq!(view[4].state, StageState::Active);
        assert_eq!(view[4].caption(), "Today");
    }

    #[test]
    fn delivered_shipment_has_no_active_stage() {
        let catalog = catalog();
        let view = build_progress_view(catalog.find("SHIP-2027").expect("found"));
        assert!(view
            .iter()
            .all(|progress| matches!(progress.state, StageState::Completed { .. })));
        assert!(!view.iter().any(|progress| progress.state == StageState::Active));
    }

    #[test]
    fn processed_shipment_marks_future_stages_pending() {
        let catalog = catalog();
        let view = build_progress_view(catalog.find("SHIP-2026").expect("found"));
        assert_eq!(view[2].state, StageState::Active);
        assert_eq!(view[3].caption(), "Pending");
        assert_eq!(view[4].class(), "");
    }

    #[test]
    fn transit_days_prefer_in_transit_date() {
        let catalog = catalog();
        let shipment = catalog.find("SHIP-2024").expect("found");
        assert_eq!(days_in_transit(shipment, date!(2024 - 02 - 20)), 3);

        let processed_only = catalog.find("SHIP-2026").expect("found");
        assert_eq!(days_in_transit(processed_only, date!(2024 - 02 - 20)), 1);
    }

    #[test]
    fn transit_days_clamp_future_dates_to_zero() {
        let shipment = record(
            3,
            Stage::InTransit,
            [
                Some(date!(2030 - 01 - 01)),
                Some(date!(2030 - 01 - 02)),
                Some(date!(2030 - 01 - 03)),
                None,
                None,
            ],
        );
        assert_eq!(days_in_transit(&shipment, date!(2024 - 06 - 01)), 0);
    }

    #[test]
    fn transit_days_without_dates_are_zero() {
        let shipment = record(0, Stage::Ordered, [None; STAGE_COUNT]);
        assert_eq!(days_in_transit(&shipment, date!(2024 - 06 - 01)), 0);
    }

    #[test]
    fn validation_rejects_status_step_mismatch() {
        let shipment = record(
            2,
            Stage::InTransit,
            [Some(date!(2024 - 01 - 01)), Some(date!(2024 - 01 - 02)), None, None, None],
        );
        assert!(matches!(
            validate_record(&shipment),
            Err(ConfigError::StatusMismatch { current_step: 2, .. })
        ));
    }

    #[test]
    fn validation_rejects_dates_on_open_stages() {
        let shipment = record(
            1,
            Stage::Ordered,
            [Some(date!(2024 - 01 - 01)), Some(date!(2024 - 01 - 02)), None, None, None],
        );
        assert!(matches!(
            validate_record(&shipment),
            Err(ConfigError::StageDateMismatch { stage: "processed", .. })
        ));
    }

    #[test]
    fn catalog_rejects_duplicates() {
        let shipment = record(0, Stage::Ordered, [None; STAGE_COUNT]);
        let result = Catalog::new(vec![shipment.clone(), shipment]);
        assert!(matches!(result, Err(ConfigError::DuplicateTrackingId(id)) if id == "TEST-1"));
    }

    #[test]
    fn catalog_rejects_empty_list() {
        assert!(matches!(Catalog::new(Vec::new()), Err(ConfigError::EmptyCatalog)));
    }
}
