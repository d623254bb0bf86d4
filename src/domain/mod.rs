//! Shipment lookup and rate estimation live here.

pub mod config;
pub mod desk;
pub mod entities;
pub mod format;
pub mod rates;
pub mod tracking;

#[allow(unused_imports)]
pub use config::ConfigError;
#[allow(unused_imports)]
pub use desk::{today, ShipmentDesk, ShipmentView};
#[allow(unused_imports)]
pub use entities::{
    RateTierConfig, ServiceTier, ShipmentRecord, Stage, StageDates, TrackingId, STAGE_COUNT,
};
#[allow(unused_imports)]
pub use rates::{estimate, RateBreakdown, RateError, RateTable};
#[allow(unused_imports)]
pub use tracking::{
    build_progress_view, days_in_transit, Catalog, LookupError, StageProgress, StageState,
};
