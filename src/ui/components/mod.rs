pub mod progress_stepper;
pub mod rate_result;
pub mod shipment_details;
pub mod shipment_table;
pub mod status_badge;
pub mod toast;
