pub mod rates;
pub mod shipments;
pub mod track;

pub use rates::RatesPage;
pub use shipments::ShipmentsPage;
pub use track::TrackPage;
