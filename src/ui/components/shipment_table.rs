use dioxus::prelude::*;

use super::status_badge::StatusBadge;
use crate::domain::{
    format::{format_date, format_weight},
    ShipmentRecord, Stage,
};

#[derive(Clone, PartialEq)]
pub struct ShipmentRow {
    pub tracking_id: String,
    pub origin: String,
    pub destination: String,
    pub weight: String,
    pub service: &'static str,
    pub status: Stage,
    pub eta: String,
}

impl From<&ShipmentRecord> for ShipmentRow {
    fn from(record: &ShipmentRecord) -> Self {
        Self {
            tracking_id: record.tracking_id.clone(),
            origin: record.origin.clone(),
            destination: record.destination.clone(),
            weight: format_weight(record.weight),
            service: record.service.name(),
            status: record.status,
            eta: format_date(Some(record.eta)),
        }
    }
}

const HEADERS: [&str; 7] = [
    "Tracking ID",
    "Origin",
    "Destination",
    "Weight",
    "Service",
    "Status",
    "ETA",
];

#[component]
pub fn ShipmentTable(rows: Vec<ShipmentRow>, on_select: EventHandler<String>) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        table {
            class: "shipment-table",
            thead {
                tr {
                    for header in HEADERS {
                        th { "{header}" }
                    }
                }
            }
            tbody {
                for row in rows {
                    ShipmentRowView { row, on_select: on_select.clone() }
                }
                if is_empty {
                    tr {
                        td { colspan: "7", "No sample shipments available." }
                    }
                }
            }
        }
    }
}

#[component]
fn ShipmentRowView(row: ShipmentRow, on_select: EventHandler<String>) -> Element {
    let select_id = row.tracking_id.clone();
    // data-label lets the stylesheet stack cells on narrow screens.
    rsx! {
        tr {
            onclick: move |_| on_select.call(select_id.clone()),
            td { "data-label": HEADERS[0], strong { "{row.tracking_id}" } }
            td { "data-label": HEADERS[1], "{row.origin}" }
            td { "data-label": HEADERS[2], "{row.destination}" }
            td { "data-label": HEADERS[3], "{row.weight}" }
            td { "data-label": HEADERS[4], "{row.service}" }
            td { "data-label": HEADERS[5], StatusBadge { stage: row.status } }
            td { "data-label": HEADERS[6], "{row.eta}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShipmentDesk;

    #[test]
    fn rows_format_weight_and_eta() {
        let desk = ShipmentDesk::load().expect("seed data");
        let row = ShipmentRow::from(&desk.list_shipments()[1]);
        assert_eq!(row.tracking_id, "SHIP-2025");
        assert_eq!(row.weight, "150 kg");
        assert_eq!(row.service, "Sea");
        assert_eq!(row.status, Stage::InTransit);
        assert_eq!(row.eta, "Mar 15, 2024");
    }
}
