use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::ShipmentDesk,
    ui::{
        components::shipment_table::{ShipmentRow, ShipmentTable},
        theme,
    },
};

#[component]
pub fn ShipmentsPage() -> Element {
    let desk = use_context::<Signal<ShipmentDesk>>();
    let nav = use_navigator();

    let rows: Vec<ShipmentRow> = desk.with(|d| {
        d.list_shipments()
            .iter()
            .map(ShipmentRow::from)
            .collect()
    });

    rsx! {
        section {
            class: "{theme::panel()}",
            h2 { "Sample Shipments" }
            p { "Select a row to open its tracking timeline." }
            ShipmentTable {
                rows,
                on_select: move |id: String| {
                    nav.push(Route::TrackShipment { id });
                },
            }
        }
    }
}
