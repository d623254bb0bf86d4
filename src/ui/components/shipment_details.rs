use dioxus::prelude::*;

use crate::{domain::ShipmentView, ui::theme};

#[component]
pub fn ShipmentDetails(view: ShipmentView) -> Element {
    let rows = view.detail_rows();
    rsx! {
        div {
            class: "{theme::panel()}",
            h3 { "Shipment Details" }
            div {
                class: "details-grid",
                for (label, value) in rows {
                    div {
                        class: "detail-item",
                        strong { "{label}" }
                        span { "{value}" }
                    }
                }
            }
        }
    }
}
