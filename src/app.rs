use dioxus::prelude::*;
use tracing::error;

use crate::{
    domain::ShipmentDesk,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{RatesPage, ShipmentsPage, TrackPage},
        shell::Shell,
        theme,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/track")]
    Track {},
    #[route("/track/:id")]
    TrackShipment { id: String },
    #[route("/rates")]
    Rates {},
    #[route("/shipments")]
    Shipments {},
}

#[component]
pub fn App() -> Element {
    // Seed data is validated once; a bad catalog or rate table stops here.
    let loaded = use_hook(|| {
        ShipmentDesk::load().map_err(|err| {
            error!(%err, "failed to load seed data");
            err.to_string()
        })
    });

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Style { "{assets::main_css()}" }
        match loaded {
            Ok(desk) => rsx! { Workspace { desk } },
            Err(message) => rsx! { ConfigFailure { message } },
        }
        Toast {}
    }
}

#[component]
fn Workspace(desk: ShipmentDesk) -> Element {
    let desk = use_signal(|| desk);
    use_context_provider(|| desk);
    rsx! { Router::<Route> {} }
}

#[component]
fn ConfigFailure(message: String) -> Element {
    rsx! {
        main {
            div {
                class: "{theme::error_panel()}",
                h2 { "Shipment data unavailable" }
                p { "{message}" }
            }
        }
    }
}

#[component]
pub fn Track() -> Element {
    rsx! { Shell { TrackPage { initial: None } } }
}

#[component]
pub fn TrackShipment(id: String) -> Element {
    rsx! { Shell { TrackPage { initial: Some(id) } } }
}

#[component]
pub fn Rates() -> Element {
    rsx! { Shell { RatesPage {} } }
}

#[component]
pub fn Shipments() -> Element {
    rsx! { Shell { ShipmentsPage {} } }
}
