use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let on_track = matches!(current_route, Route::Track {} | Route::TrackShipment { .. });

    rsx! {
        div { class: "app",
            header { class: "header",
                div {
                    h1 { "{APP_NAME}" }
                    p { "Track parcels and price freight by land, sea or air" }
                }
                nav { class: "nav",
                    NavButton {
                        active: on_track,
                        onclick: move |_| { nav.push(Route::Track {}); },
                        label: "Track",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Rates {}),
                        onclick: move |_| { nav.push(Route::Rates {}); },
                        label: "Rates",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Shipments {}),
                        onclick: move |_| { nav.push(Route::Shipments {}); },
                        label: "Shipments",
                    }
                }
            }
            main {
                {children}
            }
            footer { class: "footer", "{APP_NAME} {version_label()}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
