use dioxus::prelude::*;

use crate::{domain::Stage, ui::theme};

#[component]
pub fn StatusBadge(stage: Stage) -> Element {
    rsx! {
        span {
            class: "{theme::status_badge(stage)}",
            "{stage.label()}"
        }
    }
}
