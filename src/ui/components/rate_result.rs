use dioxus::prelude::*;

use crate::{domain::RateBreakdown, ui::theme};

#[component]
pub fn RateResult(quote: RateBreakdown) -> Element {
    let rows = quote.display_rows();
    let last = rows.len() - 1;
    rsx! {
        div {
            class: "{theme::rate_panel(quote.service)}",
            h3 { "{quote.service.name()} Freight Quote" }
            for (idx, (label, amount)) in rows.into_iter().enumerate() {
                div {
                    class: "{theme::rate_row(idx == last)}",
                    span { "{label}" }
                    span { "{amount}" }
                }
            }
            p { class: "delivery-estimate", "{quote.delivery_estimate()}" }
        }
    }
}
