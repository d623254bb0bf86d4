use dioxus::prelude::*;

use crate::{
    domain::{
        format::{sanitize_distance, sanitize_weight},
        RateBreakdown, RateError, ServiceTier, ShipmentDesk,
    },
    ui::{components::rate_result::RateResult, theme},
};

#[component]
pub fn RatesPage() -> Element {
    let desk = use_context::<Signal<ShipmentDesk>>();

    let mut weight = use_signal(String::new);
    let mut distance = use_signal(String::new);
    let mut service = use_signal(|| ServiceTier::default().key().to_string());
    let quote = use_signal(|| None::<RateBreakdown>);

    let recalc = move || recalculate(desk, weight, distance, service, quote);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        recalc();
    };

    rsx! {
        section {
            class: "{theme::panel()}",
            h2 { "Shipping Rate Calculator" }
            form {
                class: "rate-form",
                onsubmit: on_submit,
                div {
                    label { class: "{theme::label_class()}", r#for: "weight", "Weight (kg)" }
                    input {
                        id: "weight",
                        class: "{theme::input_class()}",
                        r#type: "text",
                        placeholder: "25.5",
                        value: "{weight}",
                        oninput: move |evt| weight.set(sanitize_weight(&evt.value())),
                        onchange: move |_| recalc(),
                    }
                }
                div {
                    label { class: "{theme::label_class()}", r#for: "distance", "Distance (km)" }
                    input {
                        id: "distance",
                        class: "{theme::input_class()}",
                        r#type: "text",
                        placeholder: "2000",
                        value: "{distance}",
                        oninput: move |evt| distance.set(sanitize_distance(&evt.value())),
                        onchange: move |_| recalc(),
                    }
                }
                div {
                    label { class: "{theme::label_class()}", r#for: "serviceType", "Service" }
                    select {
                        id: "serviceType",
                        class: "{theme::input_class()}",
                        value: "{service}",
                        onchange: move |evt| {
                            service.set(evt.value());
                            recalc();
                        },
                        for tier in ServiceTier::ALL {
                            option { value: tier.key(), "{tier.name()} Freight" }
                        }
                    }
                }
                button { class: "{theme::btn_primary()}", r#type: "submit", "Calculate" }
            }
        }
        if let Some(breakdown) = quote() {
            RateResult { quote: breakdown }
        }
    }
}

/// Re-prices the form. Invalid input hides the result rather than erroring.
fn recalculate(
    desk: Signal<ShipmentDesk>,
    weight: Signal<String>,
    distance: Signal<String>,
    service: Signal<String>,
    mut quote: Signal<Option<RateBreakdown>>,
) {
    let outcome = desk.with(|d| d.estimate_rate_input(&weight(), &distance(), &service()));
    match outcome {
        Ok(breakdown) => quote.set(Some(breakdown)),
        Err(RateError::InvalidInput { .. }) => quote.set(None),
        Err(err @ RateError::UnknownTier(_)) => {
            quote.set(None);
            // The selector only offers known tiers.
            if cfg!(debug_assertions) {
                panic!("{err}");
            }
        }
    }
}
