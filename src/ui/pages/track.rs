use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;

use crate::{
    domain::{LookupError, ShipmentDesk, ShipmentView},
    ui::{
        components::{
            progress_stepper::ProgressStepper,
            shipment_details::ShipmentDetails,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn TrackPage(initial: Option<String>) -> Element {
    let desk = use_context::<Signal<ShipmentDesk>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut query = use_signal(|| initial.clone().unwrap_or_default());
    let mut result = use_signal(|| None::<ShipmentView>);
    let mut search_input = use_signal(|| None::<Rc<MountedData>>);

    // Deep links from the shipments table arrive with an id.
    use_effect(move || {
        if let Some(id) = initial.as_deref() {
            run_lookup(desk, id, query, result, toasts);
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let raw = query();
        run_lookup(desk, &raw, query, result, toasts);
    };

    let on_sample = move |_: MouseEvent| {
        let sample = desk.with(|d| {
            d.random_sample_id(&mut rand::thread_rng())
                .map(str::to_string)
        });
        if let Some(id) = sample {
            query.set(id.clone());
            run_lookup(desk, &id, query, result, toasts);
        }
    };

    let on_keydown = move |evt: KeyboardEvent| {
        match shortcut_for(&evt.key(), evt.modifiers(), &query()) {
            Some(Shortcut::FocusSearch) => {
                evt.prevent_default();
                if let Some(input) = search_input() {
                    focus(input);
                }
            }
            Some(Shortcut::ClearSearch) => {
                query.set(String::new());
                result.set(None);
            }
            None => {}
        }
    };

    let sample_hint = desk.with(|d| d.sample_id().to_string());
    let current = result();

    rsx! {
        div {
            class: "track-page",
            tabindex: "-1",
            onkeydown: on_keydown,
            onmounted: move |evt: MountedEvent| focus(evt.data()),
            section {
                class: "{theme::panel()}",
                h2 { "Track a Shipment" }
                form {
                    class: "search-form",
                    onsubmit: on_submit,
                    input {
                        class: "{theme::input_class()}",
                        r#type: "text",
                        placeholder: "Tracking ID, e.g. {sample_hint}",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value().to_uppercase()),
                        onmounted: move |evt: MountedEvent| search_input.set(Some(evt.data())),
                    }
                    button { class: "{theme::btn_primary()}", r#type: "submit", "Track" }
                    button {
                        class: "{theme::btn_secondary()}",
                        r#type: "button",
                        onclick: on_sample,
                        "Try a sample"
                    }
                }
            }
            if let Some(view) = current {
                section {
                    class: "{theme::panel()}",
                    h2 { "Shipment Progress" }
                    ProgressStepper { steps: view.progress.clone() }
                }
                ShipmentDetails { view: view.clone() }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shortcut {
    FocusSearch,
    ClearSearch,
}

/// `Ctrl + /` jumps to the search box; Escape clears a non-empty query.
fn shortcut_for(key: &Key, modifiers: Modifiers, query: &str) -> Option<Shortcut> {
    match key {
        Key::Character(ch) if ch == "/" && modifiers.contains(Modifiers::CONTROL) => {
            Some(Shortcut::FocusSearch)
        }
        Key::Escape if !query.is_empty() => Some(Shortcut::ClearSearch),
        _ => None,
    }
}

fn focus(element: Rc<MountedData>) {
    spawn(async move {
        if let Err(err) = element.set_focus(true).await {
            warn!(?err, "could not focus element");
        }
    });
}

/// Looks up `raw` and either shows the shipment or raises a toast.
fn run_lookup(
    desk: Signal<ShipmentDesk>,
    raw: &str,
    mut query: Signal<String>,
    mut result: Signal<Option<ShipmentView>>,
    toasts: Signal<Vec<ToastMessage>>,
) {
    match desk.with(|d| d.lookup_shipment(raw)) {
        Ok(view) => {
            query.set(view.record.tracking_id.clone());
            result.set(Some(view));
        }
        Err(err) => {
            let kind = match err {
                LookupError::EmptyQuery => ToastKind::Warning,
                LookupError::NotFound { .. } => ToastKind::Error,
            };
            push_toast(toasts, kind, err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slash() -> Key {
        Key::Character("/".to_string())
    }

    #[test]
    fn ctrl_slash_focuses_search() {
        assert_eq!(
            shortcut_for(&slash(), Modifiers::CONTROL, ""),
            Some(Shortcut::FocusSearch)
        );
        assert_eq!(
            shortcut_for(&slash(), Modifiers::CONTROL | Modifiers::SHIFT, "SHIP-2024"),
            Some(Shortcut::FocusSearch)
        );
    }

    #[test]
    fn plain_slash_is_ignored() {
        assert_eq!(shortcut_for(&slash(), Modifiers::empty(), ""), None);
        assert_eq!(shortcut_for(&slash(), Modifiers::ALT, ""), None);
    }

    #[test]
    fn escape_clears_only_a_non_empty_query() {
        assert_eq!(
            shortcut_for(&Key::Escape, Modifiers::empty(), "SHIP-2024"),
            Some(Shortcut::ClearSearch)
        );
        assert_eq!(shortcut_for(&Key::Escape, Modifiers::empty(), ""), None);
        assert_eq!(shortcut_for(&Key::Enter, Modifiers::CONTROL, "SHIP-2024"), None);
    }
}
