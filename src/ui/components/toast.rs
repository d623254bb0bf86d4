use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const TOAST_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message);
    toasts.with_mut(|entries| enqueue(entries, message));
}

/// Appends `message`, dropping the oldest entries beyond the limit.
fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    while entries.len() >= TOAST_LIMIT {
        entries.remove(0);
    }
    entries.push(message);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let views = toasts()
        .into_iter()
        .map(ToastView::from)
        .collect::<Vec<_>>();

    if views.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "toast-stack",
            ul {
                for view in views {
                    ToastCard { view, toasts: toasts.clone() }
                }
            }
        }
    }
}

#[component]
fn ToastCard(view: ToastView, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toasts_for_timer = toasts.clone();
    let toast_id = view.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts_for_timer.clone();
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    rsx! {
        li {
            class: "toast {view.modifier}",
            span { "{view.icon}" }
            p { "{view.text}" }
            button {
                onclick: move |_| {
                    let target = view.id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ToastView {
    id: String,
    text: String,
    modifier: &'static str,
    icon: &'static str,
}

impl From<ToastMessage> for ToastView {
    fn from(message: ToastMessage) -> Self {
        let (modifier, icon) = match message.kind {
            ToastKind::Warning => ("warning", "⚠️"),
            ToastKind::Error => ("error", "⛔"),
        };

        ToastView {
            id: message.id,
            text: message.text,
            modifier,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_keeps_the_latest_five() {
        let mut entries = Vec::new();
        for n in 0..7 {
            enqueue(&mut entries, ToastMessage::new(ToastKind::Warning, format!("m{n}")));
        }
        let texts: Vec<_> = entries.iter().map(|toast| toast.text.as_str()).collect();
        assert_eq!(texts, ["m2", "m3", "m4", "m5", "m6"]);
    }

    #[test]
    fn kinds_map_to_their_style() {
        let warning = ToastView::from(ToastMessage::new(ToastKind::Warning, "w"));
        let error = ToastView::from(ToastMessage::new(ToastKind::Error, "e"));
        assert_eq!(warning.modifier, "warning");
        assert_eq!(error.modifier, "error");
    }

    #[test]
    fn messages_get_unique_ids() {
        let first = ToastMessage::new(ToastKind::Error, "a");
        let second = ToastMessage::new(ToastKind::Error, "a");
        assert_ne!(first.id, second.id);
        assert!(first.id.starts_with("toast-"));
    }
}
