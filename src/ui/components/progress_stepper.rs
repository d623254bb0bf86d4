use dioxus::prelude::*;

use crate::{
    domain::{StageProgress, StageState},
    ui::theme,
};

/// Five-step timeline: completed steps show their date, the active one "Today".
#[component]
pub fn ProgressStepper(steps: Vec<StageProgress>) -> Element {
    rsx! {
        ol {
            class: "stepper",
            for (position, step) in steps.into_iter().enumerate() {
                li {
                    class: "{theme::step_item(&step)}",
                    "data-step": step.stage.token(),
                    div { class: "step-marker", {marker(position, &step.state)} }
                    div { class: "step-label", "{step.label}" }
                    div { class: "step-date", "{step.caption()}" }
                }
            }
        }
    }
}

fn marker(position: usize, state: &StageState) -> String {
    match state {
        StageState::Completed { .. } => "✓".to_string(),
        _ => (position + 1).to_string(),
    }
}
