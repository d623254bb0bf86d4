//! Class helpers so pages and components style things the same way.

use crate::domain::{ServiceTier, Stage, StageProgress};

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary() -> &'static str {
    "btn-primary"
}

pub fn btn_secondary() -> &'static str {
    "btn-secondary"
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-button active"
    } else {
        "nav-button"
    }
}

// ============================================
// INPUT / PANEL STYLES
// ============================================

pub fn input_class() -> &'static str {
    "input"
}

pub fn label_class() -> &'static str {
    "label"
}

pub fn panel() -> &'static str {
    "panel"
}

pub fn error_panel() -> &'static str {
    "panel error-panel"
}

// ============================================
// STATUS / TIER STYLES
// ============================================

pub fn status_badge(stage: Stage) -> String {
    format!("status-badge {}", stage.token())
}

pub fn step_item(progress: &StageProgress) -> String {
    format!("step-item {}", progress.class()).trim_end().to_string()
}

pub fn rate_panel(tier: ServiceTier) -> String {
    format!("panel rate-result tier-{}", tier.key())
}

pub fn rate_row(is_total: bool) -> &'static str {
    if is_total {
        "rate-row total"
    } else {
        "rate-row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StageState;

    #[test]
    fn badge_class_uses_status_token() {
        assert_eq!(status_badge(Stage::OutForDelivery), "status-badge out-for-delivery");
    }

    #[test]
    fn pending_steps_have_no_modifier() {
        let progress = StageProgress {
            stage: Stage::Delivered,
            label: "Delivered".to_string(),
            state: StageState::Pending,
        };
        assert_eq!(step_item(&progress), "step-item");
    }
}
