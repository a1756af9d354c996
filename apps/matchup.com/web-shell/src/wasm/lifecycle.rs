use super::*;

pub(super) fn set_boot_phase(phase: &str, detail: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.phase = phase.to_string();
        state.detail = detail.to_string();
        if phase != "error" {
            state.last_error = None;
        }
    });
}

pub(super) fn set_boot_error(message: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.phase = "error".to_string();
        state.detail = "startup failed".to_string();
        state.last_error = Some(message.to_string());
    });
    web_sys::console::error_1(&JsValue::from_str(&format!("web shell boot failed: {message}")));
}

pub(super) fn record_interaction_dispatched() {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.interactions_dispatched = state.interactions_dispatched.saturating_add(1);
    });
}

pub(super) fn record_interaction_latency(latency_ms: u64) {
    DIAGNOSTICS.with(|state| {
        state.borrow_mut().last_interaction_latency_ms = Some(latency_ms);
    });
}

pub(super) fn record_interaction_failure(error: &InteractionError) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.interaction_failures = state.interaction_failures.saturating_add(1);
        state.last_error = Some(error.to_string());
    });
}

/// Terminal per-interaction error boundary: log and move on. No retry, no
/// user-facing error surface.
pub(super) fn log_interaction_error(action_url: &str, error: &InteractionError) {
    web_sys::console::error_1(&JsValue::from_str(&format!(
        "interaction failed for {action_url}: {error}"
    )));
}

pub(super) fn epoch_millis_now() -> u64 {
    let now = js_sys::Date::now();
    if !now.is_finite() || now.is_sign_negative() {
        return 0;
    }
    now.floor().min(u64::MAX as f64) as u64
}
