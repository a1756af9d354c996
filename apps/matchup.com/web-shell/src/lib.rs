#![allow(clippy::needless_pass_by_value)]

#[cfg(any(target_arch = "wasm32", test))]
mod interaction_flow;
#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use web_time::Instant;

    use gloo_timers::future::sleep;
    use matchup_client_core::interaction::InteractionError;
    use matchup_client_core::routing::{
        DiscoverOrigin, LandingFlags, cta_destination, new_match_banner_requested,
        secondary_destination,
    };
    use serde::Serialize;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{Document, Element};

    use crate::interaction_flow::{InteractionEffect, plan_interaction};
    use crate::wasm_constants::*;

    mod dom;
    mod lifecycle;
    mod network;
    mod routing;

    use dom::*;
    use lifecycle::*;
    use network::*;
    use routing::*;

    thread_local! {
        static DIAGNOSTICS: RefCell<ShellDiagnostics> = RefCell::new(ShellDiagnostics::default());
        static INTERACTION_CLICK_HANDLERS: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>> = RefCell::new(Vec::new());
        static CTA_CLICK_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static SECONDARY_CLICK_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static PROFILE_FORM_SUBMIT_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
    }

    #[derive(Debug, Clone, Serialize)]
    struct ShellDiagnostics {
        phase: String,
        detail: String,
        boot_started_at_unix_ms: Option<u64>,
        controls_bound: usize,
        interactions_dispatched: u64,
        interaction_failures: u64,
        last_interaction_latency_ms: Option<u64>,
        last_error: Option<String>,
    }

    impl Default for ShellDiagnostics {
        fn default() -> Self {
            Self {
                phase: "idle".to_string(),
                detail: "web shell not started".to_string(),
                boot_started_at_unix_ms: None,
                controls_bound: 0,
                interactions_dispatched: 0,
                interaction_failures: 0,
                last_interaction_latency_ms: None,
                last_error: None,
            }
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        DIAGNOSTICS.with(|state| {
            state.borrow_mut().boot_started_at_unix_ms = Some(epoch_millis_now());
        });
        set_boot_phase("booting", "wiring MatchUp page controls");
        if let Err(error) = boot() {
            set_boot_error(&error);
        }
    }

    /// Serialized diagnostics for the host page and end-to-end probes.
    #[wasm_bindgen]
    pub fn shell_diagnostics_json() -> String {
        DIAGNOSTICS.with(|state| {
            serde_json::to_string(&*state.borrow()).unwrap_or_else(|_| {
                "{\"phase\":\"error\",\"detail\":\"diagnostics serialization failed\"}".to_string()
            })
        })
    }

    fn boot() -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "document is unavailable".to_string())?;

        apply_query_routing(&document);
        let controls_bound = bind_interaction_controls(&document);
        bind_landing_controls(&document);
        bind_profile_form_spinner(&document);

        DIAGNOSTICS.with(|state| {
            state.borrow_mut().controls_bound = controls_bound;
        });
        set_boot_phase("ready", "page controls bound");
        Ok(())
    }

    /// One click, one independent task. Deliberately no in-flight guard:
    /// a second click before the first response resolves dispatches again,
    /// matching the behavior the server already tolerates.
    fn dispatch_interaction(
        action_url: String,
        csrf_token: String,
        card: Option<Element>,
    ) {
        record_interaction_dispatched();
        spawn_local(async move {
            let started_at = Instant::now();
            let outcome = run_interaction(&action_url, &csrf_token, card.as_ref()).await;
            let latency_ms = u64::try_from(started_at.elapsed().as_millis()).unwrap_or(u64::MAX);
            record_interaction_latency(latency_ms);
            if let Err(error) = outcome {
                record_interaction_failure(&error);
                log_interaction_error(&action_url, &error);
            }
        });
    }

    async fn run_interaction(
        action_url: &str,
        csrf_token: &str,
        card: Option<&Element>,
    ) -> Result<(), InteractionError> {
        let response = post_interaction(action_url, csrf_token).await?;
        match plan_interaction(response.status, &response.body)? {
            InteractionEffect::OpenMatches { url } => navigate_to(url),
            InteractionEffect::DismissCard {
                fade_class,
                reload_delay,
            } => {
                if let Some(card) = card {
                    let _ = card.class_list().add_1(fade_class);
                }
                sleep(reload_delay).await;
                reload_current_page();
            }
        }
        Ok(())
    }
}
