use super::*;

/// Evaluate the query-driven page tweaks once per load. Both checks are
/// independent and silently skip when the page lacks the element or the
/// URL lacks the parameter.
pub(super) fn apply_query_routing(document: &Document) {
    let search = current_search();
    rewrite_return_to_discover(document, &search);
    reveal_new_match_alert(document, &search);
}

/// A listing page reached from "liked profiles" or "matches" renders its
/// back link pointing at the discover feed; the `origin` parameter retargets
/// it at the listing the visitor actually came from.
pub(super) fn rewrite_return_to_discover(document: &Document, search: &str) {
    let Some(origin) = DiscoverOrigin::from_query(search) else {
        return;
    };
    let Ok(Some(control)) = document.query_selector(RETURN_TO_DISCOVER_SELECTOR) else {
        return;
    };
    let _ = control.set_attribute("href", origin.listing_path());
}

pub(super) fn reveal_new_match_alert(document: &Document, search: &str) {
    if document.get_element_by_id(MATCHES_PAGE_ID).is_none() {
        return;
    }
    if !new_match_banner_requested(search) {
        return;
    }
    let Some(alert) = document.get_element_by_id(NEW_MATCH_ALERT_ID) else {
        return;
    };
    let _ = alert.class_list().add_1(NEW_MATCH_ALERT_VISIBLE_CLASS);
}

pub(super) fn navigate_to(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.location().set_href(url);
}

pub(super) fn reload_current_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.location().reload();
}

pub(super) fn current_search() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    window.location().search().unwrap_or_default()
}
