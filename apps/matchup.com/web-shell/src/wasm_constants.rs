pub(crate) const CSRF_FIELD_SELECTOR: &str = "[name=csrfmiddlewaretoken]";
pub(crate) const INTERACTION_CONTROL_SELECTOR: &str = ".like-btn, .pass-btn";
pub(crate) const PROFILE_CARD_SELECTOR: &str = ".profile-card";
pub(crate) const RETURN_TO_DISCOVER_SELECTOR: &str = ".return-to-discover";
pub(crate) const CTA_ID: &str = "cta";
pub(crate) const SECONDARY_SELECTOR: &str = ".secondary";
pub(crate) const MATCHES_PAGE_ID: &str = "matches-page";
pub(crate) const NEW_MATCH_ALERT_ID: &str = "new-match-alert";
pub(crate) const NEW_MATCH_ALERT_VISIBLE_CLASS: &str = "show";
pub(crate) const MULTIPART_FORM_SELECTOR: &str = "form[enctype=\"multipart/form-data\"]";
pub(crate) const SUBMIT_CONTROL_SELECTOR: &str = "button[type=\"submit\"], input[type=\"submit\"]";
pub(crate) const SUBMIT_LOADING_CLASS: &str = "is-loading";
pub(crate) const AUTHENTICATED_FLAG_ATTR: &str = "data-authenticated";
pub(crate) const HAS_PROFILE_FLAG_ATTR: &str = "data-has-profile";
pub(crate) const CSRF_HEADER: &str = "X-CSRFToken";
pub(crate) const AJAX_MARKER_HEADER: &str = "X-Requested-With";
pub(crate) const AJAX_MARKER_VALUE: &str = "XMLHttpRequest";
