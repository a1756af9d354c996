use super::*;

/// Attach a click interceptor to every like/pass control on the page.
/// The control is an anchor whose href is the action endpoint, so default
/// navigation is always prevented. The action URL, CSRF token, and nearest
/// profile card are all read at click time, never at bind time.
pub(super) fn bind_interaction_controls(document: &Document) -> usize {
    let Ok(controls) = document.query_selector_all(INTERACTION_CONTROL_SELECTOR) else {
        return 0;
    };

    INTERACTION_CLICK_HANDLERS.with(|slot| {
        let mut handlers = slot.borrow_mut();
        if !handlers.is_empty() {
            return handlers.len();
        }
        for index in 0..controls.length() {
            let Some(node) = controls.get(index) else {
                continue;
            };
            let Ok(control) = node.dyn_into::<Element>() else {
                continue;
            };
            let document = document.clone();
            let bound_control = control.clone();
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
                move |event: web_sys::Event| {
                    event.prevent_default();
                    let Some(action_url) = bound_control.get_attribute("href") else {
                        return;
                    };
                    let csrf_token = csrf_token_from_page(&document).unwrap_or_default();
                    let card = bound_control.closest(PROFILE_CARD_SELECTOR).ok().flatten();
                    dispatch_interaction(action_url, csrf_token, card);
                },
            ));
            let _ = control
                .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
            handlers.push(callback);
        }
        handlers.len()
    })
}

pub(super) fn csrf_token_from_page(document: &Document) -> Option<String> {
    let field = document.query_selector(CSRF_FIELD_SELECTOR).ok().flatten()?;
    let input = field.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    Some(input.value())
}

/// Landing-page routing: the templates render the same CTA markup for every
/// visitor and embed authentication flags on `<body>` instead.
pub(super) fn bind_landing_controls(document: &Document) {
    let flags = landing_flags_from_body(document);

    if let Some(cta) = document.get_element_by_id(CTA_ID) {
        CTA_CLICK_HANDLER.with(|slot| {
            if slot.borrow().is_some() {
                return;
            }
            let destination = cta_destination(flags);
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
                move |event: web_sys::Event| {
                    event.prevent_default();
                    navigate_to(destination);
                },
            ));
            let _ =
                cta.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
            *slot.borrow_mut() = Some(callback);
        });
    }

    if let Ok(Some(secondary)) = document.query_selector(SECONDARY_SELECTOR) {
        SECONDARY_CLICK_HANDLER.with(|slot| {
            if slot.borrow().is_some() {
                return;
            }
            let destination = secondary_destination(flags);
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
                move |event: web_sys::Event| {
                    event.prevent_default();
                    navigate_to(destination);
                },
            ));
            let _ = secondary
                .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
            *slot.borrow_mut() = Some(callback);
        });
    }
}

pub(super) fn landing_flags_from_body(document: &Document) -> LandingFlags {
    let Some(body) = document.body() else {
        return LandingFlags::default();
    };
    LandingFlags {
        authenticated: body.get_attribute(AUTHENTICATED_FLAG_ATTR).as_deref() == Some("true"),
        has_profile: body.get_attribute(HAS_PROFILE_FLAG_ATTR).as_deref() == Some("true"),
    }
}

/// The profile form uploads a photo, so the multipart submit can be slow.
/// Disable its submit control and mark it loading; the native submit still
/// proceeds.
pub(super) fn bind_profile_form_spinner(document: &Document) {
    let Ok(Some(form)) = document.query_selector(MULTIPART_FORM_SELECTOR) else {
        return;
    };

    PROFILE_FORM_SUBMIT_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let bound_form = form.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            mark_form_submitting(&bound_form);
        }));
        let _ = form.add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
}

pub(super) fn mark_form_submitting(form: &Element) {
    let Ok(Some(submit)) = form.query_selector(SUBMIT_CONTROL_SELECTOR) else {
        return;
    };
    let _ = submit.class_list().add_1(SUBMIT_LOADING_CLASS);
    if let Some(button) = submit.dyn_ref::<web_sys::HtmlButtonElement>() {
        button.set_disabled(true);
    } else if let Some(input) = submit.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_disabled(true);
    }
}
