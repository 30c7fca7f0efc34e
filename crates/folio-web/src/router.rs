//! History API routing: the address bar is the single source of truth for
//! which page is visible and which gallery frame is selected.

use crate::constants::{LINK_SELECTOR, ROUTE_ATTR};
use folio_core::Route;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Route for the current location; unknown paths resolve to home.
pub fn current_route() -> Route {
    let path = web::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    Route::parse_or_home(&path)
}

/// Push `route` onto the history stack unless it is already current.
/// Returns true when the URL changed.
pub fn navigate(route: &Route) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let path = route.to_path();
    if window.location().pathname().ok().as_deref() == Some(path.as_str()) {
        return false;
    }
    match window.history() {
        Ok(h) => {
            if let Err(e) = h.push_state_with_url(&JsValue::NULL, "", Some(&path)) {
                log::warn!("[router] pushState {} failed: {:?}", path, e);
                return false;
            }
            log::info!("[router] -> {}", path);
            true
        }
        Err(e) => {
            log::warn!("[router] no history: {:?}", e);
            false
        }
    }
}

pub fn replace(route: &Route) {
    if let Some(h) = web::window().and_then(|w| w.history().ok()) {
        _ = h.replace_state_with_url(&JsValue::NULL, "", Some(&route.to_path()));
    }
}

pub fn wire_popstate(mut handler: impl FnMut(Route) + 'static) {
    let closure = Closure::wrap(Box::new(move |_ev: web::PopStateEvent| {
        handler(current_route());
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Intercept clicks on `<a data-link href="/...">` so in-app navigation
/// goes through `handler` instead of a page load.
pub fn wire_links(document: &web::Document, mut handler: impl FnMut(Route) + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        let Ok(Some(link)) = target.closest(LINK_SELECTOR) else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        ev.prevent_default();
        handler(Route::parse_or_home(&href));
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Show the `[data-route]` section matching `route` and hide the rest.
/// Nav links get an `active` class when they point at the current page.
pub fn show_page(document: &web::Document, route: &Route) {
    let page = route.page();
    if let Ok(sections) = document.query_selector_all(&format!("[{}]", ROUTE_ATTR)) {
        for i in 0..sections.length() {
            let Some(el) = sections.item(i).and_then(|n| n.dyn_into::<web::Element>().ok())
            else {
                continue;
            };
            let here = el.get_attribute(ROUTE_ATTR).as_deref() == Some(page);
            crate::dom::set_hidden(&el, !here);
        }
    }
    if let Ok(links) = document.query_selector_all(LINK_SELECTOR) {
        for i in 0..links.length() {
            let Some(el) = links.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let target = el
                .get_attribute("href")
                .map(|h| Route::parse_or_home(&h).page());
            let cl = el.class_list();
            if target == Some(page) {
                _ = cl.add_1("active");
            } else {
                _ = cl.remove_1("active");
            }
        }
    }
}
