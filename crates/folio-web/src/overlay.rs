use crate::constants::{FRAME_CAPTION_ID, FRAME_VIDEO_ID, STAGE_PANEL_ID};
use crate::dom;
use folio_core::mindmap::escape_xml;
use folio_core::stage::panel_for;
use folio_core::wall::Frame;
use folio_core::Stage;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Render the info panel for `stage`; no stage hides the panel.
pub fn show_stage(document: &web::Document, stage: Option<Stage>) {
    let Some(el) = document.get_element_by_id(STAGE_PANEL_ID) else {
        return;
    };
    let Some(panel) = panel_for(stage) else {
        dom::set_hidden(&el, true);
        el.set_inner_html("");
        return;
    };
    let mut html = format!("<h1 class='stage-headline'>{}</h1>", escape_xml(panel.headline));
    if let Some(body) = panel.body {
        html.push_str(&format!("<p class='stage-body'>{}</p>", escape_xml(body)));
    }
    if let Some((label, route)) = panel.cta {
        html.push_str(&format!(
            "<a class='stage-cta' data-link href='{}'>{} →</a>",
            route.to_path(),
            escape_xml(label)
        ));
    }
    el.set_inner_html(&html);
    _ = el.set_attribute("data-stage", &stage.map(|s| s.number()).unwrap_or(0).to_string());
    dom::set_hidden(&el, false);
}

/// Caption for the selected frame, or hidden when nothing is selected.
pub fn show_caption(document: &web::Document, frame: Option<&Frame>) {
    let Some(el) = document.get_element_by_id(FRAME_CAPTION_ID) else {
        return;
    };
    match frame {
        Some(frame) => {
            el.set_inner_html(&frame.caption_html(FRAME_VIDEO_ID));
            dom::set_hidden(&el, false);
        }
        None => dom::set_hidden(&el, true),
    }
}

// One listener on the caption container for the life of the page. The video
// button is rebuilt with every caption and carries its target in `data-href`.
// The click must not reach the wall, where it would count as a miss.
pub fn wire_caption(document: &web::Document) {
    let Some(caption) = document.get_element_by_id(FRAME_CAPTION_ID) else {
        return;
    };
    let selector = format!("#{}", FRAME_VIDEO_ID);
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let button = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(&selector).ok().flatten());
        let Some(url) = button.and_then(|b| b.get_attribute("data-href")) else {
            return;
        };
        ev.stop_propagation();
        ev.prevent_default();
        log::info!("[wall] opening {}", url);
        if let Some(w) = web::window() {
            _ = w.open_with_url_and_target(&url, "_blank");
        }
    }) as Box<dyn FnMut(_)>);
    _ = caption.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
