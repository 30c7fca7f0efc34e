//! Tools page: fetch the markdown outline once per visit, draw it as SVG,
//! and offer copy / export actions.

use crate::constants::{MINDMAP_COPY_ID, MINDMAP_EXPORT_ID, MINDMAP_VIEW_ID};
use crate::dom;
use folio_core::content::MIND_MAP_URL;
use folio_core::mindmap::ExportFile;
use folio_core::{FolioError, MindMapViewer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The live viewer while the tools page is mounted.
pub type ViewerSlot = Rc<RefCell<Option<MindMapViewer>>>;

/// Create the viewer and start loading. A no-op if already mounted.
pub fn mount(slot: &ViewerSlot) {
    if slot.borrow().is_some() {
        return;
    }
    let mut viewer = MindMapViewer::new(MIND_MAP_URL);
    viewer.begin_load();
    *slot.borrow_mut() = Some(viewer);
    show_status("Loading…");

    let slot = slot.clone();
    spawn_local(async move {
        let fetched = fetch_text(MIND_MAP_URL).await;
        let mut guard = slot.borrow_mut();
        // unmounted while the request was in flight
        let Some(viewer) = guard.as_mut() else {
            return;
        };
        if viewer.finish_load(fetched) {
            match viewer.svg() {
                Ok(svg) => show_svg(&svg),
                Err(e) => show_status(&format!("Something Wrong: {}", e)),
            }
        } else if let Some(msg) = viewer.error_message() {
            show_status(&msg);
        } else {
            show_status("");
        }
    });
}

pub fn unmount(slot: &ViewerSlot) {
    if slot.borrow_mut().take().is_some() {
        log::debug!("[mindmap] unmounted");
        if let Some(el) = dom::window_document().and_then(|d| d.get_element_by_id(MINDMAP_VIEW_ID))
        {
            el.set_inner_html("");
        }
    }
}

pub fn wire_actions(document: &web::Document, slot: &ViewerSlot) {
    let copy_slot = slot.clone();
    dom::add_click_listener(document, MINDMAP_COPY_ID, move |_ev| {
        let text = copy_slot
            .borrow()
            .as_ref()
            .ok_or(FolioError::NotReady)
            .and_then(|v| v.clipboard_text().map(str::to_owned));
        match text {
            Ok(text) => spawn_local(async move {
                match write_clipboard(&text).await {
                    Ok(()) => dom::alert("Markdown copied to clipboard"),
                    Err(e) => {
                        log::error!("[mindmap] copy failed: {:?}", e);
                        dom::alert(&format!("Copy failed: {}", e));
                    }
                }
            }),
            Err(e) => dom::alert(&format!("Copy failed: {}", e)),
        }
    });

    let export_slot = slot.clone();
    dom::add_click_listener(document, MINDMAP_EXPORT_ID, move |_ev| {
        let file = export_slot
            .borrow()
            .as_ref()
            .ok_or(FolioError::NotReady)
            .and_then(MindMapViewer::export_file);
        match file.and_then(|f| download(&f)) {
            Ok(()) => dom::alert("Mind map exported"),
            Err(e) => {
                log::error!("[mindmap] export failed: {}", e);
                dom::alert(&format!("Export failed: {}", e));
            }
        }
    });
}

fn show_status(message: &str) {
    if let Some(el) = dom::window_document().and_then(|d| d.get_element_by_id(MINDMAP_VIEW_ID)) {
        el.set_text_content(Some(message));
    }
}

fn show_svg(svg: &str) {
    if let Some(el) = dom::window_document().and_then(|d| d.get_element_by_id(MINDMAP_VIEW_ID)) {
        el.set_inner_html(svg);
    }
}

async fn fetch_text(url: &str) -> Result<String, FolioError> {
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::Cors);
    let request = web::Request::new_with_str_and_init(url, &opts).map_err(js_network)?;
    let window = web::window().ok_or_else(|| FolioError::Network("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_network)?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|_| FolioError::Network("not a Response".into()))?;
    if !resp.ok() {
        return Err(FolioError::Http(resp.status()));
    }
    let text = JsFuture::from(resp.text().map_err(js_network)?)
        .await
        .map_err(js_network)?;
    text.as_string()
        .ok_or_else(|| FolioError::Network("response body is not text".into()))
}

// navigator.clipboard.writeText through Reflect, so no unstable web-sys APIs
async fn write_clipboard(text: &str) -> Result<(), FolioError> {
    let window = web::window().ok_or_else(|| FolioError::Js("no window".into()))?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map_err(js_error)?;
    if clipboard.is_undefined() {
        return Err(FolioError::Js("clipboard unavailable".into()));
    }
    let write: js_sys::Function = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let promise: js_sys::Promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    JsFuture::from(promise).await.map_err(js_error)?;
    Ok(())
}

fn download(file: &ExportFile) -> Result<(), FolioError> {
    let document = dom::window_document().ok_or_else(|| FolioError::Js("no document".into()))?;
    let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
    let bag = web::BlobPropertyBag::new();
    bag.set_type(file.mime);
    let blob = web::Blob::new_with_str_sequence_and_options(&parts, &bag).map_err(js_error)?;
    let url = web::Url::create_object_url_with_blob(&blob).map_err(js_error)?;
    let anchor: web::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    anchor.set_href(&url);
    anchor.set_download(file.name);
    anchor.click();
    _ = web::Url::revoke_object_url(&url);
    Ok(())
}

fn js_network(e: JsValue) -> FolioError {
    FolioError::Network(js_message(&e))
}

fn js_error(e: impl Into<JsValue>) -> FolioError {
    FolioError::Js(js_message(&e.into()))
}

fn js_message(e: &JsValue) -> String {
    e.as_string()
        .or_else(|| {
            js_sys::Reflect::get(e, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", e))
}
