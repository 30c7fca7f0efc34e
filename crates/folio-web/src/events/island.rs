use crate::App;
use crate::input;
use folio_core::TurnKey;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drag, touch, and arrow-key rotation of the island. Input is ignored
/// unless the home page is showing.
pub fn wire_island_input(app: &App, canvas: &web::HtmlCanvasElement) {
    // pointerdown on the canvas starts a drag
    {
        let app = app.clone();
        let canvas_capture = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if !app.on_home() {
                return;
            }
            ev.prevent_default();
            ev.stop_propagation();
            _ = canvas_capture.set_pointer_capture(ev.pointer_id());
            app.orbit.borrow_mut().drag_start(ev.client_x() as f32);
        }) as Box<dyn FnMut(_)>);
        _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    // move/up on the window so a drag survives leaving the canvas
    if let Some(window) = web::window() {
        {
            let app = app.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let mut orbit = app.orbit.borrow_mut();
                if orbit.is_dragging() {
                    ev.prevent_default();
                    orbit.drag_move(ev.client_x() as f32);
                }
            }) as Box<dyn FnMut(_)>);
            _ = window
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                let mut orbit = app.orbit.borrow_mut();
                if orbit.is_dragging() {
                    orbit.drag_end();
                }
            }) as Box<dyn FnMut(_)>);
            for kind in ["pointerup", "pointercancel"] {
                _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if !app.on_home() {
                    return;
                }
                if let Some(key) = TurnKey::from_key(&ev.key()) {
                    ev.prevent_default();
                    ev.stop_propagation();
                    app.orbit.borrow_mut().key_down(key);
                }
            }) as Box<dyn FnMut(_)>);
            _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if let Some(key) = TurnKey::from_key(&ev.key()) {
                    app.orbit.borrow_mut().key_up(key);
                }
            }) as Box<dyn FnMut(_)>);
            _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
    wire_touch(app, canvas);
}

// Touch drags for browsers that do not synthesize pointer events from touches.
fn wire_touch(app: &App, canvas: &web::HtmlCanvasElement) {
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if !app.on_home() {
                return;
            }
            if let Some(x) = input::first_touch_x(&ev) {
                ev.prevent_default();
                ev.stop_propagation();
                app.orbit.borrow_mut().drag_start(x);
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(x) = input::first_touch_x(&ev) {
                let mut orbit = app.orbit.borrow_mut();
                if orbit.is_dragging() {
                    ev.prevent_default();
                    orbit.drag_move(x);
                }
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            app.orbit.borrow_mut().drag_end();
        }) as Box<dyn FnMut(_)>);
        for kind in ["touchend", "touchcancel"] {
            _ = canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}
