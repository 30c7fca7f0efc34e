use crate::camera;
use crate::dom;
use crate::input;
use crate::App;
use folio_core::constants::WALL_FOV_Y_DEG;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Pointer travel (CSS px) past which a press counts as a drag, not a click.
const CLICK_SLOP_PX: f32 = 6.0;

fn pick_at(app: &App, canvas: &web::HtmlCanvasElement, ev: &web::PointerEvent) -> Option<usize> {
    let wall = app.wall.borrow();
    let cam = camera::for_canvas(canvas, wall.camera(), WALL_FOV_Y_DEG);
    let px = input::pointer_canvas_px(ev, canvas);
    let (ro, rd) = camera::screen_to_world_ray(canvas, &cam, px);
    wall.pick(ro, rd)
}

/// Hover highlighting, click selection, and breakpoint tracking for the
/// frame wall.
pub fn wire_gallery_input(app: &App, canvas: &web::HtmlCanvasElement) {
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));

    {
        let app = app.clone();
        let canvas_move = canvas.clone();
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            {
                let mut p = pointer.borrow_mut();
                let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
                if p.down {
                    p.moved += (x - p.x).abs() + (y - p.y).abs();
                }
                p.x = x;
                p.y = y;
            }
            if !app.on_gallery() {
                return;
            }
            let hit = pick_at(&app, &canvas_move, &ev);
            if app.wall.borrow_mut().set_hovered(hit) {
                dom::set_cursor(&canvas_move, hit.is_some());
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let app = app.clone();
        let canvas_leave = canvas.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            if app.wall.borrow_mut().set_hovered(None) {
                dom::set_cursor(&canvas_leave, false);
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut p = pointer.borrow_mut();
            p.down = true;
            p.moved = 0.0;
            p.x = ev.client_x() as f32;
            p.y = ev.client_y() as f32;
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let app = app.clone();
        let canvas_up = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let was_click = {
                let mut p = pointer.borrow_mut();
                let click = p.down && p.moved < CLICK_SLOP_PX;
                p.down = false;
                click
            };
            if !was_click || !app.on_gallery() {
                return;
            }
            ev.stop_propagation();
            let hit = pick_at(&app, &canvas_up, &ev);
            let route = {
                let mut wall = app.wall.borrow_mut();
                match hit {
                    Some(i) => wall.click_frame(i),
                    None => wall.click_miss(),
                }
            };
            app.go(route);
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    if let Some(window) = web::window() {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move || {
            app.wall.borrow_mut().set_viewport_width(dom::viewport_width());
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
