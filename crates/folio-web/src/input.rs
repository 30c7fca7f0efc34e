use glam::Vec2;
use web_sys as web;

/// Horizontal drag bookkeeping in CSS pixels.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub moved: f32,
}

#[inline]
pub fn client_to_canvas_px(canvas: &web::HtmlCanvasElement, client_x: f32, client_y: f32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x - rect.left() as f32;
    let y_css = client_y - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    client_to_canvas_px(canvas, ev.client_x() as f32, ev.client_y() as f32)
}

/// Canvas backing-store pixels to normalized device coordinates (+Y up).
#[inline]
pub fn canvas_px_to_ndc(canvas: &web::HtmlCanvasElement, px: Vec2) -> Vec2 {
    let w = canvas.width().max(1) as f32;
    let h = canvas.height().max(1) as f32;
    Vec2::new(2.0 * px.x / w - 1.0, 1.0 - 2.0 * px.y / h)
}

#[inline]
pub fn first_touch_x(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.client_x() as f32)
}

#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}
