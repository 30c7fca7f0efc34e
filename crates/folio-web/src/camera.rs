use crate::input;
use folio_core::{Camera, CameraPose};
use glam::{Vec2, Vec3};
use web_sys as web;

#[inline]
pub fn for_canvas(canvas: &web::HtmlCanvasElement, pose: CameraPose, fov_y_deg: f32) -> Camera {
    Camera::new(pose, fov_y_deg.to_radians(), input::canvas_aspect(canvas))
}

/// World-space ray through canvas pixel `px` (backing-store units).
///
/// Returns `(ray_origin, ray_direction)`.
#[inline]
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    camera: &Camera,
    px: Vec2,
) -> (Vec3, Vec3) {
    let ndc = input::canvas_px_to_ndc(canvas, px);
    camera.ray_from_ndc(ndc.x, ndc.y)
}
