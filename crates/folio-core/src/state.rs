//! Camera state shared with the web frontend.
//!
//! These types avoid platform-specific APIs. The web frontend builds its
//! uniforms from them and uses [`Camera::ray_from_ndc`] for picking.

use crate::easing::{damp_quat, damp_vec3};
use glam::{Mat4, Quat, Vec3, Vec4};

/// Where a camera sits and which way it faces. Identity orientation looks
/// down -Z with +Y up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl CameraPose {
    pub const fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    pub fn at(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    pub fn damp_toward(&mut self, target: &CameraPose, tau_sec: f32, dt_sec: f32) {
        self.position = damp_vec3(self.position, target.position, tau_sec, dt_sec);
        self.orientation = damp_quat(self.orientation, target.orientation, tau_sec, dt_sec);
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }
}

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub pose: CameraPose,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(pose: CameraPose, fovy_radians: f32, aspect: f32) -> Self {
        Self {
            pose,
            aspect: aspect.max(1e-3),
            fovy_radians,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.pose.orientation, self.pose.position).inverse()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through normalized device coordinates (`-1..1`, +Y up).
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn ray_from_ndc(&self, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.pose.position;
        let rd = (p1 - ro).normalize();
        (ro, rd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_ray_follows_orientation() {
        let pose = CameraPose::new(Vec3::new(1.0, 2.0, 3.0), Quat::from_rotation_y(0.7));
        let cam = Camera::new(pose, 1.2, 1.5);
        let (ro, rd) = cam.ray_from_ndc(0.0, 0.0);
        assert!((ro - pose.position).length() < 1e-5);
        assert!((rd - pose.forward()).length() < 1e-3);
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let pose = CameraPose::new(Vec3::new(0.0, 0.2, 5.0), Quat::IDENTITY);
        let cam = Camera::new(pose, 1.2, 1.0);
        let p = cam.view_matrix().transform_point3(pose.position);
        assert!(p.length() < 1e-5);
    }
}
