//! Frame-rate independent exponential smoothing.
//!
//! Every helper moves `current` toward `target` by `1 - exp(-dt / tau)` of the
//! remaining distance, so two half-steps land on the same value as one full
//! step. `tau` is the time constant in seconds.

use glam::{Quat, Vec3};

/// Fraction of the remaining distance covered in `dt_sec`.
#[inline]
pub fn damp_alpha(tau_sec: f32, dt_sec: f32) -> f32 {
    if tau_sec <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt_sec.max(0.0) / tau_sec).exp()
}

#[inline]
pub fn damp(current: f32, target: f32, tau_sec: f32, dt_sec: f32) -> f32 {
    current + (target - current) * damp_alpha(tau_sec, dt_sec)
}

#[inline]
pub fn damp_vec3(current: Vec3, target: Vec3, tau_sec: f32, dt_sec: f32) -> Vec3 {
    current.lerp(target, damp_alpha(tau_sec, dt_sec))
}

/// Spherical variant for orientations; always takes the short arc.
#[inline]
pub fn damp_quat(current: Quat, target: Quat, tau_sec: f32, dt_sec: f32) -> Quat {
    current
        .slerp(target, damp_alpha(tau_sec, dt_sec))
        .normalize()
}
