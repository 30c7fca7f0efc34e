use crate::color::highlight_color;
use crate::constants::{
    BORDER_NEUTRAL, FRAME_TAU_SEC, IMAGE_BASE_SCALE, IMAGE_HOVER_SHRINK, ZOOM_AMPLITUDE,
    ZOOM_BASE, ZOOM_MAX, ZOOM_PHASE_SPREAD, ZOOM_TIME_DIVISOR,
};
use crate::easing::damp_vec3;
use glam::Vec3;

/// Animated presentation state of one frame. Owned by the wall and stepped
/// once per rendered frame; nothing here affects layout or selection.
#[derive(Clone, Debug)]
pub struct FrameView {
    hovered: bool,
    phase: f32,
    image_scale: Vec3,
    border_color: Vec3,
    zoom: f32,
}

/// Texture zoom for a frame with `phase` at `elapsed_sec`.
#[inline]
pub fn breathing_zoom(phase: f32, elapsed_sec: f32) -> f32 {
    let wave = (phase * ZOOM_PHASE_SPREAD + elapsed_sec / ZOOM_TIME_DIVISOR).sin();
    (ZOOM_BASE + wave * ZOOM_AMPLITUDE).min(ZOOM_MAX)
}

impl FrameView {
    pub fn new(phase: f32) -> Self {
        Self {
            hovered: false,
            phase,
            image_scale: IMAGE_BASE_SCALE,
            border_color: BORDER_NEUTRAL,
            zoom: breathing_zoom(phase, 0.0),
        }
    }

    #[inline]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    #[inline]
    pub fn image_scale(&self) -> Vec3 {
        self.image_scale
    }

    #[inline]
    pub fn border_color(&self) -> Vec3 {
        self.border_color
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn advance(&mut self, dt_sec: f32, elapsed_sec: f32, selected: bool) {
        // Selected frames hold their zoom and ignore hover.
        let hover_active = self.hovered && !selected;
        if !selected {
            self.zoom = breathing_zoom(self.phase, elapsed_sec);
        }
        let scale_target = if hover_active {
            IMAGE_BASE_SCALE * IMAGE_HOVER_SHRINK
        } else {
            IMAGE_BASE_SCALE
        };
        self.image_scale = damp_vec3(self.image_scale, scale_target, FRAME_TAU_SEC, dt_sec);
        let color_target = if hover_active {
            highlight_color(elapsed_sec)
        } else {
            BORDER_NEUTRAL
        };
        self.border_color = damp_vec3(self.border_color, color_target, FRAME_TAU_SEC, dt_sec);
    }
}
