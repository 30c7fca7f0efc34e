use crate::constants::{
    DRAG_GAIN, ISLAND_INITIAL_YAW, KEY_STEP, KEY_VELOCITY, ORBIT_DAMPING, ORBIT_MIN_SPEED,
};
use crate::stage::{self, Stage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnKey {
    Left,
    Right,
}

impl TurnKey {
    pub fn from_key(key: &str) -> Option<TurnKey> {
        match key {
            "ArrowLeft" => Some(TurnKey::Left),
            "ArrowRight" => Some(TurnKey::Right),
            _ => None,
        }
    }
}

/// Turns horizontal drags and arrow keys into a damped yaw for the island.
///
/// While a drag (or key hold) is active the angle follows the input directly
/// and the stage is reclassified every frame. Once released the last input
/// delta keeps spinning the island and decays; the stage stays frozen at its
/// last classified value.
#[derive(Clone, Debug)]
pub struct OrbitNavigator {
    angle: f32,
    angular_velocity: f32,
    dragging: bool,
    last_x: f32,
    viewport_width: f32,
    stage: Option<Stage>,
}

impl Default for OrbitNavigator {
    fn default() -> Self {
        Self::new(ISLAND_INITIAL_YAW, 1.0)
    }
}

impl OrbitNavigator {
    pub fn new(initial_angle: f32, viewport_width: f32) -> Self {
        Self {
            angle: initial_angle,
            angular_velocity: 0.0,
            dragging: false,
            last_x: 0.0,
            viewport_width: viewport_width.max(f32::EPSILON),
            stage: Some(Stage::Explore),
        }
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    pub fn stage(&self) -> Option<Stage> {
        self.stage
    }

    /// Divisor for drag deltas; non-positive widths are ignored.
    pub fn set_viewport_width(&mut self, width: f32) {
        if width > 0.0 && width.is_finite() {
            self.viewport_width = width;
        }
    }

    pub fn drag_start(&mut self, x: f32) {
        self.dragging = true;
        self.last_x = x;
    }

    pub fn drag_move(&mut self, x: f32) {
        if !self.dragging {
            return;
        }
        let delta = (x - self.last_x) / self.viewport_width;
        let step = delta * DRAG_GAIN;
        self.angle += step;
        self.angular_velocity = step;
        self.last_x = x;
    }

    pub fn drag_end(&mut self) {
        self.dragging = false;
    }

    /// Arrow-key press (auto-repeat included): one fixed step, then hold.
    pub fn key_down(&mut self, key: TurnKey) {
        self.dragging = true;
        let sign = match key {
            TurnKey::Left => 1.0,
            TurnKey::Right => -1.0,
        };
        self.angle += sign * KEY_STEP;
        self.angular_velocity = sign * KEY_VELOCITY;
    }

    pub fn key_up(&mut self, _key: TurnKey) {
        self.dragging = false;
    }

    /// One rendered frame. Returns true when the stage changed.
    pub fn advance(&mut self) -> bool {
        if self.dragging {
            let next = stage::classify(self.angle);
            if next != self.stage {
                log::debug!("[orbit] stage {:?} -> {:?}", self.stage, next);
                self.stage = next;
                return true;
            }
            return false;
        }
        self.angular_velocity *= ORBIT_DAMPING;
        if self.angular_velocity.abs() < ORBIT_MIN_SPEED {
            self.angular_velocity = 0.0;
        }
        self.angle += self.angular_velocity;
        false
    }
}

/// Width of the visible scene (world units) at `distance` in front of a
/// perspective camera. Used as the drag divisor so a drag feels the same at
/// any canvas size.
pub fn visible_width_at(fov_y_radians: f32, aspect: f32, distance: f32) -> f32 {
    2.0 * distance.abs() * (fov_y_radians * 0.5).tan() * aspect
}
