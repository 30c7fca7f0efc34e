//! Procedural low-poly island drawn on the landing page.
//!
//! The island is a stack of boxes: an octagonal plinth, one landmark tower
//! per stage placed so it faces the viewer when that stage is active, and a
//! seeded scatter of houses and trees. Coordinates are island-local with the
//! plinth top at `y = 0`.

use crate::constants::{
    STAGE_CONTACT_WINDOW, STAGE_INTRO_WINDOW, STAGE_PORTFOLIO_WINDOW, STAGE_RESUME_WINDOW, TAU,
};
use glam::{Mat4, Quat, Vec3};
use rand::prelude::*;

pub const ISLAND_RADIUS: f32 = 11.0;
const PLINTH_DEPTH: f32 = 2.5;
const SCATTER_COUNT: usize = 28;

const GRASS: Vec3 = Vec3::new(0.38, 0.62, 0.33);
const ROCK: Vec3 = Vec3::new(0.52, 0.45, 0.38);
const ROOF_TONES: [Vec3; 3] = [
    Vec3::new(0.78, 0.36, 0.28),
    Vec3::new(0.30, 0.42, 0.66),
    Vec3::new(0.86, 0.72, 0.44),
];
const TREE: Vec3 = Vec3::new(0.16, 0.42, 0.22);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Block {
    pub center: Vec3,
    pub size: Vec3,
    pub yaw: f32,
    pub color: Vec3,
}

impl Block {
    /// Island-local model matrix for a unit cube.
    pub fn model(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.size,
            Quat::from_rotation_y(self.yaw),
            self.center,
        )
    }
}

#[inline]
fn window_mid((lo, hi): (f32, f32)) -> f32 {
    0.5 * (lo + hi)
}

/// Local bearing that faces +Z (the camera) when the island yaw is `yaw`.
#[inline]
fn facing_bearing(yaw: f32) -> f32 {
    (-yaw).rem_euclid(TAU)
}

#[inline]
fn on_ring(bearing: f32, radius: f32) -> Vec3 {
    Vec3::new(bearing.sin() * radius, 0.0, bearing.cos() * radius)
}

pub fn generate(seed: u64) -> Vec<Block> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut blocks = Vec::with_capacity(8 + 4 * 2 + SCATTER_COUNT);

    // Octagonal plinth from four overlapping slabs
    for i in 0..4 {
        blocks.push(Block {
            center: Vec3::new(0.0, -PLINTH_DEPTH * 0.5, 0.0),
            size: Vec3::new(ISLAND_RADIUS * 2.0, PLINTH_DEPTH, ISLAND_RADIUS * 0.83),
            yaw: i as f32 * std::f32::consts::FRAC_PI_4,
            color: if i % 2 == 0 { GRASS } else { GRASS * 0.94 },
        });
    }
    blocks.push(Block {
        center: Vec3::new(0.0, -PLINTH_DEPTH - 1.0, 0.0),
        size: Vec3::new(ISLAND_RADIUS * 1.3, 2.0, ISLAND_RADIUS * 1.3),
        yaw: std::f32::consts::FRAC_PI_8,
        color: ROCK,
    });

    // One landmark per stage window
    let landmarks = [
        (STAGE_INTRO_WINDOW, 6.0, ROOF_TONES[0]),
        (STAGE_RESUME_WINDOW, 4.5, ROOF_TONES[1]),
        (STAGE_PORTFOLIO_WINDOW, 5.2, ROOF_TONES[2]),
        (STAGE_CONTACT_WINDOW, 3.8, ROOF_TONES[0] * 0.8 + ROOF_TONES[1] * 0.2),
    ];
    for (window, height, roof) in landmarks {
        let bearing = facing_bearing(window_mid(window));
        let base = on_ring(bearing, ISLAND_RADIUS * 0.62);
        blocks.push(Block {
            center: base + Vec3::Y * (height * 0.5),
            size: Vec3::new(1.8, height, 1.8),
            yaw: bearing,
            color: Vec3::splat(0.92),
        });
        blocks.push(Block {
            center: base + Vec3::Y * (height + 0.35),
            size: Vec3::new(2.2, 0.7, 2.2),
            yaw: bearing + std::f32::consts::FRAC_PI_4,
            color: roof,
        });
    }

    // Scatter of houses and trees, kept off the landmark bearings
    for _ in 0..SCATTER_COUNT {
        let bearing = rng.gen_range(0.0..TAU);
        let radius = rng.gen_range(2.0..ISLAND_RADIUS * 0.8);
        let base = on_ring(bearing, radius);
        if rng.gen_bool(0.45) {
            let h = rng.gen_range(0.8..1.8);
            blocks.push(Block {
                center: base + Vec3::Y * (h * 0.5),
                size: Vec3::new(0.5, h, 0.5),
                yaw: 0.0,
                color: TREE,
            });
        } else {
            let h = rng.gen_range(0.9..2.2);
            let w = rng.gen_range(0.9..1.6);
            let roof = ROOF_TONES[rng.gen_range(0..ROOF_TONES.len())];
            blocks.push(Block {
                center: base + Vec3::Y * (h * 0.5),
                size: Vec3::new(w, h, w * 0.8),
                yaw: bearing,
                color: roof.lerp(Vec3::ONE, 0.55),
            });
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_island() {
        assert_eq!(generate(7), generate(7));
    }

    #[test]
    fn blocks_stay_on_the_plinth() {
        for b in generate(3) {
            let r = Vec3::new(b.center.x, 0.0, b.center.z).length();
            assert!(r <= ISLAND_RADIUS, "block at radius {} overhangs", r);
        }
    }

    #[test]
    fn landmark_faces_camera_mid_window() {
        let yaw = window_mid(STAGE_RESUME_WINDOW);
        let local = on_ring(facing_bearing(yaw), 1.0);
        let world = Quat::from_rotation_y(yaw) * local;
        assert!((world - Vec3::Z).length() < 1e-4);
    }
}
