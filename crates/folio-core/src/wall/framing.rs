use crate::constants::{
    BREAKPOINT_MEDIUM_PX, BREAKPOINT_WIDE_PX, FOCUS_DISTANCE_MEDIUM, FOCUS_DISTANCE_NARROW,
    FOCUS_DISTANCE_WIDE, OVERVIEW_MEDIUM, OVERVIEW_NARROW, OVERVIEW_WIDE,
};
use crate::state::CameraPose;
use glam::{Quat, Vec3};

/// Viewport width class; narrower screens keep the camera further back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Narrow,
    Medium,
    Wide,
}

impl Breakpoint {
    pub fn from_width(width_px: f32) -> Breakpoint {
        if width_px < BREAKPOINT_MEDIUM_PX {
            Breakpoint::Narrow
        } else if width_px < BREAKPOINT_WIDE_PX {
            Breakpoint::Medium
        } else {
            Breakpoint::Wide
        }
    }

    pub fn overview_position(self) -> Vec3 {
        match self {
            Breakpoint::Narrow => OVERVIEW_NARROW,
            Breakpoint::Medium => OVERVIEW_MEDIUM,
            Breakpoint::Wide => OVERVIEW_WIDE,
        }
    }

    pub fn focus_distance(self) -> f32 {
        match self {
            Breakpoint::Narrow => FOCUS_DISTANCE_NARROW,
            Breakpoint::Medium => FOCUS_DISTANCE_MEDIUM,
            Breakpoint::Wide => FOCUS_DISTANCE_WIDE,
        }
    }

    pub fn overview_pose(self) -> CameraPose {
        CameraPose::new(self.overview_position(), Quat::IDENTITY)
    }
}
