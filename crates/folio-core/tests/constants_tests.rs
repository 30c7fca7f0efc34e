// Host-side tests for tuning constants and their relationships.

use folio_core::color::{highlight_color, hex_to_rgb};
use folio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_and_damping_are_sane() {
    assert!(CAMERA_TAU_SEC > FRAME_TAU_SEC);
    assert!(FRAME_TAU_SEC > 0.0);
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING < 1.0);
    assert!(ORBIT_MIN_SPEED < KEY_VELOCITY);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stage_windows_are_ordered_and_disjoint() {
    let mut windows = [
        STAGE_CONTACT_WINDOW,
        STAGE_PORTFOLIO_WINDOW,
        STAGE_RESUME_WINDOW,
        STAGE_INTRO_WINDOW,
    ];
    windows.sort_by(|a, b| a.0.total_cmp(&b.0));
    for w in windows.windows(2) {
        assert!(w[0].0 < w[0].1);
        assert!(w[0].1 < w[1].0);
    }
    assert!(windows[3].1 < TAU);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn framing_gets_closer_on_wider_screens() {
    assert!(BREAKPOINT_MEDIUM_PX < BREAKPOINT_WIDE_PX);
    assert!(FOCUS_DISTANCE_NARROW > FOCUS_DISTANCE_MEDIUM);
    assert!(FOCUS_DISTANCE_MEDIUM > FOCUS_DISTANCE_WIDE);
    assert!(OVERVIEW_NARROW.z > OVERVIEW_MEDIUM.z);
    assert!(OVERVIEW_MEDIUM.z > OVERVIEW_WIDE.z);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn zoom_cap_sits_inside_the_swing() {
    assert!(ZOOM_MAX > ZOOM_BASE);
    assert!(ZOOM_MAX < ZOOM_BASE + ZOOM_AMPLITUDE);
}

#[test]
fn highlight_stays_blue() {
    for i in 0..50 {
        let c = highlight_color(i as f32 * 0.37);
        assert!(c.z > c.x, "not blue at step {i}");
    }
}

#[test]
fn branch_colors_parse() {
    for hex in MINDMAP_BRANCH_COLORS {
        assert!(hex_to_rgb(hex).is_some(), "bad color {hex}");
    }
}
