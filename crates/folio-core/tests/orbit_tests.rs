// Host-side tests for the island orbit navigator and stage classification.

use folio_core::constants::*;
use folio_core::orbit::visible_width_at;
use folio_core::stage::{classify, normalize_angle, panel_for};
use folio_core::{OrbitNavigator, Route, Stage, TurnKey};

#[test]
fn stage_windows_match_angles() {
    assert_eq!(classify(5.5), Some(Stage::Intro));
    assert_eq!(classify(4.5), Some(Stage::Resume));
    assert_eq!(classify(2.5), Some(Stage::Portfolio));
    assert_eq!(classify(1.0), Some(Stage::Contact));
    assert_eq!(classify(3.5), None);
    assert_eq!(classify(0.2), None);
}

#[test]
fn window_edges_are_inclusive() {
    assert_eq!(classify(STAGE_CONTACT_WINDOW.0), Some(Stage::Contact));
    assert_eq!(classify(STAGE_CONTACT_WINDOW.1), Some(Stage::Contact));
    assert_eq!(classify(STAGE_INTRO_WINDOW.1), Some(Stage::Intro));
}

#[test]
fn classification_wraps_full_turns() {
    assert_eq!(classify(5.5 + TAU), Some(Stage::Intro));
    assert_eq!(classify(5.5 - 3.0 * TAU), Some(Stage::Intro));
    let a = normalize_angle(-0.1);
    assert!((0.0..TAU).contains(&a));
    assert!((a - (TAU - 0.1)).abs() < 1e-4);
}

#[test]
fn starts_in_explore_and_stays_there_until_dragged() {
    let mut nav = OrbitNavigator::new(ISLAND_INITIAL_YAW, 800.0);
    assert_eq!(nav.stage(), Some(Stage::Explore));
    for _ in 0..30 {
        assert!(!nav.advance());
    }
    assert_eq!(nav.stage(), Some(Stage::Explore));
    assert_eq!(nav.angle(), ISLAND_INITIAL_YAW);
}

#[test]
fn first_drag_classifies_the_initial_yaw() {
    let mut nav = OrbitNavigator::new(ISLAND_INITIAL_YAW, 800.0);
    nav.drag_start(100.0);
    assert!(nav.advance());
    // 4.7077 lies inside the resume window
    assert_eq!(nav.stage(), Some(Stage::Resume));
}

#[test]
fn drag_scales_by_viewport_width() {
    let mut nav = OrbitNavigator::new(0.0, 1000.0);
    nav.drag_start(0.0);
    nav.drag_move(100.0);
    let expected = 0.1 * DRAG_GAIN;
    assert!((nav.angle() - expected).abs() < 1e-6);
    assert!((nav.angular_velocity() - expected).abs() < 1e-6);

    nav.set_viewport_width(0.0);
    nav.drag_move(200.0);
    assert!((nav.angle() - 2.0 * expected).abs() < 1e-6);
}

#[test]
fn split_drags_add_up_to_one_move() {
    let mut whole = OrbitNavigator::new(1.0, 1000.0);
    whole.drag_start(0.0);
    whole.drag_move(100.0);

    let mut split = OrbitNavigator::new(1.0, 1000.0);
    split.drag_start(0.0);
    for x in [30.0, 70.0, 55.0, 100.0] {
        split.drag_move(x);
    }
    assert!((split.angle() - whole.angle()).abs() < 1e-6);
    assert!((split.angle() - (1.0 + 0.1 * DRAG_GAIN)).abs() < 1e-6);
}

#[test]
fn idle_velocity_decays_geometrically_then_snaps_to_zero() {
    let mut nav = OrbitNavigator::new(0.0, 100.0);
    nav.drag_start(0.0);
    nav.drag_move(300.0);
    nav.drag_end();
    let v0 = nav.angular_velocity();
    assert!((v0 - 3.0 * DRAG_GAIN).abs() < 1e-6);

    for n in 1..=20 {
        nav.advance();
        let expected = v0 * ORBIT_DAMPING.powi(n);
        assert!((nav.angular_velocity() - expected).abs() < 1e-6, "frame {}", n);
    }
    let mut frames = 20;
    while nav.angular_velocity() != 0.0 {
        assert!(nav.angular_velocity().abs() >= ORBIT_MIN_SPEED);
        nav.advance();
        frames += 1;
        assert!(frames < 1000);
    }
    let resting = nav.angle();
    nav.advance();
    assert_eq!(nav.angle(), resting);
}

#[test]
fn move_without_drag_is_ignored() {
    let mut nav = OrbitNavigator::new(1.0, 500.0);
    nav.drag_move(400.0);
    assert_eq!(nav.angle(), 1.0);
}

#[test]
fn dragging_to_the_intro_side_updates_stage() {
    let mut nav = OrbitNavigator::new(ISLAND_INITIAL_YAW, 100.0);
    nav.drag_start(0.0);
    nav.drag_move(2550.0);
    assert!(nav.advance());
    assert_eq!(nav.stage(), Some(Stage::Intro));
    assert!(!nav.advance());
}

#[test]
fn momentum_decays_and_stage_freezes_after_release() {
    let mut nav = OrbitNavigator::new(ISLAND_INITIAL_YAW, 100.0);
    nav.drag_start(0.0);
    nav.drag_move(2550.0);
    nav.advance();
    nav.drag_end();
    let released_at = nav.angle();
    let mut prev_speed = nav.angular_velocity().abs();
    for _ in 0..400 {
        assert!(!nav.advance());
        let speed = nav.angular_velocity().abs();
        assert!(speed <= prev_speed);
        prev_speed = speed;
    }
    assert_eq!(nav.angular_velocity(), 0.0);
    assert!(nav.angle() > released_at);
    // coasting never reclassifies
    assert_eq!(nav.stage(), Some(Stage::Intro));
}

#[test]
fn arrow_keys_step_and_coast() {
    let mut nav = OrbitNavigator::new(2.0, 800.0);
    nav.key_down(TurnKey::Left);
    assert!(nav.is_dragging());
    assert!((nav.angle() - (2.0 + KEY_STEP)).abs() < 1e-6);
    nav.key_up(TurnKey::Left);
    nav.advance();
    let expected = 2.0 + KEY_STEP + KEY_VELOCITY * ORBIT_DAMPING;
    assert!((nav.angle() - expected).abs() < 1e-6);

    nav.key_down(TurnKey::Right);
    assert!(nav.angular_velocity() < 0.0);
    assert_eq!(TurnKey::from_key("ArrowRight"), Some(TurnKey::Right));
    assert_eq!(TurnKey::from_key("a"), None);
}

#[test]
fn panels_link_to_pages() {
    assert!(panel_for(None).is_none());
    assert_eq!(
        panel_for(Some(Stage::Portfolio)).and_then(|p| p.cta).map(|c| c.1),
        Some(Route::Projects)
    );
    assert!(panel_for(Some(Stage::Explore)).unwrap().cta.is_none());
    for s in Stage::ALL {
        assert_eq!(Stage::from_number(s.number()), Some(s));
        assert!(panel_for(Some(s)).is_some());
    }
}

#[test]
fn visible_width_scales_with_distance() {
    let w = visible_width_at(std::f32::consts::FRAC_PI_2, 1.0, 1.0);
    assert!((w - 2.0).abs() < 1e-5);
    let w2 = visible_width_at(std::f32::consts::FRAC_PI_2, 2.0, 3.0);
    assert!((w2 - 12.0).abs() < 1e-4);
}
