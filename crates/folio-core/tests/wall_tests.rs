// Host-side tests for the gallery wall: selection, URL sync, camera framing
// and picking, driven end to end with the bundled three-frame content.

use folio_core::constants::*;
use folio_core::content::{default_frames, GALLERY_JSON};
use folio_core::wall::{Breakpoint, FrameSpec};
use folio_core::{FolioError, FrameWall, Route};
use glam::{Quat, Vec3};

const WIDE: f32 = 1280.0;

fn wall() -> FrameWall {
    let mut w = FrameWall::from_json(GALLERY_JSON, WIDE, 7).unwrap();
    w.mark_mounted();
    w
}

fn settle(w: &mut FrameWall) {
    for _ in 0..600 {
        w.advance(1.0 / 60.0);
    }
}

fn spec(id: &str) -> FrameSpec {
    FrameSpec {
        position: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0],
        url: "/a.png".into(),
        title: "A".into(),
        id: id.into(),
        active_url: "/a.png".into(),
        video_url: None,
        introduce: None,
    }
}

#[test]
fn bundled_content_has_three_frames() {
    let frames = default_frames().unwrap();
    let ids: Vec<&str> = frames.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, ["eoc", "ma", "sd"]);
    assert_eq!(frames[1].title, "Meeting Assistant");
}

#[test]
fn rejects_bad_ids() {
    assert!(matches!(
        FrameWall::new(vec![spec("")], WIDE, 1),
        Err(FolioError::EmptyFrameId)
    ));
    assert!(matches!(
        FrameWall::new(vec![spec("a"), spec("a")], WIDE, 1),
        Err(FolioError::DuplicateFrameId(id)) if id == "a"
    ));
    assert!(matches!(
        FrameWall::from_json("{", WIDE, 1),
        Err(FolioError::FrameData(_))
    ));
}

#[test]
fn click_selects_then_toggles_off() {
    let mut w = wall();
    assert_eq!(w.route(), Route::gallery(None));

    let r = w.click_frame(1);
    assert_eq!(r.to_path(), "/gallery/ma");
    assert_eq!(w.selected_frame().map(|f| f.id()), Some("ma"));

    let r = w.click_frame(1);
    assert_eq!(r, Route::gallery(None));
    assert!(w.selected_index().is_none());
}

#[test]
fn reselecting_returns_camera_to_overview() {
    let mut w = wall();
    let overview = w.camera_target();
    assert_eq!(overview.position, OVERVIEW_WIDE);

    w.select(Some("ma"));
    assert!((w.camera_target().position - overview.position).length() > 0.5);

    w.select(Some("ma"));
    assert!(w.selected_index().is_none());
    assert_eq!(w.camera_target(), overview);
    assert_eq!(w.camera_target(), Breakpoint::from_width(WIDE).overview_pose());
}

#[test]
fn breakpoint_changes_never_move_frames() {
    let mut w = wall();
    let before: Vec<_> = w.frames().iter().map(|f| f.world_transform()).collect();

    for (width, preset) in [
        (500.0, OVERVIEW_NARROW),
        (900.0, OVERVIEW_MEDIUM),
        (WIDE, OVERVIEW_WIDE),
    ] {
        w.set_viewport_width(width);
        settle(&mut w);
        assert_eq!(w.camera_target().position, preset);
        let after: Vec<_> = w.frames().iter().map(|f| f.world_transform()).collect();
        assert_eq!(after, before);
    }
}

#[test]
fn clicking_another_frame_switches_selection() {
    let mut w = wall();
    w.click_frame(0);
    let r = w.click_frame(2);
    assert_eq!(r, Route::gallery(Some("sd")));
    assert_eq!(w.selected_index(), Some(2));
}

#[test]
fn miss_and_unknown_ids_clear_selection() {
    let mut w = wall();
    w.select(Some("eoc"));
    assert_eq!(w.click_miss(), Route::gallery(None));
    w.select(Some("eoc"));
    assert_eq!(w.select(Some("nope")), Route::gallery(None));
    assert!(w.selected_index().is_none());
}

#[test]
fn camera_flies_to_selected_frame_and_back() {
    let mut w = wall();
    assert_eq!(w.breakpoint(), Breakpoint::Wide);
    settle(&mut w);
    assert!((w.camera().position - OVERVIEW_WIDE).length() < 1e-3);

    w.select(Some("ma"));
    let frame = w.frame(1).unwrap();
    let expected = frame.focus_point(FOCUS_DISTANCE_WIDE);
    assert!((w.camera_target().position - expected).length() < 1e-5);
    settle(&mut w);
    assert!((w.camera().position - expected).length() < 1e-3);
    let q = w.camera().orientation;
    let want = Quat::from_rotation_y(std::f32::consts::FRAC_PI_3);
    assert!(q.dot(want).abs() > 0.9999);

    w.click_miss();
    settle(&mut w);
    assert!((w.camera().position - OVERVIEW_WIDE).length() < 1e-3);
    assert!(w.camera().orientation.dot(Quat::IDENTITY).abs() > 0.9999);
}

#[test]
fn camera_moves_smoothly() {
    let mut w = wall();
    settle(&mut w);
    w.select(Some("eoc"));
    let start = w.camera().position;
    w.advance(1.0 / 60.0);
    let step = (w.camera().position - start).length();
    let total = (w.camera_target().position - start).length();
    assert!(step > 0.0 && step < total * 0.1);
}

#[test]
fn narrow_viewports_frame_from_further_back() {
    let mut w = wall();
    w.select(Some("eoc"));
    let wide_target = w.camera_target().position;
    w.set_viewport_width(500.0);
    assert_eq!(w.breakpoint(), Breakpoint::Narrow);
    let narrow_target = w.camera_target().position;
    let center = w.frame(0).unwrap().focus_point(0.0);
    assert!((narrow_target - center).length() > (wide_target - center).length());
    assert!(((narrow_target - center).length() - FOCUS_DISTANCE_NARROW).abs() < 1e-4);

    w.click_miss();
    assert_eq!(w.camera_target().position, OVERVIEW_NARROW);
    w.set_viewport_width(900.0);
    assert_eq!(w.camera_target().position, OVERVIEW_MEDIUM);
}

#[test]
fn route_changes_never_toggle() {
    let mut w = wall();
    w.apply_route(&Route::gallery(Some("sd")));
    w.apply_route(&Route::gallery(Some("sd")));
    assert_eq!(w.selected_index(), Some(2));
    w.apply_route(&Route::gallery(None));
    assert!(w.selected_index().is_none());
    w.apply_route(&Route::gallery(Some("ghost")));
    assert!(w.selected_index().is_none());
}

#[test]
fn deep_link_waits_for_mount() {
    let mut w = FrameWall::from_json(GALLERY_JSON, WIDE, 7).unwrap();
    w.apply_route(&Route::parse("/gallery/sd").unwrap());
    assert!(!w.is_mounted());
    assert!(w.selected_index().is_none());
    w.mark_mounted();
    assert_eq!(w.selected_frame().map(|f| f.id()), Some("sd"));
    assert_eq!(w.route().to_path(), "/gallery/sd");
}

#[test]
fn picking_hits_the_nearest_frame() {
    let w = wall();
    let origin = OVERVIEW_WIDE;
    let center = w.frame(0).unwrap().focus_point(0.0);
    assert_eq!(w.pick(origin, (center - origin).normalize()), Some(0));
    assert_eq!(w.pick(origin, Vec3::Y), None);

    // a ray through both side frames reports the closer one
    let side = w.frame(2).unwrap().focus_point(0.0);
    let from_right = side + Vec3::new(3.0, 0.0, 0.0);
    let hit = w.pick(from_right, Vec3::NEG_X);
    assert_eq!(hit, Some(2));
}

#[test]
fn hover_follows_pointer_and_is_bounded() {
    let mut w = wall();
    assert!(w.set_hovered(Some(1)));
    assert!(!w.set_hovered(Some(1)));
    assert!(w.view(1).unwrap().hovered());
    assert!(w.set_hovered(Some(0)));
    assert!(!w.view(1).unwrap().hovered());
    assert!(w.set_hovered(Some(99)));
    assert_eq!(w.hovered_index(), None);
}

#[test]
fn hovered_frame_shrinks_and_glows() {
    let mut w = wall();
    w.set_hovered(Some(0));
    settle(&mut w);
    let v = w.view(0).unwrap();
    assert!((v.image_scale() - IMAGE_BASE_SCALE * IMAGE_HOVER_SHRINK).length() < 1e-3);
    assert!(v.border_color().z > v.border_color().x);
    let other = w.view(1).unwrap();
    assert!((other.image_scale() - IMAGE_BASE_SCALE).length() < 1e-6);
}

#[test]
fn phases_are_seeded() {
    let a = FrameWall::from_json(GALLERY_JSON, WIDE, 3).unwrap();
    let b = FrameWall::from_json(GALLERY_JSON, WIDE, 3).unwrap();
    for i in 0..a.len() {
        assert_eq!(a.view(i).unwrap().phase(), b.view(i).unwrap().phase());
    }
    assert_ne!(a.view(0).unwrap().phase(), a.view(1).unwrap().phase());
}

#[test]
fn caption_carries_video_target_on_the_button() {
    let mut with_video = spec("a");
    with_video.title = "Tom & Jerry".into();
    with_video.video_url = Some("https://v.example/?a=1&b='2'".into());
    let w = FrameWall::new(vec![with_video, spec("b")], WIDE, 1).unwrap();

    let html = w.frame(0).unwrap().caption_html("vid");
    assert!(html.starts_with("<h2>Tom &amp; Jerry</h2>"));
    assert!(html.contains("id='vid'"));
    assert!(html.contains("data-href='https://v.example/?a=1&amp;b=&apos;2&apos;'"));

    let plain = w.frame(1).unwrap().caption_html("vid");
    assert_eq!(plain, "<h2>A</h2>");
}
