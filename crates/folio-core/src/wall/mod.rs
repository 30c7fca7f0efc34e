//! The gallery wall: a fixed set of frames, one optional selection mirrored
//! in the URL, and a camera that eases toward either the selected frame or a
//! width-dependent overview pose.
//!
//! All mutation goes through input methods (`select`, `click_*`,
//! `apply_route`, `set_viewport_width`, `set_hovered`) and a single
//! [`FrameWall::advance`] per rendered frame, so the whole thing runs on the
//! host without a renderer.

mod frame;
mod framing;
mod view;

pub use frame::{Frame, FrameSpec};
pub use framing::Breakpoint;
pub use view::{breathing_zoom, FrameView};

use crate::constants::{CAMERA_TAU_SEC, WALL_CAMERA_START};
use crate::error::{FolioError, Result};
use crate::route::Route;
use crate::state::CameraPose;
use fnv::FnvHashMap;
use glam::Vec3;
use rand::prelude::*;

pub struct FrameWall {
    frames: Vec<Frame>,
    views: Vec<FrameView>,
    index: FnvHashMap<String, usize>,
    selected: Option<usize>,
    hovered: Option<usize>,
    breakpoint: Breakpoint,
    target: CameraPose,
    camera: CameraPose,
    mounted: bool,
    pending: Option<String>,
    elapsed: f32,
}

impl FrameWall {
    /// Lay out `specs` in order. Ids must be non-empty and unique; `seed`
    /// drives the per-frame breathing phases.
    pub fn new(specs: Vec<FrameSpec>, viewport_width: f32, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut index = FnvHashMap::default();
        let mut frames = Vec::with_capacity(specs.len());
        let mut views = Vec::with_capacity(specs.len());
        for spec in specs {
            if spec.id.is_empty() {
                return Err(FolioError::EmptyFrameId);
            }
            if index.insert(spec.id.clone(), frames.len()).is_some() {
                return Err(FolioError::DuplicateFrameId(spec.id));
            }
            views.push(FrameView::new(rng.gen::<f32>()));
            frames.push(Frame::new(spec));
        }
        let breakpoint = Breakpoint::from_width(viewport_width);
        Ok(Self {
            frames,
            views,
            index,
            selected: None,
            hovered: None,
            breakpoint,
            target: breakpoint.overview_pose(),
            camera: CameraPose::at(WALL_CAMERA_START),
            mounted: false,
            pending: None,
            elapsed: 0.0,
        })
    }

    /// Decode frames from the content JSON (an array of frame objects).
    pub fn from_json(json: &str, viewport_width: f32, seed: u64) -> Result<Self> {
        let specs: Vec<FrameSpec> = serde_json::from_str(json)?;
        Self::new(specs, viewport_width, seed)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, i: usize) -> Option<&Frame> {
        self.frames.get(i)
    }

    pub fn view(&self, i: usize) -> Option<&FrameView> {
        self.views.get(i)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_frame(&self) -> Option<&Frame> {
        self.selected.and_then(|i| self.frames.get(i))
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Where the camera is heading.
    pub fn camera_target(&self) -> CameraPose {
        self.target
    }

    /// Where the camera is this frame.
    pub fn camera(&self) -> CameraPose {
        self.camera
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn route(&self) -> Route {
        Route::gallery(self.selected_frame().map(Frame::id))
    }

    /// User intent to select `id`. Re-selecting the current frame, passing
    /// `None`, or naming an unknown frame all clear the selection. Returns
    /// the route the caller should navigate to.
    pub fn select(&mut self, id: Option<&str>) -> Route {
        let next = id.and_then(|id| self.index_of(id));
        let next = if next.is_some() && next == self.selected {
            None
        } else {
            next
        };
        self.set_selection(next);
        self.route()
    }

    pub fn click_frame(&mut self, index: usize) -> Route {
        let id = self.frames.get(index).map(|f| f.id().to_owned());
        self.select(id.as_deref())
    }

    pub fn click_miss(&mut self) -> Route {
        self.select(None)
    }

    /// Make the selection match `route` (history navigation, deep links).
    /// Unlike [`FrameWall::select`] this never toggles. Before the scene is
    /// mounted a frame id is parked and applied by [`FrameWall::mark_mounted`].
    pub fn apply_route(&mut self, route: &Route) {
        let wanted = route.gallery_frame();
        if !self.mounted {
            self.pending = wanted.map(str::to_owned);
            return;
        }
        let next = wanted.and_then(|id| {
            let found = self.index_of(id);
            if found.is_none() {
                log::warn!("[wall] no frame named `{}`; showing overview", id);
            }
            found
        });
        self.set_selection(next);
    }

    /// Scene graph is live; honor any deep link that arrived before it.
    pub fn mark_mounted(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let pending = self.pending.take();
        self.apply_route(&Route::gallery(pending.as_deref()));
    }

    pub fn set_viewport_width(&mut self, width_px: f32) {
        let bp = Breakpoint::from_width(width_px);
        if bp != self.breakpoint {
            log::debug!("[wall] breakpoint {:?} -> {:?}", self.breakpoint, bp);
            self.breakpoint = bp;
            self.retarget();
        }
    }

    /// Pointer moved over frame `index` (or off every frame). Returns true
    /// when the hovered frame changed.
    pub fn set_hovered(&mut self, index: Option<usize>) -> bool {
        let index = index.filter(|&i| i < self.frames.len());
        if index == self.hovered {
            return false;
        }
        if let Some(prev) = self.hovered {
            self.views[prev].set_hovered(false);
        }
        if let Some(next) = index {
            self.views[next].set_hovered(true);
        }
        self.hovered = index;
        true
    }

    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<usize> {
        self.frames
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.intersect(ray_origin, ray_dir).map(|t| (i, t)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    pub fn advance(&mut self, dt_sec: f32) {
        let dt = dt_sec.max(0.0);
        self.elapsed += dt;
        self.camera.damp_toward(&self.target, CAMERA_TAU_SEC, dt);
        for (i, v) in self.views.iter_mut().enumerate() {
            v.advance(dt, self.elapsed, self.selected == Some(i));
        }
    }

    fn set_selection(&mut self, next: Option<usize>) {
        if next != self.selected {
            match next.and_then(|i| self.frames.get(i)) {
                Some(f) => log::info!("[wall] selected `{}`", f.id()),
                None => log::info!("[wall] selection cleared"),
            }
        }
        self.selected = next;
        self.retarget();
    }

    fn retarget(&mut self) {
        self.target = match self.selected_frame() {
            Some(f) => CameraPose::new(
                f.focus_point(self.breakpoint.focus_distance()),
                f.world_orientation(),
            ),
            None => self.breakpoint.overview_pose(),
        };
    }
}
