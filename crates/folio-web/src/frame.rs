use crate::camera;
use crate::constants::{
    BORDER_OFFSET_Z, BORDER_SCALE, FLOOR_COLOR, FLOOR_SIZE, FRAME_BODY_COLOR, GALLERY_FOG_FAR,
    GALLERY_FOG_HEX, GALLERY_FOG_NEAR, GALLERY_LIGHT_DIR, IMAGE_OFFSET_Z, ISLAND_LIGHT_DIR,
    MAX_FRAME_DT_SEC,
};
use crate::dom;
use crate::overlay;
use crate::render::{self, BoxInstance, ImageDraw, ImageInstance};
use crate::App;
use folio_core::color::hex_to_rgb;
use folio_core::constants::{
    ISLAND_FOV_Y_DEG, ISLAND_POSITION, ISLAND_TILT, WALL_FOV_Y_DEG, WALL_ORIGIN,
};
use folio_core::island::Block;
use folio_core::orbit::visible_width_at;
use folio_core::{CameraPose, FrameWall};
use glam::{Mat4, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub type ImageQueue = Rc<RefCell<Vec<(String, web::HtmlImageElement)>>>;

pub struct IslandScene {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub blocks: Vec<Block>,
}

pub struct GalleryScene {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub images: ImageQueue,
    pub fog_color: Vec3,
}

pub struct FrameContext {
    pub app: App,
    pub island: IslandScene,
    pub gallery: GalleryScene,
    pub last_instant: Instant,
    pub last_stage_shown: Option<Option<folio_core::Stage>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let page = self.app.route.borrow().page();
        match page {
            "home" => self.island_frame(),
            "gallery" => self.gallery_frame(dt_sec),
            _ => {}
        }
    }

    fn island_frame(&mut self) {
        let canvas = &self.island.canvas;
        // hidden sections report zero size, so re-sync once visible
        dom::sync_canvas_backing_size(canvas);
        let aspect = crate::input::canvas_aspect(canvas);
        let stage = {
            let mut orbit = self.app.orbit.borrow_mut();
            orbit.set_viewport_width(visible_width_at(
                ISLAND_FOV_Y_DEG.to_radians(),
                aspect,
                ISLAND_POSITION.z,
            ));
            orbit.advance();
            orbit.stage()
        };
        if self.last_stage_shown != Some(stage) {
            overlay::show_stage(&self.app.document, stage);
            self.last_stage_shown = Some(stage);
        }

        let Some(gpu) = self.island.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(canvas.width(), canvas.height());
        let cam = camera::for_canvas(canvas, CameraPose::at(Vec3::ZERO), ISLAND_FOV_Y_DEG);
        gpu.set_scene(&cam, Vec3::from(ISLAND_LIGHT_DIR), None);
        let angle = self.app.orbit.borrow().angle();
        let boxes = island_instances(&self.island.blocks, angle);
        if let Err(e) = gpu.render(&boxes, &[]) {
            log::error!("[island] render error: {:?}", e);
        }
    }

    fn gallery_frame(&mut self, dt_sec: f32) {
        self.app.wall.borrow_mut().advance(dt_sec);

        let Some(gpu) = self.gallery.gpu.as_mut() else {
            return;
        };
        for (url, img) in self.gallery.images.borrow_mut().drain(..) {
            if !gpu.has_texture(&url) {
                gpu.upload_image(&url, &img);
            }
        }
        let canvas = &self.gallery.canvas;
        dom::sync_canvas_backing_size(canvas);
        gpu.resize_if_needed(canvas.width(), canvas.height());

        let wall = self.app.wall.borrow();
        let cam = camera::for_canvas(canvas, wall.camera(), WALL_FOV_Y_DEG);
        gpu.set_scene(
            &cam,
            Vec3::from(GALLERY_LIGHT_DIR),
            Some(render::Fog {
                color: self.gallery.fog_color,
                near: GALLERY_FOG_NEAR,
                far: GALLERY_FOG_FAR,
            }),
        );
        let (boxes, pictures) = gallery_instances(&wall);
        if let Err(e) = gpu.render(&boxes, &pictures) {
            log::error!("[gallery] render error: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Fog color for the gallery, also used as its clear color.
pub fn gallery_fog_color() -> Vec3 {
    hex_to_rgb(GALLERY_FOG_HEX).unwrap_or(Vec3::splat(0.86))
}

/// Fetch and decode every picture the wall references, pushing each into
/// `queue` as it becomes ready.
pub fn load_wall_images(wall: &FrameWall, queue: &ImageQueue) {
    let mut urls: Vec<String> = Vec::new();
    for f in wall.frames() {
        for url in [f.image_url(), f.active_image_url()] {
            if !urls.iter().any(|u| u == url) {
                urls.push(url.to_owned());
            }
        }
    }
    for url in urls {
        let queue = queue.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match decode_image(&url).await {
                Ok(img) => queue.borrow_mut().push((url, img)),
                Err(e) => log::warn!("[gallery] image `{}` failed: {:?}", url, e),
            }
        });
    }
}

async fn decode_image(url: &str) -> Result<web::HtmlImageElement, wasm_bindgen::JsValue> {
    let img = web::HtmlImageElement::new()?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode()).await?;
    Ok(img)
}

// --- helpers private to frame ---

fn island_instances(blocks: &[Block], angle: f32) -> Vec<BoxInstance> {
    let island = Mat4::from_translation(ISLAND_POSITION)
        * Mat4::from_rotation_x(ISLAND_TILT)
        * Mat4::from_rotation_y(angle);
    blocks
        .iter()
        .map(|b| BoxInstance::lit(island * b.model(), b.color))
        .collect()
}

fn gallery_instances(wall: &FrameWall) -> (Vec<BoxInstance>, Vec<ImageDraw<'_>>) {
    let mut boxes = Vec::with_capacity(wall.len() * 2 + 1);
    let mut pictures = Vec::with_capacity(wall.len());

    // Floor: a thin slab just under the wall origin
    let floor = Mat4::from_translation(WALL_ORIGIN - Vec3::new(0.0, 0.05, 0.0))
        * Mat4::from_scale(Vec3::new(FLOOR_SIZE, 0.1, FLOOR_SIZE));
    boxes.push(BoxInstance::lit(floor, Vec3::from(FLOOR_COLOR)));

    let selected = wall.selected_index();
    for (i, frame) in wall.frames().iter().enumerate() {
        let Some(view) = wall.view(i) else {
            continue;
        };
        let body = frame.hit_box_transform();
        boxes.push(BoxInstance::lit(body, Vec3::from(FRAME_BODY_COLOR)));

        let border = body
            * Mat4::from_translation(Vec3::new(0.0, 0.0, BORDER_OFFSET_Z))
            * Mat4::from_scale(Vec3::from(BORDER_SCALE));
        boxes.push(BoxInstance::flat(border, view.border_color()));

        let image = body
            * Mat4::from_translation(Vec3::new(0.0, 0.0, IMAGE_OFFSET_Z))
            * Mat4::from_scale(view.image_scale());
        let url = if selected == Some(i) {
            frame.active_image_url()
        } else {
            frame.image_url()
        };
        pictures.push(ImageDraw {
            url,
            instance: ImageInstance::new(image, view.zoom()),
        });
    }
    (boxes, pictures)
}
