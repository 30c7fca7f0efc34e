#![cfg(target_arch = "wasm32")]
use folio_core::constants::ISLAND_INITIAL_YAW;
use folio_core::{content, island, FrameWall, MindMapViewer, OrbitNavigator, Route};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod mindmap;
mod overlay;
mod render;
mod router;

/// Shared page state. Cheap to clone; every handler holds one.
#[derive(Clone)]
pub(crate) struct App {
    pub document: web::Document,
    pub route: Rc<RefCell<Route>>,
    pub orbit: Rc<RefCell<OrbitNavigator>>,
    pub wall: Rc<RefCell<FrameWall>>,
    pub mindmap: mindmap::ViewerSlot,
}

impl App {
    /// User navigation: push history, then show the page.
    pub fn go(&self, route: Route) {
        router::navigate(&route);
        self.enter(route);
    }

    /// Bring the page in line with `route` without touching history.
    pub fn enter(&self, route: Route) {
        router::show_page(&self.document, &route);
        self.wall.borrow_mut().apply_route(&route);
        overlay::show_caption(&self.document, self.wall.borrow().selected_frame());
        if route == Route::Tools {
            mindmap::mount(&self.mindmap);
        } else {
            mindmap::unmount(&self.mindmap);
        }
        *self.route.borrow_mut() = route;
    }

    pub fn on_home(&self) -> bool {
        *self.route.borrow() == Route::Home
    }

    pub fn on_gallery(&self) -> bool {
        matches!(*self.route.borrow(), Route::Gallery { .. })
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let island_canvas = dom::canvas_by_id(&document, constants::ISLAND_CANVAS_ID)?;
    let gallery_canvas = dom::canvas_by_id(&document, constants::GALLERY_CANVAS_ID)?;
    dom::wire_canvas_resize(&island_canvas);
    dom::wire_canvas_resize(&gallery_canvas);

    let frames = content::default_frames()?;
    let wall = FrameWall::new(frames, dom::viewport_width(), random_seed())?;
    log::info!("[init] {} frames on the wall", wall.len());

    let app = App {
        document: document.clone(),
        route: Rc::new(RefCell::new(Route::Home)),
        orbit: Rc::new(RefCell::new(OrbitNavigator::new(ISLAND_INITIAL_YAW, 1.0))),
        wall: Rc::new(RefCell::new(wall)),
        mindmap: Rc::new(RefCell::new(None::<MindMapViewer>)),
    };

    {
        let app_pop = app.clone();
        router::wire_popstate(move |route| app_pop.enter(route));
        let app_links = app.clone();
        router::wire_links(&document, move |route| app_links.go(route));
    }
    events::wire_island_input(&app, &island_canvas);
    events::wire_gallery_input(&app, &gallery_canvas);
    mindmap::wire_actions(&document, &app.mindmap);
    overlay::wire_caption(&document);

    let path = web::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let initial = match Route::parse(&path) {
        Ok(route) => route,
        Err(e) => {
            log::warn!("[init] {}; redirecting home", e);
            router::replace(&Route::Home);
            Route::Home
        }
    };
    app.enter(initial);

    let island_gpu = match render::GpuState::new(
        &island_canvas,
        Vec3::from(constants::ISLAND_CLEAR),
    )
    .await
    {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[island] WebGPU init failed: {:?}", e);
            None
        }
    };
    let fog_color = frame::gallery_fog_color();
    let gallery_gpu = match render::GpuState::new(&gallery_canvas, fog_color).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gallery] WebGPU init failed: {:?}", e);
            None
        }
    };

    let images: frame::ImageQueue = Rc::new(RefCell::new(Vec::new()));
    frame::load_wall_images(&app.wall.borrow(), &images);

    // Scene is live: a deep-linked frame can be selected now.
    app.wall.borrow_mut().mark_mounted();
    overlay::show_caption(&document, app.wall.borrow().selected_frame());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        island: frame::IslandScene {
            canvas: island_canvas,
            gpu: island_gpu,
            blocks: island::generate(random_seed()),
        },
        gallery: frame::GalleryScene {
            canvas: gallery_canvas,
            gpu: gallery_gpu,
            images,
            fog_color,
        },
        last_instant: Instant::now(),
        last_stage_shown: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
