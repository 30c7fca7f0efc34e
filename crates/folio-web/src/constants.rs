//! DOM ids and render tuning for the browser front-end.
//!
//! Motion and layout constants shared with tests live in
//! `folio_core::constants`; this module only holds what the page and the GPU
//! passes need.

// Page chrome
pub const ISLAND_CANVAS_ID: &str = "island-canvas";
pub const GALLERY_CANVAS_ID: &str = "gallery-canvas";
pub const STAGE_PANEL_ID: &str = "stage-panel";
pub const FRAME_CAPTION_ID: &str = "frame-caption";
pub const FRAME_VIDEO_ID: &str = "frame-video";
pub const MINDMAP_VIEW_ID: &str = "mindmap-view";
pub const MINDMAP_COPY_ID: &str = "mindmap-copy";
pub const MINDMAP_EXPORT_ID: &str = "mindmap-export";

// Attribute that marks page sections and in-app links
pub const ROUTE_ATTR: &str = "data-route";
pub const LINK_SELECTOR: &str = "a[data-link]";

// Island scene: sky behind the island, light from the upper left
pub const ISLAND_CLEAR: [f32; 3] = [0.62, 0.80, 0.93];
pub const ISLAND_LIGHT_DIR: [f32; 3] = [-0.4, -1.0, -0.6];

// Gallery scene
pub const GALLERY_FOG_HEX: &str = "#dcdce0";
pub const GALLERY_FOG_NEAR: f32 = 0.0;
pub const GALLERY_FOG_FAR: f32 = 15.0;
pub const GALLERY_LIGHT_DIR: [f32; 3] = [0.2, -1.0, -0.5];
pub const FRAME_BODY_COLOR: [f32; 3] = [0.082, 0.082, 0.082]; // #151515
pub const FLOOR_COLOR: [f32; 3] = [0.02, 0.02, 0.02]; // #050505
pub const FLOOR_SIZE: f32 = 50.0;

// Border box inside the frame body, in hit-box local units
pub const BORDER_SCALE: [f32; 3] = [0.9, 0.93, 0.9];
pub const BORDER_OFFSET_Z: f32 = 0.2;
// Picture plane in front of the border
pub const IMAGE_OFFSET_Z: f32 = 0.7;

// Upper bound on the frame step fed to smoothing after a stalled tab
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
