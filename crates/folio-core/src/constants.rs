use glam::Vec3;

// Shared motion/layout tuning constants used by the web frontend.

pub const TAU: f32 = std::f32::consts::TAU;
pub const GOLDEN_RATIO: f32 = 1.618_034;

// ---------------- Orbit navigator ----------------

// Radians added per unit of normalized horizontal drag (delta / viewport width)
pub const DRAG_GAIN: f32 = 0.01 * std::f32::consts::PI;
// Per-frame multiplier applied to the angular velocity while idle
pub const ORBIT_DAMPING: f32 = 0.95;
// Below this magnitude the idle angular velocity snaps to zero
pub const ORBIT_MIN_SPEED: f32 = 0.001;
// Arrow-key step (radians) and the velocity it leaves behind on release
pub const KEY_STEP: f32 = 0.005 * std::f32::consts::PI;
pub const KEY_VELOCITY: f32 = 0.007;

// Island pose on load
pub const ISLAND_INITIAL_YAW: f32 = 4.7077;
pub const ISLAND_POSITION: Vec3 = Vec3::new(0.0, -6.5, -43.0);
pub const ISLAND_TILT: f32 = 0.1;
pub const ISLAND_FOV_Y_DEG: f32 = 45.0;

// Stage windows over the normalized angle, inclusive on both ends
pub const STAGE_INTRO_WINDOW: (f32, f32) = (5.45, 5.85);
pub const STAGE_RESUME_WINDOW: (f32, f32) = (4.25, 4.75);
pub const STAGE_PORTFOLIO_WINDOW: (f32, f32) = (2.4, 2.6);
pub const STAGE_CONTACT_WINDOW: (f32, f32) = (0.85, 1.5);

// ---------------- Frame wall ----------------

// Viewport width breakpoints (CSS px): narrow < MEDIUM <= medium < WIDE <= wide
pub const BREAKPOINT_MEDIUM_PX: f32 = 768.0;
pub const BREAKPOINT_WIDE_PX: f32 = 1024.0;

// Overview camera positions per breakpoint
pub const OVERVIEW_NARROW: Vec3 = Vec3::new(0.0, 0.4, 8.2);
pub const OVERVIEW_MEDIUM: Vec3 = Vec3::new(0.0, 0.2, 6.5);
pub const OVERVIEW_WIDE: Vec3 = Vec3::new(0.0, 0.2, 5.0);

// Distance in front of a focused frame per breakpoint (frame-local +Z)
pub const FOCUS_DISTANCE_NARROW: f32 = 3.0;
pub const FOCUS_DISTANCE_MEDIUM: f32 = 2.5;
pub const FOCUS_DISTANCE_WIDE: f32 = 2.0;

// Whole wall is lowered a little below the camera's eye line
pub const WALL_ORIGIN: Vec3 = Vec3::new(0.0, -0.5, 0.0);

// Camera on first paint, before the smoothing pulls it to the overview
pub const WALL_CAMERA_START: Vec3 = Vec3::new(0.0, 2.0, 15.0);
pub const WALL_FOV_Y_DEG: f32 = 70.0;

// Exponential smoothing time constants (seconds)
pub const CAMERA_TAU_SEC: f32 = 0.4;
pub const FRAME_TAU_SEC: f32 = 0.1;

// Frame geometry (frame-local): hit box of a unit cube scaled and lifted
pub const FRAME_BOX_SCALE: Vec3 = Vec3::new(1.1, GOLDEN_RATIO, 0.05);
pub const FRAME_BOX_OFFSET: Vec3 = Vec3::new(0.0, GOLDEN_RATIO / 2.0, 0.0);

// Image scale inside its frame, and the hover shrink applied on top
pub const IMAGE_BASE_SCALE: Vec3 = Vec3::new(0.85, 0.9, 1.0);
pub const IMAGE_HOVER_SHRINK: Vec3 = Vec3::new(0.85, 0.905, 1.0);

// Breathing zoom: base + amp * sin(phase * PHASE_SPREAD + t / PERIOD), capped
pub const ZOOM_BASE: f32 = 1.4;
pub const ZOOM_AMPLITUDE: f32 = 0.2;
pub const ZOOM_MAX: f32 = 1.5;
pub const ZOOM_PHASE_SPREAD: f32 = 10_000.0;
pub const ZOOM_TIME_DIVISOR: f32 = 5.0;

// Border highlight: HSL hue/lightness swing around a blue base
pub const HIGHLIGHT_HUE: f32 = 0.55;
pub const HIGHLIGHT_LIGHTNESS: f32 = 0.5;
pub const HIGHLIGHT_SWING: f32 = 0.02;
pub const BORDER_NEUTRAL: Vec3 = Vec3::ONE;

// ---------------- Mind map ----------------

pub const MINDMAP_COLUMN_WIDTH: f32 = 220.0;
pub const MINDMAP_ROW_HEIGHT: f32 = 28.0;
pub const MINDMAP_PADDING: f32 = 24.0;
pub const MINDMAP_FONT_PX: f32 = 14.0;
pub const MINDMAP_BRANCH_COLORS: [&str; 6] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#17becf",
];
