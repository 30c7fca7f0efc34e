pub mod color;
pub mod constants;
pub mod content;
pub mod easing;
pub mod error;
pub mod island;
pub mod mindmap;
pub mod orbit;
pub mod route;
pub mod stage;
pub mod state;
pub mod wall;

pub use error::{FolioError, Result};
pub use mindmap::MindMapViewer;
pub use orbit::{OrbitNavigator, TurnKey};
pub use route::Route;
pub use stage::{Stage, StagePanel};
pub use state::*;
pub use wall::FrameWall;
