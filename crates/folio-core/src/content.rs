//! Site content bundled into the binary.

use crate::error::Result;
use crate::wall::FrameSpec;

/// Frames shown on the gallery wall, in display order.
pub const GALLERY_JSON: &str = include_str!("../assets/gallery.json");

/// Markdown source of the tools mind map.
pub const MIND_MAP_URL: &str =
    "https://raw.githubusercontent.com/lennonkc/ai-tools-map/refs/heads/main/test.md";

pub fn default_frames() -> Result<Vec<FrameSpec>> {
    Ok(serde_json::from_str(GALLERY_JSON)?)
}
