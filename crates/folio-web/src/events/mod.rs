pub mod gallery;
pub mod island;

pub use gallery::wire_gallery_input;
pub use island::wire_island_input;
