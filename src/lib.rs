#![doc = include_str!("../README.md")]

pub mod angle;
pub mod detector;
pub mod export;
pub mod input;
pub mod render;
pub mod segment;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{WallDetector, WallParams};
pub use crate::export::save_walls_json;
pub use crate::segment::Wall;

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::export::save_walls_json;
    pub use crate::input::WallLines;
    pub use crate::render::{CommandRenderer, Renderer};
    pub use crate::{Wall, WallDetector, WallParams};
}
