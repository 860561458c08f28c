pub mod canvas;
pub mod config;
pub mod coords;
pub mod id;
pub mod model;
pub mod transform;

pub use canvas::Renderer;
pub use config::{EngineConfig, Palette, Viewport};
pub use coords::{Area, Coords};
pub use id::{IdAllocator, SeatId};
pub use model::*;
pub use transform::AffineTransform;
