//! Rendering capability consumed by the seat model and the engine.
//!
//! Anything that can fill a rectangle, stroke a polyline and print a line
//! of text can host a seat layout. Geometry arrives in logical space; the
//! renderer maps it to device pixels with the transform most recently
//! passed to `set_transform`.

use crate::coords::Coords;
use crate::model::{Bounds, Color};
use crate::transform::AffineTransform;

pub trait Renderer {
    /// Wipe the whole surface.
    fn clear(&mut self);

    /// Install the logical → device transform for subsequent calls.
    fn set_transform(&mut self, transform: &AffineTransform);

    fn fill_rect(&mut self, bounds: Bounds, color: Color);

    /// Stroke an open or closed polyline (closed when first == last).
    fn stroke_frame(&mut self, points: &[Coords], color: Color, width: f64);

    fn fill_text(&mut self, text: &str, at: Coords, color: Color);
}
