//! Headless renderer that records the call stream.
//!
//! Hosts without a surface (tests, server-side validation) drive the
//! engine through this and inspect what would have been painted.

use seat_core::{AffineTransform, Bounds, Color, Coords, Renderer};
use smallvec::SmallVec;

/// One renderer call, as issued.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    SetTransform(AffineTransform),
    FillRect {
        bounds: Bounds,
        color: Color,
    },
    StrokeFrame {
        points: SmallVec<[Coords; 5]>,
        color: Color,
        width: f64,
    },
    FillText {
        text: String,
        at: Coords,
        color: Color,
    },
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `clear()` calls seen, i.e. full redraws.
    pub fn frame_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear))
            .count()
    }

    /// Calls issued since the most recent `clear()`.
    pub fn last_frame(&self) -> &[DrawCall] {
        match self.calls.iter().rposition(|c| matches!(c, DrawCall::Clear)) {
            Some(i) => &self.calls[i + 1..],
            None => &self.calls,
        }
    }

    /// Rect fills of the last frame.
    pub fn last_fills(&self) -> Vec<(Bounds, Color)> {
        self.last_frame()
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillRect { bounds, color } => Some((*bounds, *color)),
                _ => None,
            })
            .collect()
    }

    /// The selection frame stroked in the last frame, if any.
    pub fn last_frame_stroke(&self) -> Option<&[Coords]> {
        self.last_frame().iter().find_map(|c| match c {
            DrawCall::StrokeFrame { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn last_text(&self) -> Option<&str> {
        self.last_frame().iter().rev().find_map(|c| match c {
            DrawCall::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn set_transform(&mut self, transform: &AffineTransform) {
        self.calls.push(DrawCall::SetTransform(*transform));
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.calls.push(DrawCall::FillRect { bounds, color });
    }

    fn stroke_frame(&mut self, points: &[Coords], color: Color, width: f64) {
        self.calls.push(DrawCall::StrokeFrame {
            points: SmallVec::from_slice(points),
            color,
            width,
        });
    }

    fn fill_text(&mut self, text: &str, at: Coords, color: Color) {
        self.calls.push(DrawCall::FillText {
            text: text.to_string(),
            at,
            color,
        });
    }
}
