//! Canvas2D renderer.
//!
//! Forwards the engine's draw calls to an HTML `<canvas>` via
//! `CanvasRenderingContext2d`.

use seat_core::{AffineTransform, Bounds, Color, Coords, Renderer};
use web_sys::CanvasRenderingContext2d;

const LABEL_FONT: &str = "italic 30px Arial";

pub struct Canvas2dRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Canvas2dRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }

    /// Track the surface size so `clear` wipes all of it.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl Renderer for Canvas2dRenderer {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn set_transform(&mut self, transform: &AffineTransform) {
        let [a, b, c, d, e, f] = transform.coefficients();
        if let Err(err) = self.ctx.set_transform(a, b, c, d, e, f) {
            log::warn!("canvas setTransform failed: {err:?}");
        }
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx
            .fill_rect(bounds.x, bounds.y, bounds.width, bounds.height);
    }

    fn stroke_frame(&mut self, points: &[Coords], color: Color, width: f64) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.set_stroke_style_str(&color.to_hex());
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, at: Coords, color: Color) {
        self.ctx.set_font(LABEL_FONT);
        self.ctx.set_fill_style_str(&color.to_hex());
        let _ = self.ctx.fill_text(text, at.x, at.y);
    }
}
