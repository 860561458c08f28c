//! Vello backend: renderer calls → `vello::Scene`.
//!
//! The caller presents the scene via wgpu. Text needs a font context and
//! is not shaped here.

use kurbo::{Affine, BezPath, Rect as KurboRect, Stroke};
use peniko::{Color as PenikoColor, Fill};
use seat_core::{AffineTransform, Bounds, Color, Coords, Renderer};
use vello::Scene;

pub struct SceneRenderer {
    scene: Scene,
    transform: Affine,
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            transform: Affine::IDENTITY,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }
}

impl Renderer for SceneRenderer {
    fn clear(&mut self) {
        self.scene.reset();
    }

    fn set_transform(&mut self, transform: &AffineTransform) {
        self.transform = Affine::new(transform.coefficients());
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        let shape = KurboRect::new(
            bounds.x,
            bounds.y,
            bounds.x + bounds.width,
            bounds.y + bounds.height,
        );
        self.scene
            .fill(Fill::NonZero, self.transform, to_peniko(color), None, &shape);
    }

    fn stroke_frame(&mut self, points: &[Coords], color: Color, width: f64) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut path = BezPath::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        if rest.last().is_some_and(|last| last.is_equal(*first)) {
            path.close_path();
        }
        self.scene
            .stroke(&Stroke::new(width), self.transform, to_peniko(color), None, &path);
    }

    fn fill_text(&mut self, text: &str, at: Coords, _color: Color) {
        log::trace!("TEXT {:?} at ({}, {})", text, at.x, at.y);
    }
}

fn to_peniko(color: Color) -> PenikoColor {
    let [r, g, b, a] = color.to_rgba8();
    PenikoColor::from_rgba8(r, g, b, a)
}
