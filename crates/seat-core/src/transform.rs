//! Pan/zoom transform between logical seat space and device pixels.
//!
//! `AffineTransform` is a plain 2×3 matrix value `[a, b, c, d, e, f]`
//! mapping a logical point to device space:
//!
//! ```text
//! device.x = a·x + c·y + e
//! device.y = b·x + d·y + f
//! ```
//!
//! It has no dependency on any graphics API so the interaction engine can
//! be tested without a drawing surface. Renderers receive the matrix via
//! [`Renderer::set_transform`](crate::canvas::Renderer::set_transform).

use crate::canvas::Renderer;
use crate::coords::Coords;
use serde::{Deserialize, Serialize};

/// A composable 2D affine transform (translate + uniform scale in practice).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: dx,
            f: dy,
        }
    }

    pub const fn scaling(factor: f64) -> Self {
        Self {
            a: factor,
            b: 0.0,
            c: 0.0,
            d: factor,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Coefficients in canvas `setTransform(a, b, c, d, e, f)` order.
    pub fn coefficients(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Matrix product `self · other`: `other` is applied first.
    pub fn compose(&self, other: &AffineTransform) -> AffineTransform {
        AffineTransform {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Inverse matrix, or `None` if the transform is singular.
    pub fn invert(&self) -> Option<AffineTransform> {
        let det = self.a * self.d - self.b * self.c;
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(AffineTransform {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }

    /// Map a logical point to device space.
    pub fn apply(&self, p: Coords) -> Coords {
        Coords::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Uniform scale factor currently in effect.
    pub fn scale_factor(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    // ─── Mutating operations ─────────────────────────────────────────────

    /// Append a translation in logical units (applied before the current
    /// transform, like `ctx.translate`).
    pub fn translate(&mut self, dx: f64, dy: f64) {
        *self = self.compose(&AffineTransform::translation(dx, dy));
    }

    /// Append a uniform scale.
    pub fn scale(&mut self, factor: f64) {
        *self = self.compose(&AffineTransform::scaling(factor));
    }

    /// Shift the whole view by a device-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        *self = AffineTransform::translation(dx, dy).compose(self);
    }

    /// Zoom by `factor` about a device-space pivot.
    ///
    /// The pivot is taken into logical space, moved to the origin, scaled,
    /// and moved back, so the pivot's device position does not change.
    pub fn zoom(&mut self, factor: f64, pivot: Coords) {
        let pt = self.to_logical(pivot.x, pivot.y);
        self.translate(pt.x, pt.y);
        self.scale(factor);
        self.translate(-pt.x, -pt.y);
    }

    /// Convert a device (pointer) position into logical seat space.
    pub fn to_logical(&self, device_x: f64, device_y: f64) -> Coords {
        match self.invert() {
            Some(inv) => inv.apply(Coords::new(device_x, device_y)),
            None => {
                log::warn!("singular view transform {self:?}; using device coords as-is");
                Coords::new(device_x, device_y)
            }
        }
    }

    /// Prepare a renderer for a new frame: clear the whole surface in
    /// device space, then install this transform for the draw calls that
    /// follow.
    pub fn reset_for_frame<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.set_transform(&AffineTransform::IDENTITY);
        renderer.clear();
        renderer.set_transform(self);
    }

    /// Component-wise comparison within `eps`.
    pub fn approx_eq(&self, other: &AffineTransform, eps: f64) -> bool {
        self.coefficients()
            .iter()
            .zip(other.coefficients().iter())
            .all(|(l, r)| (l - r).abs() <= eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Coords, b: Coords) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn identity_maps_points_unchanged() {
        let p = Coords::new(12.5, -4.0);
        assert_eq!(AffineTransform::IDENTITY.apply(p), p);
        assert_eq!(AffineTransform::IDENTITY.to_logical(12.5, -4.0), p);
    }

    #[test]
    fn translate_then_to_logical() {
        let mut t = AffineTransform::IDENTITY;
        t.translate(10.0, 20.0);
        assert!(close(t.apply(Coords::EMPTY), Coords::new(10.0, 20.0)));
        assert!(close(t.to_logical(10.0, 20.0), Coords::EMPTY));
    }

    #[test]
    fn compose_applies_right_operand_first() {
        let s = AffineTransform::scaling(2.0);
        let t = AffineTransform::translation(5.0, 0.0);
        // scale after translate: (1 + 5) * 2
        let p = s.compose(&t).apply(Coords::new(1.0, 0.0));
        assert!(close(p, Coords::new(12.0, 0.0)));
    }

    #[test]
    fn invert_roundtrip() {
        let mut t = AffineTransform::IDENTITY;
        t.translate(3.0, -7.0);
        t.scale(1.5);
        let inv = t.invert().unwrap();
        assert!(t.compose(&inv).approx_eq(&AffineTransform::IDENTITY, EPS));
    }

    #[test]
    fn singular_transform_has_no_inverse() {
        assert!(AffineTransform::scaling(0.0).invert().is_none());
    }

    #[test]
    fn zoom_keeps_pivot_fixed() {
        let mut t = AffineTransform::IDENTITY;
        t.pan(40.0, 15.0);
        let pivot = Coords::new(400.0, 300.0);
        let before = t.to_logical(pivot.x, pivot.y);
        t.zoom(1.1, pivot);
        let after = t.to_logical(pivot.x, pivot.y);
        assert!(close(before, after));
        assert!((t.scale_factor() - 1.1).abs() < EPS);
    }

    #[test]
    fn zoom_in_then_out_restores_transform() {
        let mut t = AffineTransform::IDENTITY;
        t.pan(-25.0, 60.0);
        let original = t;
        let pivot = Coords::new(400.0, 300.0);
        t.zoom(1.1, pivot);
        t.zoom(1.0 / 1.1, pivot);
        assert!(t.approx_eq(&original, 1e-9));
    }

    #[test]
    fn pan_moves_in_device_units_regardless_of_scale() {
        let mut t = AffineTransform::scaling(2.0);
        t.pan(10.0, 0.0);
        let p = t.apply(Coords::new(1.0, 1.0));
        assert!(close(p, Coords::new(12.0, 2.0)));
    }
}
