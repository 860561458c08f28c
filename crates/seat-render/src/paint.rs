//! Seat layout → renderer calls.
//!
//! Every state change repaints the whole layout: clear, fill every live
//! seat (and proposed seats during a draw gesture), then overlays. There
//! is no dirty-rect tracking.

use seat_core::{AffineTransform, Area, Coords, Palette, Rect, Renderer, Seat};

/// Device-space position of the mode label.
const LABEL_ORIGIN: Coords = Coords::new(20.0, 30.0);

/// Transient things drawn on top of the seats.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameOverlay<'a> {
    /// Drag rectangle in logical space.
    pub selection: Option<Area>,
    /// Text for the mode label, if shown.
    pub label: Option<&'a str>,
}

/// Paint one full frame.
///
/// Call once per state change; the renderer is cleared first.
pub fn paint_layout<R: Renderer + ?Sized>(
    renderer: &mut R,
    transform: &AffineTransform,
    seats: &[Seat],
    proposals: &[Rect],
    palette: &Palette,
    overlay: FrameOverlay<'_>,
) {
    transform.reset_for_frame(renderer);

    for seat in seats {
        seat.draw(renderer);
    }
    for rect in proposals {
        renderer.fill_rect(rect.bounds(), palette.proposal);
    }

    paint_overlay(renderer, transform, palette, overlay);
}

/// Selection frame and mode label. Expects the frame's transform to be
/// installed already.
pub fn paint_overlay<R: Renderer + ?Sized>(
    renderer: &mut R,
    transform: &AffineTransform,
    palette: &Palette,
    overlay: FrameOverlay<'_>,
) {
    if let Some(area) = overlay.selection.filter(|a| !a.is_empty()) {
        paint_selection_frame(renderer, &area, palette);
    }
    if let Some(text) = overlay.label {
        paint_label(renderer, transform, text, palette);
    }
}

/// Stroke the outline of a drag area.
pub fn paint_selection_frame<R: Renderer + ?Sized>(renderer: &mut R, area: &Area, palette: &Palette) {
    renderer.stroke_frame(&area.frame_points(), palette.frame, palette.frame_width);
}

/// Draw `text` at a fixed device position, unaffected by pan/zoom.
/// Restores `transform` afterwards.
pub fn paint_label<R: Renderer + ?Sized>(
    renderer: &mut R,
    transform: &AffineTransform,
    text: &str,
    palette: &Palette,
) {
    renderer.set_transform(&AffineTransform::IDENTITY);
    renderer.fill_text(text, LABEL_ORIGIN, palette.label);
    renderer.set_transform(transform);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCall, RecordingRenderer};
    use seat_core::SeatId;

    fn seat(id: u64, x: f64) -> Seat {
        let palette = Palette::default();
        Seat::new(
            SeatId::new(id),
            Rect::new(x, 0.0, 10.0, 10.0, palette.seat, palette.seat_selected),
        )
    }

    #[test]
    fn frame_starts_with_clear_and_transform() {
        let mut r = RecordingRenderer::new();
        let mut t = AffineTransform::IDENTITY;
        t.pan(5.0, 5.0);
        paint_layout(&mut r, &t, &[seat(1, 0.0)], &[], &Palette::default(), FrameOverlay::default());

        assert_eq!(r.calls[0], DrawCall::SetTransform(AffineTransform::IDENTITY));
        assert_eq!(r.calls[1], DrawCall::Clear);
        assert_eq!(r.calls[2], DrawCall::SetTransform(t));
        assert_eq!(r.last_fills().len(), 1);
    }

    #[test]
    fn proposals_painted_after_seats() {
        let mut r = RecordingRenderer::new();
        let palette = Palette::default();
        let proposal = Rect::new(24.0, 0.0, 10.0, 10.0, palette.seat, palette.seat_selected);
        paint_layout(
            &mut r,
            &AffineTransform::IDENTITY,
            &[seat(1, 0.0), seat(2, 12.0)],
            &[proposal],
            &palette,
            FrameOverlay::default(),
        );
        let fills = r.last_fills();
        assert_eq!(fills.len(), 3);
        assert_eq!(fills[2].0.x, 24.0);
        assert_eq!(fills[2].1, palette.proposal);
    }

    #[test]
    fn empty_selection_draws_no_frame() {
        let mut r = RecordingRenderer::new();
        let overlay = FrameOverlay {
            selection: Some(Area::EMPTY),
            label: Some("Mode: Select"),
        };
        paint_layout(&mut r, &AffineTransform::IDENTITY, &[], &[], &Palette::default(), overlay);
        assert!(r.last_frame_stroke().is_none());
        assert_eq!(r.last_text(), Some("Mode: Select"));
    }

    #[test]
    fn label_is_drawn_in_device_space() {
        let mut r = RecordingRenderer::new();
        let t = AffineTransform::scaling(2.0);
        paint_label(&mut r, &t, "Mode: Draw", &Palette::default());
        assert_eq!(r.calls[0], DrawCall::SetTransform(AffineTransform::IDENTITY));
        assert!(matches!(r.calls[1], DrawCall::FillText { at, .. } if at == LABEL_ORIGIN));
        assert_eq!(r.calls[2], DrawCall::SetTransform(t));
    }
}
