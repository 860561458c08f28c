//! Integration tests: seat-core model painted through seat-render.

use pretty_assertions::assert_eq;
use seat_core::{AffineTransform, Area, Coords, Palette, Rect, Renderer, Seat, SeatId};
use seat_render::{
    DrawCall, FrameOverlay, RecordingRenderer, SceneRenderer, hit_test, paint_layout, seats_in_area,
};

fn row(n: u64, step: f64, palette: &Palette) -> Vec<Seat> {
    (0..n)
        .map(|i| {
            let rect = Rect::new(i as f64 * step, 0.0, 10.0, 10.0, palette.seat, palette.seat_selected);
            Seat::new(SeatId::new(i + 1), rect)
        })
        .collect()
}

#[test]
fn frame_call_order() {
    let palette = Palette::default();
    let mut seats = row(2, 12.0, &palette);
    seats[1].set_selected(true);
    let overlay = FrameOverlay {
        selection: Some(Area::from_corners(Coords::new(30.0, 20.0), Coords::new(-2.0, -2.0))),
        label: Some("Mode: Select"),
    };

    let mut r = RecordingRenderer::new();
    let t = AffineTransform::translation(5.0, 5.0);
    paint_layout(&mut r, &t, &seats, &[], &palette, overlay);

    let kinds: Vec<&str> = r
        .calls
        .iter()
        .map(|c| match c {
            DrawCall::Clear => "clear",
            DrawCall::SetTransform(_) => "transform",
            DrawCall::FillRect { .. } => "fill",
            DrawCall::StrokeFrame { .. } => "frame",
            DrawCall::FillText { .. } => "text",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "transform", "clear", "transform", "fill", "fill", "frame", "transform", "text",
            "transform"
        ]
    );

    let fills = r.last_fills();
    assert_eq!(fills[0].1, palette.seat);
    assert_eq!(fills[1].1, palette.seat_selected);
    assert_eq!(r.last_frame_stroke().map(<[Coords]>::len), Some(5));
}

#[test]
fn preview_offset_moves_painted_rect_only() {
    let palette = Palette::default();
    let mut seats = row(1, 12.0, &palette);
    let mut r = RecordingRenderer::new();
    seats[0].rect.move_on(Coords::new(24.0, 0.0), false, &mut r);

    r.reset();
    paint_layout(&mut r, &AffineTransform::IDENTITY, &seats, &[], &palette, FrameOverlay::default());
    assert_eq!(r.last_fills()[0].0.left_top(), Coords::new(24.0, 0.0));
    // hit testing still sees the committed position
    assert_eq!(hit_test(&seats, Coords::new(5.0, 5.0)), Some(SeatId::new(1)));
    assert_eq!(hit_test(&seats, Coords::new(29.0, 5.0)), None);
}

#[test]
fn marquee_picks_whole_seats_only() {
    let palette = Palette::default();
    let seats = row(4, 12.0, &palette);
    let area = Area::from_corners(Coords::new(10.0, -1.0), Coords::new(34.0, 11.0));
    assert_eq!(seats_in_area(&seats, &area), vec![SeatId::new(2), SeatId::new(3)]);
}

#[test]
fn scene_backend_accepts_a_full_frame() {
    let palette = Palette::default();
    let seats = row(3, 12.0, &palette);
    let overlay = FrameOverlay {
        selection: Some(Area::from_corners(Coords::EMPTY, Coords::new(40.0, 12.0))),
        label: Some("Mode: Draw"),
    };
    let mut scene = SceneRenderer::new();
    paint_layout(&mut scene, &AffineTransform::scaling(2.0), &seats, &[], &palette, overlay);
    scene.clear();
    let _ = scene.into_scene();
}
