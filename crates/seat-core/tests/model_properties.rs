//! Integration tests: geometry properties of the seat model.
//!
//! Sweeps points and areas around a fixed rectangle instead of spot
//! checks, so edge inclusivity and containment are pinned down.

use seat_core::{AffineTransform, Area, Color, Coords, LayoutExport, Rect, Seat, SeatId};

fn rect_at(x: f64, y: f64) -> Rect {
    Rect::new(
        x,
        y,
        10.0,
        10.0,
        Color::from_rgb8(0, 128, 0),
        Color::from_rgb8(0x66, 0xFF, 0x99),
    )
}

// ─── Hit testing ────────────────────────────────────────────────────────

#[test]
fn point_inside_matches_inclusive_bounds_everywhere() {
    let r = rect_at(20.0, 30.0);
    for ix in 0..=50 {
        for iy in 0..=50 {
            let p = Coords::new(f64::from(ix), f64::from(iy));
            let expected = (20.0..=30.0).contains(&p.x) && (30.0..=40.0).contains(&p.y);
            assert_eq!(r.is_point_inside(p), expected, "point {p:?}");
        }
    }
}

#[test]
fn inside_area_iff_both_corners_bounded() {
    let r = rect_at(20.0, 20.0);
    let edges = [0.0, 15.0, 20.0, 25.0, 30.0, 35.0, 50.0];
    for &bx in &edges {
        for &by in &edges {
            for &ex in &edges {
                for &ey in &edges {
                    let area = Area::from_corners(Coords::new(bx, by), Coords::new(ex, ey));
                    let expected = r.left_top().is_after_or_equal(area.begin)
                        && r.right_bottom().is_before_or_equal(area.end);
                    assert_eq!(r.is_inside_area(&area), expected, "area {area:?}");
                }
            }
        }
    }
}

#[test]
fn partial_overlap_is_not_inside() {
    let r = rect_at(0.0, 0.0);
    let area = Area::from_corners(Coords::new(5.0, -5.0), Coords::new(50.0, 50.0));
    assert!(!r.is_inside_area(&area));
}

// ─── Transform ──────────────────────────────────────────────────────────

#[test]
fn logical_point_survives_zoom_roundtrip() {
    let mut t = AffineTransform::IDENTITY;
    t.pan(13.0, -8.0);
    let pivot = Coords::new(400.0, 300.0);
    let device = Coords::new(123.0, 456.0);
    let before = t.to_logical(device.x, device.y);

    t.zoom(1.1, pivot);
    t.zoom(1.0 / 1.1, pivot);

    let after = t.to_logical(device.x, device.y);
    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);
}

#[test]
fn repeated_zoom_accumulates_multiplicatively() {
    let mut t = AffineTransform::IDENTITY;
    let pivot = Coords::new(0.0, 0.0);
    for _ in 0..5 {
        t.zoom(1.1, pivot);
    }
    assert!((t.scale_factor() - 1.1f64.powi(5)).abs() < 1e-9);
    for _ in 0..5 {
        t.zoom(1.0 / 1.1, pivot);
    }
    assert!(t.approx_eq(&AffineTransform::IDENTITY, 1e-9));
}

// ─── Export ─────────────────────────────────────────────────────────────

#[test]
fn export_keeps_seat_order() {
    let seats = vec![
        Seat::new(SeatId::new(2), rect_at(10.0, 0.0)),
        Seat::new(SeatId::new(1), rect_at(0.0, 0.0)),
    ];
    let export = LayoutExport::from_seats(&seats);
    let ids: Vec<String> = export.seats.iter().map(|s| s.id.to_string()).collect();
    assert_eq!(ids, ["2", "1"]);

    let json = export.to_json().unwrap();
    let back: LayoutExport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, export);
}
