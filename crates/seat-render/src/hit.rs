//! Hit testing: point → seat, area → seats, cell → occupant.
//!
//! Seats are painted in creation order, so the last seat in the slice is
//! the topmost one and wins a point hit.

use seat_core::{Area, Coords, Seat, SeatId};

/// Find the topmost seat under logical point `p`.
/// Returns `None` if only background is hit.
pub fn hit_test(seats: &[Seat], p: Coords) -> Option<SeatId> {
    seats
        .iter()
        .rev()
        .find(|seat| seat.rect.is_point_inside(p))
        .map(Seat::id)
}

/// All seats fully contained in `area`, in layout order.
/// Used for marquee selection and area deletion.
pub fn seats_in_area(seats: &[Seat], area: &Area) -> Vec<SeatId> {
    seats
        .iter()
        .filter(|seat| seat.rect.is_inside_area(area))
        .map(Seat::id)
        .collect()
}

/// The seat occupying grid cell `cell` on a `step` grid, if any.
pub fn occupant_at(seats: &[Seat], cell: Coords, step: f64) -> Option<SeatId> {
    seats
        .iter()
        .find(|seat| seat.left_top().same_cell(cell, step))
        .map(Seat::id)
}

/// Every seat under `p`, bottom to top. Seats packed edge to edge share
/// their border, so a point there lies in more than one.
pub fn seats_at(seats: &[Seat], p: Coords) -> impl Iterator<Item = &Seat> {
    seats.iter().filter(move |seat| seat.rect.is_point_inside(p))
}
