//! Logical-space points and areas.
//!
//! `Coords` is an immutable 2D value. All comparisons are component-wise:
//! `is_after_or_equal` / `is_before_or_equal` answer "does this point lie
//! beyond / within another on *both* axes", which is what bounding-box
//! containment needs. They are not a total order.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use std::ops::{Add, Sub};

/// A point (or vector) in logical seat space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
}

impl Coords {
    /// The origin. Also used as the "cleared selection" sentinel.
    pub const EMPTY: Coords = Coords { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `self.x >= p.x && self.y >= p.y`
    pub fn is_after_or_equal(&self, point: Coords) -> bool {
        self.x >= point.x && self.y >= point.y
    }

    /// `self.x <= p.x && self.y <= p.y`
    pub fn is_before_or_equal(&self, point: Coords) -> bool {
        self.x <= point.x && self.y <= point.y
    }

    /// Exact component equality. Grid cells are compared with this.
    pub fn is_equal(&self, point: Coords) -> bool {
        self.x == point.x && self.y == point.y
    }

    pub fn is_zero(&self) -> bool {
        self.is_equal(Self::EMPTY)
    }

    /// Snap each component to the nearest multiple of `scale`.
    pub fn round_to_scale(&self, scale: f64) -> Coords {
        Coords::new(
            (self.x / scale).round() * scale,
            (self.y / scale).round() * scale,
        )
    }

    /// Index of the grid cell whose left-top is nearest to this point.
    ///
    /// Two positions name the same cell iff their indices match, however
    /// the floats were accumulated.
    pub fn grid_index(&self, step: f64) -> (i64, i64) {
        ((self.x / step).round() as i64, (self.y / step).round() as i64)
    }

    /// Exact left-top of grid cell `index`.
    pub fn from_grid_index(index: (i64, i64), step: f64) -> Coords {
        Coords::new(index.0 as f64 * step, index.1 as f64 * step)
    }

    pub fn same_cell(&self, other: Coords, step: f64) -> bool {
        self.grid_index(step) == other.grid_index(step)
    }

    pub fn min(self, other: Coords) -> Coords {
        Coords::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Coords) -> Coords {
        Coords::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for Coords {
    type Output = Coords;

    fn add(self, rhs: Coords) -> Coords {
        Coords::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coords {
    type Output = Coords;

    fn sub(self, rhs: Coords) -> Coords {
        Coords::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Slack, in cells, absorbed when snapping a drag corner down so that a
/// value like `0.3 / 0.1 = 2.9999999999999996` lands in cell 3.
const GRID_EPSILON: f64 = 1e-9;

// ─── Area ────────────────────────────────────────────────────────────────

/// An axis-aligned logical rectangle used for drag-selection and deletion.
///
/// Always normalized: `begin.x <= end.x && begin.y <= end.y`. Build one
/// with [`Area::from_corners`] to get that for free.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Area {
    pub begin: Coords,
    pub end: Coords,
}

impl Area {
    pub const EMPTY: Area = Area {
        begin: Coords::EMPTY,
        end: Coords::EMPTY,
    };

    /// Normalize two arbitrary drag endpoints into an area.
    pub fn from_corners(a: Coords, b: Coords) -> Self {
        Self {
            begin: a.min(b),
            end: a.max(b),
        }
    }

    pub fn width(&self) -> f64 {
        self.end.x - self.begin.x
    }

    pub fn height(&self) -> f64 {
        self.end.y - self.begin.y
    }

    /// True for a degenerate (zero-width or zero-height) area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Grid cells covered by the area, stepped by `step`.
    ///
    /// Both corners snap down to the grid; the cell holding `end` is
    /// excluded. Scan order is outer loop over x, inner over y. Positions
    /// are built from the cell index, so a cell always gets the same
    /// coordinates whichever area produced it.
    pub fn grid_cells(&self, step: f64) -> Vec<Coords> {
        let mut cells = Vec::new();
        if step <= 0.0 {
            return cells;
        }
        let floor = |v: f64| (v / step + GRID_EPSILON).floor() as i64;
        let (x0, x1) = (floor(self.begin.x), floor(self.end.x));
        let (y0, y1) = (floor(self.begin.y), floor(self.end.y));
        for i in x0..x1 {
            for j in y0..y1 {
                cells.push(Coords::from_grid_index((i, j), step));
            }
        }
        cells
    }

    /// Closed polyline around the area, for a selection frame stroke.
    pub fn frame_points(&self) -> SmallVec<[Coords; 5]> {
        let (b, e) = (self.begin, self.end);
        smallvec![
            b,
            Coords::new(e.x, b.y),
            e,
            Coords::new(b.x, e.y),
            b,
        ]
    }
}
