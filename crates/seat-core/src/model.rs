//! Seat layout data model.
//!
//! A layout is a flat, creation-ordered list of [`Seat`]s. Each seat owns
//! one logical [`Rect`] on the placement grid plus a selection flag and
//! reservation metadata filled in by whatever system sells the seats.
//! Positions are committed explicitly; an in-flight drag is kept as a
//! separate preview offset so nothing has to be rolled back.

use crate::canvas::Renderer;
use crate::coords::{Area, Coords};
use crate::id::SeatId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        )
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();
        let short = |i: usize| hex_val(bytes[i]).map(|v| v * 17);
        let long = |i: usize| Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?);

        let (r, g, b, a) = match bytes.len() {
            3 => (short(0)?, short(1)?, short(2)?, 255),
            4 => (short(0)?, short(1)?, short(2)?, short(3)?),
            6 => (long(0)?, long(2)?, long(4)?, 255),
            8 => (long(0)?, long(2)?, long(4)?, long(6)?),
            _ => return None,
        };
        let mut color = Self::from_rgb8(r, g, b);
        color.a = f32::from(a) / 255.0;
        Some(color)
    }

    /// 8-bit channels, rounded.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Emit as shortest valid hex string (`#RRGGBB` when opaque).
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).ok_or_else(|| D::Error::custom(format!("invalid color {s:?}")))
    }
}

// ─── Bounds ──────────────────────────────────────────────────────────────

/// Plain logical rectangle geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn left_top(&self) -> Coords {
        Coords::new(self.x, self.y)
    }

    pub fn right_bottom(&self) -> Coords {
        Coords::new(self.x + self.width, self.y + self.height)
    }

    pub fn offset(&self, delta: Coords) -> Bounds {
        Bounds {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }
}

// ─── Rect ────────────────────────────────────────────────────────────────

/// A seat's rectangle in logical space, with its two display colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    pub fill: Color,
    pub highlight: Color,
    /// Uncommitted move offset while a group drag is in flight.
    preview: Option<Coords>,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: Color, highlight: Color) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "rect must have positive size");
        Self {
            x,
            y,
            width,
            height,
            fill,
            highlight,
            preview: None,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Committed geometry.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn left_top(&self) -> Coords {
        self.bounds().left_top()
    }

    pub fn right_bottom(&self) -> Coords {
        self.bounds().right_bottom()
    }

    /// Inclusive on all four edges.
    pub fn is_point_inside(&self, p: Coords) -> bool {
        self.left_top().is_before_or_equal(p) && self.right_bottom().is_after_or_equal(p)
    }

    /// Fully contained in `area`; partial overlap does not count.
    pub fn is_inside_area(&self, area: &Area) -> bool {
        self.left_top().is_after_or_equal(area.begin)
            && self.right_bottom().is_before_or_equal(area.end)
    }

    /// Move the committed position onto the exact left-top of its nearest
    /// grid cell, dropping float drift accumulated by moves.
    pub fn snap_to_grid(&mut self, step: f64) {
        let cell = Coords::from_grid_index(self.left_top().grid_index(step), step);
        self.x = cell.x;
        self.y = cell.y;
    }

    pub fn preview_offset(&self) -> Option<Coords> {
        self.preview
    }

    /// Drop any uncommitted offset (the rect snaps back on next draw).
    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Move by `delta` and draw at the new place in the highlight color.
    ///
    /// With `commit == false` only the preview offset changes; the stored
    /// position stays put until a committing call.
    pub fn move_on<R: Renderer + ?Sized>(&mut self, delta: Coords, commit: bool, renderer: &mut R) {
        if commit {
            self.x += delta.x;
            self.y += delta.y;
            self.preview = None;
            renderer.fill_rect(self.bounds(), self.highlight);
        } else {
            self.preview = Some(delta);
            renderer.fill_rect(self.bounds().offset(delta), self.highlight);
        }
    }

    /// Draw at the displayed position: the preview position (highlighted)
    /// while a drag is in flight, otherwise the committed one.
    pub fn draw<R: Renderer + ?Sized>(&self, selected: bool, renderer: &mut R) {
        match self.preview {
            Some(delta) => renderer.fill_rect(self.bounds().offset(delta), self.highlight),
            None => {
                let color = if selected { self.highlight } else { self.fill };
                renderer.fill_rect(self.bounds(), color);
            }
        }
    }
}

// ─── Seat ────────────────────────────────────────────────────────────────

/// Booking metadata. The layout engine never fills this in; the defaults
/// are placeholders until an external system does.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub row_number: u32,
    pub place_in_row_number: u32,
    pub is_reserved: bool,
    pub reserved_by: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    id: SeatId,
    pub rect: Rect,
    selected: bool,
    pub reservation: Reservation,
}

impl Seat {
    pub fn new(id: SeatId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            selected: false,
            reservation: Reservation::default(),
        }
    }

    pub fn id(&self) -> SeatId {
        self.id
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn toggle_select(&mut self) {
        self.selected = !self.selected;
    }

    pub fn left_top(&self) -> Coords {
        self.rect.left_top()
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        self.rect.draw(self.selected, renderer);
    }

    pub fn to_record(&self) -> SeatRecord {
        SeatRecord {
            id: self.id,
            graphical_position: self.left_top(),
            reservation: self.reservation.clone(),
        }
    }
}

// ─── Export ──────────────────────────────────────────────────────────────

/// One seat as exported to consumers of the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRecord {
    pub id: SeatId,
    pub graphical_position: Coords,
    #[serde(flatten)]
    pub reservation: Reservation,
}

/// `{ "seats": [...] }` in layout order. No schema version.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutExport {
    pub seats: Vec<SeatRecord>,
}

impl LayoutExport {
    pub fn from_seats<'a>(seats: impl IntoIterator<Item = &'a Seat>) -> Self {
        Self {
            seats: seats.into_iter().map(Seat::to_record).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Fills(Vec<(Bounds, Color)>);

    impl Renderer for Fills {
        fn clear(&mut self) {
            self.0.clear();
        }
        fn set_transform(&mut self, _: &crate::transform::AffineTransform) {}
        fn fill_rect(&mut self, bounds: Bounds, color: Color) {
            self.0.push((bounds, color));
        }
        fn stroke_frame(&mut self, _: &[Coords], _: Color, _: f64) {}
        fn fill_text(&mut self, _: &str, _: Coords, _: Color) {}
    }

    fn green() -> Color {
        Color::from_hex("#008000").unwrap()
    }

    fn mint() -> Color {
        Color::from_hex("#66FF99").unwrap()
    }

    fn rect(x: f64, y: f64) -> Rect {
        Rect::new(x, y, 10.0, 10.0, green(), mint())
    }

    #[test]
    fn hex_roundtrip() {
        assert_eq!(Color::from_hex("#66ff99").unwrap().to_hex(), "#66FF99");
        assert_eq!(Color::from_hex("#0F08").unwrap().to_hex(), "#00FF0088");
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#GG0000").is_none());
    }

    #[test]
    fn point_inside_is_inclusive_on_edges() {
        let r = rect(10.0, 10.0);
        assert!(r.is_point_inside(Coords::new(10.0, 10.0)));
        assert!(r.is_point_inside(Coords::new(20.0, 20.0)));
        assert!(r.is_point_inside(Coords::new(20.0, 10.0)));
        assert!(!r.is_point_inside(Coords::new(20.01, 15.0)));
        assert!(!r.is_point_inside(Coords::new(15.0, 9.99)));
    }

    #[test]
    fn inside_area_requires_full_containment() {
        let r = rect(10.0, 10.0);
        let exact = Area::from_corners(Coords::new(10.0, 10.0), Coords::new(20.0, 20.0));
        let partial = Area::from_corners(Coords::new(0.0, 0.0), Coords::new(15.0, 25.0));
        assert!(r.is_inside_area(&exact));
        assert!(!r.is_inside_area(&partial));
    }

    #[test]
    fn preview_move_does_not_change_position() {
        let mut r = rect(0.0, 0.0);
        let mut out = Fills::default();
        r.move_on(Coords::new(12.0, 0.0), false, &mut out);
        assert_eq!(r.left_top(), Coords::EMPTY);
        assert_eq!(r.preview_offset(), Some(Coords::new(12.0, 0.0)));
        assert_eq!(out.0[0].0.left_top(), Coords::new(12.0, 0.0));
        assert_eq!(out.0[0].1, mint());

        r.clear_preview();
        assert_eq!(r.preview_offset(), None);
    }

    #[test]
    fn committed_move_updates_position() {
        let mut r = rect(0.0, 0.0);
        let mut out = Fills::default();
        r.move_on(Coords::new(12.0, 24.0), false, &mut out);
        r.move_on(Coords::new(12.0, 24.0), true, &mut out);
        assert_eq!(r.left_top(), Coords::new(12.0, 24.0));
        assert_eq!(r.preview_offset(), None);
    }

    #[test]
    fn draw_uses_highlight_when_selected() {
        let mut seat = Seat::new(SeatId::new(1), rect(0.0, 0.0));
        let mut out = Fills::default();
        seat.draw(&mut out);
        seat.toggle_select();
        seat.draw(&mut out);
        assert_eq!(out.0[0].1, green());
        assert_eq!(out.0[1].1, mint());
    }

    #[test]
    fn record_uses_placeholder_reservation() {
        let seat = Seat::new(SeatId::new(7), rect(24.0, 36.0));
        let value = serde_json::to_value(seat.to_record()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "7",
                "graphicalPosition": { "x": 24.0, "y": 36.0 },
                "rowNumber": 0,
                "placeInRowNumber": 0,
                "isReserved": false,
                "reservedBy": ""
            })
        );
    }
}
