//! Seat selection engine.
//!
//! `SeatSelector` owns the seat collection, the view transform and the
//! mode state machine. Gesture handlers run to completion one at a time;
//! each converts device coordinates to logical space first, mutates state
//! according to the current [`Mode`], repaints the whole layout, and
//! returns an [`Outcome`] describing what happened.
//!
//! ## Gestures per mode
//!
//! | Mode | drag-move | drag-end | tap |
//! |------|-----------|----------|-----|
//! | **Draw** | propose a grid of seats | commit proposals | |
//! | **Select** | selection frame | toggle seats inside frame | toggle seat |
//! | **DragSeats** | preview group move | commit or reject move | |
//! | **Delete** | selection frame | delete seats inside frame | delete seat |
//! | **DragCanvas** | pan view | | |

use crate::input::{GestureEvent, Modifiers};
use crate::mode::Mode;
use seat_core::{
    AffineTransform, Area, Coords, EngineConfig, IdAllocator, LayoutExport, Rect, Renderer,
    Reservation, Seat, SeatId, Viewport,
};
use seat_render::{
    FrameOverlay, hit_test, occupant_at, paint_layout, paint_overlay, seats_at, seats_in_area,
};

/// What a call into the engine did.
///
/// Policy decisions that are silent on screen (busy cells skipped while
/// drawing, a group move refused because of a collision) are reported
/// here.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No state changed.
    Nothing,
    /// Only transient visuals changed (gesture started, frame resized).
    Redrawn,
    /// Draw gesture in progress. `skipped` cells were already occupied.
    SeatsProposed { proposed: usize, skipped: usize },
    SeatsCreated { ids: Vec<SeatId>, skipped: usize },
    SelectionToggled { ids: Vec<SeatId> },
    MovePreviewed { delta: Coords },
    MoveCommitted { delta: Coords, moved: Vec<SeatId> },
    /// Group move refused: a selected seat would land on `blocked_by`.
    MoveRejected { delta: Coords, blocked_by: SeatId },
    SeatsDeleted { ids: Vec<SeatId> },
    CanvasPanned { dx: f64, dy: f64 },
    Zoomed { scale: f64 },
    ModeChanged { from: Mode, to: Mode },
}

impl Outcome {
    /// True if the persistent layout (seats, positions, selection) changed.
    pub fn changed_layout(&self) -> bool {
        match self {
            Outcome::SeatsCreated { ids, .. }
            | Outcome::SelectionToggled { ids }
            | Outcome::SeatsDeleted { ids } => !ids.is_empty(),
            Outcome::MoveCommitted { moved, .. } => !moved.is_empty(),
            _ => false,
        }
    }
}

pub struct SeatSelector<R: Renderer> {
    config: EngineConfig,
    renderer: R,
    /// Live seats in creation order.
    seats: Vec<Seat>,
    /// Seats proposed by the draw gesture in flight. Rebuilt on every move.
    new_seats: Vec<Rect>,
    skipped_cells: usize,
    selected_area: Area,
    drag_start: Coords,
    drag_end: Coords,
    /// Device position of the previous move event, for canvas panning.
    last_device: Coords,
    dragging: bool,
    mode: Mode,
    /// Mode to return to when a transient mode (DragSeats, DragCanvas) ends.
    resume_mode: Option<Mode>,
    ids: IdAllocator,
    transform: AffineTransform,
}

impl<R: Renderer> SeatSelector<R> {
    /// Create an engine drawing to `renderer`.
    ///
    /// # Errors
    /// Returns the validation message if `config` is unusable.
    pub fn new(renderer: R, config: EngineConfig) -> Result<Self, String> {
        config.validate()?;
        let mut engine = Self {
            config,
            renderer,
            seats: Vec::new(),
            new_seats: Vec::new(),
            skipped_cells: 0,
            selected_area: Area::EMPTY,
            drag_start: Coords::EMPTY,
            drag_end: Coords::EMPTY,
            last_device: Coords::EMPTY,
            dragging: false,
            mode: Mode::Draw,
            resume_mode: None,
            ids: IdAllocator::new(),
            transform: AffineTransform::IDENTITY,
        };
        log::debug!(
            "seat selector ready: seat {} on grid {}",
            engine.config.seat_size,
            engine.config.place_size
        );
        engine.render();
        Ok(engine)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id() == id)
    }

    /// Seats proposed by the draw gesture in flight (not yet committed).
    pub fn proposed_seats(&self) -> &[Rect] {
        &self.new_seats
    }

    pub fn selected_ids(&self) -> Vec<SeatId> {
        self.seats
            .iter()
            .filter(|s| s.is_selected())
            .map(Seat::id)
            .collect()
    }

    /// Current drag rectangle in logical space.
    pub fn selected_area(&self) -> Area {
        self.selected_area
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn transform(&self) -> &AffineTransform {
        &self.transform
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    // ─── Gesture entry points ────────────────────────────────────────────

    /// Dispatch one gesture event.
    pub fn handle(&mut self, event: &GestureEvent) -> Outcome {
        match *event {
            GestureEvent::DragStart { x, y, modifiers } => self.drag_start(x, y, modifiers),
            GestureEvent::DragMove { x, y } => self.drag_move(x, y),
            GestureEvent::DragEnd => self.drag_end(),
            GestureEvent::Tap { x, y } => self.tap(x, y),
            GestureEvent::Leave => {
                if self.dragging {
                    log::debug!("pointer left surface mid-drag; ending gesture");
                    self.drag_end()
                } else {
                    Outcome::Nothing
                }
            }
        }
    }

    pub fn drag_start(&mut self, x: f64, y: f64, modifiers: Modifiers) -> Outcome {
        if self.dragging {
            log::warn!("drag start while a drag is in flight; ending previous gesture");
            self.drag_end();
        }

        let p = self.transform.to_logical(x, y);
        self.dragging = true;
        self.drag_start = p;
        self.drag_end = p;
        self.last_device = Coords::new(x, y);
        self.selected_area = Area::from_corners(p, p);

        match self.mode {
            Mode::Draw => {
                if !modifiers.shift {
                    self.seats.iter_mut().for_each(|s| s.set_selected(false));
                }
            }
            Mode::Select => {
                // on a shared edge any selected neighbour counts
                if let Some(seat) = seats_at(&self.seats, p).find(|s| s.is_selected()) {
                    log::debug!("drag started on selected seat {}; dragging seats", seat.id());
                    self.resume_mode = Some(Mode::Select);
                    self.mode = Mode::DragSeats;
                }
            }
            Mode::Delete | Mode::DragSeats | Mode::DragCanvas => {}
        }

        log::trace!("drag start at {p:?} in {:?}", self.mode);
        self.render();
        Outcome::Redrawn
    }

    pub fn drag_move(&mut self, x: f64, y: f64) -> Outcome {
        if !self.dragging {
            log::warn!("drag move with no drag in flight; ignored");
            return Outcome::Nothing;
        }

        if self.mode == Mode::DragCanvas {
            let dx = x - self.last_device.x;
            let dy = y - self.last_device.y;
            self.last_device = Coords::new(x, y);
            self.transform.pan(dx, dy);
            self.render();
            return Outcome::CanvasPanned { dx, dy };
        }

        self.last_device = Coords::new(x, y);
        self.drag_end = self.transform.to_logical(x, y);
        self.selected_area = Area::from_corners(self.drag_start, self.drag_end);

        match self.mode {
            Mode::Draw => {
                self.propose_seats();
                self.render();
                Outcome::SeatsProposed {
                    proposed: self.new_seats.len(),
                    skipped: self.skipped_cells,
                }
            }
            Mode::DragSeats => {
                let delta = self.move_vector();
                self.preview_group_move(delta);
                Outcome::MovePreviewed { delta }
            }
            Mode::Select | Mode::Delete | Mode::DragCanvas => {
                self.render();
                Outcome::Redrawn
            }
        }
    }

    pub fn drag_end(&mut self) -> Outcome {
        if !self.dragging {
            log::warn!("drag end with no drag in flight; ignored");
            return Outcome::Nothing;
        }
        self.dragging = false;
        let area = self.selected_area;

        let outcome = match self.mode {
            Mode::Draw => self.commit_proposals(),
            Mode::Select => {
                let ids = seats_in_area(&self.seats, &area);
                for seat in self.seats.iter_mut().filter(|s| ids.contains(&s.id())) {
                    seat.toggle_select();
                }
                Outcome::SelectionToggled { ids }
            }
            Mode::Delete => Outcome::SeatsDeleted {
                ids: self.remove_where(|s| s.rect.is_inside_area(&area)),
            },
            Mode::DragSeats => {
                let outcome = self.finish_group_move();
                self.mode = Mode::Select;
                self.resume_mode = None;
                outcome
            }
            Mode::DragCanvas => Outcome::Nothing,
        };

        log::debug!("drag end in {:?}: {outcome:?}", self.mode);
        self.selected_area = Area::EMPTY;
        self.render();
        outcome
    }

    pub fn tap(&mut self, x: f64, y: f64) -> Outcome {
        let p = self.transform.to_logical(x, y);
        let Some(id) = hit_test(&self.seats, p) else {
            return Outcome::Nothing;
        };

        let outcome = match self.mode {
            Mode::Select => {
                if let Some(seat) = self.seats.iter_mut().find(|s| s.id() == id) {
                    seat.toggle_select();
                }
                Outcome::SelectionToggled { ids: vec![id] }
            }
            Mode::Delete => Outcome::SeatsDeleted {
                ids: self.remove_where(|s| s.id() == id),
            },
            Mode::Draw | Mode::DragSeats | Mode::DragCanvas => return Outcome::Nothing,
        };
        self.render();
        outcome
    }

    // ─── Mode control ────────────────────────────────────────────────────

    /// Switch to a user-selectable mode. Internal modes are refused.
    ///
    /// A gesture in flight is abandoned without committing anything.
    pub fn change_mode(&mut self, mode: Mode) -> Outcome {
        if !mode.is_external() {
            log::warn!("refusing external request for internal mode {mode:?}");
            return Outcome::Nothing;
        }
        if self.dragging {
            self.abandon_gesture();
        }
        let from = self.mode;
        self.mode = mode;
        self.resume_mode = None;
        self.selected_area = Area::EMPTY;
        log::debug!("mode {from:?} -> {mode:?}");
        self.render();
        Outcome::ModeChanged { from, to: mode }
    }

    /// Enter canvas panning (pan key pressed). Refused mid-gesture.
    pub fn begin_canvas_pan(&mut self) -> Outcome {
        if self.mode == Mode::DragCanvas || self.dragging {
            return Outcome::Nothing;
        }
        let from = self.mode;
        self.resume_mode = Some(from);
        self.mode = Mode::DragCanvas;
        self.render();
        Outcome::ModeChanged {
            from,
            to: Mode::DragCanvas,
        }
    }

    /// Leave canvas panning (pan key released) and restore the prior mode.
    pub fn end_canvas_pan(&mut self) -> Outcome {
        if self.mode != Mode::DragCanvas {
            return Outcome::Nothing;
        }
        self.dragging = false;
        let to = self.resume_mode.take().unwrap_or_default();
        self.mode = to;
        self.render();
        Outcome::ModeChanged {
            from: Mode::DragCanvas,
            to,
        }
    }

    // ─── Zoom / viewport ─────────────────────────────────────────────────

    pub fn scale_up(&mut self) -> Outcome {
        self.zoom_about_center(self.config.zoom_step)
    }

    pub fn scale_down(&mut self) -> Outcome {
        self.zoom_about_center(1.0 / self.config.zoom_step)
    }

    fn zoom_about_center(&mut self, factor: f64) -> Outcome {
        let vp = self.config.viewport;
        self.transform
            .zoom(factor, Coords::new(vp.width / 2.0, vp.height / 2.0));
        self.render();
        Outcome::Zoomed {
            scale: self.transform.scale_factor(),
        }
    }

    /// Update the device size used as the zoom pivot.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.config.viewport = viewport;
        self.render();
    }

    // ─── Layout-wide operations ──────────────────────────────────────────

    /// Remove every selected seat.
    pub fn delete_selected(&mut self) -> Outcome {
        let ids = self.remove_where(Seat::is_selected);
        self.render();
        Outcome::SeatsDeleted { ids }
    }

    /// Remove every seat fully inside `area`.
    pub fn delete_seats_in_area(&mut self, area: Area) -> Outcome {
        let ids = self.remove_where(|s| s.rect.is_inside_area(&area));
        self.render();
        Outcome::SeatsDeleted { ids }
    }

    /// Remove all seats.
    pub fn clear_all(&mut self) -> Outcome {
        let ids = self.remove_where(|_| true);
        self.render();
        Outcome::SeatsDeleted { ids }
    }

    pub fn select_all(&mut self) -> Outcome {
        self.set_selection(true)
    }

    pub fn deselect_all(&mut self) -> Outcome {
        self.set_selection(false)
    }

    /// Attach booking metadata to a seat. Returns `false` for unknown ids.
    pub fn set_reservation(&mut self, id: SeatId, reservation: Reservation) -> bool {
        match self.seats.iter_mut().find(|s| s.id() == id) {
            Some(seat) => {
                seat.reservation = reservation;
                true
            }
            None => false,
        }
    }

    // ─── Collision ───────────────────────────────────────────────────────

    /// Would moving every selected seat by `delta` land one of them on an
    /// unselected seat's grid cell? Returns the first seat in the way.
    ///
    /// All-or-nothing: a single collision blocks the whole group.
    pub fn is_overlapped(&self, delta: Coords) -> Option<SeatId> {
        self.seats
            .iter()
            .filter(|s| s.is_selected())
            .find_map(|moving| {
                let target = moving.left_top() + delta;
                self.seats
                    .iter()
                    .filter(|s| !s.is_selected())
                    .find(|s| s.left_top().same_cell(target, self.config.place_size))
                    .map(Seat::id)
            })
    }

    // ─── Export ──────────────────────────────────────────────────────────

    pub fn layout(&self) -> LayoutExport {
        LayoutExport::from_seats(&self.seats)
    }

    /// `{"seats":[...]}` in layout order.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.layout().to_json()
    }

    // ─── Internals ───────────────────────────────────────────────────────

    fn new_rect(&self, cell: Coords) -> Rect {
        let palette = &self.config.palette;
        Rect::new(
            cell.x,
            cell.y,
            self.config.seat_size,
            self.config.seat_size,
            palette.seat,
            palette.seat_selected,
        )
    }

    /// Rebuild `new_seats` from scratch for the current drag area.
    fn propose_seats(&mut self) {
        let step = self.config.place_size;
        let area = self.selected_area;
        let mut proposals = Vec::new();
        let mut skipped = 0;
        for cell in area.grid_cells(step) {
            if occupant_at(&self.seats, cell, step).is_some() {
                skipped += 1;
            } else {
                proposals.push(self.new_rect(cell));
            }
        }
        log::trace!("proposed {} seats in {area:?}, {skipped} busy", proposals.len());
        self.new_seats = proposals;
        self.skipped_cells = skipped;
    }

    fn commit_proposals(&mut self) -> Outcome {
        let skipped = std::mem::take(&mut self.skipped_cells);
        let mut ids = Vec::with_capacity(self.new_seats.len());
        for rect in std::mem::take(&mut self.new_seats) {
            let id = self.ids.allocate();
            self.seats.push(Seat::new(id, rect));
            ids.push(id);
        }
        Outcome::SeatsCreated { ids, skipped }
    }

    /// Drag vector snapped to the placement grid.
    fn move_vector(&self) -> Coords {
        (self.drag_end - self.drag_start).round_to_scale(self.config.place_size)
    }

    /// Repaint with selected seats shown at `delta` and the rest in place.
    fn preview_group_move(&mut self, delta: Coords) {
        let label = self.mode_label();
        self.transform.reset_for_frame(&mut self.renderer);
        for seat in &mut self.seats {
            if seat.is_selected() {
                seat.rect.move_on(delta, false, &mut self.renderer);
            } else {
                seat.draw(&mut self.renderer);
            }
        }
        let overlay = FrameOverlay {
            selection: None,
            label: label.as_deref(),
        };
        paint_overlay(&mut self.renderer, &self.transform, &self.config.palette, overlay);
    }

    fn finish_group_move(&mut self) -> Outcome {
        let delta = self.move_vector();
        if delta.is_zero() {
            self.seats.iter_mut().for_each(|s| s.rect.clear_preview());
            return Outcome::Nothing;
        }
        if let Some(blocked_by) = self.is_overlapped(delta) {
            log::debug!("group move by {delta:?} blocked by seat {blocked_by}");
            self.seats.iter_mut().for_each(|s| s.rect.clear_preview());
            return Outcome::MoveRejected { delta, blocked_by };
        }
        let step = self.config.place_size;
        let mut moved = Vec::new();
        for seat in self.seats.iter_mut().filter(|s| s.is_selected()) {
            seat.rect.move_on(delta, true, &mut self.renderer);
            seat.rect.snap_to_grid(step);
            moved.push(seat.id());
        }
        Outcome::MoveCommitted { delta, moved }
    }

    fn abandon_gesture(&mut self) {
        log::debug!("abandoning gesture in {:?}", self.mode);
        self.dragging = false;
        self.new_seats.clear();
        self.skipped_cells = 0;
        self.seats.iter_mut().for_each(|s| s.rect.clear_preview());
    }

    /// Remove matching seats, keeping the relative order of the rest.
    fn remove_where(&mut self, pred: impl Fn(&Seat) -> bool) -> Vec<SeatId> {
        let mut removed = Vec::new();
        self.seats.retain(|s| {
            if pred(s) {
                removed.push(s.id());
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            log::debug!("removed {} seats", removed.len());
        }
        removed
    }

    fn set_selection(&mut self, selected: bool) -> Outcome {
        let ids: Vec<SeatId> = self
            .seats
            .iter_mut()
            .filter(|s| s.is_selected() != selected)
            .map(|s| {
                s.set_selected(selected);
                s.id()
            })
            .collect();
        self.render();
        Outcome::SelectionToggled { ids }
    }

    fn mode_label(&self) -> Option<String> {
        self.config
            .show_mode_label
            .then(|| format!("Mode: {}", self.mode.label()))
    }

    /// Full repaint of the current state.
    fn render(&mut self) {
        let label = self.mode_label();
        let selection = (self.dragging && matches!(self.mode, Mode::Select | Mode::Delete))
            .then_some(self.selected_area);
        let overlay = FrameOverlay {
            selection,
            label: label.as_deref(),
        };
        paint_layout(
            &mut self.renderer,
            &self.transform,
            &self.seats,
            &self.new_seats,
            &self.config.palette,
            overlay,
        );
    }
}
