//! WASM bridge for the seat layout editor.
//!
//! Compiled via `wasm-pack build --target web`. The page wires its drag/tap
//! recognizer and keyboard listeners to a `SeatCanvas`, which drives the
//! engine and paints straight onto the `<canvas>` it was created with.

mod render2d;

use render2d::Canvas2dRenderer;
use seat_core::{EngineConfig, Reservation, SeatId, Viewport};
use seat_editor::{GestureEvent, Mode, Modifiers, Outcome, SeatSelector, ShortcutMap};
use serde_json::{Value, json};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// The WASM-facing seat layout controller.
///
/// Every gesture method repaints the canvas before returning.
#[wasm_bindgen]
pub struct SeatCanvas {
    engine: SeatSelector<Canvas2dRenderer>,
    last_outcome: Outcome,
}

#[wasm_bindgen]
impl SeatCanvas {
    /// Attach to `canvas`. `config_json` is an optional `EngineConfig`
    /// object (camelCase keys, every key optional).
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<SeatCanvas, JsValue> {
        console_error_panic_hook_setup();

        let ctx = canvas
            .get_context("2d")?
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| JsValue::from_str("Wrong context type"))?;

        let mut config = match config_json.as_deref() {
            Some(json) => EngineConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?,
            None => EngineConfig::default(),
        };
        let (width, height) = (f64::from(canvas.width()), f64::from(canvas.height()));
        config.viewport = Viewport { width, height };

        let renderer = Canvas2dRenderer::new(ctx, width, height);
        let engine = SeatSelector::new(renderer, config).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            engine,
            last_outcome: Outcome::Nothing,
        })
    }

    /// Track a canvas resize (device pixels).
    pub fn resize(&mut self, width: f64, height: f64) {
        self.engine.renderer_mut().resize(width, height);
        self.engine.set_viewport(Viewport { width, height });
    }

    // ─── Gestures ────────────────────────────────────────────────────────
    //
    // Coordinates are relative to the canvas. Each returns true if the
    // layout (seats, positions, selection) changed.

    pub fn drag_start(&mut self, x: f64, y: f64, shift: bool) -> bool {
        self.dispatch(GestureEvent::DragStart {
            x,
            y,
            modifiers: Modifiers {
                shift,
                ..Modifiers::NONE
            },
        })
    }

    pub fn drag_move(&mut self, x: f64, y: f64) -> bool {
        self.dispatch(GestureEvent::drag_move(x, y))
    }

    pub fn drag_end(&mut self) -> bool {
        self.dispatch(GestureEvent::DragEnd)
    }

    pub fn tap(&mut self, x: f64, y: f64) -> bool {
        self.dispatch(GestureEvent::tap(x, y))
    }

    /// Pointer left the canvas. Ends a drag in flight.
    pub fn leave(&mut self) -> bool {
        self.dispatch(GestureEvent::Leave)
    }

    /// What the most recent call did, as JSON:
    /// `{"kind":"<outcome>", ...details}`.
    pub fn last_outcome(&self) -> String {
        outcome_json(&self.last_outcome).to_string()
    }

    // ─── Modes ───────────────────────────────────────────────────────────

    /// Switch to `"draw"`, `"select"` or `"delete"`. Returns false for any
    /// other name.
    pub fn change_mode(&mut self, name: &str) -> bool {
        match Mode::from_name(name) {
            Some(mode) => {
                self.record(|engine| engine.change_mode(mode));
                true
            }
            None => {
                log::warn!("unknown mode {name:?}");
                false
            }
        }
    }

    pub fn get_mode_name(&self) -> String {
        self.engine.mode().name().to_string()
    }

    // ─── View ────────────────────────────────────────────────────────────

    pub fn scale_up(&mut self) {
        self.record(SeatSelector::scale_up);
    }

    pub fn scale_down(&mut self) {
        self.record(SeatSelector::scale_down);
    }

    // ─── Layout operations ───────────────────────────────────────────────

    /// Delete the selected seats. Returns true if any was deleted.
    pub fn delete_selected(&mut self) -> bool {
        self.record(SeatSelector::delete_selected)
    }

    pub fn select_all(&mut self) -> bool {
        self.record(SeatSelector::select_all)
    }

    pub fn deselect_all(&mut self) -> bool {
        self.record(SeatSelector::deselect_all)
    }

    pub fn clear_all(&mut self) -> bool {
        self.record(SeatSelector::clear_all)
    }

    /// Ids of the selected seats as a JSON array of strings.
    pub fn get_selected_ids(&self) -> String {
        let ids: Vec<String> = self
            .engine
            .selected_ids()
            .iter()
            .map(ToString::to_string)
            .collect();
        json!(ids).to_string()
    }

    /// Attach booking metadata to a seat. `json` is a `Reservation`
    /// object (`rowNumber`, `placeInRowNumber`, `isReserved`, `reservedBy`).
    pub fn set_reservation_json(&mut self, seat_id: &str, json: &str) -> bool {
        let Ok(id) = seat_id.parse::<u64>() else {
            return false;
        };
        match serde_json::from_str::<Reservation>(json) {
            Ok(reservation) => self.engine.set_reservation(SeatId::new(id), reservation),
            Err(e) => {
                log::warn!("invalid reservation for seat {seat_id}: {e}");
                false
            }
        }
    }

    // ─── Keyboard Shortcut API ───────────────────────────────────────────

    /// Handle a key-down event. Returns a JSON string:
    /// `{"changed":bool, "action":"<action_name>", "mode":"<mode_name>"}`
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> String {
        let action = ShortcutMap::resolve(key, ctrl, shift, alt, meta);
        self.key_result(action)
    }

    /// Handle a key-up event. Same JSON shape as `handle_key`.
    pub fn handle_key_up(&mut self, key: &str) -> String {
        let action = ShortcutMap::resolve_release(key);
        self.key_result(action)
    }

    // ─── Export ──────────────────────────────────────────────────────────

    /// The layout as a JSON string: `{"seats":[...]}`.
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.engine
            .to_json()
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// The layout as a plain JS object.
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        js_sys::JSON::parse(&self.to_json()?)
    }
}

impl SeatCanvas {
    fn dispatch(&mut self, event: GestureEvent) -> bool {
        self.record(|engine| engine.handle(&event))
    }

    fn record(&mut self, op: impl FnOnce(&mut SeatSelector<Canvas2dRenderer>) -> Outcome) -> bool {
        self.last_outcome = op(&mut self.engine);
        self.last_outcome.changed_layout()
    }

    fn key_result(&mut self, action: Option<seat_editor::ShortcutAction>) -> String {
        let Some(action) = action else {
            return json!({
                "changed": false,
                "action": "none",
                "mode": self.engine.mode().name(),
            })
            .to_string();
        };
        let changed = self.record(|engine| engine.apply_shortcut(action));
        json!({
            "changed": changed,
            "action": action.name(),
            "mode": self.engine.mode().name(),
        })
        .to_string()
    }
}

fn id_strings(ids: &[SeatId]) -> Vec<String> {
    ids.iter().map(ToString::to_string).collect()
}

fn outcome_json(outcome: &Outcome) -> Value {
    match outcome {
        Outcome::Nothing => json!({ "kind": "nothing" }),
        Outcome::Redrawn => json!({ "kind": "redrawn" }),
        Outcome::SeatsProposed { proposed, skipped } => {
            json!({ "kind": "seatsProposed", "proposed": proposed, "skipped": skipped })
        }
        Outcome::SeatsCreated { ids, skipped } => {
            json!({ "kind": "seatsCreated", "ids": id_strings(ids), "skipped": skipped })
        }
        Outcome::SelectionToggled { ids } => {
            json!({ "kind": "selectionToggled", "ids": id_strings(ids) })
        }
        Outcome::MovePreviewed { delta } => json!({ "kind": "movePreviewed", "delta": delta }),
        Outcome::MoveCommitted { delta, moved } => {
            json!({ "kind": "moveCommitted", "delta": delta, "moved": id_strings(moved) })
        }
        Outcome::MoveRejected { delta, blocked_by } => json!({
            "kind": "moveRejected",
            "delta": delta,
            "blockedBy": blocked_by.to_string(),
        }),
        Outcome::SeatsDeleted { ids } => json!({ "kind": "seatsDeleted", "ids": id_strings(ids) }),
        Outcome::CanvasPanned { dx, dy } => json!({ "kind": "canvasPanned", "dx": dx, "dy": dy }),
        Outcome::Zoomed { scale } => json!({ "kind": "zoomed", "scale": scale }),
        Outcome::ModeChanged { from, to } => {
            json!({ "kind": "modeChanged", "from": from.name(), "to": to.name() })
        }
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("seat layout WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
