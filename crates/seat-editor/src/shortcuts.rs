//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. The map lives
//! in Rust so the browser bridge and native hosts share one binding table.
//!
//! - digits and letters switch modes (`1` draw, `2` select, `3` delete)
//! - holding space pans the canvas until it is released
//! - ⌘Delete clears the whole layout

use crate::mode::Mode;
use crate::selector::{Outcome, SeatSelector};
use seat_core::Renderer;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Mode switching ──
    ModeDraw,
    ModeSelect,
    ModeDelete,

    // ── Edit ──
    DeleteSelected,
    SelectAll,
    Deselect,
    /// Remove every seat (⌘Delete).
    ClearAll,

    // ── View ──
    ZoomIn,
    ZoomOut,
    PanStart,
    PanEnd,
}

impl ShortcutAction {
    /// Stable camelCase name reported to the host.
    pub fn name(self) -> &'static str {
        match self {
            ShortcutAction::ModeDraw => "modeDraw",
            ShortcutAction::ModeSelect => "modeSelect",
            ShortcutAction::ModeDelete => "modeDelete",
            ShortcutAction::DeleteSelected => "deleteSelected",
            ShortcutAction::SelectAll => "selectAll",
            ShortcutAction::Deselect => "deselect",
            ShortcutAction::ClearAll => "clearAll",
            ShortcutAction::ZoomIn => "zoomIn",
            ShortcutAction::ZoomOut => "zoomOut",
            ShortcutAction::PanStart => "panStart",
            ShortcutAction::PanEnd => "panEnd",
        }
    }
}

/// Resolves key events into shortcut actions.
///
/// Uses platform-aware modifier detection: on macOS `meta` is ⌘,
/// on other platforms `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key-down event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"1"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        if cmd {
            return match key {
                "a" | "A" => Some(ShortcutAction::SelectAll),
                "=" | "+" => Some(ShortcutAction::ZoomIn),
                "-" => Some(ShortcutAction::ZoomOut),
                "Delete" | "Backspace" => Some(ShortcutAction::ClearAll),
                _ => None,
            };
        }

        if shift {
            return None;
        }

        match key {
            "1" | "d" | "D" => Some(ShortcutAction::ModeDraw),
            "2" | "s" | "S" => Some(ShortcutAction::ModeSelect),
            "3" | "x" | "X" => Some(ShortcutAction::ModeDelete),
            "Delete" | "Backspace" => Some(ShortcutAction::DeleteSelected),
            "Escape" => Some(ShortcutAction::Deselect),
            " " => Some(ShortcutAction::PanStart),
            _ => None,
        }
    }

    /// Resolve a key-up event. Only the pan key has a release binding.
    pub fn resolve_release(key: &str) -> Option<ShortcutAction> {
        match key {
            " " => Some(ShortcutAction::PanEnd),
            _ => None,
        }
    }
}

impl<R: Renderer> SeatSelector<R> {
    /// Run the engine operation bound to `action`.
    pub fn apply_shortcut(&mut self, action: ShortcutAction) -> Outcome {
        log::debug!("shortcut {}", action.name());
        match action {
            ShortcutAction::ModeDraw => self.change_mode(Mode::Draw),
            ShortcutAction::ModeSelect => self.change_mode(Mode::Select),
            ShortcutAction::ModeDelete => self.change_mode(Mode::Delete),
            ShortcutAction::DeleteSelected => self.delete_selected(),
            ShortcutAction::SelectAll => self.select_all(),
            ShortcutAction::Deselect => self.deselect_all(),
            ShortcutAction::ClearAll => self.clear_all(),
            ShortcutAction::ZoomIn => self.scale_up(),
            ShortcutAction::ZoomOut => self.scale_down(),
            ShortcutAction::PanStart => self.begin_canvas_pan(),
            ShortcutAction::PanEnd => self.end_canvas_pan(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;
    use seat_core::EngineConfig;
    use seat_render::RecordingRenderer;

    #[test]
    fn resolve_mode_shortcuts() {
        assert_eq!(
            ShortcutMap::resolve("1", false, false, false, false),
            Some(ShortcutAction::ModeDraw)
        );
        assert_eq!(
            ShortcutMap::resolve("2", false, false, false, false),
            Some(ShortcutAction::ModeSelect)
        );
        assert_eq!(
            ShortcutMap::resolve("x", false, false, false, false),
            Some(ShortcutAction::ModeDelete)
        );
        assert_eq!(ShortcutMap::resolve("4", false, false, false, false), None);
    }

    #[test]
    fn resolve_cmd_shortcuts() {
        // ctrl on Linux/Windows
        assert_eq!(
            ShortcutMap::resolve("a", true, false, false, false),
            Some(ShortcutAction::SelectAll)
        );
        // meta on macOS
        assert_eq!(
            ShortcutMap::resolve("=", false, false, false, true),
            Some(ShortcutAction::ZoomIn)
        );
        assert_eq!(
            ShortcutMap::resolve("-", true, false, false, false),
            Some(ShortcutAction::ZoomOut)
        );
    }

    #[test]
    fn delete_plain_vs_cmd() {
        assert_eq!(
            ShortcutMap::resolve("Backspace", false, false, false, false),
            Some(ShortcutAction::DeleteSelected)
        );
        assert_eq!(
            ShortcutMap::resolve("Delete", false, false, false, true),
            Some(ShortcutAction::ClearAll)
        );
    }

    #[test]
    fn space_pans_until_release() {
        assert_eq!(
            ShortcutMap::resolve(" ", false, false, false, false),
            Some(ShortcutAction::PanStart)
        );
        assert_eq!(
            ShortcutMap::resolve_release(" "),
            Some(ShortcutAction::PanEnd)
        );
        assert_eq!(ShortcutMap::resolve_release("1"), None);
    }

    #[test]
    fn apply_runs_engine_operation() {
        let mut e =
            SeatSelector::new(RecordingRenderer::new(), EngineConfig::with_grid(10.0)).unwrap();
        e.drag_start(0.0, 0.0, Modifiers::NONE);
        e.drag_move(20.0, 10.0);
        e.drag_end();

        e.apply_shortcut(ShortcutAction::SelectAll);
        assert_eq!(e.selected_ids().len(), 2);
        e.apply_shortcut(ShortcutAction::DeleteSelected);
        assert!(e.seats().is_empty());

        e.apply_shortcut(ShortcutAction::ModeSelect);
        assert_eq!(e.mode(), Mode::Select);
        e.apply_shortcut(ShortcutAction::PanStart);
        assert_eq!(e.mode(), Mode::DragCanvas);
        e.apply_shortcut(ShortcutAction::PanEnd);
        assert_eq!(e.mode(), Mode::Select);
    }
}
