/// Interaction mode. Decides how a gesture is interpreted.
///
/// `Draw`, `Select` and `Delete` are chosen by the user. `DragSeats` is
/// entered only when a Select drag starts on an already-selected seat, and
/// `DragCanvas` only while the pan key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Draw,
    Select,
    DragSeats,
    Delete,
    DragCanvas,
}

impl Mode {
    /// Whether `change_mode` accepts this mode.
    pub fn is_external(&self) -> bool {
        matches!(self, Mode::Draw | Mode::Select | Mode::Delete)
    }

    /// Human-readable name shown in the mode label.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Draw => "Draw",
            Mode::Select => "Select",
            Mode::DragSeats => "Drag seats",
            Mode::Delete => "Delete",
            Mode::DragCanvas => "Move canvas",
        }
    }

    /// Stable lowercase name used across the JS bridge.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Draw => "draw",
            Mode::Select => "select",
            Mode::DragSeats => "drag-seats",
            Mode::Delete => "delete",
            Mode::DragCanvas => "drag-canvas",
        }
    }

    /// Parse a user-selectable mode name. Internal modes are not accepted.
    pub fn from_name(name: &str) -> Option<Mode> {
        match name {
            "draw" => Some(Mode::Draw),
            "select" => Some(Mode::Select),
            "delete" => Some(Mode::Delete),
            _ => None,
        }
    }
}
