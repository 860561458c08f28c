//! Input abstraction layer.
//!
//! Normalizes pointer gestures from whatever drag/tap recognizer the host
//! uses into a `GestureEvent` consumed by the selection engine. Positions
//! are device pixels relative to the canvas (the host subtracts the
//! canvas offset).

/// Modifier keys held when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };
}

/// A normalized gesture event.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureEvent {
    /// Pointer pressed and started moving.
    DragStart { x: f64, y: f64, modifiers: Modifiers },

    /// Pointer moved while dragging.
    DragMove { x: f64, y: f64 },

    /// Pointer released after a drag.
    DragEnd,

    /// Press and release without movement.
    Tap { x: f64, y: f64 },

    /// Pointer left the tracking surface. Ends any drag in flight.
    Leave,
}

impl GestureEvent {
    pub fn drag_start(x: f64, y: f64, shift: bool) -> Self {
        Self::DragStart {
            x,
            y,
            modifiers: Modifiers {
                shift,
                ..Modifiers::NONE
            },
        }
    }

    pub fn drag_move(x: f64, y: f64) -> Self {
        Self::DragMove { x, y }
    }

    pub fn tap(x: f64, y: f64) -> Self {
        Self::Tap { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_start_helper_sets_shift_only() {
        let e = GestureEvent::drag_start(1.0, 2.0, true);
        assert_eq!(
            e,
            GestureEvent::DragStart {
                x: 1.0,
                y: 2.0,
                modifiers: Modifiers::SHIFT
            }
        );
    }

    #[test]
    fn constructors_carry_device_position() {
        assert_eq!(GestureEvent::drag_move(3.0, 4.0), GestureEvent::DragMove { x: 3.0, y: 4.0 });
        assert_eq!(GestureEvent::tap(5.0, 6.0), GestureEvent::Tap { x: 5.0, y: 6.0 });
        assert_ne!(Modifiers::SHIFT, Modifiers::NONE);
    }
}
