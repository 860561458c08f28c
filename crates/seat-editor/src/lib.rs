//! Interaction layer for the seat layout editor.
//!
//! Gestures and key presses come in, the [`SeatSelector`] interprets them
//! according to the current [`Mode`] and repaints through a
//! [`seat_core::Renderer`].

pub mod input;
pub mod mode;
pub mod selector;
pub mod shortcuts;

pub use input::{GestureEvent, Modifiers};
pub use mode::Mode;
pub use selector::{Outcome, SeatSelector};
pub use shortcuts::{ShortcutAction, ShortcutMap};
