//! Pointer input handling.

pub mod drag;

pub use drag::{DragDelta, DragGesture, DragInputAdapter, GestureEnd};
