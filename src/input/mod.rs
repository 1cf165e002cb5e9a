//! Input translation module
//!
//! Turns host gesture callbacks into controller updates. The host owns the
//! gesture recognizer and the timer; this module only decides what each event
//! means for the value.

pub mod drag;

pub use drag::{DragMode, DragSession};
