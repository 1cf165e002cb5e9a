//! `snapping-stepper` - value core for a snapping stepper control
//!
//! A snapping stepper pairs a draggable thumb with a label showing a number held
//! inside `[minimum, maximum]`. This crate owns the number: bounding (clamp or
//! saturating wrap), change notification (continuous or start/end of a drag) and
//! the label text. The host toolkit owns gestures and drawing, forwards input via
//! `ValueController::update_value`, and receives changes through a single callback.
//!
//! # Modules
//!
//! - `stepper`: `ValueController` and its bounding, notification and display parts
//! - `input`: drag sessions turning thumb offsets and timer ticks into updates
//! - `config`: serializable configuration and a JSON loader
//! - `script`: line-based command scripts used by the demo binary

// Module declarations
pub mod config;
pub mod error;
pub mod input;
pub mod script;
pub mod stepper;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{Result, StepperError};
pub use stepper::ValueController;
