//! Stepper value core
//!
//! This module owns everything a snapping stepper knows about its number: the
//! range, the step, the wrap/continuous/autorepeat flags, change notification and
//! the label text. Gesture recognition and rendering live in the host toolkit,
//! which forwards input here and renders what comes back.
//!
//! # Architecture
//!
//! - `ValueController`: single writer of the value; enforces the range invariants
//! - `BoundingPolicy`: clamp or saturating wrap for out-of-range values
//! - `NotificationGate`: decides which updates reach the change callback
//! - `display`: label text derivation
//!
//! # Event Flow
//!
//! ```text
//! host input → update_value → BoundingPolicy → NotificationGate
//!                                                      ↓
//!                                  value_changed_block(new value) → host
//! ```
//!
//! # Notification Rules
//!
//! 1. An update whose bounded value equals the last delivered value never fires.
//! 2. With `continuous` on, every other update fires immediately.
//! 3. With `continuous` off, an update fires when it is `finished`, or when it is
//!    the first delivery of a new streak (one drag gesture).
//!
//! Direct assignment (`set_value`) and bound changes skip the gate: they fire
//! exactly when the stored value moves, and they close any open streak.
//!
//! # Example Usage
//!
//! ```
//! use snapping_stepper::stepper::ValueController;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let changes = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&changes);
//!
//! let mut stepper = ValueController::new();
//! stepper.set_thumb_text(None);
//! stepper.set_value_changed_block(move |_| counter.set(counter.get() + 1));
//!
//! stepper.set_value(105.0);
//! assert_eq!(stepper.value(), 100.0);
//! assert_eq!(stepper.display_text(), "100");
//! assert_eq!(changes.get(), 1);
//! ```

pub mod bounds;
pub mod controller;
pub mod display;
pub mod notify;

pub use bounds::BoundingPolicy;
pub use controller::ValueController;
pub use display::{format_value, thumb_label_text};
pub use notify::{NotificationGate, ValueChangedBlock};
