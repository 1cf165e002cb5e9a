//! Drag session: one touch-down → release interaction on the thumb
//!
//! The host's gesture recognizer reports thumb displacement normalized to
//! `[-1, 1]` (0 is the resting centre, ±1 the track ends). Two modes:
//!
//! - **Snapping** (`autorepeat` off): the value follows the thumb, snapping to
//!   whole steps away from the value the drag started on.
//! - **Autorepeat** (`autorepeat` on): holding the thumb off-centre repeats steps
//!   in that direction. The host drives repetition by calling [`DragSession::tick`]
//!   after each [`DragSession::repeat_interval`]; the further the thumb, the
//!   faster the repeat.
//!
//! Every move is a non-finished update; [`DragSession::end`] issues the finished one.

use crate::stepper::ValueController;
use std::time::Duration;
use tracing::debug;

/// Steps reachable by dragging from the centre to either track end in snapping mode
pub const SNAP_STEPS: f64 = 10.0;

/// Offsets closer to the centre than this do not repeat
pub const DEAD_ZONE: f64 = 0.1;

/// Repeat interval just outside the dead zone
pub const SLOWEST_REPEAT: Duration = Duration::from_millis(500);

/// Repeat interval at a track end
pub const FASTEST_REPEAT: Duration = Duration::from_millis(50);

/// How a drag turns into value updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Value follows the thumb in whole steps
    Snapping,
    /// Held offset repeats steps on host ticks
    Autorepeat,
}

/// State of one drag gesture
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    mode: DragMode,
    start_value: f64,
    offset: f64,
}

impl DragSession {
    /// Start a drag on touch-down
    pub fn begin(controller: &ValueController) -> Self {
        let mode = if controller.autorepeat() {
            DragMode::Autorepeat
        } else {
            DragMode::Snapping
        };
        debug!(
            "Drag started at {} ({:?} mode)",
            controller.value(),
            mode
        );

        Self {
            mode,
            start_value: controller.value(),
            offset: 0.0,
        }
    }

    /// Mode chosen when the drag began
    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// Current normalized thumb offset
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Report a thumb move
    pub fn drag_to(&mut self, controller: &mut ValueController, offset: f64) {
        self.offset = if offset.is_nan() {
            0.0
        } else {
            offset.clamp(-1.0, 1.0)
        };

        if self.mode == DragMode::Snapping {
            let steps = (self.offset * SNAP_STEPS).round();
            controller.update_value(self.start_value + steps * controller.step_value(), false);
        }
    }

    /// Whether the thumb is held far enough off-centre to repeat
    pub fn is_repeating(&self) -> bool {
        self.mode == DragMode::Autorepeat && self.offset.abs() >= DEAD_ZONE
    }

    /// Delay before the host should call [`tick`](Self::tick) again
    ///
    /// `None` while the session is not repeating.
    pub fn repeat_interval(&self) -> Option<Duration> {
        if !self.is_repeating() {
            return None;
        }

        let reach = (self.offset.abs() - DEAD_ZONE) / (1.0 - DEAD_ZONE);
        let span = (SLOWEST_REPEAT - FASTEST_REPEAT).as_secs_f64();
        Some(FASTEST_REPEAT + Duration::from_secs_f64(span * (1.0 - reach)))
    }

    /// Host timer tick; applies one step when repeating
    ///
    /// Returns whether a step was applied.
    pub fn tick(&mut self, controller: &mut ValueController) -> bool {
        if !self.is_repeating() {
            return false;
        }

        if self.offset > 0.0 {
            controller.increment(false);
        } else {
            controller.decrement(false);
        }
        true
    }

    /// Release: issue the finished update for the value the drag settled on
    pub fn end(self, controller: &mut ValueController) {
        debug!(
            "Drag ended at {} (started at {})",
            controller.value(),
            self.start_value
        );
        controller.update_value(controller.value(), true);
    }
}
