//! Change-notification coalescing
//!
//! The gate decides, for each interactive update, whether the change callback
//! fires. Direct assignments and bound changes bypass it and only move its
//! baseline, since they notify whenever the stored value changes.
//! It owns the two pieces of hidden state that drive the contract:
//!
//! - `last_notified`: the value listeners last saw. An update that lands on it
//!   again is suppressed in every mode.
//! - `streak_notified`: set once a non-finished update has fired, cleared when a
//!   finished update fires. In non-continuous mode a non-finished update only
//!   fires while this bit is clear, which yields one notification at the start of
//!   a drag and one at release.

/// Single-slot change callback, invoked with the new value
pub type ValueChangedBlock = Box<dyn FnMut(f64)>;

/// Decides which updates reach the change callback
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationGate {
    last_notified: f64,
    streak_notified: bool,
}

impl NotificationGate {
    /// Create a gate whose baseline is the controller's initial value
    pub fn new(initial_value: f64) -> Self {
        Self {
            last_notified: initial_value,
            streak_notified: false,
        }
    }

    /// Value listeners last received (or the initial value if nothing fired yet)
    pub fn last_notified(&self) -> f64 {
        self.last_notified
    }

    /// Whether the current streak has already delivered its opening notification
    pub fn streak_notified(&self) -> bool {
        self.streak_notified
    }

    /// Record an update and report whether it must be delivered
    ///
    /// Returns `true` when the caller should invoke the callback with `value`.
    pub fn admit(&mut self, value: f64, continuous: bool, finished: bool) -> bool {
        if value == self.last_notified {
            return false;
        }

        let fire = continuous || finished || !self.streak_notified;
        if fire {
            self.last_notified = value;
            self.streak_notified = !finished;
        }
        fire
    }

    /// Move the baseline to a value delivered (or deliberately skipped) outside
    /// the gate, closing any open streak
    pub fn rebase(&mut self, value: f64) {
        self.last_notified = value;
        self.streak_notified = false;
    }
}
