//! Value controller implementation
//!
//! The controller is the only writer of a stepper's value. Every setter leaves
//! `minimum_value <= value <= maximum_value` with `minimum_value <= maximum_value`.

use crate::config::StepperConfig;
use crate::stepper::bounds::BoundingPolicy;
use crate::stepper::display::thumb_label_text;
use crate::stepper::notify::{NotificationGate, ValueChangedBlock};
use std::fmt;
use tracing::{debug, warn};

/// Value core of a snapping stepper
pub struct ValueController {
    value: f64,
    minimum_value: f64,
    maximum_value: f64,
    step_value: f64,
    wraps: bool,
    continuous: bool,
    autorepeat: bool,
    thumb_text: Option<String>,
    gate: NotificationGate,
    value_changed_block: Option<ValueChangedBlock>,
}

impl Default for ValueController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValueController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueController")
            .field("value", &self.value)
            .field("minimum_value", &self.minimum_value)
            .field("maximum_value", &self.maximum_value)
            .field("step_value", &self.step_value)
            .field("wraps", &self.wraps)
            .field("continuous", &self.continuous)
            .field("autorepeat", &self.autorepeat)
            .field("thumb_text", &self.thumb_text)
            .field("gate", &self.gate)
            .field("has_value_changed_block", &self.value_changed_block.is_some())
            .finish()
    }
}

impl ValueController {
    /// Create a controller with the default range `[0, 100]`, step 1, value 0
    pub fn new() -> Self {
        Self::from_config(&StepperConfig::default())
    }

    /// Create a controller from configuration
    ///
    /// Bounds are applied minimum first, so an inverted pair resolves to the
    /// maximum. No notification fires while building.
    pub fn from_config(config: &StepperConfig) -> Self {
        let mut controller = Self {
            value: 0.0,
            minimum_value: 0.0,
            maximum_value: 0.0,
            step_value: config.step_value,
            wraps: config.wraps,
            continuous: config.continuous,
            autorepeat: config.autorepeat,
            thumb_text: config.thumb_text.clone(),
            gate: NotificationGate::new(0.0),
            value_changed_block: None,
        };

        controller.set_minimum_value(config.minimum_value);
        controller.set_maximum_value(config.maximum_value);
        controller.set_value(config.value);
        controller.gate.rebase(controller.value);

        debug!("Created stepper controller: {:?}", controller);
        controller
    }

    /// Snapshot the configurable properties
    pub fn config(&self) -> StepperConfig {
        StepperConfig {
            minimum_value: self.minimum_value,
            maximum_value: self.maximum_value,
            step_value: self.step_value,
            value: self.value,
            wraps: self.wraps,
            continuous: self.continuous,
            autorepeat: self.autorepeat,
            thumb_text: self.thumb_text.clone(),
        }
    }

    /// Current value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Assign a value directly
    ///
    /// Treated as a completed interaction: listeners hear about it whenever the
    /// bounded value differs from the stored one, and any open streak ends.
    pub fn set_value(&mut self, value: f64) {
        if value.is_nan() {
            warn!("Ignoring NaN stepper value");
            return;
        }
        self.assign(value);
    }

    /// Feed an interactive update, e.g. one drag tick
    ///
    /// `finished` is true on the update that ends the interaction (release).
    pub fn update_value(&mut self, value: f64, finished: bool) {
        if value.is_nan() {
            warn!("Ignoring NaN stepper value");
            return;
        }

        let bounded = self.bound(value);
        self.value = bounded;

        if self.gate.admit(bounded, self.continuous, finished) {
            self.notify(bounded);
        }
    }

    /// Lower bound
    pub fn minimum_value(&self) -> f64 {
        self.minimum_value
    }

    /// Set the lower bound, pulling the upper bound up if it would be passed
    pub fn set_minimum_value(&mut self, minimum_value: f64) {
        if minimum_value.is_nan() {
            warn!("Ignoring NaN minimum value");
            return;
        }

        self.minimum_value = minimum_value;
        if minimum_value > self.maximum_value {
            debug!("Minimum {} passed maximum, moving maximum", minimum_value);
            self.maximum_value = minimum_value;
        }
        self.rebound();
    }

    /// Upper bound
    pub fn maximum_value(&self) -> f64 {
        self.maximum_value
    }

    /// Set the upper bound, pulling the lower bound down if it would be passed
    pub fn set_maximum_value(&mut self, maximum_value: f64) {
        if maximum_value.is_nan() {
            warn!("Ignoring NaN maximum value");
            return;
        }

        self.maximum_value = maximum_value;
        if maximum_value < self.minimum_value {
            debug!("Maximum {} passed minimum, moving minimum", maximum_value);
            self.minimum_value = maximum_value;
        }
        self.rebound();
    }

    /// Step granularity
    pub fn step_value(&self) -> f64 {
        self.step_value
    }

    /// Set the step granularity
    pub fn set_step_value(&mut self, step_value: f64) {
        if step_value.is_nan() {
            warn!("Ignoring NaN step value");
            return;
        }

        self.step_value = step_value;
    }

    /// Add one step (subject to the bounding policy)
    pub fn increment(&mut self, finished: bool) {
        self.update_value(self.value + self.step_value, finished);
    }

    /// Remove one step (subject to the bounding policy)
    pub fn decrement(&mut self, finished: bool) {
        self.update_value(self.value - self.step_value, finished);
    }

    /// Whether out-of-range values wrap to the opposite bound
    pub fn wraps(&self) -> bool {
        self.wraps
    }

    /// Enable or disable wrapping
    pub fn set_wraps(&mut self, wraps: bool) {
        self.wraps = wraps;
    }

    /// Whether every change notifies immediately
    pub fn continuous(&self) -> bool {
        self.continuous
    }

    /// Select continuous or start/end notification
    pub fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    /// Whether held drags repeat steps
    pub fn autorepeat(&self) -> bool {
        self.autorepeat
    }

    /// Enable or disable held-drag repeat
    pub fn set_autorepeat(&mut self, autorepeat: bool) {
        self.autorepeat = autorepeat;
    }

    /// Label override, if any
    pub fn thumb_text(&self) -> Option<&str> {
        self.thumb_text.as_deref()
    }

    /// Set or clear the label override
    pub fn set_thumb_text(&mut self, thumb_text: Option<String>) {
        self.thumb_text = thumb_text;
    }

    /// Text the thumb label shows right now
    pub fn display_text(&self) -> String {
        thumb_label_text(self.thumb_text.as_deref(), self.value)
    }

    /// Install the change callback, replacing any previous one
    pub fn set_value_changed_block(&mut self, block: impl FnMut(f64) + 'static) {
        self.value_changed_block = Some(Box::new(block));
    }

    /// Remove the change callback
    pub fn clear_value_changed_block(&mut self) {
        self.value_changed_block = None;
    }

    fn policy(&self) -> BoundingPolicy {
        BoundingPolicy::from_wraps(self.wraps)
    }

    fn bound(&self, value: f64) -> f64 {
        let bounded = self.policy().apply(value, self.minimum_value, self.maximum_value);
        if bounded != value {
            debug!(
                "Bounded {} to {} in [{}, {}] (wraps: {})",
                value, bounded, self.minimum_value, self.maximum_value, self.wraps
            );
        }
        bounded
    }

    /// Store a finished value, notifying only if the stored value moves
    fn assign(&mut self, value: f64) {
        let bounded = self.bound(value);
        if bounded == self.value {
            return;
        }

        self.value = bounded;
        self.gate.rebase(bounded);
        self.notify(bounded);
    }

    /// Re-apply the bounding policy after a bound moved
    fn rebound(&mut self) {
        self.assign(self.value);
    }

    fn notify(&mut self, value: f64) {
        debug!("Stepper value changed to {}", value);
        if let Some(block) = self.value_changed_block.as_mut() {
            block(value);
        }
    }
}
