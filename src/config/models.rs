//! Configuration data models
//!
//! This module defines the data structures used to configure a stepper.

use crate::error::{Result, StepperError};
use serde::{Deserialize, Serialize};

/// Configurable properties of a stepper, as a host would set them at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StepperConfig {
    /// Lower inclusive bound
    pub minimum_value: f64,
    /// Upper inclusive bound
    pub maximum_value: f64,
    /// Increment/decrement granularity
    pub step_value: f64,
    /// Initial value (bounded on apply)
    pub value: f64,
    /// Out-of-range values jump to the opposite bound
    pub wraps: bool,
    /// Notify on every change instead of at streak start and end
    pub continuous: bool,
    /// Held drags repeat steps
    pub autorepeat: bool,
    /// Label override; `None` shows the formatted value
    pub thumb_text: Option<String>,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            minimum_value: 0.0,
            maximum_value: 100.0,
            step_value: 1.0,
            value: 0.0,
            wraps: false,
            continuous: true,
            autorepeat: true,
            thumb_text: Some(String::new()),
        }
    }
}

impl StepperConfig {
    /// Reject values the controller cannot hold
    ///
    /// Inverted bounds are accepted: the controller resolves them the same way it
    /// resolves inverted setter calls.
    pub fn validate(&self) -> Result<()> {
        let numbers = [
            ("minimumValue", self.minimum_value),
            ("maximumValue", self.maximum_value),
            ("stepValue", self.step_value),
            ("value", self.value),
        ];
        for (name, number) in numbers {
            if !number.is_finite() {
                return Err(StepperError::InvalidConfig(format!(
                    "{name} must be finite, got {number}"
                )));
            }
        }

        if self.step_value < 0.0 {
            return Err(StepperError::InvalidConfig(format!(
                "stepValue must not be negative, got {}",
                self.step_value
            )));
        }

        Ok(())
    }
}
